use crate::config::RadarConfig;
use crate::math::fft::{fft_shift_rows, ifft_shift_rows, Fft2Helper};
use crate::math::stats::StatsHelper;
use crate::prelude::{RadarCube, RadarError, RadarResult, RangeDopplerMap};
use crate::telemetry::log::LogManager;
use ndarray::{Array1, Array2, ArrayView2};
use num_complex::Complex64;
use rustfft::FftDirection;

/// Floor applied by [`magnitude_db`] to empty cells.
pub const MAGNITUDE_FLOOR_DB: f64 = -240.0;

/// Range-Doppler stage; keeps its FFT plans while the frame shape stays the same.
pub struct RangeDopplerProcessor {
    forward: Option<Fft2Helper>,
    inverse: Option<Fft2Helper>,
    logger: LogManager,
}

impl RangeDopplerProcessor {
    pub fn new() -> Self {
        Self {
            forward: None,
            inverse: None,
            logger: LogManager::new("range_doppler"),
        }
    }

    /// 2D DFT over both axes, then Doppler recentering along the chirp axis.
    pub fn process(&mut self, cube: ArrayView2<Complex64>) -> RadarResult<RangeDopplerMap> {
        validate_shape(&cube, "radar cube")?;

        let fft = planned(&mut self.forward, cube.dim(), FftDirection::Forward);
        let spectrum = fft.transform(cube);
        let map = fft_shift_rows(&spectrum);

        let rms = StatsHelper::rms(map.as_slice().unwrap_or(&[]));
        self.logger.record(&format!(
            "range-Doppler map {}x{} RMS {:.4}",
            map.nrows(),
            map.ncols(),
            rms
        ));
        Ok(map)
    }

    /// Recovers the cube a map was computed from.
    pub fn invert(&mut self, map: ArrayView2<Complex64>) -> RadarResult<RadarCube> {
        validate_shape(&map, "range-Doppler map")?;

        let unshifted = ifft_shift_rows(&map.to_owned());
        let fft = planned(&mut self.inverse, map.dim(), FftDirection::Inverse);
        let scale = 1.0 / (map.len() as f64);
        let mut cube = fft.transform(unshifted.view());
        cube.mapv_inplace(|v| v * scale);
        Ok(cube)
    }

    pub fn cleanup(&mut self) {
        self.forward = None;
        self.inverse = None;
    }
}

impl Default for RangeDopplerProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_shape(grid: &ArrayView2<Complex64>, what: &str) -> RadarResult<()> {
    if grid.nrows() == 0 || grid.ncols() == 0 {
        return Err(RadarError::InvalidInput(format!(
            "{} must be non-empty, got shape {:?}",
            what,
            grid.dim()
        )));
    }
    Ok(())
}

fn planned(
    slot: &mut Option<Fft2Helper>,
    shape: (usize, usize),
    direction: FftDirection,
) -> &mut Fft2Helper {
    if slot.as_ref().map(Fft2Helper::shape) != Some(shape) {
        *slot = Some(Fft2Helper::new(shape.0, shape.1, direction));
    }
    slot.get_or_insert_with(|| Fft2Helper::new(shape.0, shape.1, direction))
}

/// One-shot range-Doppler transform of `radar_cube`.
pub fn process_radar_cube(radar_cube: &RadarCube) -> RadarResult<RangeDopplerMap> {
    RangeDopplerProcessor::new().process(radar_cube.view())
}

/// Inverse of [`process_radar_cube`].
pub fn invert_range_doppler(map: &RangeDopplerMap) -> RadarResult<RadarCube> {
    RangeDopplerProcessor::new().invert(map.view())
}

/// Log-magnitude image of a map, `20 log10 |x|`.
pub fn magnitude_db(map: &RangeDopplerMap) -> Array2<f64> {
    map.mapv(|v| {
        let magnitude = v.norm();
        if magnitude > 0.0 {
            (20.0 * magnitude.log10()).max(MAGNITUDE_FLOOR_DB)
        } else {
            MAGNITUDE_FLOOR_DB
        }
    })
}

/// Range in metres of each map column.
///
/// Column spacing follows the synthesizer's fast-time grid, which spreads
/// `num_samples` points over the whole chirp, so bin `k` sits at beat
/// frequency `k (num_samples - 1) / (num_samples t_chirp)`. Beat frequencies
/// past the sampling rate alias back and are not unwrapped here.
pub fn range_axis(config: &RadarConfig, num_samples: usize) -> Array1<f64> {
    if num_samples <= 1 {
        return Array1::zeros(num_samples);
    }
    let bin_hz = (num_samples - 1) as f64 / (num_samples as f64 * config.t_chirp);
    Array1::from_shape_fn(num_samples, |k| {
        k as f64 * bin_hz * config.c / (2.0 * config.slope)
    })
}

/// Radial velocity in m/s of each recentered map row; row `num_chirps / 2` is zero.
pub fn velocity_axis(config: &RadarConfig, num_chirps: usize) -> Array1<f64> {
    let bin_hz = 1.0 / (num_chirps as f64 * config.t_chirp);
    let center = (num_chirps / 2) as f64;
    Array1::from_shape_fn(num_chirps, |j| {
        (j as f64 - center) * bin_hz * config.c / (2.0 * config.fc)
    })
}
