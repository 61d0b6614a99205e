use crate::config::RadarConfig;
use crate::prelude::{RadarCube, RadarError, RadarResult, Target};
use crate::telemetry::log::LogManager;
use ndarray::{Array1, Array2};
use num_complex::Complex64;
use rand::Rng;
use rand_distr::StandardNormal;
use std::f64::consts::PI;

pub const DEFAULT_NOISE_LEVEL: f64 = 0.1;

/// Synthesizes the beat-signal cube for `targets` on a `num_chirps x num_samples` grid.
///
/// The fast-time axis always spans `[0, config.t_chirp]`, whatever the
/// requested sample count. Each target moves linearly in range across
/// chirps and contributes `rcs * exp(i(2π fb t + 2π fd t_c))` to every row.
/// When `noise_level > 0`, every cell receives complex Gaussian noise whose
/// real and imaginary parts each have standard deviation `noise_level`.
pub fn generate_radar_cube<R: Rng>(
    config: &RadarConfig,
    num_chirps: usize,
    num_samples: usize,
    targets: &[Target],
    noise_level: f64,
    rng: &mut R,
) -> RadarResult<RadarCube> {
    if num_chirps == 0 || num_samples == 0 {
        return Err(RadarError::InvalidConfiguration(format!(
            "cube dimensions must be positive, got {} chirps x {} samples",
            num_chirps, num_samples
        )));
    }
    if !noise_level.is_finite() || noise_level < 0.0 {
        return Err(RadarError::InvalidConfiguration(format!(
            "noise level must be a non-negative finite value, got {}",
            noise_level
        )));
    }

    let logger = LogManager::new("synthesis");
    let t = fast_time_axis(config, num_samples);
    let mut cube = Array2::<Complex64>::zeros((num_chirps, num_samples));

    for target in targets {
        // Doppler depends only on velocity, so it is fixed across chirps.
        let fd = 2.0 * target.velocity * config.fc / config.c;

        for (chirp_idx, mut row) in cube.outer_iter_mut().enumerate() {
            let t_c = chirp_idx as f64 * config.t_chirp;
            let r_t = target.range + target.velocity * t_c;
            let fb = config.slope * 2.0 * r_t / config.c;
            let phase_slow = 2.0 * PI * fd * t_c;

            for (cell, &t_fast) in row.iter_mut().zip(t.iter()) {
                let phase_fast = 2.0 * PI * fb * t_fast;
                *cell += Complex64::from_polar(target.rcs, phase_fast + phase_slow);
            }
        }
    }

    if noise_level > 0.0 {
        for cell in cube.iter_mut() {
            let re: f64 = rng.sample(StandardNormal);
            let im: f64 = rng.sample(StandardNormal);
            *cell += Complex64::new(re, im) * noise_level;
        }
    }

    logger.detail(&format!(
        "synthesized {}x{} cube from {} targets (noise {:.3})",
        num_chirps,
        num_samples,
        targets.len(),
        noise_level
    ));

    Ok(cube)
}

/// Full frame on the configuration's own `n_chirps x n_samples` grid.
pub fn synthesize_frame<R: Rng>(
    config: &RadarConfig,
    targets: &[Target],
    noise_level: f64,
    rng: &mut R,
) -> RadarResult<RadarCube> {
    generate_radar_cube(
        config,
        config.n_chirps,
        config.n_samples,
        targets,
        noise_level,
        rng,
    )
}

/// `num_samples` evenly spaced instants over `[0, t_chirp]`, endpoints included.
pub fn fast_time_axis(config: &RadarConfig, num_samples: usize) -> Array1<f64> {
    if num_samples <= 1 {
        return Array1::zeros(num_samples);
    }
    let step = config.t_chirp / (num_samples - 1) as f64;
    Array1::from_shape_fn(num_samples, |i| i as f64 * step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn config() -> &'static RadarConfig {
        RadarConfig::shared()
    }

    #[test]
    fn empty_scene_without_noise_is_all_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let cube = generate_radar_cube(config(), 16, 32, &[], 0.0, &mut rng).unwrap();
        assert_eq!(cube.dim(), (16, 32));
        assert!(cube.iter().all(|v| *v == Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_radar_cube(config(), 0, 10, &[], DEFAULT_NOISE_LEVEL, &mut rng)
            .unwrap_err();
        assert!(matches!(err, RadarError::InvalidConfiguration(_)));
        assert!(generate_radar_cube(config(), 10, 0, &[], 0.0, &mut rng).is_err());
    }

    #[test]
    fn negative_noise_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate_radar_cube(config(), 4, 4, &[], -0.5, &mut rng),
            Err(RadarError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn contributions_superpose() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = [Target::new(4.0, 0.5, 1.0), Target::new(9.0, -1.5, 0.2)];
        let b = [Target::new(15.0, 2.0, 3.0)];
        let all: Vec<Target> = a.iter().chain(b.iter()).copied().collect();

        let cube_a = generate_radar_cube(config(), 8, 64, &a, 0.0, &mut rng).unwrap();
        let cube_b = generate_radar_cube(config(), 8, 64, &b, 0.0, &mut rng).unwrap();
        let cube_all = generate_radar_cube(config(), 8, 64, &all, 0.0, &mut rng).unwrap();

        let summed = &cube_a + &cube_b;
        for (lhs, rhs) in cube_all.iter().zip(summed.iter()) {
            assert!((lhs - rhs).norm() < 1e-9);
        }
    }

    #[test]
    fn static_target_repeats_across_chirps() {
        let mut rng = StdRng::seed_from_u64(0);
        let targets = [Target::new(7.5, 0.0, 2.0)];
        let cube = generate_radar_cube(config(), 4, 16, &targets, 0.0, &mut rng).unwrap();
        assert!((cube[[0, 0]] - Complex64::new(2.0, 0.0)).norm() < 1e-12);
        for chirp in 1..4 {
            for sample in 0..16 {
                assert!((cube[[chirp, sample]] - cube[[0, sample]]).norm() < 1e-9);
            }
        }
    }

    #[test]
    fn noise_has_requested_spread() {
        let mut rng = StdRng::seed_from_u64(11);
        let cube = generate_radar_cube(config(), 64, 64, &[], 0.5, &mut rng).unwrap();
        let mean_power = cube.iter().map(|v| v.norm_sqr()).sum::<f64>() / cube.len() as f64;
        // Two components of variance 0.25 each.
        assert!((mean_power - 0.5).abs() < 0.05);
    }

    #[test]
    fn fast_time_axis_spans_whole_chirp() {
        let axis = fast_time_axis(config(), 5);
        assert_eq!(axis[0], 0.0);
        assert!((axis[4] - config().t_chirp).abs() < 1e-18);
        assert_eq!(fast_time_axis(config(), 1).to_vec(), vec![0.0]);
    }

    #[test]
    fn frame_uses_configured_grid() {
        let mut rng = StdRng::seed_from_u64(5);
        let cube = synthesize_frame(config(), &[], DEFAULT_NOISE_LEVEL, &mut rng).unwrap();
        assert_eq!(cube.dim(), (config().n_chirps, config().n_samples));
    }
}
