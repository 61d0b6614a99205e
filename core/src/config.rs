use crate::prelude::{RadarError, RadarResult};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const SPEED_OF_LIGHT: f64 = 3e8;
pub const CARRIER_FREQUENCY: f64 = 77e9;
pub const BANDWIDTH: f64 = 4e9;
pub const CHIRP_DURATION: f64 = 60e-6;
pub const SAMPLE_RATE: f64 = 10e6;
pub const NUM_CHIRPS: usize = 128;

/// Physical parameters the radar configuration is derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarParameters {
    pub carrier_frequency: f64,
    pub bandwidth: f64,
    pub chirp_duration: f64,
    pub sample_rate: f64,
    pub num_chirps: usize,
}

impl Default for RadarParameters {
    fn default() -> Self {
        Self {
            carrier_frequency: CARRIER_FREQUENCY,
            bandwidth: BANDWIDTH,
            chirp_duration: CHIRP_DURATION,
            sample_rate: SAMPLE_RATE,
            num_chirps: NUM_CHIRPS,
        }
    }
}

/// Immutable FMCW radar configuration shared by the synthesizer and processor.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarConfig {
    pub c: f64,
    pub fc: f64,
    pub bandwidth: f64,
    pub t_chirp: f64,
    /// Sweep rate in Hz/s, always positive.
    pub slope: f64,
    pub fs: f64,
    pub n_samples: usize,
    pub n_chirps: usize,
}

impl RadarConfig {
    pub fn from_parameters(params: &RadarParameters) -> RadarResult<Self> {
        let physical = [
            ("carrier_frequency", params.carrier_frequency),
            ("bandwidth", params.bandwidth),
            ("chirp_duration", params.chirp_duration),
            ("sample_rate", params.sample_rate),
        ];
        for (name, value) in physical {
            if !value.is_finite() || value <= 0.0 {
                return Err(RadarError::InvalidConfiguration(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        if params.num_chirps == 0 {
            return Err(RadarError::InvalidConfiguration(
                "num_chirps must be at least 1".into(),
            ));
        }

        let n_samples = (params.chirp_duration * params.sample_rate).floor();
        if n_samples < 1.0 {
            return Err(RadarError::InvalidConfiguration(format!(
                "chirp_duration * sample_rate yields {} samples per chirp",
                n_samples
            )));
        }

        Ok(Self::derive(params))
    }

    fn derive(params: &RadarParameters) -> Self {
        Self {
            c: SPEED_OF_LIGHT,
            fc: params.carrier_frequency,
            bandwidth: params.bandwidth,
            t_chirp: params.chirp_duration,
            slope: params.bandwidth / params.chirp_duration,
            fs: params.sample_rate,
            n_samples: (params.chirp_duration * params.sample_rate).floor() as usize,
            n_chirps: params.num_chirps,
        }
    }

    /// Process-wide configuration built once from the default literals.
    pub fn shared() -> &'static RadarConfig {
        static SHARED: OnceLock<RadarConfig> = OnceLock::new();
        SHARED.get_or_init(RadarConfig::default)
    }

    pub fn wavelength(&self) -> f64 {
        self.c / self.fc
    }

    pub fn range_resolution(&self) -> f64 {
        self.c / (2.0 * self.bandwidth)
    }

    pub fn max_unambiguous_velocity(&self) -> f64 {
        self.wavelength() / (4.0 * self.t_chirp)
    }
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self::derive(&RadarParameters::default())
    }
}
