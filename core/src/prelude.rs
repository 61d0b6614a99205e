use ndarray::Array2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Point scatterer fed into the cube synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Initial range in metres.
    pub range: f64,
    /// Radial velocity in m/s; range grows with positive values.
    pub velocity: f64,
    /// Reflection amplitude.
    pub rcs: f64,
}

impl Target {
    pub fn new(range: f64, velocity: f64, rcs: f64) -> Self {
        Self {
            range,
            velocity,
            rcs,
        }
    }
}

/// Slow-time by fast-time matrix of complex beat samples, `[chirps, samples]`.
pub type RadarCube = Array2<Complex64>;

/// Doppler-recentered 2D spectrum of a [`RadarCube`], same shape as its source.
pub type RangeDopplerMap = Array2<Complex64>;

/// Common error type for the synthesis pipeline.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RadarError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),
}

pub type RadarResult<T> = Result<T, RadarError>;
