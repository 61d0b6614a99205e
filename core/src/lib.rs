//! Signal-synthesis core for the Rust FMCW radar simulator.
//!
//! Point targets are turned into a noisy complex radar cube (chirp x sample),
//! and the cube into a Doppler-recentered range-Doppler map. The radar
//! configuration is built once and shared read-only by both stages.

pub mod config;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use config::RadarConfig;
pub use prelude::{RadarCube, RadarError, RadarResult, RangeDopplerMap, Target};
pub use processing::{generate_radar_cube, process_radar_cube};
