pub mod range_doppler;
pub mod synthesis;

pub use range_doppler::{
    invert_range_doppler, magnitude_db, process_radar_cube, range_axis, velocity_axis,
    RangeDopplerProcessor,
};
pub use synthesis::{generate_radar_cube, synthesize_frame, DEFAULT_NOISE_LEVEL};
