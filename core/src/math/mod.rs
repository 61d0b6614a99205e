pub mod fft;
pub mod stats;

pub use fft::{fft_shift_rows, ifft_shift_rows, Fft2Helper, FftHelper};
pub use stats::StatsHelper;
