use ndarray::{Array2, ArrayView2, Axis};
use num_complex::Complex64;
use rustfft::{num_traits::Zero, Fft, FftDirection, FftPlanner};
use std::sync::Arc;

/// Helper that wraps a `rustfft` plan of one length for reuse.
pub struct FftHelper {
    fft: Arc<dyn Fft<f64>>,
    scratch: Vec<Complex64>,
}

impl FftHelper {
    pub fn new(size: usize, direction: FftDirection) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft(size, direction);
        let scratch = vec![Complex64::zero(); fft.get_inplace_scratch_len()];
        Self { fft, scratch }
    }

    pub fn len(&self) -> usize {
        self.fft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fft.len() == 0
    }

    /// Unnormalized transform of `buffer` in place.
    pub fn process(&mut self, buffer: &mut [Complex64]) {
        self.fft.process_with_scratch(buffer, &mut self.scratch);
    }
}

/// Row and column plans for a fixed 2D shape.
pub struct Fft2Helper {
    rows: FftHelper,
    cols: FftHelper,
}

impl Fft2Helper {
    /// Plans a `[num_rows, num_cols]` transform.
    pub fn new(num_rows: usize, num_cols: usize, direction: FftDirection) -> Self {
        Self {
            rows: FftHelper::new(num_rows, direction),
            cols: FftHelper::new(num_cols, direction),
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.cols.len())
    }

    /// Transforms both axes of `input`; the output is in standard layout.
    pub fn transform(&mut self, input: ArrayView2<Complex64>) -> Array2<Complex64> {
        let mut output = input.as_standard_layout().into_owned();

        for mut row in output.axis_iter_mut(Axis(0)) {
            if let Some(slice) = row.as_slice_mut() {
                self.cols.process(slice);
            }
        }

        let mut column_buffer = vec![Complex64::zero(); self.rows.len()];
        for mut column in output.axis_iter_mut(Axis(1)) {
            for (dst, src) in column_buffer.iter_mut().zip(column.iter()) {
                *dst = *src;
            }
            self.rows.process(&mut column_buffer);
            for (dst, src) in column.iter_mut().zip(column_buffer.iter()) {
                *dst = *src;
            }
        }

        output
    }
}

/// Circularly shifts rows so raw index `i` lands at `(i + n/2) % n`.
pub fn fft_shift_rows(input: &Array2<Complex64>) -> Array2<Complex64> {
    let rows = input.nrows();
    let shift = rows / 2;
    Array2::from_shape_fn(input.dim(), |(r, c)| input[((r + rows - shift) % rows, c)])
}

/// Undoes [`fft_shift_rows`], also for odd row counts.
pub fn ifft_shift_rows(input: &Array2<Complex64>) -> Array2<Complex64> {
    let rows = input.nrows();
    let shift = rows / 2;
    Array2::from_shape_fn(input.dim(), |(r, c)| input[((r + shift) % rows, c)])
}
