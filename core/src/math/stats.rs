use ndarray::ArrayView2;
use num_complex::Complex64;

pub struct StatsHelper;

impl StatsHelper {
    pub fn rms(samples: &[Complex64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = samples.iter().map(|v| v.norm_sqr()).sum();
        (sum_sq / samples.len() as f64).sqrt()
    }

    /// `(row, column)` of the strongest cell, `None` for an empty grid.
    pub fn peak_cell(grid: ArrayView2<Complex64>) -> Option<(usize, usize)> {
        grid.indexed_iter()
            .map(|(idx, v)| (idx, v.norm_sqr()))
            .fold(None, |best: Option<((usize, usize), f64)>, (idx, power)| match best {
                Some((_, best_power)) if best_power >= power => best,
                _ => Some((idx, power)),
            })
            .map(|(idx, _)| idx)
    }
}
