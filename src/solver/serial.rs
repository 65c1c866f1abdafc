use crate::grid::*;
use crate::par_slice::nan_max;

/// Plain nested loop relaxation step, no stencil and no threads.
/// Writes the interior of `current` from `previous` and returns the max
/// absolute change. Used as the reference for the parallel kernel.
pub fn serial_step(previous: &Grid, current: &mut Grid) -> f64 {
    debug_assert_eq!(previous.aabb(), current.aabb());
    let mut delta: f64 = 0.0;
    for i in 1..=previous.rows() {
        for j in 1..=previous.cols() {
            let value = 0.25
                * (previous.get(i - 1, j)
                    + previous.get(i + 1, j)
                    + previous.get(i, j - 1)
                    + previous.get(i, j + 1));
            current.set(i, j, value);
            delta = nan_max(delta, (value - previous.get(i, j)).abs());
        }
    }
    delta
}
