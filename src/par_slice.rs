use num_traits::Num;
use rayon::prelude::*;

/// Sets each element to the same value.
/// `chunk_size` is used to break the work into tasks for multi-threading.
pub fn set_value<NumType: Num + Copy + Send + Sync>(
    a_slice: &mut [NumType],
    value: NumType,
    chunk_size: usize,
) {
    a_slice
        .par_chunks_mut(chunk_size)
        .for_each(|a_chunk: &mut [NumType]| {
            for a in a_chunk {
                *a = value;
            }
        });
}

/// Like `f64::max`, except that NaN wins instead of being dropped,
/// so a NaN delta can never pass for convergence.
#[inline]
pub fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Combine partial maxima, each partial counted once.
/// Any NaN partial makes the result NaN.
pub fn max_of(partials: &[f64]) -> f64 {
    partials.par_iter().copied().reduce(|| 0.0, nan_max)
}
