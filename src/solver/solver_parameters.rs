use crate::error::*;

/// Largest permitted change in temperature between two iterations
/// before the plate counts as settled.
pub const MAX_TEMP_ERROR: f64 = 0.01;

/// Solvers are configurable.
/// These are all the parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverParameters {
    /// Stop after this many steps even if the plate has not settled.
    pub max_iterations: usize,

    /// Stop once the max delta of a step is at or below this.
    pub threshold: f64,

    /// Interior rows per task for the relaxation step.
    pub chunk_size: usize,
}

impl SolverParameters {
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(Error::InvalidParameter {
                name: "threshold",
                reason: format!(
                    "must be finite and non-negative, got {}",
                    self.threshold
                ),
            });
        }
        if self.chunk_size == 0 {
            return Err(Error::InvalidParameter {
                name: "chunk_size",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl std::default::Default for SolverParameters {
    fn default() -> Self {
        SolverParameters {
            max_iterations: 100,
            threshold: MAX_TEMP_ERROR,
            chunk_size: 64,
        }
    }
}
