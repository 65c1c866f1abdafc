/// Which of the two stop conditions ended a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The max delta dropped to the threshold.
    Converged,

    /// The iteration cap was reached first.
    Exhausted,
}

/// Outcome of [`super::JacobiSolver::run`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolveReport {
    /// Completed steps.
    pub iterations: usize,

    /// Max delta of the last step, `INFINITY` if no step ran.
    pub delta: f64,

    pub termination: Termination,
}

impl SolveReport {
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

impl std::fmt::Display for SolveReport {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "{:?}: max error at iteration {} was {}",
            self.termination, self.iterations, self.delta
        )
    }
}
