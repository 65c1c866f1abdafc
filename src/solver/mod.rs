//! Jacobi relaxation of a heated plate.
//!
//! [`JacobiSolver`] owns two plate buffers. Each step computes every
//! interior cell as the mean of its four neighbors from the previous
//! iteration, reduces the largest change, and swaps the buffers.
//! [`JacobiSolver::run`] repeats until the change drops to the threshold
//! or the iteration cap is reached.

mod jacobi;
mod report;
pub mod serial;
mod solver_parameters;

pub use jacobi::*;
pub use report::*;
pub use serial::serial_step;
pub use solver_parameters::*;
