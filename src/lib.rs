//! Parallel Jacobi relaxation of a 2D heated plate.
//!
//! ```
//! use plate::solver::*;
//!
//! let parameters = SolverParameters {
//!     max_iterations: 5000,
//!     ..Default::default()
//! };
//! let mut solver = JacobiSolver::hot_corner(10, 10, parameters).unwrap();
//! let report = solver.run();
//! assert!(report.converged());
//! ```

pub mod boundary;
pub mod build_info;
pub mod driver;
pub mod error;
pub mod grid;
pub mod par_slice;
pub mod partition;
pub mod progress;
pub mod solver;
pub mod stencil;
pub mod util;
