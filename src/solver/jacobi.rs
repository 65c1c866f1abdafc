use crate::boundary::*;
use crate::error::*;
use crate::grid::*;
use crate::par_slice;
use crate::partition::*;
use crate::progress::*;
use crate::solver::*;
use crate::stencil::standard_stencils::laplace_2d;
use crate::stencil::*;
use crate::util::*;
use rayon::prelude::*;

/// Relax every interior cell of `blocks` in `output` from `input`,
/// returning one max delta per block, in block order.
/// Blocks must be disjoint row runs; each one is a separate rayon task
/// writing only its own rows, while `input` is shared read-only.
pub fn relax_blocks<const NEIGHBORHOOD_SIZE: usize>(
    stencil: &Stencil<2, NEIGHBORHOOD_SIZE>,
    input: &Grid,
    output: &mut Grid,
    blocks: &[AABB<2>],
) -> Vec<f64> {
    profiling::scope!("jacobi: relax");
    debug_assert_eq!(input.aabb(), output.aabb());
    debug_assert!(stencil.radius() <= 1);

    let offsets = stencil.linear_offsets(input.aabb());
    let width = input.width();
    let input_buffer = input.buffer();

    output
        .row_blocks_mut(blocks)
        .into_par_iter()
        .map(|mut block: RowBlockMut<'_>| {
            profiling::scope!("jacobi: block");
            let first_col = block.region().bounds[(1, 0)] as usize;
            let last_col = block.region().bounds[(1, 1)] as usize;
            let mut block_delta: f64 = 0.0;
            for row in block.first_row()..=block.last_row() {
                let output_row = block.row_mut(row);
                let row_offset = row * width;
                for col in first_col..=last_col {
                    let linear_index = row_offset + col;
                    let args: [f64; NEIGHBORHOOD_SIZE] =
                        std::array::from_fn(|n| {
                            let neighbor =
                                linear_index as isize + offsets[n];
                            input_buffer[neighbor as usize]
                        });
                    let value = stencil.apply(&Values::from(args));
                    output_row[col] = value;
                    block_delta = par_slice::nan_max(
                        block_delta,
                        (value - input_buffer[linear_index]).abs(),
                    );
                }
            }
            block_delta
        })
        .collect()
}

/// Owns both plate buffers and drives the relaxation.
///
/// Each step reads only `previous`, writes the interior of `current`,
/// then exchanges the two buffers. The boundary ring is written into both
/// buffers at construction and never again, so either buffer always
/// holds a complete plate.
pub struct JacobiSolver<BC: BoundaryCondition> {
    parameters: SolverParameters,
    boundary: BC,
    stencil: Stencil<2, 4>,
    blocks: Vec<AABB<2>>,
    current: Grid,
    previous: Grid,
    iterations: usize,
    delta: f64,
}

impl JacobiSolver<BoundaryProfile> {
    /// Plate with the textbook boundary, right and bottom edges ramp to 100.
    pub fn hot_corner(
        rows: usize,
        cols: usize,
        parameters: SolverParameters,
    ) -> Result<Self> {
        Self::new(rows, cols, BoundaryProfile::hot_corner(100.0), parameters)
    }
}

impl<BC: BoundaryCondition> JacobiSolver<BC> {
    /// Allocate both buffers for a `rows x cols` interior and write the
    /// boundary into them. The interior starts at 0.
    pub fn new(
        rows: usize,
        cols: usize,
        boundary: BC,
        parameters: SolverParameters,
    ) -> Result<Self> {
        parameters.validate()?;
        let mut previous = Grid::new(rows, cols)?;
        let mut current = Grid::new(rows, cols)?;
        apply_boundary(&boundary, &mut previous);
        current.copy_border_from(&previous);

        let blocks =
            RowPartition::Chunked(parameters.chunk_size).blocks(rows, cols)?;

        log::debug!(
            "jacobi: {} x {} plate, {} row blocks, threshold {}, max iterations {}",
            rows,
            cols,
            blocks.len(),
            parameters.threshold,
            parameters.max_iterations
        );

        Ok(JacobiSolver {
            parameters,
            boundary,
            stencil: laplace_2d(),
            blocks,
            current,
            previous,
            iterations: 0,
            delta: f64::INFINITY,
        })
    }

    /// Advance one iteration using the configured row blocks.
    /// Returns the max absolute change over the interior.
    pub fn step(&mut self) -> f64 {
        profiling::scope!("jacobi: step");
        let partials = relax_blocks(
            &self.stencil,
            &self.previous,
            &mut self.current,
            &self.blocks,
        );
        self.finish_step(&partials)
    }

    /// Advance one iteration with an explicit row partition.
    /// Every partition produces the same plate and the same delta.
    pub fn step_with(&mut self, partition: &RowPartition) -> Result<f64> {
        profiling::scope!("jacobi: step");
        let blocks = partition.blocks(self.rows(), self.cols())?;
        let partials = relax_blocks(
            &self.stencil,
            &self.previous,
            &mut self.current,
            &blocks,
        );
        Ok(self.finish_step(&partials))
    }

    fn finish_step(&mut self, partials: &[f64]) -> f64 {
        let delta = par_slice::max_of(partials);
        std::mem::swap(&mut self.current, &mut self.previous);
        self.iterations += 1;
        self.delta = delta;
        log::trace!("jacobi: iteration {} delta {}", self.iterations, delta);
        delta
    }

    /// Step until the plate settles or the iteration cap is hit.
    pub fn run(&mut self) -> SolveReport {
        self.run_with_observer(&mut |_: usize, _: f64, _: &Grid| {})
    }

    /// Like [`Self::run`], calling `observer` after every step.
    pub fn run_with_observer<O: ProgressObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> SolveReport {
        profiling::scope!("jacobi: run");
        let termination = loop {
            if let Some(termination) = self.termination() {
                break termination;
            }
            let delta = self.step();
            observer.observe(self.iterations, delta, &self.previous);
        };

        let report = SolveReport {
            iterations: self.iterations,
            delta: self.delta,
            termination,
        };
        log::info!("jacobi: {}", report);
        report
    }

    /// `None` while both stop conditions still allow another step.
    /// Convergence wins if the last step satisfied both.
    pub fn termination(&self) -> Option<Termination> {
        if self.delta <= self.parameters.threshold {
            Some(Termination::Converged)
        } else if self.iterations >= self.parameters.max_iterations {
            Some(Termination::Exhausted)
        } else {
            None
        }
    }

    /// Overwrite the interior of both buffers, leaving the boundary alone,
    /// and start counting from zero again.
    /// A NaN written here spreads through the plate and makes every
    /// following delta NaN, so the run ends as exhausted, never converged.
    pub fn set_interior<F: Fn(Coord<2>) -> f64 + Sync>(&mut self, f: F) {
        for grid in [&mut self.previous, &mut self.current] {
            grid.row_blocks_mut(&self.blocks).into_par_iter().for_each(
                |mut block: RowBlockMut<'_>| {
                    block.coord_iter_mut().for_each(|(coord, value_mut)| {
                        *value_mut = f(coord);
                    })
                },
            );
        }
        self.iterations = 0;
        self.delta = f64::INFINITY;
    }

    /// Restore the initial plate without reallocating.
    pub fn reset(&mut self) {
        let chunk_size =
            self.parameters.chunk_size.saturating_mul(self.previous.width());
        for grid in [&mut self.previous, &mut self.current] {
            par_slice::set_value(grid.buffer_mut(), 0.0, chunk_size);
            apply_boundary(&self.boundary, grid);
        }
        self.iterations = 0;
        self.delta = f64::INFINITY;
    }

    /// The most recent plate state.
    pub fn grid(&self) -> &Grid {
        &self.previous
    }

    /// Buffer the next step reads from, same as [`Self::grid`].
    pub fn previous(&self) -> &Grid {
        &self.previous
    }

    /// Buffer the next step writes into.
    /// Holds the state from two steps ago.
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Completed steps.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Max delta of the last step, `INFINITY` before the first one.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn rows(&self) -> usize {
        self.previous.rows()
    }

    pub fn cols(&self) -> usize {
        self.previous.cols()
    }

    pub fn parameters(&self) -> &SolverParameters {
        &self.parameters
    }

    /// Row blocks used by [`Self::step`].
    pub fn blocks(&self) -> &[AABB<2>] {
        &self.blocks
    }
}
