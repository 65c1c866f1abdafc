//! Periodic inspection of a running solver.

use crate::grid::*;

pub trait ProgressObserver {
    /// Called after every completed step with the new plate.
    fn observe(&mut self, iteration: usize, delta: f64, grid: &Grid);
}

impl<F> ProgressObserver for F
where
    F: FnMut(usize, f64, &Grid),
{
    fn observe(&mut self, iteration: usize, delta: f64, grid: &Grid) {
        self(iteration, delta, grid)
    }
}

/// A snapshot taken by [`DiagonalTracker`].
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressSample {
    pub iteration: usize,
    pub delta: f64,

    /// `((row, col), value)` along the diagonal ending in the
    /// bottom-right interior corner, top-left first.
    pub diagonal: Vec<((usize, usize), f64)>,

    pub probe: Option<((usize, usize), f64)>,
}

/// Every `every` iterations, sample the last few diagonal cells near the
/// bottom-right corner, where the hot edges meet and most change happens.
pub struct DiagonalTracker {
    every: usize,
    length: usize,
    probe: Option<(usize, usize)>,
    samples: Vec<ProgressSample>,
}

impl DiagonalTracker {
    pub const DEFAULT_LENGTH: usize = 6;

    /// `every == 0` never samples.
    pub fn new(every: usize) -> Self {
        DiagonalTracker {
            every,
            length: Self::DEFAULT_LENGTH,
            probe: None,
            samples: Vec::new(),
        }
    }

    /// Also record one fixed cell. Cells outside the plate are skipped.
    pub fn with_probe(mut self, row: usize, col: usize) -> Self {
        self.probe = Some((row, col));
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn samples(&self) -> &[ProgressSample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<ProgressSample> {
        self.samples
    }

    fn sample(&self, iteration: usize, delta: f64, grid: &Grid) -> ProgressSample {
        let rows = grid.rows();
        let cols = grid.cols();
        let length = self.length.min(rows).min(cols);
        let diagonal = (0..length)
            .rev()
            .map(|k| {
                let cell = (rows - k, cols - k);
                (cell, grid.get(cell.0, cell.1))
            })
            .collect();

        let probe = self
            .probe
            .filter(|(row, col)| *row < grid.height() && *col < grid.width())
            .map(|(row, col)| ((row, col), grid.get(row, col)));

        ProgressSample {
            iteration,
            delta,
            diagonal,
            probe,
        }
    }
}

impl ProgressObserver for DiagonalTracker {
    fn observe(&mut self, iteration: usize, delta: f64, grid: &Grid) {
        if self.every == 0 || iteration % self.every != 0 {
            return;
        }
        let sample = self.sample(iteration, delta, grid);

        let mut line = String::new();
        for ((row, col), value) in &sample.diagonal {
            line.push_str(&format!("[{},{}]: {:5.2}  ", row, col, value));
        }
        if let Some(((row, col), value)) = sample.probe {
            line.push_str(&format!("probe [{},{}]: {:5.2}  ", row, col, value));
        }
        log::info!(
            "---------- Iteration number: {} ---------- {} max error={:7.4}",
            iteration,
            line,
            delta
        );

        self.samples.push(sample);
    }
}
