//! Fixed boundary conditions.
//! The ring of cells around the interior is written once when a solver is
//! built and never touched by a step.

use crate::grid::*;
use crate::util::*;

pub trait BoundaryCondition: Sync {
    /// Value of the boundary cell `coord` on a plate with
    /// `rows x cols` interior cells.
    fn value(&self, coord: &Coord<2>, rows: usize, cols: usize) -> f64;
}

impl<F> BoundaryCondition for F
where
    F: Fn(&Coord<2>, usize, usize) -> f64 + Sync,
{
    fn value(&self, coord: &Coord<2>, rows: usize, cols: usize) -> f64 {
        self(coord, rows, cols)
    }
}

/// Values along one edge of the plate.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum EdgeProfile {
    #[default]
    Zero,

    Constant(f64),

    /// Linear increase along the edge, `(max / n) * i` at position `i`
    /// where `n` is the interior length of that edge.
    /// Position 0 is the top (vertical edges) or the left (horizontal edges).
    Ramp { max: f64 },
}

impl EdgeProfile {
    pub fn value(&self, position: usize, interior_len: usize) -> f64 {
        match self {
            EdgeProfile::Zero => 0.0,
            EdgeProfile::Constant(v) => *v,
            EdgeProfile::Ramp { max } => (max / interior_len as f64) * position as f64,
        }
    }
}

/// One profile per edge.
/// Top and bottom win over left and right on the four corner cells,
/// the relaxation stencil never reads corners anyway.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct BoundaryProfile {
    pub top: EdgeProfile,
    pub bottom: EdgeProfile,
    pub left: EdgeProfile,
    pub right: EdgeProfile,
}

impl BoundaryProfile {
    /// Textbook heated plate:
    ///
    /// ```text
    ///      0         0         0
    ///   0  +-------------------+  0
    ///      |                   |
    ///   0  |                   |  T
    ///      |                   |
    ///   0  +-------------------+ 100
    ///      0         T        100
    /// ```
    ///
    /// Right and bottom edges ramp to `max`, top and left stay at 0.
    pub fn hot_corner(max: f64) -> Self {
        BoundaryProfile {
            right: EdgeProfile::Ramp { max },
            bottom: EdgeProfile::Ramp { max },
            ..Default::default()
        }
    }
}

impl BoundaryCondition for BoundaryProfile {
    fn value(&self, coord: &Coord<2>, rows: usize, cols: usize) -> f64 {
        let row = coord[0] as usize;
        let col = coord[1] as usize;
        if row == 0 {
            self.top.value(col, cols)
        } else if row == rows + 1 {
            self.bottom.value(col, cols)
        } else if col == 0 {
            self.left.value(row, rows)
        } else if col == cols + 1 {
            self.right.value(row, rows)
        } else {
            // interior cells have no fixed value
            0.0
        }
    }
}

/// Write the boundary ring of `grid`, interior cells are left untouched.
pub fn apply_boundary<BC: BoundaryCondition + ?Sized>(bc: &BC, grid: &mut Grid) {
    let rows = grid.rows();
    let cols = grid.cols();
    let aabb = *grid.aabb();
    for col in 0..=cols + 1 {
        for row in [0, rows + 1] {
            let c = vector![row as i32, col as i32];
            grid.set_coord(&c, bc.value(&c, rows, cols));
        }
    }
    for row in 1..=rows {
        for col in [0, cols + 1] {
            let c = vector![row as i32, col as i32];
            debug_assert!(aabb.on_border(&c));
            grid.set_coord(&c, bc.value(&c, rows, cols));
        }
    }
}
