//! The plate is a padded 2D buffer.
//! Rows `0` and `rows + 1` and columns `0` and `cols + 1` hold the fixed
//! boundary ring, everything else is interior.
//! Coordinates are `(row, col)` and map to a single row-major buffer.

mod block;

pub use block::*;

use crate::error::*;
use crate::par_slice;
use crate::util::*;
use rayon::prelude::*;

/// One temperature buffer of `(rows + 2) x (cols + 2)` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    aabb: AABB<2>,
    buffer: Vec<f64>,
}

impl Grid {
    /// Allocate a zeroed plate with `rows x cols` interior cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let aabb = padded_aabb(rows, cols)?;
        let len = aabb.buffer_size();
        let bytes = len * std::mem::size_of::<f64>();

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(len)
            .map_err(|_| Error::Allocation { bytes })?;
        buffer.resize(len, 0.0);

        Ok(Grid {
            rows,
            cols,
            aabb,
            buffer,
        })
    }

    /// Interior row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Interior column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Length of one padded row, `cols + 2`.
    pub fn width(&self) -> usize {
        self.cols + 2
    }

    /// Number of padded rows, `rows + 2`.
    pub fn height(&self) -> usize {
        self.rows + 2
    }

    /// Whole plate including the boundary ring.
    pub fn aabb(&self) -> &AABB<2> {
        &self.aabb
    }

    /// `[1, rows] x [1, cols]`
    pub fn interior(&self) -> AABB<2> {
        self.aabb.shrink_by(1)
    }

    /// `(row, col) -> row * (cols + 2) + col`.
    /// Valid for `row <= rows + 1` and `col <= cols + 1`.
    #[inline]
    #[track_caller]
    pub fn linear_index(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.height() && col < self.width(),
            "({}, {}) outside of {}",
            row,
            col,
            self.aabb
        );
        row * self.width() + col
    }

    #[inline]
    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.buffer[self.linear_index(row, col)]
    }

    #[inline]
    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let index = self.linear_index(row, col);
        self.buffer[index] = value;
    }

    #[track_caller]
    pub fn view(&self, coord: &Coord<2>) -> f64 {
        debug_assert!(
            self.aabb.contains(coord),
            "{:?} does not contain {:?}",
            self.aabb,
            coord
        );
        self.buffer[self.aabb.coord_to_linear(coord)]
    }

    #[track_caller]
    pub fn set_coord(&mut self, coord: &Coord<2>, value: f64) {
        debug_assert!(
            self.aabb.contains(coord),
            "{:?} does not contain {:?}",
            self.aabb,
            coord
        );
        let index = self.aabb.coord_to_linear(coord);
        self.buffer[index] = value;
    }

    /// One padded row, boundary columns included.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = self.linear_index(row, 0);
        &self.buffer[start..start + self.width()]
    }

    pub fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [f64] {
        &mut self.buffer
    }

    /// Split the interior rows into disjoint mutable blocks.
    /// `regions` must be sorted, cover whole interior rows,
    /// and not overlap; partitions produce exactly that.
    pub fn row_blocks_mut(&mut self, regions: &[AABB<2>]) -> Vec<RowBlockMut<'_>> {
        let width = self.width();
        let mut result = Vec::with_capacity(regions.len());
        let mut rest: &mut [f64] = &mut self.buffer;
        let mut consumed_rows = 0;
        for region in regions {
            let first_row = region.bounds[(0, 0)] as usize;
            let last_row = region.bounds[(0, 1)] as usize;
            debug_assert!(first_row >= consumed_rows);
            debug_assert!(region.bounds[(1, 0)] == 1);
            debug_assert!(region.bounds[(1, 1)] as usize == self.cols);

            let skip = (first_row - consumed_rows) * width;
            let take = (last_row - first_row + 1) * width;
            let tail = std::mem::take(&mut rest);
            let (_, tail) = tail.split_at_mut(skip);
            let (block, tail) = tail.split_at_mut(take);
            rest = tail;
            consumed_rows = last_row + 1;

            result.push(RowBlockMut::new(*region, width, block));
        }
        result
    }

    /// Set every cell from its coordinate.
    /// `chunk_size` is used to break the work into tasks for multi-threading.
    pub fn par_set_values<F: Fn(Coord<2>) -> f64 + Send + Sync>(
        &mut self,
        f: F,
        chunk_size: usize,
    ) {
        let aabb = self.aabb;
        self.buffer
            .par_chunks_mut(chunk_size)
            .enumerate()
            .for_each(|(i, chunk): (usize, &mut [f64])| {
                let offset = i * chunk_size;
                for (k, value) in chunk.iter_mut().enumerate() {
                    *value = f(aabb.linear_to_coord(offset + k));
                }
            });
    }

    /// Overwrite the boundary ring with the ring of `other`.
    pub fn copy_border_from(&mut self, other: &Grid) {
        debug_assert_eq!(self.aabb, other.aabb);
        let width = self.width();
        let last = self.rows + 1;
        let bottom = self.linear_index(last, 0);
        self.buffer[..width].copy_from_slice(other.row(0));
        self.buffer[bottom..bottom + width].copy_from_slice(other.row(last));
        for row in 1..=self.rows {
            let start = row * width;
            self.buffer[start] = other.buffer[start];
            self.buffer[start + width - 1] = other.buffer[start + width - 1];
        }
    }

    /// Largest absolute cell difference over the interior.
    pub fn max_interior_diff(&self, other: &Grid) -> f64 {
        debug_assert_eq!(self.aabb, other.aabb);
        let mut result: f64 = 0.0;
        for row in 1..=self.rows {
            for col in 1..=self.cols {
                let d = (self.get(row, col) - other.get(row, col)).abs();
                result = par_slice::nan_max(result, d);
            }
        }
        result
    }
}

/// Bounds of the padded plate, checking that every padded
/// coordinate fits in a `Coord` and the buffer length fits in `usize`.
fn padded_aabb(rows: usize, cols: usize) -> Result<AABB<2>> {
    let invalid = Error::InvalidDimensions { rows, cols };
    if rows == 0 || cols == 0 {
        return Err(invalid);
    }
    let last_row = rows.checked_add(1).ok_or(invalid.clone())?;
    let last_col = cols.checked_add(1).ok_or(invalid.clone())?;
    let last_row = i32::try_from(last_row).map_err(|_| invalid.clone())?;
    let last_col = i32::try_from(last_col).map_err(|_| invalid.clone())?;

    let len = (rows + 2)
        .checked_mul(cols + 2)
        .ok_or(invalid.clone())?;
    len.checked_mul(std::mem::size_of::<f64>())
        .ok_or(invalid)?;

    Ok(AABB::new(matrix![0, last_row; 0, last_col]))
}
