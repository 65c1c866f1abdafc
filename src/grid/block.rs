use crate::util::*;

/// A run of whole padded rows of a [`super::Grid`],
/// borrowed mutably so that blocks can be handed to different workers.
/// `region` is the interior part of those rows.
pub struct RowBlockMut<'a> {
    region: AABB<2>,
    width: usize,
    buffer: &'a mut [f64],
}

impl<'a> RowBlockMut<'a> {
    pub fn new(region: AABB<2>, width: usize, buffer: &'a mut [f64]) -> Self {
        debug_assert_eq!(
            buffer.len(),
            region.exclusive_bounds()[0] as usize * width
        );
        RowBlockMut {
            region,
            width,
            buffer,
        }
    }

    pub fn region(&self) -> &AABB<2> {
        &self.region
    }

    /// World index of the first row in the block.
    pub fn first_row(&self) -> usize {
        self.region.bounds[(0, 0)] as usize
    }

    /// World index of the last row in the block, inclusive.
    pub fn last_row(&self) -> usize {
        self.region.bounds[(0, 1)] as usize
    }

    /// Padded row `row` (world index), boundary columns included.
    #[track_caller]
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        debug_assert!(row >= self.first_row() && row <= self.last_row());
        let start = (row - self.first_row()) * self.width;
        &mut self.buffer[start..start + self.width]
    }

    /// Interior cells of the block with their world coordinates.
    pub fn coord_iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (Coord<2>, &mut f64)> + '_ {
        let first_row = self.first_row();
        let first_col = self.region.bounds[(1, 0)] as usize;
        let last_col = self.region.bounds[(1, 1)] as usize;
        self.buffer.chunks_exact_mut(self.width).enumerate().flat_map(
            move |(r, row)| {
                row[first_col..=last_col].iter_mut().enumerate().map(
                    move |(c, v)| {
                        let coord = vector![
                            (first_row + r) as i32,
                            (first_col + c) as i32
                        ];
                        (coord, v)
                    },
                )
            },
        )
    }
}
