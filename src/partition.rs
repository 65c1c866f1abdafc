//! Ways to split the interior rows of a plate into disjoint blocks.
//! Each block becomes one task of a relaxation step.

use crate::error::*;
use crate::util::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum RowPartition {
    /// Every interior row in one block.
    #[default]
    Single,

    /// `n` blocks of nearly equal height,
    /// the first `rows % n` blocks get one extra row.
    Equal(usize),

    /// Blocks of this many rows, the last one may be shorter.
    Chunked(usize),

    /// Explicit block heights, top to bottom.
    /// Must be non-zero and sum to the interior row count.
    Explicit(Vec<usize>),
}

impl RowPartition {
    /// Heights of each block for a plate with `rows` interior rows.
    pub fn heights(&self, rows: usize) -> Result<Vec<usize>> {
        match self {
            RowPartition::Single => Ok(vec![rows]),
            RowPartition::Equal(n) => {
                if *n == 0 {
                    return Err(Error::InvalidPartition {
                        reason: "block count must be at least 1".to_string(),
                    });
                }
                // at most `rows` blocks are non-empty
                let n = (*n).min(rows);
                if n == 0 {
                    return Ok(Vec::new());
                }
                let base = rows / n;
                let extra = rows % n;
                Ok((0..n).map(|i| base + usize::from(i < extra)).collect())
            }
            RowPartition::Chunked(size) => {
                if *size == 0 {
                    return Err(Error::InvalidPartition {
                        reason: "chunk size must be at least 1".to_string(),
                    });
                }
                let mut result = vec![*size; rows / size];
                if rows % size != 0 {
                    result.push(rows % size);
                }
                Ok(result)
            }
            RowPartition::Explicit(heights) => {
                if heights.iter().any(|h| *h == 0) {
                    return Err(Error::InvalidPartition {
                        reason: format!("empty block in {:?}", heights),
                    });
                }
                let total = heights
                    .iter()
                    .try_fold(0usize, |total, h| total.checked_add(*h))
                    .ok_or_else(|| Error::InvalidPartition {
                        reason: format!("block heights {:?} overflow", heights),
                    })?;
                if total != rows {
                    return Err(Error::InvalidPartition {
                        reason: format!(
                            "blocks cover {} rows, plate has {}",
                            total, rows
                        ),
                    });
                }
                Ok(heights.clone())
            }
        }
    }

    /// Interior regions of each block for a `rows x cols` plate,
    /// sorted top to bottom.
    pub fn blocks(&self, rows: usize, cols: usize) -> Result<Vec<AABB<2>>> {
        let heights = self.heights(rows)?;
        let last_col = cols as i32;
        let mut first_row = 1;
        let mut result = Vec::with_capacity(heights.len());
        for h in heights {
            let last_row = first_row + h as i32 - 1;
            result.push(AABB::new(matrix![first_row, last_row; 1, last_col]));
            first_row = last_row + 1;
        }
        debug_assert_eq!(first_row as usize, rows + 1);
        Ok(result)
    }
}
