use crate::stencil::*;

/// Five point Laplace relaxation without the center term:
/// each cell becomes the mean of its four orthogonal neighbors.
/// Offsets are `(row, col)`, ordered up, down, left, right.
pub fn laplace_2d() -> Stencil<2, 4> {
    Stencil::new(
        [[-1, 0], [1, 0], [0, -1], [0, 1]],
        |args: &[f64; 4]| {
            let up = args[0];
            let down = args[1];
            let left = args[2];
            let right = args[3];
            0.25 * (up + down + left + right)
        },
    )
}
