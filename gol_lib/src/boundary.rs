//! Resolves positions that fall off the edge of the board.
//!
//! Opposite edges of the board are joined, making it a torus: stepping left of column `0` lands on column
//! `width - 1` & stepping below row `height - 1` lands on row `0`.

use crate::Position;

/// Moves `coordinate` by `offset` along an axis that is `length` cells long, wrapping around at either end.
///
/// `length` must not be zero.
///
/// ```
/// # use gol_lib::boundary::wrap;
/// assert_eq!(wrap(0, -1, 10), 9);
/// assert_eq!(wrap(9, 1, 10), 0);
/// assert_eq!(wrap(4, 1, 10), 5);
/// ```
pub fn wrap(coordinate: usize, offset: isize, length: usize) -> usize {
    debug_assert!(length != 0, "Cannot wrap along an axis with no cells.");

    let length = length as isize;
    (coordinate as isize + offset).rem_euclid(length) as usize
}

/// Moves `position` by the `(x, y)` offset on a board of `width` by `height` cells, wrapping around the edges.
pub fn wrap_position(
    position: Position,
    offset: (isize, isize),
    width: usize,
    height: usize,
) -> Position {
    Position::new(
        wrap(position.x, offset.0, width),
        wrap(position.y, offset.1, height),
    )
}
