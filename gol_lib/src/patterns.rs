//! Known patterns that can seed a board.

use crate::Position;

/// The cells of a glider with the top-left of its 3x3 bounding box at `origin`.
///
/// The glider travels one cell right & one cell down every four generations:
/// ```text
/// .#.
/// ..#
/// ###
/// ```
pub fn glider(origin: Position) -> [Position; 5] {
    let offsets: [(usize, usize); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    offsets.map(|offset| origin + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glider_offset_from_origin() {
        let glider = glider(Position::new(10, 20));
        assert!(glider.contains(&Position::new(11, 20)));
        assert!(glider.contains(&Position::new(12, 22)));
        assert!(!glider.contains(&Position::new(10, 20)));
    }
}
