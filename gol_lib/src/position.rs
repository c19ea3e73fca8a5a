/// The x & y positions of a cell on the board.
///
/// To move "right" on the board, the x must be increased.
/// To move "down" on the board, the y must be increased.
/// The top-left cell is at `(0, 0)`.
#[derive(
    Eq,
    Hash,
    PartialEq,
    Ord,
    PartialOrd,
    Clone,
    Copy,
    Debug,
    Default,
    serde::Serialize,
    serde::Deserialize,
    derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Position {
    // Field order gives row-major ordering.
    pub(crate) y: usize,
    pub(crate) x: usize,
}

impl Position {
    /// Creates a new [`Position`] at the given x & y coordinates.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Gets the represented x position.
    pub fn get_x(&self) -> usize {
        self.x
    }

    /// Gets the represented y position.
    pub fn get_y(&self) -> usize {
        self.y
    }
}

/// Adds the coordinates, saturating at the largest position rather than overflowing.
impl<T: Into<Position>> std::ops::Add<T> for Position {
    type Output = Self;

    fn add(self, other_position: T) -> Self::Output {
        let other_position: Position = other_position.into();
        Position::new(
            self.x.saturating_add(other_position.x),
            self.y.saturating_add(other_position.y),
        )
    }
}

impl From<(usize, usize)> for Position {
    fn from(value: (usize, usize)) -> Self {
        Position {
            x: value.0,
            y: value.1,
        }
    }
}
