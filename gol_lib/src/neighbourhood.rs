//! Contains [`Neighbourhood`], the eight cells surrounding a position.

/// One of the eight directions from a cell to a cell touching it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
}

impl Direction {
    /// Every direction, clockwise from [`Direction::NorthWest`].
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
    ];

    /// The `(x, y)` step taken to move one cell in this direction.
    /// North is towards row `0`.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// The state of the eight cells surrounding a position, at the moment it was read.
///
/// A neighbourhood is a copy; it is not updated if the board changes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Neighbourhood {
    cells: [bool; 8],
}

impl Neighbourhood {
    /// Builds a neighbourhood by reading each direction through the given function.
    pub(crate) fn from_fn(mut is_alive: impl FnMut(Direction) -> bool) -> Self {
        let mut cells = [false; 8];
        for direction in Direction::ALL {
            cells[direction.index()] = is_alive(direction);
        }
        Self { cells }
    }

    /// Whether the neighbour in the given direction is alive.
    pub fn get(&self, direction: Direction) -> bool {
        self.cells[direction.index()]
    }

    /// The amount of alive neighbours, between 0 & 8.
    pub fn alive_count(&self) -> u8 {
        self.cells.iter().filter(|alive| **alive).count() as u8
    }
}
