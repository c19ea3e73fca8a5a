//! Contains [`Grid`], the fixed size board the simulation takes place on.

use std::fmt;

use bitvec::{boxed::BitBox, order::Lsb0, slice::BitSlice, vec::BitVec};

use crate::{Area, Position, boundary, neighbourhood::Neighbourhood};

/// The errors that can occur when accessing or constructing a [`Grid`].
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(test, derive(kinded::Kinded))]
pub enum GridError {
    /// The position is not on the board.
    #[error("Position {position} is outside of the {width}x{height} board")]
    OutOfRange {
        position: Position,
        width: usize,
        height: usize,
    },
    #[error("A board must have at least one cell, got {width}x{height}")]
    ZeroSized { width: usize, height: usize },
    #[error("A {width}x{height} board has more cells than can be addressed")]
    TooLarge { width: usize, height: usize },
}

/// A board of `width` by `height` cells, where each cell is either alive (`true`) or dead (`false`).
///
/// The board holds two buffers of cells. One holds the current generation, the other is written to while
/// the next generation is calculated. The buffers swap roles after each tick & are never reallocated.
///
/// Neighbours are counted as if opposite edges of the board were joined, see [`boundary`].
#[derive(Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Both generation buffers, stored row by row.
    buffers: [BitBox; 2],
    /// The index into `buffers` of the current generation.
    current: usize,
}

impl Grid {
    /// Creates a board of the given size with every cell dead.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroSized { width, height });
        }
        let Some(cell_count) = width.checked_mul(height) else {
            return Err(GridError::TooLarge { width, height });
        };
        if isize::try_from(width).is_err()
            || isize::try_from(height).is_err()
            || cell_count > BitSlice::<usize, Lsb0>::MAX_BITS
        {
            return Err(GridError::TooLarge { width, height });
        }

        let empty = || BitVec::repeat(false, cell_count).into_boxed_bitslice();

        log::debug!("Created {width}x{height} board");
        Ok(Self {
            width,
            height,
            buffers: [empty(), empty()],
            current: 0,
        })
    }

    /// Creates a board of the given size where only the seeded positions are alive.
    pub fn with_seed<P: Into<Position>>(
        width: usize,
        height: usize,
        seed: impl IntoIterator<Item = P>,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        for position in seed {
            grid.set(position, true)?;
        }
        Ok(grid)
    }

    /// The amount of cells in the x axis.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The amount of cells in the y axis.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The area covered by the board.
    pub fn area(&self) -> Area {
        self.generation().area()
    }

    /// A read only view of the current generation.
    pub fn generation(&self) -> Generation<'_> {
        Generation {
            cells: &self.buffers[self.current],
            width: self.width,
            height: self.height,
        }
    }

    /// Gets whether the cell at the given position is alive.
    pub fn get(&self, position: impl Into<Position>) -> Result<bool, GridError> {
        self.generation().get(position)
    }

    /// Sets whether the cell at the given position is alive.
    pub fn set(&mut self, position: impl Into<Position>, alive: bool) -> Result<(), GridError> {
        let index = self.generation().index(position.into())?;
        self.buffers[self.current].set(index, alive);
        Ok(())
    }

    /// Inverts the cell at the given position, returning whether it is now alive.
    pub fn toggle(&mut self, position: impl Into<Position>) -> Result<bool, GridError> {
        let position = position.into();
        let alive = !self.get(position)?;
        self.set(position, alive)?;
        Ok(alive)
    }

    /// Counts the alive cells among the eight surrounding the given position.
    pub fn count_alive_neighbors(&self, position: impl Into<Position>) -> Result<u8, GridError> {
        self.generation().count_alive_neighbors(position)
    }

    /// The amount of alive cells on the board.
    pub fn population(&self) -> usize {
        self.generation().population()
    }

    /// Splits the board into the current generation & the buffer the next generation is written to.
    pub(crate) fn split_buffers(&mut self) -> (Generation<'_>, &mut BitSlice) {
        let [first, second] = &mut self.buffers;
        let (current, next) = match self.current {
            0 => (first, second),
            _ => (second, first),
        };

        let generation = Generation {
            cells: &**current,
            width: self.width,
            height: self.height,
        };
        (generation, &mut **next)
    }

    /// Makes the next buffer the current generation.
    pub(crate) fn swap_buffers(&mut self) {
        self.current ^= 1;
    }

    /// The addresses of both buffers' storage, followed by the address of the current buffer.
    #[cfg(test)]
    pub(crate) fn buffer_addresses(&self) -> ([*const usize; 2], *const usize) {
        let addresses = [
            self.buffers[0].as_raw_slice().as_ptr(),
            self.buffers[1].as_raw_slice().as_ptr(),
        ];
        (addresses, addresses[self.current])
    }

    /// Builds a board from rows of text, where `#` is an alive cell and anything else is dead.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Grid {
        let height = rows.len();
        let width = rows.first().map(|row| row.len()).unwrap_or_default();

        let mut grid = Grid::new(width, height).expect("Test board must not be empty");
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.chars().enumerate() {
                grid.set((x, y), cell == '#').expect("Test rows must be equal length");
            }
        }
        grid
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("current", &format_args!("\n{}", self.generation()))
            .finish()
    }
}

/// A read only view of one generation of a [`Grid`].
#[derive(Clone, Copy)]
pub struct Generation<'a> {
    cells: &'a BitSlice,
    width: usize,
    height: usize,
}

impl Generation<'_> {
    /// The amount of cells in the x axis.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The amount of cells in the y axis.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The area covered by the board.
    pub fn area(&self) -> Area {
        // A grid is never zero sized.
        Area::new(Position::new(0, 0), Position::new(self.width - 1, self.height - 1))
    }

    fn index(&self, position: Position) -> Result<usize, GridError> {
        if position.x >= self.width || position.y >= self.height {
            return Err(GridError::OutOfRange {
                position,
                width: self.width,
                height: self.height,
            });
        }

        Ok(position.y * self.width + position.x)
    }

    /// Gets whether the cell at the given position is alive.
    pub fn get(&self, position: impl Into<Position>) -> Result<bool, GridError> {
        let index = self.index(position.into())?;
        Ok(self.cells[index])
    }

    /// Reads a position that is known to be on the board.
    pub(crate) fn is_alive(&self, position: Position) -> bool {
        debug_assert!(position.x < self.width && position.y < self.height);
        self.cells[position.y * self.width + position.x]
    }

    /// Reads the eight cells surrounding the given position, wrapping around the edges of the board.
    pub fn neighbourhood(&self, position: impl Into<Position>) -> Result<Neighbourhood, GridError> {
        let position = position.into();
        self.index(position)?;
        Ok(self.neighbourhood_of(position))
    }

    /// Reads the neighbourhood of a position that is known to be on the board.
    pub(crate) fn neighbourhood_of(&self, position: Position) -> Neighbourhood {
        Neighbourhood::from_fn(|direction| {
            let neighbour =
                boundary::wrap_position(position, direction.offset(), self.width, self.height);
            self.is_alive(neighbour)
        })
    }

    /// Counts the alive cells among the eight surrounding the given position.
    pub fn count_alive_neighbors(&self, position: impl Into<Position>) -> Result<u8, GridError> {
        Ok(self.neighbourhood(position)?.alive_count())
    }

    /// The amount of alive cells.
    pub fn population(&self) -> usize {
        self.cells.count_ones()
    }

    /// Iterates over the positions of every alive cell, row by row.
    pub fn alive_cells(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width;
        self.cells
            .iter_ones()
            .map(move |index| Position::new(index % width, index / width))
    }
}

impl fmt::Display for Generation<'_> {
    /// Draws the generation with `#` for alive cells & `.` for dead cells, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for alive in row.iter().by_vals() {
                f.write_str(if alive { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
