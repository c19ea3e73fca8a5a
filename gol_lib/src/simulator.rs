use crate::{Grid, Position, grid::Generation};

/// Whether a cell is alive in the next generation, given whether it is alive now & how many of its neighbours are.
///
/// ```
/// # use gol_lib::next_state;
/// assert!(next_state(true, 2));
/// assert!(next_state(false, 3));
/// assert!(!next_state(true, 4));
/// ```
pub fn next_state(alive: bool, alive_neighbours: u8) -> bool {
    match (alive, alive_neighbours) {
        // Survives
        (true, 2 | 3) => true,
        // Born
        (false, 3) => true,
        // Under population, over population or stays dead
        _ => false,
    }
}

/// Simulates Conways game of life on a [`Grid`].
///
/// The simulator owns the grid for the whole simulation. Cells can only be set before the simulator is created.
pub struct Simulator {
    /// The board that the simulation takes place on.
    grid: Grid,
    /// The generation that this simulation is on.
    generation: u64,
    /// The positions that changed during the last tick. Reused between ticks.
    changed: Vec<Position>,
}

impl Simulator {
    /// Creates a simulator at generation 0 of the given board.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
            changed: Vec::new(),
        }
    }

    /// The board in its current generation.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Ends the simulation, giving back the board.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Gets the current generation of the simulation.
    pub fn get_generation(&self) -> u64 {
        self.generation
    }

    /// Advances the simulation by one tick.
    ///
    /// Every cell of the next generation is calculated from the current generation only, then the generations
    /// swap. The returned [`Diff`] holds every position whose cell changed, & must be dropped before the next tick.
    pub fn step(&mut self) -> Diff<'_> {
        self.changed.clear();

        let (current, next) = self.grid.split_buffers();
        for (index, position) in current.area().iterate_over().enumerate() {
            let alive = current.is_alive(position);
            let alive_neighbours = current.neighbourhood_of(position).alive_count();

            let next_alive = next_state(alive, alive_neighbours);
            next.set(index, next_alive);

            if next_alive != alive {
                self.changed.push(position);
            }
        }

        self.grid.swap_buffers();
        self.generation += 1;

        log::trace!(
            "Generation {}: {} changed, {} alive",
            self.generation,
            self.changed.len(),
            self.grid.population()
        );

        Diff {
            generation: self.generation,
            changed: &self.changed,
            board: self.grid.generation(),
        }
    }
}

/// The cells that changed during one tick of a [`Simulator`].
#[derive(Clone, Copy)]
pub struct Diff<'a> {
    generation: u64,
    changed: &'a [Position],
    board: Generation<'a>,
}

impl<'a> Diff<'a> {
    /// The generation the board is now on.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The positions of every cell that was born or died, row by row.
    pub fn positions(&self) -> &'a [Position] {
        self.changed
    }

    /// The board after the tick.
    pub fn board(&self) -> Generation<'a> {
        self.board
    }

    /// The amount of cells that changed.
    pub fn len(&self) -> usize {
        self.changed.len()
    }

    /// Whether no cells changed, meaning the board is stable.
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }
}
