use std::{num::NonZeroU32, path::Path};

use gol_lib::Position;

use crate::args::Args;

/// The possible errors when attempting to read the settings file.
#[derive(thiserror::Error, Debug)]
#[cfg_attr(test, derive(kinded::Kinded))]
pub enum SettingsError {
    #[error("Unable to read settings file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("File is not a valid settings file: {0}")]
    InvalidData(#[from] serde_json::Error),
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Default, PartialEq)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) cell: CellSettings,
    pub(crate) simulation: SimulationSettings,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, PartialEq, Clone, Copy)]
#[serde(default)]
pub(crate) struct CellSettings {
    /// The character drawn for alive cells.
    pub(crate) alive: char,
    /// The character drawn for dead cells.
    pub(crate) dead: char,
}

impl Default for CellSettings {
    fn default() -> Self {
        Self {
            alive: '#',
            dead: ' ',
        }
    }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, PartialEq)]
#[serde(default)]
pub(crate) struct SimulationSettings {
    /// The maximum generations simulated per second. Unlimited if not set.
    pub(crate) tick_rate: Option<NonZeroU32>,
    /// The size of the status area in the top-left of the terminal.
    pub(crate) header_width: usize,
    pub(crate) header_height: usize,
    /// Whether to place a glider on the board.
    pub(crate) glider: bool,
    /// Cells that are alive before editing.
    pub(crate) seed: Vec<Position>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            tick_rate: NonZeroU32::new(20),
            header_width: 20,
            header_height: 1,
            glider: false,
            seed: Vec::new(),
        }
    }
}

impl Settings {
    /// Attempts to parse the settings file at the given path.
    pub(crate) fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let file = std::fs::File::open(path)?;
        let settings = serde_json::from_reader(file)?;
        Ok(settings)
    }

    /// Overrides the settings with any given on the command line.
    pub(crate) fn apply_args(&mut self, args: &Args) {
        if let Some(tick_rate) = args.tick_rate {
            self.simulation.tick_rate = NonZeroU32::new(tick_rate);
        }
        if args.glider {
            self.simulation.glider = true;
        }
    }

    /// The cells that are alive before editing.
    ///
    /// The glider is placed just below the status area.
    pub(crate) fn seed(&self) -> Vec<Position> {
        let mut seed = self.simulation.seed.clone();
        if self.simulation.glider {
            let origin = Position::new(1, self.simulation.header_height.saturating_add(1));
            seed.extend(gol_lib::patterns::glider(origin));
        }
        seed
    }
}
