use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The path to a JSON file containing the settings.
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config_path: Option<PathBuf>,

    /// The amount of cells in the x axis. Defaults to the width of the terminal.
    #[arg(long)]
    pub(crate) width: Option<usize>,

    /// The amount of cells in the y axis. Defaults to the height of the terminal.
    #[arg(long)]
    pub(crate) height: Option<usize>,

    /// The maximum generations simulated per second. 0 runs as fast as possible.
    #[arg(short, long, value_name = "TICKS_PER_SECOND")]
    pub(crate) tick_rate: Option<u32>,

    /// Places a glider on the board before editing.
    #[arg(short, long)]
    pub(crate) glider: bool,

    /// Starts the simulation straight away, without placing cells.
    #[arg(short, long)]
    pub(crate) skip_editor: bool,
}
