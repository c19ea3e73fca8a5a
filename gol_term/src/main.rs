use std::error::Error;

use args::Args;
use clap::Parser;
use gol_lib::{Control, Editor, EditorStatus, Grid, Renderer, Simulator};
use input::Input;
use settings::Settings;
use terminal::Terminal;

mod args;
mod input;
mod settings;
mod terminal;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();

    let mut settings = match &args.config_path {
        Some(config_path) => Settings::load(config_path)
            .inspect_err(|err| log::error!("{} - {err}", error_text::SETTINGS_LOAD))?,
        None => Settings::default(),
    };
    settings.apply_args(&args);
    log::debug!("Using {settings:?}");

    let (columns, rows) = crossterm::terminal::size()
        .inspect_err(|err| log::error!("{} - {err}", error_text::TERMINAL_SIZE))?;
    let width = args.width.unwrap_or(usize::from(columns));
    let height = args.height.unwrap_or(usize::from(rows));

    let grid = Grid::with_seed(width, height, settings.seed())
        .inspect_err(|err| log::error!("{} - {err}", error_text::CREATE_BOARD))?;
    let renderer = Renderer::new(
        settings.simulation.header_width,
        settings.simulation.header_height,
        grid.area(),
    );

    let mut terminal = Terminal::new(settings.cell)
        .inspect_err(|err| log::error!("{} - {err}", error_text::TERMINAL_INIT))?;

    terminal.clear()?;
    terminal.write_lines(lang::INTRO)?;
    if input::read_input()? == Input::Interrupt {
        return Ok(());
    }

    let grid = match args.skip_editor {
        true => grid,
        false => match edit(&mut terminal, &renderer, grid)? {
            Some(grid) => grid,
            None => return Ok(()),
        },
    };

    let mut simulator = Simulator::new(grid);
    terminal.clear()?;
    gol_lib::run_simulation(
        &mut simulator,
        &renderer,
        &mut terminal,
        settings.simulation.tick_rate,
        |_| match input::stop_requested()? {
            true => Ok(Control::Stop),
            false => Ok(Control::Continue),
        },
    )?;

    log::info!(
        "Ended at generation {} with {} alive",
        simulator.get_generation(),
        simulator.grid().population()
    );
    Ok(())
}

/// Lets the user place cells until they quit the editor.
///
/// Returns [`None`] if the user asked to end the program instead.
fn edit(
    terminal: &mut Terminal,
    renderer: &Renderer,
    grid: Grid,
) -> std::io::Result<Option<Grid>> {
    terminal.clear()?;
    renderer.draw_full(terminal, grid.generation())?;

    let mut editor = Editor::new(grid);
    terminal.show_cursor(true)?;
    // Place the terminal cursor under the editor's.
    editor.handle(gol_lib::Key::Other, terminal)?;

    loop {
        match input::read_input()? {
            Input::Interrupt => return Ok(None),
            Input::Key(key) => {
                if editor.handle(key, terminal)? == EditorStatus::Finished {
                    break;
                }
            }
        }
    }

    terminal.show_cursor(false)?;
    Ok(Some(editor.finish()))
}

/// Creates a public constant string with the name as the name of the constant
/// and the text as the value of the string.
///
/// # Examples
/// ```
/// lang!{QUOTE, "Ya like jazz?"}
/// assert_eq!(QUOTE, "Ya like jazz?");
/// ```
#[macro_export]
macro_rules! lang {
    {$($name:tt, $text:literal);*} => {
        $(
        pub const $name: &str = $text;
        )*
    };
}

mod error_text {
    lang! {
        SETTINGS_LOAD, "Unable to load the settings file.";
        TERMINAL_SIZE, "Unable to read the size of the terminal.";
        CREATE_BOARD, "Unable to create the board.";
        TERMINAL_INIT, "Unable to prepare the terminal for drawing."
    }
}

mod lang {
    pub const INTRO: &[&str] = &[
        "         ====== LIFE! ======",
        "         Use the arrow keys to move around",
        "         Use the space bar to toggle a live cell",
        "         Press Q to stop placing cells & begin the simulation",
        "         Press Q again to end the simulation",
        "         Press any key now to begin placing live cells",
    ];
}
