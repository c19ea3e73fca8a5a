//! Reads key presses from the terminal using [`crossterm`].

use std::{io, time::Duration};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gol_lib::Key;

/// A key press, or a request to end the program.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Input {
    Key(Key),
    /// Ctrl+C. Raw mode stops the terminal from sending an interrupt, so it is handled here instead.
    Interrupt,
}

impl From<KeyEvent> for Input {
    fn from(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Input::Interrupt,
            (KeyCode::Up, _) => Input::Key(Key::Up),
            (KeyCode::Down, _) => Input::Key(Key::Down),
            (KeyCode::Left, _) => Input::Key(Key::Left),
            (KeyCode::Right, _) => Input::Key(Key::Right),
            (KeyCode::Char(' '), _) => Input::Key(Key::Toggle),
            (KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc, _) => Input::Key(Key::Quit),
            _ => Input::Key(Key::Other),
        }
    }
}

/// Blocks until a key is pressed.
pub(crate) fn read_input() -> io::Result<Input> {
    loop {
        if let Event::Key(key_event) = event::read()? {
            if key_event.kind == KeyEventKind::Press {
                return Ok(key_event.into());
            }
        }
    }
}

/// Reads every key pressed since the last call without waiting, returning true if any asked to stop.
pub(crate) fn stop_requested() -> io::Result<bool> {
    let mut stop = false;
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key_event) = event::read()? {
            if key_event.kind != KeyEventKind::Press {
                continue;
            }
            stop |= matches!(
                Input::from(key_event),
                Input::Interrupt | Input::Key(Key::Quit)
            );
        }
    }
    Ok(stop)
}
