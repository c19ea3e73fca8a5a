//! Draws onto the terminal using [`crossterm`].

use std::io::{self, Stdout, Write};

use crossterm::{cursor, execute, queue, style::Print, terminal};
use gol_lib::{DisplaySink, Position};

use crate::settings::CellSettings;

/// The terminal the board is drawn on.
///
/// Creating it switches the terminal into raw mode on the alternate screen. The terminal is restored when
/// this is dropped, even if the program is exiting with an error.
pub(crate) struct Terminal {
    out: Stdout,
    cell: CellSettings,
}

impl Terminal {
    pub(crate) fn new(cell: CellSettings) -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            terminal::DisableLineWrap,
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        Ok(Self { out, cell })
    }

    /// Blanks the whole screen.
    pub(crate) fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, terminal::Clear(terminal::ClearType::All))
    }

    /// Writes each line on its own row, starting at the top of the screen.
    pub(crate) fn write_lines(&mut self, lines: &[&str]) -> io::Result<()> {
        for (row, line) in lines.iter().enumerate() {
            queue!(self.out, cursor::MoveTo(0, to_u16(row)?), Print(line))?;
        }
        self.out.flush()
    }

    /// Whether the cursor is shown, so the user can see where they are editing.
    pub(crate) fn show_cursor(&mut self, show: bool) -> io::Result<()> {
        match show {
            true => queue!(self.out, cursor::Show),
            false => queue!(self.out, cursor::Hide),
        }
    }
}

impl DisplaySink for Terminal {
    fn move_cursor(&mut self, position: Position) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(to_u16(position.get_x())?, to_u16(position.get_y())?)
        )
    }

    fn draw(&mut self, alive: bool) -> io::Result<()> {
        let glyph = match alive {
            true => self.cell.alive,
            false => self.cell.dead,
        };
        queue!(self.out, Print(glyph))
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            cursor::Show,
            terminal::EnableLineWrap,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Terminal positions are limited to [`u16`].
fn to_u16(value: usize) -> io::Result<u16> {
    u16::try_from(value).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{value} is too large for a terminal position"),
        )
    })
}
