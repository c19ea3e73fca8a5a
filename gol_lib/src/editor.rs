//! Contains [`Editor`], used to place cells on the board before the simulation starts.

use std::io;

use crate::{Grid, Position, render::DisplaySink};

/// The keys the editor responds to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Inverts the cell under the cursor.
    Toggle,
    /// Stops editing.
    Quit,
    Other,
}

/// Whether the editor wants more keys.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EditorStatus {
    Editing,
    Finished,
}

/// Moves a cursor around the board, toggling cells under it.
///
/// The editor owns the board while editing. Once finished, the board is taken back with [`Editor::finish`] &
/// cannot be edited again.
pub struct Editor {
    grid: Grid,
    cursor: Position,
}

impl Editor {
    /// Starts editing the given board with the cursor in its centre.
    pub fn new(grid: Grid) -> Self {
        let cursor = Position::new(grid.width() / 2, grid.height() / 2);
        Self { grid, cursor }
    }

    /// The position of the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The board being edited.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Responds to one key press, drawing any changed cell & placing the display's cursor under the editor's.
    ///
    /// The cursor stops at the edges of the board.
    pub fn handle(&mut self, key: Key, sink: &mut impl DisplaySink) -> io::Result<EditorStatus> {
        let Position { x, y } = self.cursor;
        match key {
            Key::Up => self.cursor = Position::new(x, y.saturating_sub(1)),
            Key::Down => self.cursor = Position::new(x, (y + 1).min(self.grid.height() - 1)),
            Key::Left => self.cursor = Position::new(x.saturating_sub(1), y),
            Key::Right => self.cursor = Position::new((x + 1).min(self.grid.width() - 1), y),
            Key::Toggle => {
                let alive = self.grid.toggle(self.cursor).map_err(io::Error::other)?;
                sink.move_cursor(self.cursor)?;
                sink.draw(alive)?;
            }
            Key::Quit => {
                log::debug!("Finished editing with {} alive", self.grid.population());
                return Ok(EditorStatus::Finished);
            }
            Key::Other => {}
        }

        sink.move_cursor(self.cursor)?;
        sink.flush()?;
        Ok(EditorStatus::Editing)
    }

    /// Stops editing, giving back the board.
    pub fn finish(self) -> Grid {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_sink::RecordingSink;

    fn press(editor: &mut Editor, keys: &[Key]) -> RecordingSink {
        let mut sink = RecordingSink::default();
        for key in keys {
            editor.handle(*key, &mut sink).unwrap();
        }
        sink
    }

    #[test]
    /// The cursor starts in the centre of the board.
    fn starts_centred() {
        let editor = Editor::new(Grid::new(10, 6).unwrap());
        assert_eq!(editor.cursor(), Position::new(5, 3));
    }

    #[test]
    /// The arrow keys move the cursor one cell.
    fn moves_cursor() {
        let mut editor = Editor::new(Grid::new(10, 6).unwrap());

        press(&mut editor, &[Key::Up, Key::Left, Key::Left]);
        assert_eq!(editor.cursor(), Position::new(3, 2));

        press(&mut editor, &[Key::Down, Key::Down, Key::Right]);
        assert_eq!(editor.cursor(), Position::new(4, 4));
    }

    #[test]
    /// The cursor cannot leave the board.
    fn cursor_stops_at_edges() {
        let mut editor = Editor::new(Grid::new(3, 3).unwrap());

        press(&mut editor, &[Key::Up; 5]);
        press(&mut editor, &[Key::Left; 5]);
        assert_eq!(editor.cursor(), Position::new(0, 0));

        press(&mut editor, &[Key::Down; 5]);
        press(&mut editor, &[Key::Right; 5]);
        assert_eq!(editor.cursor(), Position::new(2, 2));
    }

    #[test]
    /// Toggling flips the cell under the cursor & draws it.
    fn toggle_draws_cell() {
        let mut editor = Editor::new(Grid::new(5, 5).unwrap());

        let sink = press(&mut editor, &[Key::Toggle]);
        assert_eq!(editor.grid().get((2, 2)), Ok(true));
        assert_eq!(sink.draws, vec![Position::new(2, 2)]);
        assert_eq!(sink.cells.get(&Position::new(2, 2)), Some(&true));

        let sink = press(&mut editor, &[Key::Toggle]);
        assert_eq!(editor.grid().get((2, 2)), Ok(false));
        assert_eq!(sink.cells.get(&Position::new(2, 2)), Some(&false));
    }

    #[test]
    /// Quit finishes editing, keeping the placed & seeded cells.
    fn quit_finishes() {
        let grid = Grid::with_seed(5, 5, [(0, 0)]).unwrap();
        let mut editor = Editor::new(grid);
        let mut sink = RecordingSink::default();

        assert_eq!(
            editor.handle(Key::Toggle, &mut sink).unwrap(),
            EditorStatus::Editing
        );
        assert_eq!(
            editor.handle(Key::Quit, &mut sink).unwrap(),
            EditorStatus::Finished
        );

        let grid = editor.finish();
        assert_eq!(grid.population(), 2);
        assert_eq!(grid.get((0, 0)), Ok(true));
        assert_eq!(grid.get((2, 2)), Ok(true));
    }

    #[test]
    /// Other keys change nothing.
    fn other_ignored() {
        let mut editor = Editor::new(Grid::new(5, 5).unwrap());

        let sink = press(&mut editor, &[Key::Other, Key::Other]);
        assert_eq!(editor.cursor(), Position::new(2, 2));
        assert!(sink.draws.is_empty());
        assert_eq!(editor.grid().population(), 0);
    }
}
