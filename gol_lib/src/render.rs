//! Draws the board onto a character display, redrawing only the cells that changed.

use std::{io, time::Duration};

use crate::{Area, Position, grid::Generation, simulator::Diff};

/// A character display, such as a terminal, that the board is drawn on.
///
/// Each position on the board is one character on the display.
pub trait DisplaySink {
    /// Moves the cursor to the given position. The next write starts there.
    fn move_cursor(&mut self, position: Position) -> io::Result<()>;

    /// Draws one cell at the cursor, advancing the cursor by one character.
    fn draw(&mut self, alive: bool) -> io::Result<()>;

    /// Writes text at the cursor.
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    /// Presents everything written since the last flush.
    fn flush(&mut self) -> io::Result<()>;
}

/// Draws generations of the board onto a [`DisplaySink`].
///
/// A rectangle in the top-left of the display is reserved for the status line; cells under it are simulated
/// but never drawn.
pub struct Renderer {
    /// The reserved status area, if there is one.
    header: Option<Area>,
}

impl Renderer {
    /// Creates a renderer reserving `header_width` by `header_height` cells in the top-left of the board for the
    /// status line. The header is clipped to the board, & is not reserved at all if either size is zero.
    pub fn new(header_width: usize, header_height: usize, board_area: Area) -> Self {
        let header = Area::with_size(
            header_width.min(board_area.width()),
            header_height.min(board_area.height()),
        );

        Self { header }
    }

    /// The area reserved for the status line.
    pub fn header(&self) -> Option<Area> {
        self.header
    }

    fn in_header(&self, position: Position) -> bool {
        self.header.is_some_and(|header| header.contains(position))
    }

    /// Draws every cell of the board outside of the header.
    pub fn draw_full(&self, sink: &mut impl DisplaySink, board: Generation<'_>) -> io::Result<()> {
        for y in board.area().y_range() {
            let row_start = match self.header {
                Some(header) if header.y_range().contains(&y) => header.get_max().get_x() + 1,
                _ => 0,
            };
            if row_start >= board.width() {
                continue;
            }

            sink.move_cursor(Position::new(row_start, y))?;
            for x in row_start..board.width() {
                sink.draw(board.is_alive(Position::new(x, y)))?;
            }
        }
        Ok(())
    }

    /// Draws only the cells that changed during the last tick.
    pub fn draw_diff(&self, sink: &mut impl DisplaySink, diff: &Diff<'_>) -> io::Result<()> {
        let board = diff.board();
        for &position in diff.positions() {
            if self.in_header(position) {
                continue;
            }

            sink.move_cursor(position)?;
            sink.draw(board.is_alive(position))?;
        }
        Ok(())
    }

    /// Writes the generation & the time the last tick took into the header.
    ///
    /// The text is cut to the width of the header. Rows of the header below the first are left blank.
    pub fn draw_status(
        &self,
        sink: &mut impl DisplaySink,
        generation: u64,
        tick_time: Duration,
    ) -> io::Result<()> {
        let Some(header) = self.header else {
            return Ok(());
        };

        let width = header.width();
        for y in header.y_range() {
            let status = match y == header.get_min().get_y() {
                true => format!("Gen:{generation} {:.1}ms", tick_time.as_secs_f64() * 1000.0),
                false => String::new(),
            };
            let line = format!("{status:<width$.width$}");

            sink.move_cursor(Position::new(header.get_min().get_x(), y))?;
            sink.write_text(&line)?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::{test_sink::RecordingSink, *};
    use crate::{Grid, Simulator};

    #[test]
    /// The first frame draws every cell except those under the header.
    fn full_draw_skips_header() {
        let grid = Grid::with_seed(6, 3, [(0, 0), (5, 0), (2, 2)]).unwrap();
        let renderer = Renderer::new(3, 1, grid.area());
        let mut sink = RecordingSink::default();

        renderer.draw_full(&mut sink, grid.generation()).unwrap();

        assert_eq!(sink.draws.len(), 6 * 3 - 3);
        for position in grid.area().iterate_over() {
            let drawn = sink.cells.get(&position).copied();
            if position.get_y() == 0 && position.get_x() < 3 {
                assert_eq!(drawn, None, "{position} is in the header");
            } else {
                assert_eq!(drawn, Some(grid.get(position).unwrap()), "{position}");
            }
        }
    }

    #[test]
    /// Without a header every cell is drawn.
    fn full_draw_without_header() {
        let grid = Grid::new(4, 4).unwrap();
        let renderer = Renderer::new(0, 0, grid.area());
        let mut sink = RecordingSink::default();

        renderer.draw_full(&mut sink, grid.generation()).unwrap();
        assert_eq!(sink.draws.len(), 16);
        assert_eq!(renderer.header(), None);
    }

    #[test]
    /// A header wider than the board covers the whole first row.
    fn header_clipped_to_board() {
        let grid = Grid::new(4, 2).unwrap();
        let renderer = Renderer::new(10, 1, grid.area());
        let mut sink = RecordingSink::default();

        assert_eq!(renderer.header(), Some(Area::new((0, 0), (3, 0))));

        renderer.draw_full(&mut sink, grid.generation()).unwrap();
        assert!(sink.draws.iter().all(|position| position.get_y() == 1));
        assert_eq!(sink.draws.len(), 4);
    }

    #[test]
    /// After a tick only the changed cells are drawn.
    fn diff_draws_only_changes() {
        let grid = Grid::from_rows(&[
            ".....", //
            "..#..", //
            "..#..", //
            "..#..", //
            ".....",
        ]);
        let renderer = Renderer::new(0, 0, grid.area());
        let mut simulator = Simulator::new(grid);
        let mut sink = RecordingSink::default();

        renderer
            .draw_full(&mut sink, simulator.grid().generation())
            .unwrap();
        sink.clear_history();

        let diff = simulator.step();
        renderer.draw_diff(&mut sink, &diff).unwrap();

        assert_eq!(sink.draws, diff.positions());

        // The display now matches the board.
        for position in simulator.grid().area().iterate_over() {
            assert_eq!(
                sink.cells.get(&position).copied(),
                Some(simulator.grid().get(position).unwrap())
            );
        }
    }

    #[test]
    /// Changed cells under the header are not drawn.
    fn diff_skips_header() {
        let grid = Grid::from_rows(&[
            ".#...", //
            ".#...", //
            ".#...", //
            ".....", //
            ".....",
        ]);
        let renderer = Renderer::new(5, 1, grid.area());
        let mut simulator = Simulator::new(grid);
        let mut sink = RecordingSink::default();

        let diff = simulator.step();
        renderer.draw_diff(&mut sink, &diff).unwrap();

        assert_eq!(diff.len(), 4);
        assert_eq!(sink.draws, vec![(0, 1).into(), (2, 1).into(), (1, 2).into()]);
    }

    #[test]
    /// The status line shows the generation & is padded to the header width.
    fn status_line() {
        let grid = Grid::new(20, 5).unwrap();
        let renderer = Renderer::new(16, 2, grid.area());
        let mut sink = RecordingSink::default();

        renderer
            .draw_status(&mut sink, 42, Duration::from_micros(1500))
            .unwrap();

        assert_eq!(
            sink.text,
            vec![
                ((0, 0).into(), "Gen:42 1.5ms    ".to_owned()),
                ((0, 1).into(), " ".repeat(16)),
            ]
        );
    }

    #[test]
    /// The status line is cut to fit a narrow header.
    fn status_line_truncated() {
        let grid = Grid::new(20, 5).unwrap();
        let renderer = Renderer::new(6, 1, grid.area());
        let mut sink = RecordingSink::default();

        renderer
            .draw_status(&mut sink, 123_456, Duration::ZERO)
            .unwrap();
        assert_eq!(sink.text, vec![((0, 0).into(), "Gen:12".to_owned())]);
    }
}
