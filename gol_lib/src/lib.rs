mod area;
pub mod boundary;
mod editor;
mod grid;
mod neighbourhood;
pub mod patterns;
mod position;
mod render;
mod simulator;

pub use area::Area;
pub use editor::{Editor, EditorStatus, Key};
pub use grid::{Generation, Grid, GridError};
pub use neighbourhood::{Direction, Neighbourhood};
pub use position::Position;
pub use render::{DisplaySink, Renderer};
pub use simulator::{Diff, Simulator, next_state};

use std::{
    io,
    num::NonZeroU32,
    time::{Duration, Instant},
};

/// Whether the simulation loop should keep running.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Control {
    Continue,
    Stop,
}

/// Runs the simulation, drawing each generation onto the sink, until the callback returns [`Control::Stop`].
///
/// The whole board is drawn first. After that each tick only draws the cells that changed, followed by the
/// status line. The callback is called before every tick with the current generation, & is where the caller
/// checks for a request to stop. It **should not** be computationally intensive.
///
/// If a tick rate is given, ticks are spaced to run at most that many times per second. Otherwise the
/// simulation runs as fast as it can.
pub fn run_simulation<Sink, Callback>(
    simulator: &mut Simulator,
    renderer: &Renderer,
    sink: &mut Sink,
    tick_rate: Option<NonZeroU32>,
    mut callback: Callback,
) -> io::Result<()>
where
    Sink: DisplaySink,
    Callback: FnMut(u64) -> io::Result<Control>,
{
    renderer.draw_full(sink, simulator.grid().generation())?;
    renderer.draw_status(sink, simulator.get_generation(), Duration::ZERO)?;
    sink.flush()?;

    // Used to control the ticks per second.
    let mut tick_rate_limiter = tick_rate.map(|ticks_per_second| {
        let mut interval = spin_sleep_util::interval(Duration::from_secs(1) / ticks_per_second.get());
        interval.set_missed_tick_behavior(spin_sleep_util::MissedTickBehavior::Skip);
        interval
    });

    log::debug!(
        "Starting simulation at generation {} with tick rate {:?}",
        simulator.get_generation(),
        tick_rate
    );

    loop {
        if callback(simulator.get_generation())? == Control::Stop {
            log::debug!("Stopped simulation at generation {}", simulator.get_generation());
            return Ok(());
        }

        if let Some(tick_rate_limiter) = &mut tick_rate_limiter {
            tick_rate_limiter.tick();
        }

        let tick_start = Instant::now();
        let diff = simulator.step();
        let tick_time = tick_start.elapsed();

        renderer.draw_diff(sink, &diff)?;
        renderer.draw_status(sink, diff.generation(), tick_time)?;
        sink.flush()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_sink::RecordingSink;

    #[test]
    /// The loop ticks until told to stop, leaving the display matching the board.
    fn runs_until_stopped() {
        let grid = Grid::with_seed(10, 10, patterns::glider(Position::new(3, 3))).unwrap();
        let renderer = Renderer::new(0, 0, grid.area());
        let mut simulator = Simulator::new(grid);
        let mut sink = RecordingSink::default();

        let mut seen = Vec::new();
        run_simulation(&mut simulator, &renderer, &mut sink, None, |generation| {
            seen.push(generation);
            Ok(match generation {
                7 => Control::Stop,
                _ => Control::Continue,
            })
        })
        .unwrap();

        assert_eq!(seen, (0..=7).collect::<Vec<_>>());
        assert_eq!(simulator.get_generation(), 7);
        // One flush for the first frame & one per tick.
        assert_eq!(sink.flushes, 8);

        for position in simulator.grid().area().iterate_over() {
            assert_eq!(
                sink.cells.get(&position).copied(),
                Some(simulator.grid().get(position).unwrap())
            );
        }
    }

    #[test]
    /// Stopping straight away only draws the first frame.
    fn stop_before_first_tick() {
        let grid = Grid::new(4, 4).unwrap();
        let renderer = Renderer::new(4, 1, grid.area());
        let mut simulator = Simulator::new(grid);
        let mut sink = RecordingSink::default();

        run_simulation(&mut simulator, &renderer, &mut sink, None, |_| {
            Ok(Control::Stop)
        })
        .unwrap();

        assert_eq!(simulator.get_generation(), 0);
        assert_eq!(sink.draws.len(), 12);
        assert_eq!(sink.text, vec![(Position::new(0, 0), "Gen:".to_owned())]);
    }

    #[test]
    /// An error from the callback ends the loop & is returned.
    fn callback_error_propagates() {
        let grid = Grid::new(4, 4).unwrap();
        let renderer = Renderer::new(0, 0, grid.area());
        let mut simulator = Simulator::new(grid);
        let mut sink = RecordingSink::default();

        let result = run_simulation(&mut simulator, &renderer, &mut sink, None, |generation| {
            match generation {
                2 => Err(io::Error::other("input closed")),
                _ => Ok(Control::Continue),
            }
        });

        assert!(result.is_err());
        assert_eq!(simulator.get_generation(), 2);
    }

    #[test]
    /// A tick rate spaces ticks out in time.
    fn tick_rate_limits() {
        let grid = Grid::new(4, 4).unwrap();
        let renderer = Renderer::new(0, 0, grid.area());
        let mut simulator = Simulator::new(grid);
        let mut sink = RecordingSink::default();

        let start = Instant::now();
        run_simulation(
            &mut simulator,
            &renderer,
            &mut sink,
            NonZeroU32::new(100),
            |generation| {
                Ok(match generation {
                    5 => Control::Stop,
                    _ => Control::Continue,
                })
            },
        )
        .unwrap();

        // The first tick is immediate, the other four wait 10ms each.
        assert!(start.elapsed() >= Duration::from_millis(35));
    }
}
