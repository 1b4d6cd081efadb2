//! Fixed-cadence driver for the automaton
//!
//! The runner owns one grid for its whole lifetime and steps it on a fixed
//! interval, handing the fresh status snapshot to a frame callback after
//! every generation. Start/stop is plain boolean state; there is no
//! concurrency anywhere in the loop.

use crate::automaton::{Grid, Status};
use std::thread;
use std::time::Duration;

/// Drives a [`Grid`] generation-by-generation on a fixed cadence.
pub struct SimulationRunner {
    grid: Grid,
    interval: Duration,
    running: bool,
    generation: u64,
}

impl SimulationRunner {
    pub fn new(grid: Grid, interval: Duration) -> Self {
        Self {
            grid,
            interval,
            running: false,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Number of generations stepped so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Enable the cadence.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Disable the cadence; an in-progress [`run`](Self::run) halts before
    /// the next step.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance exactly one generation and return the fresh snapshot.
    pub fn tick(&mut self) -> Vec<Status> {
        self.grid.live();
        self.generation += 1;
        self.grid.cell_statuses()
    }

    /// Step the grid on the configured cadence, sleeping `interval` between
    /// generations. After every step `on_frame` receives the generation
    /// number and the row-major snapshot; returning `false` stops the run.
    /// With `generations` set the run is bounded to that many steps.
    pub fn run<F>(&mut self, generations: Option<usize>, mut on_frame: F)
    where
        F: FnMut(u64, &[Status]) -> bool,
    {
        self.start();
        let mut stepped = 0usize;
        while self.running {
            if let Some(limit) = generations {
                if stepped >= limit {
                    break;
                }
            }
            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
            let snapshot = self.tick();
            stepped += 1;
            if !on_frame(self.generation, &snapshot) {
                self.stop();
            }
        }
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{SeedPattern, DEFAULT_RANDOM_CELLS};

    fn seeded_runner() -> SimulationRunner {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.fill(Status::Dead);
        grid.seed(SeedPattern::Plus, DEFAULT_RANDOM_CELLS);
        SimulationRunner::new(grid, Duration::ZERO)
    }

    #[test]
    fn test_bounded_run_invokes_callback_per_generation() {
        let mut runner = seeded_runner();
        let mut frames = Vec::new();
        runner.run(Some(4), |generation, snapshot| {
            frames.push((generation, snapshot.len()));
            true
        });

        assert_eq!(frames, vec![(1, 25), (2, 25), (3, 25), (4, 25)]);
        assert_eq!(runner.generation(), 4);
        assert!(!runner.is_running());
    }

    #[test]
    fn test_callback_can_stop_the_run() {
        let mut runner = seeded_runner();
        let mut invocations = 0;
        runner.run(None, |generation, _| {
            invocations += 1;
            generation < 3
        });

        assert_eq!(invocations, 3);
        assert!(!runner.is_running());
    }

    #[test]
    fn test_tick_matches_direct_evolution() {
        let mut runner = seeded_runner();
        let mut reference = runner.grid().clone();

        let snapshot = runner.tick();
        reference.live();
        assert_eq!(snapshot, reference.cell_statuses());
        assert_eq!(runner.generation(), 1);
    }

    #[test]
    fn test_start_stop_toggles() {
        let mut runner = seeded_runner();
        assert!(!runner.is_running());
        runner.start();
        assert!(runner.is_running());
        runner.stop();
        assert!(!runner.is_running());
    }
}
