//! Grid ownership, seeding and the one-generation evolution step

use super::cell::{Cell, Status};
use super::pattern::SeedPattern;
use super::rules;
use crate::error::EngineError;
use itertools::Itertools;
use rand::Rng;
use std::fmt;

/// Default number of cells placed by [`SeedPattern::Random`].
pub const DEFAULT_RANDOM_CELLS: usize = 10;

/// A fixed-size Game of Life grid.
///
/// Owns `rows * cols` cells in a row-major layout. Dimensions are fixed at
/// construction; every seed/fill/evolve operation mutates the grid in place.
/// Single-threaded by contract: one grid is exclusively owned by one driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell `Dead`.
    ///
    /// Fails with [`EngineError::InvalidDimensions`] when either dimension is
    /// zero. Callers are still expected to [`fill`](Self::fill) to a known
    /// baseline before first use.
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Status of the cell at `(row, col)`. Panics on out-of-range
    /// coordinates; all internal callers stay in range by construction.
    pub fn status_at(&self, row: usize, col: usize) -> Status {
        self.cells[self.index(row, col)].status()
    }

    /// Assign a status at `(row, col)` through the cell's birth-detecting
    /// setter.
    pub fn set_status_at(&mut self, row: usize, col: usize, status: Status) {
        let idx = self.index(row, col);
        self.cells[idx].set_status(status);
    }

    /// Flattened row-major value snapshot of every cell's status, length
    /// `rows * cols`. Repeatable and independent of later mutations.
    pub fn cell_statuses(&self) -> Vec<Status> {
        self.cells.iter().map(Cell::status).collect()
    }

    /// Number of cells currently alive (`Living` or `Emerging`).
    pub fn living_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.status().is_alive())
            .count()
    }

    /// Whether no cell is alive.
    pub fn is_empty(&self) -> bool {
        self.living_count() == 0
    }

    /// Overwrite every cell with the literal status.
    ///
    /// Fill is baseline initialization, not simulation, so it bypasses the
    /// birth-detection rule: `fill(Living)` stores `Living`, never
    /// `Emerging`.
    pub fn fill(&mut self, status: Status) {
        for cell in &mut self.cells {
            cell.overwrite(status);
        }
    }

    /// Apply a named pattern on top of the current contents, drawing random
    /// positions from the thread-local RNG.
    ///
    /// Patterns are additive: they only ever turn cells on. Cells turned on
    /// over a dead baseline read back `Emerging` until the next generation.
    pub fn seed(&mut self, pattern: SeedPattern, random_cells: usize) {
        self.seed_with_rng(pattern, random_cells, &mut rand::thread_rng());
    }

    /// [`seed`](Self::seed) with an explicit RNG, for deterministic seeding.
    /// `random_cells` is only consulted by [`SeedPattern::Random`].
    pub fn seed_with_rng<R: Rng + ?Sized>(
        &mut self,
        pattern: SeedPattern,
        random_cells: usize,
        rng: &mut R,
    ) {
        match pattern {
            SeedPattern::Random => self.seed_random(random_cells, rng),
            SeedPattern::Plus => {
                self.seed_horizontal_line();
                self.seed_vertical_line();
            }
            SeedPattern::Cross => {
                self.seed_diagonal_up_down();
                self.seed_diagonal_reversed();
            }
            SeedPattern::HorizontalLine => self.seed_horizontal_line(),
            SeedPattern::VerticalLine => self.seed_vertical_line(),
            SeedPattern::DiagonalUpDown => self.seed_diagonal_up_down(),
            SeedPattern::DiagonalReversed => self.seed_diagonal_reversed(),
            SeedPattern::RightArrow => self.seed_right_arrow(),
            // Reserved pattern names: accepted, no geometry yet
            SeedPattern::FilledSquare | SeedPattern::EmptySquare | SeedPattern::LeftArrow => {}
        }
    }

    fn set_living(&mut self, row: usize, col: usize) {
        self.set_status_at(row, col, Status::Living);
    }

    /// Place `count` independent uniform draws. The last row and column are
    /// excluded from the candidate range; seeded layouts depend on this
    /// boundary, so keep it as-is. On a single-row or single-column grid the
    /// bound clamps to 1 to keep the draw well-formed.
    fn seed_random<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        let row_bound = (self.rows - 1).max(1);
        let col_bound = (self.cols - 1).max(1);
        for _ in 0..count {
            let row = rng.gen_range(0..row_bound);
            let col = rng.gen_range(0..col_bound);
            self.set_living(row, col);
        }
    }

    fn seed_horizontal_line(&mut self) {
        let row = self.rows.div_ceil(2) - 1;
        for col in 0..self.cols {
            self.set_living(row, col);
        }
    }

    fn seed_vertical_line(&mut self) {
        let col = self.cols.div_ceil(2) - 1;
        for row in 0..self.rows {
            self.set_living(row, col);
        }
    }

    fn seed_diagonal_up_down(&mut self) {
        for i in 0..self.rows.min(self.cols) {
            self.set_living(i, i);
        }
    }

    fn seed_diagonal_reversed(&mut self) {
        let last = self.rows.min(self.cols) - 1;
        for i in 0..=last {
            self.set_living(i, last - i);
        }
    }

    /// Top half of the main diagonal plus the lower half of the
    /// anti-diagonal, pointing right.
    fn seed_right_arrow(&mut self) {
        let shortest = self.rows.min(self.cols);
        for i in 0..shortest / 2 {
            self.set_living(i, i);
        }
        let last = shortest - 1;
        for j in last / 2..=last {
            self.set_living(j, last - j);
        }
    }

    /// Advance the whole grid by exactly one generation.
    ///
    /// Every next status is computed from a snapshot of the pre-update grid
    /// before any cell is written, so the update is simultaneous across the
    /// grid. Neighbor positions outside the grid are skipped, not wrapped.
    /// Results are applied through the birth-detecting setter: cells born
    /// this generation read `Emerging`, survivors read `Living`.
    pub fn live(&mut self) {
        let next: Vec<Status> = (0..self.rows)
            .cartesian_product(0..self.cols)
            .map(|(row, col)| {
                let neighbors = self.count_living_neighbors(row, col);
                rules::next_status(self.status_at(row, col), neighbors)
            })
            .collect();

        for (cell, status) in self.cells.iter_mut().zip(next) {
            cell.set_status(status);
        }
    }

    /// Count alive cells in the Moore neighborhood of `(row, col)`.
    /// `Emerging` counts as alive.
    fn count_living_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for dr in -1i64..=1 {
            for dc in -1i64..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = row as i64 + dr;
                let c = col as i64 + dc;
                if r < 0 || c < 0 || r >= self.rows as i64 || c >= self.cols as i64 {
                    continue;
                }
                if self.status_at(r as usize, c as usize).is_alive() {
                    count += 1;
                }
            }
        }
        count
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let symbol = match self.status_at(row, col) {
                    Status::Dead => '·',
                    Status::Living => '█',
                    Status::Emerging => '▓',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
