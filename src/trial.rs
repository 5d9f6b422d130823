use rand::Rng;

use crate::data::Point;
use crate::error::Error;
use crate::percolation::Grid;
use crate::stats::PercolationStats;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Replay, RandomFill, Percolated,
}

/// One simulation: a fresh grid, the prescribed opens for it, and a generator
/// for the random fill once those run out.
pub struct Trial<'a, R: Rng> {
    grid: Grid,
    prescribed: &'a [Point],
    cursor: usize,
    opened: usize,
    random_opens: usize,
    phase: Phase,
    rng: &'a mut R,
}

impl<'a, R: Rng> Trial<'a, R> {
    pub fn new(n: usize, prescribed: &'a [Point], rng: &'a mut R) -> Result<Trial<'a, R>, Error> {
        if let Some(p) = prescribed.iter().find(|p| p.row >= n || p.col >= n) {
            return Err(Error::OutOfRange { row: p.row, col: p.col, n });
        }
        Ok(Trial {
            grid: Grid::new(n)?,
            prescribed,
            cursor: 0,
            opened: 0,
            random_opens: 0,
            phase: Phase::Replay,
            rng,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn opened(&self) -> usize {
        self.opened
    }

    pub fn random_opens(&self) -> usize {
        self.random_opens
    }

    fn open_site(&mut self, pos: Point) {
        self.grid.open(pos);
        self.grid.union_with_neighbors(pos);
        self.opened += 1;
    }

    /// Replays prescribed opens until the grid percolates or they run out.
    pub fn replay(&mut self) {
        while self.phase == Phase::Replay {
            if self.grid.percolates() {
                self.phase = Phase::Percolated;
                break;
            }
            let pos = match self.prescribed.get(self.cursor) {
                Some(&pos) => pos,
                None => {
                    self.phase = Phase::RandomFill;
                    break;
                },
            };
            self.cursor += 1;
            if self.grid.is_open(pos) {
                warn!("site ({}, {}) listed twice, skipping", pos.row + 1, pos.col + 1);
                continue;
            }
            self.open_site(pos);
        }
    }

    /// Opens uniformly drawn closed sites until the grid percolates.
    pub fn random_fill(&mut self) {
        let n = self.grid.size();
        while self.phase == Phase::RandomFill {
            if self.grid.percolates() {
                self.phase = Phase::Percolated;
                break;
            }
            let id = self.rng.gen_range(1..=n * n);
            let pos = match self.grid.point_from_id(id) {
                Some(pos) => pos,
                None => continue,
            };
            if self.grid.is_open(pos) {
                continue;
            }
            self.open_site(pos);
            self.random_opens += 1;
        }
    }

    /// Runs to percolation and returns the number of sites opened.
    pub fn run(mut self) -> usize {
        self.replay();
        self.random_fill();
        debug!("trial percolated after {} opens ({} prescribed, {} random)",
            self.opened, self.opened - self.random_opens, self.random_opens);
        self.opened
    }
}

/// Runs `trials` independent trials in sequence and returns the finalized stats.
pub fn run_trials<R: Rng>(n: usize, trials: usize, prescribed: &[Point], rng: &mut R)
    -> Result<PercolationStats, Error> {
    let mut stats = PercolationStats::new(n, trials)?;
    for t in 0..trials {
        let threshold = Trial::new(n, prescribed, rng)?.run();
        debug!("trial {}: threshold {}", t, threshold);
        stats.record_sample(threshold);
    }
    stats.finalize()?;
    Ok(stats)
}
