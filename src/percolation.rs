//! N×N percolation lattice on top of a size-weighted disjoint set.
//!
//! Cell `(row, col)` has id `row * n + col + 1`. Two extra arena slots hold the
//! virtual top (`n² + 1`) and virtual bottom (`n² + 2`); every open site in the
//! first row hangs off the former and every open site in the last row off the
//! latter, so "does it percolate" is a single connectivity check.

use crate::data::{Direction, Point};
use crate::disjoint_set::{DisjointSet, Site};
use crate::error::Error;

#[derive(Debug, Clone)]
pub struct Grid {
    n: usize,
    ds: DisjointSet,
    open_count: usize,
}

impl Grid {
    pub fn new(n: usize) -> Result<Grid, Error> {
        // cells plus the two virtual nodes must fit in an id
        let arena = match n.checked_mul(n).and_then(|cells| cells.checked_add(2)) {
            Some(arena) if n > 0 => arena,
            _ => return Err(Error::InvalidGridSize(n)),
        };
        Ok(Grid {
            n,
            ds: DisjointSet::make_singletons(arena),
            open_count: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn open_count(&self) -> usize {
        self.open_count
    }

    pub fn virtual_top_id(&self) -> usize {
        self.n * self.n + 1
    }

    pub fn virtual_bottom_id(&self) -> usize {
        self.n * self.n + 2
    }

    pub fn site_id(&self, pos: Point) -> usize {
        pos.row * self.n + pos.col + 1
    }

    /// Inverse of `site_id` for real cells. Virtual ids have no position.
    pub fn point_from_id(&self, id: usize) -> Option<Point> {
        if id == 0 || id > self.n * self.n {
            return None;
        }
        Some(Point::new((id - 1) / self.n, (id - 1) % self.n))
    }

    pub fn site(&self, pos: Point) -> &Site {
        self.ds.site(self.site_id(pos))
    }

    pub fn site_from_id(&self, id: usize) -> &Site {
        self.ds.site(id)
    }

    pub fn is_open(&self, pos: Point) -> bool {
        self.site(pos).is_open()
    }

    /// Opens a site. Row 0 is attached to the virtual top, row n-1 to the
    /// virtual bottom; for n = 1 the single cell only goes to the top and
    /// `percolates` special-cases it. Opening an already open site does nothing.
    pub fn open(&mut self, pos: Point) {
        let id = self.site_id(pos);
        if self.ds.site(id).is_open() {
            return;
        }
        self.ds.site_mut(id).open();
        self.open_count += 1;

        if pos.row == 0 {
            let top = self.virtual_top_id();
            self.ds.attach(id, top);
        } else if pos.row == self.n - 1 {
            let bottom = self.virtual_bottom_id();
            self.ds.attach(id, bottom);
        }
    }

    pub fn root_of(&self, pos: Point) -> &Site {
        self.root_of_id(self.site_id(pos))
    }

    pub fn root_of_id(&self, id: usize) -> &Site {
        self.ds.site(self.ds.find(id))
    }

    /// Joins the sets of `a` and `b`. Both sites must be open, otherwise this
    /// is a no-op.
    pub fn union(&mut self, a: Point, b: Point) {
        if !self.is_open(a) || !self.is_open(b) {
            return;
        }
        let a_id = self.site_id(a);
        let b_id = self.site_id(b);
        self.ds.unite(a_id, b_id);
    }

    pub fn neighbors(&self, pos: Point) -> Vec<Point> {
        Direction::adjacent_directions().iter()
            .filter_map(|d| d.step(pos, self.n))
            .collect()
    }

    pub fn union_with_neighbors(&mut self, pos: Point) {
        for next in self.neighbors(pos) {
            self.union(pos, next);
        }
    }

    pub fn connected(&self, a: Point, b: Point) -> bool {
        self.ds.connected(self.site_id(a), self.site_id(b))
    }

    pub fn percolates(&self) -> bool {
        if self.n == 1 {
            return self.is_open(Point::new(0, 0));
        }
        self.ds.connected(self.virtual_top_id(), self.virtual_bottom_id())
    }

    pub fn sites(&self) -> &[Site] {
        self.ds.sites()
    }
}
