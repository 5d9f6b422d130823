// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
// Union by size only. Paths are never compressed, so `find` takes &self.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
	pub id: usize,
	pub parent: usize,
	// only accurate while this site is a root
	pub size: usize,
	pub open: bool,
}

impl Site {
	pub fn new(id: usize) -> Site {
		Site {
			id,
			parent: id,
			size: 1,
			open: false,
		}
	}

	pub fn is_root(&self) -> bool {
		self.parent == self.id
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	pub fn open(&mut self) {
		self.open = true;
	}
}

/// Arena of sites addressed by 1-based id; site `id` lives at index `id - 1`.
#[derive(Debug, Clone)]
pub struct DisjointSet {
	pub size: usize,
	sites: Vec<Site>,
}

impl DisjointSet {
	pub fn make_singletons(size: usize) -> DisjointSet {
		DisjointSet {
			size,
			sites: (1..=size).map(Site::new).collect(),
		}
	}

	pub fn site(&self, id: usize) -> &Site {
		debug_assert!(id >= 1 && id <= self.size, "site id {} out of arena", id);
		&self.sites[id - 1]
	}

	pub fn site_mut(&mut self, id: usize) -> &mut Site {
		debug_assert!(id >= 1 && id <= self.size, "site id {} out of arena", id);
		&mut self.sites[id - 1]
	}

	pub fn sites(&self) -> &[Site] {
		&self.sites
	}

	pub fn find(&self, x: usize) -> usize {
		let mut current = x;
		loop {
			let parent = self.site(current).parent;
			if parent == current {
				return current;
			}
			current = parent;
		}
	}

	pub fn connected(&self, x: usize, y: usize) -> bool {
		self.find(x) == self.find(y)
	}

	/// Merges the sets holding `x` and `y`. The larger root absorbs the smaller;
	/// on a tie `y`'s root goes under `x`'s. Returns false if they were already joined.
	pub fn unite(&mut self, x: usize, y: usize) -> bool {
		let x_root = self.find(x);
		let y_root = self.find(y);
		if x_root == y_root {
			return false;
		}
		let x_size = self.site(x_root).size;
		let y_size = self.site(y_root).size;
		let (parent, child) = if y_size > x_size {
			(y_root, x_root)
		} else {
			(x_root, y_root)
		};
		self.site_mut(child).parent = parent;
		self.site_mut(parent).size = x_size + y_size;
		true
	}

	/// Points the singleton `x` straight at `target` and credits its size to
	/// whichever root currently owns `target`.
	pub fn attach(&mut self, x: usize, target: usize) {
		debug_assert!(self.site(x).is_root(), "attach on non-root {}", x);
		let target_root = self.find(target);
		if target_root == x {
			return;
		}
		let x_size = self.site(x).size;
		self.site_mut(x).parent = target;
		self.site_mut(target_root).size += x_size;
	}
}
