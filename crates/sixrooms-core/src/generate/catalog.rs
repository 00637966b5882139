//! The fixed catalog of six-room layouts.
//!
//! Each layout is six edges over positions `0..6`. Every entry embeds one
//! small cycle (a triangle or a square) and hangs the remaining rooms off
//! it, so a unit is always connected and never a bare path or ring.

use rand::Rng;

/// Number of rooms (and edges) in one unit.
pub const UNIT_SIZE: usize = 6;

/// A node/edge skeleton for one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub name: &'static str,
    pub edges: [(usize, usize); UNIT_SIZE],
}

impl Layout {
    /// Length of the embedded cycle.
    ///
    /// A connected graph with as many edges as nodes has exactly one cycle;
    /// peeling leaves until none remain leaves just that cycle.
    #[must_use]
    pub fn cycle_len(&self) -> usize {
        let mut degree = [0usize; UNIT_SIZE];
        for &(a, b) in &self.edges {
            degree[a] += 1;
            degree[b] += 1;
        }
        let mut alive = [true; UNIT_SIZE];
        loop {
            let Some(leaf) = (0..UNIT_SIZE).find(|&n| alive[n] && degree[n] <= 1) else {
                break;
            };
            alive[leaf] = false;
            for &(a, b) in &self.edges {
                if a == leaf && alive[b] {
                    degree[b] -= 1;
                } else if b == leaf && alive[a] {
                    degree[a] -= 1;
                }
            }
        }
        alive.iter().filter(|&&a| a).count()
    }
}

const LAYOUTS: [Layout; 8] = [
    Layout {
        name: "square with flanking rooms",
        edges: [(0, 1), (1, 2), (2, 3), (3, 0), (1, 4), (3, 5)],
    },
    Layout {
        name: "square with a tail",
        edges: [(0, 1), (1, 2), (2, 3), (3, 0), (2, 4), (4, 5)],
    },
    Layout {
        name: "square with twin dead ends",
        edges: [(0, 1), (1, 2), (2, 3), (3, 0), (0, 4), (0, 5)],
    },
    Layout {
        name: "triangle with a long tail",
        edges: [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5)],
    },
    Layout {
        name: "triangle with three spurs",
        edges: [(0, 1), (1, 2), (2, 0), (0, 3), (1, 4), (2, 5)],
    },
    Layout {
        name: "triangle with a fork",
        edges: [(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (3, 5)],
    },
    Layout {
        name: "triangle with a hub",
        edges: [(0, 1), (1, 2), (2, 0), (1, 3), (1, 4), (4, 5)],
    },
    Layout {
        name: "triangle with a passage and a spur",
        edges: [(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (1, 5)],
    },
];

/// Every layout in the catalog.
#[must_use]
pub const fn layouts() -> &'static [Layout] {
    &LAYOUTS
}

/// The layout at `index`, if it exists.
#[must_use]
pub fn layout(index: usize) -> Option<&'static Layout> {
    LAYOUTS.get(index)
}

/// Uniformly random catalog index.
pub fn random_layout_index<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.gen_range(0..LAYOUTS.len())
}
