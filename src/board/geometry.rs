//! Static board geometry.
//!
//! The board is described by straight, axis-aligned segments:
//! - a spawn area per group (four origin points and one exit point)
//! - the shared main track, four quarter polylines forming a loop that every
//!   group travels in the same direction
//! - a central path per group, from the track cell where the group turns off
//!   (`from`) to its finish point
//!
//! Corners are expanded into cell lists once, when the geometry is built, so
//! that every lookup afterwards is a hash or slice lookup.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Group, GroupMap, Point, TokenId, TOKENS_PER_GROUP};

/// A group's private starting area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    /// One origin per token, indexed by the token's slot in its group.
    pub origins: [Point; TOKENS_PER_GROUP],
    /// Track cell a token lands on when it leaves the spawn.
    pub exit: Point,
}

/// A group's home stretch.
///
/// `from` lies on the main track: it is where the group leaves the loop.
/// Overflowing past `finish` re-enters at the first cell after `from`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentralPath {
    pub from: Point,
    pub finish: Point,
}

/// Corner-level description of a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub spawns: [Spawn; 4],
    /// Corners of each quarter of the loop, in travel order.
    pub quarters: [[Point; 4]; 4],
    pub central: [CentralPath; 4],
}

const fn p(row: i32, col: i32) -> Point {
    Point::new(row, col)
}

/// The 15×15 reference board.
pub const REFERENCE_LAYOUT: Layout = Layout {
    spawns: [
        Spawn {
            origins: [p(2, 2), p(2, 3), p(3, 2), p(3, 3)],
            exit: p(6, 1),
        },
        Spawn {
            origins: [p(2, 11), p(2, 12), p(3, 11), p(3, 12)],
            exit: p(1, 8),
        },
        Spawn {
            origins: [p(11, 11), p(11, 12), p(12, 11), p(12, 12)],
            exit: p(8, 13),
        },
        Spawn {
            origins: [p(11, 2), p(11, 3), p(12, 2), p(12, 3)],
            exit: p(13, 6),
        },
    ],
    quarters: [
        [p(8, 5), p(8, 0), p(6, 0), p(6, 5)],
        [p(5, 6), p(0, 6), p(0, 8), p(5, 8)],
        [p(6, 9), p(6, 14), p(8, 14), p(8, 9)],
        [p(9, 8), p(14, 8), p(14, 6), p(9, 6)],
    ],
    central: [
        CentralPath { from: p(7, 0), finish: p(7, 6) },
        CentralPath { from: p(0, 7), finish: p(6, 7) },
        CentralPath { from: p(7, 14), finish: p(7, 8) },
        CentralPath { from: p(14, 7), finish: p(8, 7) },
    ],
};

/// Expand a polyline given by its corners into every cell it covers.
fn expand(corners: &[Point]) -> Vec<Point> {
    let mut cells = Vec::new();
    let Some(&first) = corners.first() else {
        return cells;
    };
    cells.push(first);
    for pair in corners.windows(2) {
        debug_assert!(
            pair[0].row == pair[1].row || pair[0].col == pair[1].col,
            "segment {} -> {} is not axis-aligned",
            pair[0],
            pair[1]
        );
        let mut current = pair[0];
        while let Some(next) = current.step_towards(pair[1]) {
            cells.push(next);
            current = next;
        }
    }
    cells
}

/// Where a point sits for a given group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Location {
    Spawn,
    /// Index into the main track loop.
    Track(usize),
    /// Index into the group's home stretch (`0` is `from`).
    Home(usize),
}

/// Expanded, read-only board geometry.
#[derive(Clone, Debug)]
pub struct BoardGeometry {
    spawns: GroupMap<Spawn>,
    central: GroupMap<CentralPath>,
    /// Main track cells in travel order.
    track: Vec<Point>,
    /// Quarter index for each track cell.
    quarter: Vec<u8>,
    track_index: FxHashMap<Point, usize>,
    /// Home stretch cells from `from` to `finish`, inclusive.
    home: GroupMap<Vec<Point>>,
}

impl BoardGeometry {
    /// Build a geometry from its corner description.
    #[must_use]
    pub fn from_layout(layout: &Layout) -> Self {
        let mut track = Vec::new();
        let mut quarter = Vec::new();
        for (q, corners) in layout.quarters.iter().enumerate() {
            let cells = expand(corners);
            quarter.extend(std::iter::repeat(q as u8).take(cells.len()));
            track.extend(cells);
        }

        let track_index = track
            .iter()
            .enumerate()
            .map(|(i, &point)| (point, i))
            .collect();

        let home = GroupMap::new(|g| {
            let c = layout.central[g.index()];
            expand(&[c.from, c.finish])
        });

        Self {
            spawns: GroupMap::from_array(layout.spawns),
            central: GroupMap::from_array(layout.central),
            track,
            quarter,
            track_index,
            home,
        }
    }

    /// The shared reference board.
    pub fn reference() -> &'static BoardGeometry {
        static GEOMETRY: OnceLock<BoardGeometry> = OnceLock::new();
        GEOMETRY.get_or_init(|| BoardGeometry::from_layout(&REFERENCE_LAYOUT))
    }

    #[must_use]
    pub fn spawn(&self, group: Group) -> &Spawn {
        &self.spawns[group]
    }

    /// The four spawn origins of a group.
    #[must_use]
    pub fn spawn_points(&self, group: Group) -> &[Point; TOKENS_PER_GROUP] {
        &self.spawns[group].origins
    }

    /// The spawn origin assigned to a token.
    #[must_use]
    pub fn spawn_point(&self, token: TokenId) -> Point {
        self.spawns[token.group()].origins[token.slot()]
    }

    #[must_use]
    pub fn spawn_exit(&self, group: Group) -> Point {
        self.spawns[group].exit
    }

    #[must_use]
    pub fn central(&self, group: Group) -> &CentralPath {
        &self.central[group]
    }

    #[must_use]
    pub fn finish(&self, group: Group) -> Point {
        self.central[group].finish
    }

    /// Finish points of every group.
    #[must_use]
    pub fn finish_points(&self) -> GroupMap<Point> {
        GroupMap::new(|g| self.finish(g))
    }

    /// Main track cells in travel order.
    #[must_use]
    pub fn track(&self) -> &[Point] {
        &self.track
    }

    /// Home stretch of a group, from the turn-off cell to the finish.
    #[must_use]
    pub fn home_stretch(&self, group: Group) -> &[Point] {
        &self.home[group]
    }

    #[must_use]
    pub fn is_spawn(&self, point: Point, group: Group) -> bool {
        self.spawns[group].origins.contains(&point)
    }

    #[must_use]
    pub fn is_finish(&self, point: Point, group: Group) -> bool {
        self.finish(group) == point
    }

    /// Quarter of the loop a track index belongs to.
    pub(crate) fn quarter_of(&self, track_index: usize) -> u8 {
        self.quarter[track_index]
    }

    /// Classify a point for a group. The home stretch wins over the track.
    pub(crate) fn locate(&self, point: Point, group: Group) -> Option<Location> {
        if let Some(i) = self.home[group].iter().position(|&cell| cell == point) {
            Some(Location::Home(i))
        } else if let Some(&i) = self.track_index.get(&point) {
            Some(Location::Track(i))
        } else if self.is_spawn(point, group) {
            Some(Location::Spawn)
        } else {
            None
        }
    }
}
