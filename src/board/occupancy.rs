//! Per-cell occupancy index.
//!
//! `Occupancy` answers "which tokens stand on this cell" without scanning
//! every token. It is updated on every relocation, so stack rules can be
//! checked where the board is mutated:
//! - exactly two same-group tokens on a cell form a block
//! - more than two tokens, or two tokens of different groups, may only
//!   share a cell while a group's tokens collect on their finish point

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{Point, TokenId, TOKENS_PER_GROUP};

/// Tokens sharing one cell, kept sorted by id.
pub type Stack = SmallVec<[TokenId; TOKENS_PER_GROUP]>;

/// Size of a block.
pub const BLOCK_SIZE: usize = 2;

/// Cell → tokens index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Occupancy {
    cells: FxHashMap<Point, Stack>,
}

impl Occupancy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `token` as standing on `point`.
    pub fn insert(&mut self, token: TokenId, point: Point) {
        let stack = self.cells.entry(point).or_default();
        if let Err(slot) = stack.binary_search(&token) {
            stack.insert(slot, token);
        }
    }

    /// Forget `token` on `point`. Returns whether it was there.
    pub fn remove(&mut self, token: TokenId, point: Point) -> bool {
        let Some(stack) = self.cells.get_mut(&point) else {
            return false;
        };
        let Ok(slot) = stack.binary_search(&token) else {
            return false;
        };
        stack.remove(slot);
        if stack.is_empty() {
            self.cells.remove(&point);
        }
        true
    }

    /// Tokens on a cell, sorted by id.
    #[must_use]
    pub fn tokens_at(&self, point: Point) -> &[TokenId] {
        self.cells.get(&point).map_or(&[], |stack| stack.as_slice())
    }

    #[must_use]
    pub fn count_at(&self, point: Point) -> usize {
        self.tokens_at(point).len()
    }

    #[must_use]
    pub fn is_empty_at(&self, point: Point) -> bool {
        !self.cells.contains_key(&point)
    }

    /// Whether the cell holds a block: exactly two tokens of one group.
    #[must_use]
    pub fn is_block(&self, point: Point) -> bool {
        match self.tokens_at(point) {
            [a, b] => a.group() == b.group(),
            _ => false,
        }
    }

    /// Occupied cells with their stacks.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &[TokenId])> + '_ {
        self.cells.iter().map(|(&point, stack)| (point, stack.as_slice()))
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
