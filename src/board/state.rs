//! Board state: where every token stands.

use smallvec::SmallVec;

use super::geometry::BoardGeometry;
use super::occupancy::{Occupancy, Stack, BLOCK_SIZE};
use crate::core::{Group, LudoError, Point, Result, TokenId, GROUP_COUNT, TOKENS_PER_GROUP, TOKEN_COUNT};

/// Token → point mapping plus the matching per-cell index.
///
/// Every position is kept reachable for the token's group; the two views
/// are only ever changed together through [`BoardState::relocate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    positions: [Point; TOKEN_COUNT],
    occupancy: Occupancy,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// A board with every token on its spawn point.
    #[must_use]
    pub fn new() -> Self {
        let geometry = BoardGeometry::reference();
        let mut positions = [Point::new(0, 0); TOKEN_COUNT];
        let mut occupancy = Occupancy::new();
        for token in TokenId::all() {
            let spawn = geometry.spawn_point(token);
            positions[token.index()] = spawn;
            occupancy.insert(token, spawn);
        }
        Self { positions, occupancy }
    }

    /// Geometry the board is laid out on.
    #[must_use]
    pub fn geometry(&self) -> &'static BoardGeometry {
        BoardGeometry::reference()
    }

    /// Send every token back to its spawn.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn position(&self, token: TokenId) -> Point {
        self.positions[token.index()]
    }

    /// Positions of all tokens, indexed by token id.
    #[must_use]
    pub fn positions(&self) -> &[Point; TOKEN_COUNT] {
        &self.positions
    }

    /// Positions of one group's tokens.
    #[must_use]
    pub fn group_positions(&self, group: Group) -> [(TokenId, Point); TOKENS_PER_GROUP] {
        std::array::from_fn(|slot| {
            let token = TokenId::of(group, slot);
            (token, self.position(token))
        })
    }

    #[must_use]
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Tokens on a cell, sorted by id.
    #[must_use]
    pub fn tokens_at(&self, point: Point) -> &[TokenId] {
        self.occupancy.tokens_at(point)
    }

    /// Tokens on any of the given cells, sorted by id.
    #[must_use]
    pub fn tokens_at_any(&self, points: &[Point]) -> Vec<TokenId> {
        TokenId::all()
            .filter(|&token| points.contains(&self.position(token)))
            .collect()
    }

    #[must_use]
    pub fn count_at(&self, point: Point) -> usize {
        self.occupancy.count_at(point)
    }

    /// Tokens that move together with `token`: everything on its cell.
    #[must_use]
    pub fn stack_of(&self, token: TokenId) -> Stack {
        SmallVec::from_slice(self.tokens_at(self.position(token)))
    }

    /// Whether `token` is part of a block.
    #[must_use]
    pub fn is_in_block(&self, token: TokenId) -> bool {
        self.occupancy.is_block(self.position(token))
    }

    #[must_use]
    pub fn in_spawn(&self, token: TokenId) -> bool {
        self.geometry().is_spawn(self.position(token), token.group())
    }

    #[must_use]
    pub fn at_finish(&self, token: TokenId) -> bool {
        self.geometry().is_finish(self.position(token), token.group())
    }

    /// Whether all four tokens of a group stand on its finish point.
    #[must_use]
    pub fn is_group_finished(&self, group: Group) -> bool {
        self.count_at(self.geometry().finish(group)) == TOKENS_PER_GROUP
    }

    /// Groups whose tokens have all reached their finish, in group order.
    #[must_use]
    pub fn finished_groups(&self) -> SmallVec<[Group; GROUP_COUNT]> {
        Group::ALL
            .into_iter()
            .filter(|&group| self.is_group_finished(group))
            .collect()
    }

    /// Put a token on an arbitrary cell of its group's path, ignoring other
    /// tokens. Used to set up positions; regular play goes through the
    /// resolver.
    pub fn place_token(&mut self, token: TokenId, point: Point) -> Result<()> {
        let group = token.group();
        if !self.geometry().is_reachable(point, group) {
            return Err(LudoError::NotOnPath { point, group });
        }
        self.relocate(token, point);
        Ok(())
    }

    /// Send a token back to its spawn point.
    pub fn send_to_spawn(&mut self, token: TokenId) {
        let spawn = self.geometry().spawn_point(token);
        self.relocate(token, spawn);
    }

    /// Move one token, keeping the occupancy index in step.
    pub(crate) fn relocate(&mut self, token: TokenId, point: Point) {
        let old = self.positions[token.index()];
        self.occupancy.remove(token, old);
        self.occupancy.insert(token, point);
        self.positions[token.index()] = point;
    }

    /// First cell that breaks the stacking rules, if any.
    ///
    /// Two tokens on a cell must share a group; more than two may only
    /// collect on their own finish point.
    #[must_use]
    pub fn stack_violation(&self) -> Option<Point> {
        let geometry = self.geometry();
        self.occupancy
            .iter()
            .find(|(point, stack)| {
                let Some(first) = stack.first() else {
                    return false;
                };
                let group = first.group();
                let same_group = stack.iter().all(|t| t.group() == group);
                let at_finish = geometry.is_finish(*point, group);
                !same_group || (stack.len() > BLOCK_SIZE && !at_finish)
            })
            .map(|(point, _)| point)
    }
}
