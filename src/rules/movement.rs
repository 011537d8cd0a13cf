//! Committing a resolved move to the board.
//!
//! The whole stack on the mover's cell travels together. What happens on
//! arrival depends on who is already there:
//! - nobody, or the mover's own finish: the stack just moves in
//! - one token of the same group: the two merge into a block
//! - one opposing token: it is captured and sent back to its spawn
//! - an opposing block: both stacks are sent back to their spawns

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use super::resolver::resolve_move;
use crate::board::{BoardState, Stack, BLOCK_SIZE};
use crate::core::{Point, Result, TokenId};

/// What the moving stack found on its destination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Landing {
    /// Empty cell.
    Empty,
    /// The group's finish point.
    Finish,
    /// Joined a lone token of its own group.
    Merge,
    /// Captured lone opposing tokens.
    Capture { captured: Stack },
    /// Hit an opposing block; every token involved went back to spawn.
    MutualElimination { eliminated: Stack },
}

/// Outcome of one committed move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Token that was played.
    pub token: TokenId,
    pub from: Point,
    /// Resolved destination (before any elimination).
    pub to: Point,
    /// Every token that travelled with the played one.
    pub moved: Stack,
    pub landing: Landing,
}

impl MoveReport {
    /// Tokens sent back to spawn by this move.
    #[must_use]
    pub fn sent_to_spawn(&self) -> &[TokenId] {
        match &self.landing {
            Landing::Capture { captured } => captured,
            Landing::MutualElimination { eliminated } => eliminated,
            _ => &[],
        }
    }
}

/// Resolve and commit a move.
///
/// Returns `Ok(None)` and leaves the board untouched when the token has no
/// legal destination, including the `steps == 0` no-op.
#[instrument(level = "debug", skip(board))]
pub fn apply_move(board: &mut BoardState, token: TokenId, steps: i32) -> Result<Option<MoveReport>> {
    let from = board.position(token);
    let Some(to) = resolve_move(board, token, steps)? else {
        debug!(%token, steps, "no legal destination");
        return Ok(None);
    };
    if to == from {
        return Ok(None);
    }

    let group = token.group();
    let moved = board.stack_of(token);
    let residents: Stack = SmallVec::from_slice(board.tokens_at(to));
    let finish = board.geometry().finish(group);

    let landing = if to == finish || residents.is_empty() {
        relocate_all(board, &moved, to);
        if to == finish {
            Landing::Finish
        } else {
            Landing::Empty
        }
    } else if residents.len() >= BLOCK_SIZE {
        for &t in residents.iter().chain(moved.iter()) {
            board.send_to_spawn(t);
        }
        let eliminated: Stack = residents.iter().chain(moved.iter()).copied().collect();
        info!(%token, at = %to, ?eliminated, "blocks eliminated each other");
        Landing::MutualElimination { eliminated }
    } else if residents.iter().all(|t| t.group() == group) {
        relocate_all(board, &moved, to);
        Landing::Merge
    } else {
        for &t in &residents {
            board.send_to_spawn(t);
        }
        relocate_all(board, &moved, to);
        info!(%token, at = %to, captured = ?residents, "capture");
        Landing::Capture { captured: residents }
    };

    debug_assert_eq!(board.stack_violation(), None, "stacking rules broken by {token}");
    debug!(%token, %from, %to, ?landing, "move committed");

    Ok(Some(MoveReport {
        token,
        from,
        to,
        moved,
        landing,
    }))
}

fn relocate_all(board: &mut BoardState, tokens: &[TokenId], to: Point) {
    for &t in tokens {
        board.relocate(t, to);
    }
}
