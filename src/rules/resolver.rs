//! Move resolution: where a token ends up for a given roll.
//!
//! Resolution only reads the board. It walks the token's path cell by cell
//! and applies, in order:
//! 1. spawn exits need a roll of 1 or 6; a token on its finish never moves
//! 2. reaching the finish exactly always succeeds; overflowing past it is
//!    allowed only if the re-entry cell has room for the moving stack
//! 3. a lone token cannot pass a block and stops on the cell before it;
//!    a moving block passes over anything
//! 4. landing: empty cells and single tokens accept a lone mover; a block
//!    may land on opposing tokens but not on its own group, in which case it
//!    stops one cell short

use tracing::{instrument, trace};

use crate::board::{BoardState, BLOCK_SIZE};
use crate::core::{Group, Point, Result, TokenId, EXIT_ROLLS, TOKENS_PER_GROUP};

/// Destination of `token` after `steps` cells, or `None` if it cannot move.
///
/// `steps == 0` is a no-op and resolves to the current position.
#[instrument(level = "trace", skip(board))]
pub fn resolve_move(board: &BoardState, token: TokenId, steps: i32) -> Result<Option<Point>> {
    let geometry = board.geometry();
    let group = token.group();
    let origin = board.position(token);

    // Validates the step count and the origin before any rule applies.
    let path = geometry.path(origin, group, steps)?;
    if steps == 0 {
        return Ok(Some(origin));
    }

    if geometry.is_spawn(origin, group) && !EXIT_ROLLS.iter().any(|&roll| i32::from(roll) == steps) {
        trace!(%token, steps, "spawn exit needs 1 or 6");
        return Ok(None);
    }

    let finish = geometry.finish(group);
    if origin == finish {
        return Ok(None);
    }

    let Some(&destination) = path.last() else {
        return Ok(None);
    };
    if destination == origin {
        return Ok(None);
    }

    let moving = board.count_at(origin);
    let is_block = moving == BLOCK_SIZE;

    for (i, &cell) in path.iter().enumerate().skip(1) {
        if cell == finish {
            if i == path.len() - 1 {
                return Ok(Some(finish));
            }
            // Overflowed: the last path cell is the home stretch re-entry.
            if board.count_at(destination) + moving > BLOCK_SIZE {
                trace!(%token, %destination, "no room to re-enter after overflow");
                return Ok(None);
            }
            return Ok(Some(destination));
        }
        if !is_block && board.occupancy().count_at(cell) == BLOCK_SIZE {
            trace!(%token, %cell, "blocked");
            if i == 1 {
                return Ok(None);
            }
            return Ok(Some(path[i - 1]));
        }
    }

    let residents = board.tokens_at(destination);
    let accepts = match residents {
        [] => true,
        [_] if !is_block => true,
        [first, ..] => is_block && first.group() != group,
    };
    if accepts {
        return Ok(Some(destination));
    }

    // A block cannot stack onto its own group; try the cell before.
    let short = path[path.len() - 2];
    if short == origin || holds_group(board, short, group) {
        return Ok(None);
    }
    Ok(Some(short))
}

fn holds_group(board: &BoardState, point: Point, group: Group) -> bool {
    board.tokens_at(point).iter().any(|t| t.group() == group)
}

/// Resolution for each of a group's four tokens.
pub fn possible_moves(
    board: &BoardState,
    group: Group,
    steps: i32,
) -> Result<[(TokenId, Option<Point>); TOKENS_PER_GROUP]> {
    let mut moves = [(TokenId::of(group, 0), None); TOKENS_PER_GROUP];
    for (slot, entry) in moves.iter_mut().enumerate() {
        let token = TokenId::of(group, slot);
        *entry = (token, resolve_move(board, token, steps)?);
    }
    Ok(moves)
}

/// Whether any token of `group` has somewhere to go.
pub fn has_any_move(board: &BoardState, group: Group, steps: i32) -> Result<bool> {
    Ok(possible_moves(board, group, steps)?
        .iter()
        .any(|(_, destination)| destination.is_some()))
}
