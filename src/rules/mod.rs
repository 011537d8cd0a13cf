//! Move resolver and move commit.
//!
//! `resolver` answers "where would this token go" without touching the
//! board; `movement` applies a resolved move, including captures and
//! mutual elimination of blocks.

pub mod resolver;
pub mod movement;

pub use resolver::{has_any_move, possible_moves, resolve_move};
pub use movement::{apply_move, Landing, MoveReport};
