//! # parques
//!
//! Board movement and turn engine for a four-player cross-and-circle race
//! game (Ludo / Parquès).
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: the board and the turn state are owned structs
//!    passed by reference. There are no process-wide mutable singletons, so
//!    any number of matches can run side by side.
//!
//! 2. **Typed Outcomes**: every failure is a [`LudoError`]. "No legal move"
//!    is `Ok(None)` from the resolver, never an error.
//!
//! 3. **Deterministic**: dice and seating come from a seeded RNG, and a
//!    match is fully described by its move log.
//!
//! ## Modules
//!
//! - `core`: points, groups, tokens, errors, RNG, configuration
//! - `board`: board geometry, path advancement, occupancy, token positions
//! - `rules`: move resolution and committing moves (captures, blocks)
//! - `engine`: turn state machine, dice, players, persistence, replay
//!
//! ## Example
//!
//! ```
//! use parques::{Dice, Group, TurnEngine, TokenId, Point};
//!
//! let mut engine = TurnEngine::new();
//! engine.reset(Group::Green);
//!
//! let mut dice = Dice::new();
//! dice.set(6).unwrap();
//! engine.play(&mut dice, Some(TokenId::new(0).unwrap())).unwrap();
//!
//! assert_eq!(engine.board().position(TokenId::new(0).unwrap()), Point::new(5, 6));
//! // A six keeps the turn.
//! assert_eq!(engine.current(), Some(Group::Green));
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Point, Group, GroupMap, TokenId,
    LudoError, Result,
    GameRng,
    MatchConfig, MatchConfigBuilder,
};

pub use crate::board::{BoardGeometry, BoardState, PathSegment, StepOutcome};

pub use crate::rules::{apply_move, possible_moves, resolve_move, Landing, MoveReport};

pub use crate::engine::{
    Dice, DiceSource, PlayerRegistry,
    TurnEngine, TurnState,
    MatchRecord, MoveRecord, Replay, replay,
    MatchSession,
};
