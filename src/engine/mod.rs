//! Turn engine and its collaborators.
//!
//! - `state`: the `NotStarted` / `InProgress` / `Ended` state machine
//! - `turn`: `TurnEngine`, which owns the board and applies plays
//! - `dice`, `players`: the dice source and the name registry
//! - `record`, `replay`: the persisted log and rebuilding a match from it
//! - `session`: a single-match slot for drivers

pub mod dice;
pub mod players;
pub mod state;
pub mod turn;
pub mod record;
pub mod replay;
pub mod session;

pub use dice::{Dice, DiceSource};
pub use players::PlayerRegistry;
pub use state::{TurnState, Winners};
pub use turn::TurnEngine;
pub use record::{MatchRecord, MoveRecord};
pub use replay::{replay, Replay};
pub use session::MatchSession;
