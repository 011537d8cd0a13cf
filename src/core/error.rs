//! Error taxonomy shared by the path model, resolver and turn engine.
//!
//! Every failure is reported as a typed value. A resolver finding no legal
//! destination is not an error (it returns `Ok(None)`); only the turn engine
//! turns that into [`LudoError::CannotMovePiece`].

use derive_more::{Display, Error};

use super::group::{Group, TokenId};
use super::point::Point;

/// Errors reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum LudoError {
    /// Group index outside `0..4`.
    #[display("invalid group index {index}")]
    InvalidGroup { index: u8 },

    /// Token id outside `0..16`.
    #[display("invalid token id {id}")]
    InvalidPieceId { id: u8 },

    /// Token does not belong to the group whose turn it is.
    #[display("{token} does not belong to the current player ({current})")]
    InvalidPlayer { token: TokenId, current: Group },

    /// Negative step count requested.
    #[display("step count must not be negative, got {steps}")]
    NegativeSteps { steps: i32 },

    /// Dice value outside `1..=6`.
    #[display("dice value must be between 1 and 6, got {value}")]
    InvalidSteps { value: u8 },

    /// Point is not reachable for the group.
    #[display("{point} is not on the path of group {group}")]
    NotOnPath { point: Point, group: Group },

    /// The token has no legal destination for the current roll.
    #[display("{token} cannot move with the current roll")]
    CannotMovePiece { token: TokenId },

    /// "No legal move" was claimed while a legal move exists.
    #[display("a legal move exists; a token must be played")]
    InvalidPiece,

    /// `play` was called before the dice were thrown.
    #[display("the dice have not been thrown")]
    DiceNotThrown,

    /// No match has been started or loaded.
    #[display("no match is defined")]
    MatchNotDefined,

    /// A match is already running.
    #[display("a match is already in progress")]
    MatchInProgress,

    /// The match is over.
    #[display("the match has ended")]
    MatchEnded,

    /// Persisted match data is malformed or does not replay.
    #[display("invalid match data: {reason}")]
    InvalidData { reason: String },
}

impl LudoError {
    /// Build an [`LudoError::InvalidData`] from anything printable.
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        Self::InvalidData {
            reason: reason.into(),
        }
    }

    /// Whether the error is a rejected request (as opposed to "the request
    /// was valid but the token has nowhere to go").
    #[must_use]
    pub fn is_invalid_request(&self) -> bool {
        !matches!(self, Self::CannotMovePiece { .. })
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LudoError>;
