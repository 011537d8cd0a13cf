//! Turn state machine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Group, GROUP_COUNT};

/// Groups in the order they finished.
pub type Winners = SmallVec<[Group; GROUP_COUNT]>;

/// Where a match stands.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// No match has been set up.
    #[default]
    NotStarted,
    InProgress {
        current: Group,
        /// Consecutive moves taken by `current` in this turn.
        sequence: u8,
        winners: Winners,
    },
    Ended { winners: Winners },
}

impl TurnState {
    /// Group whose turn it is, if a match is running.
    #[must_use]
    pub fn current(&self) -> Option<Group> {
        match self {
            TurnState::InProgress { current, .. } => Some(*current),
            _ => None,
        }
    }

    #[must_use]
    pub fn sequence(&self) -> u8 {
        match self {
            TurnState::InProgress { sequence, .. } => *sequence,
            _ => 0,
        }
    }

    /// Finished groups, first finisher first.
    #[must_use]
    pub fn winners(&self) -> &[Group] {
        match self {
            TurnState::NotStarted => &[],
            TurnState::InProgress { winners, .. } | TurnState::Ended { winners } => winners,
        }
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        matches!(self, TurnState::Ended { .. })
    }
}
