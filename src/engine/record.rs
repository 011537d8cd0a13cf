//! Persisted match log.
//!
//! A match is fully described by its seating, the group that moved first,
//! and the ordered list of plays. The dice seed rides along so a reloaded
//! match keeps throwing from a known stream. Raw ids are stored rather than typed ones
//! so that nothing is trusted until [`MatchRecord::validate`] has run.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{Group, LudoError, Result, TokenId, DIE_FACES, GROUP_COUNT, TOKEN_COUNT};

/// One committed play: a move, or a pass when `token` is `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Raw token id, `None` for "no legal move".
    pub token: Option<u8>,
    /// Dice value used.
    pub steps: u8,
    /// Turn number the play happened in.
    pub turn: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(token: Option<TokenId>, steps: u8, turn: u32) -> Self {
        Self {
            token: token.map(TokenId::raw),
            steps,
            turn,
        }
    }

    /// Typed token id.
    pub fn token_id(&self) -> Result<Option<TokenId>> {
        self.token.map(TokenId::new).transpose()
    }
}

/// Everything needed to rebuild a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Player names in group order.
    pub players: [String; GROUP_COUNT],
    /// Index of the group that moved first.
    pub first_group: u8,
    /// Seed of the session's dice stream.
    #[serde(default)]
    pub seed: u64,
    pub moves: Vec<MoveRecord>,
}

impl MatchRecord {
    /// Check field ranges. Does not replay the moves.
    pub fn validate(&self) -> Result<()> {
        Group::from_index(self.first_group)
            .map_err(|_| LudoError::invalid_data(format!("first group {} out of range", self.first_group)))?;

        for (i, m) in self.moves.iter().enumerate() {
            if let Some(id) = m.token {
                if id as usize >= TOKEN_COUNT {
                    return Err(LudoError::invalid_data(format!("move {i}: token id {id} out of range")));
                }
            }
            if !(1..=DIE_FACES).contains(&m.steps) {
                return Err(LudoError::invalid_data(format!("move {i}: steps {} out of range", m.steps)));
            }
        }
        Ok(())
    }

    /// Typed first group.
    pub fn first(&self) -> Result<Group> {
        Group::from_index(self.first_group)
    }

    /// Binary encoding.
    pub fn encode(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| LudoError::invalid_data(e.to_string()))
    }

    /// Decode and range-check a record.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let record: Self = bincode::deserialize(bytes).map_err(|e| {
            warn!(error = %e, "rejected match data");
            LudoError::invalid_data(e.to_string())
        })?;
        record.validate().inspect_err(|e| warn!(error = %e, "rejected match data"))?;
        Ok(record)
    }
}
