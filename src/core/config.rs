//! Match configuration.
//!
//! The rule set is fixed; configuration only covers how a match is seeded
//! and seated:
//! - `seed`: drives dice and any random draw the driver performs
//! - `first_group`: who moves first (`None` draws it from the RNG)
//! - `shuffle_seating`: shuffle the player names before seating them
//! - `players`: display names, in seating order

use serde::{Deserialize, Serialize};

use super::group::{Group, GROUP_COUNT};

/// Consecutive turns a player may take on sixes before the turn passes.
pub const MAX_SEQUENCE: u8 = 3;

/// Rolls that let a token leave its spawn.
pub const EXIT_ROLLS: [u8; 2] = [1, 6];

/// Roll that grants an extra turn.
pub const BONUS_ROLL: u8 = 6;

/// Configuration for a new match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// RNG seed.
    pub seed: u64,

    /// Group that moves first. `None` draws it at random.
    pub first_group: Option<Group>,

    /// Shuffle player names before assigning them to groups.
    pub shuffle_seating: bool,

    /// Player display names in group order.
    pub players: [String; GROUP_COUNT],
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            first_group: None,
            shuffle_seating: true,
            players: Group::ALL.map(|g| g.name().to_string()),
        }
    }
}

impl MatchConfig {
    /// Start a builder with default values.
    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder::default()
    }
}

/// Builder for [`MatchConfig`].
#[derive(Clone, Debug, Default)]
pub struct MatchConfigBuilder {
    config: MatchConfig,
}

impl MatchConfigBuilder {
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn first_group(mut self, group: Group) -> Self {
        self.config.first_group = Some(group);
        self
    }

    pub fn shuffle_seating(mut self, shuffle: bool) -> Self {
        self.config.shuffle_seating = shuffle;
        self
    }

    pub fn players(mut self, names: [impl Into<String>; GROUP_COUNT]) -> Self {
        self.config.players = names.map(Into::into);
        self
    }

    pub fn build(self) -> MatchConfig {
        self.config
    }
}
