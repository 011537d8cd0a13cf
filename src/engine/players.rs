//! Player registry: display names by group.
//!
//! Names are only used for announcements; game logic works on [`Group`].

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Group, GroupMap, GROUP_COUNT};

/// Display names of the four players, one per group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    names: GroupMap<String>,
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self {
            names: GroupMap::new(|_| String::new()),
        }
    }
}

impl PlayerRegistry {
    /// Registry with the given names in group order.
    pub fn new(names: [impl Into<String>; GROUP_COUNT]) -> Self {
        Self {
            names: GroupMap::from_array(names.map(Into::into)),
        }
    }

    /// Seat players, shuffling the names first when `shuffle` is set.
    pub fn seat(names: [String; GROUP_COUNT], shuffle: bool, rng: &mut GameRng) -> Self {
        let mut names = names;
        if shuffle {
            rng.shuffle(&mut names);
        }
        Self::new(names)
    }

    pub fn set_player(&mut self, group: Group, name: impl Into<String>) {
        self.names[group] = name.into();
    }

    pub fn set_players(&mut self, names: [impl Into<String>; GROUP_COUNT]) {
        self.names = GroupMap::from_array(names.map(Into::into));
    }

    #[must_use]
    pub fn player(&self, group: Group) -> &str {
        &self.names[group]
    }

    /// Names in group order.
    #[must_use]
    pub fn players(&self) -> &[String; GROUP_COUNT] {
        self.names.as_array()
    }

    /// Human-readable turn announcement.
    #[must_use]
    pub fn announce_turn(&self, group: Group) -> String {
        let name = self.player(group);
        if name.is_empty() {
            format!("{group} to play")
        } else {
            format!("{name} ({group}) to play")
        }
    }
}
