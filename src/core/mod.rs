//! Core value types: points, groups, tokens, errors, RNG, configuration.
//!
//! Everything here is plain data shared by the board, rules and engine
//! modules. None of it knows about the board layout.

pub mod point;
pub mod group;
pub mod error;
pub mod rng;
pub mod config;

pub use point::Point;
pub use group::{Group, GroupMap, TokenId, GROUP_COUNT, TOKENS_PER_GROUP, TOKEN_COUNT};
pub use error::{LudoError, Result};
pub use rng::{GameRng, DIE_FACES};
pub use config::{MatchConfig, MatchConfigBuilder, BONUS_ROLL, EXIT_ROLLS, MAX_SEQUENCE};
