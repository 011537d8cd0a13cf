//! Path model and board state.
//!
//! - `geometry`: the static board layout (spawns, shared loop, home stretches)
//! - `path`: segment classification and single/multi-step advancement
//! - `occupancy`: per-cell token index
//! - `state`: token positions for one match

pub mod geometry;
pub mod path;
pub mod occupancy;
pub mod state;

pub use geometry::{BoardGeometry, CentralPath, Layout, Spawn, REFERENCE_LAYOUT};
pub use path::{PathSegment, StepOutcome};
pub use occupancy::{Occupancy, Stack, BLOCK_SIZE};
pub use state::BoardState;
