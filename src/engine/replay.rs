//! Rebuilding a match from its log.
//!
//! [`replay`] re-applies a whole record and only hands back the engine if
//! every play succeeds, so a corrupt record never leaves a half-built match
//! behind. [`Replay`] walks a record one play at a time for spectating.

use tracing::{instrument, warn};

use super::dice::Dice;
use super::record::{MatchRecord, MoveRecord};
use super::turn::TurnEngine;
use crate::core::{LudoError, Result};
use crate::rules::MoveReport;

/// Apply one logged play to `engine`.
fn apply_record(engine: &mut TurnEngine, index: usize, record: &MoveRecord) -> Result<Option<MoveReport>> {
    let reject = |reason: String| {
        warn!(index, %reason, "match log does not replay");
        LudoError::invalid_data(format!("move {index}: {reason}"))
    };

    if record.turn != engine.turn_number() {
        return Err(reject(format!(
            "logged in turn {} but replayed in turn {}",
            record.turn,
            engine.turn_number()
        )));
    }
    let token = record.token_id().map_err(|e| reject(e.to_string()))?;
    let mut dice = Dice::new();
    dice.set(record.steps).map_err(|e| reject(e.to_string()))?;
    engine.play(&mut dice, token).map_err(|e| reject(e.to_string()))
}

/// Rebuild the engine described by `record`.
#[instrument(level = "debug", skip(record), fields(moves = record.moves.len()))]
pub fn replay(record: &MatchRecord) -> Result<TurnEngine> {
    record.validate()?;
    let first = record.first()?;

    let mut engine = TurnEngine::new();
    engine.reset(first);
    for (index, m) in record.moves.iter().enumerate() {
        apply_record(&mut engine, index, m)?;
    }
    Ok(engine)
}

/// Step-by-step playback of a recorded match.
#[derive(Clone, Debug)]
pub struct Replay {
    record: MatchRecord,
    engine: TurnEngine,
    cursor: usize,
}

impl Replay {
    /// Check that the whole record replays, then position at the start.
    pub fn new(record: MatchRecord) -> Result<Self> {
        replay(&record)?;
        let mut engine = TurnEngine::new();
        engine.reset(record.first()?);
        Ok(Self {
            record,
            engine,
            cursor: 0,
        })
    }

    /// Apply the next play. `None` once every play has been shown.
    pub fn step_forward(&mut self) -> Result<Option<(MoveRecord, Option<MoveReport>)>> {
        let Some(&next) = self.record.moves.get(self.cursor) else {
            return Ok(None);
        };
        let report = apply_record(&mut self.engine, self.cursor, &next)?;
        self.cursor += 1;
        Ok(Some((next, report)))
    }

    /// Back to the initial position.
    pub fn rewind(&mut self) -> Result<()> {
        self.engine.reset(self.record.first()?);
        self.cursor = 0;
        Ok(())
    }

    /// Plays applied so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.record.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record.moves.is_empty()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor == self.record.moves.len()
    }

    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    #[must_use]
    pub fn record(&self) -> &MatchRecord {
        &self.record
    }
}
