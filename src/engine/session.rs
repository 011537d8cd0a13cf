//! Match session: the single-match slot a driver talks to.
//!
//! The session owns the dice, the RNG and the player registry next to an
//! optional [`TurnEngine`]. At most one match is open at a time; starting or
//! loading another while one is open fails with
//! [`LudoError::MatchInProgress`].

use tracing::{info, instrument};

use super::dice::Dice;
use super::players::PlayerRegistry;
use super::record::MatchRecord;
use super::replay::replay;
use super::turn::TurnEngine;
use crate::board::BoardState;
use crate::core::{GameRng, Group, LudoError, MatchConfig, Result, TokenId};
use crate::rules::MoveReport;

/// Driver-facing API around one match.
#[derive(Clone, Debug)]
pub struct MatchSession {
    engine: Option<TurnEngine>,
    players: PlayerRegistry,
    dice: Dice,
    rng: GameRng,
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: None,
            players: PlayerRegistry::default(),
            dice: Dice::new(),
            rng: GameRng::new(0),
        }
    }

    /// Start a match. Returns the group that moves first.
    #[instrument(level = "debug", skip(self, config), fields(seed = config.seed))]
    pub fn new_match(&mut self, config: &MatchConfig) -> Result<Group> {
        if self.engine.is_some() {
            return Err(LudoError::MatchInProgress);
        }
        self.rng = GameRng::new(config.seed);
        self.players = PlayerRegistry::seat(config.players.clone(), config.shuffle_seating, &mut self.rng);
        let first = match config.first_group {
            Some(group) => group,
            None => self.rng.choose_group(),
        };

        let mut engine = TurnEngine::new();
        engine.reset(first);
        self.engine = Some(engine);
        self.dice.clear();
        info!(%first, players = ?self.players.players(), "match started");
        Ok(first)
    }

    /// Resume a match from its encoded record.
    pub fn load_match(&mut self, bytes: &[u8]) -> Result<()> {
        if self.engine.is_some() {
            return Err(LudoError::MatchInProgress);
        }
        let record = MatchRecord::decode(bytes)?;
        self.load_record(record)
    }

    /// Resume a match from an already decoded record.
    pub fn load_record(&mut self, record: MatchRecord) -> Result<()> {
        if self.engine.is_some() {
            return Err(LudoError::MatchInProgress);
        }
        let engine = replay(&record)?;
        self.rng = GameRng::resume(record.seed, record.moves.len());
        self.players.set_players(record.players);
        self.engine = Some(engine);
        self.dice.clear();
        Ok(())
    }

    /// Close the open match and hand back its record.
    pub fn close_match(&mut self) -> Option<MatchRecord> {
        let engine = self.engine.take()?;
        self.dice.clear();
        engine.record(self.players.players().clone(), self.rng.seed()).ok()
    }

    /// Record of the open match, without closing it.
    pub fn save(&self) -> Result<MatchRecord> {
        self.engine()?.record(self.players.players().clone(), self.rng.seed())
    }

    /// Encoded record of the open match.
    pub fn save_bytes(&self) -> Result<Vec<u8>> {
        self.save()?.encode()
    }

    pub fn engine(&self) -> Result<&TurnEngine> {
        self.engine.as_ref().ok_or(LudoError::MatchNotDefined)
    }

    pub fn board(&self) -> Result<&BoardState> {
        Ok(self.engine()?.board())
    }

    #[must_use]
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    pub fn set_player(&mut self, group: Group, name: impl Into<String>) {
        self.players.set_player(group, name);
    }

    /// Group to move.
    pub fn current_player(&self) -> Result<Group> {
        let engine = self.engine()?;
        engine.current().ok_or(LudoError::MatchEnded)
    }

    pub fn current_player_name(&self) -> Result<&str> {
        let group = self.current_player()?;
        Ok(self.players.player(group))
    }

    pub fn announce_turn(&self) -> Result<String> {
        Ok(self.players.announce_turn(self.current_player()?))
    }

    /// Throw the dice for the current player.
    ///
    /// An unused throw is kept: throwing again returns the same value until
    /// it has been played.
    pub fn throw_dice(&mut self) -> Result<u8> {
        self.current_player()?;
        if let Some(value) = self.dice.get() {
            return Ok(value);
        }
        Ok(self.dice.throw(&mut self.rng))
    }

    /// Force the dice value, for scripted drivers.
    pub fn set_dice(&mut self, value: u8) -> Result<()> {
        self.current_player()?;
        self.dice.set(value)
    }

    #[must_use]
    pub fn dice(&self) -> Option<u8> {
        self.dice.get()
    }

    /// Play a raw token id, or pass with `None`.
    pub fn play(&mut self, token: Option<u8>) -> Result<Option<MoveReport>> {
        let engine = self.engine.as_mut().ok_or(LudoError::MatchNotDefined)?;
        let token = token.map(TokenId::new).transpose()?;
        engine.play(&mut self.dice, token)
    }

    pub fn can_play(&self, steps: u8) -> Result<bool> {
        self.engine()?.can_play(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MatchConfig {
        MatchConfig::builder()
            .seed(11)
            .first_group(Group::Green)
            .shuffle_seating(false)
            .players(["Ana", "Bruno", "Caio", "Duda"])
            .build()
    }

    #[test]
    fn test_no_match_defined() {
        let mut session = MatchSession::new();
        assert_eq!(session.current_player(), Err(LudoError::MatchNotDefined));
        assert_eq!(session.current_player_name(), Err(LudoError::MatchNotDefined));
        assert_eq!(session.play(Some(0)), Err(LudoError::MatchNotDefined));
        assert_eq!(session.can_play(6), Err(LudoError::MatchNotDefined));
        assert_eq!(session.throw_dice(), Err(LudoError::MatchNotDefined));
        assert_eq!(session.close_match(), None);
    }

    #[test]
    fn test_new_match_twice() {
        let mut session = MatchSession::new();
        assert_eq!(session.new_match(&config()), Ok(Group::Green));
        assert_eq!(session.new_match(&config()), Err(LudoError::MatchInProgress));
        assert_eq!(session.current_player_name(), Ok("Ana"));
        assert_eq!(session.announce_turn().unwrap(), "Ana (green) to play");
    }

    #[test]
    fn test_invalid_token_id() {
        let mut session = MatchSession::new();
        session.new_match(&config()).unwrap();
        session.set_dice(6).unwrap();
        assert_eq!(session.play(Some(16)), Err(LudoError::InvalidPieceId { id: 16 }));
    }

    #[test]
    fn test_throw_keeps_unused_value() {
        let mut session = MatchSession::new();
        session.new_match(&config()).unwrap();
        let value = session.throw_dice().unwrap();
        assert_eq!(session.throw_dice(), Ok(value));
        assert_eq!(session.dice(), Some(value));
    }

    #[test]
    fn test_close_and_reload() {
        let mut session = MatchSession::new();
        session.new_match(&config()).unwrap();
        session.set_dice(6).unwrap();
        session.play(Some(0)).unwrap();
        session.set_dice(3).unwrap();
        session.play(Some(0)).unwrap();

        let bytes = session.save_bytes().unwrap();
        let record = session.close_match().unwrap();
        assert_eq!(record.moves.len(), 2);
        assert_eq!(session.current_player(), Err(LudoError::MatchNotDefined));

        session.load_match(&bytes).unwrap();
        assert_eq!(session.current_player(), Ok(Group::Red));
        assert_eq!(session.players().player(Group::Blue), "Caio");
        assert_eq!(session.load_match(&bytes), Err(LudoError::MatchInProgress));
    }

    #[test]
    fn test_reload_throws_from_saved_seed() {
        let mut session = MatchSession::new();
        session.new_match(&config()).unwrap();
        session.set_dice(3).unwrap();
        session.play(None).unwrap();
        let bytes = session.save_bytes().unwrap();
        assert_eq!(session.save().unwrap().seed, 11);

        let mut a = MatchSession::new();
        let mut b = MatchSession::new();
        // Leftover state in one session must not leak into the reload.
        b.new_match(&MatchConfig::builder().seed(99).build()).unwrap();
        b.throw_dice().unwrap();
        b.close_match().unwrap();

        a.load_match(&bytes).unwrap();
        b.load_match(&bytes).unwrap();
        for _ in 0..10 {
            let roll = a.throw_dice().unwrap();
            assert_eq!(b.throw_dice(), Ok(roll));
            a.dice.clear();
            b.dice.clear();
        }
        assert_eq!(b.save().unwrap().seed, 11);
    }

    #[test]
    fn test_load_invalid_data() {
        let mut session = MatchSession::new();
        assert!(matches!(
            session.load_match(b"nope"),
            Err(LudoError::InvalidData { .. })
        ));
        assert_eq!(session.current_player(), Err(LudoError::MatchNotDefined));
    }

    #[test]
    fn test_random_first_group_is_seeded() {
        let cfg = MatchConfig::builder().seed(21).build();
        let mut a = MatchSession::new();
        let mut b = MatchSession::new();
        assert_eq!(a.new_match(&cfg), b.new_match(&cfg));
        assert_eq!(a.players(), b.players());
    }
}
