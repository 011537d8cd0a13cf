//! Turn engine: owns the board and the turn state of one match.
//!
//! Every `play` either completes fully or returns an error with the board,
//! turn state, log and dice untouched.
//!
//! Turn passing:
//! - a roll below 6 ends the turn
//! - a 6 grants another move, up to `MAX_SEQUENCE` moves in a row
//! - a player whose last token just reached the finish hands over at once
//! - finished players are skipped
//!
//! Once three groups have finished the fourth is ranked last and the match
//! ends.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use super::dice::DiceSource;
use super::record::{MatchRecord, MoveRecord};
use super::state::{TurnState, Winners};
use crate::board::BoardState;
use crate::core::{Group, LudoError, Result, TokenId, BONUS_ROLL, DIE_FACES, GROUP_COUNT, MAX_SEQUENCE};
use crate::rules::{apply_move, possible_moves, MoveReport};

/// Board plus turn state for a single match.
#[derive(Clone, Debug, Default)]
pub struct TurnEngine {
    board: BoardState,
    state: TurnState,
    first_group: Option<Group>,
    /// Turns completed so far.
    turn: u32,
    log: Vector<MoveRecord>,
}

impl TurnEngine {
    /// An engine with no match set up.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh match with `first` to move.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self, first: Group) {
        self.board.reset();
        self.state = TurnState::InProgress {
            current: first,
            sequence: 0,
            winners: SmallVec::new(),
        };
        self.first_group = Some(first);
        self.turn = 0;
        self.log = Vector::new();
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// Group to move, `None` before the start and after the end.
    #[must_use]
    pub fn current(&self) -> Option<Group> {
        self.state.current()
    }

    #[must_use]
    pub fn sequence(&self) -> u8 {
        self.state.sequence()
    }

    #[must_use]
    pub fn winners(&self) -> &[Group] {
        self.state.winners()
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.state.is_ended()
    }

    #[must_use]
    pub fn first_group(&self) -> Option<Group> {
        self.first_group
    }

    /// Number of the turn in progress, starting at 0.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    /// Every play committed so far.
    #[must_use]
    pub fn log(&self) -> &Vector<MoveRecord> {
        &self.log
    }

    /// Snapshot of the match for persistence.
    pub fn record(&self, players: [String; GROUP_COUNT], seed: u64) -> Result<MatchRecord> {
        let first = self.first_group.ok_or(LudoError::MatchNotDefined)?;
        Ok(MatchRecord {
            players,
            first_group: first.index() as u8,
            seed,
            moves: self.log.iter().copied().collect(),
        })
    }

    fn in_progress(&self) -> Result<Group> {
        match &self.state {
            TurnState::NotStarted => Err(LudoError::MatchNotDefined),
            TurnState::Ended { .. } => Err(LudoError::MatchEnded),
            TurnState::InProgress { current, .. } => Ok(*current),
        }
    }

    /// Whether the current player can use a roll of `steps`.
    ///
    /// A roll below 6 only counts if some token is already out of its
    /// spawn.
    pub fn can_play(&self, steps: u8) -> Result<bool> {
        let current = self.in_progress()?;
        check_steps(steps)?;

        let moves = possible_moves(&self.board, current, i32::from(steps))?;
        if moves.iter().all(|(_, destination)| destination.is_none()) {
            return Ok(false);
        }
        Ok(steps == BONUS_ROLL || !self.all_in_spawn(current))
    }

    fn all_in_spawn(&self, group: Group) -> bool {
        group.tokens().all(|token| self.board.in_spawn(token))
    }

    /// Play the current dice value with `token`, or pass with `None`.
    ///
    /// Passing is only accepted when [`can_play`](Self::can_play) is false.
    /// A token without a legal destination is rejected with
    /// [`LudoError::CannotMovePiece`] and nothing changes.
    #[instrument(level = "debug", skip(self, dice), fields(turn = self.turn))]
    pub fn play(&mut self, dice: &mut impl DiceSource, token: Option<TokenId>) -> Result<Option<MoveReport>> {
        if matches!(self.state, TurnState::NotStarted) {
            return Err(LudoError::MatchNotDefined);
        }
        let steps = dice.current().ok_or(LudoError::DiceNotThrown)?;
        check_steps(steps)?;
        let current = self.in_progress()?;

        let Some(token) = token else {
            if self.can_play(steps)? {
                return Err(LudoError::InvalidPiece);
            }
            debug!(%current, steps, "no legal move, passing");
            self.log.push_back(MoveRecord::new(None, steps, self.turn));
            self.pass_turn();
            dice.clear();
            return Ok(None);
        };

        if token.group() != current {
            return Err(LudoError::InvalidPlayer { token, current });
        }
        if steps < BONUS_ROLL && self.all_in_spawn(current) {
            return Err(LudoError::CannotMovePiece { token });
        }

        let report = apply_move(&mut self.board, token, i32::from(steps))?
            .ok_or(LudoError::CannotMovePiece { token })?;
        self.log.push_back(MoveRecord::new(Some(token), steps, self.turn));
        self.after_move(current, steps);
        dice.clear();
        Ok(Some(report))
    }

    fn after_move(&mut self, current: Group, steps: u8) {
        let finished = self.board.finished_groups();
        let TurnState::InProgress { sequence, winners, .. } = &mut self.state else {
            return;
        };
        *sequence += 1;
        for group in finished {
            if !winners.contains(&group) {
                info!(%group, place = winners.len() + 1, "group finished");
                winners.push(group);
            }
        }

        if winners.len() >= GROUP_COUNT - 1 {
            let mut winners: Winners = std::mem::take(winners);
            if let Some(last) = Group::ALL.into_iter().find(|g| !winners.contains(g)) {
                winners.push(last);
            }
            info!(?winners, "match ended");
            self.state = TurnState::Ended { winners };
            self.turn += 1;
            return;
        }

        let own_finished = winners.contains(&current);
        if steps < BONUS_ROLL || *sequence >= MAX_SEQUENCE || own_finished {
            self.pass_turn();
        }
    }

    /// Hand the turn to the next group that has not finished.
    fn pass_turn(&mut self) {
        let TurnState::InProgress { current, sequence, winners } = &mut self.state else {
            return;
        };
        let mut next = current.next();
        for _ in 0..GROUP_COUNT {
            if !winners.contains(&next) {
                break;
            }
            next = next.next();
        }
        debug!(from = %current, to = %next, "turn passes");
        *current = next;
        *sequence = 0;
        self.turn += 1;
    }
}

fn check_steps(steps: u8) -> Result<()> {
    if (1..=DIE_FACES).contains(&steps) {
        Ok(())
    } else {
        Err(LudoError::InvalidSteps { value: steps })
    }
}
