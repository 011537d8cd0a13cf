//! Dice collaborator.
//!
//! The turn engine never rolls. It reads the current value of a
//! [`DiceSource`] and clears it once the value has been consumed.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, LudoError, Result, DIE_FACES};

/// Something the turn engine can read a thrown value from.
pub trait DiceSource {
    /// Value of the last throw, or `None` if it was already consumed.
    fn current(&self) -> Option<u8>;

    /// Mark the value as consumed.
    fn clear(&mut self);
}

/// A single six-sided die.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    value: Option<u8>,
}

impl Dice {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Throw the die.
    pub fn throw(&mut self, rng: &mut GameRng) -> u8 {
        let value = rng.roll_die();
        self.value = Some(value);
        value
    }

    /// Force a value, for scripted drivers and replays.
    pub fn set(&mut self, value: u8) -> Result<()> {
        if !(1..=DIE_FACES).contains(&value) {
            return Err(LudoError::InvalidSteps { value });
        }
        self.value = Some(value);
        Ok(())
    }

    #[must_use]
    pub fn get(&self) -> Option<u8> {
        self.value
    }

    pub fn clear(&mut self) {
        self.value = None;
    }
}

impl DiceSource for Dice {
    fn current(&self) -> Option<u8> {
        self.value
    }

    fn clear(&mut self) {
        self.value = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dice_not_thrown() {
        assert_eq!(Dice::new().get(), None);
    }

    #[test]
    fn test_throw_in_range() {
        let mut rng = GameRng::new(3);
        let mut dice = Dice::new();
        for _ in 0..100 {
            let value = dice.throw(&mut rng);
            assert!((1..=6).contains(&value));
            assert_eq!(dice.current(), Some(value));
        }
    }

    #[test]
    fn test_set_validates() {
        let mut dice = Dice::new();
        assert_eq!(dice.set(0), Err(LudoError::InvalidSteps { value: 0 }));
        assert_eq!(dice.set(7), Err(LudoError::InvalidSteps { value: 7 }));
        assert_eq!(dice.set(4), Ok(()));
        assert_eq!(dice.get(), Some(4));
    }

    #[test]
    fn test_clear() {
        let mut dice = Dice::new();
        dice.set(6).unwrap();
        DiceSource::clear(&mut dice);
        assert_eq!(dice.current(), None);
    }
}
