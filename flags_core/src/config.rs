use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const TOTAL_ROUNDS: usize = 8;
pub const VISIBLE_CHOICES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub total_rounds: usize,
    pub visible_choices: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            total_rounds: TOTAL_ROUNDS,
            visible_choices: VISIBLE_CHOICES,
        }
    }
}

impl GameConfig {
    pub fn validate(&self, pool_len: usize) -> Result<(), GameError> {
        if self.total_rounds == 0 {
            return Err(GameError::NoRounds);
        }
        if self.visible_choices < 2 {
            return Err(GameError::TooFewChoices(self.visible_choices));
        }
        if self.visible_choices > pool_len {
            return Err(GameError::NotEnoughCandidates {
                pool: pool_len,
                visible: self.visible_choices,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::GameConfig, error::GameError};

    #[test]
    fn default_config_should_be_eight_rounds_of_three_flags() {
        let config = GameConfig::default();
        assert_eq!(config.total_rounds, 8);
        assert_eq!(config.visible_choices, 3);
        assert_eq!(config.validate(11), Ok(()));
    }

    #[test]
    fn validate_should_reject_zero_rounds() {
        let config = GameConfig {
            total_rounds: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(11), Err(GameError::NoRounds));
    }

    #[test]
    fn validate_should_reject_a_single_choice() {
        let config = GameConfig {
            visible_choices: 1,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(11), Err(GameError::TooFewChoices(1)));
    }

    #[test]
    fn validate_should_reject_more_choices_than_candidates() {
        let config = GameConfig {
            visible_choices: 4,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(3),
            Err(GameError::NotEnoughCandidates {
                pool: 3,
                visible: 4
            })
        );
    }
}
