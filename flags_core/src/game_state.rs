use rand::Rng;
use serde::Serialize;

use crate::{config::GameConfig, country::Country, error::GameError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Playing,
    Finished,
}

/// What a player needs to see besides the flags themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundStatus {
    pub round: usize,
    pub total_rounds: usize,
    pub score: usize,
}

/// Single quiz game. The round counter runs from 1 up to
/// `total_rounds + 1`: every accepted guess bumps it, and the game is
/// finished once all `total_rounds` guesses are in.
pub struct GameState<L, R> {
    pub(crate) pool: Vec<L>,
    pub(crate) config: GameConfig,
    pub(crate) target: usize,
    pub(crate) round: usize,
    pub(crate) score: usize,
    pub(crate) rng: R,
}

impl<L: Clone, R: Rng> GameState<L, R> {
    pub fn new(pool: Vec<L>, config: GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate(pool.len())?;
        let mut state = GameState {
            pool,
            config,
            target: 0,
            round: 1,
            score: 0,
            rng,
        };
        state.start_round();
        Ok(state)
    }
}

impl<R: Rng> GameState<Country, R> {
    pub fn with_countries(config: GameConfig, rng: R) -> Result<Self, GameError> {
        GameState::new(Country::all(), config, rng)
    }
}

impl<L, R> GameState<L, R> {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn round(&self) -> usize {
        self.round
    }

    /// Round number to show the player, never past the last round.
    pub fn display_round(&self) -> usize {
        self.round.min(self.config.total_rounds)
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total_rounds(&self) -> usize {
        self.config.total_rounds
    }

    pub fn target_index(&self) -> usize {
        self.target
    }

    pub fn target(&self) -> &L {
        &self.pool[self.target]
    }

    pub fn choices(&self) -> &[L] {
        &self.pool[..self.config.visible_choices]
    }

    pub fn pool(&self) -> &[L] {
        &self.pool
    }

    pub fn phase(&self) -> Phase {
        if self.round > self.config.total_rounds {
            Phase::Finished
        } else {
            Phase::Playing
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase() == Phase::Finished
    }

    pub fn status(&self) -> RoundStatus {
        RoundStatus {
            round: self.display_round(),
            total_rounds: self.config.total_rounds,
            score: self.score,
        }
    }
}
