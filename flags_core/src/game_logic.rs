use log::{debug, info, warn};
use rand::{seq::SliceRandom, Rng};

use crate::{
    error::GameError,
    event::{GuessResult, Outcome},
    game_state::GameState,
};

impl<L: Clone, R: Rng> GameState<L, R> {
    pub fn start_round(&mut self) {
        self.pool.shuffle(&mut self.rng);
        self.target = self.rng.gen_range(0..self.config.visible_choices);
        debug!(
            "Round {}/{} started, target index {}",
            self.display_round(),
            self.config.total_rounds,
            self.target
        );
    }

    /// Records a guess. The next round is not started here, the caller does
    /// that with `start_round` once the player has seen the outcome.
    pub fn guess(&mut self, index: usize) -> Result<GuessResult<L>, GameError> {
        if self.is_finished() {
            warn!("Ignoring guess {}: game is finished", index);
            return Err(GameError::GameFinished);
        }
        let visible = self.config.visible_choices;
        if index >= visible {
            warn!("Ignoring guess {}: only {} choices visible", index, visible);
            return Err(GameError::GuessOutOfRange { index, visible });
        }

        self.round += 1;
        let outcome = if index == self.target {
            self.score += 1;
            Outcome::Correct
        } else {
            Outcome::Incorrect(self.pool[index].clone())
        };

        let finished = self.is_finished();
        if finished {
            info!(
                "Game complete, final score {}/{}",
                self.score, self.config.total_rounds
            );
        }
        Ok(GuessResult {
            outcome,
            finished,
            score: self.score,
            round: self.display_round(),
            total_rounds: self.config.total_rounds,
        })
    }

    pub fn reset(&mut self) {
        self.round = 1;
        self.score = 0;
        self.start_round();
    }
}
