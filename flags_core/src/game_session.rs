use log::{info, warn};
use rand::Rng;
use serde::Serialize;

use crate::{country::Country, event::Prompt, game_state::GameState, play::Action, player::Player};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub player: String,
    pub total_rounds: usize,
    /// Final score of every completed game, in play order.
    pub finished_games: Vec<usize>,
    /// Set when the player left in the middle of a game.
    pub abandoned: bool,
}

impl SessionSummary {
    pub fn best_score(&self) -> Option<usize> {
        self.finished_games.iter().copied().max()
    }
}

pub struct GameSession<R> {
    player: Box<dyn Player>,
    state: GameState<Country, R>,
}

impl<R: Rng> GameSession<R> {
    pub fn new(player: Box<dyn Player>, state: GameState<Country, R>) -> Self {
        GameSession { player, state }
    }

    pub fn state(&self) -> &GameState<Country, R> {
        &self.state
    }

    pub fn play(&mut self) -> SessionSummary {
        let mut summary = SessionSummary {
            player: self.player.name().to_string(),
            total_rounds: self.state.total_rounds(),
            finished_games: vec![],
            abandoned: false,
        };

        loop {
            let status = self.state.status();
            let action =
                self.player
                    .obtain_action(self.state.target(), self.state.choices(), &status);

            let index = match action {
                Action::Quit => {
                    info!("{} quit in round {}", summary.player, status.round);
                    summary.abandoned = true;
                    break;
                }
                Action::Guess(index) => index,
            };

            let result = match self.state.guess(index) {
                Ok(result) => result,
                Err(e) => {
                    warn!("Rejected guess from {}: {}", summary.player, e);
                    continue;
                }
            };

            let notification = result.notification();
            self.player.notify(&notification);
            if result.finished {
                summary.finished_games.push(result.score);
            }

            if !self.player.confirm(notification.prompt) {
                summary.abandoned = !result.finished;
                break;
            }
            match notification.prompt {
                Prompt::Continue => self.state.start_round(),
                Prompt::Restart => self.state.reset(),
            }
        }

        info!(
            "Session of {} over after {} finished games",
            summary.player,
            summary.finished_games.len()
        );
        summary
    }
}
