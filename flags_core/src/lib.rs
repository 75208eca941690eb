use config::GameConfig;
use error::GameError;
use game_session::{GameSession, SessionSummary};
use game_state::GameState;
use player::Player;
use rand::Rng;

pub mod config;
pub mod country;
pub mod error;
pub mod event;
mod game_logic;
pub mod game_session;
pub mod game_state;
pub mod play;
pub mod player;
pub mod random_playing_computer;

pub fn run_game<C, T, R>(
    player_constructor: C,
    config: GameConfig,
    rng: R,
) -> Result<SessionSummary, GameError>
where
    C: FnOnce() -> T,
    T: Player + 'static,
    R: Rng,
{
    let state = GameState::with_countries(config, rng)?;
    let mut session = GameSession::new(Box::new(player_constructor()), state);
    Ok(session.play())
}
