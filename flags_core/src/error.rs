use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("Guess {index} is outside the {visible} visible choices")]
    GuessOutOfRange { index: usize, visible: usize },
    #[error("The game is finished, reset it to play again")]
    GameFinished,
    #[error("The candidate pool has {pool} labels but {visible} must be visible")]
    NotEnoughCandidates { pool: usize, visible: usize },
    #[error("At least two visible choices are needed, got {0}")]
    TooFewChoices(usize),
    #[error("A game needs at least one round")]
    NoRounds,
}
