use std::error::Error;

use clap::Parser;
use cli_player::CliPlayer;
use flags_core::{
    config::{GameConfig, TOTAL_ROUNDS, VISIBLE_CHOICES},
    game_session::SessionSummary,
    random_playing_computer::RandomPlayingComputer,
    run_game,
};
use itertools::Itertools;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

mod cli_player;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Guess the flag of the named country", long_about = None)]
struct Args {
    /// Rounds per game
    #[clap(short, long, default_value_t = TOTAL_ROUNDS)]
    rounds: usize,
    /// Flags shown each round
    #[clap(short, long, default_value_t = VISIBLE_CHOICES)]
    choices: usize,
    /// Seed for a reproducible game
    #[clap(short, long)]
    seed: Option<u64>,
    /// Let the computer play
    #[clap(short, long)]
    auto: bool,
    /// Games the computer plays with --auto
    #[clap(short, long, default_value_t = 1)]
    games: usize,
    /// Print the session summary as JSON
    #[clap(short, long)]
    json: bool,
}

fn print_summary(summary: &SessionSummary, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }
    if summary.finished_games.is_empty() {
        println!("No game finished, goodbye {}!", summary.player);
        return Ok(());
    }
    let scores = summary
        .finished_games
        .iter()
        .map(|s| format!("{}/{}", s, summary.total_rounds))
        .join(", ");
    println!("Scores of {}: {}", summary.player, scores);
    if let Some(best) = summary.best_score() {
        println!("Best: {}/{}", best, summary.total_rounds);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = GameConfig {
        total_rounds: args.rounds,
        visible_choices: args.choices,
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!("Starting with {:?}", config);

    let summary = if args.auto {
        let player_rng = StdRng::from_rng(&mut rng)?;
        let games = args.games;
        run_game(
            move || RandomPlayingComputer::new("Computer", games, player_rng),
            config,
            rng,
        )?
    } else {
        run_game(CliPlayer::new, config, rng)?
    };

    print_summary(&summary, args.json)
}
