//! Tic-tac-toe engine - self-play driver.
//!
//! Plays complete games through the public session API with a scripted
//! "human" side, then reports win/draw tallies. Useful for eyeballing
//! strategy strength; the minimax side should never lose.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tictactoe_core::{
    start_game, GameConfig, Move, MoveSelector, Outcome, Player, StrategyKind,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::SelfPlay {
            games,
            human,
            automated,
            seed,
            json,
        } => self_play(games, human, automated, seed, json),
    }
}

/// One finished game, for JSON output.
#[derive(Debug, Serialize)]
struct GameRecord {
    game: u32,
    human_strategy: StrategyKind,
    automated_strategy: StrategyKind,
    outcome: Outcome,
    moves: Vec<Move>,
}

fn self_play(
    games: u32,
    human: StrategyKind,
    automated: StrategyKind,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    info!(games, ?human, ?automated, "Starting self-play run");

    let mut human_wins = 0u32;
    let mut automated_wins = 0u32;
    let mut draws = 0u32;

    for game in 0..games {
        let game_seed = seed.map(|s| s + u64::from(game));
        let outcome = play_one(game, human, automated, game_seed, json)?;
        match outcome {
            Outcome::Win(winner) if winner == Player::X => human_wins += 1,
            Outcome::Win(_) => automated_wins += 1,
            Outcome::Draw => draws += 1,
            Outcome::InProgress => unreachable!("game loop only exits on a terminal outcome"),
        }
    }

    println!(
        "{} games: human (X, {:?}) won {}, automated (O, {:?}) won {}, {} draws",
        games, human, human_wins, automated, automated_wins, draws
    );
    Ok(())
}

/// Plays a single game to completion and returns its outcome.
fn play_one(
    game: u32,
    human: StrategyKind,
    automated: StrategyKind,
    seed: Option<u64>,
    json: bool,
) -> Result<Outcome> {
    let mut session = start_game(GameConfig {
        human_mark: Player::X,
        strategy: automated,
        seed,
    });
    // The scripted human picks on a scratch copy of the board; the session
    // stays the single owner of the real one.
    let mut human_selector = MoveSelector::new(human, seed.map(|s| s.wrapping_add(0x9e37)));

    while session.outcome() == Outcome::InProgress {
        let mut scratch = session.board().clone();
        let position = human_selector.select(&mut scratch, session.human_mark())?;
        let report = session.submit_human_move(position.row(), position.col())?;
        debug!(game, %report.human, "Turn complete");
    }

    let outcome = session.outcome();
    info!(game, %outcome, moves = session.history().len(), "Game finished");

    if json {
        let record = GameRecord {
            game,
            human_strategy: human,
            automated_strategy: automated,
            outcome,
            moves: session.history().to_vec(),
        };
        println!("{}", serde_json::to_string(&record)?);
    } else {
        println!("game {}: {}\n{}\n", game, outcome, session.board().display());
    }

    Ok(outcome)
}
