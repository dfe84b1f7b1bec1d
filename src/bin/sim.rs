#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use number_guess::{
    init_logging_with, BotGame, CheckResult, GameConfig, GuessStatus, NumberSource, UserGame,
};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use std::path::PathBuf;

/// Plays automated rounds of both modes and prints a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value_t = 100)]
    rounds: u32,
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Player that remembers every hint and answers the middle of what is left.
#[cfg(feature = "std")]
fn play_bot_round(rng: &mut SmallRng, config: &GameConfig) -> anyhow::Result<u32> {
    let mut game = BotGame::new();
    game.start(rng, config.min_value, config.max_value, config.hint);
    let (mut lo, mut hi) = (game.lower_bound() as i64, game.upper_bound() as i64);
    loop {
        if lo > hi {
            anyhow::bail!("hints are inconsistent after {} attempts", game.attempt_count());
        }
        let answer = (lo + (hi - lo) / 2) as i32;
        match game.check_answer(answer) {
            CheckResult::Equal => return Ok(game.attempt_count()),
            CheckResult::GreaterThan => lo = answer as i64 + 1,
            CheckResult::LessThan => hi = answer as i64 - 1,
            CheckResult::Invalid => anyhow::bail!("answer {} rejected", answer),
        }
    }
}

/// Honest player holding a random number.
#[cfg(feature = "std")]
fn play_user_round(rng: &mut SmallRng, config: &GameConfig) -> anyhow::Result<u32> {
    let secret = rng.pick(config.min_value, config.max_value);
    let mut game = UserGame::new();
    let mut status = game.start(rng, config.min_value, config.max_value);
    while status == GuessStatus::Ok {
        let guess = game.current_guess();
        status = if guess > secret {
            game.record_too_low(rng)
        } else if guess < secret {
            game.record_too_high(rng)
        } else {
            game.record_correct();
            return Ok(game.guess_count());
        };
    }
    anyhow::bail!("search exhausted while holding {}", secret)
}

#[cfg(feature = "std")]
fn summary(counts: &[u32]) -> serde_json::Value {
    let total: u64 = counts.iter().map(|&c| c as u64).sum();
    let mean = if counts.is_empty() {
        0.0
    } else {
        total as f64 / counts.len() as f64
    };
    json!({
        "mean": mean,
        "max": counts.iter().copied().max().unwrap_or(0),
        "min": counts.iter().copied().min().unwrap_or(0),
    })
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging_with(LevelFilter::Warn);
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut bot_attempts = Vec::with_capacity(cli.rounds as usize);
    let mut user_guesses = Vec::with_capacity(cli.rounds as usize);
    for _ in 0..cli.rounds {
        bot_attempts.push(play_bot_round(&mut rng, &config)?);
        user_guesses.push(play_user_round(&mut rng, &config)?);
    }

    let out = json!({
        "rounds": cli.rounds,
        "range": [config.min_value, config.max_value],
        "bot_host": summary(&bot_attempts),
        "user_host": summary(&user_guesses),
    });
    println!("{}", out);
    Ok(())
}
