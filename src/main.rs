#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use number_guess::{
    init_logging_with,
    scene::{Button, InputEvent, Key, Route, SceneNavigator},
    GameConfig, TextSurface,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Play the number guessing game in the terminal", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "JSON file with the number range and hint spread")]
    config: Option<PathBuf>,
}

#[cfg(feature = "std")]
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Events(Vec<InputEvent>),
    Help,
    Quit,
}

#[cfg(feature = "std")]
fn parse_command(line: &str) -> Option<Command> {
    let word = line.trim().to_ascii_lowercase();
    let click = |b| Some(Command::Events(vec![InputEvent::Click(b)]));
    match word.as_str() {
        "bot" => click(Button::StartBotHost),
        "user" => click(Button::StartUserHost),
        "check" => click(Button::Check),
        "lower" | "l" => click(Button::Lower),
        "higher" | "h" => click(Button::Higher),
        "correct" | "c" => click(Button::Correct),
        "back" | "return" => click(Button::Return),
        "del" => Some(Command::Events(vec![InputEvent::Key(Key::Backspace)])),
        "help" | "?" => Some(Command::Help),
        "quit" | "q" | "exit" => Some(Command::Quit),
        digits if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) => {
            let mut events: Vec<InputEvent> =
                digits.chars().map(|d| InputEvent::Key(Key::Digit(d))).collect();
            events.push(InputEvent::Click(Button::Check));
            Some(Command::Events(events))
        }
        _ => None,
    }
}

#[cfg(feature = "std")]
const HELP: &str = "commands: bot | user | <number> | del | lower | higher | correct | back | quit";

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging_with(LevelFilter::Warn);
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut navigator = SceneNavigator::new(config, Box::new(rng))?;
    navigator.push(Route::Start);

    println!("{}", HELP);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut surface = TextSurface::new();
    loop {
        navigator.dispatch_draw(&mut surface);
        println!("\n{}", surface);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        match parse_command(&line?) {
            Some(Command::Events(events)) => {
                for event in events {
                    navigator.dispatch_input(event);
                }
            }
            Some(Command::Help) => println!("{}", HELP),
            Some(Command::Quit) => break,
            None => println!("Unknown command. {}", HELP),
        }
    }
    Ok(())
}
