//! Text front end for the RPSLS engine.
//!
//! ```text
//! rpsls play spock
//! rpsls simulate 100000 --reset
//! rpsls              # interactive: 1-5 play, s <n> simulates, r resets, q quits
//! ```

use std::io::{self, BufRead, Write};
use std::sync::mpsc::Receiver;
use std::thread;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use rpsls::{
    parse_simulation_count, shortcut, Command, Element, Engine, EngineConfig, Error, SessionEvent,
};

#[derive(Parser)]
#[command(author, version, about = "Rock-Paper-Scissors-Lizard-Spock", long_about = None)]
struct Cli {
    /// Fixed RNG seed (overrides RPSLS_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    #[command(about = "Play a single round")]
    Play {
        #[arg(required = true)]
        element: Element,
    },
    #[command(about = "Simulate a batch of random rounds", alias = "sim")]
    Simulate {
        #[arg(required = true)]
        games: String,
        /// Zero the score before simulating
        #[arg(long)]
        reset: bool,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let config = simplelog::ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

fn print_score(engine: &Engine) {
    let board = engine.scoreboard();
    println!("{}", board.player_wins_text());
    println!("{}", board.computer_wins_text());
    println!("{}", board.tie_games_text());
}

fn play(engine: &Engine, element: Element) {
    let outcome = engine.resolve_round(element);
    println!("You: {}  Computer: {}", outcome.player, outcome.computer);
    println!("{}", outcome.message());
}

fn simulate(engine: &Engine, text: &str, reset: bool) -> rpsls::Result<()> {
    let games = parse_simulation_count(text, engine.config().simulation_cap)?;
    let report = engine.simulate_blocking(games, reset)?;
    println!(
        "Simulated {} games ({:.0} games/s)",
        report.completed,
        report.games_per_second()
    );
    Ok(())
}

/// Print progress events until the engine goes away.
fn watch(events: Receiver<SessionEvent>) {
    for event in events {
        match event {
            SessionEvent::SimulationProgress {
                completed, games, ..
            } => println!("  ... {completed}/{games}"),
            SessionEvent::SimulationFinished { report } => {
                println!("Simulation done: {}", report.session)
            }
            _ => {}
        }
    }
}

fn interactive(engine: &Engine) -> rpsls::Result<()> {
    let events = engine.subscribe();
    thread::spawn(move || watch(events));

    println!("1 Rock  2 Paper  3 Scissors  4 Lizard  5 Spock  |  s <n> [reset]  r  q");
    let stdin = io::stdin();
    let mut running = None;

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let mut words = line.split_whitespace();

        match words.next() {
            Some("q") | Some("quit") => break,
            Some("r") | Some("reset") => {
                engine.reset();
                print_score(engine);
            }
            Some("s") | Some("simulate") => {
                let text = words.next().unwrap_or("");
                let reset = words.next() == Some("reset");
                match parse_simulation_count(text, engine.config().simulation_cap) {
                    Ok(games) => running = Some(engine.simulate(games, reset)?),
                    Err(_) => println!("{}", rpsls::core::INVALID_COUNT_MESSAGE),
                }
            }
            Some("c") | Some("cancel") => {
                if let Some(handle) = running.take() {
                    handle.cancel();
                    let report = handle.join()?;
                    println!("Cancelled after {} games", report.completed);
                }
            }
            Some(word) => {
                let choice = word
                    .chars()
                    .next()
                    .filter(|_| word.len() == 1)
                    .and_then(shortcut)
                    .map(Ok)
                    .unwrap_or_else(|| word.parse::<Element>().map(Command::Play));
                match choice {
                    Ok(Command::Play(element)) => {
                        play(engine, element);
                        print_score(engine);
                    }
                    Ok(Command::Quit) => break,
                    Err(e) => println!("{e}"),
                }
            }
            None => {}
        }
    }

    if let Some(handle) = running {
        handle.cancel();
        handle.join()?;
    }
    Ok(())
}

fn run(cli: Cli) -> rpsls::Result<()> {
    let mut config = EngineConfig::from_env();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let engine = Engine::new(config);

    match cli.mode {
        Some(Mode::Play { element }) => {
            play(&engine, element);
            Ok(())
        }
        Some(Mode::Simulate { games, reset }) => {
            simulate(&engine, &games, reset)?;
            print_score(&engine);
            Ok(())
        }
        None => interactive(&engine),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        match e {
            Error::InvalidSimulationCount(_) => eprintln!("{}", rpsls::core::INVALID_COUNT_MESSAGE),
            other => eprintln!("error: {other}"),
        }
        std::process::exit(1);
    }
}
