//! Forca - CLI
//!
//! Portuguese hangman game with TUI and line-oriented modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use forca::{
    commands::{ReplayConfig, replay_word, run_simple},
    config::{GameConfig, SelectionPolicy},
    core::{DEFAULT_MAX_ATTEMPTS, WordEntry},
    game::Game,
    output::{print_replay_result, print_word_list},
    wordlists::{
        WORDS,
        loader::{entries_from_slice, load_from_file},
    },
};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "forca",
    about = "Jogo da forca: guess the hidden Portuguese word before the hearts run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wrong guesses allowed per round (1-26)
    #[arg(short = 'a', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u8,

    /// Word selection: sequential (default, cycles the list) or random
    #[arg(short, long, global = true, default_value = "sequential")]
    selection: SelectionPolicy,

    /// Custom word list, one 'word<TAB>tip' per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one letter per line, no TUI)
    Simple,

    /// Play a fixed sequence of guesses against a word and show each step
    Replay {
        /// The hidden word
        word: String,

        /// Guesses to submit in order, e.g. `p a e z`
        #[arg(required = true)]
        guesses: Vec<String>,

        /// Tip attached to the word
        #[arg(short, long, default_value = "")]
        tip: String,
    },

    /// Print the active word list
    List,
}

/// Load the word list from `path`, or the embedded list when none is given
fn load_words(path: Option<&Path>) -> Result<Vec<WordEntry>> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Could not load word list {}", path.display())),
        None => Ok(entries_from_slice(WORDS)),
    }
}

/// Install the stderr log subscriber (`RUST_LOG`, default `forca=warn`)
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forca=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config =
        GameConfig::new(cli.max_attempts, cli.selection).context("Invalid game configuration")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, cli.words.as_deref()),
        Commands::Simple => run_simple_command(config, cli.words.as_deref()),
        Commands::Replay { word, guesses, tip } => run_replay_command(config, word, tip, guesses),
        Commands::List => {
            let words = load_words(cli.words.as_deref())?;
            print_word_list(&words);
            Ok(())
        }
    }
}

fn run_play_command(config: GameConfig, words_path: Option<&Path>) -> Result<()> {
    use forca::interactive::{App, run_tui};

    let words = load_words(words_path)?;
    let game = Game::new(config, &words)?;
    info!(words = words.len(), policy = %config.policy(), "starting TUI");

    run_tui(App::new(game))
}

fn run_simple_command(config: GameConfig, words_path: Option<&Path>) -> Result<()> {
    let words = load_words(words_path)?;
    let mut game = Game::new(config, &words)?;
    info!(words = words.len(), policy = %config.policy(), "starting simple mode");

    run_simple(&mut game)
}

fn run_replay_command(
    config: GameConfig,
    word: String,
    tip: String,
    guesses: Vec<String>,
) -> Result<()> {
    let replay = ReplayConfig {
        word,
        tip,
        guesses,
        game: config,
    };
    let result = replay_word(replay).context("Invalid word to replay")?;

    print_replay_result(&result);
    Ok(())
}
