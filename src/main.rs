//! Wordle Daily - CLI
//!
//! Word game with TUI and line modes, three languages and a daily challenge.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_daily::{
    commands::{check_word, run_simple, word_of_day},
    config::{DEFAULT_DATA_DIR, DEFAULT_WORD_LENGTH, GameConfig},
    daily::{FileStore, SystemClock},
    game::GameSession,
    output::{print_check_result, print_word_of_day},
    wordlists::{Language, ListVariant},
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Guess the word in Portuguese, English or French, with a daily challenge",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language: pt-br, en-us or fr (default: last one played)
    #[arg(short, long, global = true)]
    language: Option<Language>,

    /// Answer list: 'full' (default) or 'common'
    #[arg(long = "list", global = true, default_value = "full")]
    variant: ListVariant,

    /// Letters per word
    #[arg(long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Rows per game (default: word length + 1)
    #[arg(short, long, global = true)]
    attempts: Option<usize>,

    /// Directory with <code>.txt and <code>-common.txt word lists
    #[arg(long, global = true)]
    vocab_dir: Option<PathBuf>,

    /// Directory for saved state
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Print the word of the day
    WordOfDay {
        /// Date as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Check whether a word is in the dictionary
    Check {
        /// Word to look up, accents optional
        word: String,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            language: self.language,
            variant: self.variant,
            word_length: self.length,
            attempts: self.attempts,
            vocab_dir: self.vocab_dir.clone(),
            data_dir: self.data_dir.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_logging(matches!(command, Commands::Play), &config)?;

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple_command(config),
        Commands::WordOfDay { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let language = config.resolve_language();
            let result = word_of_day(&*config.source(), &config, language, date)?;
            print_word_of_day(&result);
            Ok(())
        }
        Commands::Check { word } => {
            let language = config.resolve_language();
            let result = check_word(&*config.source(), &config, language, &word)?;
            print_check_result(&result);
            Ok(())
        }
    }
}

/// Log to stderr, or to a file under the data directory while the TUI owns
/// the terminal. `RUST_LOG` overrides the default `warn` level.
fn init_logging(tui: bool, config: &GameConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if tui {
        fs::create_dir_all(&config.data_dir)
            .with_context(|| format!("creating {}", config.data_dir.display()))?;
        let log_file = fs::File::create(config.data_dir.join("wordle_daily.log"))?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(log_file))
            .with_ansi(false)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    Ok(())
}

fn open_session(config: GameConfig) -> Result<GameSession<FileStore, SystemClock>> {
    let path = config.storage_path();
    let store =
        FileStore::open_or_reset(&path).with_context(|| format!("opening {}", path.display()))?;
    info!(path = %path.display(), "storage opened");

    Ok(GameSession::new(config, store, SystemClock))
}

fn run_simple_command(config: GameConfig) -> Result<()> {
    let source = config.source();
    let mut session = open_session(config)?;
    run_simple(&mut session, &*source)
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use wordle_daily::interactive::{App, run_tui};

    let source = config.source();
    let session = open_session(config)?;
    run_tui(App::new(session, source))
}
