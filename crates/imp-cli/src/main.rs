//! Command-line launcher for the Impostor party game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "impostor",
    about = "El Impostor — a pass-the-phone party game",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the game as a web page
    Serve {
        /// Address to bind
        #[arg(short, long, default_value = "0.0.0.0")]
        bind: String,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value = "8000")]
        port: u16,

        #[command(flatten)]
        game: GameArgs,
    },

    /// Play in this terminal, passing the device around
    Play {
        #[command(flatten)]
        game: GameArgs,
    },

    /// List the word/clue catalog
    Words {
        /// JSON catalog file (default: built-in catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

/// Options shared by every command that runs a game.
#[derive(clap::Args)]
struct GameArgs {
    /// JSON catalog file (default: built-in catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Fixed RNG seed; makes the impostor predictable, for testing only
    #[arg(long)]
    seed: Option<u64>,

    /// Minimum number of players (at least 3)
    #[arg(long, default_value = "3")]
    min_players: usize,
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { bind, port, game } => {
            init_logging("info");
            commands::serve::run(&bind, port, &game)
        }
        Commands::Play { game } => {
            init_logging("warn");
            commands::play::run(&game)
        }
        Commands::Words { catalog } => commands::words::run(catalog.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
