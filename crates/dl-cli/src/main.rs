//! CLI frontend for the Deadline campus adventure.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "deadline",
    about = "Deadline: get your project to Oak House before time runs out",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game interactively
    Play {
        /// Map data file (default: the built-in campus map)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Start location ID
        #[arg(short, long)]
        start: Option<u32>,

        /// Override the move ceiling
        #[arg(long)]
        max_moves: Option<u32>,
    },

    /// Replay a script of commands and print the visited-location trace
    Simulate {
        /// Script file, one command per line
        script: PathBuf,

        /// Map data file (default: the built-in campus map)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Start location ID
        #[arg(short, long)]
        start: Option<u32>,

        /// Expected trace, e.g. 1,5,9; fail if the run differs
        #[arg(long, value_delimiter = ',')]
        expect: Option<Vec<u32>>,

        /// Print the replay of the event log
        #[arg(short, long)]
        replay: bool,

        /// Print the event log as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a map data file and summarise its contents
    Check {
        /// Map data file (default: the built-in campus map)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            data,
            start,
            max_moves,
        } => commands::play::run(data.as_deref(), start, max_moves),
        Commands::Simulate {
            script,
            data,
            start,
            expect,
            replay,
            json,
        } => commands::simulate::run(
            &script,
            data.as_deref(),
            start,
            expect.as_deref(),
            replay,
            json,
        ),
        Commands::Check { data } => commands::check::run(data.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
