use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

use payday_settings::{PayFrequency, TimeOfDay};
use payday_storage::FileStore;

mod cli;

#[derive(Parser)]
#[command(name = "payday")]
#[command(about = "Payday - know what your working day is earning")]
#[command(version)]
struct Cli {
    /// Settings file location (defaults to the user config directory)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current settings
    Show,
    /// Update one or more settings
    Set {
        /// Currency symbol shown next to amounts
        #[arg(long)]
        currency: Option<String>,
        /// Pay rate for the selected frequency
        #[arg(long)]
        rate: Option<f64>,
        /// Pay frequency: hour, day, month or year
        #[arg(long)]
        frequency: Option<PayFrequency>,
        /// Working window start, as H:M
        #[arg(long)]
        start: Option<TimeOfDay>,
        /// Working window end, as H:M
        #[arg(long)]
        end: Option<TimeOfDay>,
    },
    /// Rewrite every setting with its default value
    Reset,
    /// Print the settings file location
    Path,
}

fn run(command: Commands, store_path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Show => {
            let store = FileStore::open(store_path)?;
            cli::settings::show_settings(&store)
        }
        Commands::Set {
            currency,
            rate,
            frequency,
            start,
            end,
        } => {
            let mut store = FileStore::open(store_path)?;
            cli::settings::set_settings(&mut store, currency, rate, frequency, start, end)
        }
        Commands::Reset => {
            let mut store = FileStore::open(store_path)?;
            cli::settings::reset_settings(&mut store)
        }
        Commands::Path => {
            println!("{}", store_path.display());
            Ok(())
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let store_path = cli.store.unwrap_or_else(FileStore::default_path);

    if let Err(e) = run(cli.command, store_path) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
