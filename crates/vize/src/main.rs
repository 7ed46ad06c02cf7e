//! # vize
//!
//! Vize - Prop documentation for Vue components.
//!
//! ## Name Origin
//!
//! **Vize** (/viːz/) is named after Vizier + Visor + Advisor, a tool that
//! sees through your components. This crate is the command-line front end
//! for building prop documentation records with native performance.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "vize")]
#[command(about = "Prop documentation for Vue components", long_about = None)]
#[command(version, disable_version_flag = true)]
struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long, action = clap::ArgAction::Version)]
    version: (),

    /// Show debug logs on stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build prop documentation records (default command)
    Folio(commands::folio::FolioArgs),

    /// Print the JSON Schema for vize.config.json
    Schema,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    // Logs go to stderr so stdout stays clean for documents
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Folio(args)) => {
            let config = config::load_config(None);
            commands::folio::run(args, &config.folio);
        }
        Some(Commands::Schema) => println!("{}", config::VIZE_CONFIG_SCHEMA),
        None => {
            // Default to folio command with default args
            let config = config::load_config(None);
            commands::folio::run(commands::folio::FolioArgs::default(), &config.folio);
        }
    }
}
