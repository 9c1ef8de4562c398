use clap::{Parser, Subcommand};

mod commands;

use commands::data::{ClearArgs, ExportArgs, ImportArgs};
use commands::problem::{AddArgs, DueArgs, ListArgs, ReviewArgs};

#[derive(Parser)]
#[command(name = "rewind-cli", version, about = "Algo-Rewind CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new problem
    Add(AddArgs),
    /// Show problems due for review
    Due(DueArgs),
    /// List problems with optional search and sort
    List(ListArgs),
    /// Complete a review for a problem
    Review(ReviewArgs),
    /// Import a problem list from a JSON file
    Import(ImportArgs),
    /// Export the problem list to a JSON file
    Export(ExportArgs),
    /// Delete all problems
    Clear(ClearArgs),
}

fn main() {
    // Stderr logging, level from RUST_LOG when set.
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.start());

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Add(args) => commands::problem::add(args),
        Commands::Due(args) => commands::problem::due(args),
        Commands::List(args) => commands::problem::list(args),
        Commands::Review(args) => commands::problem::review(args),
        Commands::Import(args) => commands::data::import(args),
        Commands::Export(args) => commands::data::export(args),
        Commands::Clear(args) => commands::data::clear(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
