//! Tic-Tac-Toe solver CLI
//!
//! This CLI provides a unified interface for:
//! - Reporting the optimal move and exact value for any position
//! - Exporting the complete optimal policy as JSON
//! - Playing interactive games against the engine

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Exhaustive Tic-Tac-Toe solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the optimal move for a position
    Solve(oxo::cli::commands::solve::SolveArgs),

    /// Export the optimal policy for every reachable position
    Export(oxo::cli::commands::export::ExportArgs),

    /// Play an interactive game against the engine
    Play(oxo::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => oxo::cli::commands::solve::execute(args),
        Commands::Export(args) => oxo::cli::commands::export::execute(args),
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
    }
}
