//! Policy export over the reachable position space

use std::{collections::HashMap, fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use super::solve::PolicyMode;
use crate::{
    cli::output,
    solver,
    tictactoe::{Action, reachable_boards},
};

#[derive(Args)]
pub struct ExportArgs {
    /// Destination JSON file
    #[arg(long)]
    output: PathBuf,

    /// Encode a single optimal move per position or all of them
    #[arg(long, value_enum, default_value_t = PolicyMode::Single)]
    mode: PolicyMode,
}

#[derive(Serialize)]
struct PolicyExport {
    description: &'static str,
    mode: &'static str,
    total_states: usize,
    policy: HashMap<String, PolicyEntry>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum PolicyEntry {
    Single(Action),
    Multiple(Vec<Action>),
}

/// Solve every reachable non-terminal position and write the policy as JSON
pub fn execute(args: ExportArgs) -> Result<()> {
    println!("Enumerating reachable positions...");
    let open: Vec<_> = reachable_boards()
        .into_iter()
        .filter(|board| !board.is_terminal())
        .collect();
    println!("  {} positions to solve", open.len());

    let bar = output::create_sweep_progress(open.len() as u64);
    let mut policy = HashMap::new();

    for board in &open {
        let entry = match args.mode {
            PolicyMode::Single => PolicyEntry::Single(solver::optimal_action(board)?),
            PolicyMode::Full => PolicyEntry::Multiple(solver::best_moves(board)?),
        };
        policy.insert(board.encode(), entry);
        bar.inc(1);
    }
    bar.finish();

    let export = PolicyExport {
        description: "Exact full-search policy for Tic-Tac-Toe",
        mode: args.mode.as_str(),
        total_states: policy.len(),
        policy,
    };

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    serde_json::to_writer_pretty(file, &export)?;
    println!("Policy exported to: {}", args.output.display());

    Ok(())
}
