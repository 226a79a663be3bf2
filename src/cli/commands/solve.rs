//! Optimal-move analysis for given positions

use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::{cli::output, solver, tictactoe::Board};

#[derive(Args)]
pub struct SolveArgs {
    /// Board as nine row-major cells (X, O, '.' for empty), e.g. "XOX.O...."
    #[arg(long)]
    state: Option<String>,

    /// How many optimal moves to report per position
    #[arg(long, value_enum, default_value_t = PolicyMode::Single)]
    mode: PolicyMode,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum PolicyMode {
    /// A single optimal move per position
    Single,
    /// All moves tied at the optimal value
    Full,
}

impl PolicyMode {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            PolicyMode::Single => "single",
            PolicyMode::Full => "full",
        }
    }
}

/// Analyze a custom position, or a set of key openings when none is given
pub fn execute(args: SolveArgs) -> Result<()> {
    if let Some(s) = &args.state {
        output::print_section("Optimal Analysis for Custom Position");
        let board = Board::from_string(s)?;
        analyze_position(&board, "Custom position", args.mode)?;
        return Ok(());
    }

    output::print_section("Optimal Policy Analysis");
    println!("Showing optimal moves for key positions:");

    analyze_position(&Board::new(), "Empty board", args.mode)?;
    analyze_position(
        &Board::from_string("....X....")?,
        "Center taken by X",
        args.mode,
    )?;
    analyze_position(
        &Board::from_string("X........")?,
        "Corner taken by X",
        args.mode,
    )?;

    Ok(())
}

/// Analyze a single position
fn analyze_position(board: &Board, description: &str, mode: PolicyMode) -> Result<()> {
    println!("\n{description}:");
    println!("{board}");

    if board.is_terminal() {
        println!("  (position is terminal)");
        return Ok(());
    }

    let value = solver::game_value(board)?;
    println!("Game value with {} to move: {value:+}", board.to_move());

    match mode {
        PolicyMode::Single => {
            let action = solver::optimal_action(board)?;
            println!("Optimal move: row {}, col {}", action.row, action.col);
        }
        PolicyMode::Full => {
            println!("Optimal moves (all search-equivalent):");
            for action in solver::best_moves(board)? {
                println!("  - row {}, col {}", action.row, action.col);
            }
        }
    }

    Ok(())
}
