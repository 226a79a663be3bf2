//! Interactive play against the engine

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Args, ValueEnum};
use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    solver,
    tictactoe::{Action, Board, Game, Outcome, Player},
};

#[derive(Args)]
pub struct PlayArgs {
    /// Side played by the human
    #[arg(long, value_enum, default_value_t = HumanSide::X)]
    side: HumanSide,

    /// Engine policy for the other side
    #[arg(long, value_enum, default_value_t = EngineKind::Optimal)]
    engine: EngineKind,

    /// Seed for the random engine
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum HumanSide {
    X,
    O,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum EngineKind {
    /// Exhaustive search; never loses
    Optimal,
    /// Uniform random over the open cells
    Random,
}

/// Run a game on stdin/stdout until it ends or input runs out
pub fn execute(args: PlayArgs) -> Result<()> {
    let human = match args.side {
        HumanSide::X => Player::X,
        HumanSide::O => Player::O,
    };
    let mut rng = StdRng::seed_from_u64(args.seed.unwrap_or_else(random));

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();
    let mut game = Game::new();

    loop {
        let board = game.current_state()?;
        println!("\n{board}");

        if let Some(outcome) = game.outcome {
            match outcome {
                Outcome::Win(player) => println!("{player} wins"),
                Outcome::Draw => println!("draw"),
            }
            return Ok(());
        }

        let to_move = board.to_move();
        let action = if to_move == human {
            match prompt_action(&mut input)? {
                Some(action) => action,
                None => return Ok(()), // input exhausted
            }
        } else {
            let action = engine_action(args.engine, &mut rng, &board)?;
            println!("{to_move} plays {action}");
            action
        };

        // Illegal human input is reported and the same position re-prompted
        if let Err(err) = game.play(action) {
            println!("{err}");
        }
    }
}

fn prompt_action(input: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<Action>> {
    loop {
        print!("your move (row col): ");
        io::stdout().flush()?;

        let Some(line) = input.next() else {
            return Ok(None);
        };

        match parse_action(&line?) {
            Some(action) => return Ok(Some(action)),
            None => println!("enter two coordinates in [0, 2], e.g. \"0 2\""),
        }
    }
}

fn parse_action(input: &str) -> Option<Action> {
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Action::new(row, col))
}

fn engine_action<R: Rng>(kind: EngineKind, rng: &mut R, board: &Board) -> Result<Action> {
    match kind {
        EngineKind::Optimal => Ok(solver::optimal_action(board)?),
        EngineKind::Random => {
            let moves = board.legal_moves();
            anyhow::ensure!(!moves.is_empty(), "no moves available");
            Ok(moves[rng.random_range(0..moves.len())])
        }
    }
}
