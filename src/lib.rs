//! Exhaustive Tic-Tac-Toe solver
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe rules with immutable board states
//! - Exact adversarial search with a winning-line early exit
//! - Full-policy export over the reachable position space
//! - An interactive command-line game against the engine

pub mod cli;
pub mod error;
pub mod solver;
pub mod tictactoe;

pub use error::{Error, Result};
pub use solver::{best_moves, evaluate_moves, game_value, max_value, min_value, optimal_action};
pub use tictactoe::{Action, Board, Cell, Game, Move, Outcome, Player};
