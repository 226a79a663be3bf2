//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Action, Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
}

impl Outcome {
    /// Classify a board, or `None` while the game is still in progress
    pub fn of(board: &Board) -> Option<Outcome> {
        if !board.is_terminal() {
            return None;
        }
        Some(match board.winner() {
            Some(winner) => Outcome::Win(winner),
            None => Outcome::Draw,
        })
    }
}

/// A complete game with history, always starting from the empty board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub moves: Vec<Move>,
    pub outcome: Option<Outcome>,
}

impl Game {
    /// Create a new game at the empty board
    pub fn new() -> Self {
        Game {
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move
    ///
    /// # Errors
    ///
    /// Returns error if the game is already over or the move is illegal
    /// on the current board.
    pub fn play(&mut self, action: Action) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state()?;
        let next = current.make_move(action)?;

        self.moves.push(Move {
            action,
            player: current.to_move(),
        });
        self.outcome = Outcome::of(&next);

        Ok(())
    }

    /// Replay moves up to a given index (exclusive)
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the state
    /// it is applied to. This indicates corrupted game data.
    fn replay_moves_until(&self, end_index: usize) -> Result<Board, crate::Error> {
        let mut board = Board::new();
        for m in self.moves.iter().take(end_index) {
            board = board.make_move(m.action)?;
        }
        Ok(board)
    }

    /// Get current board state
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid. This indicates
    /// corrupted game data.
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of board states, from the empty board onwards
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid. This indicates
    /// corrupted game data.
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        states.push(Board::new());

        for i in 1..=self.moves.len() {
            states.push(self.replay_moves_until(i)?);
        }

        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
