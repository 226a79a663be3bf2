//! Exhaustive adversarial search for the optimal move
//!
//! X maximizes the final utility and O minimizes it. The game tree is at
//! most 9 plies deep and shrinks by one open cell per move, so the search
//! always runs to completion and the value it returns is exact, not a
//! heuristic estimate.

use crate::{
    Error, Result,
    tictactoe::{Action, Board, Player},
};

/// Exact game value of a position paired with the move achieving it.
///
/// The move is `None` only for terminal positions, where there is nothing
/// left to play.
pub type ValuedAction = (i32, Option<Action>);

/// Best line for the maximizing player (X).
///
/// Folds over the legal moves, recursing into [`min_value`] on each
/// successor, and keeps the first strict improvement. The instant a move
/// worth +1 turns up the remaining siblings are skipped; nothing can
/// improve on a won line, so the cut is exact and cannot change the
/// returned value or move.
pub fn max_value(board: &Board) -> Result<ValuedAction> {
    if board.is_terminal() {
        return Ok((board.utility(), None));
    }

    let mut best_value = i32::MIN;
    let mut best_action = None;

    for action in board.legal_moves() {
        let (value, _) = min_value(&board.make_move(action)?)?;
        if value > best_value {
            best_value = value;
            best_action = Some(action);
            if best_value == 1 {
                break;
            }
        }
    }

    Ok((best_value, best_action))
}

/// Best line for the minimizing player (O); the mirror of [`max_value`],
/// with the early exit firing on -1.
pub fn min_value(board: &Board) -> Result<ValuedAction> {
    if board.is_terminal() {
        return Ok((board.utility(), None));
    }

    let mut best_value = i32::MAX;
    let mut best_action = None;

    for action in board.legal_moves() {
        let (value, _) = max_value(&board.make_move(action)?)?;
        if value < best_value {
            best_value = value;
            best_action = Some(action);
            if best_value == -1 {
                break;
            }
        }
    }

    Ok((best_value, best_action))
}

/// Compute the optimal action for the player to move.
///
/// Assumes both players play out the rest of the game optimally; among
/// moves tied at the optimal value the first one found is returned.
///
/// # Errors
///
/// Returns [`Error::TerminalPosition`] if the game is already over.
pub fn optimal_action(board: &Board) -> Result<Action> {
    if board.is_terminal() {
        return Err(Error::TerminalPosition {
            board: board.encode(),
        });
    }

    let (_, action) = match board.to_move() {
        Player::X => max_value(board)?,
        Player::O => min_value(board)?,
    };

    action.ok_or(Error::NoValidMoves)
}

/// Exact value of the position under optimal play by both sides.
pub fn game_value(board: &Board) -> Result<i32> {
    match board.to_move() {
        Player::X => Ok(max_value(board)?.0),
        Player::O => Ok(min_value(board)?.0),
    }
}

/// Evaluate every legal move in the position and return its exact value.
///
/// Unlike [`optimal_action`] this explores every move, since each one
/// needs its own value; the early exit still prunes inside the subtrees.
///
/// # Errors
///
/// Returns [`Error::TerminalPosition`] if the game is already over.
pub fn evaluate_moves(board: &Board) -> Result<Vec<(Action, i32)>> {
    if board.is_terminal() {
        return Err(Error::TerminalPosition {
            board: board.encode(),
        });
    }

    let to_move = board.to_move();
    let mut values = Vec::new();
    for action in board.legal_moves() {
        let next = board.make_move(action)?;
        let (value, _) = match to_move {
            Player::X => min_value(&next)?,
            Player::O => max_value(&next)?,
        };
        values.push((action, value));
    }

    Ok(values)
}

/// All moves tied at the optimal value, sorted row-major.
///
/// # Errors
///
/// Returns [`Error::TerminalPosition`] if the game is already over.
pub fn best_moves(board: &Board) -> Result<Vec<Action>> {
    let values = evaluate_moves(board)?;
    let best = match board.to_move() {
        Player::X => values.iter().map(|&(_, value)| value).max(),
        Player::O => values.iter().map(|&(_, value)| value).min(),
    }
    .unwrap_or(0);

    let mut best_actions: Vec<Action> = values
        .into_iter()
        .filter(|&(_, value)| value == best)
        .map(|(action, _)| action)
        .collect();
    best_actions.sort_unstable();
    Ok(best_actions)
}
