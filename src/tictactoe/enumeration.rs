//! Enumeration of the reachable position space

use std::collections::{HashSet, VecDeque};

use super::board::Board;

/// Collect every position reachable from the empty board by legal play.
///
/// Walks the game breadth-first, deduplicating by board encoding.
/// Terminal positions are included but not expanded past. The full space
/// holds 5478 distinct positions.
pub fn reachable_boards() -> Vec<Board> {
    let mut boards = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    let root = Board::new();
    visited.insert(root.encode());
    queue.push_back(root);

    while let Some(board) = queue.pop_front() {
        boards.push(board);

        if board.is_terminal() {
            continue;
        }

        for action in board.legal_moves() {
            let Ok(next) = board.make_move(action) else {
                continue;
            };
            if visited.insert(next.encode()) {
                queue.push_back(next);
            }
        }
    }

    boards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_boards_match_known_count() {
        assert_eq!(reachable_boards().len(), 5478);
    }

    #[test]
    fn first_board_is_the_empty_one() {
        let boards = reachable_boards();
        assert_eq!(boards[0], Board::new());
    }
}
