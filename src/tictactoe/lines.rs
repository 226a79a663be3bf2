//! Winning-line detection on the 3x3 grid

use super::board::{Cell, Player};

/// The eight lines that decide a game, in scan order: both diagonals,
/// then rows top to bottom, then columns left to right.
pub const LINES: [[usize; 3]; 8] = [
    [0, 4, 8],
    [2, 4, 6], // diagonals
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
];

/// Find the mark holding a completed line, if any.
///
/// The first fully matching line in the scan order decides. A board
/// reachable by alternating play can hold winning lines for at most one
/// player, so the order never changes the answer there.
pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
    LINES.iter().find_map(|line| {
        let first = cells[line[0]];
        if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
            first.player()
        } else {
            None
        }
    })
}

/// Check if a player has three in a line
pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.to_cell();
    LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}
