use super::board::Board;
use super::types::{Outcome, Player, WinningLine};

/// Rows, then columns, then diagonals. The order fixes which line is reported
/// first and must not change.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let player = board[a].player()?;
        (board[b] == board[a] && board[c] == board[a]).then(|| WinningLine::new(player, line))
    })
}

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|line| line.player)
}

/// Terminal outcome of `board`, or `Outcome::InProgress` while cells remain
/// and nobody has three in a row.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_win(board) {
        return Outcome::won_by(winner);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
