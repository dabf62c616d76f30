use tictactoe_engine::tictactoe::{BOARD_SIDE, Board, Mark, Outcome, SearchResult, WinningLine};

/// Draws the grid. Empty cells show the 1-based number the player types to
/// claim them; cells of the winning line are bracketed.
pub fn render_board(board: &Board, winning_line: Option<&WinningLine>) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(BOARD_SIDE)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &mark)| {
                    let index = row * BOARD_SIDE + col;
                    let symbol = match mark {
                        Mark::Empty => char::from_digit(index as u32 + 1, 10).unwrap_or('?'),
                        mark => mark.as_char(),
                    };
                    if winning_line.is_some_and(|line| line.contains(index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn outcome_message(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::XWins => Some("X wins!"),
        Outcome::OWins => Some("O wins!"),
        Outcome::Draw => Some("It's a draw!"),
        Outcome::InProgress => None,
    }
}

pub fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::InProgress => "in progress",
        Outcome::XWins => "X wins",
        Outcome::OWins => "O wins",
        Outcome::Draw => "draw",
    }
}

pub fn score_table(result: &SearchResult) -> String {
    result
        .move_scores
        .iter()
        .map(|&(index, score)| {
            let marker = if index == result.index { " <" } else { "" };
            format!("cell {} (index {}): {:+}{}", index + 1, index, score, marker)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
