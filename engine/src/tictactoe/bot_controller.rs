use crate::GameError;
use super::board::{Board, CELL_COUNT, get_available_moves};
use super::types::{Mark, Outcome, Player};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 10;

/// Outcome of a full search from one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub index: usize,
    pub score: i32,
    /// Score of every candidate move, in ascending index order.
    pub move_scores: Vec<(usize, i32)>,
    pub nodes: u64,
}

pub fn best_move(board: &Board, bot: Player) -> Result<usize, GameError> {
    search(board, bot).map(|result| result.index)
}

/// Scores every empty cell for `bot` with an exhaustive minimax and picks the
/// first cell with the highest score. Full or already decided boards yield
/// `GameError::NoLegalMove`.
pub fn search(board: &Board, bot: Player) -> Result<SearchResult, GameError> {
    if evaluate(board).is_terminal() {
        return Err(GameError::NoLegalMove);
    }

    let available_moves = get_available_moves(board);
    let mut board = *board;
    let mut searcher = Searcher::new(bot);

    let mut best: Option<(usize, i32)> = None;
    let mut move_scores = Vec::with_capacity(available_moves.len());

    for index in available_moves {
        board.set(index, bot.mark());
        let score = searcher.minimax(&mut board, 1, false);
        board.set(index, Mark::Empty);

        move_scores.push((index, score));
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    let (index, score) = best.ok_or(GameError::NoLegalMove)?;
    Ok(SearchResult {
        index,
        score,
        move_scores,
        nodes: searcher.nodes,
    })
}

/// Minimax value of `board` for `bot`, `depth` plies below the search root.
/// The board is mutated while searching and restored before returning.
pub fn minimax(board: &mut Board, bot: Player, depth: i32, is_maximizing: bool) -> i32 {
    Searcher::new(bot).minimax(board, depth, is_maximizing)
}

struct Searcher {
    bot: Player,
    nodes: u64,
}

impl Searcher {
    fn new(bot: Player) -> Self {
        Self { bot, nodes: 0 }
    }

    fn minimax(&mut self, board: &mut Board, depth: i32, is_maximizing: bool) -> i32 {
        self.nodes += 1;

        match evaluate(board) {
            Outcome::InProgress => {}
            Outcome::Draw => return 0,
            decided if decided.winner() == Some(self.bot) => return WIN_SCORE - depth,
            _ => return -WIN_SCORE + depth,
        }

        let mark = if is_maximizing {
            self.bot.mark()
        } else {
            self.bot.opponent().mark()
        };

        let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };
        for index in 0..CELL_COUNT {
            if !board.is_empty_at(index) {
                continue;
            }

            board.set(index, mark);
            let score = self.minimax(board, depth + 1, !is_maximizing);
            board.set(index, Mark::Empty);

            best_score = if is_maximizing {
                best_score.max(score)
            } else {
                best_score.min(score)
            };
        }

        best_score
    }
}
