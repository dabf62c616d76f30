//! Exhaustive check of the engine against every opposing line of play.

use crate::GameError;
use super::board::{Board, get_available_moves};
use super::bot_controller::best_move;
use super::types::{Mark, Outcome, Player};
use super::win_detector::evaluate;

/// Finished lines counted by outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    pub lines: u64,
    pub x_wins: u64,
    pub o_wins: u64,
    pub draws: u64,
}

impl LineStats {
    fn record(&mut self, outcome: Outcome) {
        self.lines += 1;
        match outcome {
            Outcome::XWins => self.x_wins += 1,
            Outcome::OWins => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    pub fn wins_for(&self, player: Player) -> u64 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    pub fn losses_for(&self, player: Player) -> u64 {
        self.wins_for(player.opponent())
    }

    pub fn is_unbeaten(&self, player: Player) -> bool {
        self.losses_for(player) == 0
    }
}

/// Plays every game from the empty board where `engine` answers with
/// `best_move` and its opponent tries each legal move in turn. X moves first.
pub fn explore_all_lines(engine: Player) -> Result<LineStats, GameError> {
    let mut stats = LineStats::default();
    let mut board = Board::new();
    explore(&mut board, Player::X, engine, &mut stats)?;
    Ok(stats)
}

fn explore(
    board: &mut Board,
    to_move: Player,
    engine: Player,
    stats: &mut LineStats,
) -> Result<(), GameError> {
    let outcome = evaluate(board);
    if outcome.is_terminal() {
        stats.record(outcome);
        return Ok(());
    }

    let candidates = if to_move == engine {
        vec![best_move(board, engine)?]
    } else {
        get_available_moves(board)
    };

    for index in candidates {
        board.set(index, to_move.mark());
        let result = explore(board, to_move.opponent(), engine, stats);
        board.set(index, Mark::Empty);
        result?;
    }

    Ok(())
}
