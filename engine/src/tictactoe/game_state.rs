use crate::{GameError, log_debug};
use super::board::{Board, CELL_COUNT};
use super::types::{Outcome, Player, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingX,
    AwaitingO,
    Finished(Outcome),
}

impl GamePhase {
    fn awaiting(player: Player) -> Self {
        match player {
            Player::X => GamePhase::AwaitingX,
            Player::O => GamePhase::AwaitingO,
        }
    }

    pub fn to_move(self) -> Option<Player> {
        match self {
            GamePhase::AwaitingX => Some(Player::X),
            GamePhase::AwaitingO => Some(Player::O),
            GamePhase::Finished(_) => None,
        }
    }
}

/// Whole-game state owned by the front end: the board, whose turn it is and
/// whether the game has ended.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    phase: GamePhase,
    last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: GamePhase::AwaitingX,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn current_player(&self) -> Option<Player> {
        self.phase.to_move()
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn outcome(&self) -> Outcome {
        match self.phase {
            GamePhase::Finished(outcome) => outcome,
            _ => Outcome::InProgress,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn place_mark(&mut self, player: Player, index: usize) -> Result<GamePhase, GameError> {
        let Some(current) = self.phase.to_move() else {
            return Err(GameError::GameOver);
        };

        if player != current {
            return Err(GameError::NotYourTurn);
        }

        if index >= CELL_COUNT {
            return Err(GameError::OutOfBounds(index));
        }

        if !self.board.is_empty_at(index) {
            return Err(GameError::CellOccupied(index));
        }

        self.board.set(index, player.mark());
        self.last_move = Some(index);

        self.phase = match evaluate(&self.board) {
            Outcome::InProgress => GamePhase::awaiting(player.opponent()),
            outcome => GamePhase::Finished(outcome),
        };

        log_debug!("{} marked cell {}, board {}, phase {:?}", player, index, self.board, self.phase);

        Ok(self.phase)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::types::Mark;

    fn play(state: &mut TicTacToeGameState, moves: &[usize]) {
        for &index in moves {
            let player = state.current_player().unwrap();
            state.place_mark(player, index).unwrap();
        }
    }

    #[test]
    fn test_new_game_awaits_x() {
        let state = TicTacToeGameState::new();
        assert_eq!(state.phase(), GamePhase::AwaitingX);
        assert_eq!(state.current_player(), Some(Player::X));
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.place_mark(Player::X, 4), Ok(GamePhase::AwaitingO));
        assert_eq!(state.place_mark(Player::O, 0), Ok(GamePhase::AwaitingX));
        assert_eq!(state.board()[4], Mark::X);
        assert_eq!(state.board()[0], Mark::O);
        assert_eq!(state.last_move(), Some(0));
    }

    #[test]
    fn test_rejects_out_of_turn() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.place_mark(Player::O, 4), Err(GameError::NotYourTurn));
        assert_eq!(state.board(), &Board::new());
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(Player::X, 4).unwrap();
        assert_eq!(state.place_mark(Player::O, 4), Err(GameError::CellOccupied(4)));
        assert_eq!(state.phase(), GamePhase::AwaitingO);
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.place_mark(Player::X, 9), Err(GameError::OutOfBounds(9)));
    }

    #[test]
    fn test_win_finishes_game() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);
        assert_eq!(state.phase(), GamePhase::Finished(Outcome::XWins));
        assert_eq!(state.outcome(), Outcome::XWins);
        assert_eq!(
            state.winning_line(),
            Some(WinningLine::new(Player::X, [0, 1, 2]))
        );
        assert_eq!(state.place_mark(Player::O, 5), Err(GameError::GameOver));
    }

    #[test]
    fn test_draw_finishes_game() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.phase(), GamePhase::Finished(Outcome::Draw));
        assert_eq!(state.winning_line(), None);
        assert_eq!(state.current_player(), None);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);
        state.reset();
        assert_eq!(state.phase(), GamePhase::AwaitingX);
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.last_move(), None);
    }
}
