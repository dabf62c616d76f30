mod board;
mod bot_controller;
mod game_state;
mod game_tree;
mod types;
mod win_detector;

pub use board::{BOARD_SIDE, Board, CELL_COUNT, get_available_moves};
pub use bot_controller::{SearchResult, best_move, minimax, search};
pub use game_state::{GamePhase, TicTacToeGameState};
pub use game_tree::{LineStats, explore_all_lines};
pub use types::{Mark, Outcome, Player, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate};
