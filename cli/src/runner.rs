use std::io::Write;
use std::time::Duration;

use tictactoe_engine::GameError;
use tictactoe_engine::config::GameConfig;
use tictactoe_engine::tictactoe::{CELL_COUNT, GamePhase, Player, TicTacToeGameState, search};
use tictactoe_engine::{log, log_debug, log_warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render::{outcome_message, render_board, score_table};

pub const HUMAN: Player = Player::X;
pub const ENGINE: Player = Player::O;

#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Cell(usize),
    Quit,
    Invalid,
}

/// Cells are typed 1-based, matching the numbers drawn on empty cells.
pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Input::Quit;
    }

    match trimmed.parse::<usize>() {
        Ok(number) if (1..=CELL_COUNT).contains(&number) => Input::Cell(number - 1),
        _ => Input::Invalid,
    }
}

/// Rejections name cells the way the player typed them, 1-based.
pub fn rejection_message(error: &GameError) -> String {
    match error {
        GameError::CellOccupied(index) => format!("Cell {} is already marked", index + 1),
        GameError::OutOfBounds(index) => format!("Cell {} is out of bounds", index + 1),
        other => other.to_string(),
    }
}

fn prompt(text: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", text)?;
    stdout.flush()
}

pub async fn run_interactive(config: &GameConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut game = TicTacToeGameState::new();

    println!("You are {}, the engine is {}. Type 1-9 to mark a cell, q to quit.", HUMAN, ENGINE);

    loop {
        match game.phase() {
            GamePhase::AwaitingX => {
                println!("\n{}\n", render_board(game.board(), None));
                prompt("Your move: ")?;

                let Some(line) = lines.next_line().await? else {
                    log_warn!("Input closed, leaving the game");
                    return Ok(());
                };

                match parse_input(&line) {
                    Input::Quit => return Ok(()),
                    Input::Invalid => println!("Enter a number from 1 to 9, or q to quit"),
                    Input::Cell(index) => {
                        if let Err(e) = game.place_mark(HUMAN, index) {
                            println!("{}", rejection_message(&e));
                        }
                    }
                }
            }
            GamePhase::AwaitingO => {
                tokio::time::sleep(Duration::from_millis(config.bot_delay_ms)).await;

                let board = *game.board();
                let result = tokio::task::spawn_blocking(move || search(&board, ENGINE)).await??;

                log_debug!(
                    "Engine searched {} nodes, best score {}",
                    result.nodes,
                    result.score
                );
                if config.show_move_scores {
                    println!("{}", score_table(&result));
                }

                game.place_mark(ENGINE, result.index)?;
                println!("Engine marks cell {}", result.index + 1);
            }
            GamePhase::Finished(outcome) => {
                let winning_line = game.winning_line();
                println!("\n{}\n", render_board(game.board(), winning_line.as_ref()));
                if let Some(message) = outcome_message(outcome) {
                    println!("{}", message);
                }
                log!("Game finished: {:?}", outcome);

                tokio::time::sleep(Duration::from_millis(config.reset_delay_ms)).await;
                game.reset();
                println!("\nNew game");
            }
        }
    }
}
