mod config;
mod render;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_engine::log;
use tictactoe_engine::logger::{self, LogLevel};
use tictactoe_engine::tictactoe::{Board, Player, evaluate, explore_all_lines, search};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against an engine that never loses")]
struct Args {
    /// Path to the YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    use_log_prefix: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play as X against the engine (default)
    Play,
    /// Print the outcome of a board such as "XX./.O./..O"
    Evaluate { board: String },
    /// Print the engine's move for a board
    BestMove {
        board: String,
        /// Side the engine plays
        #[arg(long, value_enum, ignore_case = true, default_value_t = Side::O)]
        player: Side,
        /// Also print the score of every candidate move
        #[arg(long)]
        scores: bool,
    },
    /// Play every possible game against the engine and check it never loses
    Verify,
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

fn verify() -> Result<(), Box<dyn std::error::Error>> {
    for engine in [Player::O, Player::X] {
        let stats = explore_all_lines(engine)?;
        println!(
            "engine as {}: {} lines, {} won, {} drawn, {} lost",
            engine,
            stats.lines,
            stats.wins_for(engine),
            stats.draws,
            stats.losses_for(engine)
        );
        if !stats.is_unbeaten(engine) {
            return Err(format!("engine playing {} lost {} lines", engine, stats.losses_for(engine)).into());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    let min_level = if args.verbose { LogLevel::Debug } else { LogLevel::Warn };
    logger::init_logger(prefix, min_level);

    match args.command.unwrap_or(Command::Play) {
        Command::Play => {
            let manager = config::get_config_manager(args.config.as_deref());
            let game_config = manager.get_config()?;
            log!("Loaded config: {:?}", game_config);
            runner::run_interactive(&game_config).await?;
        }
        Command::Evaluate { board } => {
            let board: Board = board.parse()?;
            println!("{}", render::outcome_label(evaluate(&board)));
        }
        Command::BestMove { board, player, scores } => {
            let board: Board = board.parse()?;
            let result = search(&board, player.into())?;
            println!("{}", result.index);
            if scores {
                println!("{}", render::score_table(&result));
            }
        }
        Command::Verify => verify()?,
    }

    Ok(())
}
