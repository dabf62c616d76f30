pub mod config;
pub mod error;
pub mod logger;
pub mod tictactoe;

pub use error::GameError;
