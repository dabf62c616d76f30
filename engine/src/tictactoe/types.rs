use std::fmt;

use crate::GameError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    /// Parses a cell as a presentation layer reads it: `""` is empty, `"X"` and
    /// `"O"` are tokens. Surrounding whitespace is ignored.
    pub fn from_token(token: &str) -> Result<Mark, GameError> {
        match token.trim() {
            "" => Ok(Mark::Empty),
            "X" => Ok(Mark::X),
            "O" => Ok(Mark::O),
            other => Err(GameError::InvalidCellValue(other.to_string())),
        }
    }

    pub fn from_char(c: char) -> Result<Mark, GameError> {
        match c {
            '.' | '-' | '_' => Ok(Mark::Empty),
            'X' => Ok(Mark::X),
            'O' => Ok(Mark::O),
            other => Err(GameError::InvalidCellValue(other.to_string())),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

/// One of the two sides. X always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark().as_char())
    }
}

/// Result of evaluating a board. `InProgress` means no terminal outcome yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    XWins,
    OWins,
    Draw,
}

impl Outcome {
    pub fn won_by(player: Player) -> Outcome {
        match player {
            Player::X => Outcome::XWins,
            Player::O => Outcome::OWins,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

/// A completed triple and the side that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(player: Player, cells: [usize; 3]) -> Self {
        Self { player, cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}
