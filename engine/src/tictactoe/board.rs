use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::GameError;
use super::types::Mark;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// The 3x3 grid, indexed 0..8 row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn from_marks(marks: &[Mark]) -> Result<Self, GameError> {
        let cells: [Mark; CELL_COUNT] =
            marks.try_into().map_err(|_| GameError::InvalidBoardSize {
                expected: CELL_COUNT,
                found: marks.len(),
            })?;
        Ok(Self { cells })
    }

    /// Builds a board from cell texts such as `["X", "", "O", ...]`.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, GameError> {
        if tokens.len() != CELL_COUNT {
            return Err(GameError::InvalidBoardSize {
                expected: CELL_COUNT,
                found: tokens.len(),
            });
        }

        let marks = tokens
            .iter()
            .map(|token| Mark::from_token(token.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_marks(&marks)
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }
}

impl Index<usize> for Board {
    type Output = Mark;

    fn index(&self, index: usize) -> &Mark {
        &self.cells[index]
    }
}

impl TryFrom<&[Mark]> for Board {
    type Error = GameError;

    fn try_from(marks: &[Mark]) -> Result<Self, Self::Error> {
        Self::from_marks(marks)
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '/' | ',' | '|')
}

impl FromStr for Board {
    type Err = GameError;

    /// Reads the compact notation, e.g. `"XX./.O./..O"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .chars()
            .filter(|&c| !is_separator(c))
            .map(Mark::from_char)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_marks(&marks)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in cells {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}

/// Empty cell indices in ascending order.
pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact_notation() {
        let board: Board = "XX./.O./..O".parse().unwrap();
        assert_eq!(board[0], Mark::X);
        assert_eq!(board[1], Mark::X);
        assert_eq!(board[2], Mark::Empty);
        assert_eq!(board[4], Mark::O);
        assert_eq!(board[8], Mark::O);
        assert_eq!(board.to_string(), "XX./.O./..O");
    }

    #[test]
    fn test_parse_ignores_separators() {
        let spaced: Board = "X X - | - O - | _ _ O".parse().unwrap();
        let compact: Board = "XX-/-O-/__O".parse().unwrap();
        assert_eq!(spaced, compact);
    }

    #[test]
    fn test_parse_wrong_size() {
        let result = "XX./.O.".parse::<Board>();
        assert_eq!(
            result,
            Err(GameError::InvalidBoardSize { expected: 9, found: 6 })
        );

        let result = "XXO/OXX/OXO/X".parse::<Board>();
        assert!(matches!(result, Err(GameError::InvalidBoardSize { found: 10, .. })));
    }

    #[test]
    fn test_parse_invalid_cell() {
        let result = "XX./.Q./..O".parse::<Board>();
        assert_eq!(result, Err(GameError::InvalidCellValue("Q".to_string())));
    }

    #[test]
    fn test_from_tokens() {
        let tokens = ["X", "", "", "", "O", "", "", "", ""];
        let board = Board::from_tokens(&tokens).unwrap();
        assert_eq!(board.count(Mark::X), 1);
        assert_eq!(board.count(Mark::O), 1);
        assert_eq!(board.count(Mark::Empty), 7);
    }

    #[test]
    fn test_from_tokens_errors() {
        let short = ["X", "", "O"];
        assert!(matches!(
            Board::from_tokens(&short),
            Err(GameError::InvalidBoardSize { expected: 9, found: 3 })
        ));

        let bad = ["X", "", "", "", "#", "", "", "", ""];
        assert_eq!(
            Board::from_tokens(&bad),
            Err(GameError::InvalidCellValue("#".to_string()))
        );
    }

    #[test]
    fn test_from_marks_size() {
        let marks = vec![Mark::Empty; 8];
        assert!(matches!(
            Board::try_from(marks.as_slice()),
            Err(GameError::InvalidBoardSize { expected: 9, found: 8 })
        ));
    }

    #[test]
    fn test_available_moves_ascending() {
        let board: Board = "XO./.X./O..".parse().unwrap();
        assert_eq!(get_available_moves(&board), vec![2, 3, 5, 7, 8]);
        assert_eq!(get_available_moves(&Board::new()), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XOX/OXO/OXO".parse().unwrap();
        assert!(board.is_full());
        assert!(get_available_moves(&board).is_empty());
        assert!(!board.is_empty_at(4));
        assert!(!board.is_empty_at(9));
    }
}
