//! Named board squares.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A square on the tic-tac-toe board, named for front ends.
///
/// Squares map to board indices row-major, [`Position::TopLeft`] = 0 through
/// [`Position::BottomRight`] = 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses a square as drawn on screen: a number 1-9, or a label.
    ///
    /// Labels match case-insensitively and ignore spaces, so `"top left"`,
    /// `"Top-left"` and `"topleft"` are the same square.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let wanted = normalize(s);
        if wanted.is_empty() {
            return None;
        }
        Position::iter().find(|pos| normalize(pos.label()) == wanted)
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Position::iter().nth(index)
    }

    /// Positions whose squares are still empty, in index order.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Position::iter()
            .filter(|pos| board.is_empty(pos.to_index()))
            .collect()
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_mapping() {
        assert_eq!(Position::TopLeft.to_index(), 0);
        assert_eq!(Position::Center.to_index(), 4);
        assert_eq!(Position::from_index(8), Some(Position::BottomRight));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_parse_numbers_are_one_based() {
        assert_eq!(Position::from_label_or_number("1"), Some(Position::TopLeft));
        assert_eq!(Position::from_label_or_number("9"), Some(Position::BottomRight));
        assert_eq!(Position::from_label_or_number("0"), None);
        assert_eq!(Position::from_label_or_number("10"), None);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number("Top left"), Some(Position::TopLeft));
        assert_eq!(
            Position::from_label_or_number("bottom-right"),
            Some(Position::BottomRight)
        );
        assert_eq!(Position::from_label_or_number("middle"), None);
        assert_eq!(Position::from_label_or_number(""), None);
    }

    #[test]
    fn test_valid_moves_filters_occupied() {
        let board: Board = "X___O____".parse().unwrap();
        let valid = Position::valid_moves(&board);
        assert_eq!(valid.len(), 7);
        assert!(!valid.contains(&Position::TopLeft));
        assert!(!valid.contains(&Position::Center));
        assert!(valid.contains(&Position::BottomRight));
    }
}
