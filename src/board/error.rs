//! Error types for position parsing.

use std::fmt;

/// Error type for FEN and position-string parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// FEN has fewer fields than required
    TooFewFields { found: usize },
    /// Invalid piece character in the board field
    InvalidPiece { ch: char },
    /// A board row spills past file i
    TooManyFiles { rank: usize },
    /// More than ten board rows
    TooManyRanks,
    /// Side-to-move field is not `w`, `r`, or `b`
    InvalidSideToMove { found: String },
    /// A move token is not four ICCS characters
    InvalidMove { notation: String },
    /// A syntactically valid move cannot be played
    IllegalMove { notation: String },
    /// `moves` given before any position, or no position at all
    MissingPosition,
    /// A token that is neither `fen`, `startpos`, nor `moves`
    UnknownDirective { found: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::TooFewFields { found } => {
                write!(f, "FEN must have at least 2 fields, found {found}")
            }
            ParseError::InvalidPiece { ch } => {
                write!(f, "Invalid piece character '{ch}' in FEN")
            }
            ParseError::TooManyFiles { rank } => {
                write!(f, "Too many files in FEN rank {rank}")
            }
            ParseError::TooManyRanks => write!(f, "Too many ranks in FEN"),
            ParseError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w', 'r' or 'b'")
            }
            ParseError::InvalidMove { notation } => {
                write!(f, "Invalid move notation '{notation}'")
            }
            ParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
            ParseError::MissingPosition => {
                write!(f, "Position string carries no 'fen' or 'startpos'")
            }
            ParseError::UnknownDirective { found } => {
                write!(f, "Unknown position directive '{found}'")
            }
        }
    }
}

impl std::error::Error for ParseError {}
