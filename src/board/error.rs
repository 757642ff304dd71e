//! Error types for board setup, move validation and search configuration.

use std::fmt;

use super::{Color, PieceKind, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Invalid rank in position string
    InvalidRank { rank: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// The placement parsed but does not describe a playable position
    InvalidPosition(BoardError),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "Invalid rank index {rank} in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::InvalidPosition(err) => write!(f, "Invalid position: {err}"),
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidPosition(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for FenError {
    fn from(err: BoardError) -> Self {
        FenError::InvalidPosition(err)
    }
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Column out of bounds (must be 0-7)
    ColumnOutOfBounds { col: i32 },
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: i32 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::ColumnOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Structural problems with a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A color has no king
    MissingKing { color: Color },
    /// A color has more than one king
    TooManyKings { color: Color, found: usize },
    /// The lookup table disagrees with the piece arena at a square
    LookupDesync { square: Square },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MissingKing { color } => write!(f, "{color} has no king"),
            BoardError::TooManyKings { color, found } => {
                write!(f, "{color} has {found} kings, expected exactly one")
            }
            BoardError::LookupDesync { square } => {
                write!(f, "Lookup table out of sync with piece arena at {square}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Why a move was rejected.
///
/// The variants after the preconditions follow the order of the legality
/// gates; validation stops at the first gate that fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No piece stands on the origin square
    NoPiece { square: Square },
    /// The piece at the origin belongs to the side not on move
    WrongTurn { color: Color },
    /// The game is already decided by checkmate
    GameOver,
    /// The piece cannot move in that shape
    IllegalShape { kind: PieceKind },
    /// The destination holds a piece of the mover's own color
    FriendlyFire,
    /// Another piece stands in the way
    PathBlocked,
    /// Diagonal pawn move onto an empty square without an en-passant victim
    InvalidEnPassant,
    /// Castling conditions are not met
    InvalidCastle,
    /// The king would step onto an attacked square
    KingIntoAttack,
    /// The side to move is in check and this move does not resolve it
    UnresolvedCheck,
    /// The piece is pinned and the move leaves the pin axis
    Pinned,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPiece { square } => write!(f, "No piece on {square}"),
            MoveError::WrongTurn { color } => write!(f, "It is not {color}'s turn"),
            MoveError::GameOver => write!(f, "The game is over"),
            MoveError::IllegalShape { kind } => write!(f, "A {kind} cannot move that way"),
            MoveError::FriendlyFire => write!(f, "Destination holds a friendly piece"),
            MoveError::PathBlocked => write!(f, "Path is blocked"),
            MoveError::InvalidEnPassant => write!(f, "No pawn can be taken en passant there"),
            MoveError::InvalidCastle => write!(f, "Castling is not allowed"),
            MoveError::KingIntoAttack => write!(f, "King would move into check"),
            MoveError::UnresolvedCheck => write!(f, "Move does not resolve check"),
            MoveError::Pinned => write!(f, "Piece is pinned to its king"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Invalid search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Search depth must be at least one ply
    ZeroDepth,
    /// Search depth exceeds the supported maximum
    DepthTooLarge { depth: u32, max: u32 },
    /// A node budget of zero would never search anything
    ZeroNodeBudget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDepth => write!(f, "Search depth must be at least 1"),
            ConfigError::DepthTooLarge { depth, max } => {
                write!(f, "Search depth {depth} exceeds maximum {max}")
            }
            ConfigError::ZeroNodeBudget => write!(f, "Node budget must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}
