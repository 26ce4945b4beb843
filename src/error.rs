//! Errors raised by the rules core.

use thiserror::Error;

use crate::point::Point;

/// A rejected board operation.
///
/// Every variant is a deterministic rule violation. The board the operation
/// was called on is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Negative board size, or one too large for vertex text.
    #[error("invalid board size: {0}")]
    InvalidSize(i64),
    /// Point lies outside `[0, size) x [0, size)`.
    #[error("point {point} is off a {size}x{size} board")]
    OutOfBounds { point: Point, size: usize },
    /// Target intersection already holds a stone.
    #[error("intersection {0} is occupied")]
    IntersectionOccupied(Point),
    /// A move was requested for `Color::Empty`.
    #[error("cannot play an empty stone")]
    EmptyColor,
    /// Vertex text could not be parsed.
    #[error("invalid vertex: {0}")]
    InvalidVertex(String),
    /// Two boards of different sizes were compared.
    #[error("board sizes differ: {left} vs {right}")]
    SizeMismatch { left: usize, right: usize },
}
