//! gorules: the rules core of a Go program.
//!
//! This crate provides an immutable, persistent Go board with capture and
//! suicide resolution and simple area scoring, plus a GTP front end and
//! random playouts built on top of it.
//!
//! ## Modules
//!
//! - [`board`] - Immutable board values, move application, captures
//! - [`group`] - Connected-group search and liberty counting
//! - [`scoring`] - Simple area scoring
//! - [`point`] - Coordinates, adjacency, GTP vertex text
//! - [`error`] - Rule violations reported by the core
//! - [`constants`] - Default board size and front-end parameters
//! - [`gtp`] - Go Text Protocol front end
//! - [`playout`] - Random game simulation
//!
//! ## Example
//!
//! ```
//! use gorules::board::{Board, Color};
//! use gorules::point::Point;
//!
//! let board = Board::new(9);
//! let next = board.play(Color::Black, Point::new(2, 2)).unwrap();
//!
//! // The old board is untouched.
//! assert_eq!(board.stone(Point::new(2, 2)), Color::Empty);
//! assert_eq!(next.area_score().black, 81);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod group;
pub mod gtp;
pub mod playout;
pub mod point;
pub mod scoring;

pub use board::{Board, Color, GoBoard, MoveOutcome};
pub use error::BoardError;
pub use group::{Group, find_group};
pub use point::{Point, adjacent};
pub use scoring::Score;
