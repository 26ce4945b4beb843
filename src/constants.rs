//! Board dimensions and front-end parameters.
//!
//! The rules core accepts any board size at runtime. The constants here only
//! configure the defaults used by the binary and the GTP front end.
//!
//! # Board Size Configuration
//!
//! The default board size is controlled by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//!
//! ```sh
//! cargo build                                              # 9x9 (default)
//! cargo build --no-default-features --features board13x13  # 13x13
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN) for new games started from the CLI or GTP.
#[cfg(feature = "board9x9")]
pub const DEFAULT_SIZE: usize = 9;

#[cfg(feature = "board13x13")]
pub const DEFAULT_SIZE: usize = 13;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board9x9", feature = "board13x13"))]
compile_error!("Cannot enable both 'board9x9' and 'board13x13' features at the same time");

#[cfg(not(any(feature = "board9x9", feature = "board13x13")))]
compile_error!("Must enable exactly one board size feature: 'board9x9' or 'board13x13'");

/// Largest board that GTP vertices can address (A..Z without I).
pub const MAX_VERTEX_SIZE: usize = 25;

/// Offsets to orthogonal neighbors as (row, col) deltas.
/// Order: North, East, South, West
pub const DELTA: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

// =============================================================================
// Playout Parameters
// =============================================================================

/// Move limit for a random playout, as a multiple of the board area.
pub const PLAYOUT_LEN_FACTOR: usize = 3;

/// Seed used by the CLI when none is given.
pub const DEFAULT_SEED: u64 = 1;

// =============================================================================
// Stone Glyphs
// =============================================================================

/// Black stone in text diagrams.
pub const GLYPH_BLACK: char = 'X';

/// White stone in text diagrams.
pub const GLYPH_WHITE: char = 'O';

/// Empty point in text diagrams.
pub const GLYPH_EMPTY: char = '.';
