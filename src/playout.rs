//! Random playouts (random game simulation).
//!
//! A playout alternates colors, each side playing a uniformly random move
//! that neither fills one of its own single-point eyes nor commits suicide.
//! It ends when both sides in turn have no such move, or at the move limit,
//! and the final board is area-scored.

use tracing::info;

use crate::board::{Board, Color};
use crate::point::{Point, adjacent};
use crate::scoring::Score;

/// Outcome of a playout.
#[derive(Clone, Debug)]
pub struct Playout {
    /// Final position.
    pub board: Board,
    /// Stones placed (skipped turns are not counted).
    pub moves: usize,
    /// Area score of the final position.
    pub score: Score,
}

/// Whether every on-board neighbor of `p` is a `color` stone.
///
/// Like any single-point eye test this also accepts false eyes.
pub fn is_eyeish(board: &Board, p: Point, color: Color) -> bool {
    adjacent(board.size(), p).all(|n| board.stone(n) == color)
}

/// Pick a random move for `color` and play it, or `None` if there is none.
pub fn random_move(board: &Board, color: Color, rng: &mut fastrand::Rng) -> Option<Board> {
    let mut candidates = board.stones(Color::Empty);
    rng.shuffle(&mut candidates);

    candidates
        .into_iter()
        .filter(|&p| !is_eyeish(board, p, color))
        .find_map(|p| match board.play_move(color, p) {
            Ok(outcome) if !outcome.suicide => Some(outcome.board),
            _ => None,
        })
}

/// Play random moves from `board`, `first` to move, for at most `max_moves` stones.
pub fn random_playout(
    board: &Board,
    first: Color,
    rng: &mut fastrand::Rng,
    max_moves: usize,
) -> Playout {
    let mut board = board.clone();
    let mut color = first;
    let mut moves = 0;
    let mut stuck = 0;

    while stuck < 2 && moves < max_moves {
        match random_move(&board, color, rng) {
            Some(next) => {
                board = next;
                moves += 1;
                stuck = 0;
            }
            None => stuck += 1,
        }
        color = color.opponent();
    }

    let score = board.area_score();
    info!(
        moves,
        black = score.black,
        white = score.white,
        "playout finished"
    );
    Playout {
        board,
        moves,
        score,
    }
}
