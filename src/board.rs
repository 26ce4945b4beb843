//! Immutable Go board values.
//!
//! A [`Board`] is never mutated after construction. Every move produces a new
//! value; the previous one stays valid, so callers can keep history for undo
//! or branching by holding on to old boards.
//!
//! The stone map is an [`im::OrdMap`], a persistent B-tree. Deriving a board
//! from its parent copies only the O(log n) path to each changed key, and the
//! rest of the tree is shared. A flat `Vec<Color>` copied per move would be
//! competitive for 9x9 but grows as size squared; the tree keeps `play`
//! proportional to the number of intersections that change.

use std::collections::BTreeMap;
use std::fmt;

use im::OrdMap;
use tracing::debug;

use crate::constants::{GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE};
use crate::error::BoardError;
use crate::group::{Group, find_group};
use crate::point::{Point, adjacent, all_points};
use crate::scoring::{Score, area_score};

/// Contents of an intersection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    #[default]
    Empty,
    Black,
    White,
}

impl Color {
    /// The other player's color. Empty maps to itself.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
            Color::Empty => Color::Empty,
        }
    }

    pub fn is_stone(self) -> bool {
        self != Color::Empty
    }

    /// Numeric form used by [`Board::to_array`].
    pub fn as_i8(self) -> i8 {
        match self {
            Color::Black => 1,
            Color::White => -1,
            Color::Empty => 0,
        }
    }
}

/// The read and move surface shared by board implementations.
pub trait GoBoard: Sized {
    fn size(&self) -> usize;

    /// Color at `p`, or `Empty` if nothing is there (including off-board points).
    fn stone(&self, p: Point) -> Color;

    /// Every point holding `color`, in row-major order.
    fn stones(&self, color: Color) -> Vec<Point>;

    /// The full grid, one `Vec` per row.
    fn intersections(&self) -> Vec<Vec<Color>>;

    /// The grid as nested numbers (Black = 1, White = -1, Empty = 0).
    fn to_array(&self) -> Vec<Vec<i8>>;

    /// Place a stone and resolve captures, returning the new board.
    fn play(&self, color: Color, p: Point) -> Result<Self, BoardError>;

    /// Area (stones plus single-color territory) owned by each player.
    fn area_score(&self) -> Score;
}

/// An immutable square Go board.
///
/// Empty intersections are never stored: a point is empty exactly when it
/// is absent from the map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    stones: OrdMap<Point, Color>,
}

/// Result of a successful move.
#[derive(Clone, Debug)]
pub struct MoveOutcome {
    /// Board after captures.
    pub board: Board,
    /// Points emptied by the move, in row-major order.
    pub captured: Vec<Point>,
    /// The mover's own group was removed.
    pub suicide: bool,
}

impl Board {
    /// An empty board. A size of zero gives a board with no intersections.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            stones: OrdMap::new(),
        }
    }

    /// An empty board from an untyped size, rejecting negatives.
    pub fn try_new(size: i64) -> Result<Self, BoardError> {
        let size = usize::try_from(size).map_err(|_| BoardError::InvalidSize(size))?;
        Ok(Self::new(size))
    }

    /// A board holding the given stones. `Empty` entries are skipped.
    pub fn from_stones<I>(size: usize, stones: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (Point, Color)>,
    {
        let mut map = OrdMap::new();
        for (p, color) in stones {
            check_bounds(p, size)?;
            if color.is_stone() {
                map.insert(p, color);
            }
        }
        Ok(Self { size, stones: map })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn stone(&self, p: Point) -> Color {
        self.stones.get(&p).copied().unwrap_or_default()
    }

    pub fn stones(&self, color: Color) -> Vec<Point> {
        match color {
            Color::Empty => all_points(self.size)
                .filter(|p| !self.stones.contains_key(p))
                .collect(),
            _ => self
                .stones
                .iter()
                .filter(|&(_, &c)| c == color)
                .map(|(&p, _)| p)
                .collect(),
        }
    }

    pub fn stone_count(&self, color: Color) -> usize {
        match color {
            Color::Empty => self.size * self.size - self.stones.len(),
            _ => self.stones.values().filter(|&&c| c == color).count(),
        }
    }

    pub fn intersections(&self) -> Vec<Vec<Color>> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| self.stone(Point::new(row, col)))
                    .collect()
            })
            .collect()
    }

    pub fn to_array(&self) -> Vec<Vec<i8>> {
        self.intersections()
            .into_iter()
            .map(|row| row.into_iter().map(Color::as_i8).collect())
            .collect()
    }

    /// Whether `play(color, p)` would succeed.
    pub fn is_legal(&self, color: Color, p: Point) -> bool {
        color.is_stone() && p.in_bounds(self.size) && !self.stones.contains_key(&p)
    }

    /// Place a stone of `color` at `p`, resolving captures.
    pub fn play(&self, color: Color, p: Point) -> Result<Board, BoardError> {
        self.play_move(color, p).map(|outcome| outcome.board)
    }

    /// Place a stone and report which points were emptied.
    ///
    /// Opponent groups adjacent to `p` left without liberties are removed.
    /// If none were, and the new stone's own group has no liberties, that
    /// group is removed instead (suicide is permitted, not rejected).
    pub fn play_move(&self, color: Color, p: Point) -> Result<MoveOutcome, BoardError> {
        if !color.is_stone() {
            return Err(BoardError::EmptyColor);
        }
        check_bounds(p, self.size)?;
        if self.stones.contains_key(&p) {
            return Err(BoardError::IntersectionOccupied(p));
        }

        let tentative = Board {
            size: self.size,
            stones: self.stones.update(p, color),
        };

        // Dead groups keyed by anchor, so a group reached from two
        // neighbors is removed once.
        let opp = color.opponent();
        let mut dead: BTreeMap<Point, Group> = BTreeMap::new();
        for n in adjacent(self.size, p) {
            if tentative.stone(n) != opp || dead.values().any(|g| g.stones.contains(&n)) {
                continue;
            }
            let group = find_group(&tentative, n);
            if group.liberties == 0 {
                if let Some(anchor) = group.anchor() {
                    dead.entry(anchor).or_insert(group);
                }
            }
        }

        let mut suicide = false;
        if dead.is_empty() {
            let own = find_group(&tentative, p);
            if own.liberties == 0 {
                suicide = true;
                dead.insert(p, own);
            }
        }

        if dead.is_empty() {
            return Ok(MoveOutcome {
                board: tentative,
                captured: Vec::new(),
                suicide,
            });
        }

        let mut stones = tentative.stones;
        let mut captured = Vec::new();
        for group in dead.values() {
            for pt in &group.stones {
                stones.remove(pt);
                captured.push(*pt);
            }
        }
        captured.sort_unstable();

        if suicide {
            debug!(?color, point = %p, removed = captured.len(), "suicide");
        } else {
            debug!(
                ?color,
                point = %p,
                groups = dead.len(),
                captured = captured.len(),
                "capture"
            );
        }

        Ok(MoveOutcome {
            board: Board {
                size: self.size,
                stones,
            },
            captured,
            suicide,
        })
    }

    /// Add stones without resolving captures, as a game-record setup would.
    pub fn place_stones<I>(&self, color: Color, points: I) -> Result<Board, BoardError>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut stones = self.stones.clone();
        for p in points {
            check_bounds(p, self.size)?;
            if color.is_stone() {
                stones.insert(p, color);
            } else {
                stones.remove(&p);
            }
        }
        Ok(Board {
            size: self.size,
            stones,
        })
    }

    /// Clear the given intersections.
    pub fn remove_stones<I>(&self, points: I) -> Result<Board, BoardError>
    where
        I: IntoIterator<Item = Point>,
    {
        self.place_stones(Color::Empty, points)
    }

    /// Intersections whose color differs from `other`, with their color in `other`.
    pub fn difference(&self, other: &Board) -> Result<Vec<(Point, Color)>, BoardError> {
        if self.size != other.size {
            return Err(BoardError::SizeMismatch {
                left: self.size,
                right: other.size,
            });
        }
        let mut diff: Vec<(Point, Color)> = self
            .stones
            .diff(&other.stones)
            .map(|item| match item {
                im::ordmap::DiffItem::Add(&p, &c) => (p, c),
                im::ordmap::DiffItem::Update { new: (&p, &c), .. } => (p, c),
                im::ordmap::DiffItem::Remove(&p, _) => (p, Color::Empty),
            })
            .collect();
        diff.sort_unstable_by_key(|&(p, _)| p);
        Ok(diff)
    }

    pub fn area_score(&self) -> Score {
        area_score(self)
    }
}

impl GoBoard for Board {
    fn size(&self) -> usize {
        Board::size(self)
    }

    fn stone(&self, p: Point) -> Color {
        Board::stone(self, p)
    }

    fn stones(&self, color: Color) -> Vec<Point> {
        Board::stones(self, color)
    }

    fn intersections(&self) -> Vec<Vec<Color>> {
        Board::intersections(self)
    }

    fn to_array(&self) -> Vec<Vec<i8>> {
        Board::to_array(self)
    }

    fn play(&self, color: Color, p: Point) -> Result<Self, BoardError> {
        Board::play(self, color, p)
    }

    fn area_score(&self) -> Score {
        Board::area_score(self)
    }
}

fn check_bounds(p: Point, size: usize) -> Result<(), BoardError> {
    if p.in_bounds(size) {
        Ok(())
    } else {
        Err(BoardError::OutOfBounds { point: p, size })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = match self.stone(Point::new(row, col)) {
                    Color::Black => GLYPH_BLACK,
                    Color::White => GLYPH_WHITE,
                    Color::Empty => GLYPH_EMPTY,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(list: &[(usize, usize)]) -> Vec<Point> {
        list.iter().map(|&p| Point::from(p)).collect()
    }

    fn setup(size: usize, black: &[(usize, usize)], white: &[(usize, usize)]) -> Board {
        Board::new(size)
            .place_stones(Color::Black, pts(black))
            .and_then(|b| b.place_stones(Color::White, pts(white)))
            .unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let b = Board::new(9);
        assert_eq!(b.size(), 9);
        assert!(b.stones(Color::Black).is_empty());
        assert!(b.stones(Color::White).is_empty());
        assert_eq!(b.stones(Color::Empty).len(), 81);
    }

    #[test]
    fn test_try_new_rejects_negative() {
        assert_eq!(Board::try_new(-1), Err(BoardError::InvalidSize(-1)));
        assert_eq!(Board::try_new(0).unwrap().size(), 0);
        assert_eq!(Board::try_new(19).unwrap().size(), 19);
    }

    #[test]
    fn test_from_stones_drops_empty_and_checks_bounds() {
        let b = Board::from_stones(
            3,
            [
                (Point::new(0, 0), Color::Black),
                (Point::new(1, 1), Color::Empty),
            ],
        )
        .unwrap();
        assert_eq!(b.stone_count(Color::Black), 1);
        assert_eq!(b, Board::from_stones(3, [(Point::new(0, 0), Color::Black)]).unwrap());

        let err = Board::from_stones(3, [(Point::new(3, 0), Color::White)]).unwrap_err();
        assert!(matches!(err, BoardError::OutOfBounds { size: 3, .. }));
    }

    #[test]
    fn test_play_places_stone_and_keeps_old_board() {
        let before = Board::new(9);
        let after = before.play(Color::Black, Point::new(3, 3)).unwrap();
        assert_eq!(after.stone(Point::new(3, 3)), Color::Black);
        assert_eq!(before.stone(Point::new(3, 3)), Color::Empty);
    }

    #[test]
    fn test_play_errors() {
        let b = setup(5, &[(2, 2)], &[]);
        assert_eq!(
            b.play(Color::White, Point::new(2, 2)),
            Err(BoardError::IntersectionOccupied(Point::new(2, 2)))
        );
        assert!(matches!(
            b.play(Color::White, Point::new(5, 0)),
            Err(BoardError::OutOfBounds { .. })
        ));
        assert_eq!(
            b.play(Color::Empty, Point::new(0, 0)),
            Err(BoardError::EmptyColor)
        );
    }

    #[test]
    fn test_capture_single_stone() {
        let b = setup(5, &[(1, 2), (2, 1), (2, 3)], &[(2, 2)]);
        let out = b.play_move(Color::Black, Point::new(3, 2)).unwrap();
        assert_eq!(out.captured, pts(&[(2, 2)]));
        assert!(!out.suicide);
        assert_eq!(out.board.stone(Point::new(2, 2)), Color::Empty);
        assert_eq!(out.board.stone_count(Color::Black), 4);
    }

    #[test]
    fn test_capture_two_groups_at_once() {
        // Two separate white stones whose last liberty is the corner.
        let b = setup(5, &[(0, 2), (1, 1), (2, 0)], &[(0, 1), (1, 0)]);
        let out = b.play_move(Color::Black, Point::new(0, 0)).unwrap();
        assert_eq!(out.captured, pts(&[(0, 1), (1, 0)]));
        assert_eq!(out.board.stone(Point::new(0, 0)), Color::Black);
        assert_eq!(out.board.stone_count(Color::White), 0);
    }

    #[test]
    fn test_capture_group_touched_twice_is_removed_once() {
        // One white group of three stones touches the move point from two sides.
        let b = setup(
            4,
            &[(0, 2), (1, 2), (2, 0), (2, 1)],
            &[(0, 0), (0, 1), (1, 0)],
        );
        let out = b.play_move(Color::Black, Point::new(1, 1)).unwrap();
        assert_eq!(out.captured, pts(&[(0, 0), (0, 1), (1, 0)]));
        assert_eq!(out.board.stone_count(Color::White), 0);
    }

    #[test]
    fn test_suicide_removes_own_stone() {
        let b = setup(3, &[(0, 1), (1, 0), (1, 2), (2, 1)], &[]);
        let out = b.play_move(Color::White, Point::new(1, 1)).unwrap();
        assert!(out.suicide);
        assert_eq!(out.captured, pts(&[(1, 1)]));
        assert_eq!(out.board, b);
    }

    #[test]
    fn test_capture_takes_priority_over_suicide() {
        // White's corner stone has no liberties of its own but takes (0,1).
        let b = setup(3, &[(0, 1), (1, 0)], &[(0, 2), (1, 1)]);
        let out = b.play_move(Color::White, Point::new(0, 0)).unwrap();
        assert!(!out.suicide);
        assert_eq!(out.captured, pts(&[(0, 1)]));
        assert_eq!(out.board.stone(Point::new(0, 0)), Color::White);
        assert_eq!(out.board.stone(Point::new(1, 0)), Color::Black);
    }

    #[test]
    fn test_is_legal() {
        let b = setup(3, &[(1, 1)], &[]);
        assert!(b.is_legal(Color::White, Point::new(0, 0)));
        assert!(!b.is_legal(Color::White, Point::new(1, 1)));
        assert!(!b.is_legal(Color::White, Point::new(3, 3)));
        assert!(!b.is_legal(Color::Empty, Point::new(0, 0)));
    }

    #[test]
    fn test_remove_stones() {
        let b = setup(3, &[(0, 0), (1, 1)], &[(2, 2)]);
        let cleared = b.remove_stones(pts(&[(1, 1), (2, 2)])).unwrap();
        assert_eq!(cleared.stones(Color::Black), pts(&[(0, 0)]));
        assert!(cleared.stones(Color::White).is_empty());
        assert!(b.remove_stones(pts(&[(3, 0)])).is_err());
    }

    #[test]
    fn test_difference() {
        let a = setup(3, &[(0, 0), (1, 1)], &[]);
        let b = setup(3, &[(1, 1)], &[(0, 0), (2, 2)]);
        assert_eq!(
            a.difference(&b).unwrap(),
            vec![
                (Point::new(0, 0), Color::White),
                (Point::new(2, 2), Color::White)
            ]
        );
        assert!(a.difference(&a).unwrap().is_empty());
        assert_eq!(
            a.difference(&Board::new(4)),
            Err(BoardError::SizeMismatch { left: 3, right: 4 })
        );
    }

    #[test]
    fn test_to_array_and_intersections() {
        let b = setup(2, &[(0, 0)], &[(1, 1)]);
        assert_eq!(b.to_array(), vec![vec![1, 0], vec![0, -1]]);
        assert_eq!(
            b.intersections(),
            vec![
                vec![Color::Black, Color::Empty],
                vec![Color::Empty, Color::White]
            ]
        );
    }

    #[test]
    fn test_display() {
        let b = setup(3, &[(0, 0)], &[(1, 2)]);
        assert_eq!(b.to_string(), "X . . \n. . O \n. . . \n");
    }

    #[test]
    fn test_generic_board_surface() {
        fn fill<B: GoBoard>(b: B) -> B {
            b.play(Color::Black, Point::new(0, 0)).unwrap()
        }
        let b = fill(Board::new(2));
        assert_eq!(GoBoard::stones(&b, Color::Black), vec![Point::new(0, 0)]);
        assert_eq!(GoBoard::area_score(&b).black, 4);
    }
}
