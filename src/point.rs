//! Board coordinates, adjacency, and GTP vertex text.
//!
//! Points are `(row, col)` pairs, zero-indexed with row 0 at the top.
//! GTP vertices count rows from the bottom (`A1` is the lower-left corner)
//! and skip the letter `I`.

use std::fmt;

use crate::constants::{DELTA, MAX_VERTEX_SIZE};
use crate::error::BoardError;

/// An intersection on the board.
///
/// Ordering is row-major, so the smallest point of a set is the one nearest
/// the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the point lies on a `size` x `size` board.
    #[inline]
    pub fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Step by a (row, col) delta, or `None` if that leaves the board.
    fn offset(self, (dr, dc): (isize, isize), size: usize) -> Option<Point> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let p = Point::new(row, col);
        p.in_bounds(size).then_some(p)
    }
}

impl From<(usize, usize)> for Point {
    fn from((row, col): (usize, usize)) -> Self {
        Point::new(row, col)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The orthogonal neighbors of `p` that lie on the board, in
/// north, east, south, west order.
pub fn adjacent(size: usize, p: Point) -> impl Iterator<Item = Point> {
    DELTA.into_iter().filter_map(move |d| p.offset(d, size))
}

/// All points of a `size` x `size` board in row-major order.
pub fn all_points(size: usize) -> impl Iterator<Item = Point> {
    (0..size).flat_map(move |row| (0..size).map(move |col| Point::new(row, col)))
}

/// Parse a GTP vertex (e.g. "D4") into a point on a `size` board.
///
/// Column letters run A-Z skipping I; rows count up from the bottom edge.
pub fn parse_vertex(s: &str, size: usize) -> Result<Point, BoardError> {
    let invalid = || BoardError::InvalidVertex(s.to_string());

    let mut chars = s.trim().chars();
    let letter = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() || letter == 'I' {
        return Err(invalid());
    }
    let mut col = (letter as u8 - b'A') as usize;
    // Skip 'I' column (Go convention to avoid confusion with 'J')
    if letter > 'I' {
        col -= 1;
    }

    let number: usize = chars.as_str().parse().map_err(|_| invalid())?;
    if number == 0 || number > size {
        return Err(BoardError::OutOfBounds {
            point: Point::new(size.saturating_sub(number), col),
            size,
        });
    }

    let p = Point::new(size - number, col);
    if !p.in_bounds(size) {
        return Err(BoardError::OutOfBounds { point: p, size });
    }
    Ok(p)
}

/// Reject board sizes whose columns run past the last vertex letter.
pub fn check_vertex_size(size: usize) -> Result<(), BoardError> {
    if size > MAX_VERTEX_SIZE {
        return Err(BoardError::InvalidSize(size as i64));
    }
    Ok(())
}

/// Format a point as a GTP vertex on a `size` board.
pub fn format_vertex(p: Point, size: usize) -> Result<String, BoardError> {
    check_vertex_size(size)?;
    if !p.in_bounds(size) {
        return Err(BoardError::OutOfBounds { point: p, size });
    }
    let mut c = (b'A' + p.col as u8) as char;
    if c >= 'I' {
        c = (c as u8 + 1) as char;
    }
    Ok(format!("{c}{}", size - p.row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_center_order() {
        let n: Vec<Point> = adjacent(5, Point::new(2, 2)).collect();
        assert_eq!(
            n,
            vec![
                Point::new(1, 2),
                Point::new(2, 3),
                Point::new(3, 2),
                Point::new(2, 1)
            ]
        );
    }

    #[test]
    fn test_adjacent_corners_and_edges() {
        assert_eq!(adjacent(9, Point::new(0, 0)).count(), 2);
        assert_eq!(adjacent(9, Point::new(8, 8)).count(), 2);
        assert_eq!(adjacent(9, Point::new(0, 4)).count(), 3);
        assert_eq!(adjacent(1, Point::new(0, 0)).count(), 0);
    }

    #[test]
    fn test_adjacency_symmetry() {
        let size = 6;
        for p in all_points(size) {
            for q in adjacent(size, p) {
                assert!(
                    adjacent(size, q).any(|r| r == p),
                    "{q} is adjacent to {p} but not the reverse"
                );
            }
        }
    }

    #[test]
    fn test_all_points_row_major() {
        let pts: Vec<Point> = all_points(2).collect();
        assert_eq!(
            pts,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(1, 1)
            ]
        );
        assert_eq!(all_points(0).count(), 0);
    }

    #[test]
    fn test_parse_vertex_corners() {
        assert_eq!(parse_vertex("A1", 9).unwrap(), Point::new(8, 0));
        assert_eq!(parse_vertex("J9", 9).unwrap(), Point::new(0, 8));
        assert_eq!(parse_vertex("a9", 9).unwrap(), Point::new(0, 0));
    }

    #[test]
    fn test_parse_vertex_skips_i() {
        let h = parse_vertex("H5", 9).unwrap();
        let j = parse_vertex("J5", 9).unwrap();
        assert_eq!(j.col - h.col, 1, "J should be one column after H");
        assert!(parse_vertex("I5", 9).is_err());
    }

    #[test]
    fn test_parse_vertex_rejects_garbage() {
        assert!(matches!(
            parse_vertex("", 9),
            Err(BoardError::InvalidVertex(_))
        ));
        assert!(matches!(
            parse_vertex("D", 9),
            Err(BoardError::InvalidVertex(_))
        ));
        assert!(matches!(
            parse_vertex("4D", 9),
            Err(BoardError::InvalidVertex(_))
        ));
        assert!(matches!(
            parse_vertex("D10", 9),
            Err(BoardError::OutOfBounds { .. })
        ));
        assert!(matches!(
            parse_vertex("K1", 9),
            Err(BoardError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_vertex_roundtrip() {
        for size in [1, 9, 13, 19, MAX_VERTEX_SIZE] {
            for p in all_points(size) {
                let s = format_vertex(p, size).unwrap();
                assert_eq!(parse_vertex(&s, size).unwrap(), p, "roundtrip of {s}");
            }
        }
    }

    #[test]
    fn test_format_vertex_last_column() {
        assert_eq!(format_vertex(Point::new(0, 24), 25).unwrap(), "Z25");
        assert_eq!(format_vertex(Point::new(18, 0), 19).unwrap(), "A1");
    }

    #[test]
    fn test_format_vertex_rejects_oversized_board() {
        assert_eq!(
            format_vertex(Point::new(0, 25), 26),
            Err(BoardError::InvalidSize(26))
        );
        assert_eq!(check_vertex_size(30), Err(BoardError::InvalidSize(30)));
        assert!(check_vertex_size(MAX_VERTEX_SIZE).is_ok());
    }

    #[test]
    fn test_format_vertex_rejects_off_board_point() {
        assert_eq!(
            format_vertex(Point::new(9, 0), 9),
            Err(BoardError::OutOfBounds {
                point: Point::new(9, 0),
                size: 9
            })
        );
        assert!(matches!(
            format_vertex(Point::new(0, 9), 9),
            Err(BoardError::OutOfBounds { .. })
        ));
        assert!(format_vertex(Point::new(0, 0), 0).is_err());
    }
}
