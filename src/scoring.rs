//! Simple area scoring.
//!
//! Each player's area is their stones on the board plus every empty region
//! bordered by their stones alone. Regions touching both colors (or none)
//! are neutral. No komi, captures, or dead-stone removal are applied.

use std::collections::HashSet;
use std::fmt;

use crate::board::{Board, Color};
use crate::group::find_group;
use crate::point::all_points;

/// Area owned by each player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    pub fn get(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
            Color::Empty => 0,
        }
    }

    fn add(&mut self, color: Color, n: usize) {
        match color {
            Color::Black => self.black += n,
            Color::White => self.white += n,
            Color::Empty => {}
        }
    }

    pub fn total(&self) -> usize {
        self.black + self.white
    }
}

/// GTP `final_score` form: `B+n`, `W+n`, or `0` for a tie.
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::cmp::Ordering;
        match self.black.cmp(&self.white) {
            Ordering::Greater => write!(f, "B+{}", self.black - self.white),
            Ordering::Less => write!(f, "W+{}", self.white - self.black),
            Ordering::Equal => write!(f, "0"),
        }
    }
}

/// Partition the board into groups and regions and total each player's area.
///
/// Every intersection is visited by exactly one group search.
pub fn area_score(board: &Board) -> Score {
    let mut score = Score::default();
    let mut visited = HashSet::new();

    for p in all_points(board.size()) {
        if visited.contains(&p) {
            continue;
        }
        let group = find_group(board, p);
        let owner = match group.color {
            Color::Empty => {
                let borders = group.bordering_colors();
                match borders.len() {
                    1 => borders.into_iter().next().unwrap_or_default(),
                    _ => Color::Empty,
                }
            }
            stone => stone,
        };
        score.add(owner, group.len());
        visited.extend(group.stones);
    }
    score
}
