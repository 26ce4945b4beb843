//! Connected-group search.
//!
//! A group is the maximal set of orthogonally connected points sharing the
//! color of a seed point. The seed may be empty, in which case the group is
//! a connected region of empty space and its surrounding records the stones
//! bordering it. Scoring relies on that second mode.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use tracing::trace;

use crate::board::{Board, Color};
use crate::point::{Point, adjacent};

/// Result of a group search. Computed on demand, never cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    /// Color shared by every member.
    pub color: Color,
    /// Member points.
    pub stones: BTreeSet<Point>,
    /// Every non-member neighbor of a member, with its color.
    pub surrounding: BTreeMap<Point, Color>,
    /// Number of distinct empty points in `surrounding`.
    pub liberties: usize,
}

impl Group {
    /// Canonical representative: the smallest member in row-major order.
    ///
    /// A search seeded from any member yields the same stone set, so two
    /// groups are the same group exactly when their anchors match.
    pub fn anchor(&self) -> Option<Point> {
        self.stones.first().copied()
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// Distinct colors bordering the group.
    pub fn bordering_colors(&self) -> BTreeSet<Color> {
        self.surrounding.values().copied().collect()
    }
}

/// Breadth-first search for the group containing `start`.
///
/// Off-board seeds produce an empty group.
pub fn find_group(board: &Board, start: Point) -> Group {
    let size = board.size();
    let color = board.stone(start);
    let mut stones = BTreeSet::new();
    let mut surrounding = BTreeMap::new();

    if !start.in_bounds(size) {
        return Group {
            color,
            stones,
            surrounding,
            liberties: 0,
        };
    }

    let mut queue = VecDeque::from([start]);
    while let Some(pt) = queue.pop_front() {
        if !stones.insert(pt) {
            continue;
        }
        for n in adjacent(size, pt) {
            let c = board.stone(n);
            if c == color {
                if !stones.contains(&n) {
                    queue.push_back(n);
                }
            } else {
                surrounding.insert(n, c);
            }
        }
    }

    let liberties = surrounding.values().filter(|&&c| c == Color::Empty).count();
    trace!(
        ?start,
        ?color,
        stones = stones.len(),
        liberties,
        "group search"
    );
    Group {
        color,
        stones,
        surrounding,
        liberties,
    }
}
