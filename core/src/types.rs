use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for cluster counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Remaining uses of a scan or an extraction.
pub type Uses = u16;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Chessboard distance between two cells, the radius of the smallest square window centered on
/// `a` that still contains `b`.
pub const fn chebyshev(a: Coord2, b: Coord2) -> Coord {
    let dx = a.0.abs_diff(b.0);
    let dy = a.1.abs_diff(b.1);
    if dx > dy { dx } else { dy }
}

/// Dimensions of a board and the bounds arithmetic on top of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    size: Coord2,
}

impl Topology {
    pub const fn new(size: Coord2) -> Self {
        Self { size }
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.size.0 as i32 && y < self.size.1 as i32
    }

    pub const fn contains(&self, (x, y): Coord2) -> bool {
        x < self.size.0 && y < self.size.1
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Converts signed input coordinates, `None` when they fall outside the board.
    pub fn checked_coords(&self, x: i32, y: i32) -> Option<Coord2> {
        if self.in_bounds(x, y) {
            Some((x.try_into().ok()?, y.try_into().ok()?))
        } else {
            None
        }
    }

    /// Every in-bounds cell of the square window `[cx-r, cx+r] x [cy-r, cy+r]`.
    pub fn iter_window(&self, center: Coord2, radius: Coord) -> WindowIter {
        WindowIter::new(center, radius, self.size)
    }

    pub fn for_each_in_radius(&self, center: Coord2, radius: Coord, f: impl FnMut(Coord2)) {
        self.iter_window(center, radius).for_each(f)
    }

    /// Every cell of the board, row by row.
    pub fn iter_cells(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (size_x, size_y) = self.size;
        (0..size_y).flat_map(move |y| (0..size_x).map(move |x| (x, y)))
    }
}

pub trait TopologyExt {
    fn topology(&self) -> Topology;
}

impl<T> TopologyExt for Array2<T> {
    fn topology(&self) -> Topology {
        let dim = self.dim();
        let clamp = |len: usize| Coord::try_from(len).unwrap_or(Coord::MAX);
        Topology::new((clamp(dim.0), clamp(dim.1)))
    }
}

/// Clipped square window iterator, walks rows from top to bottom.
#[derive(Debug)]
pub struct WindowIter {
    x_start: Coord,
    x_end: Coord,
    y_end: Coord,
    next: Option<Coord2>,
}

impl WindowIter {
    fn new((cx, cy): Coord2, radius: Coord, (size_x, size_y): Coord2) -> Self {
        let clip = |center: Coord, size: Coord| -> Option<(Coord, Coord)> {
            let last = size.checked_sub(1)?;
            let start = center.saturating_sub(radius);
            let end = center.saturating_add(radius).min(last);
            (start <= end).then_some((start, end))
        };

        match (clip(cx, size_x), clip(cy, size_y)) {
            (Some((x_start, x_end)), Some((y_start, y_end))) => Self {
                x_start,
                x_end,
                y_end,
                next: Some((x_start, y_start)),
            },
            _ => Self {
                x_start: 0,
                x_end: 0,
                y_end: 0,
                next: None,
            },
        }
    }
}

impl Iterator for WindowIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let (x, y) = current;
        self.next = if x < self.x_end {
            Some((x + 1, y))
        } else if y < self.y_end {
            Some((self.x_start, y + 1))
        } else {
            None
        };
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn window_is_clipped_at_corners() {
        let topology = Topology::new((4, 4));

        let cells: Vec<_> = topology.iter_window((0, 0), 1).collect();

        assert_eq!(cells, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn window_covers_full_square_inside_board() {
        let topology = Topology::new((16, 16));

        assert_eq!(topology.iter_window((8, 8), 2).count(), 25);
        assert_eq!(topology.iter_window((8, 8), 1).count(), 9);
        assert_eq!(topology.iter_window((8, 8), 0).count(), 1);
    }

    #[test]
    fn window_respects_each_axis_separately() {
        let topology = Topology::new((6, 2));

        let cells: Vec<_> = topology.iter_window((4, 1), 1).collect();

        assert_eq!(cells, vec![(3, 0), (4, 0), (5, 0), (3, 1), (4, 1), (5, 1)]);
    }

    #[test]
    fn window_near_max_coordinate_does_not_overflow() {
        let topology = Topology::new((Coord::MAX, 1));

        assert_eq!(topology.iter_window((Coord::MAX - 1, 0), 2).count(), 3);
    }

    #[test]
    fn window_on_empty_board_is_empty() {
        let topology = Topology::new((0, 3));

        assert_eq!(topology.iter_window((0, 0), 2).count(), 0);
    }

    #[test]
    fn for_each_in_radius_visits_window() {
        let topology = Topology::new((3, 3));
        let mut visited = 0;

        topology.for_each_in_radius((2, 2), 2, |_| visited += 1);

        assert_eq!(visited, 9);
    }

    #[test]
    fn in_bounds_rejects_negative_and_overflowing() {
        let topology = Topology::new((4, 3));

        assert!(topology.in_bounds(3, 2));
        assert!(!topology.in_bounds(-1, 0));
        assert!(!topology.in_bounds(4, 0));
        assert!(!topology.in_bounds(0, 3));
        assert_eq!(topology.checked_coords(2, 1), Some((2, 1)));
        assert_eq!(topology.checked_coords(2, -1), None);
    }

    #[test]
    fn chebyshev_is_max_axis_distance() {
        assert_eq!(chebyshev((1, 1), (3, 2)), 2);
        assert_eq!(chebyshev((5, 0), (5, 0)), 0);
    }
}
