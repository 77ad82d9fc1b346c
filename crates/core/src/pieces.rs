//! Pieces module - tetromino catalog and matrix rotation
//!
//! Each kind stores a single base orientation as a square bit matrix. Other
//! orientations are computed on demand by rotating the matrix 90°, so there
//! is no per-kind rotation table and no wall kicks: a rotation either fits
//! in place or is rejected.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::rng::PieceSource;
use crate::types::{Color, PieceKind, SPAWN_X, SPAWN_Y};

/// Largest matrix side in the catalog (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square bit matrix of side `size` (at most [`MAX_SHAPE_SIZE`]).
///
/// Cells outside `size x size` are always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Shape {
    size: u8,
    rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from row-major 0/1 rows. Every row must be as long as
    /// the number of rows.
    ///
    /// Returns `None` for non-square or oversized input.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let size = rows.len();
        if size == 0 || size > MAX_SHAPE_SIZE || rows.iter().any(|r| r.len() != size) {
            return None;
        }
        let mut out = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                out[y][x] = v != 0;
            }
        }
        Some(Self {
            size: size as u8,
            rows: out,
        })
    }

    /// Matrix side length N.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Filled cells as `(dx, dy)` offsets, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |y| {
            (0..n)
                .filter(move |&x| self.rows[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Rotate 90° by index transform.
    ///
    /// Clockwise: `rotated[y][x] = shape[N-x-1][y]`.
    /// Counter-clockwise: `rotated[y][x] = shape[x][N-y-1]`.
    pub fn rotated(&self, clockwise: bool) -> Self {
        let n = self.size();
        let mut out = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in out.iter_mut().enumerate().take(n) {
            for (x, cell) in row.iter_mut().enumerate().take(n) {
                *cell = if clockwise {
                    self.rows[n - x - 1][y]
                } else {
                    self.rows[x][n - y - 1]
                };
            }
        }
        Self {
            size: self.size,
            rows: out,
        }
    }
}

/// Base orientation for a piece kind.
pub fn base_shape(kind: PieceKind) -> Shape {
    let rows: &[&[u8]] = match kind {
        PieceKind::I => &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]],
        PieceKind::J => &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]],
        PieceKind::L => &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]],
        PieceKind::O => &[&[1, 1], &[1, 1]],
        PieceKind::S => &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]],
        PieceKind::T => &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]],
        PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]],
    };
    match Shape::from_rows(rows) {
        Some(shape) => shape,
        None => unreachable!("catalog shapes are square and at most 4x4"),
    }
}

/// Active or previewed piece: shape, color, position and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of `kind` at the spawn position in base orientation.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: base_shape(kind),
            color: kind.color(),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Absolute board coordinates of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Move back to the spawn coordinates (orientation is kept).
    pub fn reset_position(&mut self) {
        self.x = SPAWN_X;
        self.y = SPAWN_Y;
    }
}

/// Draw a fresh piece at the spawn position. Each call is independent.
pub fn random_piece(source: &mut PieceSource) -> Piece {
    Piece::new(source.next_kind())
}

/// Offset (in cells) used to centre a held piece in its preview panel.
///
/// Presentational only.
pub fn hold_offset(kind: PieceKind) -> (f32, f32) {
    match kind {
        PieceKind::I => (0.5, 1.5),
        _ => (1.0, 1.0),
    }
}

/// Offset used to place the next piece in its preview panel.
pub const NEXT_OFFSET: (f32, f32) = (1.0, 1.0);

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(shape: &Shape) -> Vec<(i8, i8)> {
        shape.cells().collect()
    }

    #[test]
    fn every_base_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(base_shape(kind).cells().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn base_shape_sizes() {
        assert_eq!(base_shape(PieceKind::I).size(), 4);
        assert_eq!(base_shape(PieceKind::O).size(), 2);
        for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
            assert_eq!(base_shape(kind).size(), 3);
        }
    }

    #[test]
    fn t_rotates_clockwise_to_point_right() {
        let t = base_shape(PieceKind::T);
        // 010      010
        // 111  ->  011
        // 000      010
        let cw = t.rotated(true);
        assert_eq!(collect(&cw), vec![(1, 0), (1, 1), (2, 1), (1, 2)]);
    }

    #[test]
    fn t_rotates_counter_clockwise_to_point_left() {
        let t = base_shape(PieceKind::T);
        let ccw = t.rotated(false);
        assert_eq!(collect(&ccw), vec![(1, 0), (0, 1), (1, 1), (1, 2)]);
    }

    #[test]
    fn i_rotation_stays_inside_four_by_four() {
        let i = base_shape(PieceKind::I);
        let cw = i.rotated(true);
        assert_eq!(collect(&cw), vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn from_rows_rejects_non_square() {
        assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
        assert!(Shape::from_rows(&[]).is_none());
        assert!(Shape::from_rows(&[&[1; 5], &[1; 5], &[1; 5], &[1; 5], &[1; 5]]).is_none());
    }

    #[test]
    fn new_piece_spawns_at_three_zero() {
        let p = Piece::new(PieceKind::L);
        assert_eq!((p.x, p.y), (3, 0));
        assert_eq!(p.color, PieceKind::L.color());
        assert_eq!(p.cells().collect::<Vec<_>>(), vec![(5, 0), (3, 1), (4, 1), (5, 1)]);
    }

    #[test]
    fn hold_offsets() {
        assert_eq!(hold_offset(PieceKind::I), (0.5, 1.5));
        for kind in PieceKind::ALL.into_iter().filter(|k| *k != PieceKind::I) {
            assert_eq!(hold_offset(kind), (1.0, 1.0));
        }
    }
}
