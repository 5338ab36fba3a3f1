//! Pieces module - the static tetromino catalog
//!
//! Every piece kind owns an ordered list of rotation states. Each state is a
//! rectangular occupancy matrix; state `k + 1` is state `k` turned 90°
//! clockwise, and the list wraps around. Kinds whose shape repeats after a
//! half turn (I, S, Z) list two states, the O piece lists one.
//!
//! The catalog is immutable `'static` data shared by the whole process.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::types::{Color, PieceKind};

/// Offset of a single mino relative to the rotation matrix's top-left corner,
/// as `(dx, dy)`.
pub type MinoOffset = (i8, i8);

/// One rotation state: a rectangular occupancy matrix (non-zero = filled).
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    rows: &'static [&'static [u8]],
}

impl Shape {
    const fn new(rows: &'static [&'static [u8]]) -> Self {
        Self { rows }
    }

    /// Number of matrix columns
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Number of matrix rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix cell at `(row, col)` is filled. Out of range is empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .is_some_and(|&v| v != 0)
    }

    /// Raw matrix rows
    pub fn rows(&self) -> &'static [&'static [u8]] {
        self.rows
    }

    /// Filled cells as `(dx, dy)` offsets, scanned row by row.
    pub fn cells(&self) -> ArrayVec<MinoOffset, 4> {
        let mut out = ArrayVec::new();
        for (dy, row) in self.rows.iter().enumerate() {
            for (dx, &v) in row.iter().enumerate() {
                if v != 0 {
                    out.push((dx as i8, dy as i8));
                }
            }
        }
        out
    }
}

static I_STATES: [Shape; 2] = [
    Shape::new(&[&[1, 1, 1, 1]]),
    Shape::new(&[&[1], &[1], &[1], &[1]]),
];

static O_STATES: [Shape; 1] = [Shape::new(&[&[1, 1], &[1, 1]])];

static T_STATES: [Shape; 4] = [
    Shape::new(&[&[0, 1, 0], &[1, 1, 1]]),
    Shape::new(&[&[1, 0], &[1, 1], &[1, 0]]),
    Shape::new(&[&[1, 1, 1], &[0, 1, 0]]),
    Shape::new(&[&[0, 1], &[1, 1], &[0, 1]]),
];

static S_STATES: [Shape; 2] = [
    Shape::new(&[&[0, 1, 1], &[1, 1, 0]]),
    Shape::new(&[&[1, 0], &[1, 1], &[0, 1]]),
];

static Z_STATES: [Shape; 2] = [
    Shape::new(&[&[1, 1, 0], &[0, 1, 1]]),
    Shape::new(&[&[0, 1], &[1, 1], &[1, 0]]),
];

static J_STATES: [Shape; 4] = [
    Shape::new(&[&[1, 0, 0], &[1, 1, 1]]),
    Shape::new(&[&[1, 1], &[1, 0], &[1, 0]]),
    Shape::new(&[&[1, 1, 1], &[0, 0, 1]]),
    Shape::new(&[&[0, 1], &[0, 1], &[1, 1]]),
];

static L_STATES: [Shape; 4] = [
    Shape::new(&[&[0, 0, 1], &[1, 1, 1]]),
    Shape::new(&[&[1, 0], &[1, 0], &[1, 1]]),
    Shape::new(&[&[1, 1, 1], &[1, 0, 0]]),
    Shape::new(&[&[1, 1], &[0, 1], &[0, 1]]),
];

/// Ordered rotation states for a piece kind (1 to 4 entries)
pub fn rotation_states(kind: PieceKind) -> &'static [Shape] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::Z => &Z_STATES,
    }
}

/// Number of distinct rotation states for a kind
pub fn rotation_count(kind: PieceKind) -> usize {
    rotation_states(kind).len()
}

/// Shape for a kind at a rotation index (taken modulo the state count)
pub fn get_shape(kind: PieceKind, rotation: usize) -> &'static Shape {
    let states = rotation_states(kind);
    &states[rotation % states.len()]
}

/// Display color of a piece kind
pub fn color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::J => Color::Blue,
        PieceKind::L => Color::Orange,
        PieceKind::O => Color::Yellow,
        PieceKind::S => Color::Green,
        PieceKind::T => Color::Magenta,
        PieceKind::Z => Color::Red,
    }
}

/// Draw a kind uniformly at random from the seven kinds.
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rotate a matrix 90° clockwise into a list of owned rows.
    fn rotate_cw(rows: &[&[u8]]) -> Vec<Vec<u8>> {
        let h = rows.len();
        let w = rows[0].len();
        (0..w)
            .map(|r| (0..h).map(|c| rows[h - 1 - c][r]).collect())
            .collect()
    }

    fn owned(shape: &Shape) -> Vec<Vec<u8>> {
        shape.rows().iter().map(|r| r.to_vec()).collect()
    }

    #[test]
    fn test_every_state_has_four_minos() {
        for kind in PieceKind::ALL {
            for shape in rotation_states(kind) {
                assert_eq!(shape.cells().len(), 4, "{:?}", kind);
            }
        }
    }

    #[test]
    fn test_matrices_are_rectangular() {
        for kind in PieceKind::ALL {
            for shape in rotation_states(kind) {
                assert!(shape.rows().iter().all(|r| r.len() == shape.width()));
            }
        }
    }

    #[test]
    fn test_states_are_successive_clockwise_turns() {
        for kind in PieceKind::ALL {
            let states = rotation_states(kind);
            for (i, shape) in states.iter().enumerate() {
                let next = &states[(i + 1) % states.len()];
                assert_eq!(
                    rotate_cw(shape.rows()),
                    owned(next),
                    "{:?} state {} does not turn into state {}",
                    kind,
                    i,
                    (i + 1) % states.len()
                );
            }
        }
    }

    #[test]
    fn test_rotation_counts() {
        assert_eq!(rotation_count(PieceKind::O), 1);
        assert_eq!(rotation_count(PieceKind::I), 2);
        assert_eq!(rotation_count(PieceKind::S), 2);
        assert_eq!(rotation_count(PieceKind::Z), 2);
        assert_eq!(rotation_count(PieceKind::T), 4);
        assert_eq!(rotation_count(PieceKind::J), 4);
        assert_eq!(rotation_count(PieceKind::L), 4);
    }

    #[test]
    fn test_get_shape_wraps_rotation() {
        assert_eq!(get_shape(PieceKind::T, 4), get_shape(PieceKind::T, 0));
        assert_eq!(get_shape(PieceKind::I, 3), get_shape(PieceKind::I, 1));
        assert_eq!(get_shape(PieceKind::O, 7), get_shape(PieceKind::O, 0));
    }

    #[test]
    fn test_colors_are_distinct() {
        let mut seen = Vec::new();
        for kind in PieceKind::ALL {
            let c = color(kind);
            assert!(!seen.contains(&c));
            seen.push(c);
        }
    }

    #[test]
    fn test_shape_cells_order() {
        let t = get_shape(PieceKind::T, 0);
        assert_eq!(t.cells().as_slice(), &[(1, 0), (0, 1), (1, 1), (2, 1)]);
        assert!(t.is_filled(0, 1));
        assert!(!t.is_filled(0, 0));
        assert!(!t.is_filled(5, 5));
    }
}
