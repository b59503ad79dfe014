use arrayvec::ArrayVec;

use super::piece::PieceKind;

/// Largest dimension any catalog shape (or rotation of one) can have.
pub const MAX_SHAPE_DIM: usize = 4;

type ShapeRow = ArrayVec<bool, MAX_SHAPE_DIM>;

/// Boolean occupancy matrix describing one orientation of a piece.
///
/// Shapes are row-major with row 0 at the top. Dimensions vary per piece
/// (the I piece is 1×4, the O piece 2×2) and rotation may swap them, so the
/// matrix is not padded to a square bounding box.
///
/// The catalog templates returned by [`Shape::catalog`] are never mutated;
/// rotation produces a new `Shape`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM>,
}

impl Shape {
    /// Builds a shape from row slices.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty, ragged, or larger than
    /// [`MAX_SHAPE_DIM`] in either dimension.
    #[must_use]
    pub fn from_rows(rows: &[&[bool]]) -> Self {
        assert!(!rows.is_empty(), "shape must have at least one row");
        let width = rows[0].len();
        assert!(width > 0, "shape must have at least one column");
        let rows = rows
            .iter()
            .map(|row| {
                assert_eq!(row.len(), width, "shape rows must share one width");
                row.iter().copied().collect()
            })
            .collect();
        Self { rows }
    }

    /// Catalog template for `kind` in its unrotated (spawn) orientation.
    #[must_use]
    pub fn catalog(kind: PieceKind) -> Self {
        const C: bool = true;
        const E: bool = false;
        match kind {
            PieceKind::I => Self::from_rows(&[&[C, C, C, C]]),
            PieceKind::O => Self::from_rows(&[&[C, C], &[C, C]]),
            PieceKind::T => Self::from_rows(&[&[C, C, C], &[E, C, E]]),
            PieceKind::S => Self::from_rows(&[&[C, C, E], &[E, C, C]]),
            PieceKind::Z => Self::from_rows(&[&[E, C, C], &[C, C, E]]),
            PieceKind::J => Self::from_rows(&[&[C, E, E], &[C, C, C]]),
            PieceKind::L => Self::from_rows(&[&[E, E, C], &[C, C, C]]),
        }
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    #[must_use]
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.rows[y][x]
    }

    /// Iterates the `(dx, dy)` offsets of all occupied cells.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(dx, &cell)| cell.then_some((dx, dy)))
        })
    }

    /// Returns this shape rotated 90° clockwise.
    ///
    /// For an R×C input the result is C×R with
    /// `out[j][R - 1 - i] = in[i][j]`. The input is untouched.
    #[must_use]
    pub fn rotated_cw(&self) -> Self {
        let height = self.height();
        let width = self.width();
        let mut rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM> = (0..width)
            .map(|_| (0..height).map(|_| false).collect())
            .collect();
        for (i, row) in self.rows.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                rows[j][height - 1 - i] = cell;
            }
        }
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    #[test]
    fn catalog_dimensions() {
        assert_eq!(Shape::catalog(PieceKind::I).width(), 4);
        assert_eq!(Shape::catalog(PieceKind::I).height(), 1);
        assert_eq!(Shape::catalog(PieceKind::O).width(), 2);
        assert_eq!(Shape::catalog(PieceKind::O).height(), 2);
        for kind in [
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::J,
            PieceKind::L,
        ] {
            let shape = Shape::catalog(kind);
            assert_eq!((shape.width(), shape.height()), (3, 2), "{kind:?}");
        }
    }

    #[test]
    fn every_catalog_shape_has_four_cells() {
        for kind in ALL_KINDS {
            assert_eq!(
                Shape::catalog(kind).occupied_cells().count(),
                4,
                "{kind:?}"
            );
        }
    }

    #[test]
    fn rotation_maps_cells_clockwise() {
        // T: [[1,1,1],[0,1,0]] rotated once is [[0,1],[1,1],[0,1]].
        let rotated = Shape::catalog(PieceKind::T).rotated_cw();
        assert_eq!((rotated.width(), rotated.height()), (2, 3));
        let cells: Vec<_> = rotated.occupied_cells().collect();
        assert_eq!(cells, vec![(1, 0), (0, 1), (1, 1), (1, 2)]);
    }

    #[test]
    fn i_piece_rotates_between_1x4_and_4x1() {
        let horizontal = Shape::catalog(PieceKind::I);
        let vertical = horizontal.rotated_cw();
        assert_eq!((vertical.width(), vertical.height()), (1, 4));
        assert!((0..4).all(|y| vertical.is_occupied(0, y)));
        let back = vertical.rotated_cw();
        assert_eq!((back.width(), back.height()), (4, 1));
    }

    #[test]
    fn four_rotations_are_identity() {
        for kind in ALL_KINDS {
            let original = Shape::catalog(kind);
            let mut shape = original.clone();
            for _ in 0..4 {
                shape = shape.rotated_cw();
            }
            assert_eq!(shape, original, "{kind:?}");
        }
    }

    #[test]
    fn rotation_does_not_mutate_input() {
        let original = Shape::catalog(PieceKind::S);
        let copy = original.clone();
        let _ = original.rotated_cw();
        assert_eq!(original, copy);
    }
}
