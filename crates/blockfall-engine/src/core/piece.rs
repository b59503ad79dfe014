use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use super::{board::Board, shape::Shape};

/// Enum representing the type of piece.
///
/// The kind doubles as the opaque color token carried by settled board
/// cells; the renderer decides what color each kind maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// T-piece.
    T = 2,
    /// S-piece.
    S = 3,
    /// Z-piece.
    Z = 4,
    /// J-piece.
    J = 5,
    /// L-piece.
    L = 6,
}

/// Uniform selection over the 7 kinds. Each draw is independent; there is
/// no bag, so repeats are possible and expected.
impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(0..=6) {
            0 => PieceKind::I,
            1 => PieceKind::O,
            2 => PieceKind::T,
            3 => PieceKind::S,
            4 => PieceKind::Z,
            5 => PieceKind::J,
            _ => PieceKind::L,
        }
    }
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    /// Returns the single character representation of this piece kind.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }
}

/// The falling, player-controlled piece.
///
/// Owns its current-orientation [`Shape`], distinct from the immutable
/// catalog template: a successful rotation replaces the shape wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    shape: Shape,
}

impl Piece {
    /// Creates a piece in its catalog (spawn) orientation.
    #[must_use]
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: Shape::catalog(kind),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub(crate) fn replace_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }
}

/// Grid coordinates of a piece's shape origin (top-left of its bounding
/// matrix).
///
/// Signed so that candidate positions probed during validity checks may
/// fall outside the grid; committed positions of a valid piece keep every
/// occupied cell inside the lateral and bottom bounds, though cells may
/// transiently sit above row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Spawn position for `shape`: horizontally centered, top row.
    ///
    /// `x = floor(COLS / 2 - width / 2)`, computed as
    /// `(COLS - width) / 2` in integer arithmetic.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn spawn(shape: &Shape) -> Self {
        Self {
            x: (Board::WIDTH as i32 - shape.width() as i32) / 2,
            y: 0,
        }
    }

    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    #[must_use]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Absolute coordinates of the shape cell at offset `(dx, dy)`.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn cell(self, dx: usize, dy: usize) -> (i32, i32) {
        (self.x + dx as i32, self.y + dy as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_centers_the_shape() {
        // floor(10/2 - w/2) for the three catalog widths.
        assert_eq!(Position::spawn(&Shape::catalog(PieceKind::I)).x(), 3);
        assert_eq!(Position::spawn(&Shape::catalog(PieceKind::O)).x(), 4);
        assert_eq!(Position::spawn(&Shape::catalog(PieceKind::T)).x(), 3);
        assert_eq!(Position::spawn(&Shape::catalog(PieceKind::T)).y(), 0);
    }

    #[test]
    fn piece_owns_its_orientation() {
        let mut piece = Piece::new(PieceKind::I);
        piece.replace_shape(piece.shape().rotated_cw());
        assert_eq!(piece.shape().height(), 4);
        // The catalog template is untouched.
        assert_eq!(Shape::catalog(PieceKind::I).height(), 1);
    }

    #[test]
    fn kind_char_roundtrip_is_unique() {
        let chars: Vec<_> = [
            PieceKind::I,
            PieceKind::O,
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::J,
            PieceKind::L,
        ]
        .iter()
        .map(|kind| kind.as_char())
        .collect();
        assert_eq!(chars, vec!['I', 'O', 'T', 'S', 'Z', 'J', 'L']);
    }
}
