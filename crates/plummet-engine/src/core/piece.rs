use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use super::{board::Cell, shape::Shape};

/// Enum representing the type of piece.
///
/// The discriminant doubles as the piece's cell id (`1..=7`); `0` is reserved
/// for empty board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 1,
    /// J-piece.
    J = 2,
    /// O-piece.
    O = 3,
    /// T-piece.
    T = 4,
    /// L-piece.
    L = 5,
    /// S-piece.
    S = 6,
    /// Z-piece.
    Z = 7,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(1..=7) {
            1 => PieceKind::I,
            2 => PieceKind::J,
            3 => PieceKind::O,
            4 => PieceKind::T,
            5 => PieceKind::L,
            6 => PieceKind::S,
            _ => PieceKind::Z,
        }
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    /// Every piece kind, in id order.
    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Numeric cell id of this kind (`1..=7`).
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Inverse of [`id`](Self::id).
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::O),
            4 => Some(PieceKind::T),
            5 => Some(PieceKind::L),
            6 => Some(PieceKind::S),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Returns the single character representation of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use plummet_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }

    /// Parses a piece kind from a single character.
    ///
    /// # Examples
    ///
    /// ```
    /// use plummet_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('I'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceKind::I),
            'J' => Some(PieceKind::J),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'L' => Some(PieceKind::L),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// The catalog shape of this kind in its spawn orientation.
    ///
    /// Every occupied cell carries this kind's id; the grid is square so
    /// rotation stays well-defined.
    #[must_use]
    pub fn spawn_shape(self) -> Shape {
        let (side, template): (usize, &[u8]) = match self {
            #[rustfmt::skip]
            PieceKind::I => (4, &[
                0, 0, 0, 0,
                1, 1, 1, 1,
                0, 0, 0, 0,
                0, 0, 0, 0,
            ]),
            PieceKind::J => (3, &[2, 0, 0, 2, 2, 2, 0, 0, 0]),
            PieceKind::O => (2, &[3, 3, 3, 3]),
            PieceKind::T => (3, &[0, 4, 0, 4, 4, 4, 0, 0, 0]),
            PieceKind::L => (3, &[0, 0, 5, 5, 5, 5, 0, 0, 0]),
            PieceKind::S => (3, &[0, 6, 6, 6, 6, 0, 0, 0, 0]),
            PieceKind::Z => (3, &[7, 7, 0, 0, 7, 7, 0, 0, 0]),
        };
        let cells = template
            .iter()
            .map(|&id| if id == 0 { Cell::Empty } else { Cell::Piece(self) })
            .collect();
        Shape::from_cells(side, cells)
    }
}

impl Serialize for PieceKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_char(self.as_char())
    }
}

impl<'de> Deserialize<'de> for PieceKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let c = char::deserialize(deserializer)?;
        PieceKind::from_char(c)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid piece kind: {c}")))
    }
}

/// The currently falling, player-controlled piece.
///
/// Position is the shape's top-left origin in board coordinates; it is signed
/// because the wall-kick search probes positions left of column 0 before
/// rejecting them. The playfield owns the single active piece exclusively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub(crate) kind: PieceKind,
    pub(crate) shape: Shape,
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl ActivePiece {
    /// Creates a piece of `kind` horizontally centered on a board of
    /// `board_width` columns, at the top row.
    #[must_use]
    pub(crate) fn spawn(kind: PieceKind, board_width: usize) -> Self {
        let shape = kind.spawn_shape();
        let x = i32::try_from(board_width / 2).unwrap_or(i32::MAX)
            - i32::try_from(shape.side() / 2).unwrap_or(0);
        Self {
            kind,
            shape,
            x,
            y: 0,
        }
    }

    /// Kind of this piece.
    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Current footprint (replaced wholesale on rotation).
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Origin column in board coordinates.
    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Origin row in board coordinates.
    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Board coordinates of every occupied cell.
    pub fn occupied_positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape.occupied_offsets().map(|(dx, dy)| {
            #[expect(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
            let offset = (dx as i32, dy as i32);
            (self.x + offset.0, self.y + offset.1)
        })
    }
}
