use arrayvec::ArrayVec;

use super::board::Cell;

/// Largest shape side length in the catalog (the I-piece bounding box).
pub(crate) const MAX_SIDE: usize = 4;

/// Direction of a rotation transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// 90° clockwise.
    Clockwise,
    /// 90° counter-clockwise.
    CounterClockwise,
}

impl Rotation {
    /// The rotation that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }
}

/// Square grid of cells describing a piece's footprint.
///
/// The side length is 2, 3, or 4 depending on the piece kind. Keeping the
/// grid square makes [`rotated`](Self::rotated) well-defined for every kind.
/// Occupied cells all carry the owning kind's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    side: usize,
    cells: Vec<Cell>,
}

impl Shape {
    /// Builds a shape from a square row-major cell grid.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != side * side` or `side > MAX_SIDE`.
    pub(crate) fn from_cells(side: usize, cells: Vec<Cell>) -> Self {
        assert!(side <= MAX_SIDE);
        assert_eq!(cells.len(), side * side);
        Self { side, cells }
    }

    /// Side length of the square grid.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Cell at local coordinates `(x, y)`, row 0 at the top.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.side + x]
    }

    /// Local `(x, y)` offsets of every occupied cell.
    pub fn occupied_offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let side = self.side;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_empty())
            .map(move |(i, _)| (i % side, i / side))
    }

    /// Returns this shape rotated 90° in the given direction.
    ///
    /// Pure transform; board legality is the caller's concern. Four equal
    /// rotations in either direction reproduce the original shape.
    #[must_use]
    pub fn rotated(&self, rotation: Rotation) -> Self {
        let n = self.side;
        let mut cells = vec![Cell::Empty; n * n];
        for y in 0..n {
            for x in 0..n {
                cells[y * n + x] = match rotation {
                    Rotation::Clockwise => self.cell(y, n - 1 - x),
                    Rotation::CounterClockwise => self.cell(n - 1 - y, x),
                };
            }
        }
        Self { side: n, cells }
    }
}

/// Wall-kick offsets for a shape of the given side length.
///
/// The sequence alternates outward: `+1, -2, +3, -4, …`, each step negating
/// and growing the previous offset by one. Applied cumulatively, the net
/// horizontal corrections tried are `+1, -1, +2, -2, …`. The sequence stops
/// once an offset's magnitude would exceed the shape side, which bounds the
/// kick search.
pub(crate) fn kick_offsets(side: usize) -> ArrayVec<i32, MAX_SIDE> {
    let mut offsets = ArrayVec::new();
    let mut offset = 1_i32;
    // The k-th offset has magnitude k + 1, so exactly `side` entries fit.
    for _ in 0..side.min(MAX_SIDE) {
        offsets.push(offset);
        offset = -(offset + offset.signum());
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece::PieceKind;

    #[test]
    fn test_rotation_inverse() {
        assert_eq!(Rotation::Clockwise.inverse(), Rotation::CounterClockwise);
        assert_eq!(Rotation::CounterClockwise.inverse(), Rotation::Clockwise);
    }

    #[test]
    fn test_clockwise_rotation_remaps_indices() {
        let shape = PieceKind::J.spawn_shape();
        let rotated = shape.rotated(Rotation::Clockwise);

        let n = shape.side();
        for y in 0..n {
            for x in 0..n {
                assert_eq!(rotated.cell(x, y), shape.cell(y, n - 1 - x));
            }
        }
    }

    #[test]
    fn test_counter_clockwise_rotation_remaps_indices() {
        let shape = PieceKind::L.spawn_shape();
        let rotated = shape.rotated(Rotation::CounterClockwise);

        let n = shape.side();
        for y in 0..n {
            for x in 0..n {
                assert_eq!(rotated.cell(x, y), shape.cell(n - 1 - y, x));
            }
        }
    }

    #[test]
    fn test_four_rotations_are_identity() {
        for kind in PieceKind::ALL {
            for rotation in [Rotation::Clockwise, Rotation::CounterClockwise] {
                let original = kind.spawn_shape();
                let mut shape = original.clone();
                for _ in 0..4 {
                    shape = shape.rotated(rotation);
                }
                assert_eq!(shape, original, "{kind:?} {rotation:?}");
            }
        }
    }

    #[test]
    fn test_rotation_and_inverse_cancel() {
        for kind in PieceKind::ALL {
            let original = kind.spawn_shape();
            let there_and_back = original
                .rotated(Rotation::Clockwise)
                .rotated(Rotation::CounterClockwise);
            assert_eq!(there_and_back, original);
        }
    }

    #[test]
    fn test_occupied_offsets_match_cells() {
        let shape = PieceKind::T.spawn_shape();
        let offsets: Vec<_> = shape.occupied_offsets().collect();
        assert_eq!(offsets, vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_kick_offsets_alternate_outward() {
        assert_eq!(kick_offsets(2).as_slice(), &[1, -2]);
        assert_eq!(kick_offsets(3).as_slice(), &[1, -2, 3]);
        assert_eq!(kick_offsets(4).as_slice(), &[1, -2, 3, -4]);
    }

    #[test]
    fn test_kick_offsets_net_positions() {
        // Applied cumulatively, the offsets probe +1, -1, +2, -2.
        let mut x = 0;
        let nets: Vec<i32> = kick_offsets(4)
            .iter()
            .map(|offset| {
                x += offset;
                x
            })
            .collect();
        assert_eq!(nets, vec![1, -1, 2, -2]);
    }
}
