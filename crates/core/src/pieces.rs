//! Pieces module - shape matrices and rotation
//!
//! A shape is a small rectangular occupancy matrix (at most 4x4). Rotation
//! builds a new matrix, so canonical shapes are never mutated. There are no
//! wall kicks: a rotation is either valid at the unchanged origin or discarded.

use crate::types::PieceKind;

/// Largest width/height a shape matrix can have.
pub const MAX_SHAPE_DIM: usize = 4;

/// Offset of a single occupied cell relative to the shape's top-left anchor
pub type MinoOffset = (i8, i8);

/// Rectangular occupancy matrix for one piece in one rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    /// Row-major; entries outside `width` x `height` are always false.
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from boolean rows.
    ///
    /// Returns `None` for an empty matrix, ragged rows, or anything larger
    /// than 4x4.
    pub fn from_rows(rows: &[&[bool]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || width > MAX_SHAPE_DIM || height > MAX_SHAPE_DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            cells[r][..width].copy_from_slice(row);
        }
        Some(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the matrix cell at (col, row) is occupied.
    /// Coordinates outside the bounding box are never occupied.
    pub fn is_filled(&self, col: i8, row: i8) -> bool {
        if col < 0 || row < 0 || col >= self.width as i8 || row >= self.height as i8 {
            return false;
        }
        self.cells[row as usize][col as usize]
    }

    /// Offsets of occupied cells, row by row
    pub fn minos(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        (0..self.height as i8).flat_map(move |row| {
            (0..self.width as i8)
                .filter(move |&col| self.cells[row as usize][col as usize])
                .map(move |col| (col, row))
        })
    }

    /// Number of occupied cells
    pub fn count(&self) -> usize {
        self.minos().count()
    }

    /// Rotate 90° clockwise around the matrix's own bounding box.
    ///
    /// `new[r][c] = old[h - 1 - c][r]`, so width and height swap.
    pub fn rotate_cw(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in cells.iter_mut().enumerate().take(w) {
            for (c, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - c][r];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

/// Const builder for the canonical shapes
const fn matrix<const H: usize, const W: usize>(rows: [[u8; W]; H]) -> Shape {
    let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
    let mut r = 0;
    while r < H {
        let mut c = 0;
        while c < W {
            cells[r][c] = rows[r][c] != 0;
            c += 1;
        }
        r += 1;
    }
    Shape {
        width: W as u8,
        height: H as u8,
        cells,
    }
}

const I_SHAPE: Shape = matrix([[1, 1, 1, 1]]);
const O_SHAPE: Shape = matrix([[1, 1], [1, 1]]);
const T_SHAPE: Shape = matrix([[0, 1, 0], [1, 1, 1]]);
const S_SHAPE: Shape = matrix([[0, 1, 1], [1, 1, 0]]);
const Z_SHAPE: Shape = matrix([[1, 1, 0], [0, 1, 1]]);
const J_SHAPE: Shape = matrix([[1, 0, 0], [1, 1, 1]]);
const L_SHAPE: Shape = matrix([[0, 0, 1], [1, 1, 1]]);

/// Get the spawn shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}
