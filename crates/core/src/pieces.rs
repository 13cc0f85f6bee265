//! Pieces module - tetromino shape table
//!
//! Every shape is four `(dx, dy)` offsets from the piece anchor, with y growing
//! downwards. I, O, S and Z only have two distinct geometries, repeated across
//! rotations {1, 3} and {2, 4}; J, L and T have four.

use crate::error::CoreError;
use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the piece anchor
pub type PieceShape = [MinoOffset; 4];

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => get_i_shape(rotation),
        PieceKind::O => get_o_shape(rotation),
        PieceKind::J => get_j_shape(rotation),
        PieceKind::L => get_l_shape(rotation),
        PieceKind::S => get_s_shape(rotation),
        PieceKind::T => get_t_shape(rotation),
        PieceKind::Z => get_z_shape(rotation),
    }
}

/// Numeric form of [`get_shape`] for callers holding raw ids.
///
/// ```
/// use blockfall_core::pieces::shape_by_id;
///
/// assert_eq!(shape_by_id(2, 3).unwrap(), [(0, 0), (1, 0), (0, 1), (1, 1)]);
/// assert!(shape_by_id(8, 1).is_err());
/// ```
pub fn shape_by_id(kind_id: u8, rotation_id: u8) -> Result<PieceShape, CoreError> {
    let kind = PieceKind::from_id(kind_id).ok_or(CoreError::UnknownPieceType(kind_id))?;
    let rotation =
        Rotation::from_index(rotation_id).ok_or(CoreError::UnknownRotation(rotation_id))?;
    Ok(get_shape(kind, rotation))
}

/// I piece: horizontal bar or vertical bar
fn get_i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North | Rotation::South => [(-2, 0), (-1, 0), (0, 0), (1, 0)],
        Rotation::East | Rotation::West => [(0, -2), (0, -1), (0, 0), (0, 1)],
    }
}

/// O piece (same for all rotations)
fn get_o_shape(_rotation: Rotation) -> PieceShape {
    [(0, 0), (1, 0), (0, 1), (1, 1)]
}

fn get_j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(-1, 0), (0, 0), (1, 0), (1, 1)],
        Rotation::East => [(0, -1), (0, 0), (0, 1), (-1, 1)],
        Rotation::South => [(-1, 0), (0, 0), (1, 0), (-1, -1)],
        Rotation::West => [(0, -1), (0, 0), (0, 1), (1, -1)],
    }
}

fn get_l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(-1, 0), (0, 0), (1, 0), (-1, 1)],
        Rotation::East => [(0, -1), (0, 0), (0, 1), (-1, -1)],
        Rotation::South => [(-1, 0), (0, 0), (1, 0), (1, -1)],
        Rotation::West => [(0, -1), (0, 0), (0, 1), (1, 1)],
    }
}

fn get_s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North | Rotation::South => [(-1, 1), (0, 1), (0, 0), (1, 0)],
        Rotation::East | Rotation::West => [(0, -1), (1, 0), (0, 0), (1, 1)],
    }
}

fn get_t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        Rotation::East => [(0, -1), (0, 0), (0, 1), (-1, 0)],
        Rotation::South => [(-1, 0), (0, 0), (1, 0), (0, -1)],
        Rotation::West => [(0, -1), (0, 0), (0, 1), (1, 0)],
    }
}

fn get_z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North | Rotation::South => [(-1, 0), (0, 0), (0, 1), (1, 1)],
        Rotation::East | Rotation::West => [(1, -1), (1, 0), (0, 0), (0, 1)],
    }
}

/// Translate a shape to absolute board cells.
pub fn place(shape: &PieceShape, x: i8, y: i8) -> [(i8, i8); 4] {
    shape.map(|(dx, dy)| (x + dx, y + dy))
}
