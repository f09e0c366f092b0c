//! Error types for geometry queries

use crate::direction::Direction;

/// Invalid-argument failures raised at the public boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("cell ({x}, {z}) is outside the 11x11 grid")]
    OutOfGrid { x: usize, z: usize },

    #[error("bit index {0} is outside the packed grid (0..121)")]
    IndexOutOfRange(usize),

    #[error("unknown direction: {0:?} (expected west, east, noea, nowe, soea or sowe)")]
    UnknownDirection(String),

    #[error("composite shift needs two distinct directions, got {0} twice")]
    RepeatedDirection(Direction),

    #[error("unknown mask: {0:?}")]
    UnknownMask(String),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
