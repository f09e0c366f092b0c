//! HEXBITS Core - bitboard geometry for a hexagonal board
//!
//! This crate derives the bit-level geometry of a side-6 hexagon packed into
//! an 11x11 grid of a `u128`:
//! - Board geometry (cell indexing, hexagon predicate, valid-field mask)
//! - Directional edge masks and masked single-step shifts
//! - Composite shifts fusing two steps into one masked shift
//! - Set-at-a-time traversal (neighbours, flood fill, rays)
//! - A serializable table of every constant, a self-audit and source rendering

pub mod audit;
pub mod bitboard;
pub mod board;
pub mod composite;
pub mod direction;
pub mod error;
pub mod masks;
pub mod render;
pub mod shift;
pub mod table;
pub mod traverse;

// Re-exports for convenient access
pub use audit::{audit, AuditReport, CheckOutcome};
pub use bitboard::{iter_ones, raw_shift, Bitboard, EMPTY};
pub use board::{board_cells, bit_index, is_valid, Cell, BOARD_CELLS, GRID_SIZE, VALID_FIELDS};
pub use composite::{composite_by_name, CompositeShift, COMPOSITE_FNS, COMPOSITE_SHIFTS};
pub use direction::Direction;
pub use error::{GeometryError, Result};
pub use masks::{edge_mask, unsafe_mask};
pub use render::{render_diagram, render_source, LiteralStyle, RenderConfig};
pub use shift::{blocked, shift};
pub use table::{geometry, mask_by_name, GeometryTable};
pub use traverse::{flood_fill, is_connected, jump_over, neighbours, ray, second_ring};
