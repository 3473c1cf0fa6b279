//! Prototile geometry: direction sequence, single tiles, wedges.
//!
//! Purpose
//! - Turn a reduced `(m, k)` pair into the closed edge walk of one prototile,
//!   place copies of it, and group placed copies into wedges (triangular fans
//!   of tiles sharing one apex and one orientation).
//!
//! Conventions
//! - Direction `d` means the unit vector at angle `d · 2π/n`.
//! - Boundary directions are absolute (`local + tile direction`) and are not
//!   reduced mod n; the front-boundary matcher compares them to wedge indices.
//! - Points are built in the wedge frame, then rotated about the global origin
//!   by the tile direction and translated to the wedge apex.

mod direction;
mod tile;
mod wedge;

pub use direction::{direction_count, DirectionSequence};
pub use tile::{BoundaryEdge, Tile, TilePosition, TileType, TileView};
pub use wedge::{Wedge, WedgeSteps};
