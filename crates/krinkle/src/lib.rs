//! Vertex geometry for Modulo Krinkle tilings.
//!
//! A tiling is fully determined by `(m, k, t, offset, unit_length, layer_count)`.
//! Construction is synchronous and free of I/O; the result is read-only point
//! data plus tile metadata for a rendering collaborator.
//!
//! Layout
//! - `config`: parameter validation, gcd reduction, derived quantities.
//! - `prototile`: direction sequence, single tiles, wedges (fans of tiles).
//! - `tiling`: front-boundary matching, sector replication, the `Tiling` itself.
//! - `sample`: reproducible random parameter sets for experiments and benches.
//! - `geom`: small plane helpers on top of `nalgebra`.

pub mod config;
pub mod geom;
pub mod prototile;
pub mod sample;
pub mod tiling;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use config::{ParameterError, TilingConfig, TilingParams};
pub use tiling::{SectorWedge, Tiling};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::config::{ParameterError, TilingConfig, TilingParams};
    pub use crate::geom::{rotate_about, Bounds2, Point};
    pub use crate::prototile::{
        BoundaryEdge, DirectionSequence, Tile, TilePosition, TileType, TileView, Wedge, WedgeSteps,
    };
    pub use crate::sample::{draw_params, ParamBounds, ReplayToken};
    pub use crate::tiling::{
        Anchor, FrontBoundary, ReplicaTile, ReplicaWedge, SectorReplicator, SectorWedge, Tiling,
    };
}
