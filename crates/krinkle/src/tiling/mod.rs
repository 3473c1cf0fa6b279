//! The finished tiling: foundational wedges plus their rotated sectors.
//!
//! Construction
//! - Validate and reduce the parameters (`TilingConfig`).
//! - Build `wedges_count` foundational wedges, anchoring each on the front
//!   boundary left by its predecessors (`boundary`).
//! - Rotate the foundational sector `t − 1` times (`sector`).
//!
//! The result is immutable. Renderers walk `wedges()` or `tiles()` and key
//! reusable symbols by `symbol_key(tile_type)`.

mod boundary;
mod sector;

pub use boundary::{assemble_foundation, Anchor, FrontBoundary, OpenEdge};
pub use sector::{ReplicaTile, ReplicaWedge, SectorReplicator};

use crate::config::{ParameterError, TilingConfig, TilingParams};
use crate::geom::{Bounds2, Point};
use crate::prototile::{TileType, TileView, Wedge};

/// A wedge of the finished tiling: either built directly or rotated from one.
#[derive(Clone, Debug)]
pub enum SectorWedge {
    Foundational(Wedge),
    Replica(ReplicaWedge),
}

impl SectorWedge {
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            SectorWedge::Foundational(w) => w.index,
            SectorWedge::Replica(r) => r.index,
        }
    }

    #[inline]
    pub fn sector(&self) -> usize {
        match self {
            SectorWedge::Foundational(_) => 0,
            SectorWedge::Replica(r) => r.sector,
        }
    }

    #[inline]
    pub fn layer_count(&self) -> usize {
        match self {
            SectorWedge::Foundational(w) => w.layers.len(),
            SectorWedge::Replica(r) => r.layers.len(),
        }
    }

    /// Tiles of layer `layer`, ordered outer-left → outer-right.
    pub fn layer(&self, layer: usize) -> Option<Vec<TileView<'_>>> {
        match self {
            SectorWedge::Foundational(w) => w
                .layers
                .get(layer)
                .map(|tiles| tiles.iter().map(|t| t.view()).collect()),
            SectorWedge::Replica(r) => r
                .layers
                .get(layer)
                .map(|tiles| tiles.iter().map(|t| t.view()).collect()),
        }
    }

    /// All tiles, layer by layer.
    pub fn tiles(&self) -> Box<dyn Iterator<Item = TileView<'_>> + '_> {
        match self {
            SectorWedge::Foundational(w) => Box::new(w.tiles().map(|t| t.view())),
            SectorWedge::Replica(r) => Box::new(r.layers.iter().flatten().map(|t| t.view())),
        }
    }

    #[inline]
    pub fn as_foundational(&self) -> Option<&Wedge> {
        match self {
            SectorWedge::Foundational(w) => Some(w),
            SectorWedge::Replica(_) => None,
        }
    }

    #[inline]
    pub fn as_replica(&self) -> Option<&ReplicaWedge> {
        match self {
            SectorWedge::Foundational(_) => None,
            SectorWedge::Replica(r) => Some(r),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Tiling {
    config: TilingConfig,
    /// Foundational wedges first, then sector 1, 2, …; list position == index.
    wedges: Vec<SectorWedge>,
    anchors: Vec<Anchor>,
    replicator: SectorReplicator,
}

impl Tiling {
    pub fn new(params: &TilingParams) -> Result<Self, ParameterError> {
        Ok(Self::from_config(TilingConfig::new(params)?))
    }

    pub fn from_config(config: TilingConfig) -> Self {
        let (foundation, anchors) = assemble_foundation(&config);
        let replicator = SectorReplicator::new(&config, &foundation);
        let replicas = replicator.replicate_all(&foundation, config.sector_count());

        let mut wedges = Vec::with_capacity(foundation.len() + replicas.len());
        wedges.extend(foundation.into_iter().map(SectorWedge::Foundational));
        wedges.extend(replicas.into_iter().map(SectorWedge::Replica));

        let tiling = Self {
            config,
            wedges,
            anchors,
            replicator,
        };
        tracing::debug!(
            id = %tiling.identifier(),
            wedges = tiling.wedges.len(),
            tiles = tiling.tile_count(),
            "tiling built"
        );
        tiling
    }

    #[inline]
    pub fn config(&self) -> &TilingConfig {
        &self.config
    }

    /// `MK-{m}-{k}-{n}`.
    pub fn identifier(&self) -> String {
        self.config.identifier()
    }

    /// Lookup key for a reusable per-type symbol, e.g. `MK-2-5-10-LEFT`.
    pub fn symbol_key(&self, tile_type: TileType) -> String {
        format!("{}-{}", self.identifier(), tile_type)
    }

    #[inline]
    pub fn wedges(&self) -> &[SectorWedge] {
        &self.wedges
    }

    /// Sector-0 wedges, in construction order.
    pub fn foundation(&self) -> impl Iterator<Item = &Wedge> {
        self.wedges.iter().filter_map(SectorWedge::as_foundational)
    }

    /// Wedges of one sector.
    pub fn sector(&self, sector: usize) -> &[SectorWedge] {
        let count = self.config.wedges_count();
        let start = (sector * count).min(self.wedges.len());
        let end = (start + count).min(self.wedges.len());
        &self.wedges[start..end]
    }

    /// How each foundational wedge was anchored.
    #[inline]
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Pivot of the sector rotation.
    #[inline]
    pub fn pivot(&self) -> Point {
        self.replicator.pivot
    }

    #[inline]
    pub fn replicator(&self) -> &SectorReplicator {
        &self.replicator
    }

    pub fn tiles(&self) -> impl Iterator<Item = TileView<'_>> {
        self.wedges.iter().flat_map(SectorWedge::tiles)
    }

    pub fn tile_count(&self) -> usize {
        self.wedges
            .iter()
            .map(|w| match w {
                SectorWedge::Foundational(w) => w.tile_count(),
                SectorWedge::Replica(r) => r.layers.iter().map(Vec::len).sum(),
            })
            .sum()
    }

    /// Bounds of every vertex in the tiling.
    pub fn bounds(&self) -> Option<Bounds2> {
        self.tiles()
            .filter_map(|t| Bounds2::from_points(t.points))
            .reduce(Bounds2::union)
    }
}

#[cfg(test)]
mod tests;
