//! Rotational replication of the foundational sector.
//!
//! Replicas carry data only: rotated points, the tile tag and positional
//! indices. Every replica point is rotated from its source coordinates, never
//! from a previous replica, so drift does not accumulate across sectors.

use nalgebra::Rotation2;

use crate::config::TilingConfig;
use crate::geom::{midpoint, Point};
use crate::prototile::{TilePosition, TileType, TileView, Wedge};

#[derive(Clone, Debug)]
pub struct ReplicaTile {
    pub points: Vec<Point>,
    pub tile_type: TileType,
    pub position: TilePosition,
}

impl ReplicaTile {
    #[inline]
    pub fn view(&self) -> TileView<'_> {
        TileView {
            points: &self.points,
            tile_type: self.tile_type,
            position: self.position,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ReplicaWedge {
    /// `wedges_count · sector + source`.
    pub index: usize,
    pub sector: usize,
    /// Index of the foundational wedge this one was rotated from.
    pub source: usize,
    pub layers: Vec<Vec<ReplicaTile>>,
}

/// Rotation step and pivot shared by all sectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorReplicator {
    pub pivot: Point,
    pub step: f64,
    pub wedges_count: usize,
}

impl SectorReplicator {
    /// Pivot is the origin, or for offset tilings the midpoint of the first
    /// edge of the first foundational tile.
    pub fn new(cfg: &TilingConfig, foundation: &[Wedge]) -> Self {
        let pivot = match foundation.first() {
            Some(first) if cfg.offset() => {
                let base = first.base();
                midpoint(base.points[0], base.points[1])
            }
            _ => Point::zeros(),
        };
        Self {
            pivot,
            step: cfg.sector_rotation(),
            wedges_count: cfg.wedges_count(),
        }
    }

    /// Rotation applied to sector `sector` (0 is the foundational one).
    #[inline]
    pub fn angle_for(&self, sector: usize) -> f64 {
        sector as f64 * self.step
    }

    /// Rotated copies of every foundational wedge for one sector.
    pub fn replicate(&self, foundation: &[Wedge], sector: usize) -> Vec<ReplicaWedge> {
        let rot = Rotation2::new(self.angle_for(sector));
        let pivot = self.pivot;
        foundation
            .iter()
            .map(|wedge| {
                let index = self.wedges_count * sector + wedge.index;
                let layers = wedge
                    .layers
                    .iter()
                    .enumerate()
                    .map(|(layer, tiles)| {
                        tiles
                            .iter()
                            .map(|tile| ReplicaTile {
                                points: tile
                                    .points
                                    .iter()
                                    .map(|p| rot * (p - pivot) + pivot)
                                    .collect(),
                                tile_type: tile.tile_type,
                                position: TilePosition {
                                    sector,
                                    wedge: index,
                                    layer,
                                },
                            })
                            .collect()
                    })
                    .collect();
                ReplicaWedge {
                    index,
                    sector,
                    source: wedge.index,
                    layers,
                }
            })
            .collect()
    }

    /// Sectors `1..sectors`, in order.
    pub fn replicate_all(&self, foundation: &[Wedge], sectors: usize) -> Vec<ReplicaWedge> {
        (1..sectors)
            .flat_map(|r| self.replicate(foundation, r))
            .collect()
    }
}
