//! A single placed prototile and its two stitchable half-boundaries.

use std::fmt;

use nalgebra::Rotation2;

use crate::config::TilingConfig;
use crate::geom::Point;

/// Presentation tag assigned by the owning wedge; never affects geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileType {
    Base,
    Left,
    Middle,
    Center,
    Right,
}

impl TileType {
    pub const ALL: [TileType; 5] = [
        TileType::Base,
        TileType::Left,
        TileType::Middle,
        TileType::Center,
        TileType::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TileType::Base => "BASE",
            TileType::Left => "LEFT",
            TileType::Middle => "MIDDLE",
            TileType::Center => "CENTER",
            TileType::Right => "RIGHT",
        }
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a tile sits in the finished tiling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TilePosition {
    pub sector: usize,
    pub wedge: usize,
    pub layer: usize,
}

/// One edge of an open half-boundary: absolute direction and the vertex that
/// follows the edge in sequence order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryEdge {
    pub direction: usize,
    pub point: Point,
}

/// Read-only view handed to renderers; identical for source and replica tiles.
#[derive(Clone, Copy, Debug)]
pub struct TileView<'a> {
    pub points: &'a [Point],
    pub tile_type: TileType,
    pub position: TilePosition,
}

/// A placed prototile.
///
/// Invariants
/// - `points.len() == 2k + 2`; `points[0]` is the (transformed) origin.
/// - `lower_boundary.len() == upper_boundary.len() == k + 1`.
#[derive(Clone, Debug)]
pub struct Tile {
    /// Start of the walk in the wedge frame (before rotation and translation).
    pub origin: Point,
    pub direction: usize,
    pub translation: Point,
    pub points: Vec<Point>,
    pub tile_type: TileType,
    pub position: TilePosition,
    pub lower_boundary: Vec<BoundaryEdge>,
    pub upper_boundary: Vec<BoundaryEdge>,
}

impl Tile {
    pub fn new(
        cfg: &TilingConfig,
        origin: Point,
        direction: usize,
        translation: Point,
        tile_type: TileType,
        position: TilePosition,
    ) -> Self {
        let seq = cfg.directions();
        let unit = cfg.unit_length();
        let rot = Rotation2::new(cfg.angle() * direction as f64);

        let mut points = Vec::with_capacity(seq.len());
        points.push(origin);
        let mut cur = origin;
        for i in 0..seq.len() - 1 {
            cur += seq.step_vector(i) * unit;
            points.push(cur);
        }
        for p in points.iter_mut() {
            *p = rot * *p + translation;
        }

        let edge = |i: usize| BoundaryEdge {
            direction: seq.steps()[i] + direction,
            point: points[(i + 1) % points.len()],
        };
        let lower_boundary = seq.lower_half().map(edge).collect();
        let upper_boundary = seq.upper_half().rev().map(edge).collect();

        Self {
            origin,
            direction,
            translation,
            points,
            tile_type,
            position,
            lower_boundary,
            upper_boundary,
        }
    }

    #[inline]
    pub fn view(&self) -> TileView<'_> {
        TileView {
            points: &self.points,
            tile_type: self.tile_type,
            position: self.position,
        }
    }
}
