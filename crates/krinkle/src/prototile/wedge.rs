//! Wedges: triangular fans of equally oriented tiles sharing one apex.
//!
//! Layer `i` holds `i + 1` tiles. In the wedge frame the first tile of layer
//! `i` (RIGHT) starts at `i · to_next_layer`; each further tile of the layer
//! adds `to_next_tile`. Layer lists are ordered outer-left → outer-right.

use crate::config::TilingConfig;
use crate::geom::Point;

use super::tile::{BoundaryEdge, Tile, TilePosition, TileType};

/// Per-wedge translation increments (wedge frame, already scaled).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WedgeSteps {
    /// Lower-half walk up to the turnaround entry: origin of the next layer's
    /// RIGHT tile relative to the current one.
    pub to_next_layer: Point,
    /// Turnaround step (entry `k`, then entry `k+1` with the upper sign flip):
    /// origin of the next tile to the left within a layer.
    pub to_next_tile: Point,
}

impl WedgeSteps {
    pub fn new(cfg: &TilingConfig) -> Self {
        let seq = cfg.directions();
        let k = seq.k();
        let unit = cfg.unit_length();
        Self {
            to_next_layer: seq.walk(0..k) * unit,
            to_next_tile: seq.walk(k..k + 2) * unit,
        }
    }
}

/// Accumulator threaded from one layer to the next.
#[derive(Clone, Copy, Debug)]
struct LayerCursor {
    layer: usize,
    /// Origin of the layer's RIGHT tile in the wedge frame.
    start: Point,
}

impl LayerCursor {
    fn base() -> Self {
        Self {
            layer: 0,
            start: Point::zeros(),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.layer + 1
    }

    #[inline]
    fn origin_of(&self, slot: usize, steps: &WedgeSteps) -> Point {
        self.start + steps.to_next_tile * slot as f64
    }

    #[inline]
    fn advance(self, steps: &WedgeSteps) -> Self {
        Self {
            layer: self.layer + 1,
            start: self.start + steps.to_next_layer,
        }
    }
}

/// Tag for the tile placed `slot`-th (0 = rightmost) in a layer of `len` tiles.
fn slot_type(slot: usize, len: usize) -> TileType {
    if len == 1 {
        TileType::Base
    } else if slot == 0 {
        TileType::Right
    } else if slot == len - 1 {
        TileType::Left
    } else if len % 2 == 1 && slot == len / 2 {
        TileType::Center
    } else {
        TileType::Middle
    }
}

#[derive(Clone, Debug)]
pub struct Wedge {
    pub direction: usize,
    /// Apex location (global frame).
    pub translation: Point,
    /// Position in the tiling's wedge list.
    pub index: usize,
    pub layers: Vec<Vec<Tile>>,
    /// Outer-left side: upper boundaries of each layer's first tile.
    pub upper_boundary: Vec<BoundaryEdge>,
    /// Outer-right side: lower boundaries of each layer's last tile.
    pub lower_boundary: Vec<BoundaryEdge>,
}

impl Wedge {
    /// Build a foundational (sector 0) wedge.
    pub fn new(cfg: &TilingConfig, direction: usize, translation: Point, index: usize) -> Self {
        let steps = WedgeSteps::new(cfg);
        let mut layers = Vec::with_capacity(cfg.layer_count());
        let mut cursor = LayerCursor::base();
        for _ in 0..cfg.layer_count() {
            layers.push(build_layer(cfg, &cursor, &steps, direction, translation, index));
            cursor = cursor.advance(&steps);
        }

        let upper_boundary = layers
            .iter()
            .filter_map(|layer| layer.first())
            .flat_map(|tile| tile.upper_boundary.iter().copied())
            .collect();
        let lower_boundary = layers
            .iter()
            .filter_map(|layer| layer.last())
            .flat_map(|tile| tile.lower_boundary.iter().copied())
            .collect();

        Self {
            direction,
            translation,
            index,
            layers,
            upper_boundary,
            lower_boundary,
        }
    }

    /// The single tile of layer 0.
    #[inline]
    pub fn base(&self) -> &Tile {
        &self.layers[0][0]
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.layers.iter().flatten()
    }

    pub fn tile_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }
}

fn build_layer(
    cfg: &TilingConfig,
    cursor: &LayerCursor,
    steps: &WedgeSteps,
    direction: usize,
    translation: Point,
    wedge: usize,
) -> Vec<Tile> {
    let len = cursor.len();
    let position = TilePosition {
        sector: 0,
        wedge,
        layer: cursor.layer,
    };
    // Slots are placed right to left; the list reads left to right.
    (0..len)
        .rev()
        .map(|slot| {
            Tile::new(
                cfg,
                cursor.origin_of(slot, steps),
                direction,
                translation,
                slot_type(slot, len),
                position,
            )
        })
        .collect()
}
