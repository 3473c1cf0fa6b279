//! JSON hand-off for rendering collaborators.
//!
//! Layout: tiling → wedges → layers → tiles, each tile with its vertex list,
//! type tag and positional indices. Renderers key reusable symbols by
//! `symbol_key`. Nothing here is ever read back.

use krinkle::geom::Bounds2;
use krinkle::prototile::TileView;
use krinkle::{SectorWedge, Tiling};
use serde::Serialize;

use crate::params::ParamsFile;

#[derive(Serialize, Debug)]
pub struct TilingExport {
    pub identifier: String,
    /// Reduced parameters the geometry was built from.
    pub params: ParamsFile,
    pub n: usize,
    pub angle: f64,
    pub directions: Vec<usize>,
    pub pivot: [f64; 2],
    pub bounds: Option<BoundsExport>,
    pub wedges: Vec<WedgeExport>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct BoundsExport {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

#[derive(Serialize, Debug)]
pub struct WedgeExport {
    pub index: usize,
    pub sector: usize,
    pub foundational: bool,
    pub layers: Vec<Vec<TileExport>>,
}

#[derive(Serialize, Debug)]
pub struct TileExport {
    #[serde(rename = "type")]
    pub tile_type: &'static str,
    pub symbol_key: String,
    pub sector: usize,
    pub wedge: usize,
    pub layer: usize,
    pub points: Vec<[f64; 2]>,
}

/// Summary printed by `report` and logged by `generate`.
#[derive(Serialize, Debug)]
pub struct Summary {
    pub identifier: String,
    pub n: usize,
    pub wedges_count: usize,
    pub sectors: usize,
    pub wedges: usize,
    pub tiles: usize,
    pub anchored: usize,
    pub bounds: Option<BoundsExport>,
}

impl From<Bounds2> for BoundsExport {
    fn from(b: Bounds2) -> Self {
        Self {
            min: [b.min.x, b.min.y],
            max: [b.max.x, b.max.y],
        }
    }
}

fn tile_export(tiling: &Tiling, tile: TileView<'_>) -> TileExport {
    TileExport {
        tile_type: tile.tile_type.as_str(),
        symbol_key: tiling.symbol_key(tile.tile_type),
        sector: tile.position.sector,
        wedge: tile.position.wedge,
        layer: tile.position.layer,
        points: tile.points.iter().map(|p| [p.x, p.y]).collect(),
    }
}

fn wedge_export(tiling: &Tiling, wedge: &SectorWedge) -> WedgeExport {
    WedgeExport {
        index: wedge.index(),
        sector: wedge.sector(),
        foundational: wedge.as_foundational().is_some(),
        layers: (0..wedge.layer_count())
            .filter_map(|i| wedge.layer(i))
            .map(|tiles| tiles.into_iter().map(|t| tile_export(tiling, t)).collect())
            .collect(),
    }
}

pub fn export(tiling: &Tiling) -> TilingExport {
    let cfg = tiling.config();
    TilingExport {
        identifier: tiling.identifier(),
        params: cfg.params().into(),
        n: cfg.n(),
        angle: cfg.angle(),
        directions: cfg.directions().steps().to_vec(),
        pivot: [tiling.pivot().x, tiling.pivot().y],
        bounds: tiling.bounds().map(Into::into),
        wedges: tiling
            .wedges()
            .iter()
            .map(|w| wedge_export(tiling, w))
            .collect(),
    }
}

pub fn summary(tiling: &Tiling) -> Summary {
    let cfg = tiling.config();
    Summary {
        identifier: tiling.identifier(),
        n: cfg.n(),
        wedges_count: cfg.wedges_count(),
        sectors: cfg.sector_count(),
        wedges: tiling.wedges().len(),
        tiles: tiling.tile_count(),
        anchored: tiling
            .anchors()
            .iter()
            .filter(|a| a.source.is_some())
            .count(),
        bounds: tiling.bounds().map(Into::into),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krinkle::TilingParams;
    use serde_json::Value;

    #[test]
    fn export_mirrors_tiling_structure() {
        let tiling = Tiling::new(&TilingParams::default()).unwrap();
        let doc = serde_json::to_value(export(&tiling)).unwrap();
        assert_eq!(doc["identifier"], "MK-2-5-10");
        assert_eq!(doc["n"], 10);
        assert_eq!(doc["directions"].as_array().unwrap().len(), 12);
        let wedges = doc["wedges"].as_array().unwrap();
        assert_eq!(wedges.len(), 10);
        assert_eq!(wedges[0]["foundational"], true);
        assert_eq!(wedges[5]["foundational"], false);
        assert_eq!(wedges[5]["sector"], 1);
        let layer2 = wedges[0]["layers"][2].as_array().unwrap();
        let types: Vec<&str> = layer2.iter().map(|t| t["type"].as_str().unwrap()).collect();
        assert_eq!(types, ["LEFT", "CENTER", "RIGHT"]);
        assert_eq!(layer2[1]["symbol_key"], "MK-2-5-10-CENTER");
        assert_eq!(layer2[0]["points"].as_array().unwrap().len(), 12);
        assert_eq!(layer2[0]["points"][0].as_array().unwrap().len(), 2);
    }

    #[test]
    fn summary_counts() {
        let tiling = Tiling::new(&TilingParams::default()).unwrap();
        let s = serde_json::to_value(summary(&tiling)).unwrap();
        assert_eq!(s["wedges"], 10);
        assert_eq!(s["tiles"], 100);
        assert_eq!(s["anchored"], 4);
        assert!(matches!(s["bounds"], Value::Object(_)));
    }
}
