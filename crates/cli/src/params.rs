use anyhow::{Context, Result};
use clap::Args;
use krinkle::TilingParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tiling parameters from flags, or from a JSON file via `--params`.
#[derive(Args, Debug, Clone)]
pub struct ParamArgs {
    /// JSON file with `m`, `k`, `t`, `offset`, `unit_length`, `layer_count`; flags are ignored
    #[arg(long)]
    pub params: Option<PathBuf>,
    #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
    pub m: i64,
    #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
    pub k: i64,
    /// Number of rotational sectors
    #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
    pub t: i64,
    /// Half-turn sectors about an off-centre pivot
    #[arg(long)]
    pub offset: bool,
    #[arg(long, default_value_t = 10.0)]
    pub unit_length: f64,
    /// Layers per wedge, base layer included
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    pub layers: i64,
}

/// On-disk form of `TilingParams`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ParamsFile {
    pub m: i64,
    pub k: i64,
    pub t: i64,
    #[serde(default)]
    pub offset: bool,
    #[serde(default = "default_unit_length")]
    pub unit_length: f64,
    #[serde(default = "default_layer_count")]
    pub layer_count: i64,
}

fn default_unit_length() -> f64 {
    TilingParams::default().unit_length
}

fn default_layer_count() -> i64 {
    TilingParams::default().layer_count
}

impl From<ParamsFile> for TilingParams {
    fn from(f: ParamsFile) -> Self {
        TilingParams {
            m: f.m,
            k: f.k,
            t: f.t,
            offset: f.offset,
            unit_length: f.unit_length,
            layer_count: f.layer_count,
        }
    }
}

impl From<TilingParams> for ParamsFile {
    fn from(p: TilingParams) -> Self {
        ParamsFile {
            m: p.m,
            k: p.k,
            t: p.t,
            offset: p.offset,
            unit_length: p.unit_length,
            layer_count: p.layer_count,
        }
    }
}

impl ParamArgs {
    pub fn resolve(&self) -> Result<TilingParams> {
        if let Some(path) = &self.params {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let file: ParamsFile = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?;
            return Ok(file.into());
        }
        Ok(TilingParams {
            m: self.m,
            k: self.k,
            t: self.t,
            offset: self.offset,
            unit_length: self.unit_length,
            layer_count: self.layers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn flags() -> ParamArgs {
        ParamArgs {
            params: None,
            m: 3,
            k: 7,
            t: 4,
            offset: true,
            unit_length: 2.0,
            layers: 2,
        }
    }

    #[test]
    fn flags_map_to_params() {
        let p = flags().resolve().unwrap();
        assert_eq!((p.m, p.k, p.t, p.offset, p.layer_count), (3, 7, 4, true, 2));
        assert_eq!(p.unit_length, 2.0);
    }

    #[test]
    fn params_file_overrides_flags_and_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("p.json");
        fs::write(&path, r#"{"m": 4, "k": 6, "t": 3}"#).unwrap();
        let args = ParamArgs {
            params: Some(path),
            ..flags()
        };
        let p = args.resolve().unwrap();
        assert_eq!((p.m, p.k, p.t, p.offset), (4, 6, 3, false));
        assert_eq!(p.unit_length, TilingParams::default().unit_length);
        assert_eq!(p.layer_count, TilingParams::default().layer_count);
    }

    #[test]
    fn unreadable_params_file_reports_path() {
        let args = ParamArgs {
            params: Some(PathBuf::from("/nonexistent/krinkle/p.json")),
            ..flags()
        };
        let err = args.resolve().unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/krinkle/p.json"));
    }
}
