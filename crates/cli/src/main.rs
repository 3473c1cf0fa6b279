use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use krinkle::sample::{draw_params, ParamBounds, ReplayToken};
use krinkle::{Tiling, TilingParams};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod export;
mod params;
mod provenance;

use params::{ParamArgs, ParamsFile};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Modulo Krinkle tiling generator")]
struct Cmd {
    /// Optional run label; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build a tiling and write its vertex data as JSON
    Generate {
        #[command(flatten)]
        params: ParamArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Draw parameters from a replay token, then generate
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Upper bound for k (lower bound is 2)
        #[arg(long, default_value_t = 50)]
        max_k: i64,
        /// Upper bound for t (lower bound is 2)
        #[arg(long, default_value_t = 10)]
        max_t: i64,
        /// Upper bound for layers per wedge
        #[arg(long, default_value_t = 10)]
        max_layers: i64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a summary JSON block for a parameter set
    Report {
        #[command(flatten)]
        params: ParamArgs,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate { params, out } => generate(params.resolve()?, &out, cmd.tag),
        Action::Sample {
            seed,
            index,
            max_k,
            max_t,
            max_layers,
            out,
        } => {
            let bounds = ParamBounds {
                k: (2, max_k),
                t: (2, max_t),
                layers: (1, max_layers),
                ..ParamBounds::default()
            };
            sample(bounds, ReplayToken { seed, index }, &out, cmd.tag)
        }
        Action::Report { params } => report(params.resolve()?),
    }
}

fn build(params: &TilingParams) -> Result<Tiling> {
    Tiling::new(params).with_context(|| format!("invalid tiling parameters {params:?}"))
}

fn generate(params: TilingParams, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(
        m = params.m,
        k = params.k,
        t = params.t,
        offset = params.offset,
        layers = params.layer_count,
        out = %out.display(),
        tag = ?tag,
        "generate"
    );
    let tiling = build(&params)?;
    let summary = export::summary(&tiling);
    tracing::info!(
        id = %summary.identifier,
        wedges = summary.wedges,
        tiles = summary.tiles,
        anchored = summary.anchored,
        "built"
    );

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let doc = export::export(&tiling);
    std::fs::write(out, serde_json::to_vec(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(serde_json::json!({
        "requested": ParamsFile::from(params),
        "identifier": summary.identifier,
    }))
    .with_tag(tag);
    let prov = write_sidecar(out, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn sample(bounds: ParamBounds, tok: ReplayToken, out: &Path, tag: Option<String>) -> Result<()> {
    let params = draw_params(bounds, tok);
    tracing::info!(seed = tok.seed, index = tok.index, "sample");
    generate(params, out, tag)
}

fn report(params: TilingParams) -> Result<()> {
    let tiling = build(&params)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&export::summary(&tiling))?
    );
    Ok(())
}
