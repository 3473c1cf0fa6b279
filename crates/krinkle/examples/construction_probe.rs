//! Construction timing probe for one large tiling.
//!
//! Purpose
//! - Give a reproducible data point for "how long does the largest UI-range
//!   tiling take to build, and how much geometry does it produce?"
//!
//! Usage
//! - `cargo run --release -p krinkle --example construction_probe -- 8 49 10 offset`
//!   (m, k, t, optional `offset`); defaults to the upper UI bounds.

use std::time::Instant;

use krinkle::{Tiling, TilingParams};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let num = |i: usize, default: i64| {
        args.get(i)
            .and_then(|s| s.parse().ok())
            .unwrap_or(default)
    };
    let params = TilingParams {
        m: num(0, 8),
        k: num(1, 49),
        t: num(2, 10),
        offset: args.get(3).is_some_and(|s| s == "offset"),
        unit_length: 10.0,
        layer_count: 10,
    };

    let start = Instant::now();
    let tiling = Tiling::new(&params).expect("probe parameters are valid");
    let elapsed = start.elapsed().as_secs_f64() * 1e3;

    let vertices: usize = tiling.tiles().map(|t| t.points.len()).sum();
    let matched = tiling
        .anchors()
        .iter()
        .filter(|a| a.source.is_some())
        .count();
    let bounds = tiling.bounds().expect("tiling has vertices");

    println!(
        "id={} wedges={} tiles={} vertices={vertices}",
        tiling.identifier(),
        tiling.wedges().len(),
        tiling.tile_count()
    );
    println!("anchored={matched}/{}", tiling.anchors().len());
    println!(
        "extent={:.3}x{:.3} pivot=({:.3},{:.3})",
        bounds.width(),
        bounds.height(),
        tiling.pivot().x,
        tiling.pivot().y
    );
    println!("build_time_ms={elapsed:.3}");
}
