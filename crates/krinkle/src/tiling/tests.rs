use super::*;
use crate::geom::{approx_eq, rotate_about};
use crate::prototile::BoundaryEdge;
use nalgebra::vector;

fn params(m: i64, k: i64, t: i64, offset: bool) -> TilingParams {
    TilingParams {
        m,
        k,
        t,
        offset,
        ..TilingParams::default()
    }
}

fn open(direction: usize, x: f64) -> OpenEdge {
    OpenEdge {
        edge: BoundaryEdge {
            direction,
            point: vector![x, 0.0],
        },
        wedge: 0,
        slot: x as usize,
    }
}

fn scale_of(tiling: &Tiling) -> f64 {
    tiling
        .tiles()
        .flat_map(|t| t.points.iter())
        .map(|p| p.norm())
        .fold(1.0, f64::max)
}

#[test]
fn claim_discards_match_and_trailing_edges() {
    let mut front: FrontBoundary = [open(1, 0.0), open(2, 1.0), open(1, 2.0), open(3, 3.0)]
        .into_iter()
        .collect();
    // A miss leaves the front untouched.
    assert!(front.claim(9).is_none());
    assert_eq!(front.len(), 4);

    // The first match wins; it and everything after it are dropped.
    let hit = front.claim(2).unwrap();
    assert_eq!(hit.edge.point, vector![1.0, 0.0]);
    assert_eq!(front.edges(), &[open(1, 0.0)]);

    // Still-open edge with direction 3 was discarded with the tail.
    assert!(front.claim(3).is_none());
    let hit = front.claim(1).unwrap();
    assert_eq!(hit.slot, 0);
    assert!(front.is_empty());
}

#[test]
fn scenario_a_structure() {
    let tiling = Tiling::new(&TilingParams::default()).unwrap();
    assert_eq!(tiling.identifier(), "MK-2-5-10");
    assert_eq!(tiling.wedges().len(), 10);
    assert_eq!(tiling.foundation().count(), 5);
    assert_eq!(tiling.tile_count(), 10 * 10);
    for (i, w) in tiling.wedges().iter().enumerate() {
        assert_eq!(w.index(), i);
        assert_eq!(w.sector(), i / 5);
        assert_eq!(w.layer_count(), 4);
        for tile in w.tiles() {
            assert_eq!(tile.points.len(), 12);
            assert_eq!(tile.position.wedge, i);
            assert_eq!(tile.position.sector, i / 5);
        }
    }
    assert_eq!(tiling.sector(1).len(), 5);
    assert!(tiling.sector(1).iter().all(|w| w.as_replica().is_some()));
    assert!(tiling.sector(2).is_empty());
    assert_eq!(tiling.pivot(), Point::zeros());
}

#[test]
fn scenario_a_every_later_wedge_is_anchored_on_the_front() {
    let tiling = Tiling::new(&TilingParams::default()).unwrap();
    let anchors = tiling.anchors();
    assert_eq!(anchors.len(), 5);
    assert!(anchors[0].source.is_none());
    assert_eq!(anchors[0].apex, Point::zeros());
    assert!(anchors[1..].iter().all(|a| a.source.is_some()));
    // wedge 1 sits where direction 1 first appears on wedge 0's left side
    let src = anchors[1].source.unwrap();
    assert_eq!((src.wedge, src.slot), (0, 3));
    // wedge 2 reaches back before wedge 1's anchor
    let src = anchors[2].source.unwrap();
    assert_eq!((src.wedge, src.slot), (0, 1));
}

#[test]
fn anchors_follow_adjacency_law() {
    for p in [
        TilingParams::default(),
        params(3, 7, 3, false),
        params(2, 5, 3, true),
        params(1, 4, 2, true),
    ] {
        let tiling = Tiling::new(&p).unwrap();
        let foundation: Vec<&Wedge> = tiling.foundation().collect();
        for anchor in tiling.anchors() {
            let wedge = foundation[anchor.wedge];
            assert_eq!(wedge.translation, anchor.apex);
            assert_eq!(wedge.direction, anchor.wedge);
            match anchor.source {
                Some(src) => {
                    assert!(src.wedge < anchor.wedge);
                    assert_eq!(src.edge.direction, anchor.wedge);
                    let recorded = foundation[src.wedge].upper_boundary[src.slot];
                    assert_eq!(recorded.direction, anchor.wedge);
                    assert!(approx_eq(anchor.apex, recorded.point, 1.0));
                }
                None => assert_eq!(anchor.apex, Point::zeros()),
            }
        }
    }
}

#[test]
fn replicas_obey_rotational_law() {
    for p in [TilingParams::default(), params(3, 7, 4, false), params(2, 5, 3, true)] {
        let tiling = Tiling::new(&p).unwrap();
        let scale = scale_of(&tiling);
        let foundation: Vec<&Wedge> = tiling.foundation().collect();
        let rep = tiling.replicator();
        for replica in tiling.wedges().iter().filter_map(SectorWedge::as_replica) {
            let source = foundation[replica.source];
            let angle = rep.angle_for(replica.sector);
            for (layer, (rl, sl)) in replica.layers.iter().zip(&source.layers).enumerate() {
                for (rt, st) in rl.iter().zip(sl) {
                    assert_eq!(rt.tile_type, st.tile_type);
                    assert_eq!(rt.position.layer, layer);
                    for (q, p) in rt.points.iter().zip(&st.points) {
                        let expected = rotate_about(*p, angle, tiling.pivot());
                        assert!(approx_eq(*q, expected, scale));
                    }
                }
            }
        }
    }
}

#[test]
fn scenario_d_offset_pivot_is_off_centre() {
    let tiling = Tiling::new(&params(2, 5, 3, true)).unwrap();
    assert_eq!(tiling.config().n(), 26);
    let base = tiling.foundation().next().unwrap().base();
    let expected = (base.points[0] + base.points[1]) * 0.5;
    assert_eq!(tiling.pivot(), expected);
    // first edge has direction 0 from the origin, so the pivot is (L/2, 0)
    assert!((tiling.pivot() - vector![5.0, 0.0]).norm() < 1e-12);

    let foundation: Vec<&Wedge> = tiling.foundation().collect();
    let replica = tiling.sector(1)[0].as_replica().unwrap();
    let source = foundation[replica.source];
    let angle = tiling.replicator().angle_for(1);
    let about_origin = rotate_about(source.base().points[0], angle, Point::zeros());
    let actual = replica.layers[0][0].points[0];
    assert!((actual - about_origin).norm() > 1.0);
}

#[test]
fn scenario_c_k_one_is_finite_in_both_modes() {
    for offset in [false, true] {
        let tiling = Tiling::new(&params(1, 1, 3, offset)).unwrap();
        assert_eq!(tiling.config().k(), 1);
        assert!(tiling.tile_count() > 0);
        for tile in tiling.tiles() {
            assert_eq!(tile.points.len(), 4);
            assert!(tile.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }
}

#[test]
fn construction_is_deterministic() {
    let p = params(3, 8, 3, true);
    let a = Tiling::new(&p).unwrap();
    let b = Tiling::new(&p).unwrap();
    let pa: Vec<_> = a.tiles().flat_map(|t| t.points.to_vec()).collect();
    let pb: Vec<_> = b.tiles().flat_map(|t| t.points.to_vec()).collect();
    assert_eq!(pa, pb);
}

#[test]
fn symbol_keys_combine_identifier_and_type() {
    let tiling = Tiling::new(&params(4, 6, 2, false)).unwrap();
    assert_eq!(tiling.identifier(), "MK-2-3-6");
    assert_eq!(tiling.symbol_key(TileType::Center), "MK-2-3-6-CENTER");
    let used: std::collections::BTreeSet<TileType> = tiling.tiles().map(|t| t.tile_type).collect();
    assert!(used.contains(&TileType::Base));
    assert!(used.contains(&TileType::Left));
    assert!(used.contains(&TileType::Right));
}

#[test]
fn half_turn_tiling_is_point_symmetric() {
    // t=2 without offset: sector 1 is the half-turn of sector 0 about the origin.
    let tiling = Tiling::new(&TilingParams::default()).unwrap();
    let b = tiling.bounds().unwrap();
    assert!((b.min + b.max).norm() < 1e-6);
    for tile in tiling.tiles() {
        for p in tile.points {
            assert!(p.x >= b.min.x && p.x <= b.max.x);
            assert!(p.y >= b.min.y && p.y <= b.max.y);
        }
    }
}

#[test]
fn invalid_params_build_nothing() {
    let err = Tiling::new(&params(0, 5, 2, false)).unwrap_err();
    assert_eq!(err, ParameterError::NonPositiveM { m: 0 });
}
