use super::*;
use crate::foundation::core::Point;
use crate::foundation::rng::{Rng64, ScriptedRandom};
use crate::layout::discovery::{NodePosition, silhouette_points};

fn layout(n: usize) -> NodeLayout {
    NodeLayout {
        width: 1000.0,
        height: 800.0,
        hub: Point::new(500.0, 400.0),
        nodes: (0..n)
            .map(|i| NodePosition {
                id: format!("q{i}"),
                point: Point::new(100.0 * i as f64, 50.0),
            })
            .collect(),
        silhouettes: silhouette_points(1000.0, 800.0),
    }
}

fn never() -> ScriptedRandom {
    ScriptedRandom::new(vec![0.99])
}

#[test]
fn empty_layout_yields_only_silhouettes() {
    let g = GraphBuilder::default().build(&layout(0), Some("q0"), &[], &mut Rng64::new(1));
    let counts = GraphCounts::of(&g);
    assert_eq!(counts, GraphCounts { silhouette: 2, ..GraphCounts::default() });
    for c in &g {
        assert!(c.active);
        assert_eq!(c.progress, 1.0);
        assert_eq!(c.thickness, 1.0);
        assert_eq!(c.end, Point::new(500.0, 400.0));
    }
}

#[test]
fn single_node_has_no_mesh_or_beam() {
    let g = GraphBuilder::new(1.0).build(&layout(1), Some("q0"), &[], &mut Rng64::new(1));
    let counts = GraphCounts::of(&g);
    assert_eq!(counts.hub, 1);
    assert_eq!(counts.beam, 0);
    assert_eq!(counts.mesh, 0);
}

#[test]
fn one_hub_connection_per_node() {
    let g = GraphBuilder::default().build(&layout(5), None, &[], &mut never());
    let hubs: Vec<_> = g.iter().filter(|c| c.question_id().is_some()).collect();
    assert_eq!(hubs.len(), 5);
    for h in hubs {
        assert!(!h.active);
        assert_eq!(h.thickness, 0.5);
        assert_eq!(h.progress, 0.0);
    }
}

#[test]
fn active_node_fans_out_to_all_others() {
    let n = 6;
    let g = GraphBuilder::default().build(&layout(n), Some("q2"), &[], &mut never());
    let beams: Vec<_> = g.iter().filter(|c| c.is_beam()).collect();
    assert_eq!(beams.len(), n - 1);
    let origin = Point::new(200.0, 50.0);
    for b in &beams {
        assert_eq!(b.start, origin);
        assert_ne!(b.end, origin, "no beam to self");
        assert_eq!(b.beam_progress(), Some(0.0));
        assert_eq!(b.beam_origin(), Some("q2"));
    }

    let active_hub = g.iter().find(|c| c.question_id() == Some("q2")).unwrap();
    assert!(active_hub.active);
    assert_eq!(active_hub.thickness, 2.0);
    assert_eq!(active_hub.target_progress(), 1.0);
}

#[test]
fn unknown_active_id_produces_no_beams() {
    let g = GraphBuilder::default().build(&layout(4), Some("missing"), &[], &mut never());
    assert_eq!(GraphCounts::of(&g).beam, 0);
    assert!(g.iter().all(|c| c.question_id().is_none() || !c.active));
}

#[test]
fn mesh_links_are_faint_and_static() {
    let g = GraphBuilder::new(1.0).build(&layout(4), None, &[], &mut Rng64::new(3));
    let mesh: Vec<_> = g.iter().filter(|c| c.kind == ConnectionKind::Mesh).collect();
    assert_eq!(mesh.len(), 6);
    for m in mesh {
        assert!(!m.active);
        assert_eq!(m.progress, 1.0);
        assert_eq!(m.thickness, 0.3);
    }
}

#[test]
fn mesh_density_is_roughly_thirty_percent() {
    let builder = GraphBuilder::default();
    let lay = layout(10);
    let mut rng = Rng64::new(2024);
    let pairs_per_build = 45;
    let builds = 400;
    let total: usize = (0..builds)
        .map(|_| GraphCounts::of(&builder.build(&lay, None, &[], &mut rng)).mesh)
        .sum();
    let ratio = total as f64 / (pairs_per_build * builds) as f64;
    assert!((0.27..0.33).contains(&ratio), "ratio {ratio}");
}

#[test]
fn seeded_builds_are_reproducible() {
    let builder = GraphBuilder::default();
    let a = builder.build(&layout(8), Some("q1"), &[], &mut Rng64::new(9));
    let b = builder.build(&layout(8), Some("q1"), &[], &mut Rng64::new(9));
    assert_eq!(a, b);
}

#[test]
fn hub_progress_carries_over_between_builds() {
    let builder = GraphBuilder::default();
    let mut first = builder.build(&layout(3), Some("q0"), &[], &mut never());
    for c in first.iter_mut() {
        if c.question_id() == Some("q0") {
            c.progress = 0.6;
        }
    }
    let second = builder.build(&layout(3), Some("q1"), &first, &mut never());
    let q0 = second.iter().find(|c| c.question_id() == Some("q0")).unwrap();
    assert!(!q0.active);
    assert_eq!(q0.progress, 0.6);
    let q1 = second.iter().find(|c| c.question_id() == Some("q1")).unwrap();
    assert!(q1.active);
    assert_eq!(q1.progress, 0.0);
    assert!(second.iter().filter(|c| c.is_beam()).all(|b| b.beam_origin() == Some("q1")));
}
