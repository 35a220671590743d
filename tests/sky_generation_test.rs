use std::f32::consts::{FRAC_PI_2, TAU};
use std::sync::Arc;

use aviator::data_structures::scene_graph::SceneGraph;
use aviator::objects::sky::{CLOUD_COUNT, build_sky};

mod common;
use common::{assert_close, seeded_rng};

#[test]
fn the_sky_always_holds_twenty_clouds() {
    let mut rng = seeded_rng();
    let mut graph = SceneGraph::new();
    let sky = build_sky(&mut graph, &mut rng);
    assert_eq!(graph.children(sky).len(), CLOUD_COUNT);
}

#[test]
fn clouds_sit_at_uniform_polar_angles() {
    let mut rng = seeded_rng();
    let mut graph = SceneGraph::new();
    let sky = build_sky(&mut graph, &mut rng);

    let step_angle = TAU / CLOUD_COUNT as f32;
    for (i, &cloud) in graph.children(sky).iter().enumerate() {
        let transform = &graph.node(cloud).transform;
        let position = transform.position;

        let mut angle = position.y.atan2(position.x);
        if angle < 0.0 {
            angle += TAU;
        }
        let mut expected = step_angle * i as f32;
        if expected >= TAU {
            expected -= TAU;
        }
        assert_close(angle, expected, 1e-3);

        let distance = (position.x * position.x + position.y * position.y).sqrt();
        assert!(
            (750.0 - 1e-2..950.0 + 1e-2).contains(&distance),
            "cloud {i} at ring distance {distance}"
        );
        assert!(
            position.z <= -400.0 && position.z > -800.0,
            "cloud {i} at depth {}",
            position.z
        );

        assert_close(transform.rotation.z.0, step_angle * i as f32 + FRAC_PI_2, 1e-5);

        let scale = transform.scale;
        assert_eq!(scale.x, scale.y);
        assert_eq!(scale.y, scale.z);
        assert!((1.0..3.0).contains(&scale.x), "cloud {i} scale {}", scale.x);
    }
}

#[test]
fn cloud_blocks_follow_the_spacing_chain() {
    let mut rng = seeded_rng();
    let mut graph = SceneGraph::new();
    let sky = build_sky(&mut graph, &mut rng);

    for &cloud in graph.children(sky) {
        let blocks = graph.children(cloud);
        assert!(
            (3..=5).contains(&blocks.len()),
            "cloud with {} blocks",
            blocks.len()
        );
        for (i, &block) in blocks.iter().enumerate() {
            let transform = &graph.node(block).transform;
            assert_eq!(transform.position.x, i as f32 * 15.0);
            assert!((0.0..10.0).contains(&transform.position.y));
            assert!((0.0..10.0).contains(&transform.position.z));
            assert!((0.0..TAU).contains(&transform.rotation.y.0));
            assert!((0.0..TAU).contains(&transform.rotation.z.0));
            let scale = transform.scale;
            assert_eq!(scale.x, scale.y);
            assert_eq!(scale.y, scale.z);
            assert!((0.1..1.0).contains(&scale.x));
        }
    }
}

#[test]
fn every_block_shares_one_geometry_and_material() {
    let mut rng = seeded_rng();
    let mut graph = SceneGraph::new();
    let sky = build_sky(&mut graph, &mut rng);

    let mut reference = None;
    for &cloud in graph.children(sky) {
        for &block in graph.children(cloud) {
            let shape = graph.node(block).shape.as_ref().expect("block without shape");
            match &reference {
                None => reference = Some((Arc::clone(&shape.geometry), Arc::clone(&shape.material))),
                Some((geometry, material)) => {
                    assert!(Arc::ptr_eq(geometry, &shape.geometry));
                    assert!(Arc::ptr_eq(material, &shape.material));
                }
            }
        }
    }
    assert!(reference.is_some());
}

#[test]
fn generation_varies_between_runs_of_the_rng() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let mut first_rng = StdRng::seed_from_u64(1);
    let mut second_rng = StdRng::seed_from_u64(2);
    let mut first_graph = SceneGraph::new();
    let mut second_graph = SceneGraph::new();
    let first_sky = build_sky(&mut first_graph, &mut first_rng);
    let second_sky = build_sky(&mut second_graph, &mut second_rng);

    let first_cloud = first_graph.children(first_sky)[0];
    let second_cloud = second_graph.children(second_sky)[0];
    let first_z = first_graph.node(first_cloud).transform.position.z;
    let second_z = second_graph.node(second_cloud).transform.position.z;
    assert_ne!(first_z, second_z);
}
