//! Procedural cloud generation.
//!
//! A cloud is a clump of 3-5 randomly scaled and tilted cubes strung along
//! one axis; the sky is a ring of twenty clouds. Placing the clouds at a
//! uniform angular step guarantees an even distribution around the view
//! circle no matter the count, while randomized distance, depth and scale
//! keep the ring from reading as a tiled pattern. Every cube of every cloud
//! shares one geometry and one material instance; only transforms differ.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::sync::Arc;

use cgmath::{Rad, Vector3};
use rand::Rng;

use crate::data_structures::{
    geometry::{Geometry, Material},
    instance::Transform,
    scene_graph::{NodeId, SceneGraph, Shape},
};
use crate::objects::palette;

/// Number of clouds scattered on the sky ring.
pub const CLOUD_COUNT: usize = 20;

/// Fixed x spacing between consecutive blocks of one cloud.
const BLOCK_SPACING: f32 = 15.0;

/// Build a single cloud from shared cube geometry/material.
///
/// Block `i` sits at `x = i * 15` with its y/z jittered in `[0, 10)`, spun
/// randomly around y and z, and uniformly scaled into `[0.1, 1)`.
pub fn build_cloud(
    graph: &mut SceneGraph,
    rng: &mut impl Rng,
    cube: &Arc<Geometry>,
    material: &Arc<Material>,
) -> NodeId {
    let cloud = graph.insert(Transform::new(), None);

    let blocks = rng.random_range(3..=5);
    for i in 0..blocks {
        let mut transform = Transform::new();
        transform.position = Vector3::new(
            i as f32 * BLOCK_SPACING,
            rng.random_range(0.0..10.0),
            rng.random_range(0.0..10.0),
        );
        transform.rotation.y = Rad(rng.random_range(0.0..TAU));
        transform.rotation.z = Rad(rng.random_range(0.0..TAU));
        let scale = rng.random_range(0.1..1.0);
        transform.scale = [scale; 3].into();

        let block = graph.insert(
            transform,
            Some(Shape {
                geometry: Arc::clone(cube),
                material: Arc::clone(material),
            }),
        );
        graph.add_child(cloud, block);
    }
    cloud
}

/// Build the sky: [`CLOUD_COUNT`] clouds on a ring around the camera's view
/// circle.
///
/// Cloud `i` sits at polar angle `i * 2π / CLOUD_COUNT` with its distance
/// from the ring center in `[750, 950)`, its depth in `[-800, -400)` and a
/// uniform scale in `[1, 3)`. Each cloud is rolled by its angle plus π/2 so
/// its long axis follows the ring.
pub fn build_sky(graph: &mut SceneGraph, rng: &mut impl Rng) -> NodeId {
    let cube = Arc::new(Geometry::cuboid(20.0, 20.0, 20.0));
    let material = Arc::new(Material::opaque(palette::rgb(palette::WHITE)));

    let sky = graph.insert(Transform::from(Vector3::new(0.0, -600.0, 0.0)), None);

    let step_angle = TAU / CLOUD_COUNT as f32;
    for i in 0..CLOUD_COUNT {
        let cloud = build_cloud(graph, rng, &cube, &material);

        let angle = step_angle * i as f32;
        let distance = 750.0 + rng.random_range(0.0..200.0);

        let node = graph.node_mut(cloud);
        node.transform.position = Vector3::new(
            angle.cos() * distance,
            angle.sin() * distance,
            -400.0 - rng.random_range(0.0..400.0),
        );
        node.transform.rotation.z = Rad(angle + FRAC_PI_2);
        let scale = rng.random_range(1.0..3.0);
        node.transform.scale = [scale; 3].into();

        graph.add_child(sky, cloud);
    }
    sky
}
