//! The pilot: a purely decorative figure.
//!
//! Built as an independent hierarchy and never attached to the airplane;
//! callers that want a crewed plane can parent it themselves. The pilot is
//! static geometry: no per-frame animation drives any of its nodes.

use std::sync::Arc;

use cgmath::Vector3;

use crate::data_structures::{
    geometry::{Geometry, Material},
    instance::Transform,
    scene_graph::{NodeId, SceneGraph, Shape},
};
use crate::objects::palette;

/// Hairs on top of the head form a 3x4 grid of shared cubes.
const HAIR_ROWS: usize = 4;
const HAIR_COLS: usize = 3;
const HAIR_SPACING: f32 = 4.0;

pub fn build_pilot(graph: &mut SceneGraph) -> NodeId {
    let root = graph.insert(Transform::new(), None);

    let brown = Arc::new(Material::opaque(palette::rgb(palette::BROWN)));
    let pink = Arc::new(Material::opaque(palette::rgb(palette::PINK)));

    // Body
    let body = graph.insert(
        Transform::from(Vector3::new(2.0, -12.0, 0.0)),
        Some(Shape {
            geometry: Arc::new(Geometry::cuboid(15.0, 15.0, 15.0)),
            material: Arc::clone(&brown),
        }),
    );
    graph.add_child(root, body);

    // Face
    let face = graph.insert(
        Transform::new(),
        Some(Shape {
            geometry: Arc::new(Geometry::cuboid(10.0, 10.0, 10.0)),
            material: Arc::clone(&pink),
        }),
    );
    graph.add_child(root, face);

    // One hair cube, anchored to its bottom face so a future scale animation
    // would grow it out of the scalp. Shared by the whole grid.
    let mut hair_geometry = Geometry::cuboid(4.0, 4.0, 4.0);
    hair_geometry.translate(Vector3::new(0.0, 2.0, 0.0));
    let hair_geometry = Arc::new(hair_geometry);

    let hairs = graph.insert(Transform::from(Vector3::new(-5.0, 5.0, 0.0)), None);

    let start = -(HAIR_SPACING);
    for i in 0..HAIR_ROWS * HAIR_COLS {
        let col = i % HAIR_COLS;
        let row = i / HAIR_COLS;
        let hair = graph.insert(
            Transform::from(Vector3::new(
                start + row as f32 * HAIR_SPACING,
                0.0,
                start + col as f32 * HAIR_SPACING,
            )),
            Some(Shape {
                geometry: Arc::clone(&hair_geometry),
                material: Arc::clone(&brown),
            }),
        );
        graph.add_child(hairs, hair);
    }

    // Side hair blocks, anchored to their inner edge
    let mut side_geometry = Geometry::cuboid(12.0, 4.0, 2.0);
    side_geometry.translate(Vector3::new(-6.0, 0.0, 0.0));
    let side_geometry = Arc::new(side_geometry);
    for z in [6.0, -6.0] {
        let side = graph.insert(
            Transform::from(Vector3::new(8.0, -2.0, z)),
            Some(Shape {
                geometry: Arc::clone(&side_geometry),
                material: Arc::clone(&brown),
            }),
        );
        graph.add_child(hairs, side);
    }
    graph.add_child(root, hairs);

    root
}
