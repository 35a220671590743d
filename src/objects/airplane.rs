//! The airplane: a hand-authored low-poly hierarchy.
//!
//! All dimensions are fixed literals; nothing here is randomized and,
//! except for the propeller, nothing is mutated after construction. The
//! cockpit silhouette comes from tapering the rear corners of a plain box
//! with a declarative edit list.

use std::sync::Arc;

use cgmath::Vector3;

use crate::data_structures::{
    geometry::{Axis, Geometry, Material, VertexEdit},
    instance::Transform,
    scene_graph::{NodeId, SceneGraph, Shape},
};
use crate::objects::palette;

/// Handles into the airplane hierarchy.
///
/// The frame loop keeps `propeller` so it can spin the node every frame
/// without walking the tree. Invariant: the root's rotation is never
/// touched; only its position and the propeller's rotation change.
pub struct Airplane {
    pub root: NodeId,
    pub propeller: NodeId,
}

/// Pulls the rear (-x) corners of the cockpit box toward the tail: the top
/// edge drops, the bottom edge lifts, and both pinch inward in z.
const COCKPIT_TAPER: [VertexEdit; 8] = [
    VertexEdit { index: 4, axis: Axis::Y, delta: -10.0 },
    VertexEdit { index: 4, axis: Axis::Z, delta: 20.0 },
    VertexEdit { index: 5, axis: Axis::Y, delta: -10.0 },
    VertexEdit { index: 5, axis: Axis::Z, delta: -20.0 },
    VertexEdit { index: 6, axis: Axis::Y, delta: 30.0 },
    VertexEdit { index: 6, axis: Axis::Z, delta: 20.0 },
    VertexEdit { index: 7, axis: Axis::Y, delta: 30.0 },
    VertexEdit { index: 7, axis: Axis::Z, delta: -20.0 },
];

pub fn build_airplane(graph: &mut SceneGraph) -> Airplane {
    let root = graph.insert(Transform::new(), None);

    let red = Arc::new(Material::opaque(palette::rgb(palette::RED)));
    let white = Arc::new(Material::opaque(palette::rgb(palette::WHITE)));
    let brown = Arc::new(Material::opaque(palette::rgb(palette::BROWN)));
    let brown_dark = Arc::new(Material::opaque(palette::rgb(palette::BROWN_DARK)));

    // Cockpit
    let mut cockpit_geometry = Geometry::cuboid(60.0, 50.0, 50.0);
    cockpit_geometry.displace(&COCKPIT_TAPER);
    let cockpit = graph.insert(
        Transform::new(),
        Some(Shape {
            geometry: Arc::new(cockpit_geometry),
            material: Arc::clone(&red),
        }),
    );
    graph.add_child(root, cockpit);

    // Engine
    let engine = graph.insert(
        Transform::from(Vector3::new(40.0, 0.0, 0.0)),
        Some(Shape {
            geometry: Arc::new(Geometry::cuboid(20.0, 50.0, 50.0)),
            material: Arc::clone(&white),
        }),
    );
    graph.add_child(root, engine);

    // Tail
    let tail = graph.insert(
        Transform::new(),
        Some(Shape {
            geometry: Arc::new(Geometry::cuboid(15.0, 20.0, 5.0)),
            material: Arc::clone(&red),
        }),
    );
    graph.add_child(root, tail);

    // Wing
    let wing = graph.insert(
        Transform::new(),
        Some(Shape {
            geometry: Arc::new(Geometry::cuboid(40.0, 8.0, 150.0)),
            material: Arc::clone(&red),
        }),
    );
    graph.add_child(root, wing);

    // Propeller hub, the one sub-node the frame loop spins
    let propeller = graph.insert(
        Transform::from(Vector3::new(50.0, 0.0, 0.0)),
        Some(Shape {
            geometry: Arc::new(Geometry::cuboid(20.0, 10.0, 10.0)),
            material: Arc::clone(&brown),
        }),
    );

    let blade = graph.insert(
        Transform::from(Vector3::new(8.0, 0.0, 0.0)),
        Some(Shape {
            geometry: Arc::new(Geometry::cuboid(1.0, 100.0, 20.0)),
            material: Arc::clone(&brown_dark),
        }),
    );
    graph.add_child(propeller, blade);
    graph.add_child(root, propeller);

    Airplane { root, propeller }
}
