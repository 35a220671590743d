//! The sea: a wide, semi-transparent cylinder lying on its side.
//!
//! The cylinder is generated along the y axis and rotated flat at
//! construction time, so the per-frame roll is a plain rotation around the
//! node's z axis. At 0.6 opacity it is the scene's only transparent
//! surface and must be drawn after the opaque batches.

use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use cgmath::{Rad, Vector3};

use crate::data_structures::{
    geometry::{Geometry, Material},
    instance::Transform,
    scene_graph::{NodeId, SceneGraph, Shape},
};
use crate::objects::palette;

pub fn build_sea(graph: &mut SceneGraph) -> NodeId {
    let mut geometry = Geometry::cylinder(600.0, 600.0, 800.0, 40, 10);
    geometry.rotate_x(Rad(-FRAC_PI_2));

    let material = Material {
        color: palette::rgb(palette::BLUE),
        opacity: 0.6,
    };

    // Pushed down so only the top arc of the cylinder breaks the horizon.
    let transform = Transform::from(Vector3::new(0.0, -600.0, 0.0));
    graph.insert(
        transform,
        Some(Shape {
            geometry: Arc::new(geometry),
            material: Arc::new(material),
        }),
    )
}
