use std::f32::consts::FRAC_PI_2;

use aviator::InnerSpace;
use aviator::Rad;
use aviator::Vector3;
use aviator::data_structures::geometry::{Axis, Geometry, VertexEdit};

mod common;
use common::assert_close;

#[test]
fn a_cuboid_has_eight_corners_and_twelve_triangles() {
    let cuboid = Geometry::cuboid(60.0, 50.0, 50.0);
    assert_eq!(cuboid.positions.len(), 8);
    assert_eq!(cuboid.triangles.len(), 12);

    // Documented corner order: 0-3 on the +x face, 4-7 on the -x face.
    assert_eq!(cuboid.positions[0], Vector3::new(30.0, 25.0, 25.0));
    assert_eq!(cuboid.positions[3], Vector3::new(30.0, -25.0, -25.0));
    assert_eq!(cuboid.positions[4], Vector3::new(-30.0, 25.0, -25.0));
    assert_eq!(cuboid.positions[7], Vector3::new(-30.0, -25.0, 25.0));
}

#[test]
fn flat_shading_expands_to_per_face_vertices() {
    let cuboid = Geometry::cuboid(20.0, 20.0, 20.0);
    let vertices = cuboid.flat_shaded_vertices();
    assert_eq!(vertices.len(), 36);

    for vertex in &vertices {
        let normal = Vector3::from(vertex.normal);
        assert_close(normal.magnitude(), 1.0, 1e-5);
        // For an axis-aligned box every face normal is a unit axis.
        let dominant = normal.x.abs().max(normal.y.abs()).max(normal.z.abs());
        assert_close(dominant, 1.0, 1e-5);
    }
}

#[test]
fn outward_normals_point_away_from_the_center() {
    let cuboid = Geometry::cuboid(2.0, 2.0, 2.0);
    for (vertex, normal) in cuboid
        .flat_shaded_vertices()
        .iter()
        .map(|v| (Vector3::from(v.position), Vector3::from(v.normal)))
    {
        assert!(
            vertex.dot(normal) > 0.0,
            "inward-facing normal {normal:?} at {vertex:?}"
        );
    }
}

#[test]
fn vertex_edits_displace_single_corners() {
    let mut cuboid = Geometry::cuboid(10.0, 10.0, 10.0);
    cuboid.displace(&[
        VertexEdit { index: 4, axis: Axis::Y, delta: -2.0 },
        VertexEdit { index: 4, axis: Axis::Z, delta: 3.0 },
    ]);
    assert_eq!(cuboid.positions[4], Vector3::new(-5.0, 3.0, -2.0));
    // Other corners untouched
    assert_eq!(cuboid.positions[0], Vector3::new(5.0, 5.0, 5.0));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn out_of_range_vertex_edits_are_construction_errors() {
    let mut cuboid = Geometry::cuboid(10.0, 10.0, 10.0);
    cuboid.displace(&[VertexEdit { index: 8, axis: Axis::X, delta: 1.0 }]);
}

#[test]
fn cylinders_carry_the_requested_tessellation() {
    let cylinder = Geometry::cylinder(600.0, 600.0, 800.0, 40, 10);
    // 11 rings of 40 points plus the two cap centers
    assert_eq!(cylinder.positions.len(), 40 * 11 + 2);
    // 2 triangles per side quad plus a fan triangle per cap segment
    assert_eq!(cylinder.triangles.len(), 2 * 40 * 10 + 2 * 40);

    for position in &cylinder.positions {
        let radius = (position.x * position.x + position.z * position.z).sqrt();
        assert!(radius <= 600.0 + 1e-3);
        assert!(position.y.abs() <= 400.0 + 1e-3);
    }
}

#[test]
fn rotating_a_geometry_moves_its_corners() {
    let mut cuboid = Geometry::cuboid(2.0, 4.0, 6.0);
    cuboid.rotate_x(Rad(-FRAC_PI_2));
    // (1, 2, 3) rotated by -90 degrees around x lands on (1, 3, -2)
    let corner = cuboid.positions[0];
    assert_close(corner.x, 1.0, 1e-5);
    assert_close(corner.y, 3.0, 1e-5);
    assert_close(corner.z, -2.0, 1e-5);
}

#[test]
fn translation_reanchors_a_geometry() {
    let mut cuboid = Geometry::cuboid(4.0, 4.0, 4.0);
    cuboid.translate(Vector3::new(0.0, 2.0, 0.0));
    let min_y = cuboid
        .positions
        .iter()
        .map(|corner| corner.y)
        .fold(f32::INFINITY, f32::min);
    assert_eq!(min_y, 0.0);
}
