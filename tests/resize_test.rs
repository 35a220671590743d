use aviator::Deg;
use aviator::PhysicalPosition;
use aviator::camera::Projection;
use aviator::input::pointer_to_ndc;
use aviator::scene::Scene;

mod common;
use common::{assert_close, seeded_rng};

#[test]
fn the_projection_tracks_the_viewport_aspect() {
    let mut projection = Projection::new(1920, 1080, Deg(60.0), 1.0, 10000.0);
    assert_close(projection.aspect(), 1920.0 / 1080.0, 1e-6);

    projection.resize(800, 600);
    assert_close(projection.aspect(), 800.0 / 600.0, 1e-6);
}

#[test]
fn pointer_mapping_uses_the_new_viewport_after_a_resize() {
    // Before the resize, x = 400 sits well left of center.
    let before = pointer_to_ndc(PhysicalPosition::new(400.0, 300.0), 1920, 1080);
    assert!(before.x < 0.0);

    // After shrinking to 800x600, the same pixel is dead center. A stale
    // width would report -0.58 instead.
    let after = pointer_to_ndc(PhysicalPosition::new(400.0, 300.0), 800, 600);
    assert_close(after.x, 0.0, 1e-6);
    assert_close(after.y, 0.0, 1e-6);
}

#[test]
fn a_centered_pointer_keeps_the_plane_centered_end_to_end() {
    let mut scene = Scene::with_rng(&mut seeded_rng());

    // Pointer at the center of a 1920x1080 viewport
    scene.animation.pointer = pointer_to_ndc(PhysicalPosition::new(960.0, 540.0), 1920, 1080);
    scene.update();
    let root = scene.graph.node(scene.airplane.root).transform.position;
    assert_eq!(root.x, 0.0);
    assert_eq!(root.y, 100.0);

    // Ten more frames without pointer movement: position holds, the
    // propeller has advanced by exactly ten steps.
    for _ in 0..10 {
        scene.update();
    }
    let root = scene.graph.node(scene.airplane.root).transform.position;
    assert_eq!(root.x, 0.0);
    assert_close(scene.animation.propeller_rotation, 11.0 * 0.3, 1e-5);

    // Viewport shrinks to 800x600; the next pointer event converts against
    // the new width, so x = 400 is still dead center.
    scene.animation.pointer = pointer_to_ndc(PhysicalPosition::new(400.0, 300.0), 800, 600);
    scene.update();
    let root = scene.graph.node(scene.airplane.root).transform.position;
    assert_eq!(root.x, 0.0);
    assert_eq!(root.y, 100.0);
}
