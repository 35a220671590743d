use aviator::Vector2;
use aviator::animation::{PROPELLER_SPIN_RATE, SEA_SPIN_RATE, SKY_SPIN_RATE};
use aviator::scene::Scene;

mod common;
use common::{assert_close, seeded_rng};

#[test]
fn an_untouched_pointer_parks_the_plane_at_band_center() {
    let mut scene = Scene::with_rng(&mut seeded_rng());
    scene.update();

    let root = &scene.graph.node(scene.airplane.root).transform;
    assert_eq!(root.position.x, 0.0);
    assert_eq!(root.position.y, 100.0);
    assert_eq!(root.position.z, 0.0);
}

#[test]
fn accumulators_advance_by_fixed_steps() {
    let mut scene = Scene::with_rng(&mut seeded_rng());
    for _ in 0..10 {
        scene.update();
    }

    assert_close(scene.animation.sea_rotation, 10.0 * SEA_SPIN_RATE, 1e-6);
    assert_close(scene.animation.sky_rotation, 10.0 * SKY_SPIN_RATE, 1e-6);
    assert_close(
        scene.animation.propeller_rotation,
        10.0 * PROPELLER_SPIN_RATE,
        1e-5,
    );

    // The accumulators land verbatim on the nodes they drive.
    assert_eq!(
        scene.graph.node(scene.sea).transform.rotation.z.0,
        scene.animation.sea_rotation
    );
    assert_eq!(
        scene.graph.node(scene.sky).transform.rotation.z.0,
        scene.animation.sky_rotation
    );
    assert_eq!(
        scene
            .graph
            .node(scene.airplane.propeller)
            .transform
            .rotation
            .x
            .0,
        scene.animation.propeller_rotation
    );
}

#[test]
fn a_still_pointer_leaves_the_plane_still() {
    let mut scene = Scene::with_rng(&mut seeded_rng());
    scene.animation.pointer = Vector2::new(0.3, -0.4);
    scene.update();
    let first = scene.graph.node(scene.airplane.root).transform.position;

    for _ in 0..9 {
        scene.update();
    }
    let last = scene.graph.node(scene.airplane.root).transform.position;

    // Identical pointer, identical position; meanwhile the propeller kept
    // spinning.
    assert_eq!(first, last);
    assert_close(scene.animation.propeller_rotation, 3.0, 1e-5);
}

#[test]
fn the_pointer_steers_the_plane_inside_its_bands() {
    let mut scene = Scene::with_rng(&mut seeded_rng());

    scene.animation.pointer = Vector2::new(1.0, 1.0);
    scene.update();
    let root = scene.graph.node(scene.airplane.root).transform.position;
    assert_eq!(root.x, 100.0);
    assert_eq!(root.y, 175.0);

    // Out-of-range input (a drag that left the viewport) pins to the band
    // edge instead of extrapolating.
    scene.animation.pointer = Vector2::new(-2.0, 0.5);
    scene.update();
    let root = scene.graph.node(scene.airplane.root).transform.position;
    assert_eq!(root.x, -100.0);
    assert_eq!(root.y, 137.5);
}

#[test]
fn only_the_propeller_rotates_inside_the_airplane() {
    let mut scene = Scene::with_rng(&mut seeded_rng());
    scene.animation.pointer = Vector2::new(0.7, 0.7);
    for _ in 0..25 {
        scene.update();
    }

    let root = &scene.graph.node(scene.airplane.root).transform;
    assert_eq!(root.rotation.x.0, 0.0);
    assert_eq!(root.rotation.y.0, 0.0);
    assert_eq!(root.rotation.z.0, 0.0);

    assert!(scene
        .graph
        .node(scene.airplane.propeller)
        .transform
        .rotation
        .x
        .0 > 0.0);
}

#[test]
fn world_transforms_are_current_after_update() {
    let mut scene = Scene::with_rng(&mut seeded_rng());
    scene.update();

    // Root at (0, 100, 0) scaled to 0.25; the propeller sits 50 units ahead
    // in local space, so 12.5 in world space.
    let world = scene.graph.world_transform(scene.airplane.propeller);
    assert_close(world.position.x, 12.5, 1e-4);
    assert_close(world.position.y, 100.0, 1e-4);
    assert_close(world.position.z, 0.0, 1e-4);
}
