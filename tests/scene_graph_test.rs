use std::f32::consts::FRAC_PI_2;

use aviator::Rad;
use aviator::Vector3;
use aviator::data_structures::instance::Transform;
use aviator::data_structures::scene_graph::SceneGraph;

mod common;
use common::assert_close;

#[test]
fn children_keep_insertion_order() {
    let mut graph = SceneGraph::new();
    let parent = graph.insert(Transform::new(), None);
    let first = graph.insert(Transform::new(), None);
    let second = graph.insert(Transform::new(), None);
    let third = graph.insert(Transform::new(), None);
    graph.add_child(parent, first);
    graph.add_child(parent, second);
    graph.add_child(parent, third);

    assert_eq!(graph.children(parent), &[first, second, third]);
    assert_eq!(graph.parent(first), Some(parent));
    assert_eq!(graph.parent(parent), None);
}

#[test]
#[should_panic(expected = "already owned")]
fn a_node_cannot_have_two_parents() {
    let mut graph = SceneGraph::new();
    let left = graph.insert(Transform::new(), None);
    let right = graph.insert(Transform::new(), None);
    let child = graph.insert(Transform::new(), None);
    graph.add_child(left, child);
    graph.add_child(right, child);
}

#[test]
#[should_panic(expected = "cycle")]
fn parenting_an_ancestor_is_rejected() {
    let mut graph = SceneGraph::new();
    let a = graph.insert(Transform::new(), None);
    let b = graph.insert(Transform::new(), None);
    graph.add_child(a, b);
    graph.add_child(b, a);
}

#[test]
fn world_transforms_compose_parent_to_child() {
    let mut graph = SceneGraph::new();
    let mut parent_transform = Transform::from(Vector3::new(10.0, 0.0, 0.0));
    parent_transform.scale = [2.0; 3].into();
    let parent = graph.insert(parent_transform, None);
    let child = graph.insert(Transform::from(Vector3::new(1.0, 2.0, 3.0)), None);
    graph.add_child(parent, child);

    graph.update_world_transforms();

    let world = graph.world_transform(child);
    assert_close(world.position.x, 12.0, 1e-5);
    assert_close(world.position.y, 4.0, 1e-5);
    assert_close(world.position.z, 6.0, 1e-5);
    assert_close(world.scale.x, 2.0, 1e-6);
}

#[test]
fn composition_scales_then_rotates_then_translates() {
    let mut graph = SceneGraph::new();
    let mut parent_transform = Transform::from(Vector3::new(5.0, 0.0, 0.0));
    parent_transform.scale = [2.0; 3].into();
    parent_transform.rotation.z = Rad(FRAC_PI_2);
    let parent = graph.insert(parent_transform, None);
    let child = graph.insert(Transform::from(Vector3::new(1.0, 0.0, 0.0)), None);
    graph.add_child(parent, child);

    graph.update_world_transforms();

    // The child offset is scaled to 2, rotated onto +y, then shifted by the
    // parent position.
    let world = graph.world_transform(child);
    assert_close(world.position.x, 5.0, 1e-5);
    assert_close(world.position.y, 2.0, 1e-5);
    assert_close(world.position.z, 0.0, 1e-5);
}

#[test]
fn grandchildren_inherit_the_whole_chain() {
    let mut graph = SceneGraph::new();
    let root = graph.insert(Transform::from(Vector3::new(0.0, 100.0, 0.0)), None);
    let middle = graph.insert(Transform::from(Vector3::new(50.0, 0.0, 0.0)), None);
    let leaf = graph.insert(Transform::from(Vector3::new(8.0, 0.0, 0.0)), None);
    graph.add_child(root, middle);
    graph.add_child(middle, leaf);

    graph.update_world_transforms();

    let world = graph.world_transform(leaf);
    assert_close(world.position.x, 58.0, 1e-5);
    assert_close(world.position.y, 100.0, 1e-5);
}
