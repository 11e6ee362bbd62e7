//! Scene Graph Tests
//!
//! Tests for:
//! - Node hierarchy construction (builder, attach/re-parent)
//! - Transform dirty checking and Euler-based local matrices
//! - World matrix propagation through the hierarchy
//! - look_at orientation

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use marionette::scene::{Node, Scene};

const EPSILON: f32 = 1e-4;

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

// ============================================================================
// Hierarchy construction
// ============================================================================

#[test]
fn builder_creates_root_and_children() {
    let mut scene = Scene::new();
    let root = scene.build_node("root").with_position(0.0, 1.0, 0.0).build();
    let head = scene.build_node("head").with_parent(root).build();

    assert_eq!(scene.root_nodes, vec![root]);
    assert_eq!(scene.get_node(root).unwrap().children(), &[head]);
    assert_eq!(scene.get_node(head).unwrap().parent(), Some(root));
    assert_eq!(scene.get_node(head).unwrap().name, "head");
}

#[test]
fn attach_reparents_from_root_list() {
    let mut scene = Scene::new();
    let a = scene.add_node(Node::new("a"));
    let b = scene.add_node(Node::new("b"));

    scene.attach(b, a);

    assert_eq!(scene.root_nodes, vec![a]);
    assert_eq!(scene.get_node(a).unwrap().children(), &[b]);
    assert_eq!(scene.get_node(b).unwrap().parent(), Some(a));
}

#[test]
fn attach_to_self_is_rejected() {
    let mut scene = Scene::new();
    let a = scene.add_node(Node::new("a"));
    scene.attach(a, a);
    // Still a root, no self-reference
    assert_eq!(scene.root_nodes, vec![a]);
    assert!(scene.get_node(a).unwrap().children().is_empty());
}

// ============================================================================
// Transform: dirty checking & matrices
// ============================================================================

#[test]
fn local_matrix_updates_only_when_dirty() {
    let mut node = Node::new("n");

    // Initial build is forced
    assert!(node.transform.update_local_matrix());
    // Nothing changed
    assert!(!node.transform.update_local_matrix());

    node.transform.position.x = 2.0;
    assert!(node.transform.update_local_matrix());
    assert!(!node.transform.update_local_matrix());

    node.transform.mark_dirty();
    assert!(node.transform.update_local_matrix());
}

#[test]
fn euler_rotation_builds_expected_matrix() {
    let mut node = Node::new("n");
    node.transform.rotation.y = FRAC_PI_2;
    node.transform.update_local_matrix();

    // +90° yaw carries +X onto -Z
    let rotated = node.transform.local_matrix().transform_point3(Vec3::X);
    assert!(
        approx_vec(rotated, Vec3::new(0.0, 0.0, -1.0)),
        "got {rotated:?}"
    );
}

#[test]
fn world_matrix_chains_through_parents() {
    let mut scene = Scene::new();
    let root = scene.build_node("root").with_position(1.0, 0.0, 0.0).build();
    let child = scene
        .build_node("child")
        .with_position(0.0, 1.0, 0.0)
        .with_parent(root)
        .build();

    scene.update_matrix_world();

    let world = scene.get_node(child).unwrap().world_matrix().translation;
    assert!(approx_vec(world.into(), Vec3::new(1.0, 1.0, 0.0)), "got {world:?}");
}

#[test]
fn world_matrix_follows_animated_parent() {
    let mut scene = Scene::new();
    let root = scene.build_node("root").build();
    let child = scene
        .build_node("child")
        .with_position(0.0, 0.0, 1.0)
        .with_parent(root)
        .build();

    scene.update_matrix_world();

    // Re-pose the parent, as an animator would
    scene.get_node_mut(root).unwrap().transform.rotation.y = FRAC_PI_2;
    scene.update_matrix_world();

    let world = scene.get_node(child).unwrap().world_matrix().translation;
    // +90° yaw carries the child's local +Z onto world +X
    assert!(approx_vec(world.into(), Vec3::new(1.0, 0.0, 0.0)), "got {world:?}");
}

// ============================================================================
// look_at
// ============================================================================

#[test]
fn look_at_points_negative_z_at_target() {
    let mut node = Node::new("head");
    node.transform.look_at(Vec3::new(3.0, 0.0, 0.0), Vec3::Y);

    let forward = node.transform.rotation_quat() * Vec3::NEG_Z;
    assert!(approx_vec(forward, Vec3::X), "got {forward:?}");
}

#[test]
fn look_at_straight_ahead_is_identity() {
    let mut node = Node::new("head");
    node.transform.look_at(Vec3::new(0.0, 0.0, -5.0), Vec3::Y);

    let forward = node.transform.rotation_quat() * Vec3::NEG_Z;
    assert!(approx_vec(forward, Vec3::NEG_Z), "got {forward:?}");
}

#[test]
fn look_at_degenerate_target_keeps_rotation() {
    let mut node = Node::new("head");
    node.transform.rotation.y = 0.5;
    // Target parallel to up: no valid basis, rotation untouched
    node.transform.look_at(Vec3::new(0.0, 10.0, 0.0), Vec3::Y);
    assert!((node.transform.rotation.y - 0.5).abs() < EPSILON);
}
