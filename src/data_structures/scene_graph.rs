//! Scene graph and hierarchical scene organization.
//!
//! The whole scene is one strict tree of [`TransformNode`]s stored in an
//! arena owned by [`SceneGraph`]. Handles ([`NodeId`]) let the frame loop
//! mutate deep nodes (the propeller) without walking the tree. Each node has
//! exactly one owner: `add_child` rejects a node that is already parented,
//! and there is no re-parenting API, so cycles and shared children are not
//! constructible through the public surface.

use std::sync::Arc;

use crate::data_structures::{
    geometry::{Geometry, Material},
    instance::{Instance, Transform},
};

/// Handle to a node inside a [`SceneGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Renderable payload of a node: shared, read-only geometry and material.
///
/// Many nodes reference the same `Arc`s (every cloud block shares one cube
/// and one material); nothing mutates them after construction. The renderer
/// batches nodes by `Arc` identity into instanced draws.
#[derive(Clone)]
pub struct Shape {
    pub geometry: Arc<Geometry>,
    pub material: Arc<Material>,
}

/// A positioned, rotated, scaled object that may own child nodes.
pub struct TransformNode {
    /// Local transform, mutated in place by the animation step.
    pub transform: Transform,
    /// World transform cached by [`SceneGraph::update_world_transforms`].
    world: Instance,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    pub shape: Option<Shape>,
}

/// Arena-backed strict tree of [`TransformNode`]s.
pub struct SceneGraph {
    nodes: Vec<TransformNode>,
    roots: Vec<NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Insert a new node. It starts out as a root until parented via
    /// [`add_child`](Self::add_child).
    pub fn insert(&mut self, transform: Transform, shape: Option<Shape>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TransformNode {
            world: transform.to_instance(),
            transform,
            parent: None,
            children: Vec::new(),
            shape,
        });
        self.roots.push(id);
        id
    }

    /// Append `child` to `parent`'s ordered child sequence, transferring
    /// ownership.
    ///
    /// Panics if `child` already has a parent or if the edge would close a
    /// cycle. Both are programming errors in scene construction, not
    /// recoverable runtime conditions.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        assert!(
            self.nodes[child.0].parent.is_none(),
            "node {child:?} is already owned by {:?}",
            self.nodes[child.0].parent
        );
        let mut ancestor = Some(parent);
        while let Some(id) = ancestor {
            assert!(id != child, "adding {child:?} under {parent:?} would close a cycle");
            ancestor = self.nodes[id.0].parent;
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        self.roots.retain(|&root| root != child);
    }

    pub fn node(&self, id: NodeId) -> &TransformNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut TransformNode {
        &mut self.nodes[id.0]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// World transform as of the last [`update_world_transforms`](Self::update_world_transforms).
    pub fn world_transform(&self, id: NodeId) -> &Instance {
        &self.nodes[id.0].world
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Recompute every node's cached world transform from the roots down.
    ///
    /// A node's world transform is its parent's world transform composed
    /// with its own local one (scale, then rotation, then translation).
    pub fn update_world_transforms(&mut self) {
        let mut stack: Vec<(NodeId, Instance)> = self
            .roots
            .iter()
            .map(|&root| (root, Instance::new()))
            .collect();
        while let Some((id, parent_world)) = stack.pop() {
            let node = &mut self.nodes[id.0];
            let world = &parent_world * &node.transform.to_instance();
            node.world = world.clone();
            for &child in &node.children {
                stack.push((child, world.clone()));
            }
        }
    }

    /// Visit every node depth-first, children in insertion order.
    ///
    /// This is the draw-order traversal: insertion order decides which
    /// transparent surface renders first.
    pub fn visit(&self, mut visitor: impl FnMut(NodeId, &TransformNode)) {
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            visitor(id, node);
            stack.extend(node.children.iter().rev());
        }
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}
