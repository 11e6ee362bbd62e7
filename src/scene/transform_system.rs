//! Transform System
//!
//! World-matrix propagation for the scene hierarchy, decoupled from `Scene`
//! so it only borrows the node arena and root list.

use glam::Affine3A;
use slotmap::SlotMap;

use crate::scene::NodeKey;
use crate::scene::node::Node;

/// Updates world matrices for the whole hierarchy.
///
/// Uses an explicit stack rather than recursion so deep hierarchies cannot
/// overflow the call stack. A node's world matrix is only rewritten when its
/// own local matrix changed or an ancestor's did.
pub fn update_hierarchy(nodes: &mut SlotMap<NodeKey, Node>, roots: &[NodeKey]) {
    // Work stack: (node, parent world matrix, parent changed)
    let mut stack: Vec<(NodeKey, Affine3A, bool)> = Vec::with_capacity(64);

    for &root in roots.iter().rev() {
        stack.push((root, Affine3A::IDENTITY, false));
    }

    while let Some((key, parent_world, parent_changed)) = stack.pop() {
        let Some(node) = nodes.get_mut(key) else {
            continue;
        };

        let local_changed = node.transform.update_local_matrix();
        let world_needs_update = local_changed || parent_changed;

        if world_needs_update {
            let new_world = parent_world * *node.transform.local_matrix();
            node.transform.set_world_matrix(new_world);
        }

        let current_world = node.transform.world_matrix;
        let child_count = node.children.len();

        // Push children in reverse to preserve traversal order.
        for i in (0..child_count).rev() {
            if let Some(node) = nodes.get(key)
                && let Some(&child) = node.children.get(i)
            {
                stack.push((child, current_world, world_needs_update));
            }
        }
    }
}

/// Updates only one node's local matrix (no hierarchy propagation).
#[inline]
pub fn update_single_node_local(node: &mut Node) -> bool {
    node.transform.update_local_matrix()
}
