//! Scene Graph Module
//!
//! Manages the avatar's node hierarchy:
//! - [`Node`]: a named scene node with parent/child links and a transform
//! - [`Transform`]: position, rotation and scale with cached matrices
//! - [`Scene`]: the node container and hierarchy operations
//! - [`transform_system`]: decoupled world-matrix propagation
//!
//! The scene is deliberately minimal: model loading, meshes, materials and
//! rendering belong to the embedding application. The animation core only
//! mutates node transforms and reads hierarchy structure.

pub mod node;
pub mod scene;
pub mod transform;
pub mod transform_system;

pub use node::Node;
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to a [`Node`] in a [`Scene`].
    pub struct NodeKey;
}
