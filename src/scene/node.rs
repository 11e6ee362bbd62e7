use crate::scene::NodeKey;
use crate::scene::transform::Transform;
use glam::Affine3A;

/// A named scene node.
///
/// # Design Principles
///
/// - Only keeps data that must be traversed every frame (name, hierarchy and
///   transform)
/// - Nodes are owned by a [`Scene`](crate::scene::Scene) arena; the animation
///   core addresses them through [`NodeKey`] handles and never creates or
///   destroys them during a tick
///
/// # Hierarchy
///
/// Nodes form a tree through parent-child relationships:
/// - `parent`: optional handle to the parent node (None for root nodes)
/// - `children`: list of child node handles
#[derive(Debug, Clone)]
pub struct Node {
    /// Bone/node name as authored in the source model.
    pub name: String,

    // === Core Hierarchy ===
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,

    // === Core Spatial Data ===
    /// Transform component (hot data accessed every frame)
    pub transform: Transform,

    // === Core State ===
    /// Visibility flag for the renderer
    pub visible: bool,
}

impl Node {
    /// Creates a new node with default transform and visibility.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            visible: true,
        }
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Returns a reference to the world transformation matrix.
    ///
    /// Updated by [`Scene::update_matrix_world`](crate::scene::Scene::update_matrix_world)
    /// after each tick.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}
