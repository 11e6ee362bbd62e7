use rustc_hash::FxHashMap;

use crate::scene::{NodeKey, Scene};

/// Name → node lookup for a loaded skeleton.
///
/// Built once when a model finishes loading by flattening its node hierarchy;
/// immutable afterwards. A new model means a new registry; there is no
/// removal.
///
/// Duplicate names in the source hierarchy are an authoring anomaly, not an
/// error: the build warns and keeps the last node seen under that name.
#[derive(Debug, Default)]
pub struct BoneRegistry {
    bones: FxHashMap<String, NodeKey>,
}

impl BoneRegistry {
    /// Flattens the hierarchy under `root` (inclusive) into a name lookup.
    #[must_use]
    pub fn build(scene: &Scene, root: NodeKey) -> Self {
        let mut bones = FxHashMap::default();
        let mut stack = vec![root];

        while let Some(key) = stack.pop() {
            let Some(node) = scene.get_node(key) else {
                continue;
            };

            if bones.contains_key(&node.name) {
                log::warn!("Duplicate bone name: '{}'", node.name);
            }
            bones.insert(node.name.clone(), key);

            // Push children in reverse for depth-first, in-order traversal.
            for &child in node.children().iter().rev() {
                stack.push(child);
            }
        }

        Self { bones }
    }

    /// Looks up a bone by name.
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<NodeKey> {
        self.bones.get(name).copied()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bones.contains_key(name)
    }

    /// Number of distinct bone names registered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }
}
