use std::sync::Arc;

use crate::animation::context::FrameContext;
use crate::animation::registry::BoneRegistry;
use crate::animation::state::InteractionState;
use crate::errors::{MarionetteError, Result};
use crate::scene::{Node, Scene};

/// Per-bone pose function: mutates one node's local transform for this tick.
pub type BoneAnimator = Box<dyn FnMut(&mut Node, &FrameContext)>;

/// Shared context-derivation function, run once per tick before any bone
/// animator. May mutate the interaction state and returns the enriched
/// context every animator of this animation will see.
pub type PreFrameFn = Box<dyn FnMut(&mut InteractionState, FrameContext) -> FrameContext>;

/// A named animation preset: an ordered set of per-bone pose functions plus
/// an optional shared pre-frame function.
///
/// Animations are declarative data records: constructed once during setup,
/// immutable afterwards. Every referenced bone is validated against the
/// [`BoneRegistry`] at registration time; an unknown name is a configuration
/// error and aborts construction rather than being skipped at runtime.
///
/// Animators run in registration order. Registering a second animator under
/// an already-used bone name replaces the first in place, keeping its
/// original position in the order.
pub struct Animation {
    name: String,
    registry: Arc<BoneRegistry>,
    pre_frame: Option<PreFrameFn>,
    animators: Vec<(String, BoneAnimator)>,
}

impl Animation {
    #[must_use]
    pub fn new(name: impl Into<String>, registry: Arc<BoneRegistry>) -> Self {
        Self {
            name: name.into(),
            registry,
            pre_frame: None,
            animators: Vec::new(),
        }
    }

    /// Sets the shared pre-frame function (chainable).
    #[must_use]
    pub fn with_pre_frame(
        mut self,
        f: impl FnMut(&mut InteractionState, FrameContext) -> FrameContext + 'static,
    ) -> Self {
        self.pre_frame = Some(Box::new(f));
        self
    }

    /// Registers a bone animator (chainable form).
    pub fn with_bone_animator(
        mut self,
        bone: &str,
        f: impl FnMut(&mut Node, &FrameContext) + 'static,
    ) -> Result<Self> {
        self.add_bone_animator(bone, f)?;
        Ok(self)
    }

    /// Registers a bone animator.
    ///
    /// Fails with [`MarionetteError::UnknownBone`] if `bone` is not in the
    /// registry.
    pub fn add_bone_animator(
        &mut self,
        bone: &str,
        f: impl FnMut(&mut Node, &FrameContext) + 'static,
    ) -> Result<&mut Self> {
        if !self.registry.contains(bone) {
            return Err(MarionetteError::UnknownBone(bone.to_string()));
        }

        if let Some(slot) = self.animators.iter_mut().find(|(name, _)| name == bone) {
            slot.1 = Box::new(f);
        } else {
            self.animators.push((bone.to_string(), Box::new(f)));
        }
        Ok(self)
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of bones this animation poses.
    #[must_use]
    pub fn animator_count(&self) -> usize {
        self.animators.len()
    }

    /// Names of the animated bones, in execution order.
    pub fn animated_bones(&self) -> impl Iterator<Item = &str> {
        self.animators.iter().map(|(name, _)| name.as_str())
    }

    /// Runs one tick: pre-frame function first, then every bone animator in
    /// registration order.
    ///
    /// For a fixed interaction state and fixed `time`/`delta` this is a pure
    /// function of the bone transforms; animators only see the context
    /// snapshot taken after the pre-frame step, never each other's writes.
    pub fn tick(&mut self, scene: &mut Scene, state: &mut InteractionState, ctx: FrameContext) {
        let mut ctx = match self.pre_frame.as_mut() {
            Some(pre) => pre(state, ctx),
            None => ctx,
        };

        // Snapshot the (possibly just-updated) shared state into the context.
        ctx.mouse = state.mouse;
        ctx.glide = state.glide;
        ctx.velocity = state.velocity;
        ctx.eye_distance = state.eye_distance;

        for (bone, animator) in &mut self.animators {
            // Bones were validated at registration; the registry is stable
            // for the lifetime of the loaded model.
            if let Some(key) = self.registry.get(bone)
                && let Some(node) = scene.get_node_mut(key)
            {
                animator(node, &ctx);
            }
        }
    }
}

impl std::fmt::Debug for Animation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animation")
            .field("name", &self.name)
            .field("animators", &self.animators.len())
            .field("pre_frame", &self.pre_frame.is_some())
            .finish()
    }
}
