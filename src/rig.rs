use std::sync::Arc;

use crate::animation::controller::{AnimationController, ControllerConfig};
use crate::animation::presets::{self, PresetParams};
use crate::animation::registry::BoneRegistry;
use crate::animation::state::InteractionState;
use crate::errors::Result;
use crate::scene::{NodeKey, Scene};

/// The assembled avatar: scene, interaction state and (once a model is
/// attached) the animation controller.
///
/// This is the surface the embedding application talks to. The render loop
/// calls [`tick`](AvatarRig::tick) once per frame and then draws the scene;
/// input handlers forward pointer moves and clicks. Model loading is
/// asynchronous and owned by the embedder; until
/// [`attach_model`](AvatarRig::attach_model) runs, ticking is a silent no-op
/// (an expected startup race, not an error) while pointer events still
/// accumulate into the interaction state.
pub struct AvatarRig {
    scene: Scene,
    state: InteractionState,
    controller: Option<AnimationController>,
}

impl Default for AvatarRig {
    fn default() -> Self {
        Self::new(Scene::new())
    }
}

impl AvatarRig {
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            state: InteractionState::new(),
            controller: None,
        }
    }

    /// Wires the standard presets up to a freshly loaded model.
    ///
    /// Builds the bone registry from the hierarchy under `root`, constructs
    /// the `idle`/`wave`/`jump` presets and installs the controller. Call
    /// from the model-load completion path. Fails fast if the model is
    /// missing a bone the presets animate.
    pub fn attach_model(
        &mut self,
        root: NodeKey,
        params: &PresetParams,
        config: ControllerConfig,
    ) -> Result<()> {
        let registry = Arc::new(BoneRegistry::build(&self.scene, root));
        let animations = presets::standard_animations(&registry, params)?;
        self.controller = Some(AnimationController::new(animations, config)?);
        log::info!("Model attached: {} bones registered", registry.len());
        Ok(())
    }

    /// Installs a custom controller instead of the standard presets.
    pub fn install_controller(&mut self, controller: AnimationController) {
        self.controller = Some(controller);
    }

    /// Whether a model has been attached and the rig is animating.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.controller.is_some()
    }

    /// Pointer-move event, coordinates in normalized device coordinates.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.state.pointer_moved(x, y);
    }

    /// Click/tap trigger event.
    pub fn trigger(&mut self) {
        if let Some(controller) = self.controller.as_mut() {
            controller.trigger();
        }
    }

    /// Advances the rig by one frame: state machine, active animation, world
    /// matrices. No-op until a model is attached.
    pub fn tick(&mut self, delta: f32) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        controller.tick(delta, &mut self.scene, &mut self.state);
        self.scene.update_matrix_world();
    }

    // === Accessors ===

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut InteractionState {
        &mut self.state
    }

    #[must_use]
    pub fn controller(&self) -> Option<&AnimationController> {
        self.controller.as_ref()
    }
}
