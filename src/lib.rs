#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod animation;
pub mod easing;
pub mod errors;
pub mod rig;
pub mod scene;
pub mod utils;

pub use animation::{
    Animation, AnimationController, BoneRegistry, ControllerConfig, FrameContext,
    InteractionState, PresetParams, SpontaneousTransition,
};
pub use easing::{Direction, Easing};
pub use errors::{MarionetteError, Result};
pub use rig::AvatarRig;
pub use scene::{Node, NodeKey, Scene, Transform};
pub use utils::Clock;
