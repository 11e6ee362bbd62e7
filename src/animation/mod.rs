//! Animation Core
//!
//! The procedural bone-animation engine:
//! - [`BoneRegistry`]: name → node lookup built once per loaded model
//! - [`Animation`]: a named bundle of per-bone pose functions plus an
//!   optional shared pre-frame function
//! - [`AnimationController`]: the timer-driven state machine selecting which
//!   animation ticks each frame
//! - [`InteractionState`] / [`FrameContext`]: shared pointer state and the
//!   per-tick snapshot animators read
//! - [`presets`]: the standard `idle`/`wave`/`jump` presets

pub mod animation;
pub mod context;
pub mod controller;
pub mod presets;
pub mod registry;
pub mod state;

pub use animation::{Animation, BoneAnimator, PreFrameFn};
pub use context::FrameContext;
pub use controller::{AnimationController, ControllerConfig, SpontaneousTransition, IDLE};
pub use presets::PresetParams;
pub use registry::BoneRegistry;
pub use state::InteractionState;
