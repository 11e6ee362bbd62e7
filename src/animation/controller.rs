use rand::rngs::SmallRng;
use rand::{RngExt, SeedableRng};
use rustc_hash::FxHashMap;

use crate::animation::animation::Animation;
use crate::animation::context::FrameContext;
use crate::animation::state::InteractionState;
use crate::errors::{MarionetteError, Result};
use crate::scene::Scene;
use crate::utils::time::Clock;

/// Name of the initial, persistent state.
pub const IDLE: &str = "idle";

/// Spontaneous idle-break: with `probability` per idle tick, start
/// `animation` and revert after `duration` seconds.
#[derive(Clone, Debug)]
pub struct SpontaneousTransition {
    pub animation: String,
    pub probability: f32,
    pub duration: f32,
}

/// Controller configuration.
///
/// `trigger_animation` is the preset a click/tap starts and
/// `trigger_duration` how long it plays before reverting to idle. Presets are
/// data, so new behavioral modes are added by registering another
/// [`Animation`] and pointing the config at it; the controller logic never
/// changes.
#[derive(Clone, Debug)]
pub struct ControllerConfig {
    pub trigger_animation: String,
    /// Seconds before a triggered transition reverts to idle.
    pub trigger_duration: f32,
    pub spontaneous: Option<SpontaneousTransition>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            trigger_animation: "wave".to_string(),
            trigger_duration: 1.0,
            spontaneous: None,
        }
    }
}

/// The animation state machine.
///
/// Holds the registered animations, tracks which one is active and drives
/// `tick` on it every frame. `idle` is the initial and only persistent state;
/// every other state is entered through a trigger and reverts to idle on a
/// deadline.
///
/// The deferred revert is modeled as data (a deadline on the shared clock
/// checked inside [`tick`](AnimationController::tick)) rather than a
/// scheduled callback, so tests advance simulated time instead of waiting on
/// real timers.
pub struct AnimationController {
    animations: FxHashMap<String, Animation>,
    active: String,
    /// Shared monotonic clock, the `time` every animation sees.
    clock: Clock,
    /// Time since the current transition began. One clock for all non-idle
    /// states: entering a state restarts it, so two transitions can never
    /// overlap with inconsistent phase.
    transition_clock: Clock,
    /// Shared-clock reading at which the active transition reverts to idle.
    revert_at: Option<f32>,
    config: ControllerConfig,
    rng: SmallRng,
}

impl AnimationController {
    /// Builds a controller over `animations`.
    ///
    /// Fails with [`MarionetteError::UnknownAnimation`] unless `idle`, the
    /// configured trigger animation, and the spontaneous animation (if any)
    /// are all present.
    pub fn new(animations: Vec<Animation>, config: ControllerConfig) -> Result<Self> {
        let animations: FxHashMap<String, Animation> = animations
            .into_iter()
            .map(|a| (a.name().to_string(), a))
            .collect();

        for required in [IDLE, config.trigger_animation.as_str()] {
            if !animations.contains_key(required) {
                return Err(MarionetteError::UnknownAnimation(required.to_string()));
            }
        }
        if let Some(spont) = &config.spontaneous
            && !animations.contains_key(spont.animation.as_str())
        {
            return Err(MarionetteError::UnknownAnimation(spont.animation.clone()));
        }

        Ok(Self {
            animations,
            active: IDLE.to_string(),
            clock: Clock::new(),
            transition_clock: Clock::stopped(),
            revert_at: None,
            config,
            rng: SmallRng::from_rng(&mut rand::rng()),
        })
    }

    /// Replaces the RNG with a seeded one, for deterministic tests.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Name of the currently active animation.
    #[inline]
    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Shared clock reading, in seconds.
    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    /// External trigger event (click/tap).
    ///
    /// Starts the configured transition animation if idle; ignored otherwise
    /// (no re-trigger, no queueing).
    pub fn trigger(&mut self) {
        if self.active != IDLE {
            return;
        }
        let animation = self.config.trigger_animation.clone();
        let duration = self.config.trigger_duration;
        self.begin_transition(&animation, duration);
    }

    fn begin_transition(&mut self, animation: &str, duration: f32) {
        log::debug!("Transition: {} -> {animation} ({duration}s)", self.active);
        self.active = animation.to_string();
        self.transition_clock.start();
        self.revert_at = Some(self.clock.elapsed() + duration);
    }

    /// Advances the state machine by one frame and ticks the active
    /// animation. Inactive animations do not advance and keep no
    /// frame-to-frame state of their own.
    pub fn tick(&mut self, delta: f32, scene: &mut Scene, state: &mut InteractionState) {
        self.clock.advance(delta);
        self.transition_clock.advance(delta);

        // Due revert back to idle
        if let Some(deadline) = self.revert_at
            && self.clock.elapsed() >= deadline
        {
            log::debug!("Transition: {} -> {IDLE} (deadline)", self.active);
            self.active = IDLE.to_string();
            self.revert_at = None;
            self.transition_clock.stop();
        }

        // Spontaneous idle break
        if self.active == IDLE
            && let Some(spont) = self.config.spontaneous.as_ref()
            && self.rng.random::<f32>() < spont.probability
        {
            let animation = spont.animation.clone();
            let duration = spont.duration;
            self.begin_transition(&animation, duration);
        }

        let mut ctx = FrameContext::new(self.clock.elapsed(), delta);
        ctx.transition_time = self.transition_clock.elapsed();

        if let Some(animation) = self.animations.get_mut(&self.active) {
            animation.tick(scene, state, ctx);
        }
    }
}
