use glam::Vec2;

use crate::utils::math::lerp;

/// Per-event smoothing factor applied to incoming pointer positions.
const POINTER_SMOOTHING: f32 = 0.2;

/// Per-tick rate at which the glide position approaches the pointer target.
pub const GLIDE_RATE: f32 = 14.0;

/// Ceiling on the delta used for the glide lerp. A stalled frame or a tab
/// resume can deliver an arbitrarily large delta; capping it keeps the glide
/// from teleporting.
pub const MAX_GLIDE_DELTA: f32 = 0.01;

/// Component-wise limit on the derived glide velocity.
pub const VELOCITY_LIMIT: f32 = 0.1;

/// Shared pointer-interaction state.
///
/// The mutable variables every pose formula reads: the smoothed pointer
/// target, its exponentially gliding follower, and the velocity derived from
/// consecutive glide positions. One instance lives for the whole application;
/// it never needs resetting because every field is continuously re-derived.
///
/// Exactly one writer exists per field ([`pointer_moved`] for `mouse`,
/// [`pre_frame_update`] for the rest) and animators only ever read copies
/// through the frame context, so the single-threaded tick needs no locking.
///
/// [`pointer_moved`]: InteractionState::pointer_moved
/// [`pre_frame_update`]: InteractionState::pre_frame_update
#[derive(Debug, Clone)]
pub struct InteractionState {
    /// Smoothed pointer target in scene units.
    pub mouse: Vec2,
    /// Gliding follower of `mouse`, advanced once per tick.
    pub glide: Vec2,
    /// `glide` as of the previous tick.
    pub last_glide: Vec2,
    /// Per-tick glide displacement, clamped to [`VELOCITY_LIMIT`].
    pub velocity: Vec2,
    /// Distance from the gaze point to the pointer; drives eye dilation.
    pub eye_distance: f32,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mouse: Vec2::ZERO,
            glide: Vec2::ZERO,
            last_glide: Vec2::ZERO,
            velocity: Vec2::ZERO,
            // Far away until the first pointer event arrives
            eye_distance: 100.0,
        }
    }

    /// Feeds a pointer-move event, `x`/`y` in normalized device coordinates
    /// (`[-1, 1]`, y up).
    ///
    /// The position is recentered toward the avatar's head, halved, and
    /// approached with a small lerp so a fast-moving pointer does not jitter
    /// the target. This smoothing is per *event* and independent of the per
    /// *tick* glide in [`pre_frame_update`](InteractionState::pre_frame_update).
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        let target = Vec2::new(x, y - 0.8) * 0.5;
        self.mouse = self
            .mouse
            .lerp(target, POINTER_SMOOTHING)
            .clamp(Vec2::splat(-2.0), Vec2::splat(2.0));
    }

    /// Advances the glide follower by one tick and returns the scalar mouse
    /// speed.
    ///
    /// Runs as the shared pre-frame step of the idle/jump presets:
    /// velocity and speed are derived from the *previous* tick's glide
    /// movement, then the glide position takes its step toward the target.
    pub fn pre_frame_update(&mut self, delta: f32) -> f32 {
        self.velocity = (self.glide - self.last_glide).clamp(
            Vec2::splat(-VELOCITY_LIMIT),
            Vec2::splat(VELOCITY_LIMIT),
        );
        let speed = self.velocity.length().clamp(-VELOCITY_LIMIT, VELOCITY_LIMIT);

        self.last_glide = self.glide;
        let t = GLIDE_RATE * delta.clamp(0.0, MAX_GLIDE_DELTA);
        self.glide = Vec2::new(
            lerp(self.glide.x, self.mouse.x, t),
            lerp(self.glide.y, self.mouse.y, t),
        );

        let gaze = self.mouse + Vec2::new(0.0, 0.1);
        self.eye_distance = gaze.length();

        speed
    }
}
