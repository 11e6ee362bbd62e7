use glam::Vec2;

/// Per-tick context handed to every bone animator.
///
/// Built fresh each tick from the controller's clocks, then enriched by the
/// active animation's pre-frame function and synchronized with the shared
/// [`InteractionState`](crate::animation::InteractionState). `time` and
/// `delta` are carried structurally, so a pre-frame function cannot drop them
/// the way an ad-hoc map could.
///
/// Nothing here persists across ticks; continuity lives entirely in the
/// interaction state and the controller's clocks.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameContext {
    /// Shared monotonic clock reading, never reset between animation
    /// switches.
    pub time: f32,
    /// Seconds since the previous tick.
    pub delta: f32,
    /// Seconds since the current transition began; zero while idle.
    pub transition_time: f32,

    // === Interaction snapshot (filled in by Animation::tick) ===
    pub mouse: Vec2,
    pub glide: Vec2,
    pub velocity: Vec2,
    pub eye_distance: f32,

    // === Pre-frame extras ===
    /// Scalar glide speed, produced by the shared pre-frame update.
    pub mouse_speed: f32,
}

impl FrameContext {
    #[must_use]
    pub fn new(time: f32, delta: f32) -> Self {
        Self {
            time,
            delta,
            ..Self::default()
        }
    }
}
