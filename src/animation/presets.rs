//! Standard Animation Presets
//!
//! The built-in behavioral modes of the avatar (`idle`, `wave` and `jump`)
//! expressed as data over [`Animation`]: a bone → formula mapping plus a
//! handful of gain parameters. Variants of the same preset (an expressive
//! hero avatar vs. a subtle in-page one) differ only in [`PresetParams`],
//! never in controller logic.
//!
//! Formulas address bones by the canonical humanoid names in [`bones`]; a
//! model missing one of them fails preset construction with a configuration
//! error. The face rig (eyes, eye rings, ears) is optional via
//! [`PresetParams::face_rig`].

use std::sync::Arc;

use crate::animation::animation::Animation;
use crate::animation::context::FrameContext;
use crate::animation::controller::IDLE;
use crate::animation::registry::BoneRegistry;
use crate::animation::state::InteractionState;
use crate::easing::{self, Direction, Easing};
use crate::errors::Result;
use crate::utils::math::sigmoid;
use glam::Vec3;

/// Canonical bone names the standard presets animate.
pub mod bones {
    pub const ROOT: &str = "root";
    pub const WAIST: &str = "waist";
    pub const HEAD: &str = "head";
    pub const LEFT_ARM: &str = "left_arm";
    pub const RIGHT_ARM: &str = "right_arm";
    pub const LEFT_LEG: &str = "left_leg";
    pub const RIGHT_LEG: &str = "right_leg";
    pub const EYE: &str = "eye";
    pub const LEFT_EYE_RING: &str = "left_eye_ring";
    pub const RIGHT_EYE_RING: &str = "right_eye_ring";
    pub const LEFT_EAR: &str = "left_ear";
    pub const RIGHT_EAR: &str = "right_ear";
}

/// Gain parameters for the standard presets.
#[derive(Clone, Copy, Debug)]
pub struct PresetParams {
    /// Full-body yaw toward the pointer.
    pub root_yaw_gain: f32,
    /// Waist counter-rotation on top of the root yaw.
    pub waist_yaw_gain: f32,
    /// Speed-driven squash-and-stretch on the waist.
    pub squash_gain: f32,
    /// Velocity-driven arm lift.
    pub arm_speed_gain: f32,
    /// How far the gaze target swings with the pointer.
    pub gaze_gain: f32,
    /// Depth (z) of the gaze target in front of the avatar.
    pub gaze_depth: f32,
    /// Whether to animate the eye/eye-ring/ear bones.
    pub face_rig: bool,
}

impl Default for PresetParams {
    /// The expressive full-body tuning.
    fn default() -> Self {
        Self {
            root_yaw_gain: 0.5,
            waist_yaw_gain: 0.3,
            squash_gain: 2.25,
            arm_speed_gain: 10.0,
            gaze_gain: 10.0,
            gaze_depth: 5.0,
            face_rig: true,
        }
    }
}

impl PresetParams {
    /// A restrained tuning for small embedded viewports, where the expressive
    /// gains read as flailing.
    #[must_use]
    pub fn subtle() -> Self {
        Self {
            root_yaw_gain: 0.25,
            waist_yaw_gain: 0.125,
            squash_gain: 0.25,
            arm_speed_gain: 1.0,
            gaze_gain: 2.0,
            gaze_depth: 5.0,
            face_rig: true,
        }
    }
}

/// The shared pre-frame step used by idle and jump: advance the glide
/// follower and publish the pointer target and speed into the context.
fn shared_pre_frame() -> impl FnMut(&mut InteractionState, FrameContext) -> FrameContext {
    |state, mut ctx| {
        ctx.mouse_speed = state.pre_frame_update(ctx.delta);
        ctx.mouse = state.mouse;
        ctx
    }
}

/// Builds the standard `idle`/`wave`/`jump` set.
pub fn standard_animations(
    registry: &Arc<BoneRegistry>,
    params: &PresetParams,
) -> Result<Vec<Animation>> {
    Ok(vec![
        idle(registry, params)?,
        wave(registry)?,
        jump(registry, params)?,
    ])
}

/// The persistent pointer-following idle pose.
pub fn idle(registry: &Arc<BoneRegistry>, params: &PresetParams) -> Result<Animation> {
    let p = *params;
    let mut idle = Animation::new(IDLE, Arc::clone(registry)).with_pre_frame(shared_pre_frame());

    idle.add_bone_animator(bones::ROOT, move |root, q| {
        root.transform.rotation.y = q.glide.x * p.root_yaw_gain;
    })?;

    idle.add_bone_animator(bones::WAIST, move |waist, q| {
        waist.transform.rotation.y = q.glide.x * p.waist_yaw_gain;
        waist.transform.rotation.x = q.glide.y * 0.05;
        waist.transform.position.y = -7.0 / 16.0 + q.time.sin() * 0.025;
        waist.transform.position.z = -q.glide.y * 0.05;
        waist.transform.scale.y = 1.0 - q.mouse_speed * p.squash_gain;
        waist.transform.scale.z = 1.0 + q.mouse_speed * p.squash_gain;
        waist.transform.scale.x = 1.0 + q.mouse_speed * p.squash_gain;
    })?;

    idle.add_bone_animator(bones::LEFT_ARM, move |arm, q| {
        arm.transform.rotation.x = -q.time.cos() * 0.05125 - q.glide.y * 0.1;
        arm.transform.rotation.z =
            q.time.sin() * 0.05125 - 0.06 - q.velocity.x.abs() * p.arm_speed_gain;
        arm.transform.rotation.y = -q.time.sin() * 0.125 + 0.25;
    })?;

    idle.add_bone_animator(bones::RIGHT_ARM, move |arm, q| {
        arm.transform.rotation.x = q.time.cos() * 0.05125 - q.glide.y * 0.1;
        arm.transform.rotation.z =
            -q.time.sin() * 0.05125 + 0.06 + q.velocity.x.abs() * p.arm_speed_gain;
        arm.transform.rotation.y = q.time.sin() * 0.125 - 0.25;
    })?;

    idle.add_bone_animator(bones::LEFT_LEG, move |leg, q| {
        leg.transform.rotation.z = -0.05;
        leg.transform.rotation.y = 0.125 + q.glide.x * 0.1;
        leg.transform.rotation.x = -q.glide.y * 0.05;
        leg.transform.position.z = -q.glide.y * 0.05;
        leg.transform.position.y = -0.4;
    })?;

    idle.add_bone_animator(bones::RIGHT_LEG, move |leg, q| {
        leg.transform.rotation.z = 0.05;
        leg.transform.rotation.y = -0.125 + q.glide.x * 0.1;
        leg.transform.rotation.x = -q.glide.y * 0.05;
        leg.transform.position.z = -q.glide.y * 0.05;
        leg.transform.position.y = -0.4;
    })?;

    idle.add_bone_animator(bones::HEAD, move |head, q| {
        head.transform.look_at(
            Vec3::new(q.mouse.x * p.gaze_gain, -q.mouse.y * p.gaze_gain, p.gaze_depth),
            Vec3::Y,
        );
        head.transform.scale = Vec3::splat(1.0 + q.mouse_speed * 0.5);
    })?;

    if p.face_rig {
        add_face_animators(&mut idle)?;
    }

    Ok(idle)
}

/// Eye, eye-ring and ear animators: blinking, gaze tracking and pointer
/// proximity dilation.
fn add_face_animators(idle: &mut Animation) -> Result<()> {
    let wave_ease = Easing::Expo(Direction::InOut);
    let blink_ease = Easing::Cubic(Direction::In);

    idle.add_bone_animator(bones::LEFT_EYE_RING, move |ring, q| {
        let squeeze = wave_ease.apply(easing::linear_wave(q.time)) * 0.025 - 0.025;
        let dilate = 0.0125 + sigmoid(q.eye_distance, 1.0, 0.00001) * 0.0125;
        ring.transform.position.x = -2.0 / 16.0 + squeeze - dilate;
    })?;

    idle.add_bone_animator(bones::RIGHT_EYE_RING, move |ring, q| {
        let squeeze = wave_ease.apply(easing::linear_wave(q.time)) * 0.025 - 0.025;
        let dilate = 0.0125 + sigmoid(q.eye_distance, 1.0, 0.00001) * 0.0125;
        ring.transform.position.x = 2.0 / 16.0 - squeeze + dilate;
    })?;

    idle.add_bone_animator(bones::EYE, move |eye, q| {
        eye.transform.position.x = (q.mouse.x * -0.25).clamp(-0.05, 0.05);
        eye.transform.position.y = 4.0 / 16.0 - ((-q.mouse.y - 0.05) * 0.25).clamp(-0.05, 0.05);

        // Periodic blink pulse out of the running clock
        let blink = blink_ease.apply(easing::linear_interval(q.time * 4.0, 16.0));
        eye.transform.scale.y =
            (1.0 + (blink * -1.25).clamp(-1.0, 0.0) - q.mouse_speed * 2.0).clamp(0.0, 2.0);
        eye.transform.scale.x = 1.0 + blink * 0.25 + q.mouse_speed * 2.0;

        let dilate = 0.75 + sigmoid(q.eye_distance, 1.0, 0.00001) * 0.75;
        eye.transform.scale.x += dilate;
        eye.transform.scale.y += dilate;
    })?;

    idle.add_bone_animator(bones::LEFT_EAR, move |ear, q| {
        ear.transform.rotation.x = -0.125
            + wave_ease.apply(easing::linear_wave(q.time - 0.25)) * 0.125
            - q.velocity.y * 5.0;
    })?;

    idle.add_bone_animator(bones::RIGHT_EAR, move |ear, q| {
        ear.transform.rotation.x = -0.125
            + wave_ease.apply(easing::linear_wave(q.time - 0.25)) * 0.125
            - q.velocity.y * 5.0;
    })?;

    Ok(())
}

/// Greeting wave, driven by the shared clock. No pre-frame function: the
/// glide follower freezes while waving, which reads as the avatar giving the
/// pointer its full attention.
pub fn wave(registry: &Arc<BoneRegistry>) -> Result<Animation> {
    Animation::new("wave", Arc::clone(registry))
        .with_bone_animator(bones::RIGHT_ARM, |arm, q| {
            arm.transform.rotation.z = -(q.time * 5.0).cos() * 0.5 - 0.5;
            arm.transform.rotation.y = (q.time * 5.0).sin() * 0.25;
        })?
        .with_bone_animator(bones::WAIST, |waist, q| {
            waist.transform.rotation.y = (q.time * 2.0).sin() * 0.1;
        })
}

/// Anticipation-squash jump. Bounce phase comes from the transition clock so
/// re-triggering always replays from the crouch.
pub fn jump(registry: &Arc<BoneRegistry>, params: &PresetParams) -> Result<Animation> {
    let p = *params;
    let mut jump =
        Animation::new("jump", Arc::clone(registry)).with_pre_frame(shared_pre_frame());

    jump.add_bone_animator(bones::ROOT, move |root, q| {
        let tt = q.transition_time;
        let hop = ((tt * 5.0).sin()).clamp(0.0, 20.0);
        let squash = jump_squash(tt);
        root.transform.position.y = hop + squash - 1.0;
        root.transform.scale.y = squash;
    })?;

    jump.add_bone_animator(bones::HEAD, move |head, q| {
        let hop = ((q.transition_time * 5.0).sin()).clamp(0.0, 20.0);
        head.transform.look_at(
            Vec3::new(
                q.mouse.x * p.gaze_gain,
                hop * 5.0 - q.mouse.y * p.gaze_gain,
                p.gaze_depth,
            ),
            Vec3::Y,
        );
        head.transform.scale = Vec3::splat(1.0 + q.mouse_speed * 0.5);
    })?;

    jump.add_bone_animator(bones::RIGHT_ARM, move |arm, q| {
        let tt = q.transition_time;
        let hop = ((tt * 5.0).sin()).clamp(0.0, 20.0);
        arm.transform.rotation.x = q.time.cos() * 0.05125 - q.glide.y * 0.1;
        arm.transform.rotation.y = q.time.sin() * 0.125 - 0.25;
        arm.transform.rotation.z = -q.time.sin() * 0.05125
            + 0.06
            + q.velocity.x.abs() * p.arm_speed_gain
            + hop / 2.0;
        arm.transform.position.y = jump_arm_height(tt);
    })?;

    jump.add_bone_animator(bones::LEFT_ARM, move |arm, q| {
        let tt = q.transition_time;
        let hop = ((tt * 5.0).sin()).clamp(0.0, 20.0);
        arm.transform.rotation.x = -q.time.cos() * 0.05125 - q.glide.y * 0.1;
        arm.transform.rotation.y = -q.time.sin() * 0.125 + 0.25;
        arm.transform.rotation.z = q.time.sin() * 0.05125
            - 0.06
            - q.velocity.x.abs() * p.arm_speed_gain
            - hop / 2.0;
        arm.transform.position.y = jump_arm_height(tt);
    })?;

    jump.add_bone_animator(bones::RIGHT_LEG, move |leg, q| {
        let tuck = ((q.transition_time * 5.0).sin()).clamp(0.1, 20.0);
        leg.transform.rotation.y = -0.125 + q.glide.x * 0.1;
        leg.transform.rotation.x = -q.glide.y * 0.05;
        leg.transform.rotation.z = 0.05 + tuck / 7.0;
        leg.transform.position.z = -q.glide.y * 0.05;
        leg.transform.position.y = -0.4;
    })?;

    jump.add_bone_animator(bones::LEFT_LEG, move |leg, q| {
        let tuck = ((q.transition_time * 5.0).sin()).clamp(0.1, 20.0);
        leg.transform.rotation.y = 0.125 + q.glide.x * 0.1;
        leg.transform.rotation.x = -q.glide.y * 0.05;
        leg.transform.rotation.z = -0.05 - tuck / 7.0;
        leg.transform.position.z = -q.glide.y * 0.05;
        leg.transform.position.y = -0.4;
    })?;

    Ok(jump)
}

/// Vertical squash factor over the jump: quick anticipation dip, stretch at
/// takeoff, settle back to 1.
fn jump_squash(t: f32) -> f32 {
    if t < 0.03 {
        1.0 + (t / 0.33).powi(2) * (1.5 - 1.0)
    } else if t < 0.66 {
        1.5 - ((t - 0.33) / 0.33).powi(2) * (1.5 - 0.8)
    } else {
        0.8 + ((t - 0.66) / 0.34).powi(2) * (1.0 - 0.8)
    }
}

/// Arms stay pinned until the landing, then swing with the rebound.
fn jump_arm_height(t: f32) -> f32 {
    if t >= 0.61 {
        ((t * 6.5).sin() * 0.20).clamp(-20.0, -0.15)
    } else {
        -0.15
    }
}
