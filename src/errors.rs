//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! The main error type [`MarionetteError`] covers the setup-time failure
//! modes of the animation core:
//! - Registering an animator for a bone the loaded skeleton does not have
//! - Looking up an easing function by an unknown name
//! - Constructing an easing with invalid shape parameters
//! - Configuring the controller with an unregistered animation
//!
//! All of these indicate a content/code mismatch and abort construction;
//! there are no runtime errors once a rig is wired up. A duplicate bone name
//! during registry construction is an anomaly, not an error: it is logged
//! and the build continues (last write wins).
//!
//! # Usage
//!
//! Public APIs that can fail return [`Result<T>`], an alias for
//! `std::result::Result<T, MarionetteError>`.

use thiserror::Error;

/// The main error type for the Marionette engine.
///
/// Every variant is a configuration error: it is raised while a rig is being
/// assembled, never from a frame tick.
#[derive(Error, Debug)]
pub enum MarionetteError {
    /// An animator was registered for a bone that is not in the registry.
    #[error("Bone '{0}' not found in the loaded skeleton")]
    UnknownBone(String),

    /// An easing function was requested by a name that does not exist.
    #[error("Unknown easing: {0}")]
    UnknownEasing(String),

    /// An easing was constructed with an out-of-range shape parameter.
    #[error("Invalid easing parameter: {0}")]
    InvalidParameter(String),

    /// The controller was configured with an animation name that was never
    /// registered.
    #[error("Animation '{0}' is not registered with the controller")]
    UnknownAnimation(String),
}

/// Alias for `Result<T, MarionetteError>`.
pub type Result<T> = std::result::Result<T, MarionetteError>;
