//! Animation error types

use thiserror::Error;

/// Contract violations reported by definitions, controllers and libraries.
///
/// Every fallible operation checks its arguments before touching any state,
/// so an `Err` always leaves the receiver exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// Playback was requested on a definition without frames
    #[error("Animation has no frames")]
    EmptyAnimation,

    /// Frame duration was negative, NaN or infinite
    #[error("Invalid frame duration: {0}ms")]
    InvalidDuration(f32),

    /// Requested start frame lies outside the definition
    #[error("Start frame {index} out of range for animation with {frame_count} frames")]
    StartIndexOutOfRange { index: usize, frame_count: usize },

    /// Speed multiplier was zero, negative, NaN or infinite
    #[error("Invalid playback speed: {0}")]
    InvalidSpeed(f32),

    /// No animation registered under the requested key
    #[error("Unknown animation: {0}")]
    UnknownAnimation(String),
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
