//! A single displayable frame

use crate::error::{AnimationError, Result};

/// One frame of an animation: an opaque content handle shown for a fixed time.
///
/// The handle is whatever the host uses to find pixels (an atlas region id, a
/// texture key, ...). Playback never looks inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<H> {
    pub(crate) content: H,
    pub(crate) duration_ms: f32,
}

impl<H> Frame<H> {
    /// Create a frame, rejecting negative or non-finite durations.
    ///
    /// Zero is accepted: such a frame is skipped on the next update.
    pub fn new(content: H, duration_ms: f32) -> Result<Self> {
        validate_duration(duration_ms)?;
        Ok(Self {
            content,
            duration_ms,
        })
    }

    /// The content handle to hand to a renderer
    pub fn content(&self) -> &H {
        &self.content
    }

    /// Display duration in milliseconds
    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }
}

pub(crate) fn validate_duration(duration_ms: f32) -> Result<()> {
    if duration_ms.is_finite() && duration_ms >= 0.0 {
        Ok(())
    } else {
        Err(AnimationError::InvalidDuration(duration_ms))
    }
}
