//! Playback configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How an update that covers more than one frame's worth of time is handled
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AdvancePolicy {
    /// Move at most one frame per update; surplus time waits for the next tick
    #[default]
    SingleStep,
    /// Keep advancing while the accumulated time covers the current frame
    CatchUp,
}

/// What `reset` does with the ping-pong flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ResetPolicy {
    /// Take ping-pong from the definition like the other flags
    #[default]
    PreservePingPong,
    /// Always clear ping-pong on reset
    ClearPingPong,
}

/// Per-controller playback options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlaybackConfig {
    pub advance: AdvancePolicy,
    pub reset: ResetPolicy,
}

impl PlaybackConfig {
    /// Builder: set the advance policy
    pub fn with_advance(mut self, advance: AdvancePolicy) -> Self {
        self.advance = advance;
        self
    }

    /// Builder: set the reset policy
    pub fn with_reset(mut self, reset: ResetPolicy) -> Self {
        self.reset = reset;
        self
    }
}
