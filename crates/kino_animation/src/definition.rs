//! Animation definitions
//!
//! A definition is the immutable description of an animation: its frames in
//! display order and the three behavior flags. Definitions are authored through
//! `&mut self` and then shared behind an `Arc`, which seals them: controllers
//! only ever see a shared reference.

use smallvec::SmallVec;

use crate::error::Result;
use crate::frame::{validate_duration, Frame};

/// Inline capacity for frame storage; most sprite animations fit without spilling.
const INLINE_FRAMES: usize = 8;

/// An ordered sequence of frames plus playback flags
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationDefinition<H> {
    frames: SmallVec<[Frame<H>; INLINE_FRAMES]>,
    reversed: bool,
    ping_pong: bool,
    looping: bool,
}

impl<H> AnimationDefinition<H> {
    /// Create an empty definition with every flag cleared
    pub fn new() -> Self {
        Self {
            frames: SmallVec::new(),
            reversed: false,
            ping_pong: false,
            looping: false,
        }
    }

    /// Create a definition from already validated frames
    pub fn from_frames(frames: impl IntoIterator<Item = Frame<H>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            ..Self::new()
        }
    }

    /// Create a definition where every frame is shown for the same time
    pub fn uniform(duration_ms: f32, contents: impl IntoIterator<Item = H>) -> Result<Self> {
        validate_duration(duration_ms)?;
        Ok(Self::from_frames(contents.into_iter().map(|content| Frame {
            content,
            duration_ms,
        })))
    }

    /// Append a frame to the end of the animation.
    ///
    /// A rejected duration leaves the frame list untouched.
    pub fn push_frame(&mut self, content: H, duration_ms: f32) -> Result<()> {
        let frame = Frame::new(content, duration_ms)?;
        self.frames.push(frame);
        Ok(())
    }

    /// Builder: append a validated frame
    pub fn with_frame(mut self, frame: Frame<H>) -> Self {
        self.frames.push(frame);
        self
    }

    /// Builder: start from the last frame and play backward
    pub fn reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    /// Builder: bounce at the ends instead of wrapping
    pub fn ping_pong(mut self, ping_pong: bool) -> Self {
        self.ping_pong = ping_pong;
        self
    }

    /// Builder: keep playing instead of stopping at the end
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn frames(&self) -> &[Frame<H>] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&Frame<H>> {
        self.frames.get(index)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Index of the final frame (0 for an empty definition)
    pub fn last_index(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn is_ping_pong(&self) -> bool {
        self.ping_pong
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Where playback begins when no explicit start frame is given
    pub fn start_index(&self, reversed: bool) -> usize {
        if reversed {
            self.last_index()
        } else {
            0
        }
    }

    /// Number of advance steps a non-looping run takes before it stops.
    ///
    /// A ping-pong run covers the frames twice: once out, once back.
    pub fn step_count(&self, ping_pong: bool) -> i64 {
        let steps = self.last_index() as i64;
        if ping_pong {
            steps * 2
        } else {
            steps
        }
    }

    /// Advance steps left for a run that starts at `start` instead of the
    /// default start frame.
    ///
    /// A plain run only walks to the end it is heading for. A ping-pong run
    /// walks there and then all the way back.
    pub fn steps_from(&self, start: usize, reversed: bool, ping_pong: bool) -> i64 {
        let last = self.last_index() as i64;
        let start = (start as i64).min(last);
        let outward = if reversed { start } else { last - start };
        if ping_pong {
            outward + last
        } else {
            outward
        }
    }

    /// Time one pass over every frame takes at speed 1.0
    pub fn total_duration_ms(&self) -> f32 {
        self.frames.iter().map(Frame::duration_ms).sum()
    }
}

impl<H> Default for AnimationDefinition<H> {
    fn default() -> Self {
        Self::new()
    }
}
