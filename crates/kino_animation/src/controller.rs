//! Animation playback controller
//!
//! The controller owns the mutable half of an animation: which frame is
//! showing, which way the cursor moves, how much time has built up on the
//! current frame and how many steps a non-looping run has left. It is advanced
//! by feeding it elapsed time once per host tick.
//!
//! # State machine
//!
//! ```text
//!            play()                pause()
//! Stopped ───────────▶ Playing ───────────▶ Paused
//!    ▲                 │  ▲   ◀───────────   │
//!    │  stop() / end   │  │     unpause()    │
//!    └─────────────────┘  └──────────────────┘
//!                   stop() from any state
//! ```
//!
//! All four flag combinations (loop × ping-pong) go through one advance rule:
//! inside the frame range the cursor simply steps; at a boundary a looping
//! animation wraps or bounces, and a non-looping one spends a step from its
//! budget and either stops or bounces.

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, trace, warn};

use crate::capability::Tick;
use crate::config::{AdvancePolicy, PlaybackConfig, ResetPolicy};
use crate::definition::AnimationDefinition;
use crate::error::{AnimationError, Result};
use crate::frame::Frame;

/// Lifecycle state of a controller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Direction the playback cursor moves through the frames
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayDirection {
    #[default]
    Forward,
    Backward,
}

impl PlayDirection {
    fn from_reversed(reversed: bool) -> Self {
        if reversed {
            PlayDirection::Backward
        } else {
            PlayDirection::Forward
        }
    }

    fn flipped(self) -> Self {
        match self {
            PlayDirection::Forward => PlayDirection::Backward,
            PlayDirection::Backward => PlayDirection::Forward,
        }
    }

    /// Signed index offset of one step
    pub fn offset(self) -> isize {
        match self {
            PlayDirection::Forward => 1,
            PlayDirection::Backward => -1,
        }
    }
}

/// What a single `update` call did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Not playing (stopped, paused or the tick was rejected)
    Idle,
    /// Time accumulated but the current frame is still showing
    Held,
    /// The cursor moved this many steps
    Advanced(usize),
    /// A non-looping animation reached its end and stopped
    Finished,
}

/// Per-instance playback state for one shared animation definition
#[derive(Clone, Debug)]
pub struct AnimationController<H> {
    definition: Arc<AnimationDefinition<H>>,
    config: PlaybackConfig,
    state: PlaybackState,
    current_index: usize,
    direction: PlayDirection,
    /// Time spent on the current frame, in unscaled milliseconds
    elapsed_ms: f32,
    /// Advance steps left before a non-looping run stops
    remaining_steps: i64,
    speed: f32,
    reversed: bool,
    ping_pong: bool,
    looping: bool,
}

impl<H> AnimationController<H> {
    /// Bind a controller to a definition with default playback options.
    ///
    /// The controller starts `Stopped` with the cursor on the first frame
    /// (the last frame for reversed animations).
    pub fn new(definition: Arc<AnimationDefinition<H>>) -> Result<Self> {
        Self::with_config(definition, PlaybackConfig::default())
    }

    /// Bind a controller to a definition with explicit playback options
    pub fn with_config(
        definition: Arc<AnimationDefinition<H>>,
        config: PlaybackConfig,
    ) -> Result<Self> {
        if definition.is_empty() {
            warn!("refusing to bind controller to an empty animation");
            return Err(AnimationError::EmptyAnimation);
        }

        let reversed = definition.is_reversed();
        let ping_pong = definition.is_ping_pong();

        Ok(Self {
            config,
            state: PlaybackState::Stopped,
            current_index: definition.start_index(reversed),
            direction: PlayDirection::from_reversed(reversed),
            elapsed_ms: 0.0,
            remaining_steps: definition.step_count(ping_pong),
            speed: 1.0,
            reversed,
            ping_pong,
            looping: definition.is_looping(),
            definition,
        })
    }

    // =========================================================================
    // Playback control
    // =========================================================================

    /// Start playing from the first frame (the last one when reversed).
    ///
    /// Does nothing if the controller is already playing or paused.
    pub fn play(&mut self) {
        let start = self.definition.start_index(self.reversed);
        self.start_at(start);
    }

    /// Start playing from a specific frame.
    ///
    /// The index is checked before anything else, so an out-of-range index is
    /// rejected even while playing and never changes state.
    pub fn play_from(&mut self, start_index: usize) -> Result<()> {
        let frame_count = self.definition.len();
        if start_index >= frame_count {
            warn!(start_index, frame_count, "start frame out of range");
            return Err(AnimationError::StartIndexOutOfRange {
                index: start_index,
                frame_count,
            });
        }

        self.start_at(start_index);
        Ok(())
    }

    /// Start playing from a uniformly random frame.
    ///
    /// Keeps several instances of the same animation from ticking in lockstep.
    pub fn play_random(&mut self) {
        self.play_random_with(&mut rand::thread_rng());
    }

    /// Start playing from a random frame drawn from `rng`, any index including the last
    pub fn play_random_with<R: Rng>(&mut self, rng: &mut R) {
        let start = rng.gen_range(0..=self.definition.last_index());
        self.start_at(start);
    }

    fn start_at(&mut self, start_index: usize) {
        if self.is_playing() {
            return;
        }

        self.current_index = start_index;
        self.direction = PlayDirection::from_reversed(self.reversed);
        self.remaining_steps = self
            .definition
            .steps_from(start_index, self.reversed, self.ping_pong);
        self.elapsed_ms = 0.0;
        self.state = PlaybackState::Playing;
        debug!(start_index, direction = ?self.direction, "animation playing");
    }

    /// Freeze playback; time stops accumulating until `unpause`
    pub fn pause(&mut self) {
        if self.state != PlaybackState::Playing {
            return;
        }
        self.state = PlaybackState::Paused;
        debug!(index = self.current_index, "animation paused");
    }

    /// Resume a paused animation with its accumulated time intact
    pub fn unpause(&mut self) {
        if self.state != PlaybackState::Paused {
            return;
        }
        self.state = PlaybackState::Playing;
        debug!(index = self.current_index, "animation resumed");
    }

    /// Stop playback, leaving the cursor where it is
    pub fn stop(&mut self) {
        if self.state == PlaybackState::Stopped {
            return;
        }
        self.state = PlaybackState::Stopped;
        debug!(index = self.current_index, "animation stopped");
    }

    /// Reinitialize the cursor, flags and speed from the bound definition.
    ///
    /// The play state is left alone: a playing controller keeps playing from
    /// the start frame.
    pub fn reset(&mut self) {
        let definition = &self.definition;

        self.reversed = definition.is_reversed();
        self.looping = definition.is_looping();
        self.ping_pong = match self.config.reset {
            ResetPolicy::PreservePingPong => definition.is_ping_pong(),
            ResetPolicy::ClearPingPong => false,
        };
        self.direction = PlayDirection::from_reversed(self.reversed);
        self.speed = 1.0;
        self.current_index = definition.start_index(self.reversed);
        self.remaining_steps = definition.step_count(self.ping_pong);
        self.elapsed_ms = 0.0;
        debug!(index = self.current_index, "animation reset");
    }

    /// Bind a different definition, as if constructing a fresh controller.
    ///
    /// The playback config is kept; everything else starts over and the
    /// controller is left `Stopped`.
    pub fn set_definition(&mut self, definition: Arc<AnimationDefinition<H>>) -> Result<()> {
        *self = Self::with_config(definition, self.config)?;
        Ok(())
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Feed elapsed time into the controller.
    ///
    /// Time is scaled by the speed multiplier. Leftover time after a frame
    /// change is carried into the next frame so long runs do not drift.
    pub fn update(&mut self, dt_ms: f32) -> UpdateOutcome {
        if self.state != PlaybackState::Playing {
            return UpdateOutcome::Idle;
        }
        if !dt_ms.is_finite() || dt_ms < 0.0 {
            warn!(dt_ms, "ignoring invalid tick");
            return UpdateOutcome::Idle;
        }

        self.elapsed_ms += dt_ms;

        let max_steps = match self.config.advance {
            AdvancePolicy::SingleStep => 1,
            AdvancePolicy::CatchUp => usize::MAX,
        };
        // Zero-duration frames consume no time; cap them so catch-up on an
        // all-zero looping animation terminates.
        let max_free_steps = self.definition.len() * 2;
        let mut free_steps = 0;
        let mut steps = 0;

        while steps < max_steps {
            let duration = self.current_frame().duration_ms();
            let step_ms = duration / self.speed;
            if self.elapsed_ms < step_ms {
                break;
            }
            if duration == 0.0 {
                free_steps += 1;
                if free_steps > max_free_steps {
                    break;
                }
            }

            self.elapsed_ms = (self.elapsed_ms - step_ms).max(0.0);
            steps += 1;

            if !self.advance() {
                self.state = PlaybackState::Stopped;
                debug!(index = self.current_index, "animation finished");
                return UpdateOutcome::Finished;
            }
        }

        if steps == 0 {
            UpdateOutcome::Held
        } else {
            UpdateOutcome::Advanced(steps)
        }
    }

    /// Move the cursor one step. Returns false when a non-looping run is over.
    fn advance(&mut self) -> bool {
        let last = self.definition.last_index();
        let next = self.current_index as isize + self.direction.offset();

        if next >= 0 && next as usize <= last {
            self.remaining_steps -= 1;
            self.current_index = next as usize;
            trace!(index = self.current_index, "frame advanced");
            return true;
        }

        if self.looping {
            if self.ping_pong {
                self.bounce();
            } else {
                self.current_index = match self.direction {
                    PlayDirection::Forward => 0,
                    PlayDirection::Backward => last,
                };
                trace!(index = self.current_index, "animation wrapped");
            }
            return true;
        }

        self.remaining_steps -= 1;
        if self.remaining_steps <= 0 {
            return false;
        }

        self.bounce();
        true
    }

    /// Reverse direction and step away from the boundary without repeating it
    fn bounce(&mut self) {
        self.direction = self.direction.flipped();
        let next = self.current_index as isize + self.direction.offset();
        // A single frame has nowhere to bounce to
        if next >= 0 && next as usize <= self.definition.last_index() {
            self.current_index = next as usize;
        }
        trace!(index = self.current_index, direction = ?self.direction, "animation bounced");
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The frame the renderer should show now
    pub fn current_frame(&self) -> &Frame<H> {
        &self.definition.frames()[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn direction(&self) -> PlayDirection {
        self.direction
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// True while playing or paused
    pub fn is_playing(&self) -> bool {
        self.state != PlaybackState::Stopped
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlaybackState::Paused
    }

    /// Unscaled time accumulated on the current frame
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    pub fn remaining_steps(&self) -> i64 {
        self.remaining_steps
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set the playback speed multiplier (1.0 is normal speed)
    pub fn set_speed(&mut self, speed: f32) -> Result<()> {
        if !speed.is_finite() || speed <= 0.0 {
            warn!(speed, "rejecting playback speed");
            return Err(AnimationError::InvalidSpeed(speed));
        }
        self.speed = speed;
        Ok(())
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Change the playback direction for this instance only
    pub fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
        self.direction = PlayDirection::from_reversed(reversed);
    }

    pub fn is_ping_pong(&self) -> bool {
        self.ping_pong
    }

    /// Takes effect on the next boundary; the step budget is reseeded on `play`
    pub fn set_ping_pong(&mut self, ping_pong: bool) {
        self.ping_pong = ping_pong;
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn config(&self) -> PlaybackConfig {
        self.config
    }

    pub fn set_config(&mut self, config: PlaybackConfig) {
        self.config = config;
    }

    pub fn definition(&self) -> &Arc<AnimationDefinition<H>> {
        &self.definition
    }
}

impl<H> Tick for AnimationController<H> {
    fn tick(&mut self, dt_ms: f32) {
        self.update(dt_ms);
    }

    fn is_active(&self) -> bool {
        self.is_playing()
    }
}
