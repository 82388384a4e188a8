//! Animated views
//!
//! An [`AnimatedView`] is what an on-screen entity holds: a controller plus the
//! placement used when its current frame is drawn. It has no playback logic of
//! its own.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use tracing::debug;

use crate::capability::{DrawParams, Drawable, FrameRenderer, Tick};
use crate::config::PlaybackConfig;
use crate::controller::{AnimationController, UpdateOutcome};
use crate::definition::AnimationDefinition;
use crate::error::Result;
use crate::frame::Frame;
use crate::library::AnimationLibrary;

/// A playing animation bound to a drawable region
#[derive(Clone, Debug)]
pub struct AnimatedView<H> {
    controller: AnimationController<H>,
    params: DrawParams,
}

impl<H> AnimatedView<H> {
    /// Bind to a definition and start playing it
    pub fn new(definition: Arc<AnimationDefinition<H>>) -> Result<Self> {
        Self::with_config(definition, PlaybackConfig::default())
    }

    /// Bind with explicit playback options and start playing
    pub fn with_config(
        definition: Arc<AnimationDefinition<H>>,
        config: PlaybackConfig,
    ) -> Result<Self> {
        let mut controller = AnimationController::with_config(definition, config)?;
        controller.play();
        Ok(Self {
            controller,
            params: DrawParams::default(),
        })
    }

    /// Resolve `key` in `library` and start playing it
    pub fn from_library<K>(library: &AnimationLibrary<K, H>, key: K) -> Result<Self>
    where
        K: Copy + Eq + Hash + Debug,
    {
        Self::new(library.get(key)?)
    }

    /// Builder: set draw placement
    pub fn with_params(mut self, params: DrawParams) -> Self {
        self.params = params;
        self
    }

    /// Switch to another animation, starting it from scratch.
    ///
    /// Equivalent to building a fresh view; only the draw placement and the
    /// playback config survive. An empty definition is rejected and the current
    /// animation keeps running.
    pub fn set_animation(&mut self, definition: Arc<AnimationDefinition<H>>) -> Result<()> {
        self.controller.set_definition(definition)?;
        self.controller.play();
        debug!(frames = self.controller.definition().len(), "view switched animation");
        Ok(())
    }

    /// Switch to the animation registered under `key`
    pub fn set_animation_from<K>(&mut self, library: &AnimationLibrary<K, H>, key: K) -> Result<()>
    where
        K: Copy + Eq + Hash + Debug,
    {
        self.set_animation(library.get(key)?)
    }

    /// Advance playback; same as [`AnimationController::update`]
    pub fn update(&mut self, dt_ms: f32) -> UpdateOutcome {
        self.controller.update(dt_ms)
    }

    pub fn current_frame(&self) -> &Frame<H> {
        self.controller.current_frame()
    }

    pub fn controller(&self) -> &AnimationController<H> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut AnimationController<H> {
        &mut self.controller
    }

    pub fn params(&self) -> &DrawParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut DrawParams {
        &mut self.params
    }
}

impl<H> Tick for AnimatedView<H> {
    fn tick(&mut self, dt_ms: f32) {
        self.controller.update(dt_ms);
    }

    fn is_active(&self) -> bool {
        self.controller.is_playing()
    }
}

impl<H> Drawable<H> for AnimatedView<H> {
    fn draw(&self, renderer: &mut dyn FrameRenderer<H>) {
        renderer.draw_frame(self.current_frame().content(), &self.params);
    }
}
