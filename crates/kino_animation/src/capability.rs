//! Capabilities shared by everything the host loop drives
//!
//! Hosts keep heterogeneous collections (sprites, effects, UI widgets) and only
//! need two things from each item: advance it by the frame's elapsed time, and
//! ask it to draw. Rendering itself lives outside this crate behind
//! [`FrameRenderer`].

/// Something that advances with wall-clock time
pub trait Tick {
    /// Advance by `dt_ms` milliseconds
    fn tick(&mut self, dt_ms: f32);

    /// Whether further ticks can still change anything
    fn is_active(&self) -> bool;
}

/// Placement and styling applied when a frame is drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawParams {
    /// Screen position in pixels
    pub position: [f32; 2],
    /// Pivot within the frame, in pixels from its top-left corner
    pub origin: [f32; 2],
    pub scale: [f32; 2],
    /// Rotation in radians
    pub rotation: f32,
    /// RGBA multiplier
    pub tint: [f32; 4],
    pub layer_depth: f32,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0],
            origin: [0.0, 0.0],
            scale: [1.0, 1.0],
            rotation: 0.0,
            tint: [1.0, 1.0, 1.0, 1.0],
            layer_depth: 0.0,
        }
    }
}

impl DrawParams {
    /// Builder: set position
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = [x, y];
        self
    }

    /// Builder: set pivot
    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = [x, y];
        self
    }

    /// Builder: set uniform scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = [scale, scale];
        self
    }

    /// Builder: set rotation in radians
    pub fn with_rotation(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }

    /// Builder: set tint color
    pub fn with_tint(mut self, tint: [f32; 4]) -> Self {
        self.tint = tint;
        self
    }

    /// Builder: set layer depth
    pub fn with_layer_depth(mut self, depth: f32) -> Self {
        self.layer_depth = depth;
        self
    }
}

/// Implemented by the host's renderer to receive frame handles
pub trait FrameRenderer<H> {
    fn draw_frame(&mut self, content: &H, params: &DrawParams);
}

/// Something that can submit itself to a [`FrameRenderer`]
pub trait Drawable<H> {
    fn draw(&self, renderer: &mut dyn FrameRenderer<H>);
}
