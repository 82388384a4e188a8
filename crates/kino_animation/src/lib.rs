//! Kino Animation
//!
//! Frame-timed playback for sprite animations.
//!
//! # Features
//!
//! - **Shared definitions**: frames and flags authored once, shared via `Arc`
//! - **Playback modes**: forward, reversed, looping and ping-pong in any combination
//! - **Drift-free timing**: leftover time carries into the next frame
//! - **Typed lookup**: definitions keyed by your own enum, resolved once
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use kino_animation::{AnimationController, AnimationDefinition};
//!
//! let walk = AnimationDefinition::uniform(100.0, ["walk_0", "walk_1", "walk_2"])
//!     .unwrap()
//!     .looping(true);
//! let mut controller = AnimationController::new(Arc::new(walk)).unwrap();
//! controller.play();
//!
//! controller.update(100.0);
//! assert_eq!(*controller.current_frame().content(), "walk_1");
//! ```

pub mod capability;
pub mod config;
pub mod controller;
pub mod definition;
pub mod error;
pub mod frame;
pub mod library;
pub mod scheduler;
pub mod view;

pub use capability::{DrawParams, Drawable, FrameRenderer, Tick};
pub use config::{AdvancePolicy, PlaybackConfig, ResetPolicy};
pub use controller::{AnimationController, PlayDirection, PlaybackState, UpdateOutcome};
pub use definition::AnimationDefinition;
pub use error::{AnimationError, Result};
pub use frame::Frame;
pub use library::AnimationLibrary;
pub use scheduler::{AnimationId, AnimationScheduler};
pub use view::AnimatedView;
