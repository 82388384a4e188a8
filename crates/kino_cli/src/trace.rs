//! Headless playback tracing
//!
//! Builds a synthetic animation whose frame handles are just their indices,
//! drives it with a fixed tick and records what a renderer would have shown.

use std::fmt;
use std::sync::Arc;

use anyhow::{Context, Result};
use kino_animation::{
    AnimationController, AnimationDefinition, PlaybackConfig, PlaybackState, UpdateOutcome,
};

/// Shape of the animation and how to drive it
#[derive(Clone, Debug, PartialEq)]
pub struct TraceOptions {
    pub frames: u32,
    pub duration_ms: f32,
    pub reversed: bool,
    pub ping_pong: bool,
    pub looping: bool,
    pub speed: f32,
    pub tick_ms: f32,
    pub ticks: usize,
    pub start: Start,
}

/// Where playback begins
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Start {
    Default,
    Index(usize),
    Random,
}

/// One simulated tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceLine {
    pub tick: usize,
    pub time_ms: f32,
    pub index: usize,
    pub state: PlaybackState,
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>5}  {:>10.2}ms  frame {:>3}  {:?}",
            self.tick, self.time_ms, self.index, self.state
        )
    }
}

/// Run the simulation. Line 0 is the state right after `play`.
///
/// Stops early once a non-looping animation finishes.
pub fn run(options: &TraceOptions, config: PlaybackConfig) -> Result<Vec<TraceLine>> {
    let definition = AnimationDefinition::uniform(options.duration_ms, 0..options.frames)
        .context("Invalid frame duration")?
        .reversed(options.reversed)
        .ping_pong(options.ping_pong)
        .looping(options.looping);

    let mut controller = AnimationController::with_config(Arc::new(definition), config)
        .context("Cannot play animation")?;
    controller
        .set_speed(options.speed)
        .context("Invalid --speed")?;

    match options.start {
        Start::Default => controller.play(),
        Start::Index(index) => controller.play_from(index).context("Invalid --start")?,
        Start::Random => controller.play_random(),
    }

    let mut lines = vec![TraceLine {
        tick: 0,
        time_ms: 0.0,
        index: controller.current_index(),
        state: controller.state(),
    }];

    for tick in 1..=options.ticks {
        let outcome = controller.update(options.tick_ms);
        lines.push(TraceLine {
            tick,
            time_ms: tick as f32 * options.tick_ms,
            index: controller.current_index(),
            state: controller.state(),
        });
        if outcome == UpdateOutcome::Finished {
            tracing::info!(tick, "animation finished");
            break;
        }
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kino_animation::AdvancePolicy;
    use pretty_assertions::assert_eq;

    fn options(frames: u32) -> TraceOptions {
        TraceOptions {
            frames,
            duration_ms: 100.0,
            reversed: false,
            ping_pong: false,
            looping: false,
            speed: 1.0,
            tick_ms: 100.0,
            ticks: 10,
            start: Start::Default,
        }
    }

    fn indices(lines: &[TraceLine]) -> Vec<usize> {
        lines.iter().map(|l| l.index).collect()
    }

    #[test]
    fn test_trace_stops_when_finished() {
        let lines = run(&options(3), PlaybackConfig::default()).unwrap();
        assert_eq!(indices(&lines), vec![0, 1, 2, 2]);
        assert_eq!(lines.last().map(|l| l.state), Some(PlaybackState::Stopped));
    }

    #[test]
    fn test_trace_ping_pong_from_start_index() {
        let opts = TraceOptions {
            ping_pong: true,
            looping: true,
            ticks: 5,
            start: Start::Index(1),
            ..options(3)
        };
        let lines = run(&opts, PlaybackConfig::default()).unwrap();
        assert_eq!(indices(&lines), vec![1, 2, 1, 0, 1, 2]);
    }

    #[test]
    fn test_trace_catch_up() {
        let opts = TraceOptions {
            looping: true,
            tick_ms: 250.0,
            ticks: 2,
            ..options(4)
        };
        let config = PlaybackConfig::default().with_advance(AdvancePolicy::CatchUp);
        let lines = run(&opts, config).unwrap();
        assert_eq!(indices(&lines), vec![0, 2, 1]);
    }

    #[test]
    fn test_trace_rejects_bad_input() {
        assert!(run(&options(0), PlaybackConfig::default()).is_err());

        let bad_start = TraceOptions {
            start: Start::Index(3),
            ..options(3)
        };
        let err = run(&bad_start, PlaybackConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--start"));

        let bad_speed = TraceOptions {
            speed: 0.0,
            ..options(3)
        };
        assert!(run(&bad_speed, PlaybackConfig::default()).is_err());
    }

    #[test]
    fn test_trace_line_display() {
        let line = TraceLine {
            tick: 3,
            time_ms: 50.0,
            index: 2,
            state: PlaybackState::Playing,
        };
        assert_eq!(line.to_string(), "    3       50.00ms  frame   2  Playing");
    }
}
