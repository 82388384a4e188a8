//! Animation scheduler
//!
//! Owns a set of tickable animations and advances them together each frame.

use std::time::Instant;

use slotmap::{new_key_type, SlotMap};
use tracing::trace;

use crate::capability::Tick;

new_key_type! {
    pub struct AnimationId;
}

/// Ticks every registered animation once per host frame
pub struct AnimationScheduler<T> {
    animations: SlotMap<AnimationId, T>,
    last_frame: Instant,
}

impl<T: Tick> AnimationScheduler<T> {
    pub fn new() -> Self {
        Self {
            animations: SlotMap::with_key(),
            last_frame: Instant::now(),
        }
    }

    pub fn add(&mut self, animation: T) -> AnimationId {
        self.animations.insert(animation)
    }

    pub fn get(&self, id: AnimationId) -> Option<&T> {
        self.animations.get(id)
    }

    pub fn get_mut(&mut self, id: AnimationId) -> Option<&mut T> {
        self.animations.get_mut(id)
    }

    pub fn remove(&mut self, id: AnimationId) -> Option<T> {
        self.animations.remove(id)
    }

    /// Advance every animation by `dt_ms`.
    ///
    /// Also restarts the wall clock, so a following `tick_now` only measures
    /// time that passed after this call.
    pub fn tick(&mut self, dt_ms: f32) {
        for (_, animation) in self.animations.iter_mut() {
            animation.tick(dt_ms);
        }
        self.last_frame = Instant::now();
    }

    /// Advance every animation by the wall-clock time since the previous
    /// `tick` or `tick_now` (or since construction)
    pub fn tick_now(&mut self) {
        let now = Instant::now();
        let dt_ms = (now - self.last_frame).as_secs_f32() * 1000.0;
        for (_, animation) in self.animations.iter_mut() {
            animation.tick(dt_ms);
        }
        self.last_frame = now;
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        self.animations.iter().any(|(_, a)| a.is_active())
    }

    /// Drop animations that have finished; returns how many were removed
    pub fn retain_active(&mut self) -> usize {
        let before = self.animations.len();
        self.animations.retain(|_, a| a.is_active());
        let removed = before - self.animations.len();
        if removed > 0 {
            trace!(removed, "dropped finished animations");
        }
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnimationId, &T)> {
        self.animations.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (AnimationId, &mut T)> {
        self.animations.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

impl<T: Tick> Default for AnimationScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::AnimationController;
    use crate::definition::AnimationDefinition;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn controller(frames: u32, looping: bool) -> AnimationController<u32> {
        timed_controller(100.0, frames, looping)
    }

    fn timed_controller(frame_ms: f32, frames: u32, looping: bool) -> AnimationController<u32> {
        let def = AnimationDefinition::uniform(frame_ms, 0..frames)
            .unwrap()
            .looping(looping);
        let mut ctrl = AnimationController::new(Arc::new(def)).unwrap();
        ctrl.play();
        ctrl
    }

    #[test]
    fn test_tick_advances_all() {
        let mut scheduler = AnimationScheduler::new();
        let a = scheduler.add(controller(3, true));
        let b = scheduler.add(controller(5, false));

        scheduler.tick(100.0);

        assert_eq!(scheduler.get(a).map(|c| c.current_index()), Some(1));
        assert_eq!(scheduler.get(b).map(|c| c.current_index()), Some(1));
        assert!(scheduler.has_active_animations());
    }

    #[test]
    fn test_tick_now_uses_wall_clock() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.add(timed_controller(1.0, 4, true));
        let started = scheduler.last_frame;

        thread::sleep(Duration::from_millis(5));
        scheduler.tick_now();

        assert_eq!(scheduler.get(id).map(|c| c.current_index()), Some(1));
        assert!(scheduler.last_frame > started);
    }

    #[test]
    fn test_manual_tick_restarts_wall_clock() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.add(timed_controller(50.0, 4, true));
        let started = scheduler.last_frame;

        thread::sleep(Duration::from_millis(60));
        scheduler.tick(0.0);
        assert!(scheduler.last_frame > started);

        // Only the time since the manual tick counts, not the sleep before it
        scheduler.tick_now();
        assert_eq!(scheduler.get(id).map(|c| c.current_index()), Some(0));
    }

    #[test]
    fn test_retain_active_drops_finished() {
        let mut scheduler = AnimationScheduler::new();
        let looping = scheduler.add(controller(2, true));
        let once = scheduler.add(controller(2, false));

        for _ in 0..3 {
            scheduler.tick(100.0);
        }

        assert_eq!(scheduler.retain_active(), 1);
        assert_eq!(scheduler.len(), 1);
        assert!(scheduler.get(looping).is_some());
        assert!(scheduler.get(once).is_none());
    }

    #[test]
    fn test_remove_and_paused_entries() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.add(controller(3, false));

        if let Some(ctrl) = scheduler.get_mut(id) {
            ctrl.pause();
        }
        scheduler.tick(100.0);
        assert_eq!(scheduler.get(id).map(|c| c.current_index()), Some(0));
        assert!(scheduler.has_active_animations());

        assert!(scheduler.remove(id).is_some());
        assert!(scheduler.is_empty());
        assert!(!scheduler.has_active_animations());
    }
}
