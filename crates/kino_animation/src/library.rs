//! Keyed store of shared animation definitions
//!
//! A library maps a typed key (usually a small enum such as `PlayerAnim::Walk`)
//! to a shared definition. It is an ordinary value owned by whoever loads the
//! assets; views resolve their key once when they bind and then hold the
//! `Arc` directly.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::definition::AnimationDefinition;
use crate::error::{AnimationError, Result};

/// Definitions shared by key
#[derive(Debug)]
pub struct AnimationLibrary<K, H> {
    animations: FxHashMap<K, Arc<AnimationDefinition<H>>>,
}

impl<K, H> AnimationLibrary<K, H>
where
    K: Copy + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self {
            animations: FxHashMap::default(),
        }
    }

    /// Register a definition, replacing any previous one under the same key.
    ///
    /// Returns the shared handle so the caller can bind to it right away.
    pub fn insert(
        &mut self,
        key: K,
        definition: AnimationDefinition<H>,
    ) -> Arc<AnimationDefinition<H>> {
        let shared = Arc::new(definition);
        if self.animations.insert(key, shared.clone()).is_some() {
            debug!(?key, "replaced animation");
        }
        shared
    }

    /// Look up a definition, failing on unknown keys
    pub fn get(&self, key: K) -> Result<Arc<AnimationDefinition<H>>> {
        self.try_get(key)
            .ok_or_else(|| AnimationError::UnknownAnimation(format!("{key:?}")))
    }

    pub fn try_get(&self, key: K) -> Option<Arc<AnimationDefinition<H>>> {
        self.animations.get(&key).cloned()
    }

    /// Remove a definition. Controllers already bound to it keep their copy.
    pub fn remove(&mut self, key: K) -> Option<Arc<AnimationDefinition<H>>> {
        self.animations.remove(&key)
    }

    pub fn contains(&self, key: K) -> bool {
        self.animations.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.animations.keys().copied()
    }
}

impl<K, H> Default for AnimationLibrary<K, H>
where
    K: Copy + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Anim {
        Idle,
        Walk,
        Jump,
    }

    fn library() -> AnimationLibrary<Anim, u32> {
        let mut lib = AnimationLibrary::new();
        lib.insert(Anim::Idle, AnimationDefinition::uniform(200.0, [0, 1]).unwrap());
        lib.insert(
            Anim::Walk,
            AnimationDefinition::uniform(100.0, 2..6).unwrap().looping(true),
        );
        lib
    }

    #[test]
    fn test_get_registered() {
        let lib = library();
        assert_eq!(lib.len(), 2);
        assert!(lib.contains(Anim::Walk));

        let walk = lib.get(Anim::Walk).unwrap();
        assert_eq!(walk.len(), 4);
        assert!(walk.is_looping());
    }

    #[test]
    fn test_unknown_key() {
        let lib = library();
        assert_eq!(
            lib.get(Anim::Jump).unwrap_err(),
            AnimationError::UnknownAnimation("Jump".to_string())
        );
        assert!(lib.try_get(Anim::Jump).is_none());
    }

    #[test]
    fn test_insert_replaces_and_shares() {
        let mut lib = library();
        let first = lib.get(Anim::Idle).unwrap();
        let replacement = lib.insert(Anim::Idle, AnimationDefinition::uniform(50.0, [9]).unwrap());

        assert_eq!(lib.len(), 2);
        assert!(Arc::ptr_eq(&replacement, &lib.get(Anim::Idle).unwrap()));
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_remove_keeps_outstanding_handles() {
        let mut lib = library();
        let walk = lib.get(Anim::Walk).unwrap();

        assert!(lib.remove(Anim::Walk).is_some());
        assert!(!lib.contains(Anim::Walk));
        assert_eq!(walk.len(), 4);

        let mut keys: Vec<Anim> = lib.keys().collect();
        keys.sort_by_key(|k| *k as u8);
        assert_eq!(keys, vec![Anim::Idle]);
    }
}
