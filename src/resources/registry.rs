//! Live-instance counts per spawn key.
//!
//! Directors consult an [`InstanceRegistry`] before spawning so a template (or
//! a rescued character) never has more live instances than its cap. The cap
//! check and the increment happen under one lock in
//! [`InstanceRegistry::try_acquire`], so a release arriving from another
//! thread can never interleave between them.
//!
//! Releases normally come from the `on_remove` hooks of
//! [`SpawnedFrom`](crate::components::spawned::SpawnedFrom) and
//! [`RescueSpawn`](crate::components::spawned::RescueSpawn): despawning the
//! instance gives its slot back exactly once. Handles cloned with
//! [`InstanceRegistry::handle`] share the same counts and may be moved to
//! host threads.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Resource, Debug)]
pub struct InstanceRegistry<K>
where
    K: Eq + Hash + Send + Sync + 'static,
{
    counts: Arc<Mutex<FxHashMap<K, u32>>>,
}

impl<K> Default for InstanceRegistry<K>
where
    K: Eq + Hash + Send + Sync + 'static,
{
    fn default() -> Self {
        InstanceRegistry {
            counts: Arc::new(Mutex::new(FxHashMap::default())),
        }
    }
}

impl<K> InstanceRegistry<K>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Another handle onto the same counts.
    pub fn handle(&self) -> Self {
        InstanceRegistry {
            counts: Arc::clone(&self.counts),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FxHashMap<K, u32>> {
        self.counts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reserve a slot for `key` unless `cap` instances are already alive.
    pub fn try_acquire(&self, key: &K, cap: u32) -> bool {
        let mut counts = self.lock();
        let live = counts.get(key).copied().unwrap_or(0);
        if live >= cap {
            return false;
        }
        counts.insert(key.clone(), live + 1);
        true
    }

    /// Give one slot back. The key disappears when its count reaches zero.
    /// Returns false when nothing was tracked for `key`.
    pub fn release(&self, key: &K) -> bool {
        let mut counts = self.lock();
        match counts.get_mut(key) {
            Some(live) if *live > 1 => {
                *live -= 1;
                true
            }
            Some(_) => {
                counts.remove(key);
                true
            }
            None => false,
        }
    }

    pub fn live(&self, key: &K) -> u32 {
        self.lock().get(key).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.lock().values().sum()
    }

    pub fn tracked_keys(&self) -> usize {
        self.lock().len()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}
