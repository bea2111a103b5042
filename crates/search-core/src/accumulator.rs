//! A lock-striped concurrent map from document id to accumulated relevance.
//!
//! Each shard owns its own [`Mutex`] and private `HashMap`; a key routes to
//! exactly one shard, so contention is proportional to doc-id collisions
//! across concurrent writers, not to the number of distinct keys in play.
//! This lets many plus-word workers accumulate TF·IDF contributions without
//! a single global lock.

use std::collections::{BTreeMap, HashMap};
use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard};

/// A lock-striped `i64 -> f64` accumulator.
pub struct ConcurrentAccumulator {
    shards: Vec<Mutex<HashMap<i64, f64>>>,
}

impl ConcurrentAccumulator {
    /// Builds an accumulator with `shard_count` independent shards.
    ///
    /// # Panics
    ///
    /// Panics if `shard_count` is zero.
    pub fn new(shard_count: usize) -> Self {
        assert!(shard_count > 0, "ConcurrentAccumulator requires at least one shard");
        Self {
            shards: (0..shard_count).map(|_| Mutex::new(HashMap::new())).collect(),
        }
    }

    fn shard_index(&self, key: i64) -> usize {
        (key.unsigned_abs() as usize) % self.shards.len()
    }

    /// Acquires the shard lock for `key` and returns a scoped mutable
    /// reference to its slot (inserted at zero if absent). The lock is
    /// released when the returned [`Access`] is dropped.
    pub fn access(&self, key: i64) -> Access<'_> {
        let idx = self.shard_index(key);
        let mut guard = self.shards[idx].lock().unwrap_or_else(|e| e.into_inner());
        guard.entry(key).or_insert(0.0);
        Access { guard, key }
    }

    /// Adds `delta` to the slot for `key`. A thin convenience wrapper around
    /// [`ConcurrentAccumulator::access`] for the common case of a single
    /// read-modify-write.
    pub fn add(&self, key: i64, delta: f64) {
        *self.access(key) += delta;
    }

    /// Acquires every shard lock in turn and merges them into a single
    /// ordered map. Must not be called concurrently with `access`/`add` on
    /// the same accumulator.
    pub fn materialize(&self) -> BTreeMap<i64, f64> {
        let mut result = BTreeMap::new();
        for shard in &self.shards {
            let guard = shard.lock().unwrap_or_else(|e| e.into_inner());
            result.extend(guard.iter().map(|(&k, &v)| (k, v)));
        }
        result
    }
}

/// A scoped, locked reference to one accumulator slot.
pub struct Access<'a> {
    guard: MutexGuard<'a, HashMap<i64, f64>>,
    key: i64,
}

impl Deref for Access<'_> {
    type Target = f64;

    fn deref(&self) -> &f64 {
        self.guard.get(&self.key).expect("slot inserted by access()")
    }
}

impl DerefMut for Access<'_> {
    fn deref_mut(&mut self) -> &mut f64 {
        self.guard.get_mut(&self.key).expect("slot inserted by access()")
    }
}
