//! Pull-based memoization primitives.
//!
//! Inputs carry a [`Revision`] that is bumped on every write; derived values
//! live in a [`Memo`] keyed by the revisions and parameter values they were
//! computed from. A read with an unchanged key returns the cached value, a
//! changed key recomputes before the value is handed out.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Monotonic write counter for one input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Revision(u64);

impl Revision {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// Input value paired with the revision of its last write.
#[derive(Debug, Clone)]
pub struct Tracked<T> {
    value: T,
    revision: Revision,
}

impl<T> Tracked<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            revision: Revision::default(),
        }
    }

    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    #[must_use]
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Replaces the value; always counts as a change.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.revision.bump();
    }
}

/// Single-slot cache of a derived value and the key it was computed for.
#[derive(Debug)]
pub struct Memo<K, V> {
    label: &'static str,
    slot: Option<(K, V)>,
    generation: u64,
}

impl<K: PartialEq, V> Memo<K, V> {
    #[must_use]
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            slot: None,
            generation: 0,
        }
    }

    /// Returns the cached value for `key`, computing it first when stale.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> &V {
        self.refresh(key, compute);
        match &self.slot {
            Some((_, value)) => value,
            None => unreachable!("refresh always fills the slot"),
        }
    }

    /// Recomputes when `key` differs from the cached one.
    ///
    /// Returns `true` when a recompute happened.
    pub fn refresh(&mut self, key: K, compute: impl FnOnce() -> V) -> bool {
        if self.is_fresh(&key) {
            return false;
        }
        let value = compute();
        self.slot = Some((key, value));
        self.generation = self.generation.wrapping_add(1);
        trace!(memo = self.label, generation = self.generation, "recomputed");
        true
    }

    #[must_use]
    pub fn is_fresh(&self, key: &K) -> bool {
        matches!(&self.slot, Some((cached, _)) if cached == key)
    }

    /// Last computed value, fresh or not.
    #[must_use]
    pub fn peek(&self) -> Option<&V> {
        self.slot.as_ref().map(|(_, value)| value)
    }

    /// Number of recomputes so far; changes exactly when the value may have.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
