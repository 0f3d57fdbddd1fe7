//! In-flight operation tracking.
//!
//! Views disable buttons while a mutation for a given key is pending. Two
//! policies exist in practice: the editor queue allows one mutation across the
//! whole view, the admin user list allows independent mutations per user.
//! `OpTracker` makes the policy explicit configuration instead of per-view
//! ad-hoc bookkeeping.

use std::collections::HashSet;
use std::hash::Hash;

/// Concurrency policy for an [`OpTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPolicy {
    /// At most one operation may be in flight at a time; while one key is
    /// active, every key is blocked.
    Single,
    /// Operations are tracked independently; only the active key itself is
    /// blocked.
    PerKey,
}

/// Tracks which mutating operations are currently pending, keyed by an
/// operation id (typically an entity id).
#[derive(Debug, Clone)]
pub struct OpTracker<K: Eq + Hash> {
    policy: SlotPolicy,
    active: HashSet<K>,
}

impl<K: Eq + Hash> OpTracker<K> {
    pub fn new(policy: SlotPolicy) -> Self {
        Self {
            policy,
            active: HashSet::new(),
        }
    }

    pub fn policy(&self) -> SlotPolicy {
        self.policy
    }

    /// Attempt to begin an operation for `key`.
    ///
    /// Returns `false` (and records nothing) when the policy blocks the key:
    /// the key is already active, or `Single` and anything is active.
    pub fn try_begin(&mut self, key: K) -> bool {
        if self.is_blocked(&key) {
            return false;
        }
        self.active.insert(key)
    }

    /// Mark the operation for `key` as finished. Unknown keys are ignored.
    pub fn finish(&mut self, key: &K) {
        self.active.remove(key);
    }

    /// Whether an operation for exactly this key is pending.
    pub fn is_active(&self, key: &K) -> bool {
        self.active.contains(key)
    }

    /// Whether starting an operation for this key would be refused.
    pub fn is_blocked(&self, key: &K) -> bool {
        match self.policy {
            SlotPolicy::Single => !self.active.is_empty(),
            SlotPolicy::PerKey => self.active.contains(key),
        }
    }

    /// Whether nothing at all is in flight.
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_slot_blocks_every_key_while_one_is_active() {
        let mut t = OpTracker::new(SlotPolicy::Single);
        assert!(t.try_begin("a"));
        assert!(t.is_active(&"a"));
        assert!(t.is_blocked(&"b"));
        assert!(!t.try_begin("b"));

        t.finish(&"a");
        assert!(t.is_idle());
        assert!(t.try_begin("b"));
    }

    #[test]
    fn per_key_tracks_keys_independently() {
        let mut t = OpTracker::new(SlotPolicy::PerKey);
        assert!(t.try_begin(1));
        assert!(t.try_begin(2));
        assert!(t.is_blocked(&1));
        assert!(!t.is_blocked(&3));

        t.finish(&1);
        assert!(!t.is_active(&1));
        assert!(t.is_active(&2));
    }

    #[test]
    fn double_begin_for_same_key_is_refused() {
        let mut t = OpTracker::new(SlotPolicy::PerKey);
        assert!(t.try_begin("x"));
        assert!(!t.try_begin("x"));
        t.finish(&"x");
        assert!(t.try_begin("x"));
    }

    #[test]
    fn finishing_unknown_key_is_a_no_op() {
        let mut t: OpTracker<&str> = OpTracker::new(SlotPolicy::Single);
        t.finish(&"never-started");
        assert!(t.is_idle());
    }
}
