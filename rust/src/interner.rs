//! String interning for activity ids.
//!
//! Converts string activity IDs to dense integer handles so the passes can use
//! plain vectors instead of hash lookups.

use rustc_hash::FxHashMap;

/// Interned activity handle (u32 for compact storage and fast hashing).
pub type ActivityId = u32;

/// Maps activity id strings to integer handles and back.
///
/// Handles are assigned in insertion order, so interning ids in sorted order makes
/// handle order equal to id order.
#[derive(Debug, Clone)]
pub struct ActivityIndex {
    to_int: FxHashMap<String, ActivityId>,
    from_int: Vec<String>,
}

impl ActivityIndex {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_int: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_int: Vec::with_capacity(capacity),
        }
    }

    /// Intern a string, returning its handle and whether it was newly added.
    pub fn intern(&mut self, s: &str) -> (ActivityId, bool) {
        if let Some(&id) = self.to_int.get(s) {
            return (id, false);
        }
        let id = self.from_int.len() as ActivityId;
        self.from_int.push(s.to_string());
        self.to_int.insert(s.to_string(), id);
        (id, true)
    }

    #[inline]
    pub fn get(&self, s: &str) -> Option<ActivityId> {
        self.to_int.get(s).copied()
    }

    /// Get the string for a handle.
    ///
    /// Handles only come from this index, so an unknown handle is a caller bug.
    #[inline]
    pub fn resolve(&self, id: ActivityId) -> &str {
        &self.from_int[id as usize]
    }

    pub fn len(&self) -> usize {
        self.from_int.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from_int.is_empty()
    }
}

impl Default for ActivityIndex {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_resolve() {
        let mut index = ActivityIndex::with_capacity(10);

        let (a, new_a) = index.intern("A");
        let (b, new_b) = index.intern("B");
        let (a_again, new_again) = index.intern("A");

        assert!(new_a && new_b);
        assert!(!new_again);
        assert_eq!(a, a_again);
        assert_ne!(a, b);

        assert_eq!(index.resolve(a), "A");
        assert_eq!(index.resolve(b), "B");
        assert_eq!(index.get("B"), Some(b));
        assert_eq!(index.get("nonexistent"), None);
        assert_eq!(index.len(), 2);
    }
}
