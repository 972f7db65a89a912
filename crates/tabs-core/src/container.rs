//! Container-side registry of active tab lists.
//!
//! The container owns the current selection value; this module only tracks
//! which tab lists are attached to it. One container may drive several
//! lists that share a single selection.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of one tab list registered with a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabListId(u64);

impl TabListId {
    pub fn fresh() -> Self {
        TabListId(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Active tab lists, in registration order.
///
/// Registration is idempotent so repeated calls within one lifecycle
/// transition collapse to a single entry.
#[derive(Debug, Clone, Default)]
pub struct TabListRegistry {
    lists: Vec<TabListId>,
}

impl TabListRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: TabListId) {
        if !self.contains(id) {
            self.lists.push(id);
        }
    }

    pub fn unregister(&mut self, id: TabListId) {
        self.lists.retain(|&list| list != id);
    }

    pub fn contains(&self, id: TabListId) -> bool {
        self.lists.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = TabListRegistry::new();
        let id = TabListId::fresh();

        registry.register(id);
        registry.register(id);

        assert_eq!(registry.len(), 1);
        assert!(registry.contains(id));
    }

    #[test]
    fn test_unregister_removes_only_the_target() {
        let mut registry = TabListRegistry::new();
        let first = TabListId::fresh();
        let second = TabListId::fresh();
        registry.register(first);
        registry.register(second);

        registry.unregister(first);

        assert!(!registry.contains(first));
        assert!(registry.contains(second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister_unknown_is_a_noop() {
        let mut registry = TabListRegistry::new();
        registry.register(TabListId::fresh());

        registry.unregister(TabListId::fresh());

        assert_eq!(registry.len(), 1);
    }
}
