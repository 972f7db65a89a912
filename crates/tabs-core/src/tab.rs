use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TAB_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of one registered tab instance.
///
/// Identity comparisons always go through the id, never the model: two tabs
/// may carry equal models and still be distinct entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId(u64);

impl TabId {
    /// Allocates a fresh, process-unique id.
    pub fn fresh() -> Self {
        TabId(NEXT_TAB_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// One tab as seen by the tab list.
#[derive(Debug, Clone, PartialEq)]
pub struct TabEntry<M> {
    pub id: TabId,
    /// Position of the tab in its enumeration context. The registry keeps
    /// it equal to the entry's list position unless the host supplies its
    /// own numbering through `TabListState::set_tab_index`.
    pub index: usize,
    /// Opaque application identity correlating the tab with the container's
    /// current selection.
    pub model: M,
    /// The tab is mid-teardown: still present in the list, but skipped by
    /// navigation except as a last resort.
    pub destroying: bool,
}

impl<M> TabEntry<M> {
    pub fn new(id: TabId, index: usize, model: M) -> Self {
        Self {
            id,
            index,
            model,
            destroying: false,
        }
    }
}
