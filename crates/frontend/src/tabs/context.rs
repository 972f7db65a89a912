use leptos::prelude::*;
use tabs_core::{TabListId, TabListRegistry};

/// Container state shared by every tab list under one `Tabs` component.
///
/// Owns the current selection (an opaque model key; a tab carrying an
/// equal key reports itself as selected) and the registry of attached
/// lists. Handed to descendants through Leptos context.
#[derive(Clone, Copy)]
pub struct TabsContext {
    pub selection: RwSignal<Option<String>>,
    lists: RwSignal<TabListRegistry>,
}

impl TabsContext {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            selection: RwSignal::new(initial),
            lists: RwSignal::new(TabListRegistry::new()),
        }
    }

    /// Commits a new selection.
    pub fn select(&self, model: &str) {
        log::debug!("tabs: select '{}'", model);
        self.selection.set(Some(model.to_string()));
    }

    pub fn selection(&self) -> Option<String> {
        self.selection.get()
    }

    pub fn register_tab_list(&self, id: TabListId) {
        let known = self.lists.with_untracked(|lists| lists.contains(id));
        if !known {
            self.lists.update(|lists| lists.register(id));
        }
    }

    pub fn unregister_tab_list(&self, id: TabListId) {
        // A list may tear down after the container is already gone.
        let _ = self.lists.try_update(|lists| lists.unregister(id));
    }
}
