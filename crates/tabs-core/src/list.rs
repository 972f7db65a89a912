//! Ordered tab registry and the single-selection state machine.
//!
//! The selection value itself is owned by the container and shared across
//! lists, so every operation that depends on it takes the current selection
//! as an argument and returns the model that should become selected; the
//! caller commits the change back to the container.

use crate::attrs;
use crate::tab::{TabEntry, TabId};

#[derive(Debug, Clone)]
pub struct TabListState<M> {
    tabs: Vec<TabEntry<M>>,
    resolve_pending: bool,
}

impl<M> Default for TabListState<M> {
    fn default() -> Self {
        Self {
            tabs: Vec::new(),
            resolve_pending: false,
        }
    }
}

impl<M: Clone + PartialEq> TabListState<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[TabEntry<M>] {
        &self.tabs
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.tabs.iter().any(|tab| tab.id == id)
    }

    pub fn tab_at(&self, index: usize) -> Option<&TabEntry<M>> {
        self.tabs.get(index)
    }

    pub fn tab_by_id(&self, id: TabId) -> Option<&TabEntry<M>> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    pub fn tab_by_model(&self, model: &M) -> Option<&TabEntry<M>> {
        self.tabs.iter().find(|tab| tab.model == *model)
    }

    /// Appends a tab and requests a (coalesced) selection resolution pass.
    /// Registering an already-known id is a no-op.
    pub fn register_tab(&mut self, id: TabId, model: M) {
        if self.contains(id) {
            return;
        }
        let index = self.tabs.len();
        self.tabs.push(TabEntry::new(id, index, model));
        self.resolve_pending = true;
    }

    /// Pins an externally-supplied position on a tab, e.g. the index handed
    /// out by an enclosing repeat construct. Positions are re-derived from
    /// list order on the next removal.
    pub fn set_tab_index(&mut self, id: TabId, index: usize) {
        if let Some(tab) = self.tabs.iter_mut().find(|tab| tab.id == id) {
            tab.index = index;
        }
    }

    /// Flags a tab as mid-teardown. It stays in the list and keeps its
    /// position, but navigation passes over it except as a last resort.
    pub fn mark_destroying(&mut self, id: TabId) {
        if let Some(tab) = self.tabs.iter_mut().find(|tab| tab.id == id) {
            tab.destroying = true;
        }
    }

    pub fn resolve_pending(&self) -> bool {
        self.resolve_pending
    }

    /// Consumes the pending-resolution request. Multiple registrations in
    /// one batch collapse into a single `true` here.
    pub fn take_resolve_request(&mut self) -> bool {
        std::mem::take(&mut self.resolve_pending)
    }

    /// The tab whose model equals the container's current selection.
    pub fn selected_tab(&self, selection: Option<&M>) -> Option<&TabEntry<M>> {
        let selection = selection?;
        self.tab_by_model(selection)
    }

    /// Initial-selection rule: with no current selection, or with exactly
    /// one tab, the tab at position 0 wins; otherwise the tab matching the
    /// selection wins. No match leaves the selection unresolved.
    pub fn resolve_selection(&self, selection: Option<&M>) -> Option<M> {
        match selection {
            None => self.tab_at(0).map(|tab| tab.model.clone()),
            Some(_) if self.tabs.len() == 1 => self.tab_at(0).map(|tab| tab.model.clone()),
            Some(selection) => self.tab_by_model(selection).map(|tab| tab.model.clone()),
        }
    }

    /// The model that "next" (right/down arrow) navigation should select,
    /// or `None` when there is nothing to do.
    pub fn select_next(&self, selection: Option<&M>) -> Option<M> {
        let selected = self.selected_tab(selection)?;
        let len = self.tabs.len();
        let mut idx = selected.index;

        let candidate = loop {
            idx += 1;
            // Next from the last tab wraps to the first.
            if idx == len {
                idx = 0;
            }
            match self.tabs.get(idx) {
                // A tab mid-teardown is passed over, except the selected tab
                // itself: stopping there keeps the walk finite when every
                // tab is going away.
                Some(tab) if tab.destroying && tab.id != selected.id => continue,
                other => break other,
            }
        };

        candidate.map(|tab| tab.model.clone())
    }

    /// The model that "previous" (left/up arrow) navigation should select,
    /// or `None` when there is nothing to do.
    pub fn select_previous(&self, selection: Option<&M>) -> Option<M> {
        let selected = self.selected_tab(selection)?;
        let len = self.tabs.len();
        let mut idx = selected.index;

        let candidate = loop {
            // Previous from the first tab wraps to the last; saturation
            // pins an empty walk to 0.
            idx = if idx == 0 {
                len.saturating_sub(1)
            } else {
                idx - 1
            };
            match self.tabs.get(idx) {
                Some(tab) if tab.destroying && tab.id != selected.id => continue,
                other => break other,
            }
        };

        candidate.map(|tab| tab.model.clone())
    }

    /// Removes a tab. When the removed tab is the selected one, a
    /// replacement is chosen first (select-next for position 0,
    /// select-previous otherwise) while the tab still sits among its
    /// siblings. Returns the replacement model to commit, if any.
    pub fn unregister_tab(&mut self, id: TabId, selection: Option<&M>) -> Option<M> {
        let entry = self.tab_by_id(id)?;
        let was_selected = selection.is_some_and(|selection| entry.model == *selection);
        let index = entry.index;

        let replacement = if was_selected {
            if index == 0 {
                self.select_next(selection)
            } else {
                self.select_previous(selection)
            }
        } else {
            None
        };

        self.tabs.retain(|tab| tab.id != id);
        self.reindex();

        replacement
    }

    pub fn is_interactive(&self) -> bool {
        !self.tabs.is_empty()
    }

    pub fn aria_role(&self) -> &'static str {
        attrs::list_role(self.is_interactive())
    }

    pub fn aria_multiselectable(&self) -> Option<&'static str> {
        attrs::multiselectable(self.is_interactive())
    }

    fn reindex(&mut self) {
        for (position, tab) in self.tabs.iter_mut().enumerate() {
            tab.index = position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Registers the given models in order and returns the state plus the
    /// ids in registration order.
    fn list_of(models: &[&str]) -> (TabListState<String>, Vec<TabId>) {
        let mut state = TabListState::new();
        let ids: Vec<TabId> = models
            .iter()
            .map(|model| {
                let id = TabId::fresh();
                state.register_tab(id, model.to_string());
                id
            })
            .collect();
        (state, ids)
    }

    /// Plays the container's role: commits a selection change when the
    /// state machine produced one.
    fn commit(selection: &mut Option<String>, change: Option<String>) {
        if let Some(model) = change {
            *selection = Some(model);
        }
    }

    /// One deferred resolution pass, as the component layer runs it at the
    /// end of a registration batch.
    fn flush_resolution(state: &mut TabListState<String>, selection: &mut Option<String>) {
        if state.take_resolve_request() {
            let change = state.resolve_selection(selection.as_ref());
            commit(selection, change);
        }
    }

    #[test]
    fn test_first_tab_selected_when_no_prior_selection() {
        for n in 1..=4 {
            let models: Vec<String> = (0..n).map(|i| format!("tab-{i}")).collect();
            let refs: Vec<&str> = models.iter().map(String::as_str).collect();
            let (mut state, _) = list_of(&refs);
            let mut selection = None;

            flush_resolution(&mut state, &mut selection);

            assert_eq!(selection.as_deref(), Some("tab-0"), "n = {n}");
        }
    }

    #[test]
    fn test_matching_selection_wins_regardless_of_registration_order() {
        let orders: [&[&str]; 3] = [&["a", "b", "c"], &["c", "a", "b"], &["b", "c", "a"]];
        for order in orders {
            let (mut state, _) = list_of(order);
            let mut selection = Some("b".to_string());

            flush_resolution(&mut state, &mut selection);

            assert_eq!(selection.as_deref(), Some("b"));
            assert_eq!(
                state.selected_tab(selection.as_ref()).unwrap().model,
                "b".to_string()
            );
        }
    }

    #[test]
    fn test_single_tab_overrides_stale_selection() {
        let (mut state, _) = list_of(&["only"]);
        let mut selection = Some("gone".to_string());

        flush_resolution(&mut state, &mut selection);

        assert_eq!(selection.as_deref(), Some("only"));
    }

    #[test]
    fn test_unmatched_selection_stays_unresolved() {
        let (mut state, _) = list_of(&["a", "b"]);
        let mut selection = Some("z".to_string());

        flush_resolution(&mut state, &mut selection);

        assert_eq!(selection.as_deref(), Some("z"));
        assert!(state.selected_tab(selection.as_ref()).is_none());
    }

    #[test]
    fn test_resolution_request_coalesces_per_batch() {
        let (mut state, _) = list_of(&["a", "b", "c"]);

        assert!(state.take_resolve_request());
        assert!(!state.take_resolve_request());
    }

    #[test]
    fn test_next_wraps_from_last_to_first() {
        let (state, _) = list_of(&["a", "b", "c"]);
        let selection = Some("c".to_string());

        assert_eq!(state.select_next(selection.as_ref()).as_deref(), Some("a"));
    }

    #[test]
    fn test_previous_wraps_from_first_to_last() {
        let (state, _) = list_of(&["a", "b", "c"]);
        let selection = Some("a".to_string());

        assert_eq!(
            state.select_previous(selection.as_ref()).as_deref(),
            Some("c")
        );
    }

    #[test]
    fn test_full_next_cycle_returns_to_start() {
        let (state, _) = list_of(&["a", "b", "c", "d"]);
        let mut selection = Some("b".to_string());

        for _ in 0..state.len() {
            let change = state.select_next(selection.as_ref());
            commit(&mut selection, change);
        }

        assert_eq!(selection.as_deref(), Some("b"));
    }

    #[test]
    fn test_three_next_calls_visit_b_c_a() {
        let (state, _) = list_of(&["a", "b", "c"]);
        let mut selection = Some("a".to_string());
        let mut visited = Vec::new();

        for _ in 0..3 {
            let change = state.select_next(selection.as_ref());
            commit(&mut selection, change);
            visited.push(selection.clone().unwrap());
        }

        assert_eq!(visited, ["b", "c", "a"]);
    }

    #[test]
    fn test_navigation_without_selection_is_a_noop() {
        let (state, _) = list_of(&["a", "b"]);

        assert_eq!(state.select_next(None), None);
        assert_eq!(state.select_previous(None), None);
    }

    #[test]
    fn test_navigating_an_empty_list_is_a_noop() {
        let state: TabListState<String> = TabListState::new();
        let selection = Some("a".to_string());

        assert_eq!(state.select_next(selection.as_ref()), None);
        assert_eq!(state.select_previous(selection.as_ref()), None);
    }

    #[test]
    fn test_navigation_skips_destroying_tabs() {
        let (mut state, ids) = list_of(&["a", "b", "c"]);
        state.mark_destroying(ids[1]);

        let from_a = Some("a".to_string());
        assert_eq!(state.select_next(from_a.as_ref()).as_deref(), Some("c"));

        let from_c = Some("c".to_string());
        assert_eq!(
            state.select_previous(from_c.as_ref()).as_deref(),
            Some("a")
        );
    }

    #[test]
    fn test_navigation_settles_on_selected_when_everything_is_destroying() {
        let (mut state, ids) = list_of(&["a", "b", "c"]);
        for id in &ids {
            state.mark_destroying(*id);
        }
        let selection = Some("b".to_string());

        // The walk must terminate, and only the originally-selected tab is
        // an acceptable destroying candidate.
        assert_eq!(state.select_next(selection.as_ref()).as_deref(), Some("b"));
        assert_eq!(
            state.select_previous(selection.as_ref()).as_deref(),
            Some("b")
        );
    }

    #[test]
    fn test_removing_selected_first_tab_promotes_the_second() {
        let (mut state, ids) = list_of(&["a", "b", "c"]);
        let mut selection = Some("a".to_string());

        let change = state.unregister_tab(ids[0], selection.as_ref());
        commit(&mut selection, change);

        assert_eq!(selection.as_deref(), Some("b"));
        assert_eq!(state.len(), 2);
        assert_eq!(state.tab_at(0).unwrap().model, "b");
    }

    #[test]
    fn test_removing_selected_inner_tab_selects_preceding() {
        let (mut state, ids) = list_of(&["a", "b", "c"]);
        let mut selection = Some("b".to_string());

        let change = state.unregister_tab(ids[1], selection.as_ref());
        commit(&mut selection, change);

        assert_eq!(selection.as_deref(), Some("a"));
    }

    #[test]
    fn test_removing_unselected_tab_keeps_selection() {
        let (mut state, ids) = list_of(&["a", "b", "c"]);
        let mut selection = Some("a".to_string());

        let change = state.unregister_tab(ids[2], selection.as_ref());
        commit(&mut selection, change);

        assert_eq!(selection.as_deref(), Some("a"));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_unregistering_unknown_id_is_a_noop() {
        let (mut state, _) = list_of(&["a"]);
        let selection = Some("a".to_string());

        assert_eq!(state.unregister_tab(TabId::fresh(), selection.as_ref()), None);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_bulk_removal_leaves_the_survivor_selected() {
        // Item 1 is selected; Items 1 and 2 go away in one batch. Both are
        // flagged as destroying before the first removal runs, so the
        // select-next pass for Item 1 (position 0) skips Item 2 and lands
        // on Item 3.
        let (mut state, ids) = list_of(&["item-1", "item-2", "item-3"]);
        let mut selection = Some("item-1".to_string());

        state.mark_destroying(ids[0]);
        state.mark_destroying(ids[1]);

        let change = state.unregister_tab(ids[0], selection.as_ref());
        commit(&mut selection, change);
        let change = state.unregister_tab(ids[1], selection.as_ref());
        commit(&mut selection, change);

        assert_eq!(selection.as_deref(), Some("item-3"));
        assert_eq!(state.len(), 1);
        assert_eq!(state.tab_at(0).unwrap().index, 0);
    }

    #[test]
    fn test_indices_follow_positions_after_removal() {
        let (mut state, ids) = list_of(&["a", "b", "c"]);

        state.unregister_tab(ids[0], None);

        let indices: Vec<usize> = state.tabs().iter().map(|tab| tab.index).collect();
        assert_eq!(indices, [0, 1]);
        assert_eq!(state.tab_at(0).unwrap().model, "b");
    }

    #[test]
    fn test_duplicate_registration_is_ignored() {
        let mut state = TabListState::new();
        let id = TabId::fresh();

        state.register_tab(id, "a".to_string());
        state.take_resolve_request();
        state.register_tab(id, "a".to_string());

        assert_eq!(state.len(), 1);
        assert!(!state.resolve_pending());
    }

    #[test]
    fn test_interactive_flag_tracks_emptiness() {
        let mut state: TabListState<String> = TabListState::new();
        assert_eq!(state.aria_role(), "presentation");
        assert_eq!(state.aria_multiselectable(), None);

        state.register_tab(TabId::fresh(), "a".to_string());
        assert_eq!(state.aria_role(), "tablist");
        assert_eq!(state.aria_multiselectable(), Some("false"));
    }

    #[test]
    fn test_select_by_position_and_model_lookups() {
        let (state, _) = list_of(&["a", "b"]);

        assert_eq!(state.tab_at(1).map(|tab| tab.model.clone()).as_deref(), Some("b"));
        assert_eq!(state.tab_at(5), None);
        assert!(state.tab_by_model(&"a".to_string()).is_some());
        assert!(state.tab_by_model(&"z".to_string()).is_none());
    }
}
