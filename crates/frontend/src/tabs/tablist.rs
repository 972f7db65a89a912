use leptos::ev;
use leptos::prelude::*;
use tabs_core::attrs;
use tabs_core::{LiveRegion, TabId, TabListId, TabListState};

use super::context::TabsContext;
use super::keys::{self, NavDirection};
use crate::shared::dom;

/// Per-list state handed to `Tab` children through context.
#[derive(Clone, Copy)]
pub struct TabListContext {
    pub(crate) container: TabsContext,
    registry: RwSignal<TabListState<String>>,
    removals: RwSignal<Vec<TabId>>,
}

impl TabListContext {
    /// Adds a tab to the ordered list. The selection-resolution pass this
    /// requests is coalesced: however many tabs register in one turn, it
    /// runs once, after all of them.
    pub fn register_tab(&self, id: TabId, model: String) {
        log::debug!("tablist: register tab '{}'", model);
        self.registry.update(|state| state.register_tab(id, model));
    }

    /// Pins an externally-supplied position on a tab.
    pub fn set_tab_index(&self, id: TabId, index: usize) {
        self.registry.update(|state| state.set_tab_index(id, index));
    }

    /// Called from a tab's teardown. The tab is flagged as destroying right
    /// away; the actual unregistration is queued for the end-of-turn flush,
    /// so every tab departing in the same batch carries its flag before any
    /// reselection runs. Safe to call while the list itself tears down.
    pub fn queue_unregister(&self, id: TabId) {
        let _ = self.registry.try_update(|state| state.mark_destroying(id));
        let _ = self.removals.try_update(|queue| queue.push(id));
    }

    /// Commits `model` as the container selection.
    pub fn select_model(&self, model: &str) {
        self.container.select(model);
    }

    /// Reactive: whether `model` equals the container selection.
    pub fn is_selected(&self, model: &str) -> bool {
        self.container
            .selection
            .with(|selection| selection.as_deref() == Some(model))
    }

    /// Selects the tab at `index`; out of range is a no-op.
    pub fn select_tab_by_index(&self, index: usize) {
        let model = self
            .registry
            .with_untracked(|state| state.tab_at(index).map(|tab| tab.model.clone()));
        if let Some(model) = model {
            self.container.select(&model);
        }
    }

    /// Selects the tab carrying `model`; no match is a no-op.
    pub fn select_tab_by_model(&self, model: &str) {
        let known = self
            .registry
            .with_untracked(|state| state.tab_by_model(&model.to_string()).is_some());
        if known {
            self.container.select(model);
        }
    }

    /// Reactive: the selected tab's model, if it belongs to this list.
    pub fn selected_tab(&self) -> Option<String> {
        let selection = self.container.selection.get();
        self.registry.with(|state| {
            state
                .selected_tab(selection.as_ref())
                .map(|tab| tab.model.clone())
        })
    }

    fn navigate(&self, direction: NavDirection) -> Option<String> {
        let selection = self.container.selection.get_untracked();
        let target = self.registry.with_untracked(|state| match direction {
            NavDirection::Previous => state.select_previous(selection.as_ref()),
            NavDirection::Next => state.select_next(selection.as_ref()),
        });
        if let Some(model) = &target {
            self.container.select(model);
        }
        target
    }
}

/// Keyboard-navigable tab list. Child `Tab`s register themselves as they
/// are created; the list keeps their order, resolves the selection and maps
/// arrow keys to previous/next navigation.
#[component]
pub fn TabList(
    /// Label announced for the list by screenreaders.
    #[prop(into, optional)]
    aria_label: String,
    /// Live-region politeness for notifications about list changes.
    #[prop(optional)]
    aria_live: LiveRegion,
    children: Children,
) -> impl IntoView {
    let container = use_context::<TabsContext>().expect("TabsContext context not found");
    let registry = RwSignal::new(TabListState::<String>::new());
    let removals = RwSignal::new(Vec::new());
    let ctx = TabListContext {
        container,
        registry,
        removals,
    };
    provide_context(ctx);

    let list_id = TabListId::fresh();
    container.register_tab_list(list_id);
    on_cleanup(move || container.unregister_tab_list(list_id));

    // End-of-turn resolution pass. Runs once per batch of registrations;
    // the pending flag is consumed without re-notifying the registry.
    Effect::new(move |_| {
        registry.track();
        let requested = registry
            .try_update_untracked(|state| state.take_resolve_request())
            .unwrap_or(false);
        if !requested {
            return;
        }
        let selection = container.selection.get_untracked();
        let resolved =
            registry.with_untracked(|state| state.resolve_selection(selection.as_ref()));
        if let Some(model) = resolved {
            container.select(&model);
        }
    });

    // End-of-turn removal flush, in unregistration call order. By now every
    // tab departing in this batch carries its destroying flag, so the
    // reselection for one removal sees its doomed siblings. Dies with the
    // list: pending removals of a list being torn down are never flushed.
    Effect::new(move |_| {
        removals.track();
        let queue = removals
            .try_update_untracked(std::mem::take)
            .unwrap_or_default();
        for id in queue {
            let selection = container.selection.get_untracked();
            let replacement = registry
                .try_update(|state| state.unregister_tab(id, selection.as_ref()))
                .flatten();
            if let Some(model) = replacement {
                container.select(&model);
            }
        }
    });

    let on_keydown = move |event: ev::KeyboardEvent| {
        let Some(direction) = keys::nav_direction(&event.key()) else {
            return;
        };
        event.prevent_default();
        if let Some(model) = ctx.navigate(direction) {
            // Focus follows only once the DOM shows the new selection.
            request_animation_frame(move || dom::focus_tab(&model));
        }
    };

    view! {
        <div
            class="tab-list"
            role=move || registry.with(|state| state.aria_role())
            aria-label=aria_label
            aria-live=aria_live.as_str()
            aria-relevant=attrs::ARIA_RELEVANT
            aria-multiselectable=move || registry.with(|state| state.aria_multiselectable())
            on:keydown=on_keydown
        >
            {children()}
        </div>
    }
}
