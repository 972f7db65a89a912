use leptos::prelude::*;
use tabs_core::TabId;

use super::tablist::TabListContext;
use crate::shared::dom::{panel_dom_id, tab_dom_id};

/// One selectable tab. Registers itself with the enclosing `TabList` when
/// created and unregisters through the deferred removal queue when torn
/// down.
#[component]
pub fn Tab(
    /// Model key correlating this tab with the container selection.
    #[prop(into)]
    model: String,
    /// Externally-supplied position, e.g. from an enclosing loop index.
    #[prop(into, optional)]
    index: Option<usize>,
    children: Children,
) -> impl IntoView {
    let list = use_context::<TabListContext>().expect("TabListContext context not found");

    let id = TabId::fresh();
    list.register_tab(id, model.clone());
    if let Some(index) = index {
        list.set_tab_index(id, index);
    }

    let model_for_cleanup = model.clone();
    on_cleanup(move || {
        log::debug!("tab: teardown '{}'", model_for_cleanup);
        list.queue_unregister(id);
    });

    let model_for_selected = model.clone();
    let is_selected = Memo::new(move |_| list.is_selected(&model_for_selected));

    let model_for_click = model.clone();
    let on_click = move |_| list.select_model(&model_for_click);

    view! {
        <button
            class="tab"
            class:active=is_selected
            id=tab_dom_id(&model)
            role="tab"
            aria-selected=move || if is_selected.get() { "true" } else { "false" }
            aria-controls=panel_dom_id(&model)
            tabindex=move || if is_selected.get() { "0" } else { "-1" }
            on:click=on_click
        >
            {children()}
        </button>
    }
}
