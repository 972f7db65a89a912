use leptos::prelude::*;

use super::context::TabsContext;
use crate::shared::dom::{panel_dom_id, tab_dom_id};

/// Content pane for one tab, hidden unless its model is the current
/// selection.
#[component]
pub fn TabPanel(
    /// Model key of the tab this panel belongs to.
    #[prop(into)]
    model: String,
    children: Children,
) -> impl IntoView {
    let container = use_context::<TabsContext>().expect("TabsContext context not found");

    let model_for_active = model.clone();
    let is_active = Memo::new(move |_| {
        container
            .selection
            .with(|selection| selection.as_deref() == Some(model_for_active.as_str()))
    });

    view! {
        <div
            class="tab-panel"
            class:tab-panel--hidden=move || !is_active.get()
            id=panel_dom_id(&model)
            role="tabpanel"
            aria-labelledby=tab_dom_id(&model)
            data-tab-key=model.clone()
        >
            {children()}
        </div>
    }
}
