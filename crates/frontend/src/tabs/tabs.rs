use leptos::prelude::*;

use super::context::TabsContext;

/// Tab container: owns the selection shared by its tab lists and panels
/// and announces selection changes to the host.
#[component]
pub fn Tabs(
    /// Initially selected model key.
    #[prop(into, optional)]
    selection: Option<String>,
    /// Called with the model key after every selection change.
    #[prop(into, optional)]
    on_select: Option<Callback<String>>,
    children: Children,
) -> impl IntoView {
    let ctx = TabsContext::new(selection);
    provide_context(ctx);

    if let Some(on_select) = on_select {
        Effect::new(move |previous: Option<Option<String>>| {
            let selection = ctx.selection.get();
            if let Some(previous) = previous {
                if previous != selection {
                    if let Some(model) = &selection {
                        on_select.run(model.clone());
                    }
                }
            }
            selection
        });
    }

    view! { <div class="tabs">{children()}</div> }
}
