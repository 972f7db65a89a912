use crate::demo::{BasicTabs, DynamicTabs};
use leptos::prelude::*;

/// Demo application shell: two independent tab groups.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-layout">
            <h1>"Tabs demo"</h1>
            <BasicTabs />
            <DynamicTabs />
        </main>
    }
}
