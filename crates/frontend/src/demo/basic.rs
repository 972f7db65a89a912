use leptos::prelude::*;

use crate::tabs::{Tab, TabList, TabPanel, Tabs};

/// Static group of three tabs.
#[component]
pub fn BasicTabs() -> impl IntoView {
    let on_select = Callback::new(|model: String| {
        log::info!("basic demo: selected '{}'", model);
    });

    view! {
        <section class="demo-section">
            <h2>"Basic"</h2>
            <Tabs on_select=on_select>
                <TabList aria_label="Basic demo tabs">
                    <Tab model="tab-a">"Tab A"</Tab>
                    <Tab model="tab-b">"Tab B"</Tab>
                    <Tab model="tab-c">"Tab C"</Tab>
                </TabList>
                <TabPanel model="tab-a">"Contents of the first panel."</TabPanel>
                <TabPanel model="tab-b">"Contents of the second panel."</TabPanel>
                <TabPanel model="tab-c">"Contents of the third panel."</TabPanel>
            </Tabs>
        </section>
    }
}
