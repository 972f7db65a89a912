use leptos::prelude::*;
use uuid::Uuid;

use crate::tabs::{Tab, TabList, TabPanel, Tabs};

#[derive(Clone, Debug, PartialEq)]
struct Item {
    id: Uuid,
    label: String,
}

/// Dynamic group: items come and go at runtime, including removal of
/// several checked items in one batch.
#[component]
pub fn DynamicTabs() -> impl IntoView {
    let items = RwSignal::new(Vec::<Item>::new());
    let checked = RwSignal::new(Vec::<Uuid>::new());
    let counter = StoredValue::new(0usize);

    let add_item = move |_| {
        counter.update_value(|count| *count += 1);
        let number = counter.get_value();
        items.update(|items| {
            items.push(Item {
                id: Uuid::new_v4(),
                label: format!("Item {}", number),
            });
        });
    };

    let toggle = move |id: Uuid| {
        checked.update(|checked| {
            if let Some(position) = checked.iter().position(|&known| known == id) {
                checked.remove(position);
            } else {
                checked.push(id);
            }
        });
    };

    let remove_checked = move |_| {
        let doomed = checked.get_untracked();
        items.update(|items| items.retain(|item| !doomed.contains(&item.id)));
        checked.set(Vec::new());
    };

    view! {
        <section class="demo-section">
            <h2>"Dynamic"</h2>
            <div class="demo-controls">
                <button on:click=add_item>"Add an Item"</button>
                <button on:click=remove_checked>
                    {move || format!("Remove {} Item(s)", checked.with(|checked| checked.len()))}
                </button>
            </div>
            <Tabs>
                <TabList aria_label="Dynamic demo tabs">
                    <For
                        each=move || items.get()
                        key=|item| item.id
                        children=move |item: Item| {
                            view! { <Tab model=item.id.to_string()>{item.label.clone()}</Tab> }
                        }
                    />
                </TabList>
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item: Item| {
                        let item_id = item.id;
                        view! {
                            <TabPanel model=item.id.to_string()>
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            checked.with(|checked| checked.contains(&item_id))
                                        }
                                        on:change=move |_| toggle(item_id)
                                    />
                                    {format!("Remove {}", item.label)}
                                </label>
                            </TabPanel>
                        }
                    }
                />
            </Tabs>
        </section>
    }
}
