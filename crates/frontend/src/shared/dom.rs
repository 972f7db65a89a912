//! Small DOM helpers shared by the tab components.

use wasm_bindgen::JsCast;

/// Element id of the tab button for a model key.
pub fn tab_dom_id(model: &str) -> String {
    format!("{}-tab", model)
}

/// Element id of the panel for a model key.
pub fn panel_dom_id(model: &str) -> String {
    format!("{}-panel", model)
}

/// Moves focus to the tab button for `model`. A tab that is no longer in
/// the document is silently skipped.
pub fn focus_tab(model: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(&tab_dom_id(model)));

    if let Some(element) = element {
        if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
            let _ = element.focus();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_ids_derive_from_the_model() {
        assert_eq!(tab_dom_id("overview"), "overview-tab");
        assert_eq!(panel_dom_id("overview"), "overview-panel");
    }
}
