//! Unstyled button base

use dioxus::prelude::*;

/// Chromeless button - accessibility attributes and click handling without
/// visual styling. Callers supply all classes.
#[component]
pub fn ChromelessButton(
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    /// `aria-current`, e.g. `"page"` for the active menu entry
    #[props(default)]
    aria_current: Option<&'static str>,
    #[props(default)] aria_expanded: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let aria_expanded = aria_expanded.map(|expanded| if expanded { "true" } else { "false" });

    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_current,
            aria_expanded,
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
