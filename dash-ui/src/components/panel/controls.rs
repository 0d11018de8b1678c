use dash_common::ControlVisibility;
use dioxus::prelude::*;

use super::provider::PanelHandle;
use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, MenuIcon};
use crate::components::ChromelessButton;

/// Desktop collapse toggle, pinned to the rail's right edge
#[component]
pub fn PanelToggleControl(panel: PanelHandle) -> Element {
    let state = panel.state();
    if !ControlVisibility::of(&state).toggle {
        return rsx! {};
    }
    let collapsed = state.collapsed;

    rsx! {
        ChromelessButton {
            class: Some(
                "absolute -right-3 top-24 flex h-6 w-6 items-center justify-center rounded-full border border-border-default bg-surface-raised text-gray-400 shadow-sm hover:text-white"
                    .to_string(),
            ),
            aria_expanded: Some(!collapsed),
            onclick: move |_| panel.collapse(!collapsed),
            if collapsed {
                ChevronRightIcon { class: "h-3 w-3" }
            } else {
                ChevronLeftIcon { class: "h-3 w-3" }
            }
            span { class: "sr-only", "Toggle panel" }
        }
    }
}

/// Mobile button that opens the drawer
#[component]
pub fn PanelOpenTrigger(
    panel: PanelHandle,
    /// Show the "Menu" label next to the icon
    #[props(default = true)]
    show_text: bool,
    #[props(default)] class: Option<String>,
) -> Element {
    let state = panel.state();
    if !ControlVisibility::of(&state).trigger {
        return rsx! {};
    }
    let extra = class.unwrap_or_default();

    rsx! {
        ChromelessButton {
            class: Some(format!("inline-flex items-center gap-x-2 text-sm font-semibold {extra}")),
            aria_label: if show_text { None } else { Some("Open menu".to_string()) },
            aria_expanded: Some(state.mobile_open),
            onclick: move |_| panel.set_mobile_open(true),
            MenuIcon { class: "h-4 w-4" }
            if show_text {
                span { "Menu" }
            }
        }
    }
}

/// Dimmed backdrop behind the open drawer; clicking it closes the drawer.
///
/// z-40 puts it above page content and below the drawer (z-50).
#[component]
pub fn PanelOverlay(panel: PanelHandle) -> Element {
    if !ControlVisibility::of(&panel.state()).overlay {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 z-40 bg-black/50",
            "data-testid": "panel-overlay",
            onclick: move |_| panel.set_mobile_open(false),
        }
    }
}
