//! Navigation menu rendering
//!
//! `MenuList` is a pure function of its entries and the current route. It
//! never navigates itself; the caller decides what a click does.

use dash_common::{active_index, MenuEntry};
use dioxus::prelude::*;

use crate::components::icons::MenuEntryIcon;
use crate::components::ChromelessButton;

/// Ordered list of navigation entries with the current route highlighted
#[component]
pub fn MenuList(
    entries: &'static [MenuEntry],
    /// Path reported by the router, compared verbatim to each entry's route
    current_route: String,
    /// Icon-only rendering for the collapsed rail
    #[props(default)]
    compact: bool,
    on_navigate: EventHandler<&'static str>,
) -> Element {
    let active = active_index(entries, &current_route);

    rsx! {
        div { class: "space-y-1",
            for (index, entry) in entries.iter().enumerate() {
                MenuButton {
                    // Routes may repeat, positions don't
                    key: "{index}",
                    entry: *entry,
                    is_active: active == Some(index),
                    compact,
                    onclick: move |_| on_navigate.call(entry.route),
                }
            }
        }
    }
}

/// One menu entry. In compact mode only the icon is shown and the label moves
/// to the tooltip and accessible name.
#[component]
pub fn MenuButton(
    entry: MenuEntry,
    is_active: bool,
    #[props(default)] compact: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let state_class = if is_active {
        "bg-orange-500 text-white shadow-md"
    } else {
        "text-gray-300 hover:bg-hover hover:text-white"
    };
    let justify = if compact { "justify-center" } else { "" };
    let label = entry.label.to_string();

    rsx! {
        ChromelessButton {
            class: Some(
                format!(
                    "flex w-full items-center gap-3 rounded-md px-3 py-2 text-sm font-medium transition-colors {state_class} {justify}",
                ),
            ),
            title: if compact { Some(label.clone()) } else { None },
            aria_label: if compact { Some(label.clone()) } else { None },
            aria_current: if is_active { Some("page") } else { None },
            onclick,
            MenuEntryIcon { icon: entry.icon, class: "w-5 h-5 shrink-0" }
            if !compact {
                span { class: "truncate", "{label}" }
            }
        }
    }
}
