//! Structural pieces for composing panel contents

use chrono::Datelike;
use dioxus::prelude::*;

use super::provider::PanelHandle;

#[component]
pub fn PanelHeader(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.unwrap_or_default();
    rsx! {
        header { class: "flex h-14 shrink-0 items-center gap-4 border-b border-border-subtle px-4 py-2 {extra}",
            {children}
        }
    }
}

/// Panel title. Kept for screen readers but hidden on the compact rail.
#[component]
pub fn PanelHeaderTitle(
    panel: PanelHandle,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let hidden = if panel.state().is_compact() { "sr-only" } else { "" };
    let extra = class.unwrap_or_default();
    rsx! {
        span { class: "text-base font-semibold truncate {hidden} {extra}", {children} }
    }
}

/// Scrollable navigation area
#[component]
pub fn PanelContent(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.unwrap_or_default();
    rsx! {
        nav { class: "flex-1 overflow-y-auto p-2 {extra}", {children} }
    }
}

#[component]
pub fn PanelGroup(children: Element) -> Element {
    rsx! {
        div { class: "pb-4", {children} }
    }
}

/// Group heading. Hidden on the compact rail like the title.
#[component]
pub fn PanelGroupLabel(panel: PanelHandle, children: Element) -> Element {
    let hidden = if panel.state().is_compact() { "sr-only" } else { "" };
    rsx! {
        div { class: "px-2 py-1.5 {hidden}",
            div { class: "text-xs font-medium uppercase tracking-wide text-gray-400",
                {children}
            }
        }
    }
}

#[component]
pub fn PanelFooter(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.unwrap_or_default();
    rsx! {
        footer { class: "shrink-0 border-t border-border-subtle px-2 py-2 {extra}", {children} }
    }
}

/// "Owner © year" line for the panel footer. Just the year on the compact rail.
#[component]
pub fn CopyrightLine(owner: String, #[props(default)] compact: bool) -> Element {
    let text = copyright_text(&owner, chrono::Local::now().year(), compact);
    rsx! {
        p { class: "text-center text-xs font-bold text-gray-400 truncate", "{text}" }
    }
}

fn copyright_text(owner: &str, year: i32, compact: bool) -> String {
    if compact {
        format!("© {year}")
    } else {
        format!("{owner} © {year}")
    }
}
