//! Placeholder pages for screens implemented outside this crate

use dioxus::prelude::*;

#[component]
fn PagePlaceholder(description: &'static str) -> Element {
    rsx! {
        div { class: "p-6",
            p { class: "text-sm text-gray-400", "{description}" }
        }
    }
}

#[component]
pub fn Leads() -> Element {
    rsx! {
        PagePlaceholder { description: "Track and qualify incoming leads." }
    }
}

#[component]
pub fn Customers() -> Element {
    rsx! {
        PagePlaceholder { description: "Manage customer accounts and contacts." }
    }
}

#[component]
pub fn Calendar() -> Element {
    rsx! {
        PagePlaceholder { description: "Schedule meetings and follow-up tasks." }
    }
}

#[component]
pub fn Settings() -> Element {
    rsx! {
        PagePlaceholder { description: "Account and workspace settings." }
    }
}

#[component]
pub fn Help() -> Element {
    rsx! {
        PagePlaceholder { description: "You have been signed out." }
    }
}
