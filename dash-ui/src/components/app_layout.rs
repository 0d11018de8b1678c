//! Dashboard layout view component
//!
//! Places the navigation panel, its mobile overlay, an optional header, and
//! the page content. Content is offset by the rail width on desktop and not at
//! all on mobile, where the drawer floats over it.

use dash_common::PanelLayout;
use dioxus::prelude::*;

use crate::components::panel::{PanelHandle, PanelOverlay};

/// Dashboard layout view (pure, props-based)
#[component]
pub fn DashboardLayoutView(
    panel: PanelHandle,
    /// The `Panel` with its contents
    sidebar: Element,
    /// Main content (typically the router outlet)
    children: Element,
    /// Optional header above the content
    #[props(default)]
    header: Option<Element>,
) -> Element {
    let config = panel.config();
    let offset_px = PanelLayout::resolve(&panel.state(), &config).content_offset_px();
    let transition_ms = config.transition_ms;

    rsx! {
        div { class: "min-h-screen bg-surface-base text-gray-200",
            {sidebar}
            PanelOverlay { panel }
            div {
                class: "flex min-h-screen min-w-0 flex-col ease-in-out",
                style: "margin-left: {offset_px}px; transition-property: margin-left; transition-duration: {transition_ms}ms;",
                if let Some(h) = header {
                    {h}
                }
                main { class: "flex-1 overflow-y-auto", {children} }
            }
        }
    }
}
