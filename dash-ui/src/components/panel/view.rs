use dash_common::PanelLayout;
use dioxus::prelude::*;

use super::controls::PanelToggleControl;
use super::provider::PanelHandle;

/// The navigation panel.
///
/// Desktop: fixed rail at one of two widths, with the collapse toggle on its
/// edge. Mobile: drawer that stays mounted and slides by `data-state`.
/// Reads state only; never writes it.
#[component]
pub fn Panel(
    panel: PanelHandle,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let config = panel.config();
    let layout = PanelLayout::resolve(&panel.state(), &config);
    let transition_ms = config.transition_ms;
    let extra = class.unwrap_or_default();

    match layout {
        PanelLayout::Drawer { width_px, state } => rsx! {
            aside {
                class: "fixed inset-y-0 left-0 z-50 flex flex-col border-r border-border-subtle bg-surface-raised ease-in-out data-[state=closed]:-translate-x-full data-[state=open]:translate-x-0 {extra}",
                style: "width: {width_px}px; transition-property: transform; transition-duration: {transition_ms}ms;",
                "data-state": state.as_attr(),
                {children}
            }
        },
        PanelLayout::Rail { width_px, compact } => rsx! {
            aside {
                class: "fixed inset-y-0 left-0 z-30 flex flex-col h-dvh border-r border-border-subtle bg-surface-raised ease-in-out {extra}",
                style: "width: {width_px}px; transition-property: width; transition-duration: {transition_ms}ms;",
                "data-compact": if compact { "true" } else { "false" },
                {children}
                PanelToggleControl { panel }
            }
        },
    }
}
