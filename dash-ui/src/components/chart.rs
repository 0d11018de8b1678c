//! Chart container theming
//!
//! The charting widget itself is external. These components only scope a
//! chart under `data-chart` and inject its `--color-*` variables.

use dash_common::{chart_stylesheet, ChartConfig};
use dioxus::prelude::*;

/// Wraps a chart and declares its series colors
#[component]
pub fn ChartContainer(
    /// Unique chart id, used in the `data-chart` selector
    id: String,
    config: ChartConfig,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let chart_id = format!("chart-{id}");
    let extra = class.unwrap_or_default();

    rsx! {
        div {
            class: "flex aspect-video justify-center text-xs {extra}",
            "data-chart": "{chart_id}",
            ChartStyle { id: chart_id.clone(), config }
            {children}
        }
    }
}

/// `<style>` tag for one chart. Renders nothing when no series has a color.
#[component]
pub fn ChartStyle(id: String, config: ChartConfig) -> Element {
    let Some(css) = chart_stylesheet(&id, &config) else {
        return rsx! {};
    };

    rsx! {
        style { dangerous_inner_html: "{css}" }
    }
}
