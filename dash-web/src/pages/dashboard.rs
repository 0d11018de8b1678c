//! Dashboard overview with a themed chart placeholder

use dash_common::{ChartConfig, ChartSeries, ThemeColors};
use dash_ui::ChartContainer;
use dioxus::prelude::*;

fn pipeline_chart_config() -> ChartConfig {
    let mut config = ChartConfig::new();
    config.insert(
        "leads".to_string(),
        ChartSeries {
            label: Some("Leads".to_string()),
            color: Some("#f97316".to_string()),
            theme: None,
        },
    );
    config.insert(
        "customers".to_string(),
        ChartSeries {
            label: Some("Customers".to_string()),
            color: None,
            theme: Some(ThemeColors {
                light: "#003b7a".to_string(),
                dark: "#60a5fa".to_string(),
            }),
        },
    );
    config
}

/// Monthly bar heights (percent of chart height) for the placeholder chart
const PIPELINE: &[(&str, u32, u32)] = &[
    ("Jan", 40, 20),
    ("Feb", 55, 30),
    ("Mar", 70, 35),
    ("Apr", 60, 45),
    ("May", 85, 50),
    ("Jun", 90, 65),
];

#[component]
pub fn Dashboard() -> Element {
    let config = pipeline_chart_config();

    rsx! {
        div { class: "p-6 space-y-4",
            h2 { class: "text-sm font-semibold uppercase tracking-wide text-gray-400",
                "Pipeline"
            }
            ChartContainer { id: "pipeline".to_string(), config,
                div { class: "flex h-full w-full items-end gap-4",
                    for (month, leads, customers) in PIPELINE.iter() {
                        div {
                            key: "{month}",
                            class: "flex flex-1 flex-col items-center gap-1 h-full justify-end",
                            div { class: "flex w-full items-end gap-1 h-full",
                                div {
                                    class: "flex-1 rounded-t",
                                    style: "height: {leads}%; background: var(--color-leads);",
                                }
                                div {
                                    class: "flex-1 rounded-t",
                                    style: "height: {customers}%; background: var(--color-customers);",
                                }
                            }
                            span { class: "text-gray-400", "{month}" }
                        }
                    }
                }
            }
        }
    }
}
