//! Chart color theming
//!
//! Charts reference series colors through `--color-<key>` custom properties.
//! This module turns a chart's color configuration into the stylesheet that
//! declares those properties for the light and dark themes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-theme color pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub light: String,
    pub dark: String,
}

/// Display configuration for one chart series
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    #[serde(default)]
    pub label: Option<String>,
    /// Color used by both themes unless `theme` overrides it
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub theme: Option<ThemeColors>,
}

impl ChartSeries {
    fn color_for(&self, theme: Theme) -> Option<&str> {
        match (&self.theme, theme) {
            (Some(colors), Theme::Light) => Some(colors.light.as_str()),
            (Some(colors), Theme::Dark) => Some(colors.dark.as_str()),
            (None, _) => self.color.as_deref(),
        }
    }
}

/// Series key -> configuration. Keys are emitted in sorted order.
pub type ChartConfig = BTreeMap<String, ChartSeries>;

#[derive(Debug, Clone, Copy)]
enum Theme {
    Light,
    Dark,
}

impl Theme {
    const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    fn selector_prefix(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => ".dark ",
        }
    }
}

/// Build the stylesheet for the chart tagged `data-chart="{chart_id}"`.
///
/// Returns `None` if no series has a color, in which case no style tag is needed.
pub fn chart_stylesheet(chart_id: &str, config: &ChartConfig) -> Option<String> {
    let colored: Vec<(&String, &ChartSeries)> = config
        .iter()
        .filter(|(_, series)| series.color.is_some() || series.theme.is_some())
        .collect();
    if colored.is_empty() {
        return None;
    }

    let blocks: Vec<String> = Theme::ALL
        .iter()
        .map(|theme| {
            let declarations: String = colored
                .iter()
                .filter_map(|(key, series)| {
                    series
                        .color_for(*theme)
                        .map(|color| format!("  --color-{key}: {color};\n"))
                })
                .collect();
            format!(
                "{}[data-chart={chart_id}] {{\n{declarations}}}",
                theme.selector_prefix()
            )
        })
        .collect();

    Some(blocks.join("\n"))
}
