//! dash-ui - UI components for the dash dashboard
//!
//! Contains the responsive navigation panel (provider hook, panel, controls,
//! sections) and the pure view components around it.

pub mod components;
pub mod wasm_utils;

pub use components::*;
pub use dash_common::{
    ChartConfig, ChartSeries, MenuEntry, MenuSection, NavIcon, PanelConfig, PanelError,
    PanelState, ThemeColors,
};
