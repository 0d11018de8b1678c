//! dash-common - framework-free logic for the dash dashboard
//!
//! Holds the navigation panel state machine and everything the UI layer
//! derives from it (layout, control visibility, menu matching, chart styles).
//! Nothing in here touches the DOM, so it can be unit tested on the host.

pub mod chart_style;
pub mod config;
pub mod layout;
pub mod menu;
pub mod panel_state;
pub mod viewport;

pub use chart_style::{chart_stylesheet, ChartConfig, ChartSeries, ThemeColors};
pub use config::{ConfigError, PanelConfig};
pub use layout::{ControlVisibility, DrawerState, PanelLayout};
pub use menu::{active_index, MenuEntry, MenuSection, NavIcon};
pub use panel_state::{PanelError, PanelState, PanelStateStore, ViewportTransition};
pub use viewport::ViewportClassifier;
