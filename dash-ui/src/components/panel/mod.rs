//! Responsive navigation panel
//!
//! `use_panel_provider()` owns the state and returns a `PanelHandle`; every
//! other piece here takes that handle as a prop. On wide viewports the panel
//! is a fixed rail that collapses to icons, on narrow ones a drawer opened by
//! `PanelOpenTrigger` and dismissed through `PanelOverlay`.

mod controls;
mod provider;
mod sections;
mod view;
mod viewport;

pub use controls::{PanelOpenTrigger, PanelOverlay, PanelToggleControl};
pub use provider::{use_panel_provider, PanelHandle};
pub use sections::{
    CopyrightLine, PanelContent, PanelFooter, PanelGroup, PanelGroupLabel, PanelHeader,
    PanelHeaderTitle,
};
pub use view::Panel;
pub use viewport::use_viewport_is_mobile;
