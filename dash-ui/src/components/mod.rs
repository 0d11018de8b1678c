//! Shared UI components

pub mod app_layout;
pub mod button;
pub mod chart;
pub mod icons;
pub mod menu_list;
pub mod panel;

pub use app_layout::DashboardLayoutView;
pub use button::ChromelessButton;
pub use chart::{ChartContainer, ChartStyle};
pub use icons::{
    BarChartIcon, CalendarIcon, ChevronLeftIcon, ChevronRightIcon, LogOutIcon, MenuEntryIcon,
    MenuIcon, SettingsIcon, UserPlusIcon, UsersIcon,
};
pub use menu_list::{MenuButton, MenuList};
pub use panel::{
    use_panel_provider, use_viewport_is_mobile, CopyrightLine, Panel, PanelContent, PanelFooter,
    PanelGroup, PanelGroupLabel, PanelHandle, PanelHeader, PanelHeaderTitle, PanelOpenTrigger,
    PanelOverlay, PanelToggleControl,
};
