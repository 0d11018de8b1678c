//! Pure layout decisions derived from panel state

use crate::config::PanelConfig;
use crate::panel_state::PanelState;

/// Declared visual state of the mobile drawer.
///
/// The drawer stays mounted in mobile mode; only this attribute changes so the
/// slide transition can run in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerState {
    Open,
    Closed,
}

impl DrawerState {
    pub fn from_open(open: bool) -> Self {
        if open {
            DrawerState::Open
        } else {
            DrawerState::Closed
        }
    }

    /// Value for the `data-state` attribute
    pub fn as_attr(&self) -> &'static str {
        match self {
            DrawerState::Open => "open",
            DrawerState::Closed => "closed",
        }
    }
}

/// Which of the two panel layouts to render, and how
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelLayout {
    /// Desktop: fixed rail, always visible
    Rail { width_px: u32, compact: bool },
    /// Mobile: edge-anchored drawer over the page
    Drawer { width_px: u32, state: DrawerState },
}

impl PanelLayout {
    pub fn resolve(state: &PanelState, config: &PanelConfig) -> Self {
        if state.is_mobile {
            PanelLayout::Drawer {
                width_px: config.drawer_width_px,
                state: DrawerState::from_open(state.mobile_open),
            }
        } else if state.collapsed {
            PanelLayout::Rail {
                width_px: config.compact_rail_width_px,
                compact: true,
            }
        } else {
            PanelLayout::Rail {
                width_px: config.rail_width_px,
                compact: false,
            }
        }
    }

    /// Horizontal space page content must leave for the panel.
    ///
    /// The drawer floats over content, so it reserves nothing.
    pub fn content_offset_px(&self) -> u32 {
        match self {
            PanelLayout::Rail { width_px, .. } => *width_px,
            PanelLayout::Drawer { .. } => 0,
        }
    }

    pub fn drawer_state(&self) -> Option<DrawerState> {
        match self {
            PanelLayout::Rail { .. } => None,
            PanelLayout::Drawer { state, .. } => Some(*state),
        }
    }
}

/// Which panel controls are visible for a given state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlVisibility {
    /// Desktop collapse toggle
    pub toggle: bool,
    /// Mobile "open drawer" trigger
    pub trigger: bool,
    /// Mobile backdrop behind the open drawer
    pub overlay: bool,
}

impl ControlVisibility {
    pub fn of(state: &PanelState) -> Self {
        Self {
            toggle: !state.is_mobile,
            trigger: state.is_mobile,
            overlay: state.is_mobile && state.mobile_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop(collapsed: bool) -> PanelState {
        PanelState {
            collapsed,
            mobile_open: false,
            is_mobile: false,
        }
    }

    fn mobile(mobile_open: bool) -> PanelState {
        PanelState {
            collapsed: true,
            mobile_open,
            is_mobile: true,
        }
    }

    #[test]
    fn test_rail_width_follows_collapsed() {
        let config = PanelConfig::default();
        assert_eq!(
            PanelLayout::resolve(&desktop(false), &config),
            PanelLayout::Rail {
                width_px: 250,
                compact: false
            }
        );
        assert_eq!(
            PanelLayout::resolve(&desktop(true), &config),
            PanelLayout::Rail {
                width_px: 70,
                compact: true
            }
        );
    }

    #[test]
    fn test_collapsing_rail_has_no_drawer_attribute() {
        let config = PanelConfig::default();
        assert_eq!(
            PanelLayout::resolve(&desktop(false), &config).drawer_state(),
            None
        );
        assert_eq!(
            PanelLayout::resolve(&desktop(true), &config).drawer_state(),
            None
        );
    }

    #[test]
    fn test_drawer_state_follows_mobile_open() {
        let config = PanelConfig::default();
        let open = PanelLayout::resolve(&mobile(true), &config);
        let closed = PanelLayout::resolve(&mobile(false), &config);
        assert_eq!(open.drawer_state().map(|s| s.as_attr()), Some("open"));
        assert_eq!(closed.drawer_state().map(|s| s.as_attr()), Some("closed"));
    }

    #[test]
    fn test_drawer_ignores_collapsed() {
        let config = PanelConfig::default();
        let mut state = mobile(true);
        let before = PanelLayout::resolve(&state, &config);
        state.collapsed = false;
        assert_eq!(PanelLayout::resolve(&state, &config), before);
    }

    #[test]
    fn test_content_offset() {
        let config = PanelConfig::default();
        assert_eq!(
            PanelLayout::resolve(&desktop(false), &config).content_offset_px(),
            250
        );
        assert_eq!(
            PanelLayout::resolve(&desktop(true), &config).content_offset_px(),
            70
        );
        assert_eq!(
            PanelLayout::resolve(&mobile(true), &config).content_offset_px(),
            0
        );
    }

    #[test]
    fn test_control_visibility() {
        assert_eq!(
            ControlVisibility::of(&desktop(true)),
            ControlVisibility {
                toggle: true,
                trigger: false,
                overlay: false,
            }
        );
        assert_eq!(
            ControlVisibility::of(&mobile(false)),
            ControlVisibility {
                toggle: false,
                trigger: true,
                overlay: false,
            }
        );
        assert_eq!(
            ControlVisibility::of(&mobile(true)),
            ControlVisibility {
                toggle: false,
                trigger: true,
                overlay: true,
            }
        );
    }
}
