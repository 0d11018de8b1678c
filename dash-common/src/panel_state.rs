use thiserror::Error;
use tracing::debug;

/// Snapshot of the navigation panel state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    /// Desktop only: icon-only narrow rail
    pub collapsed: bool,
    /// Mobile only: slide-in drawer is visible
    pub mobile_open: bool,
    /// Derived from the viewport classifier
    pub is_mobile: bool,
}

impl PanelState {
    /// Whether panel contents should render icon-only.
    ///
    /// Collapse is a desktop concept; the mobile drawer always shows labels.
    pub fn is_compact(&self) -> bool {
        self.collapsed && !self.is_mobile
    }
}

/// Layout mode change applied by [`PanelStateStore::apply_viewport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportTransition {
    /// Viewport narrowed below the breakpoint
    EnteredMobile,
    /// Viewport widened to the breakpoint or beyond
    EnteredDesktop,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("panel mutator invoked outside a mounted panel provider")]
    ProviderNotMounted,
}

/// Owner of the panel state and its transition rules.
///
/// User mutations (`collapse`, `set_mobile_open`) are plain setters gated by
/// the current mode. Only viewport changes normalize the other field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelStateStore {
    state: PanelState,
}

impl PanelStateStore {
    /// Store in desktop mode, expanded, drawer closed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Set the desktop rail width mode. Ignored on mobile.
    ///
    /// Returns whether the state changed.
    pub fn collapse(&mut self, collapsed: bool) -> bool {
        if self.state.is_mobile {
            debug!(collapsed, "Ignoring collapse while in mobile layout");
            return false;
        }
        let changed = self.state.collapsed != collapsed;
        self.state.collapsed = collapsed;
        changed
    }

    /// Open or close the mobile drawer. Ignored on desktop.
    ///
    /// Returns whether the state changed.
    pub fn set_mobile_open(&mut self, open: bool) -> bool {
        if !self.state.is_mobile {
            debug!(open, "Ignoring drawer toggle while in desktop layout");
            return false;
        }
        let changed = self.state.mobile_open != open;
        self.state.mobile_open = open;
        changed
    }

    /// Feed a viewport classification into the store.
    ///
    /// Returns `None` when the classification did not change; no rule runs.
    pub fn apply_viewport(&mut self, is_mobile: bool) -> Option<ViewportTransition> {
        if self.state.is_mobile == is_mobile {
            return None;
        }
        self.state.is_mobile = is_mobile;
        self.state.mobile_open = false;

        let transition = if is_mobile {
            self.state.collapsed = true;
            ViewportTransition::EnteredMobile
        } else {
            ViewportTransition::EnteredDesktop
        };
        debug!(?transition, state = ?self.state, "Panel layout mode changed");
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mobile_store() -> PanelStateStore {
        let mut store = PanelStateStore::new();
        store.apply_viewport(true);
        store
    }

    #[test]
    fn test_starts_expanded_on_desktop() {
        let store = PanelStateStore::new();
        assert_eq!(
            store.state(),
            PanelState {
                collapsed: false,
                mobile_open: false,
                is_mobile: false,
            }
        );
    }

    #[test]
    fn test_collapse_on_desktop() {
        let mut store = PanelStateStore::new();
        assert!(store.collapse(true));
        assert!(store.state().collapsed);
        assert!(!store.collapse(true));
        assert!(store.collapse(false));
        assert!(!store.state().collapsed);
    }

    #[test]
    fn test_collapse_ignored_on_mobile() {
        let mut store = mobile_store();
        let before = store.state();
        assert!(!store.collapse(false));
        assert_eq!(store.state(), before);
        assert!(!store.collapse(true));
        assert_eq!(store.state(), before);
    }

    #[test]
    fn test_set_mobile_open_is_idempotent() {
        let mut once = mobile_store();
        once.set_mobile_open(true);

        let mut twice = mobile_store();
        twice.set_mobile_open(true);
        assert!(!twice.set_mobile_open(true));

        assert_eq!(once.state(), twice.state());
        assert!(twice.state().mobile_open);
    }

    #[test]
    fn test_set_mobile_open_ignored_on_desktop() {
        let mut store = PanelStateStore::new();
        assert!(!store.set_mobile_open(true));
        assert!(!store.state().mobile_open);
    }

    #[test]
    fn test_entering_mobile_closes_drawer_and_collapses() {
        let mut store = PanelStateStore::new();
        store.collapse(false);
        assert_eq!(
            store.apply_viewport(true),
            Some(ViewportTransition::EnteredMobile)
        );
        let state = store.state();
        assert!(state.is_mobile);
        assert!(state.collapsed);
        assert!(!state.mobile_open);
    }

    #[test]
    fn test_entering_desktop_keeps_collapsed() {
        let mut store = mobile_store();
        store.set_mobile_open(true);
        assert_eq!(
            store.apply_viewport(false),
            Some(ViewportTransition::EnteredDesktop)
        );
        let state = store.state();
        assert!(!state.is_mobile);
        assert!(!state.mobile_open);
        // Forced on the way into mobile, left alone on the way out
        assert!(state.collapsed);
    }

    #[test]
    fn test_unchanged_viewport_runs_no_rule() {
        let mut store = mobile_store();
        store.set_mobile_open(true);
        assert_eq!(store.apply_viewport(true), None);
        assert!(store.state().mobile_open);

        let mut store = PanelStateStore::new();
        assert_eq!(store.apply_viewport(false), None);
        assert!(!store.state().collapsed);
    }

    #[test]
    fn test_is_compact_only_on_desktop() {
        let mut store = PanelStateStore::new();
        store.collapse(true);
        assert!(store.state().is_compact());
        store.apply_viewport(true);
        assert!(store.state().collapsed);
        assert!(!store.state().is_compact());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            PanelError::ProviderNotMounted.to_string(),
            "panel mutator invoked outside a mounted panel provider"
        );
    }
}
