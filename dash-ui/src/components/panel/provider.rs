use dash_common::{PanelConfig, PanelError, PanelState, PanelStateStore};
use dioxus::prelude::*;

use super::viewport::use_viewport_is_mobile;

/// Handle to the panel state owned by `use_panel_provider()`.
///
/// `Copy`, so pass it down as a prop to every component that reads or
/// mutates the panel. All writes go through `collapse` and `set_mobile_open`.
#[derive(Clone, Copy, PartialEq)]
pub struct PanelHandle {
    store: Signal<PanelStateStore>,
    config: Signal<PanelConfig>,
}

impl PanelHandle {
    /// Current state. Subscribes the calling component.
    pub fn state(&self) -> PanelState {
        self.store.read().state()
    }

    pub fn config(&self) -> PanelConfig {
        self.config.read().clone()
    }

    /// Set the desktop collapsed mode. No-op on mobile.
    ///
    /// Panics if the provider is not mounted.
    pub fn collapse(&self, collapsed: bool) {
        if let Err(e) = self.try_collapse(collapsed) {
            panic!("{e}");
        }
    }

    pub fn try_collapse(&self, collapsed: bool) -> Result<bool, PanelError> {
        self.update(|store| store.collapse(collapsed))
    }

    /// Open or close the mobile drawer. No-op on desktop.
    ///
    /// Panics if the provider is not mounted.
    pub fn set_mobile_open(&self, open: bool) {
        if let Err(e) = self.try_set_mobile_open(open) {
            panic!("{e}");
        }
    }

    pub fn try_set_mobile_open(&self, open: bool) -> Result<bool, PanelError> {
        self.update(|store| store.set_mobile_open(open))
    }

    fn update(
        &self,
        mutate: impl FnOnce(&mut PanelStateStore) -> bool,
    ) -> Result<bool, PanelError> {
        let mut store = self.store;
        let mut guard = store
            .try_write()
            .map_err(|_| PanelError::ProviderNotMounted)?;
        Ok(mutate(&mut guard))
    }
}

/// Hook that mounts the panel state for the calling component's subtree.
///
/// Call it once, in the layout that owns the panel, and hand the returned
/// handle to `Panel`, the controls, and anything that needs layout offsets.
pub fn use_panel_provider(config: PanelConfig) -> PanelHandle {
    let breakpoint_px = config.breakpoint_px;
    let config = use_signal(|| config);
    let is_mobile = use_viewport_is_mobile(breakpoint_px);
    let mut store = use_signal(PanelStateStore::new);

    use_effect(move || {
        let is_mobile = is_mobile();
        // Skip the write when nothing changes so consumers don't re-render
        if store.peek().state().is_mobile == is_mobile {
            return;
        }
        store.write().apply_viewport(is_mobile);
    });

    PanelHandle { store, config }
}
