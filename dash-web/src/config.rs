//! Panel configuration loading
//!
//! Defaults come from `PanelConfig::default()`. A JSON override (any subset of
//! fields) can be supplied through local storage on the web or an environment
//! variable on desktop. A bad override is logged and ignored.

use dash_common::{ConfigError, PanelConfig};
use thiserror::Error;
use tracing::{info, warn};

/// Local storage key holding a JSON panel config override (web)
pub const PANEL_CONFIG_STORAGE_KEY: &str = "dash.panel_config";

/// Environment variable holding a JSON panel config override (desktop)
pub const PANEL_CONFIG_ENV: &str = "DASH_PANEL_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("malformed panel config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid panel config: {0}")]
    Invalid(#[from] ConfigError),
}

/// Parse and validate a JSON override
pub fn parse_panel_config(raw: &str) -> Result<PanelConfig, ConfigLoadError> {
    let config: PanelConfig = serde_json::from_str(raw)?;
    config.validate()?;
    Ok(config)
}

/// Load the panel config, falling back to defaults on any problem
pub fn load_panel_config() -> PanelConfig {
    let Some(raw) = read_override() else {
        return PanelConfig::default();
    };
    match parse_panel_config(&raw) {
        Ok(config) => {
            info!(?config, "Using panel config override");
            config
        }
        Err(e) => {
            warn!("Ignoring panel config override: {e}");
            PanelConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_override() -> Option<String> {
    web_sys_x::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(PANEL_CONFIG_STORAGE_KEY).ok().flatten())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_override() -> Option<String> {
    std::env::var(PANEL_CONFIG_ENV).ok()
}
