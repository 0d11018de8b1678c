//! Panel configuration
//!
//! One breakpoint and two discrete rail widths. Everything here is a constant
//! for the life of the page; nothing is computed from content.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("breakpoint must be a positive width in pixels, got {0}")]
    InvalidBreakpoint(f64),
    #[error("{field} must be greater than zero")]
    ZeroWidth { field: &'static str },
    #[error("compact rail ({compact}px) must be narrower than the full rail ({full}px)")]
    CompactNotNarrower { compact: u32, full: u32 },
}

/// Panel layout constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Viewports narrower than this are mobile
    pub breakpoint_px: f64,
    /// Desktop rail width when expanded
    pub rail_width_px: u32,
    /// Desktop rail width when collapsed (icons only)
    pub compact_rail_width_px: u32,
    /// Mobile drawer width
    pub drawer_width_px: u32,
    /// Duration of the rail resize and drawer slide transitions
    pub transition_ms: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 768.0,
            rail_width_px: 250,
            compact_rail_width_px: 70,
            drawer_width_px: 250,
            transition_ms: 300,
        }
    }
}

impl PanelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.breakpoint_px.is_finite() || self.breakpoint_px <= 0.0 {
            return Err(ConfigError::InvalidBreakpoint(self.breakpoint_px));
        }
        for (field, value) in [
            ("rail_width_px", self.rail_width_px),
            ("compact_rail_width_px", self.compact_rail_width_px),
            ("drawer_width_px", self.drawer_width_px),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroWidth { field });
            }
        }
        if self.compact_rail_width_px >= self.rail_width_px {
            return Err(ConfigError::CompactNotNarrower {
                compact: self.compact_rail_width_px,
                full: self.rail_width_px,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(PanelConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: PanelConfig =
            serde_json::from_str(r#"{ "breakpoint_px": 1024, "transition_ms": 150 }"#).unwrap();
        assert_eq!(config.breakpoint_px, 1024.0);
        assert_eq!(config.transition_ms, 150);
        assert_eq!(config.rail_width_px, 250);
        assert_eq!(config.compact_rail_width_px, 70);
    }

    #[test]
    fn test_rejects_non_positive_breakpoint() {
        let config = PanelConfig {
            breakpoint_px: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidBreakpoint(0.0)));
    }

    #[test]
    fn test_rejects_zero_width() {
        let config = PanelConfig {
            drawer_width_px: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroWidth {
                field: "drawer_width_px"
            })
        );
    }

    #[test]
    fn test_rejects_compact_wider_than_rail() {
        let config = PanelConfig {
            rail_width_px: 80,
            compact_rail_width_px: 80,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "compact rail (80px) must be narrower than the full rail (80px)"
        );
    }
}
