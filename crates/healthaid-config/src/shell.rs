//! App-shell chrome configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_viewport_width() -> u32 {
    1280
}

const fn default_desktop_breakpoint() -> u32 {
    768
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShellConfig {
    /// Viewport width (px) reported by the host.
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,

    /// Width (px) at and above which the viewport counts as desktop.
    #[serde(default = "default_desktop_breakpoint")]
    pub desktop_breakpoint: u32,

    /// Start with the sidebar collapsed regardless of viewport.
    #[serde(default)]
    pub sidebar_collapsed: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            desktop_breakpoint: default_desktop_breakpoint(),
            sidebar_collapsed: false,
        }
    }
}

impl ShellConfig {
    #[must_use]
    pub const fn is_desktop(&self) -> bool {
        self.viewport_width >= self.desktop_breakpoint
    }

    /// Whether the sidebar should start expanded.
    #[must_use]
    pub const fn sidebar_starts_expanded(&self) -> bool {
        !self.sidebar_collapsed && self.is_desktop()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.desktop_breakpoint == 0 {
            return Err(ConfigError::InvalidValue {
                field: "shell.desktop_breakpoint".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
