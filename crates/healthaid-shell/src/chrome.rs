//! Local app-shell chrome state.
//!
//! ```text
//! expanded --close--> collapsed
//! collapsed --open--> expanded
//! either   --toggle-> the other
//! ```
//!
//! Independent of identity and never persisted.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Viewport width (px) at and above which the sidebar starts expanded.
pub const DEFAULT_DESKTOP_BREAKPOINT: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SidebarState {
    #[default]
    Expanded,
    Collapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidebarAction {
    Open,
    Close,
    Toggle,
}

impl SidebarState {
    /// Initial state for a viewport: expanded on desktop widths, collapsed below.
    #[must_use]
    pub const fn for_viewport(width: u32, desktop_breakpoint: u32) -> Self {
        if width >= desktop_breakpoint {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }

    #[must_use]
    pub const fn apply(self, action: SidebarAction) -> Self {
        match (self, action) {
            (_, SidebarAction::Open) | (Self::Collapsed, SidebarAction::Toggle) => Self::Expanded,
            (_, SidebarAction::Close) | (Self::Expanded, SidebarAction::Toggle) => Self::Collapsed,
        }
    }

    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::Collapsed => "collapsed",
        }
    }
}

impl fmt::Display for SidebarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(SidebarState::Expanded, SidebarAction::Open, SidebarState::Expanded)]
    #[case(SidebarState::Expanded, SidebarAction::Close, SidebarState::Collapsed)]
    #[case(SidebarState::Expanded, SidebarAction::Toggle, SidebarState::Collapsed)]
    #[case(SidebarState::Collapsed, SidebarAction::Open, SidebarState::Expanded)]
    #[case(SidebarState::Collapsed, SidebarAction::Close, SidebarState::Collapsed)]
    #[case(SidebarState::Collapsed, SidebarAction::Toggle, SidebarState::Expanded)]
    fn transitions(
        #[case] from: SidebarState,
        #[case] action: SidebarAction,
        #[case] to: SidebarState,
    ) {
        assert_eq!(from.apply(action), to);
    }

    #[rstest]
    #[case(1280, SidebarState::Expanded)]
    #[case(768, SidebarState::Expanded)]
    #[case(767, SidebarState::Collapsed)]
    #[case(375, SidebarState::Collapsed)]
    fn viewport_defaults(#[case] width: u32, #[case] expected: SidebarState) {
        assert_eq!(
            SidebarState::for_viewport(width, DEFAULT_DESKTOP_BREAKPOINT),
            expected
        );
    }

    #[test]
    fn default_is_expanded() {
        assert!(SidebarState::default().is_expanded());
    }
}
