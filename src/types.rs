//! # Common Types
//!
//! Small value types shared by the page and plotting modules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

/// The result of mounting markup into a host page.
///
/// Mounting never fails loudly: a missing container is reported here and
/// the page simply shows nothing in that region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountOutcome {
    /// The container was found and its content replaced.
    Mounted,
    /// No container matched the selector; the page is unchanged.
    NotMounted {
        /// The selector that failed to match
        selector: String,
    },
}

impl MountOutcome {
    pub fn is_mounted(&self) -> bool {
        matches!(self, MountOutcome::Mounted)
    }
}

/// Names under which the built-in themes are registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Dark paper with a translucent light plotting area
    #[default]
    TarpeydevDefault,
    /// Same as the default, with a fully transparent plotting area
    TarpeydevBlack,
}

impl ThemeName {
    pub const ALL: [ThemeName; 2] = [ThemeName::TarpeydevDefault, ThemeName::TarpeydevBlack];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::TarpeydevDefault => "tarpeydev_default",
            ThemeName::TarpeydevBlack => "tarpeydev_black",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownTheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_name_round_trip() {
        for name in ThemeName::ALL {
            assert_eq!(name.as_str().parse::<ThemeName>(), Ok(name));
        }
        assert_eq!(
            "plotly_dark".parse::<ThemeName>(),
            Err(ThemeError::UnknownTheme("plotly_dark".to_string()))
        );
    }

    #[test]
    fn test_mount_outcome() {
        assert!(MountOutcome::Mounted.is_mounted());
        assert!(!MountOutcome::NotMounted {
            selector: "#root".to_string()
        }
        .is_mounted());
    }
}
