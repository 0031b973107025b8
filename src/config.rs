//! Site configuration loaded from `tarpeydev.toml`.
//!
//! Every field has a default, so a missing file or a partial file is fine.

use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ThemeError};
use crate::page::APP_ROOT_ID;
use crate::plotting::{ChartTheme, ThemeRegistry};
use crate::types::ThemeName;

pub const DEFAULT_CONFIG_FILE: &str = "tarpeydev.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Selector of the container the placeholder view mounts into
    pub mount_target: String,
    /// Title of the generated host page
    pub page_title: String,
    /// Registered name of the chart theme to use
    pub theme: String,
    /// Directory the generated files are written to
    pub output_dir: PathBuf,
    pub overrides: ThemeOverrides,
}

/// Per-site tweaks applied to a derived copy of the chosen theme
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeOverrides {
    pub font_size: Option<u32>,
    pub title_x: Option<f64>,
    pub plot_bgcolor: Option<String>,
    pub paper_bgcolor: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mount_target: format!("#{}", APP_ROOT_ID),
            page_title: "tarpey.dev".to_string(),
            theme: ThemeName::default().to_string(),
            output_dir: PathBuf::from("site"),
            overrides: ThemeOverrides::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load config from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Look up the configured theme and apply the overrides to a copy of it
    pub fn resolve_theme(&self, registry: &ThemeRegistry) -> Result<ChartTheme, ThemeError> {
        let mut theme = registry.resolve(&self.theme)?.derive();
        let overrides = &self.overrides;
        if let Some(size) = overrides.font_size {
            theme = theme.with_font_size(size)?;
        }
        if let Some(x) = overrides.title_x {
            theme = theme.with_title_x(x)?;
        }
        if let Some(color) = &overrides.plot_bgcolor {
            theme = theme.with_plot_bgcolor(color)?;
        }
        if let Some(color) = &overrides.paper_bgcolor {
            theme = theme.with_paper_bgcolor(color)?;
        }
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.mount_target, "#root");
        assert_eq!(config.theme, "tarpeydev_default");
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(
            &path,
            "theme = \"tarpeydev_black\"\n\n[overrides]\nfont_size = 20\n",
        )
        .unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.theme, "tarpeydev_black");
        assert_eq!(config.overrides.font_size, Some(20));
        assert_eq!(config.output_dir, PathBuf::from("site"));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            SiteConfig::from_toml("theme = ["),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_resolve_theme_applies_overrides() {
        let registry = ThemeRegistry::with_builtin();
        let config = SiteConfig {
            overrides: ThemeOverrides {
                font_size: Some(12),
                title_x: Some(0.5),
                ..Default::default()
            },
            ..Default::default()
        };

        let theme = config.resolve_theme(&registry).unwrap();
        assert_eq!(theme.layout.font.size, 12);
        assert_eq!(theme.layout.title.x, 0.5);
        assert_eq!(registry.resolve("tarpeydev_default").unwrap().layout.font.size, 16);
    }

    #[test]
    fn test_oversized_font_override_is_rejected() {
        let config = SiteConfig::from_toml("[overrides]\nfont_size = 1073741824\n").unwrap();
        assert_eq!(config.overrides.font_size, Some(1_073_741_824));
        assert_eq!(
            config.resolve_theme(&ThemeRegistry::with_builtin()).unwrap_err(),
            ThemeError::FontSizeOutOfRange(1_073_741_824)
        );
    }

    #[test]
    fn test_resolve_unknown_theme() {
        let config = SiteConfig {
            theme: "ggplot2".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_theme(&ThemeRegistry::with_builtin()).unwrap_err(),
            ThemeError::UnknownTheme("ggplot2".to_string())
        );
    }
}
