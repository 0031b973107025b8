use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use super::styles::{black_theme, default_theme, ChartTheme};
use crate::error::ThemeError;
use crate::types::ThemeName;

/// Named lookup of shared chart themes.
///
/// Themes are stored behind `Arc`, so lookups hand out shared read-only
/// references. Callers that need a variant derive their own copy.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: HashMap<String, Arc<ChartTheme>>,
}

impl ThemeRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in themes
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(ThemeName::TarpeydevDefault.as_str(), default_theme());
        registry.insert(ThemeName::TarpeydevBlack.as_str(), black_theme());
        registry
    }

    fn insert(&mut self, name: &str, theme: Arc<ChartTheme>) {
        self.themes.insert(name.to_string(), theme);
    }

    /// Register a theme under `name`, replacing any previous entry.
    ///
    /// The theme is validated first and frozen behind an `Arc`.
    pub fn register(&mut self, name: &str, theme: ChartTheme) -> Result<Arc<ChartTheme>, ThemeError> {
        theme.validate()?;
        let theme = Arc::new(theme);
        debug!("Registered chart theme {}", name);
        self.insert(name, Arc::clone(&theme));
        Ok(theme)
    }

    pub fn get(&self, name: &str) -> Option<Arc<ChartTheme>> {
        self.themes.get(name).cloned()
    }

    /// Like [`get`](Self::get), but an unknown name is an error
    pub fn resolve(&self, name: &str) -> Result<Arc<ChartTheme>, ThemeError> {
        self.get(name)
            .ok_or_else(|| ThemeError::UnknownTheme(name.to_string()))
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
