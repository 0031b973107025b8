//! Error types shared across the crate.

use thiserror::Error;

/// Errors raised while building or mounting page markup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("target not found: no element matches `{0}`")]
    TargetNotFound(String),
    #[error("unsupported selector `{0}`, expected `#id` or a bare id")]
    UnsupportedSelector(String),
}

/// Errors raised while building or overriding a chart theme.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThemeError {
    #[error("invalid color value `{0}`")]
    InvalidColor(String),
    #[error("title offset {0} is outside 0.0..=1.0")]
    TitleOutOfRange(f64),
    #[error("font size {0} is outside 1..=200")]
    FontSizeOutOfRange(u32),
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
}

/// Errors raised while drawing a chart.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error("chart has no bars to draw")]
    Empty,
    #[error(transparent)]
    Theme(#[from] ThemeError),
}

/// Errors raised while loading site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Page(#[from] PageError),
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
