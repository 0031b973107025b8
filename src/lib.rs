//! # tarpey.dev presentation library
//!
//! `tarpeydev` holds the two presentation pieces of the site that have no
//! server-side behaviour of their own: the "under construction" placeholder
//! page and the default chart theme every figure on the site is styled with.
//!
//! ## Features
//!
//! - Render the placeholder view as a markup tree
//! - Mount rendered markup into a host page by selector
//! - Build the site's default chart theme and its black variant
//! - Build plotly-compatible figure descriptions from a theme
//! - Draw themed bar charts to SVG
//! - Load site configuration from TOML
//!
//! ## Example
//!
//! ```
//! use tarpeydev::page::{render_placeholder, Document, MountOutcome};
//! use tarpeydev::plotting::{default_theme, Figure};
//!
//! let mut page = Document::host_page("tarpey.dev");
//! assert_eq!(page.mount("#root", render_placeholder()), MountOutcome::Mounted);
//! assert!(page.to_html().contains("under construction"));
//!
//! let theme = default_theme();
//! let mut figure = Figure::new(&theme);
//! figure.set_title("Points for");
//! figure.add_bar("2021", vec!["Week 1".into()], vec![112.5]);
//! let json = figure.to_json().unwrap();
//! assert_eq!(json["layout"]["font"]["size"], 16);
//! ```

pub mod config;
pub mod error;
pub mod page;
pub mod plotting;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use config::SiteConfig;
pub use error::{Error, Result};
pub use plotting::ChartTheme;
pub use types::{MountOutcome, ThemeName};
