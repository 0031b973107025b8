//! tarpey.dev placeholder page generator
//!
//! Renders the placeholder view into the site's host page and writes it out
//! together with the resolved chart theme and a sample chart using it.

use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;

use tarpeydev::config::DEFAULT_CONFIG_FILE;
use tarpeydev::page::{render_placeholder, Document, MountOutcome};
use tarpeydev::plotting::{render_bar_chart_svg, BarChart, ThemeRegistry};
use tarpeydev::SiteConfig;

fn init_logging() {
    let default_level = if cfg!(feature = "dev") { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
    let config = SiteConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path))?;

    let mut page = Document::host_page(config.page_title.as_str());
    if let MountOutcome::NotMounted { selector } = page.mount(&config.mount_target, render_placeholder()) {
        warn!("Placeholder left out of the page, nothing matches {}", selector);
    }

    let registry = ThemeRegistry::with_builtin();
    let theme = config
        .resolve_theme(&registry)
        .with_context(|| format!("resolving theme {}", config.theme))?;

    let chart = BarChart::new("Sample chart")
        .bar("A", 3.0)
        .bar("B", 5.0)
        .bar("C", 2.0);
    let svg = render_bar_chart_svg(&theme, &chart, (640, 480)).context("rendering sample chart")?;

    let out = &config.output_dir;
    fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;
    fs::write(out.join("index.html"), page.to_html()).context("writing index.html")?;
    fs::write(out.join("theme.json"), serde_json::to_string_pretty(&theme)?)
        .context("writing theme.json")?;
    fs::write(out.join("chart.svg"), svg).context("writing chart.svg")?;

    info!("Wrote site to {}", out.display());
    Ok(())
}
