//! The site's chart theme.
//!
//! Field names follow plotly's layout template keys so a serialized
//! [`ChartTheme`] can be handed to plotly.js unchanged as `layout.template`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::color::parse_color;
use crate::error::ThemeError;

/// Fill alpha of the default bar markers
const BAR_FILL_ALPHA: &str = "0.6";
/// Outline width of the default bar markers
const BAR_LINE_WIDTH: u32 = 2;
/// Largest font size a theme may carry
pub const MAX_FONT_SIZE: u32 = 200;

/// Bar palette, based on plotly's qualitative Prism colors
const BAR_PALETTE: [(u8, u8, u8); 25] = [
    (102, 197, 204),
    (246, 207, 113),
    (248, 156, 116),
    (220, 176, 242),
    (135, 197, 95),
    (158, 185, 243),
    (254, 136, 177),
    (201, 219, 116),
    (139, 224, 164),
    (180, 151, 231),
    (251, 180, 174),
    (179, 205, 227),
    (204, 235, 197),
    (222, 203, 228),
    (254, 217, 166),
    (255, 255, 204),
    (229, 216, 189),
    (253, 218, 236),
    (179, 226, 205),
    (253, 205, 172),
    (203, 213, 232),
    (244, 202, 228),
    (230, 245, 201),
    (255, 242, 174),
    (241, 226, 204),
];

static TARPEYDEV_DEFAULT: Lazy<Arc<ChartTheme>> =
    Lazy::new(|| Arc::new(ChartTheme::tarpeydev_default()));

static TARPEYDEV_BLACK: Lazy<Arc<ChartTheme>> =
    Lazy::new(|| Arc::new(ChartTheme::tarpeydev_black()));

/// The shared default theme. Built once on first use.
pub fn default_theme() -> Arc<ChartTheme> {
    Arc::clone(&TARPEYDEV_DEFAULT)
}

/// The shared black theme. Built once on first use.
pub fn black_theme() -> Arc<ChartTheme> {
    Arc::clone(&TARPEYDEV_BLACK)
}

/// Chart theme: layout defaults plus per-trace defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTheme {
    pub layout: LayoutTemplate,
    pub data: DataTemplate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutTemplate {
    pub autosize: bool,
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
    pub font: Font,
    pub hoverlabel: HoverLabel,
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub color: String,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverLabel {
    pub font: HoverFont,
    pub bgcolor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverFont {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub gridcolor: String,
    pub showgrid: bool,
    pub showline: bool,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            gridcolor: "#555555".to_string(),
            showgrid: true,
            showline: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTemplate {
    pub bar: Vec<BarDefaults>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDefaults {
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub color: String,
    pub line: MarkerLine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerLine {
    pub color: String,
    pub width: u32,
}

impl BarDefaults {
    fn from_rgb((r, g, b): (u8, u8, u8)) -> Self {
        Self {
            marker: Marker {
                color: format!("rgba({}, {}, {}, {})", r, g, b, BAR_FILL_ALPHA),
                line: MarkerLine {
                    color: format!("rgba({}, {}, {}, 1.0)", r, g, b),
                    width: BAR_LINE_WIDTH,
                },
            },
        }
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::tarpeydev_default()
    }
}

impl ChartTheme {
    /// Site-wide plot defaults: black paper, translucent white plot area,
    /// white 16px text and grey grid lines.
    pub fn tarpeydev_default() -> Self {
        Self {
            layout: LayoutTemplate {
                autosize: true,
                paper_bgcolor: "rgba(0,0,0,1)".to_string(),
                plot_bgcolor: "rgba(255,255,255,0.2)".to_string(),
                font: Font {
                    color: "#FFFFFF".to_string(),
                    size: 16,
                },
                hoverlabel: HoverLabel {
                    font: HoverFont {
                        color: "#FFFFFF".to_string(),
                    },
                    bgcolor: "#555555".to_string(),
                },
                title: Title { x: 0.05 },
                xaxis: Axis::default(),
                yaxis: Axis::default(),
            },
            data: DataTemplate {
                bar: BAR_PALETTE.iter().copied().map(BarDefaults::from_rgb).collect(),
            },
        }
    }

    /// The default theme with a fully transparent plot area
    pub fn tarpeydev_black() -> Self {
        let mut theme = Self::tarpeydev_default();
        theme.layout.paper_bgcolor = "rgba(0,0,0,1)".to_string();
        theme.layout.plot_bgcolor = "rgba(255,255,255,0)".to_string();
        theme
    }

    /// An owned copy to customise. The source theme is never affected.
    pub fn derive(&self) -> ChartTheme {
        self.clone()
    }

    pub fn with_paper_bgcolor(mut self, color: &str) -> Result<Self, ThemeError> {
        parse_color(color)?;
        self.layout.paper_bgcolor = color.to_string();
        Ok(self)
    }

    pub fn with_plot_bgcolor(mut self, color: &str) -> Result<Self, ThemeError> {
        parse_color(color)?;
        self.layout.plot_bgcolor = color.to_string();
        Ok(self)
    }

    pub fn with_font_color(mut self, color: &str) -> Result<Self, ThemeError> {
        parse_color(color)?;
        self.layout.font.color = color.to_string();
        Ok(self)
    }

    pub fn with_font_size(mut self, size: u32) -> Result<Self, ThemeError> {
        check_font_size(size)?;
        self.layout.font.size = size;
        Ok(self)
    }

    pub fn with_title_x(mut self, x: f64) -> Result<Self, ThemeError> {
        if !(0.0..=1.0).contains(&x) {
            return Err(ThemeError::TitleOutOfRange(x));
        }
        self.layout.title.x = x;
        Ok(self)
    }

    pub fn with_hoverlabel(mut self, font_color: &str, bgcolor: &str) -> Result<Self, ThemeError> {
        parse_color(font_color)?;
        parse_color(bgcolor)?;
        self.layout.hoverlabel.font.color = font_color.to_string();
        self.layout.hoverlabel.bgcolor = bgcolor.to_string();
        Ok(self)
    }

    pub fn with_xaxis(mut self, axis: Axis) -> Result<Self, ThemeError> {
        parse_color(&axis.gridcolor)?;
        self.layout.xaxis = axis;
        Ok(self)
    }

    pub fn with_yaxis(mut self, axis: Axis) -> Result<Self, ThemeError> {
        parse_color(&axis.gridcolor)?;
        self.layout.yaxis = axis;
        Ok(self)
    }

    /// Default marker for the trace at `index`, cycling through the palette
    pub fn bar_defaults(&self, index: usize) -> Option<&BarDefaults> {
        if self.data.bar.is_empty() {
            None
        } else {
            self.data.bar.get(index % self.data.bar.len())
        }
    }

    /// Check every color and range in the theme
    pub fn validate(&self) -> Result<(), ThemeError> {
        let layout = &self.layout;
        for color in [
            &layout.paper_bgcolor,
            &layout.plot_bgcolor,
            &layout.font.color,
            &layout.hoverlabel.font.color,
            &layout.hoverlabel.bgcolor,
            &layout.xaxis.gridcolor,
            &layout.yaxis.gridcolor,
        ] {
            parse_color(color)?;
        }
        check_font_size(layout.font.size)?;
        if !(0.0..=1.0).contains(&layout.title.x) {
            return Err(ThemeError::TitleOutOfRange(layout.title.x));
        }
        for bar in &self.data.bar {
            parse_color(&bar.marker.color)?;
            parse_color(&bar.marker.line.color)?;
        }
        Ok(())
    }
}

fn check_font_size(size: u32) -> Result<(), ThemeError> {
    if (1..=MAX_FONT_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(ThemeError::FontSizeOutOfRange(size))
    }
}
