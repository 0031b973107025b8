pub mod chart;
pub mod color;
pub mod registry;
pub mod render;
pub mod styles;


pub use chart::{BarTrace, Figure};
pub use color::parse_color;
pub use registry::ThemeRegistry;
pub use render::{render_bar_chart_svg, BarChart};
pub use styles::{black_theme, default_theme, Axis, ChartTheme, MAX_FONT_SIZE};
