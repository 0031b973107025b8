use log::debug;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::color::parse_color;
use super::styles::ChartTheme;
use crate::error::{RenderError, ThemeError};

/// Horizontal gap in pixels on each side of a bar
const BAR_GAP: u32 = 6;

/// A single-series bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<(String, f64)>,
}

impl BarChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            bars: Vec::new(),
        }
    }

    pub fn bar(mut self, label: impl Into<String>, value: f64) -> Self {
        self.bars.push((label.into(), value));
        self
    }

    /// Value axis range, always including zero
    fn value_range(&self) -> (f64, f64) {
        let min = self.bars.iter().map(|(_, v)| *v).fold(0.0_f64, f64::min);
        let max = self.bars.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
        if max <= min {
            (min, min + 1.0)
        } else {
            (min, max)
        }
    }
}

/// Short axis label: K/M suffixes for large values
pub fn format_value(y: &f64) -> String {
    if y.abs() >= 1_000_000.0 {
        format!("{:.1}M", y / 1_000_000.0)
    } else if y.abs() >= 1_000.0 {
        format!("{:.1}K", y / 1_000.0)
    } else {
        format!("{:.0}", y)
    }
}

fn draw_err<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Draw(e.to_string())
}

/// Fill and outline of the bar at `index`
fn bar_styles(
    theme: &ChartTheme,
    index: usize,
    fallback: RGBAColor,
) -> Result<(ShapeStyle, ShapeStyle), ThemeError> {
    match theme.bar_defaults(index) {
        Some(defaults) => {
            let marker = &defaults.marker;
            Ok((
                parse_color(&marker.color)?.filled(),
                parse_color(&marker.line.color)?.stroke_width(marker.line.width),
            ))
        }
        None => Ok((fallback.filled(), fallback.stroke_width(1))),
    }
}

/// Draw `chart` as an SVG document styled by `theme`.
///
/// Bars take their fill and outline from the theme's bar palette, one
/// palette entry per bar.
pub fn render_bar_chart_svg(
    theme: &ChartTheme,
    chart: &BarChart,
    size: (u32, u32),
) -> Result<String, RenderError> {
    if chart.bars.is_empty() {
        return Err(RenderError::Empty);
    }
    theme.validate()?;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw_bar_chart(&root, theme, chart, size)?;
        root.present().map_err(draw_err)?;
    }
    debug!("Rendered bar chart '{}' ({} bars)", chart.title, chart.bars.len());
    Ok(svg)
}

fn draw_bar_chart(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    theme: &ChartTheme,
    chart: &BarChart,
    size: (u32, u32),
) -> Result<(), RenderError> {
    let layout = &theme.layout;
    let font_color = parse_color(&layout.font.color)?;
    // Bounded by MAX_FONT_SIZE, checked in validate()
    let font_size = layout.font.size as i32;

    root.fill(&parse_color(&layout.paper_bgcolor)?)
        .map_err(draw_err)?;

    // Plotters only centers captions, so the title is placed at title.x by hand
    let title_style = ("sans-serif", font_size * 5 / 4)
        .into_font()
        .color(&font_color)
        .pos(Pos::new(HPos::Left, VPos::Top));
    let title_x = (layout.title.x * f64::from(size.0)).round() as i32;
    root.draw_text(&chart.title, &title_style, (title_x, 10))
        .map_err(draw_err)?;

    let (min_val, max_val) = chart.value_range();
    let count = chart.bars.len() as i32;

    let mut ctx = ChartBuilder::on(root)
        .margin(10)
        .margin_top(10 + font_size * 2)
        .x_label_area_size(font_size * 2)
        .y_label_area_size(font_size * 4)
        .build_cartesian_2d((0..count).into_segmented(), min_val..max_val)
        .map_err(draw_err)?;

    ctx.plotting_area()
        .fill(&parse_color(&layout.plot_bgcolor)?)
        .map_err(draw_err)?;

    let label_style = ("sans-serif", font_size * 3 / 4)
        .into_font()
        .color(&font_color);

    // Vertical grid lines get their own pass since each axis has its own grid color
    if layout.xaxis.showgrid {
        ctx.configure_mesh()
            .disable_y_mesh()
            .light_line_style(TRANSPARENT)
            .bold_line_style(parse_color(&layout.xaxis.gridcolor)?)
            .axis_style(TRANSPARENT)
            .label_style(("sans-serif", font_size).into_font().color(&TRANSPARENT))
            .x_labels(chart.bars.len() + 1)
            .draw()
            .map_err(draw_err)?;
    }

    let y_grid = parse_color(&layout.yaxis.gridcolor)?;
    let x_label_formatter = |x: &SegmentValue<i32>| match x {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => chart
            .bars
            .get(*i as usize)
            .map(|(label, _)| label.clone())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    };

    let mut mesh = ctx.configure_mesh();
    mesh.disable_x_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(y_grid)
        .axis_style(font_color.stroke_width(1))
        .label_style(label_style)
        .x_labels(chart.bars.len())
        .x_label_formatter(&x_label_formatter)
        .y_label_formatter(&format_value);
    if !layout.yaxis.showgrid {
        mesh.disable_y_mesh();
    }
    if !layout.xaxis.showline {
        mesh.disable_x_axis();
    }
    if !layout.yaxis.showline {
        mesh.disable_y_axis();
    }
    mesh.draw().map_err(draw_err)?;

    let styles = (0..chart.bars.len())
        .map(|i| bar_styles(theme, i, font_color))
        .collect::<Result<Vec<_>, _>>()?;

    let bar = |i: usize, value: f64, style: ShapeStyle| {
        let x = i as i32;
        let mut rect = Rectangle::new(
            [
                (SegmentValue::Exact(x), value.max(0.0)),
                (SegmentValue::Exact(x + 1), value.min(0.0)),
            ],
            style,
        );
        rect.set_margin(0, 0, BAR_GAP, BAR_GAP);
        rect
    };

    ctx.draw_series(
        chart
            .bars
            .iter()
            .zip(&styles)
            .enumerate()
            .map(|(i, ((_, value), (fill, _)))| bar(i, *value, *fill)),
    )
    .map_err(draw_err)?;
    ctx.draw_series(
        chart
            .bars
            .iter()
            .zip(&styles)
            .enumerate()
            .map(|(i, ((_, value), (_, outline)))| bar(i, *value, *outline)),
    )
    .map_err(draw_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&12.0), "12");
        assert_eq!(format_value(&1_500.0), "1.5K");
        assert_eq!(format_value(&-2_000_000.0), "-2.0M");
    }

    #[test]
    fn test_value_range_includes_zero() {
        let chart = BarChart::new("t").bar("a", 10.0).bar("b", 20.0);
        assert_eq!(chart.value_range(), (0.0, 20.0));

        let chart = BarChart::new("t").bar("a", -5.0).bar("b", 3.0);
        assert_eq!(chart.value_range(), (-5.0, 3.0));
    }

    #[test]
    fn test_value_range_all_zero() {
        let chart = BarChart::new("t").bar("a", 0.0);
        assert_eq!(chart.value_range(), (0.0, 1.0));
    }

    #[test]
    fn test_bar_styles_fallback_without_palette() {
        let mut theme = ChartTheme::tarpeydev_default();
        theme.data.bar.clear();
        let (fill, outline) = bar_styles(&theme, 3, RGBAColor(255, 255, 255, 1.0)).unwrap();
        assert!(fill.filled);
        assert_eq!(outline.stroke_width, 1);
    }
}
