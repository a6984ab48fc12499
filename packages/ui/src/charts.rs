//! # Charts
//!
//! Two presentation-only charts rendered to SVG with `plotters`:
//!
//! - [`ParameterChart`]: flowrate, pressure and temperature per equipment item
//!   as three line series over a category x-axis of equipment names.
//! - [`TypeDistributionChart`]: one bar per equipment type, in the order the
//!   backend returned them, colored by cyclic index into [`PALETTE`].
//!
//! [`parameter_series`] and [`distribution_bars`] map API data onto chart
//! data; [`render_parameter_chart`] and [`render_distribution_chart`] draw it
//! into an SVG string that the components mount as inner HTML.

use std::ops::Range;

use api::{Equipment, TypeDistribution};
use dioxus::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle, RGBAColor, RGBColor, TextStyle};

/// An RGBA color; alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch(pub u8, pub u8, pub u8, pub f64);

impl Swatch {
    fn rgba(self) -> RGBAColor {
        RGBAColor(self.0, self.1, self.2, self.3)
    }
}

/// Bar fill colors, assigned by `index % PALETTE.len()`.
pub const PALETTE: [Swatch; 15] = [
    Swatch(79, 70, 229, 0.75),
    Swatch(100, 116, 139, 0.75),
    Swatch(51, 65, 85, 0.75),
    Swatch(71, 85, 105, 0.75),
    Swatch(148, 163, 184, 0.75),
    Swatch(99, 102, 241, 0.75),
    Swatch(129, 140, 248, 0.75),
    Swatch(71, 85, 105, 0.65),
    Swatch(100, 116, 139, 0.65),
    Swatch(148, 163, 184, 0.65),
    Swatch(79, 70, 229, 0.6),
    Swatch(99, 102, 241, 0.6),
    Swatch(51, 65, 85, 0.6),
    Swatch(71, 85, 105, 0.6),
    Swatch(129, 140, 248, 0.6),
];

pub fn palette_color(index: usize) -> Swatch {
    PALETTE[index % PALETTE.len()]
}

const AXIS_COLOR: RGBColor = RGBColor(100, 116, 139);

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSeries {
    pub label: &'static str,
    pub color: Swatch,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChartData {
    /// x-axis categories (equipment names).
    pub labels: Vec<String>,
    pub series: Vec<ParameterSeries>,
}

/// Flowrate / Pressure / Temperature series, one point per equipment row.
pub fn parameter_series(equipment: &[Equipment]) -> LineChartData {
    let column = |f: fn(&Equipment) -> f64| equipment.iter().map(f).collect::<Vec<_>>();
    LineChartData {
        labels: equipment.iter().map(|e| e.equipment_name.clone()).collect(),
        series: vec![
            ParameterSeries {
                label: "Flowrate",
                color: Swatch(79, 70, 229, 1.0),
                values: column(|e| e.flowrate),
            },
            ParameterSeries {
                label: "Pressure",
                color: Swatch(100, 116, 139, 1.0),
                values: column(|e| e.pressure),
            },
            ParameterSeries {
                label: "Temperature",
                color: Swatch(51, 65, 85, 1.0),
                values: column(|e| e.temperature),
            },
        ],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: u64,
    pub color: Swatch,
}

/// One bar per type, in distribution order.
pub fn distribution_bars(distribution: &TypeDistribution) -> Vec<Bar> {
    distribution
        .iter()
        .enumerate()
        .map(|(i, (label, value))| Bar {
            label: label.to_string(),
            value,
            color: palette_color(i),
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
#[error("chart rendering failed: {0}")]
pub struct ChartError(String);

fn chart_error(e: impl std::fmt::Display) -> ChartError {
    ChartError(e.to_string())
}

/// y range covering the finite `values` with some headroom. A flat series is
/// widened relative to its magnitude so the range never collapses.
pub fn value_range(values: &[f64], begin_at_zero: bool) -> Range<f64> {
    let (mut lo, mut hi) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if lo > hi {
        return 0.0..1.0;
    }
    if begin_at_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }
    let scale = lo.abs().max(1.0);
    if hi - lo <= scale * f64::EPSILON {
        hi = lo + scale;
    }
    let pad = (hi - lo) * 0.05;
    let bottom = if begin_at_zero && lo == 0.0 { lo } else { lo - pad };
    bottom..hi + pad
}

/// Category name for an x tick; blank between categories.
fn category_label(labels: &[String], x: f64) -> String {
    let i = x.round();
    if (x - i).abs() > 1e-6 || i < 0.0 {
        return String::new();
    }
    labels.get(i as usize).cloned().unwrap_or_default()
}

/// One x slot per category, centred on the integer indices.
fn category_range(n: usize) -> Range<f64> {
    -0.5..n.max(1) as f64 - 0.5
}

fn count_label(y: f64) -> String {
    if y.fract() == 0.0 {
        format!("{y:.0}")
    } else {
        String::new()
    }
}

/// Let the SVG scale with its container. Only the root tag is rewritten.
fn make_svg_responsive(svg: String, width: u32, height: u32) -> String {
    let needle = format!("width=\"{width}\" height=\"{height}\"");
    let view_box = format!("viewBox=\"0 0 {width} {height}\"");
    let sizing = "width=\"100%\" height=\"100%\" preserveAspectRatio=\"xMidYMid meet\"";
    let replacement = if svg.contains(&view_box) {
        sizing.to_string()
    } else {
        format!("{view_box} {sizing}")
    };
    svg.replacen(&needle, &replacement, 1)
}

fn caption_font() -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, 16.0, FontStyle::Bold)
}

fn label_font() -> TextStyle<'static> {
    FontDesc::new(FontFamily::SansSerif, 11.0, FontStyle::Normal).color(&AXIS_COLOR)
}

/// Line chart of every parameter series as an SVG document.
pub fn render_parameter_chart(
    data: &LineChartData,
    width: u32,
    height: u32,
) -> Result<String, ChartError> {
    use plotters::prelude::*;

    let all_values: Vec<f64> = data
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .collect();
    let labels = &data.labels;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Equipment Parameters", caption_font())
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(category_range(labels.len()), value_range(&all_values, false))
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len().max(1))
            .x_label_formatter(&|x| category_label(labels, *x))
            .axis_style(AXIS_COLOR)
            .label_style(label_font())
            .draw()
            .map_err(chart_error)?;

        for series in &data.series {
            let color = series.color.rgba();
            let points: Vec<(f64, f64)> = series
                .values
                .iter()
                .enumerate()
                .filter(|(_, v)| v.is_finite())
                .map(|(i, v)| (i as f64, *v))
                .collect();

            chart
                .draw_series(LineSeries::new(
                    points.iter().copied(),
                    ShapeStyle::from(&color).stroke_width(2),
                ))
                .map_err(chart_error)?
                .label(series.label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
            chart
                .draw_series(points.iter().map(|p| Circle::new(*p, 3, color.filled())))
                .map_err(chart_error)?;
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK.mix(0.3))
            .label_font(label_font())
            .position(SeriesLabelPosition::UpperRight)
            .draw()
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
    }
    Ok(make_svg_responsive(svg, width, height))
}

/// Bar chart of type counts as an SVG document.
pub fn render_distribution_chart(
    bars: &[Bar],
    width: u32,
    height: u32,
) -> Result<String, ChartError> {
    use plotters::prelude::*;

    let counts: Vec<f64> = bars.iter().map(|b| b.value as f64).collect();
    let labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Equipment Type Distribution", caption_font())
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(40)
            .build_cartesian_2d(category_range(bars.len()), value_range(&counts, true))
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len().max(1))
            .x_label_formatter(&|x| category_label(&labels, *x))
            .y_label_formatter(&|y| count_label(*y))
            .axis_style(AXIS_COLOR)
            .label_style(label_font())
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(bars.iter().enumerate().map(|(i, bar)| {
                let x = i as f64;
                Rectangle::new(
                    [(x - 0.35, 0.0), (x + 0.35, bar.value as f64)],
                    bar.color.rgba().filled(),
                )
            }))
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
    }
    Ok(make_svg_responsive(svg, width, height))
}

fn mount(rendered: Result<String, ChartError>, class: &str) -> Element {
    match rendered {
        Ok(svg) => rsx! {
            div { class: "chart {class}", dangerous_inner_html: "{svg}" }
        },
        Err(e) => {
            tracing::error!("{}", e);
            rsx! {
                div { class: "chart {class} muted", "Chart unavailable" }
            }
        }
    }
}

/// Line chart of the measured parameters of every equipment item.
#[component]
pub fn ParameterChart(equipment: Vec<Equipment>) -> Element {
    let data = parameter_series(&equipment);
    mount(render_parameter_chart(&data, 640, 350), "parameter-chart")
}

/// Bar chart of equipment counts per type.
#[component]
pub fn TypeDistributionChart(distribution: TypeDistribution) -> Element {
    let bars = distribution_bars(&distribution);
    mount(render_distribution_chart(&bars, 640, 300), "type-distribution-chart")
}
