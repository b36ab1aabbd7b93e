//! Scatter plots of tree count against wall time
//!
//! One plot is drawn per node group using the [`plotters`] crate. Both axes
//! are logarithmic; each solver gets its own colour. Plots are saved as SVG or
//! 1200x800 PNG files.

use crate::analysis::DerivedRow;
use crate::api::enums::{Algorithm, PlotFormat};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Plot resolution in pixels.
pub const PLOT_SIZE: (u32, u32) = (1200, 800);

/// Colour of the PRIM (IG-MDA) points.
pub const PRIM_COLOR: RGBColor = RGBColor(0xFF, 0xC8, 0x57);

/// Colour of the BN points.
pub const BN_COLOR: RGBColor = RGBColor(0x25, 0x5F, 0x85);

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Plot format '{0}' is not enabled in this build")]
    UnsupportedFormat(PlotFormat),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Points of one solver in a scatter plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub algorithm: Algorithm,
    /// (tree count, wall time in seconds) pairs.
    pub points: Vec<(f64, f64)>,
}

impl ScatterSeries {
    /// Collects the (tree count, wall time) points of a solver.
    ///
    /// Instances the solver did not report, and points that cannot be placed
    /// on a logarithmic axis (zero, negative or non-finite), are left out.
    pub fn from_rows(rows: &[&DerivedRow], algorithm: Algorithm) -> Self {
        let points = rows
            .iter()
            .map(|row| row.metrics(algorithm))
            .filter_map(|m| Some((m.solutions? as f64, m.wall_time)))
            .filter(|&(x, y)| is_plottable(x) && is_plottable(y))
            .collect();

        Self { algorithm, points }
    }
}

fn is_plottable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Colour a solver is drawn in.
pub fn series_color(algorithm: Algorithm) -> RGBColor {
    match algorithm {
        Algorithm::Prim => PRIM_COLOR,
        Algorithm::Bn => BN_COLOR,
    }
}

/// Title of the plot of one node group.
pub fn plot_title(plot_name: &str, nodes: u32) -> String {
    format!("{} MO-MST instances with {} nodes", plot_name, nodes)
}

/// Output path of the plot of one node group, `<dir>/<plot name>-<nodes>.<ext>`.
pub fn plot_path(output_dir: &Path, plot_name: &str, nodes: u32, format: PlotFormat) -> PathBuf {
    output_dir.join(format!("{}-{}.{}", plot_name, nodes, format.extension()))
}

/// Computes a logarithmic axis range enclosing `values` with some headroom.
///
/// # Returns
/// [`None`] if there are no values.
pub fn log_axis_range<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    let (min, max) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        });

    if !min.is_finite() || !max.is_finite() {
        return None;
    }

    Some((min / 2.0, max * 2.0))
}

/// Draws the scatter plot of one node group and saves it to `output_path`.
///
/// # Arguments
/// * `series` - Points of each solver, drawn in order
/// * `title` - Chart title displayed at the top of the plot
/// * `output_path` - Path where the plot should be saved
/// * `format` - File format of the plot
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If there is nothing to draw or drawing failed
///
/// # Chart Properties
/// * X-axis: tree count ("Efficient trees"), logarithmic
/// * Y-axis: wall time ("Duration [s]"), logarithmic, with horizontal grid lines
/// * Legend: solver labels in the upper left corner
pub fn create_scatter_plot(
    series: &[ScatterSeries],
    title: &str,
    output_path: &Path,
    format: PlotFormat,
) -> Result<()> {
    let x_range = log_axis_range(series.iter().flat_map(|s| s.points.iter().map(|p| p.0)));
    let y_range = log_axis_range(series.iter().flat_map(|s| s.points.iter().map(|p| p.1)));
    let (Some(x_range), Some(y_range)) = (x_range, y_range) else {
        return Err(PlotError::InvalidData(
            "Scatter plot has no plottable points".to_string(),
        ));
    };

    match format {
        #[cfg(feature = "svg")]
        PlotFormat::Svg => {
            let root = SVGBackend::new(output_path, PLOT_SIZE).into_drawing_area();
            draw_scatter(root, series, title, x_range, y_range)
        }
        #[cfg(feature = "png")]
        PlotFormat::Png => {
            let root = BitMapBackend::new(output_path, PLOT_SIZE).into_drawing_area();
            draw_scatter(root, series, title, x_range, y_range)
        }
        #[allow(unreachable_patterns)]
        other => Err(PlotError::UnsupportedFormat(other)),
    }
}

fn draw_scatter<DB: DrawingBackend>(
    drawing_area: DrawingArea<DB, Shift>,
    series: &[ScatterSeries],
    title: &str,
    (x_min, x_max): (f64, f64),
    (y_min, y_max): (f64, f64),
) -> Result<()> {
    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d((x_min..x_max).log_scale(), (y_min..y_max).log_scale())
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Efficient trees")
        .y_desc("Duration [s]")
        .label_style(("sans-serif", 25))
        .axis_desc_style(("sans-serif", 35))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    for s in series {
        let color = series_color(s.algorithm);
        chart_context
            .draw_series(
                s.points
                    .iter()
                    .map(move |&point| Circle::new(point, 5, color.filled())),
            )
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(s.algorithm.label())
            .legend(move |(x, y)| Circle::new((x + 10, y), 5, color.filled()));
    }

    chart_context
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(("sans-serif", 25))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Ensure everything is properly rendered and saved
    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Draws the plot of one node group.
///
/// # Returns
/// * `Ok(Some(path))` - Where the plot was saved
/// * `Ok(None)` - If neither solver has a plottable point in this group
/// * `Err(PlotError)` - If drawing failed
pub fn create_group_plot(
    rows: &[&DerivedRow],
    nodes: u32,
    plot_name: &str,
    output_dir: &Path,
    format: PlotFormat,
) -> Result<Option<PathBuf>> {
    let series = [
        ScatterSeries::from_rows(rows, Algorithm::Prim),
        ScatterSeries::from_rows(rows, Algorithm::Bn),
    ];
    if series.iter().all(|s| s.points.is_empty()) {
        return Ok(None);
    }

    let output_path = plot_path(output_dir, plot_name, nodes, format);
    create_scatter_plot(&series, &plot_title(plot_name, nodes), &output_path, format)?;
    Ok(Some(output_path))
}
