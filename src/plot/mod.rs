//! # Plotting
//!
//! A small, backend independent description of a two dimensional figure, and sinks that render
//! it.
use crate::error::PlotError;
use crate::integration::Interval;

pub mod svg;

/// Number of points at which the curve of a figure is sampled.
pub const CURVE_POINTS: usize = 400;
/// Number of points at which the boundary of a shaded area is sampled.
pub const AREA_POINTS: usize = 50;

/// `n` evenly spaced values from `start` to `stop`, both included.
///
/// # Return value
///
/// An empty vector for `n = 0` and `[start]` for `n = 1`. Otherwise, the first and last value are
/// exactly `start` and `stop`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + i as f64 * step })
                .collect()
        },
    }
}

/// How a line is drawn.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LineStyle {
    /// Continuous.
    Solid,
    /// Interrupted at regular distances.
    Dashed,
}

/// A curve through a sequence of points.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    /// Horizontal coordinates.
    pub x: Vec<f64>,
    /// Vertical coordinates, as many as there are horizontal ones.
    pub y: Vec<f64>,
    /// Any color name understood by the backend.
    pub color: String,
    /// Stroke width in points.
    pub width: f64,
}

/// The region between a curve and the horizontal axis.
#[derive(Clone, Debug, PartialEq)]
pub struct FilledArea {
    /// Horizontal coordinates of the upper boundary.
    pub x: Vec<f64>,
    /// Vertical coordinates of the upper boundary.
    pub y: Vec<f64>,
    /// Fill color.
    pub color: String,
    /// Between `0` (invisible) and `1` (opaque).
    pub opacity: f64,
}

/// A line spanning the full height of the axes.
#[derive(Clone, Debug, PartialEq)]
pub struct VerticalLine {
    /// Where the line crosses the horizontal axis.
    pub x: f64,
    /// Stroke color.
    pub color: String,
    /// Solid or dashed.
    pub style: LineStyle,
}

/// Everything that is needed to draw a figure with a single pair of axes.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    /// Shown above the axes.
    pub title: String,
    /// Label of the horizontal axis.
    pub x_label: String,
    /// Label of the vertical axis.
    pub y_label: String,
    /// Visible horizontal range.
    pub x_limits: (f64, f64),
    /// Visible vertical range.
    pub y_limits: (f64, f64),
    /// Whether grid lines are drawn at the ticks.
    pub grid: bool,
    /// Drawn first, below the lines.
    pub areas: Vec<FilledArea>,
    /// Curves.
    pub lines: Vec<Line>,
    /// Markers, drawn last.
    pub vertical_lines: Vec<VerticalLine>,
}

impl Figure {
    /// Check that the figure can be drawn.
    ///
    /// # Errors
    ///
    /// `InvalidFigure` when limits are empty or not finite, or when a series is empty, has
    /// coordinate vectors of different length, or contains a value that is not finite.
    pub fn validate(&self) -> Result<(), PlotError> {
        for (name, (lower, upper)) in [("horizontal", self.x_limits), ("vertical", self.y_limits)] {
            if !lower.is_finite() || !upper.is_finite() || lower >= upper {
                return Err(PlotError::InvalidFigure(format!(
                    "{} limits should be finite and increasing, got ({}, {})", name, lower, upper,
                )));
            }
        }

        let series = self.lines.iter().map(|line| (&line.x, &line.y))
            .chain(self.areas.iter().map(|area| (&area.x, &area.y)));
        for (x, y) in series {
            if x.is_empty() || x.len() != y.len() {
                return Err(PlotError::InvalidFigure(format!(
                    "series should be non empty with as many x as y values, got {} and {}",
                    x.len(), y.len(),
                )));
            }
            if x.iter().chain(y).any(|value| !value.is_finite()) {
                return Err(PlotError::InvalidFigure("series contains a value that is not finite".to_string()));
            }
        }

        if self.vertical_lines.iter().any(|line| !line.x.is_finite()) {
            return Err(PlotError::InvalidFigure("marker position is not finite".to_string()));
        }

        Ok(())
    }
}

/// Something that can display or store a figure.
pub trait PlotSink {
    /// Render the figure.
    ///
    /// # Errors
    ///
    /// When the figure is invalid or the output can't be written.
    fn render(&mut self, figure: &Figure) -> Result<(), PlotError>;
}

/// Figure showing the area under the graph of `f` over `interval`.
///
/// The curve is drawn in red over `view`, the area under it over `interval` is shaded gray and the
/// interval limits are marked with dashed gray lines. The vertical axis starts at zero and ends
/// slightly above the highest point of the curve.
///
/// # Arguments
///
/// * `f`: Function to draw.
/// * `expression`: How `f` is written in the title, for example `x^2`.
/// * `interval`: Domain of integration.
/// * `view`: Horizontal range of the curve.
pub fn area_under_curve<F>(
    f: F,
    expression: &str,
    interval: Interval,
    view: (f64, f64),
) -> Result<Figure, PlotError>
where
    F: Fn(f64) -> f64,
{
    let x = linspace(view.0, view.1, CURVE_POINTS);
    let y = x.iter().map(|&x| f(x)).collect::<Vec<_>>();
    let highest = y.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let area_x = linspace(interval.lower(), interval.upper(), AREA_POINTS);
    let area_y = area_x.iter().map(|&x| f(x)).collect();

    let marker = |x| VerticalLine { x, color: "gray".to_string(), style: LineStyle::Dashed };

    let figure = Figure {
        title: format!(
            "Plot of the integral of f(x) = {} from {} to {}",
            expression, interval.lower(), interval.upper(),
        ),
        x_label: "x".to_string(),
        y_label: "f(x)".to_string(),
        x_limits: (view.0, view.1),
        y_limits: (0.0, highest + 0.1),
        grid: true,
        areas: vec![FilledArea { x: area_x, y: area_y, color: "gray".to_string(), opacity: 0.3 }],
        lines: vec![Line { x, y, color: "red".to_string(), width: 2.0 }],
        vertical_lines: vec![marker(interval.lower()), marker(interval.upper())],
    };
    figure.validate()?;

    Ok(figure)
}
