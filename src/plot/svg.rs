//! # SVG output
//!
//! Renders a `Figure` as a standalone SVG document.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use itertools::Itertools;
use tracing::debug;

use crate::error::PlotError;
use crate::plot::{Figure, LineStyle, PlotSink};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 480.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 55.0;
/// Approximate number of ticks per axis.
const TICKS: f64 = 6.0;

/// Writes figures as SVG documents.
pub struct SvgSink<W> {
    writer: W,
}

impl<W: Write> SvgSink<W> {
    /// Write to any destination.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Retrieve the destination, for example to inspect a buffer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl SvgSink<BufWriter<File>> {
    /// Write to a file, which is created or truncated.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, PlotError> {
        let file = File::create(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "writing svg");

        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> PlotSink for SvgSink<W> {
    fn render(&mut self, figure: &Figure) -> Result<(), PlotError> {
        figure.validate()?;

        let document = Document::new(figure).to_svg();
        self.writer.write_all(document.as_bytes())?;
        self.writer.flush()?;

        Ok(())
    }
}

/// Coordinate transformation from data space to the pixels of the axes.
struct Document<'a> {
    figure: &'a Figure,
}

impl<'a> Document<'a> {
    fn new(figure: &'a Figure) -> Self {
        Self { figure }
    }

    fn px(&self, x: f64) -> f64 {
        let (lower, upper) = self.figure.x_limits;
        MARGIN_LEFT + (x - lower) / (upper - lower) * (WIDTH - MARGIN_LEFT - MARGIN_RIGHT)
    }

    fn py(&self, y: f64) -> f64 {
        let (lower, upper) = self.figure.y_limits;
        let height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        MARGIN_TOP + (1.0 - (y - lower) / (upper - lower)) * height
    }

    fn points(&self, x: &[f64], y: &[f64]) -> String {
        x.iter().zip(y)
            .map(|(&x, &y)| format!("{:.2},{:.2}", self.px(x), self.py(y)))
            .join(" ")
    }

    fn to_svg(&self) -> String {
        let figure = self.figure;
        let (left, right) = (MARGIN_LEFT, WIDTH - MARGIN_RIGHT);
        let (top, bottom) = (MARGIN_TOP, HEIGHT - MARGIN_BOTTOM);
        let x_ticks = ticks(figure.x_limits);
        let y_ticks = ticks(figure.y_limits);

        let mut lines = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
                w = WIDTH, h = HEIGHT,
            ),
            format!(
                r#"<defs><clipPath id="axes"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath></defs>"#,
                left, top, right - left, bottom - top,
            ),
            format!(r#"<rect width="{}" height="{}" fill="white"/>"#, WIDTH, HEIGHT),
        ];

        if figure.grid {
            lines.push(r##"<g class="grid" stroke="#b0b0b0" stroke-width="0.8">"##.to_string());
            lines.extend(x_ticks.iter().map(|&(x, _)| {
                let x = self.px(x);
                format!(r#"<line x1="{x:.2}" y1="{top}" x2="{x:.2}" y2="{bottom}"/>"#)
            }));
            lines.extend(y_ticks.iter().map(|&(y, _)| {
                let y = self.py(y);
                format!(r#"<line x1="{left}" y1="{y:.2}" x2="{right}" y2="{y:.2}"/>"#)
            }));
            lines.push("</g>".to_string());
        }

        lines.push(r#"<g clip-path="url(#axes)">"#.to_string());
        for area in &figure.areas {
            let (Some(&first), Some(&last)) = (area.x.first(), area.x.last()) else { continue };
            let baseline = self.py(0.0);
            lines.push(format!(
                r#"<polygon class="area" points="{:.2},{baseline:.2} {} {:.2},{baseline:.2}" fill="{}" fill-opacity="{}"/>"#,
                self.px(first), self.points(&area.x, &area.y), self.px(last), escape(&area.color), area.opacity,
            ));
        }
        for line in &figure.lines {
            lines.push(format!(
                r#"<polyline class="curve" points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                self.points(&line.x, &line.y), escape(&line.color), line.width,
            ));
        }
        for marker in &figure.vertical_lines {
            let dash = match marker.style {
                LineStyle::Solid => "",
                LineStyle::Dashed => r#" stroke-dasharray="6 4""#,
            };
            let x = self.px(marker.x);
            lines.push(format!(
                r#"<line class="marker" x1="{x:.2}" y1="{top}" x2="{x:.2}" y2="{bottom}" stroke="{}" stroke-width="1.5"{dash}/>"#,
                escape(&marker.color),
            ));
        }
        lines.push("</g>".to_string());

        lines.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="black"/>"#,
            left, top, right - left, bottom - top,
        ));
        lines.extend(x_ticks.iter().map(|(x, label)| format!(
            r#"<text x="{:.2}" y="{}" font-size="12" text-anchor="middle">{}</text>"#,
            self.px(*x), bottom + 18.0, label,
        )));
        lines.extend(y_ticks.iter().map(|(y, label)| format!(
            r#"<text x="{}" y="{:.2}" font-size="12" text-anchor="end" dominant-baseline="middle">{}</text>"#,
            left - 6.0, self.py(*y), label,
        )));

        lines.push(format!(
            r#"<text class="title" x="{}" y="{}" font-size="16" text-anchor="middle">{}</text>"#,
            (left + right) / 2.0, top - 14.0, escape(&figure.title),
        ));
        lines.push(format!(
            r#"<text class="xlabel" x="{}" y="{}" font-size="14" text-anchor="middle">{}</text>"#,
            (left + right) / 2.0, HEIGHT - 12.0, escape(&figure.x_label),
        ));
        lines.push(format!(
            r#"<text class="ylabel" x="{x}" y="{y}" font-size="14" text-anchor="middle" transform="rotate(-90 {x} {y})">{}</text>"#,
            escape(&figure.y_label), x = 20.0, y = (top + bottom) / 2.0,
        ));
        lines.push("</svg>".to_string());

        lines.into_iter().join("\n") + "\n"
    }
}

/// Round tick positions within the limits, with their labels.
///
/// The distance between ticks is 1, 2 or 5 times a power of ten.
fn ticks((lower, upper): (f64, f64)) -> Vec<(f64, String)> {
    let raw = (upper - lower) / TICKS;
    let magnitude = 10_f64.powi(raw.log10().floor() as i32);
    let step = [1.0, 2.0, 5.0, 10.0].into_iter()
        .map(|factor| factor * magnitude)
        .find(|&step| step >= raw)
        .unwrap_or(10.0 * magnitude);
    let decimals = (-step.log10().floor()).max(0.0) as usize;

    let first = (lower / step).ceil() as i64;
    let last = (upper / step).floor() as i64;
    (first..=last)
        .map(|i| {
            let value = i as f64 * step;
            // Avoid "-0.0".
            let value = if value == 0.0 { 0.0 } else { value };
            (value, format!("{:.*}", decimals, value))
        })
        .collect()
}

fn escape(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            c => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use crate::integration::Interval;
    use crate::plot::{area_under_curve, PlotSink};

    use super::{escape, ticks, SvgSink};

    #[test]
    fn tick_labels() {
        let labels = ticks((-0.5, 2.5)).into_iter().map(|(_, label)| label).collect::<Vec<_>>();
        assert_eq!(labels, vec!["-0.5", "0.0", "0.5", "1.0", "1.5", "2.0", "2.5"]);

        let labels = ticks((0.0, 6.35)).into_iter().map(|(_, label)| label).collect::<Vec<_>>();
        assert_eq!(labels, vec!["0", "2", "4", "6"]);
    }

    #[test]
    fn escaping() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn document() {
        let interval = Interval::new(0.0, 2.0).unwrap();
        let figure = area_under_curve(|x| x * x, "x^2", interval, (-0.5, 2.5)).unwrap();

        let mut sink = SvgSink::new(Vec::new());
        sink.render(&figure).unwrap();
        let svg = String::from_utf8(sink.into_inner()).unwrap();

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Plot of the integral of f(x) = x^2 from 0 to 2"));
        assert_eq!(svg.matches("<polyline class=\"curve\"").count(), 1);
        assert_eq!(svg.matches("<polygon class=\"area\"").count(), 1);
        assert_eq!(svg.matches("stroke-dasharray").count(), 2);
        assert!(svg.contains("stroke=\"red\""));
        assert!(svg.contains("fill-opacity=\"0.3\""));
        assert!(svg.contains(">f(x)</text>"));
    }

    #[test]
    fn invalid_figure_writes_nothing() {
        let interval = Interval::new(0.0, 2.0).unwrap();
        let mut figure = area_under_curve(|x| x, "x", interval, (0.0, 2.0)).unwrap();
        figure.lines[0].y.pop();

        let mut sink = SvgSink::new(Vec::new());
        assert!(sink.render(&figure).is_err());
        assert!(sink.into_inner().is_empty());
    }
}
