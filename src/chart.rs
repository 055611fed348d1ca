// KSIM-PLOT: Charts for Disk-Scheduling and Page-Replacement Simulation Results
// Copyright (C) 2024-2025 Roland Schmid <roschmi@ethz.ch> and Tibor Schneider <sctibor@ethz.ch>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//! Rendering of line and step charts, as PNG (plotters) and as interactive HTML (plotly).
use std::{
    ops::Range,
    path::{Path, PathBuf},
};

use itertools::Itertools;
use plotly::{
    common::{Line, LineShape, Mode},
    layout::Axis,
    Layout, Plot, Scatter,
};
use plotters::prelude::*;

use crate::error::{Error, Result};

/// A named sequence of points, drawn as one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.0).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.1).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Pixel size of the rendered PNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl ChartSize {
    /// 6.4 x 4.8 inches at 160 dpi.
    pub const LARGE: Self = Self::new(1024, 768);
    /// 6.4 x 4.8 inches at 120 dpi.
    pub const SMALL: Self = Self::new(768, 576);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for ChartSize {
    fn default() -> Self {
        Self::LARGE
    }
}

impl From<ChartSize> for (u32, u32) {
    fn from(size: ChartSize) -> Self {
        (size.width, size.height)
    }
}

/// Everything about a chart except its data.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub size: ChartSize,
    /// Draw a marker at every data point.
    pub markers: bool,
    /// Draw a legend keyed by series name.
    pub legend: bool,
}

impl ChartSpec {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            size: ChartSize::default(),
            markers: true,
            legend: true,
        }
    }

    pub fn size(mut self, size: ChartSize) -> Self {
        self.size = size;
        self
    }

    pub fn markers(mut self, markers: bool) -> Self {
        self.markers = markers;
        self
    }

    pub fn legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }
}

/// Expand a sequence of `(x, y)` samples into the vertices of a step function that holds each
/// `y` until the next `x` (the "post" step semantics).
///
/// `[(0, 80), (5, 10)]` becomes `[(0, 80), (5, 80), (5, 10)]`.
pub fn step_points(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut result = Vec::with_capacity(points.len() * 2);
    for (i, &(x, y)) in points.iter().enumerate() {
        if i > 0 {
            let (_, prev_y) = points[i - 1];
            result.push((x, prev_y));
        }
        result.push((x, y));
    }
    result
}

/// Range covering all `values`, with a small margin. Degenerate inputs still yield a non-empty
/// range.
fn axis_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let Some((lo, hi)) = values.minmax_by(|a, b| a.total_cmp(b)).into_option() else {
        return 0.0..1.0;
    };
    let pad = if hi > lo {
        (hi - lo) * 0.05
    } else {
        lo.abs().max(1.0) * 0.5
    };
    (lo - pad)..(hi + pad)
}

/// Render `series` as a line chart into the PNG file `out`.
pub fn render_lines(series: &[Series], spec: &ChartSpec, out: impl AsRef<Path>) -> Result<()> {
    let out = out.as_ref();
    draw_lines(series, spec, out).map_err(|e| Error::Render {
        path: out.to_path_buf(),
        reason: e.to_string(),
    })?;
    log::info!("Saved: {}", out.display());
    Ok(())
}

/// Render the step function through `points` (see [`step_points`]) into the PNG file `out`.
pub fn render_steps(
    name: &str,
    points: &[(f64, f64)],
    spec: &ChartSpec,
    out: impl AsRef<Path>,
) -> Result<()> {
    let series = Series::new(name, step_points(points));
    render_lines(&[series], spec, out)
}

fn draw_lines(
    series: &[Series],
    spec: &ChartSpec,
    out: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let x_range = axis_range(series.iter().flat_map(|s| s.points.iter().map(|p| p.0)));
    let y_range = axis_range(series.iter().flat_map(|s| s.points.iter().map(|p| p.1)));

    let root = BitMapBackend::new(out, spec.size.into()).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .light_line_style(BLACK.mix(0.05))
        .draw()?;

    for (idx, s) in series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        chart
            .draw_series(LineSeries::new(
                s.points.iter().copied(),
                color.stroke_width(2),
            ))?
            .label(s.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        if spec.markers {
            chart.draw_series(
                s.points
                    .iter()
                    .map(|&point| Circle::new(point, 4, color.filled())),
            )?;
        }
    }

    if spec.legend && !series.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Path of the interactive companion of a PNG chart.
pub fn html_path(png: impl AsRef<Path>) -> PathBuf {
    png.as_ref().with_extension("html")
}

fn layout(spec: &ChartSpec) -> Layout {
    Layout::new()
        .title(spec.title.clone())
        .x_axis(Axis::new().title(spec.x_label.clone()).show_grid(true))
        .y_axis(Axis::new().title(spec.y_label.clone()).show_grid(true))
        .show_legend(spec.legend)
}

/// Write `series` as an interactive line chart into the HTML file `out`.
pub fn write_html_lines(series: &[Series], spec: &ChartSpec, out: impl AsRef<Path>) {
    let mode = if spec.markers {
        Mode::LinesMarkers
    } else {
        Mode::Lines
    };

    let mut plot = Plot::new();
    plot.set_layout(layout(spec));
    for s in series {
        let trace = Scatter::new(s.xs(), s.ys())
            .name(s.name.as_str())
            .mode(mode.clone());
        plot.add_trace(trace);
    }

    log::debug!("Plotting {:?}", out.as_ref());
    plot.write_html(out.as_ref());
    log::info!("Saved: {}", out.as_ref().display());
}

/// Write the step function through `points` as an interactive chart into the HTML file `out`.
pub fn write_html_steps(name: &str, points: &[(f64, f64)], spec: &ChartSpec, out: impl AsRef<Path>) {
    let (xs, ys): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();

    let mut plot = Plot::new();
    plot.set_layout(layout(spec));
    plot.add_trace(
        Scatter::new(xs, ys)
            .name(name)
            .mode(Mode::Lines)
            .line(Line::new().shape(LineShape::Hv)),
    );

    log::debug!("Plotting {:?}", out.as_ref());
    plot.write_html(out.as_ref());
    log::info!("Saved: {}", out.as_ref().display());
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn post_steps_hold_previous_value() {
        assert_eq!(
            step_points(&[(0.0, 80.0), (5.0, 10.0)]),
            vec![(0.0, 80.0), (5.0, 80.0), (5.0, 10.0)]
        );
        assert_eq!(step_points(&[(3.0, 7.0)]), vec![(3.0, 7.0)]);
        assert!(step_points(&[]).is_empty());
    }

    #[test]
    fn axis_ranges() {
        let r = axis_range([10.0, 30.0, 20.0].into_iter());
        assert!(r.start < 10.0 && r.start > 8.0);
        assert!(r.end > 30.0 && r.end < 32.0);

        let r = axis_range([5.0].into_iter());
        assert!(r.start < 5.0 && r.end > 5.0);

        assert_eq!(axis_range(std::iter::empty()), 0.0..1.0);
    }

    #[test]
    fn html_path_replaces_extension() {
        assert_eq!(
            html_path("figs/mem_faults_vs_frames.png"),
            PathBuf::from("figs/mem_faults_vs_frames.html")
        );
    }

    #[test]
    fn spec_builder() {
        let spec = ChartSpec::new("t", "x", "y")
            .size(ChartSize::SMALL)
            .markers(false)
            .legend(false);
        assert_eq!(spec.size, ChartSize::new(768, 576));
        assert!(!spec.markers);
        assert!(!spec.legend);
        assert_eq!(<(u32, u32)>::from(spec.size), (768, 576));
    }

    #[test]
    fn html_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("lines.html");
        let series = [Series::new("lru", vec![(1.0, 4.0), (2.0, 3.0)])];
        write_html_lines(&series, &ChartSpec::new("t", "x", "y"), &out);
        assert!(out.exists());

        let out = dir.path().join("steps.html");
        write_html_steps("to", &[(0.0, 80.0), (5.0, 10.0)], &ChartSpec::new("t", "x", "y"), &out);
        assert!(out.exists());
    }

    #[test]
    #[ignore = "rasterizing text needs system fonts"]
    fn render_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("lines.png");
        let series = [
            Series::new("fifo", vec![(1.0, 9.0), (2.0, 7.0)]),
            Series::new("lru", vec![(1.0, 8.0), (2.0, 6.0)]),
        ];
        render_lines(&series, &ChartSpec::new("t", "x", "y"), &out).unwrap();
        assert!(out.exists());
    }
}
