//! Phillips Curve Module
//! Builds the chart model (points, annotations, axis limits) from two
//! aligned year series and hands it to a display surface.

use anyhow::Result;
use thiserror::Error;

use crate::data::{YearRange, YearSelection, YearSeries};

/// Fixed headroom added above the largest value on each axis.
pub const AXIS_MARGIN: u32 = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("Series '{label}' starts in {first_year}, expected {expected}")]
    Misaligned {
        label: String,
        first_year: i32,
        expected: i32,
    },
    #[error("Series '{label}' has {len} values, the selected years need {needed}")]
    TooShort {
        label: String,
        len: usize,
        needed: usize,
    },
}

/// One plotted year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub year: i32,
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    /// Annotation text drawn next to the point.
    pub fn label(&self) -> String {
        self.year.to_string()
    }
}

/// Upper axis limits; both axes start at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisLimits {
    pub max_x: u32,
    pub max_y: u32,
}

impl AxisLimits {
    pub fn from_points(points: &[PlotPoint]) -> Self {
        let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        Self {
            max_x: axis_limit(max_x),
            max_y: axis_limit(max_y),
        }
    }

    /// Integer tick positions `0..=max_x`.
    pub fn x_ticks(&self) -> impl Iterator<Item = u32> {
        0..=self.max_x
    }

    /// Integer tick positions `0..=max_y`.
    pub fn y_ticks(&self) -> impl Iterator<Item = u32> {
        0..=self.max_y
    }
}

/// `ceil(max) + AXIS_MARGIN`, clamped at 0 since both axes start there.
/// An empty selection (`max` of nothing) gets the bare margin.
pub fn axis_limit(max: f64) -> u32 {
    if !max.is_finite() {
        return AXIS_MARGIN;
    }
    (max.ceil() + AXIS_MARGIN as f64).max(0.0) as u32
}

/// Everything a surface needs to draw the curve.
#[derive(Debug, Clone, PartialEq)]
pub struct PhillipsChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub range: YearRange,
    pub points: Vec<PlotPoint>,
    pub limits: AxisLimits,
}

/// Something that can show a finished chart.
pub trait ChartSurface {
    fn display(&mut self, chart: PhillipsChart) -> Result<()>;
}

fn selected<'a>(
    series: &'a YearSeries,
    selection: &YearSelection,
) -> Result<&'a [f64], CurveError> {
    if series.first_year() != selection.first_year() {
        return Err(CurveError::Misaligned {
            label: series.label.clone(),
            first_year: series.first_year(),
            expected: selection.first_year(),
        });
    }
    let indices = selection.indices();
    let needed = indices.end;
    series.slice(indices).ok_or_else(|| CurveError::TooShort {
        label: series.label.clone(),
        len: series.len(),
        needed,
    })
}

/// Slice both series to the selected years, pair them by year and compute
/// the limits.
pub fn build_chart(
    x: &YearSeries,
    y: &YearSeries,
    selection: &YearSelection,
) -> Result<PhillipsChart, CurveError> {
    let range = selection.range();
    let xs = selected(x, selection)?;
    let ys = selected(y, selection)?;

    let points: Vec<PlotPoint> = range
        .years()
        .zip(xs.iter().zip(ys))
        .map(|(year, (&x, &y))| PlotPoint { year, x, y })
        .collect();
    let limits = AxisLimits::from_points(&points);

    log::debug!(
        "Curve {}..={}: {} points, axis limits {}x{}",
        range.start,
        range.end,
        points.len(),
        limits.max_x,
        limits.max_y
    );

    Ok(PhillipsChart {
        title: format!("Phillips curve {}-{}", range.start, range.end),
        x_label: x.label.clone(),
        y_label: y.label.clone(),
        range,
        points,
        limits,
    })
}

/// Builds the chart and passes it to a surface.
pub struct CurveRenderer;

impl CurveRenderer {
    pub fn render(
        surface: &mut dyn ChartSurface,
        x: &YearSeries,
        y: &YearSeries,
        selection: &YearSelection,
    ) -> Result<()> {
        let chart = build_chart(x, y, selection)?;
        surface.display(chart)
    }
}
