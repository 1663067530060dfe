//! Charts module - Phillips curve model and drawing

mod curve;
mod plotter;

pub use curve::{
    axis_limit, build_chart, AxisLimits, ChartSurface, CurveError, CurveRenderer, PhillipsChart,
    PlotPoint, AXIS_MARGIN,
};
pub use plotter::CurvePlotter;
