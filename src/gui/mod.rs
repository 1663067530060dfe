//! GUI module - chart window

mod app;
mod chart_viewer;

pub use app::{EguiSurface, PhillipsApp};
pub use chart_viewer::ChartViewer;
