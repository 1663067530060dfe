//! Chart Plotter Module
//! Draws the Phillips curve with egui_plot.

use crate::charts::{AxisLimits, PhillipsChart};
use egui::{Align2, Color32, RichText};
use egui_plot::{GridMark, Line, Plot, PlotBounds, PlotPoint, PlotPoints, Points, Text};

/// Curve color
pub const CURVE_COLOR: Color32 = Color32::from_rgb(52, 152, 219);
/// Year annotation color
pub const LABEL_COLOR: Color32 = Color32::from_rgb(96, 125, 139);

/// Draws a [`PhillipsChart`] into an egui UI.
pub struct CurvePlotter;

impl CurvePlotter {
    /// One grid mark per integer in `0..=max`.
    pub fn integer_marks(max: u32) -> Vec<GridMark> {
        (0..=max)
            .map(|v| GridMark {
                value: v as f64,
                step_size: 1.0,
            })
            .collect()
    }

    fn bounds(limits: &AxisLimits) -> PlotBounds {
        PlotBounds::from_min_max([0.0, 0.0], [limits.max_x as f64, limits.max_y as f64])
    }

    /// Draw line + markers, with each point annotated by its year.
    pub fn draw_curve(ui: &mut egui::Ui, chart: &PhillipsChart) {
        let limits = chart.limits;
        let coords: Vec<[f64; 2]> = chart.points.iter().map(|p| [p.x, p.y]).collect();

        Plot::new("phillips_curve")
            .x_axis_label(chart.x_label.clone())
            .y_axis_label(chart.y_label.clone())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .clamp_grid(true)
            .x_grid_spacer(move |_input| Self::integer_marks(limits.max_x))
            .y_grid_spacer(move |_input| Self::integer_marks(limits.max_y))
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(Self::bounds(&limits));

                plot_ui.line(
                    Line::new(PlotPoints::from(coords.clone()))
                        .color(CURVE_COLOR)
                        .width(2.0),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(coords))
                        .radius(5.0)
                        .color(CURVE_COLOR),
                );

                for point in &chart.points {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(point.x, point.y),
                            RichText::new(point.label()).size(12.0),
                        )
                        .color(LABEL_COLOR)
                        .anchor(Align2::LEFT_BOTTOM),
                    );
                }
            });
    }
}
