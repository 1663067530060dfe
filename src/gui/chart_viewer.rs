//! Chart Viewer Widget
//! Central panel showing the curve card and the plotted values.

use crate::charts::{CurvePlotter, PhillipsChart};
use egui::{Color32, RichText, ScrollArea};

/// Width of the values table beside the plot
const TABLE_WIDTH: f32 = 260.0;
const CARD_SPACING: f32 = 12.0;

/// Displays one Phillips curve with its title and a table of plotted values.
pub struct ChartViewer {
    pub chart: PhillipsChart,
}

impl ChartViewer {
    pub fn new(chart: PhillipsChart) -> Self {
        Self { chart }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let accent = Color32::from_rgb(100, 149, 237);

        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(2.0, accent))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&self.chart.title)
                            .size(18.0)
                            .strong()
                            .color(accent),
                    );
                    ui.label(
                        RichText::new(format!(
                            "{} years, x: {}, y: {}",
                            self.chart.points.len(),
                            self.chart.x_label,
                            self.chart.y_label
                        ))
                        .size(12.0)
                        .color(Color32::GRAY),
                    );

                    ui.add_space(CARD_SPACING);

                    ui.horizontal_top(|ui| {
                        let plot_width = (ui.available_width() - TABLE_WIDTH - CARD_SPACING).max(200.0);
                        ui.vertical(|ui| {
                            ui.set_width(plot_width);
                            CurvePlotter::draw_curve(ui, &self.chart);
                        });

                        ui.add_space(CARD_SPACING);

                        ui.vertical(|ui| {
                            ui.set_width(TABLE_WIDTH);
                            Self::draw_values_table(ui, &self.chart);
                        });
                    });
                });
            });
    }

    /// Year / x / y grid for the plotted points
    fn draw_values_table(ui: &mut egui::Ui, chart: &PhillipsChart) {
        ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("curve_values")
                .striped(true)
                .min_col_width(60.0)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Year").strong().size(11.0));
                    ui.label(RichText::new(&chart.x_label).strong().size(11.0));
                    ui.label(RichText::new(&chart.y_label).strong().size(11.0));
                    ui.end_row();

                    for point in &chart.points {
                        ui.label(RichText::new(point.label()).size(11.0));
                        ui.label(RichText::new(format!("{:.1}", point.x)).size(11.0));
                        ui.label(RichText::new(format!("{:.1}", point.y)).size(11.0));
                        ui.end_row();
                    }
                });
        });
    }
}
