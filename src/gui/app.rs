//! Phillips Curve Window
//! Native window that displays a finished chart until closed.

use crate::charts::{ChartSurface, PhillipsChart};
use crate::config::WindowConfig;
use crate::gui::ChartViewer;
use anyhow::anyhow;

/// Main application window.
pub struct PhillipsApp {
    chart_viewer: ChartViewer,
}

impl PhillipsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, chart: PhillipsChart) -> Self {
        Self {
            chart_viewer: ChartViewer::new(chart),
        }
    }
}

impl eframe::App for PhillipsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}

/// Chart surface backed by an eframe window. `display` blocks until the
/// window is closed.
pub struct EguiSurface {
    window: WindowConfig,
}

impl EguiSurface {
    pub fn new(window: WindowConfig) -> Self {
        Self { window }
    }
}

impl ChartSurface for EguiSurface {
    fn display(&mut self, chart: PhillipsChart) -> anyhow::Result<()> {
        let title = chart.title.clone();
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([self.window.width, self.window.height])
                .with_min_inner_size([800.0, 500.0])
                .with_title(&title),
            ..Default::default()
        };

        log::info!("Opening chart window: {title}");
        eframe::run_native(
            &title,
            options,
            Box::new(|cc| Ok(Box::new(PhillipsApp::new(cc, chart)))),
        )
        .map_err(|e| anyhow!("Chart window failed: {e}"))
    }
}
