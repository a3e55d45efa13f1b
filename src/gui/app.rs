//! Histogram Window
//! A single eframe window showing one component-size histogram.

use crate::charts::ChartPlotter;
use crate::data::SizeHistogram;
use crate::plot::{DisplayError, HistogramDisplay};
use eframe::egui;
use egui::RichText;
use std::path::Path;
use tracing::debug;

/// Window contents for one histogram.
pub struct HistogramApp {
    title: String,
    source: String,
    histogram: SizeHistogram,
}

impl HistogramApp {
    pub fn new(title: &str, source: &Path, histogram: SizeHistogram) -> Self {
        Self {
            title: title.to_string(),
            source: source.display().to_string(),
            histogram,
        }
    }

    /// Status line under the chart.
    pub fn summary(&self) -> String {
        format!(
            "{} | {} components, {} distinct sizes",
            self.source,
            self.histogram.total(),
            self.histogram.buckets().len()
        )
    }
}

impl eframe::App for HistogramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("summary").show(ctx, |ui| {
            ui.label(RichText::new(self.summary()).size(11.0).weak());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&self.title).size(18.0).strong());
            });
            ui.add_space(8.0);

            if self.histogram.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No Data").size(20.0));
                });
                return;
            }

            ChartPlotter::draw_histogram(ui, &self.histogram, &self.title);
        });
    }
}

/// Display that opens a native window and blocks until it is closed.
#[derive(Default)]
pub struct WindowDisplay;

impl WindowDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl HistogramDisplay for WindowDisplay {
    fn show(
        &mut self,
        title: &str,
        source: &Path,
        histogram: &SizeHistogram,
    ) -> Result<(), DisplayError> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([800.0, 500.0])
                .with_min_inner_size([400.0, 250.0])
                .with_title(title),
            // Hand control back to the menu after the window closes.
            run_and_return: true,
            ..Default::default()
        };

        let app = HistogramApp::new(title, source, histogram.clone());
        debug!(title, "opening chart window");

        eframe::run_native(
            "Component Histogram",
            options,
            Box::new(|_cc| Ok(Box::new(app))),
        )
        .map_err(|e| DisplayError::Window(e.to_string()))?;

        debug!(title, "chart window closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let histogram = SizeHistogram::from_sizes([1.0, 1.0, 3.0].map(Some));
        let app = HistogramApp::new("t", Path::new("clusters/components1.csv"), histogram);

        assert_eq!(
            app.summary(),
            "clusters/components1.csv | 3 components, 2 distinct sizes"
        );
    }
}
