//! Lap Chart Window
//! Summary header above an interactive lap time plot.

use crate::board::format_time;
use crate::charts::{ChartPlotter, LapChartData};
use egui::RichText;

/// Main application window.
pub struct LapChartApp {
    chart: LapChartData,
}

impl LapChartApp {
    pub fn new(chart: LapChartData) -> Self {
        Self { chart }
    }
}

impl eframe::App for LapChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("summary").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.label(RichText::new(&self.chart.title).size(18.0).strong());
            ui.horizontal(|ui| {
                ui.label(format!("Race: {}", self.chart.race));
                ui.separator();
                ui.label(format!("Laps: {}", self.chart.laps.len()));
                ui.separator();
                ui.label(format!("Fastest: {}", format_time(self.chart.fastest)));
                ui.separator();
                ui.label(format!("Average: {}", format_time(self.chart.average)));
            });
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ChartPlotter::draw_lap_chart(ui, &self.chart);
        });
    }
}
