//! Helper for running a single monitor as a native window.
//!
//! Embedders normally construct a [`PerformanceMonitor`] and call its `ui`
//! method from their own egui code; [`run_monitor`] is the shortcut for
//! demos and standalone use. The call blocks until the window is closed.

use eframe::egui;

use crate::config::MonitorOptions;
use crate::monitor::{DataFn, PerformanceMonitor};

struct MonitorApp {
    monitor: PerformanceMonitor,
}

impl eframe::App for MonitorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.monitor.ui(ui);
        });
    }
}

/// Open a native window hosting one started monitor.
pub fn run_monitor(options: MonitorOptions, data: DataFn) -> eframe::Result<()> {
    let title = options.title.clone();
    let mut monitor = PerformanceMonitor::new(options, data);
    monitor.start();

    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(480.0, 180.0)),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        opts,
        Box::new(|_cc| Ok(Box::new(MonitorApp { monitor }))),
    )
}
