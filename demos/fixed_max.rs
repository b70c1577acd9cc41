//! Staircase rendering with a fixed axis maximum (no adaptive scaling).
//!
//! Run with: `cargo run --example fixed_max`

use std::time::Instant;

use egui::Color32;
use perfmon::{run_monitor, MonitorOptions};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let t0 = Instant::now();
    run_monitor(
        MonitorOptions::new("Load")
            .with_unit("%")
            .with_color(Color32::from_rgb(0x61, 0x4d, 0x82))
            .with_smooth(false)
            .with_max(100.0),
        Box::new(move || {
            let t = t0.elapsed().as_secs_f64();
            (50.0 + 40.0 * (t * 0.7).sin()).round()
        }),
    )
}
