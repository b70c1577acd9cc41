//! Minimal demo: a monitor following a noisy sine signal.
//!
//! Run with: `cargo run --example sine`

use std::time::Instant;

use perfmon::{run_monitor, MonitorOptions};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let t0 = Instant::now();
    run_monitor(
        MonitorOptions::new("Sine signal").with_unit("V"),
        Box::new(move || {
            let t = t0.elapsed().as_secs_f64();
            let noise = (t * 17.3).sin() * 2.0;
            30.0 + 25.0 * (t * 0.5).sin() + noise
        }),
    )
}
