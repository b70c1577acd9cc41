//! perfmon crate root: re-exports and module wiring.
//!
//! An embeddable realtime performance monitor built on egui/eframe: it polls
//! a numeric data source on a fixed cadence, keeps a bounded rolling history,
//! and redraws a continuously scrolling chart with an adaptively smoothed
//! vertical scale.
//!
//! Module map:
//! - `data`: value types (samples, axis state, viewport)
//! - `path`: sample-to-pixel path construction
//! - `grid`: time/value gridlines and labels
//! - `sampler`: ingestion cadence, resize throttle, monotonic clock
//! - `monitor`: the widget tying it all together
//! - `run`: native-window runner helper

pub mod color_scheme;
pub mod config;
pub mod data;
pub mod grid;
pub mod path;
pub mod sampler;

mod monitor;
mod run;

// Public re-exports for a compact external API
pub use color_scheme::ChartTheme;
pub use config::MonitorOptions;
pub use data::sample::{Sample, SampleBuffer};
pub use monitor::{DataFn, PerformanceMonitor};
pub use run::run_monitor;
