//! Monitor options and tuning constants shared across the crate.

use egui::Color32;

// ─────────────────────────────────────────────────────────────────────────────
// Tuning constants
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed ingestion cadence: the data source is polled every 500 ms.
pub const POLL_INTERVAL_MS: f64 = 500.0;

/// Horizontal scale of the chart: 10 px per second of history.
pub const PIXELS_PER_MS: f64 = 10.0 / 1000.0;

/// Every Nth second gridline is labelled and drawn in the prominent shade.
pub const LABEL_DISTANCE_SECS: i64 = 10;

/// Height of the chart canvas in points.
pub const CHART_HEIGHT: f32 = 100.0;

/// Pixels reserved at the top of the chart for axis labels.
pub const TOP_PADDING: f32 = 18.0;

/// Axis maximum reported while the buffer is empty.
pub const DEFAULT_MAX: f64 = 10.0;

/// Exponential smoothing factor for the adaptive axis maximum.
pub const SMOOTH_ALPHA: f64 = 0.2;

/// Extra vertical headroom so peaks are not clipped against the top edge.
pub const HEADROOM: f64 = 1.05;

/// The buffer is trimmed only once it exceeds this multiple of its capacity,
/// down to exactly the capacity. Policy constant, not a derived bound.
pub const TRIM_HYSTERESIS: usize = 2;

/// Minimum interval between viewport re-measurements (trailing-edge throttle).
pub const RESIZE_THROTTLE_MS: f64 = 16.0;

// ─────────────────────────────────────────────────────────────────────────────
// MonitorOptions
// ─────────────────────────────────────────────────────────────────────────────

/// Display options for a [`PerformanceMonitor`](crate::PerformanceMonitor).
///
/// The data source callback is not part of the option set; it is supplied at
/// construction (or via `set_data_source`) because closures are neither
/// `Clone` nor `Debug`.
#[derive(Clone, Debug, PartialEq)]
pub struct MonitorOptions {
    /// Monitor title, shown above the chart.
    pub title: String,
    /// Draw smoothed curves between samples instead of staircase steps.
    pub smooth: bool,
    /// Unit suffix for the value readout and the scale labels (e.g. "MB").
    pub unit: String,
    /// Series color. The fill tint is derived from it.
    pub color: Color32,
    /// Fixed axis maximum. `0.0` means automatic (adaptive) scaling.
    pub max: f64,
}

impl Default for MonitorOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            smooth: true,
            unit: String::new(),
            color: Color32::from_rgb(0x1a, 0x73, 0xe8),
            max: 0.0,
        }
    }
}

impl MonitorOptions {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_unit<S: Into<String>>(mut self, unit: S) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    /// Set a fixed axis maximum, disabling adaptive scaling.
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }
}
