//! Adaptive vertical-axis scaling with nice-number rounding and smoothing.

use crate::config::{DEFAULT_MAX, SMOOTH_ALPHA};
use crate::data::sample::SampleBuffer;

/// Smoothed axis maximum carried across frames.
///
/// Kept as persistent state rather than recomputed from scratch so an abrupt
/// change in the signal's peak eases the axis towards the new value instead
/// of snapping it.
#[derive(Debug, Default, Clone, Copy)]
pub struct AxisState {
    current_max: Option<f64>,
}

impl AxisState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Smoothed maximum from the last frame, if one was computed yet.
    #[inline]
    pub fn current_max(&self) -> Option<f64> {
        self.current_max
    }

    pub fn reset(&mut self) {
        self.current_max = None;
    }
}

/// Compute the axis maximum for this frame.
///
/// A nonzero `fixed_max` bypasses scanning and smoothing entirely. Otherwise
/// the recent tail of the buffer is scanned for its raw peak, which is
/// rounded up to a nice number and folded into the smoothed state. An empty
/// buffer (or one without a positive peak) reports [`DEFAULT_MAX`].
///
/// Must run once per frame, before the path builder and the grid renderer
/// read the result.
pub fn axis_max(
    buffer: &SampleBuffer,
    window_start: f64,
    grace: f64,
    fixed_max: f64,
    state: &mut AxisState,
) -> f64 {
    if fixed_max != 0.0 {
        return fixed_max;
    }

    let raw_max = buffer
        .visible_tail(window_start, grace)
        .map(|s| s.value)
        .fold(f64::NEG_INFINITY, f64::max);
    if buffer.is_empty() || !(raw_max > 0.0) {
        return DEFAULT_MAX;
    }

    let nice = nice_max(raw_max);
    let smoothed = nice * SMOOTH_ALPHA + state.current_max.unwrap_or(nice) * (1.0 - SMOOTH_ALPHA);
    state.current_max = Some(smoothed);
    smoothed
}

/// Round `raw` up to the smallest multiple of twice its decade base.
///
/// `base = 10^floor(log10(raw))`; the result is `ceil(raw / 2·base) · 2·base`,
/// producing values like 20, 40, 60 or 200, 400 rather than arbitrary
/// decimals. 47 rounds to 60, 150 to 200.
pub fn nice_max(raw: f64) -> f64 {
    debug_assert!(raw > 0.0);
    let base = 10f64.powi(raw.log10().floor() as i32);
    (raw / base / 2.0).ceil() * base * 2.0
}

/// Readable grid step for a given axis maximum.
///
/// Same decade base as [`nice_max`], but an odd leading digit other than 1
/// doubles the base first, so the reference lines land on 1/2/5-style
/// multiples instead of e.g. 30/15.
pub fn scale_unit(max: f64) -> f64 {
    debug_assert!(max > 0.0);
    let mut base = 10f64.powi(max.log10().floor() as i32);
    let first_digit = (max / base).floor() as i64;
    if first_digit != 1 && first_digit % 2 == 1 {
        base *= 2.0;
    }
    (max / base).floor() * base
}
