//! The performance monitor widget.
//!
//! Owns the rolling sample history, the smoothed axis state, and the
//! ingestion schedule; each egui frame it drains due ingestion ticks and
//! redraws the scrolling chart (scaler, then path, then grid).

use std::time::{Duration, Instant};

use chrono::Utc;
use egui::{vec2, Color32, Painter, Rect, Response, RichText, Sense, Ui};
use log::debug;

use crate::color_scheme::{fill_tint, ChartTheme};
use crate::config::{MonitorOptions, CHART_HEIGHT, HEADROOM, POLL_INTERVAL_MS, RESIZE_THROTTLE_MS};
use crate::data::sample::{retention_capacity, Sample, SampleBuffer};
use crate::data::scale::{axis_max, AxisState};
use crate::data::viewport::Viewport;
use crate::grid::{format_value, paint_time_grid, paint_value_grid};
use crate::path::{build_chart_path, window_start};
use crate::sampler::{perf_now_ms, Sampler, Throttle};

/// Data source callback: polled once per ingestion tick, must be synchronous
/// and non-blocking. The returned number is appended to the history as-is.
pub type DataFn = Box<dyn FnMut() -> f64 + 'static>;

/// Realtime counter for displaying cpu, fps or similar metrics.
///
/// Call [`start`](Self::start) once and then [`ui`](Self::ui) every egui
/// frame; the widget keeps requesting repaints while running, so the chart
/// scrolls continuously. Dropping the monitor releases the history and the
/// schedule with it.
///
/// ```no_run
/// # use perfmon::{MonitorOptions, PerformanceMonitor};
/// let mut monitor = PerformanceMonitor::new(
///     MonitorOptions::new("Used JS heap size").with_unit("MB"),
///     Box::new(|| 42.0),
/// );
/// monitor.start();
/// ```
pub struct PerformanceMonitor {
    options: MonitorOptions,
    data: DataFn,
    buffer: SampleBuffer,
    axis: AxisState,
    viewport: Viewport,
    sampler: Sampler,
    resize_throttle: Throttle,
    fill_color: Color32,
    last_value: Option<f64>,
}

impl PerformanceMonitor {
    pub fn new(options: MonitorOptions, data: DataFn) -> Self {
        let fill_color = fill_tint(options.color);
        Self {
            options,
            data,
            buffer: SampleBuffer::new(),
            axis: AxisState::new(),
            viewport: Viewport::default(),
            sampler: Sampler::new(Duration::from_millis(POLL_INTERVAL_MS as u64)),
            resize_throttle: Throttle::new(Duration::from_millis(RESIZE_THROTTLE_MS as u64)),
            fill_color,
            last_value: None,
        }
    }

    /// Start monitoring: arms the ingestion schedule and polls the data
    /// source once immediately, so the chart is not empty until the first
    /// regular tick. Starting a running monitor is a clean no-op.
    pub fn start(&mut self) {
        if self.sampler.start(Instant::now()) {
            debug!("monitor '{}' started", self.options.title);
            self.poll();
        }
    }

    /// Stop monitoring. The history stays in place; [`ui`](Self::ui) keeps
    /// drawing the frozen chart without requesting further repaints.
    /// Idempotent.
    pub fn stop(&mut self) {
        if self.sampler.is_running() {
            debug!("monitor '{}' stopped", self.options.title);
        }
        self.sampler.stop();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.sampler.is_running()
    }

    #[inline]
    pub fn options(&self) -> &MonitorOptions {
        &self.options
    }

    /// Replace the option set. Derived state (the fill tint) follows a color
    /// change; switching `max` back to `0.0` re-enables adaptive scaling
    /// from a fresh axis state.
    pub fn set_options(&mut self, options: MonitorOptions) {
        if options.color != self.options.color {
            self.fill_color = fill_tint(options.color);
        }
        if options.max != self.options.max {
            self.axis.reset();
        }
        self.options = options;
    }

    /// Swap the data source callback. Takes effect on the next ingestion tick.
    pub fn set_data_source(&mut self, data: DataFn) {
        self.data = data;
    }

    /// Most recently polled value, if any.
    #[inline]
    pub fn latest_value(&self) -> Option<f64> {
        self.last_value
    }

    /// One ingestion tick: poll the data source, append the sample, and trim
    /// the buffer to the capacity implied by the current viewport width.
    fn poll(&mut self) {
        let value = (self.data)();
        self.buffer.push(Sample::new(perf_now_ms(), value));
        if self.viewport.width > 0.0 {
            self.buffer.trim_to(retention_capacity(self.viewport.width));
        }
        self.last_value = Some(value);
    }

    /// Render the widget: title row with the live readout, then the chart.
    /// This is the frame tick; while running it drains due ingestion ticks
    /// and schedules the next repaint.
    pub fn ui(&mut self, ui: &mut Ui) -> Response {
        let theme = ChartTheme::from_visuals(ui.visuals());

        ui.horizontal(|ui| {
            ui.strong(self.options.title.as_str());
            if let Some(value) = self.last_value {
                ui.label(
                    RichText::new(format_value(value, &self.options.unit))
                        .color(self.options.color),
                );
            }
        });

        let desired = vec2(ui.available_width(), CHART_HEIGHT);
        let (response, painter) = ui.allocate_painter(desired, Sense::hover());
        let rect = response.rect;
        self.measure(rect, ui.is_rect_visible(rect));

        if self.sampler.is_running() {
            if self.sampler.poll_due(Instant::now()) {
                self.poll();
            }
            // Self-perpetuating frame chain; broken by stop().
            ui.ctx().request_repaint();
        }

        self.draw(&painter, rect, theme);
        response
    }

    /// Throttled viewport re-measurement. A hidden or zero-width surface is
    /// skipped so the retention capacity is never thrashed by a bogus
    /// measurement.
    fn measure(&mut self, rect: Rect, visible: bool) {
        if !visible || rect.width() <= 0.0 {
            return;
        }
        let measured = Viewport::new(rect.width(), CHART_HEIGHT);
        if measured != self.viewport && self.resize_throttle.ready(Instant::now()) {
            debug!(
                "monitor '{}' viewport {}x{}",
                self.options.title, measured.width, measured.height
            );
            self.viewport = measured;
        }
    }

    fn draw(&mut self, painter: &Painter, rect: Rect, theme: ChartTheme) {
        if !self.viewport.is_measured() {
            return;
        }
        let painter = painter.with_clip_rect(rect);

        let now = perf_now_ms();
        let start = window_start(now, self.viewport.width);
        let max = axis_max(
            &self.buffer,
            start,
            POLL_INTERVAL_MS,
            self.options.max,
            &mut self.axis,
        ) * HEADROOM;

        let path = build_chart_path(&self.buffer, self.viewport, max, self.options.smooth, now);
        for shape in path.shapes(rect.min.to_vec2(), self.fill_color, self.options.color) {
            painter.add(shape);
        }

        paint_value_grid(&painter, rect, theme, max, &self.options.unit);
        let now_wall = Utc::now().timestamp_millis() as f64 / 1000.0;
        paint_time_grid(&painter, rect, theme, now_wall);
    }
}
