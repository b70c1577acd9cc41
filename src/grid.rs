//! Time and value gridlines with wall-clock labels.
//!
//! Gridline geometry is computed by pure functions; painting them onto an
//! egui surface lives in the `paint_*` functions at the bottom.

use chrono::Local;
use egui::{pos2, FontId, Painter, Rect};

use crate::color_scheme::ChartTheme;
use crate::config::{LABEL_DISTANCE_SECS, PIXELS_PER_MS, POLL_INTERVAL_MS};
use crate::data::scale::scale_unit;
use crate::path::calc_y;

/// How far off the left edge a gridline may fall before scanning stops.
const OFFSCREEN_MARGIN: f32 = 50.0;

/// Short leading tick in front of each value label.
const TICK_LEN: f32 = 4.0;

/// One vertical second line on the time grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGridline {
    /// Horizontal pixel position, may be slightly negative near the edge.
    pub x: f32,
    /// The whole second (unix time) this line marks.
    pub second: i64,
    /// Labelled lines are drawn in the prominent shade.
    pub labeled: bool,
}

/// One horizontal reference line on the value grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueGridline {
    pub y: f32,
    pub value: f64,
    pub label: String,
}

/// Vertical lines for every whole second visible on the chart, newest first.
///
/// Uses the same time-to-pixel mapping as the path builder (offset by one
/// poll interval); scanning stops once a line falls more than
/// [`OFFSCREEN_MARGIN`] px off the left edge. Every
/// [`LABEL_DISTANCE_SECS`]th second is labelled.
pub fn time_gridlines(now_wall_secs: f64, width: f32) -> Vec<TimeGridline> {
    let mut lines = Vec::new();
    let mut sec = now_wall_secs.ceil() as i64;
    loop {
        sec -= 1;
        if sec <= 0 {
            break;
        }
        let x = width
            - (((now_wall_secs - sec as f64) * 1000.0 - POLL_INTERVAL_MS) * PIXELS_PER_MS) as f32;
        if x < -OFFSCREEN_MARGIN {
            break;
        }
        lines.push(TimeGridline {
            x,
            second: sec,
            labeled: sec % LABEL_DISTANCE_SECS == 0,
        });
    }
    lines
}

/// Wall-clock label for a second line, in local time.
pub fn format_time_label(second: i64) -> String {
    let dt_utc = chrono::DateTime::from_timestamp(second, 0)
        .unwrap_or_else(|| chrono::DateTime::from_timestamp(0, 0).unwrap());
    dt_utc.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// Exactly two reference lines, at the rounded scale value and its half.
pub fn value_gridlines(max: f64, height: f32, unit: &str) -> Vec<ValueGridline> {
    let mut scale_value = scale_unit(max);
    let mut lines = Vec::with_capacity(2);
    for _ in 0..2 {
        lines.push(ValueGridline {
            y: calc_y(height, max, scale_value),
            value: scale_value,
            label: format_value(scale_value, unit),
        });
        scale_value /= 2.0;
    }
    lines
}

/// Numeric label with the unit suffix, trailing zeros trimmed. Shared by the
/// grid labels and the monitor's live readout.
pub fn format_value(value: f64, unit: &str) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{}{}", value as i64, unit)
    } else {
        let s = format!("{value:.2}");
        let s = s.trim_end_matches('0').trim_end_matches('.');
        format!("{s}{unit}")
    }
}

const LABEL_FONT_SIZE: f32 = 10.0;

/// Paint the vertical second lines and their wall-clock labels.
pub fn paint_time_grid(painter: &Painter, rect: Rect, theme: ChartTheme, now_wall_secs: f64) {
    let font = FontId::proportional(LABEL_FONT_SIZE);
    for line in time_gridlines(now_wall_secs, rect.width()) {
        let x = rect.left() + line.x;
        let color = if line.labeled {
            theme.grid_color()
        } else {
            theme.faint_grid_color()
        };
        painter.line_segment(
            [pos2(x, rect.top()), pos2(x, rect.bottom())],
            egui::Stroke::new(1.0, color),
        );
        if line.labeled {
            painter.text(
                pos2(x + 4.0, rect.top() + 2.0),
                egui::Align2::LEFT_TOP,
                format_time_label(line.second),
                font.clone(),
                theme.label_color(),
            );
        }
    }
}

/// Paint the two value reference lines, their labels, and the baseline.
///
/// Each label sits right of a short leading tick; the faint grid segment
/// only starts past the measured label width so text is never overdrawn.
pub fn paint_value_grid(painter: &Painter, rect: Rect, theme: ChartTheme, max: f64, unit: &str) {
    let font = FontId::proportional(LABEL_FONT_SIZE);
    let stroke = egui::Stroke::new(1.0, theme.grid_color());
    for line in value_gridlines(max, rect.height(), unit) {
        let y = rect.top() + line.y;
        let galley = painter.layout_no_wrap(line.label, font.clone(), theme.label_color());
        let label_width = galley.size().x;
        painter.line_segment([pos2(rect.left(), y), pos2(rect.left() + TICK_LEN, y)], stroke);
        painter.line_segment(
            [pos2(rect.left() + label_width + 12.0, y), pos2(rect.right(), y)],
            stroke,
        );
        let text_pos = pos2(rect.left() + 8.0, y - galley.size().y / 2.0);
        painter.galley(text_pos, galley, theme.label_color());
    }
    let base_y = rect.bottom() - 0.5;
    painter.line_segment(
        [pos2(rect.left(), base_y), pos2(rect.right(), base_y)],
        egui::Stroke::new(1.0, theme.baseline_color()),
    );
}
