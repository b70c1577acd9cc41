//! Chart path construction: buffered samples to a fill/stroke shape.
//!
//! The builder is a pure function from `(buffer, viewport, max, now)` to a
//! command list in widget-local pixel space; turning the commands into egui
//! shapes is a separate, trivial step. This keeps the geometry unit-testable
//! without an egui context.

use egui::epaint::{CubicBezierShape, PathShape, PathStroke};
use egui::{pos2, Color32, Pos2, Shape, Stroke, Vec2};

use crate::config::{PIXELS_PER_MS, POLL_INTERVAL_MS, TOP_PADDING};
use crate::data::sample::SampleBuffer;
use crate::data::viewport::Viewport;

/// One drawing command in widget-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Pos2),
    LineTo(Pos2),
    /// Cubic segment from the previous point via two control points.
    CubicTo { c1: Pos2, c2: Pos2, to: Pos2 },
}

/// The chart series shape, usable both for fill and stroke.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ChartPath {
    cmds: Vec<PathCmd>,
}

impl ChartPath {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    #[inline]
    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    /// Flatten cubic segments into a polyline.
    pub fn flatten(&self) -> Vec<Pos2> {
        let mut points: Vec<Pos2> = Vec::with_capacity(self.cmds.len());
        let mut cursor = Pos2::ZERO;
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => {
                    points.push(p);
                    cursor = p;
                }
                PathCmd::CubicTo { c1, c2, to } => {
                    let bezier = CubicBezierShape::from_points_stroke(
                        [cursor, c1, c2, to],
                        false,
                        Color32::TRANSPARENT,
                        Stroke::NONE,
                    );
                    // flatten() repeats the start point; the cursor is
                    // already in the polyline.
                    points.extend(bezier.flatten(Some(0.1)).into_iter().skip(1));
                    cursor = to;
                }
            }
        }
        points
    }

    /// Produce the fill and stroke shapes, translated by `origin` (the chart
    /// rect's top-left corner). Fill uses a translucent tint of the series
    /// color; the stroke is a hairline in the solid color.
    pub fn shapes(&self, origin: Vec2, fill: Color32, color: Color32) -> Vec<Shape> {
        if self.cmds.is_empty() {
            return Vec::new();
        }
        let points: Vec<Pos2> = self.flatten().into_iter().map(|p| p + origin).collect();
        vec![
            Shape::Path(PathShape {
                points: points.clone(),
                closed: true,
                fill,
                stroke: PathStroke::new(0.0, Color32::TRANSPARENT),
            }),
            Shape::line(points, Stroke::new(0.5, color)),
        ]
    }
}

/// Left edge of the visible time window, in monotonic milliseconds.
///
/// The window trails `now` by one poll interval so the incomplete trailing
/// edge stays off-screen.
#[inline]
pub fn window_start(now_ms: f64, width: f32) -> f64 {
    now_ms - POLL_INTERVAL_MS - width as f64 / PIXELS_PER_MS
}

/// Vertical pixel position for a value, snapped to the half-pixel grid for
/// crisp hairline strokes. `max` already includes the headroom factor.
#[inline]
pub fn calc_y(height: f32, max: f64, value: f64) -> f32 {
    let visible_height = height - TOP_PADDING;
    (height - (visible_height as f64 * value / max) as f32).round() + 0.5
}

/// Build the series path for one frame.
///
/// The path opens at the oldest sample's x on the zero baseline, runs the
/// baseline to just past the right edge, rises to the newest value (a flat
/// leading edge, so the fill reaches the boundary between samples), then
/// walks the buffer newest to oldest emitting staircase steps or, with
/// `smooth`, cubics keyed on the horizontal midpoint. The walk ends one
/// sample past the visible window start (see
/// [`SampleBuffer::visible_tail`]). An empty buffer yields an empty path.
pub fn build_chart_path(
    buffer: &SampleBuffer,
    viewport: Viewport,
    max: f64,
    smooth: bool,
    now_ms: f64,
) -> ChartPath {
    let mut cmds = Vec::new();
    let (oldest, newest) = match (buffer.oldest(), buffer.newest()) {
        (Some(o), Some(n)) => (o, n),
        _ => return ChartPath::default(),
    };

    let width = viewport.width;
    let height = viewport.height;
    let start = window_start(now_ms, width);
    let to_x = |timestamp: f64| ((timestamp - start) * PIXELS_PER_MS) as f32;

    let baseline = calc_y(height, max, 0.0);
    cmds.push(PathCmd::MoveTo(pos2(to_x(oldest.timestamp), baseline)));
    // Flat leading edge out past the right boundary.
    let mut last_x = width + 5.0;
    let mut last_y = calc_y(height, max, newest.value);
    cmds.push(PathCmd::LineTo(pos2(last_x, baseline)));
    cmds.push(PathCmd::LineTo(pos2(last_x, last_y)));

    for sample in buffer.visible_tail(start, POLL_INTERVAL_MS) {
        let x = to_x(sample.timestamp);
        let y = calc_y(height, max, sample.value);
        if smooth {
            let mid_x = (last_x + x) / 2.0;
            cmds.push(PathCmd::CubicTo {
                c1: pos2(mid_x, last_y),
                c2: pos2(mid_x, y),
                to: pos2(x, y),
            });
        } else {
            cmds.push(PathCmd::LineTo(pos2(x, last_y)));
            cmds.push(PathCmd::LineTo(pos2(x, y)));
        }
        last_x = x;
        last_y = y;
    }

    ChartPath { cmds }
}
