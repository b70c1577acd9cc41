use perfmon::data::sample::{Sample, SampleBuffer};
use perfmon::data::viewport::Viewport;
use perfmon::path::{build_chart_path, calc_y, window_start, PathCmd};

fn filled(samples: &[(f64, f64)]) -> SampleBuffer {
    let mut buf = SampleBuffer::new();
    for &(t, v) in samples {
        buf.push(Sample::new(t, v));
    }
    buf
}

/// All vertex positions in command order (cubic endpoints only).
fn vertices(cmds: &[PathCmd]) -> Vec<egui::Pos2> {
    cmds.iter()
        .map(|cmd| match *cmd {
            PathCmd::MoveTo(p) | PathCmd::LineTo(p) => p,
            PathCmd::CubicTo { to, .. } => to,
        })
        .collect()
}

#[test]
fn window_trails_now_by_one_poll_interval() {
    // 100 px of width is 10 s of history, plus the 500 ms trailing gap
    assert!((window_start(11000.0, 100.0) - 500.0).abs() < 1e-9);
}

#[test]
fn empty_buffer_yields_an_empty_path() {
    let path = build_chart_path(
        &SampleBuffer::new(),
        Viewport::new(100.0, 100.0),
        10.0,
        false,
        1500.0,
    );
    assert!(path.is_empty());
    assert!(path.flatten().is_empty());
    assert!(path
        .shapes(egui::Vec2::ZERO, egui::Color32::TRANSPARENT, egui::Color32::WHITE)
        .is_empty());
}

#[test]
fn constant_signal_draws_a_flat_line() {
    let buf = filled(&[(0.0, 5.0), (500.0, 5.0), (1000.0, 5.0)]);
    let viewport = Viewport::new(100.0, 100.0);
    let path = build_chart_path(&buf, viewport, 10.0, false, 1500.0);

    // preamble: baseline open, baseline to right edge, rise to newest value;
    // then one horizontal+vertical step per sample
    let cmds = path.commands();
    assert_eq!(cmds.len(), 3 + 2 * 3);

    let expected_y = calc_y(100.0, 10.0, 5.0);
    assert_eq!(expected_y, 59.5);
    // every vertex after the baseline preamble sits on the same row
    for p in &vertices(cmds)[2..] {
        assert_eq!(p.y, expected_y);
    }
}

#[test]
fn sample_just_before_the_window_is_included() {
    // now = 11000, width = 100 px: window starts at T = 500
    let buf = filled(&[(499.0, 3.0), (600.0, 3.0), (700.0, 3.0)]);
    let path = build_chart_path(&buf, Viewport::new(100.0, 100.0), 10.0, false, 11000.0);
    let xs: Vec<f32> = vertices(path.commands()).iter().map(|p| p.x).collect();
    // vertex just left of the window edge, from the T-1 sample
    assert!(xs.iter().any(|&x| (x - (-0.01)).abs() < 1e-3));
}

#[test]
fn distant_sample_before_the_window_is_excluded() {
    // lone sample a full second before the window start
    let buf = filled(&[(-500.0, 3.0), (600.0, 3.0), (700.0, 3.0)]);
    let path = build_chart_path(&buf, Viewport::new(100.0, 100.0), 10.0, false, 11000.0);
    // preamble plus steps for the two in-window samples only
    assert_eq!(path.commands().len(), 3 + 2 * 2);
    let min_x = vertices(&path.commands()[3..])
        .iter()
        .map(|p| p.x)
        .fold(f32::INFINITY, f32::min);
    // 600 ms maps to 1 px past the window start
    assert!(min_x > 0.9);
}

#[test]
fn smoothing_emits_cubic_segments() {
    let buf = filled(&[(0.0, 1.0), (500.0, 4.0), (1000.0, 2.0)]);
    let viewport = Viewport::new(100.0, 100.0);

    let stepped = build_chart_path(&buf, viewport, 10.0, false, 1500.0);
    assert!(stepped
        .commands()
        .iter()
        .all(|c| !matches!(c, PathCmd::CubicTo { .. })));

    let smooth = build_chart_path(&buf, viewport, 10.0, true, 1500.0);
    let cubics = smooth
        .commands()
        .iter()
        .filter(|c| matches!(c, PathCmd::CubicTo { .. }))
        .count();
    assert_eq!(cubics, 3);
    // cubic control points share the horizontal midpoint of each pair
    for pair in vertices(smooth.commands()).windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if let Some(PathCmd::CubicTo { c1, c2, .. }) = smooth
            .commands()
            .iter()
            .find(|c| matches!(c, PathCmd::CubicTo { to, .. } if *to == b))
        {
            assert_eq!(c1.x, (a.x + b.x) / 2.0);
            assert_eq!(c2.x, c1.x);
        }
    }
}

#[test]
fn flatten_expands_cubics_into_a_polyline() {
    let buf = filled(&[(0.0, 1.0), (500.0, 4.0)]);
    let viewport = Viewport::new(100.0, 100.0);
    let smooth = build_chart_path(&buf, viewport, 10.0, true, 1500.0);
    let flat = smooth.flatten();
    assert!(flat.len() > smooth.commands().len());
    // endpoints survive flattening
    let last_vertex = *vertices(smooth.commands()).last().unwrap();
    let end = *flat.last().unwrap();
    assert!((end.x - last_vertex.x).abs() < 1e-3);
    assert!((end.y - last_vertex.y).abs() < 1e-3);
}

#[test]
fn values_snap_to_the_half_pixel_grid() {
    let y = calc_y(100.0, 10.0, 3.3);
    assert_eq!(y.fract().abs(), 0.5);
    // zero maps to the baseline below the visible area
    assert_eq!(calc_y(100.0, 10.0, 0.0), 100.5);
}
