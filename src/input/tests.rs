use super::stroke::StrokeState;
use super::tracker::{map_to_canvas, scale_factors};
use super::*;
use crate::error::CanvasError;
use crate::util::{Point, Size, ViewportRect};

fn assert_close(actual: Point, expected: Point) {
    assert!(
        (actual.x - expected.x).abs() < 1e-9 && (actual.y - expected.y).abs() < 1e-9,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

// ============================================================================
// Tracker
// ============================================================================

#[test]
fn maps_scaled_element_with_offset() {
    let mapped = map_to_canvas(
        Point::new(110.0, 110.0),
        ViewportRect::new(10.0, 10.0, 400.0, 300.0),
        Size::new(800.0, 600.0),
        Size::new(400.0, 300.0),
    )
    .unwrap();
    assert_close(mapped, Point::new(200.0, 200.0));
}

#[test]
fn scales_each_axis_independently() {
    let (sx, sy) = scale_factors(Size::new(800.0, 300.0), Size::new(400.0, 300.0)).unwrap();
    assert_eq!((sx, sy), (2.0, 1.0));

    let mapped = map_to_canvas(
        Point::new(50.0, 50.0),
        ViewportRect::new(0.0, 0.0, 400.0, 300.0),
        Size::new(800.0, 300.0),
        Size::new(400.0, 300.0),
    )
    .unwrap();
    assert_close(mapped, Point::new(100.0, 50.0));
}

#[test]
fn mapping_is_scale_invariant() {
    let raw = Point::new(123.0, 77.0);
    let bounds = ViewportRect::new(3.0, 7.0, 400.0, 300.0);
    let small = map_to_canvas(raw, bounds, Size::new(800.0, 600.0), Size::new(400.0, 300.0));
    let large = map_to_canvas(raw, bounds, Size::new(1600.0, 1200.0), Size::new(800.0, 600.0));
    assert_close(small.unwrap(), large.unwrap());
}

#[test]
fn zero_sizes_are_degenerate() {
    let zero_backing = scale_factors(Size::new(0.0, 600.0), Size::new(400.0, 300.0));
    assert!(matches!(
        zero_backing,
        Err(CanvasError::DegenerateGeometry { .. })
    ));

    let zero_display = scale_factors(Size::new(800.0, 600.0), Size::new(400.0, 0.0));
    assert!(matches!(
        zero_display,
        Err(CanvasError::DegenerateGeometry { .. })
    ));
}

#[test]
fn overflowing_scale_is_degenerate() {
    // Positive but subnormal: passes the size check, the ratio overflows.
    let display = Size::new(1e-320, 300.0);
    assert!(display.is_valid());

    let scale = scale_factors(Size::new(800.0, 600.0), display);
    assert!(matches!(scale, Err(CanvasError::DegenerateGeometry { .. })));

    let mapped = map_to_canvas(
        Point::new(50.0, 50.0),
        ViewportRect::new(0.0, 0.0, 400.0, 300.0),
        Size::new(800.0, 600.0),
        display,
    );
    assert!(matches!(mapped, Err(CanvasError::DegenerateGeometry { .. })));
}

#[test]
fn overflowing_mapped_point_is_degenerate() {
    let mapped = map_to_canvas(
        Point::new(f64::MAX, 10.0),
        ViewportRect::new(-f64::MAX, 0.0, 400.0, 300.0),
        Size::new(800.0, 600.0),
        Size::new(400.0, 300.0),
    );
    assert!(matches!(mapped, Err(CanvasError::DegenerateGeometry { .. })));
}

// ============================================================================
// Stabilizer
// ============================================================================

#[test]
fn disabled_stabilizer_follows_pointer() {
    let stabilizer = Stabilizer::new(false, 0.3);
    let raw = Point::new(17.0, -3.5);
    assert_eq!(stabilizer.target(Point::new(0.0, 0.0), raw), raw);
}

#[test]
fn full_delay_matches_disabled() {
    let enabled = Stabilizer::new(true, 1.0);
    let disabled = Stabilizer::new(false, 1.0);
    let last = Point::new(0.1, 0.7);
    let raw = Point::new(1e6 + 0.3, -42.9);
    assert_eq!(enabled.target(last, raw), raw);
    assert_eq!(enabled.target(last, raw), disabled.target(last, raw));
}

#[test]
fn partial_delay_moves_fraction_of_the_way() {
    let stabilizer = Stabilizer::new(true, 0.25);
    let target = stabilizer.target(Point::new(0.0, 100.0), Point::new(40.0, 20.0));
    assert_close(target, Point::new(10.0, 80.0));
}

#[test]
fn pointer_at_last_position_does_not_move() {
    let stabilizer = Stabilizer::new(true, 0.3);
    let last = Point::new(64.5, 12.25);
    assert_eq!(stabilizer.target(last, last), last);
}

#[test]
fn new_stabilizer_matches_config_defaults() {
    let config = crate::config::StabilizerConfig::default();
    let stabilizer = Stabilizer::new(config.enabled, config.delay);
    assert_eq!(stabilizer, Stabilizer::default());
    assert!(stabilizer.snap_to_final_point);
    assert!(stabilizer.closes_strokes());
}

#[test]
fn snapping_requires_enabled_stabilizer() {
    let mut stabilizer = Stabilizer::new(false, 0.3);
    stabilizer.snap_to_final_point = true;
    assert!(!stabilizer.closes_strokes());

    stabilizer.enabled = true;
    assert!(stabilizer.closes_strokes());
}

// ============================================================================
// Stroke state machine
// ============================================================================

#[test]
fn starts_idle_at_origin() {
    let state = PointerState::new();
    assert_eq!(state.stroke(), StrokeState::Idle);
    assert_eq!(state.current(), Point::ORIGIN);
    assert!(state.last_committed().is_none());
}

#[test]
fn idle_moves_track_position_without_segments() {
    let mut state = PointerState::new();
    let stabilizer = Stabilizer::default();
    for i in 0..10 {
        let p = Point::new(i as f64, (i * 2) as f64);
        assert!(state.advance(p, &stabilizer).is_none());
        assert_eq!(state.current(), p);
    }
    assert!(!state.is_drawing());
}

#[test]
fn press_commits_current_position() {
    let mut state = PointerState::new();
    let stabilizer = Stabilizer::default();
    state.advance(Point::new(100.0, 100.0), &stabilizer);

    let start = state.press();
    assert_eq!(start, Point::new(100.0, 100.0));
    assert_eq!(state.last_committed(), Some(start));
}

#[test]
fn stabilized_stroke_scenario() {
    let mut state = PointerState::new();
    let stabilizer = Stabilizer::new(true, 0.3);
    state.advance(Point::new(100.0, 100.0), &stabilizer);
    state.press();

    let first = state.advance(Point::new(200.0, 100.0), &stabilizer).unwrap();
    assert_close(first.from, Point::new(100.0, 100.0));
    assert_close(first.to, Point::new(130.0, 100.0));

    let second = state.advance(Point::new(200.0, 100.0), &stabilizer).unwrap();
    assert_close(second.from, Point::new(130.0, 100.0));
    assert_close(second.to, Point::new(151.0, 100.0));
}

#[test]
fn unstabilized_stroke_passes_through_every_point() {
    let mut state = PointerState::new();
    let stabilizer = Stabilizer::new(false, 0.3);
    state.press();

    let raw = [
        Point::new(3.0, 4.0),
        Point::new(9.5, 1.0),
        Point::new(-2.0, 8.0),
    ];
    let mut from = Point::ORIGIN;
    for p in raw {
        let segment = state.advance(p, &stabilizer).unwrap();
        assert_eq!(segment.from, from);
        assert_eq!(segment.to, p);
        from = p;
    }
}

#[test]
fn repeated_release_transitions_once() {
    let mut state = PointerState::new();
    let mut stabilizer = Stabilizer::new(true, 0.5);
    stabilizer.snap_to_final_point = false;
    state.press();
    state.advance(Point::new(10.0, 0.0), &stabilizer);

    assert!(state.release(&stabilizer).is_none());
    assert!(!state.is_drawing());
    assert!(state.release(&stabilizer).is_none());
    assert!(state.release(&stabilizer).is_none());
    assert_eq!(state.stroke(), StrokeState::Idle);
}

#[test]
fn release_with_snap_returns_closing_segment() {
    let mut state = PointerState::new();
    let mut stabilizer = Stabilizer::new(true, 0.5);
    stabilizer.snap_to_final_point = true;
    state.press();
    state.advance(Point::new(10.0, 0.0), &stabilizer);

    let closing = state.release(&stabilizer).unwrap();
    assert_close(closing.from, Point::new(5.0, 0.0));
    assert_close(closing.to, Point::new(10.0, 0.0));

    // Already idle: nothing more to close.
    assert!(state.release(&stabilizer).is_none());
}

#[test]
fn press_after_release_starts_fresh_stroke() {
    let mut state = PointerState::new();
    let stabilizer = Stabilizer::new(true, 0.3);
    state.press();
    state.advance(Point::new(50.0, 50.0), &stabilizer);
    state.release(&stabilizer);

    state.advance(Point::new(300.0, 10.0), &stabilizer);
    let start = state.press();
    assert_eq!(start, Point::new(300.0, 10.0));

    let next = state.advance(Point::new(300.0, 10.0), &stabilizer).unwrap();
    assert_eq!(next.from, start);
    assert_eq!(next.to, start);
}

#[test]
fn pointer_events_deserialize_from_tagged_json() {
    let events: Vec<PointerEvent> = serde_json::from_str(
        r#"[{"type":"move","x":1.5,"y":2},{"type":"down"},{"type":"up"},{"type":"leave"}]"#,
    )
    .unwrap();
    assert_eq!(
        events,
        vec![
            PointerEvent::Move { x: 1.5, y: 2.0 },
            PointerEvent::Down,
            PointerEvent::Up,
            PointerEvent::Leave,
        ]
    );
}
