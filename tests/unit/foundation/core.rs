use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_rejects_reversed_bounds() {
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(2)).is_err());
    assert!(
        FrameRange::new(FrameIndex(3), FrameIndex(3))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn fps_maps_frames_to_milliseconds() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.frame_time_ms(FrameIndex(0)), 0.0);
    assert!((fps.frame_time_ms(FrameIndex(60)) - 2000.0).abs() < 1e-9);
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn frame_time_lands_exactly_on_whole_milliseconds() {
    assert_eq!(Fps::new(49, 1).unwrap().frame_time_ms(FrameIndex(98)), 2000.0);
    assert_eq!(Fps::new(98, 1).unwrap().frame_time_ms(FrameIndex(196)), 2000.0);
    assert_eq!(Fps::new(103, 1).unwrap().frame_time_ms(FrameIndex(206)), 2000.0);
    assert_eq!(Fps::new(107, 1).unwrap().frame_time_ms(FrameIndex(214)), 2000.0);
    assert_eq!(Fps::new(30000, 1001).unwrap().frame_time_ms(FrameIndex(30)), 1001.0);
}

#[test]
fn canvas_geometry_uses_shorter_side() {
    let c = Canvas::new(800, 600).unwrap();
    assert_eq!(c.center(), (400.0, 300.0));
    assert_eq!(c.max_radius(), 300.0);
    assert_eq!(c.pixel_count(), 480_000);
    assert!(Canvas::new(0, 10).is_err());
}

#[test]
fn polar_angle_is_normalized() {
    let c = Canvas::new(10, 10).unwrap();
    let (d, a) = c.polar(5, 5);
    assert_eq!(d, 0.0);
    assert_eq!(a, 0.0);

    // Straight "up" in image space (negative dy) wraps to 3π/2.
    let (d, a) = c.polar(5, 2);
    assert_eq!(d, 3.0);
    assert!((a - 1.5 * std::f64::consts::PI).abs() < 1e-12);
    assert!((0.0..TAU).contains(&a));
}
