use super::*;
use std::f64::consts::PI;

fn geometry() -> WaveGeometry {
    let canvas = Canvas::new(800, 800).unwrap();
    WaveGeometry::new(canvas, 0.4, WaveParams::new(2000.0, 3000.0, 3).unwrap())
}

fn ring() -> Ring {
    Ring {
        start_ms: 0.0,
        start_color: Rgb8::new(200, 100, 0),
        end_color: Rgb8::new(0, 100, 200),
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn geometry_spans_center_zone_to_twice_max_radius() {
    let g = geometry();
    assert_eq!(g.main_circle_radius, 160.0);
    assert_eq!(g.current_radius(0.0), 160.0);
    assert_eq!(g.current_radius(1.0), 800.0);
    assert!(approx(g.thickness(), 64.0));
}

#[test]
fn wave_params_validation() {
    assert!(WaveParams::new(0.0, 3000.0, 3).is_err());
    assert!(WaveParams::new(2000.0, -1.0, 3).is_err());
    assert!(WaveParams::new(2000.0, f64::NAN, 3).is_err());
    let err = WaveParams::new(2000.0, 3000.0, 0).unwrap_err();
    assert!(matches!(err, TurrellError::InvalidConfig(_)));
}

#[test]
fn none_outside_the_band() {
    let g = geometry();
    let r = ring();
    // phase 0.5: band is [416, 480]
    assert!(g.ring_color_at(&r, 480.001, 0.3, 1500.0).is_none());
    assert!(g.ring_color_at(&r, 415.999, 0.3, 1500.0).is_none());
    assert!(g.ring_color_at(&r, 0.0, 0.3, 1500.0).is_none());
    assert!(g.ring_color_at(&r, 448.0, 0.3, 1500.0).is_some());
}

#[test]
fn none_outside_the_lifetime() {
    let g = geometry();
    let r = ring();
    assert!(g.ring_color_at(&r, 150.0, 0.3, -1.0).is_none());
    assert!(g.ring_color_at(&r, 790.0, 0.3, 3000.5).is_none());
    assert!(g.ring_color_at(&r, 790.0, 0.3, 3000.0).is_some());
}

#[test]
fn band_center_at_brightest_lobe_is_full_color() {
    let g = geometry();
    let c = g.ring_color_at(&ring(), 448.0, PI / 6.0, 1500.0).unwrap();
    assert!(approx(c.r, 100.0), "{c:?}");
    assert!(approx(c.g, 100.0), "{c:?}");
    assert!(approx(c.b, 100.0), "{c:?}");
}

#[test]
fn band_edges_fade_to_black() {
    let g = geometry();
    let r = ring();
    for dist in [416.0, 480.0] {
        let c = g.ring_color_at(&r, dist, PI / 6.0, 1500.0).unwrap();
        assert!(approx(c.r, 0.0) && approx(c.g, 0.0) && approx(c.b, 0.0), "{c:?}");
    }

    let quarter = g.ring_color_at(&r, 432.0, PI / 6.0, 1500.0).unwrap();
    assert!(approx(quarter.g, 50.0), "{quarter:?}");
}

#[test]
fn color_drifts_from_start_to_end() {
    let g = geometry();
    let r = ring();
    let angle = PI / 6.0;
    let born = g
        .ring_color_at(&r, g.current_radius(0.0) - 32.0, angle, 0.0)
        .unwrap();
    assert!(approx(born.r, 200.0) && approx(born.b, 0.0), "{born:?}");

    let dying = g
        .ring_color_at(&r, g.current_radius(1.0) - 32.0, angle, 3000.0)
        .unwrap();
    assert!(approx(dying.r, 0.0) && approx(dying.b, 200.0), "{dying:?}");
}

#[test]
fn lobes_are_rotationally_symmetric() {
    let at0 = lobe_intensity(0.0, 3);
    assert!(approx(at0, lobe_intensity(2.0 * PI / 3.0, 3)));
    assert!(approx(at0, lobe_intensity(4.0 * PI / 3.0, 3)));
    assert!(approx(lobe_intensity(PI / 6.0, 3), 1.0));
    assert!(approx(lobe_intensity(PI / 2.0, 3), 0.0));
}
