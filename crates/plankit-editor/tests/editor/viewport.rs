use plankit_core::Point;
use plankit_editor::Viewport;

#[test]
fn test_zoom_stays_in_bounds() {
    let mut vp = Viewport::new(800.0, 600.0);
    for _ in 0..50 {
        vp.zoom_by(0.1);
    }
    assert_eq!(vp.zoom(), 3.0);

    for _ in 0..100 {
        vp.zoom_by(-0.1);
    }
    assert_eq!(vp.zoom(), 0.1);
}

#[test]
fn test_zoom_anchors_at_viewport_center() {
    let mut vp = Viewport::new(1000.0, 500.0);
    vp.set_pan(120.0, -60.0);
    let center_before = vp.center();
    let off_center = Point::new(center_before.x + 100.0, center_before.y);
    let off_center_before = vp.scene_to_screen(&off_center);

    vp.zoom_by(0.4);
    let center_after = vp.center();

    assert!((center_before.x - center_after.x).abs() < 1e-9);
    assert!((center_before.y - center_after.y).abs() < 1e-9);

    // A non-center point moves on screen while the center stays put.
    let off_center_after = vp.scene_to_screen(&off_center);
    assert_ne!(off_center_before, off_center_after);
}

#[test]
fn test_wheel_consumes_event() {
    let mut vp = Viewport::new(800.0, 600.0);
    // Both directions must report consumption so the host suppresses the
    // page scroll.
    assert!(vp.handle_wheel(53.0));
    assert!(vp.handle_wheel(-53.0));
}

#[test]
fn test_pointer_to_scene_accounts_for_zoom_and_pan() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_zoom(2.0);
    vp.set_pan(100.0, 50.0);
    let scene = vp.screen_to_scene(300.0, 250.0);
    assert_eq!(scene, Point::new(100.0, 100.0));
}

#[test]
fn test_resize_keeps_zoom() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_zoom(1.5);
    vp.resize(1024.0, 768.0);
    assert_eq!(vp.zoom(), 1.5);
    assert_eq!(vp.width(), 1024.0);
    assert_eq!(vp.height(), 768.0);
}
