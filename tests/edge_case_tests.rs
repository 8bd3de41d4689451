//! Edge case tests for anchor extraction, clipping, and surface resizing


use jewelry_tryon::assets::Accessory;
use jewelry_tryon::landmarks::{extract_anchors, LandmarkFrame, NormalizedLandmark};
use jewelry_tryon::session::TryOnSession;
use test_helpers::{drawn_pixels, face_at, frame_at, populate_default_assets, test_config};

#[test]
fn test_short_landmark_list_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    populate_default_assets(dir.path());

    let mut session = TryOnSession::new(&test_config(dir.path())).unwrap();
    let frame = LandmarkFrame::single_face(vec![NormalizedLandmark { x: 0.5, y: 0.5, z: 0.0 }; 10]);

    assert!(session.on_frame(&frame).is_err());
}

#[test]
fn test_anchor_near_edge_clips_without_panic() {
    let dir = tempfile::tempdir().unwrap();
    populate_default_assets(dir.path());

    let mut session = TryOnSession::new(&test_config(dir.path())).unwrap();

    // Anchors at the top-left corner push the earring footprints partly
    // off-surface
    session.on_frame(&frame_at(0.0, 0.0)).unwrap();
    let drawn = drawn_pixels(session.overlay());
    assert!(drawn > 0);
    assert!(drawn < 140 * 100, "Off-surface part of the footprint must be clipped");
}

#[test]
fn test_non_finite_landmarks_do_not_panic() {
    let dir = tempfile::tempdir().unwrap();
    populate_default_assets(dir.path());

    let mut session = TryOnSession::new(&test_config(dir.path())).unwrap();
    let frame = LandmarkFrame::single_face(face_at(f32::NAN, f32::INFINITY));

    session.on_frame(&frame).unwrap();
}

#[test]
fn test_normalized_extremes_scale_to_surface_corners() {
    let face = face_at(1.0, 1.0);
    let anchors = extract_anchors(&face, 640, 480).unwrap();

    assert_eq!(anchors.chin.x, 640.0);
    assert_eq!(anchors.chin.y, 490.0); // 480 plus the chin bias
}

#[test]
fn test_resize_surface_applies_to_later_frames() {
    let dir = tempfile::tempdir().unwrap();
    populate_default_assets(dir.path());

    let mut session = TryOnSession::new(&test_config(dir.path())).unwrap();
    session.resize_surface(1920, 1080);
    assert_eq!(session.overlay().dimensions(), (1920, 1080));

    session.select_mode(Accessory::Necklace);
    session.on_frame(&frame_at(0.5, 0.5)).unwrap();

    // Chin now lands at (960, 550) in the larger coordinate frame
    assert_eq!(drawn_pixels(session.overlay()), 200 * 100);
}

#[test]
fn test_catalog_enumerates_ten_variants() {
    let dir = tempfile::tempdir().unwrap();
    populate_default_assets(dir.path());

    let session = TryOnSession::new(&test_config(dir.path())).unwrap();
    for category in Accessory::ALL {
        let catalog = session.catalog(category);
        assert_eq!(catalog.len(), 10);
        assert!(catalog[0].ends_with(format!("{}s/{}1.png", category.name(), category.name())));
    }
}
