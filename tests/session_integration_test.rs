//! Integration tests driving a full session frame by frame


use jewelry_tryon::assets::Accessory;
use jewelry_tryon::landmarks::{Anchor, LandmarkFrame, Point2D};
use jewelry_tryon::session::TryOnSession;
use test_helpers::{drawn_pixels, frame_at, populate_default_assets, test_config};

#[test]
fn test_startup_loads_every_default_variant() {
    let dir = tempfile::tempdir().unwrap();
    populate_default_assets(dir.path());

    let session = TryOnSession::new(&test_config(dir.path())).unwrap();
    for category in Accessory::ALL {
        let asset = session.store().image(category);
        assert!(asset.is_some(), "Default {} image missing", category.name());
    }
}

#[test]
fn test_missing_default_leaves_category_empty() {
    let dir = tempfile::tempdir().unwrap();
    // Only the necklace default exists
    test_helpers::write_png(
        &Accessory::Necklace.default_source(dir.path()),
        10,
        10,
        [0, 255, 0, 255],
    );

    let mut session = TryOnSession::new(&test_config(dir.path())).unwrap();
    assert!(session.store().image(Accessory::Earring).is_none());

    // Earring is the default mode: with no earring image, a detected face
    // still produces an empty overlay
    session.on_frame(&frame_at(0.5, 0.5)).unwrap();
    assert_eq!(drawn_pixels(session.overlay()), 0);
}

#[test]
fn test_earring_draws_at_smoothed_ears() {
    let dir = tempfile::tempdir().unwrap();
    populate_default_assets(dir.path());

    let mut session = TryOnSession::new(&test_config(dir.path())).unwrap();
    session.on_frame(&frame_at(0.5, 0.5)).unwrap();

    // Both ear anchors sit at (320, 220) on a 640x480 surface; the two
    // 100x100 footprints at x-60 and x-20 overlap into a 140-column band
    assert_eq!(drawn_pixels(session.overlay()), 140 * 100);
}

#[test]
fn test_mode_switch_takes_effect_next_frame() {
    let dir = tempfile::tempdir().unwrap();
    populate_default_assets(dir.path());

    let mut session = TryOnSession::new(&test_config(dir.path())).unwrap();
    session.on_frame(&frame_at(0.5, 0.5)).unwrap();
    assert_eq!(drawn_pixels(session.overlay()), 140 * 100);

    session.select_mode(Accessory::Necklace);
    session.on_frame(&frame_at(0.5, 0.5)).unwrap();
    assert_eq!(
        drawn_pixels(session.overlay()),
        200 * 100,
        "Necklace footprint expected on the frame after the switch"
    );
}

#[test]
fn test_inactive_histories_keep_updating() {
    let dir = tempfile::tempdir().unwrap();
    populate_default_assets(dir.path());

    let mut session = TryOnSession::new(&test_config(dir.path())).unwrap();
    session.select_mode(Accessory::Necklace);

    // Ear anchors are unused by the necklace but tracked anyway
    for _ in 0..5 {
        session.on_frame(&frame_at(0.25, 0.25)).unwrap();
    }

    let left_ear = session.smoother().average(Anchor::LeftEar).unwrap();
    assert_eq!(left_ear, Point2D::new(160.0, 100.0));

    // Switching back needs no history warm-up
    session.select_mode(Accessory::Earring);
    session.on_frame(&frame_at(0.25, 0.25)).unwrap();
    assert!(drawn_pixels(session.overlay()) > 0);
}

#[test]
fn test_anchors_pin_across_detection_loss() {
    let dir = tempfile::tempdir().unwrap();
    populate_default_assets(dir.path());

    let mut session = TryOnSession::new(&test_config(dir.path())).unwrap();
    for _ in 0..5 {
        session.on_frame(&frame_at(0.5, 0.5)).unwrap();
    }
    let pinned = session.smoother().average(Anchor::Chin).unwrap();

    // Detector loses the face for a stretch of frames
    for _ in 0..10 {
        session.on_frame(&LandmarkFrame::empty()).unwrap();
        assert_eq!(session.smoother().average(Anchor::Chin), Some(pinned));
    }

    // Drawing continues at the pinned anchors too
    assert_eq!(drawn_pixels(session.overlay()), 140 * 100);
}

#[test]
fn test_no_average_before_first_detection() {
    let dir = tempfile::tempdir().unwrap();
    populate_default_assets(dir.path());

    let mut session = TryOnSession::new(&test_config(dir.path())).unwrap();
    for _ in 0..3 {
        session.on_frame(&LandmarkFrame::empty()).unwrap();
    }

    for anchor in Anchor::ALL {
        assert_eq!(session.smoother().average(anchor), None);
    }
    assert_eq!(drawn_pixels(session.overlay()), 0);
}

#[test]
fn test_bracelet_draws_without_any_detection() {
    let dir = tempfile::tempdir().unwrap();
    populate_default_assets(dir.path());

    let mut session = TryOnSession::new(&test_config(dir.path())).unwrap();
    session.select_mode(Accessory::Bracelet);
    session.on_frame(&LandmarkFrame::empty()).unwrap();

    // Two fixed 100x100 placements, no landmarks involved
    assert_eq!(drawn_pixels(session.overlay()), 2 * 100 * 100);
}

#[test]
fn test_smoothing_converges_on_moving_anchor() {
    let dir = tempfile::tempdir().unwrap();
    populate_default_assets(dir.path());

    let mut session = TryOnSession::new(&test_config(dir.path())).unwrap();
    for _ in 0..5 {
        session.on_frame(&frame_at(0.25, 0.5)).unwrap();
    }
    // Face jumps; the smoothed anchor lags behind the raw position
    session.on_frame(&frame_at(0.75, 0.5)).unwrap();

    let chin = session.smoother().average(Anchor::Chin).unwrap();
    assert!(chin.x > 160.0 && chin.x < 480.0, "Mean should lag between old and new positions");

    // After a full window of new samples the mean settles
    for _ in 0..4 {
        session.on_frame(&frame_at(0.75, 0.5)).unwrap();
    }
    let chin = session.smoother().average(Anchor::Chin).unwrap();
    assert_eq!(chin, Point2D::new(480.0, 250.0));
}
