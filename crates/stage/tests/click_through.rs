//! Integration tests clicking on lighters through the camera.

use std::f64::consts::FRAC_PI_3;

use glam::{DMat4, DVec2, DVec3};

use lighter_audio::StreamId;
use lighter_core::AppConfig;
use lighter_scene::{PoseTarget, rotation_about_axis};
use lighter_stage::{HingeState, Stage};

const EPSILON: f64 = 1e-9;

fn approx_eq_mat4(a: DMat4, b: DMat4) -> bool {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .all(|(x, y)| (x - y).abs() < EPSILON)
}

/// Stage with every stream loaded.
fn stage() -> Stage {
    let mut stage = Stage::from_config(&AppConfig::default()).expect("default config builds");
    for i in 0..stage.audio().len() {
        stage
            .audio_mut()
            .insert_samples(StreamId(i), vec![0x49, 0x44, 0x33])
            .expect("stream exists");
    }
    stage
}

/// Screen position of the middle of a lighter's front face.
fn body_front(stage: &Stage, lighter_x: f64) -> DVec2 {
    stage
        .camera()
        .project(DVec3::new(lighter_x, 27.0, 13.0))
        .truncate()
}

#[test]
fn test_click_resolves_to_lighter_item() {
    let stage = stage();
    let hit = stage.pick(body_front(&stage, 0.0)).expect("something under the cursor");
    assert_eq!(hit.name, "lighter2Item");
}

#[test]
fn test_click_opens_and_closes() {
    let mut stage = stage();
    let ndc = body_front(&stage, 0.0);

    let outcome = stage.click(ndc).expect("toggled");
    assert_eq!(outcome.state, HingeState::Open);
    assert!(stage.toggles().is_open("lighter2Item"));
    assert_eq!(stage.audio().playing(), vec![StreamId(1)]);

    let expected = rotation_about_axis(DVec3::new(-22.0, 53.0, 0.0), DVec3::Z, FRAC_PI_3).unwrap();
    let pose = stage.graph().pose("lighter2Head").unwrap();
    assert!(approx_eq_mat4(pose, expected));

    // The body has not moved, so the same spot still hits the lighter.
    let outcome = stage.click(ndc).expect("toggled");
    assert_eq!(outcome.state, HingeState::Closed);
    assert!(stage.audio().playing().is_empty());

    let pose = stage.graph().pose("lighter2Head").unwrap();
    assert!(approx_eq_mat4(pose, DMat4::IDENTITY));
}

#[test]
fn test_opening_another_lighter_takes_over_audio() {
    let mut stage = stage();

    stage.click(body_front(&stage, -70.0)).expect("lighter1 toggled");
    stage.click(body_front(&stage, 70.0)).expect("lighter3 toggled");

    assert!(stage.toggles().is_open("lighter1Item"));
    assert!(stage.toggles().is_open("lighter3Item"));
    assert_eq!(stage.audio().playing(), vec![StreamId(2)]);

    // Closing the silent one leaves the other playing.
    stage.click(body_front(&stage, -70.0)).expect("lighter1 toggled");
    assert!(!stage.toggles().is_open("lighter1Item"));
    assert_eq!(stage.audio().playing(), vec![StreamId(2)]);
}

#[test]
fn test_click_on_ground_is_noop() {
    let mut stage = stage();
    let ndc = stage
        .camera()
        .project(DVec3::new(0.0, 0.0, 150.0))
        .truncate();

    assert_eq!(stage.pick(ndc).map(|h| h.name), Some("ground".to_string()));
    assert!(stage.click(ndc).is_none());
    assert!(stage.toggles().hinges().iter().all(|h| !h.is_open()));
}

#[test]
fn test_click_on_empty_space_is_noop() {
    let mut stage = stage();
    // Straight up from the top edge of the view, above the horizon.
    assert!(stage.click(DVec2::new(0.0, 0.99)).is_none());
}

#[test]
fn test_pending_audio_does_not_block_toggle() {
    let mut stage = Stage::from_config(&AppConfig::default()).unwrap();
    let outcome = stage.hit("lighter1Item").expect("toggled");
    assert_eq!(outcome.state, HingeState::Open);
    assert!(stage.audio().playing().is_empty());
}

#[test]
fn test_frame_tracks_open_head() {
    let mut stage = stage();
    stage.hit("lighter1Item");
    let frame = stage.frame();

    let head = stage.lighters()[0].nodes.head;
    let part = stage.graph().node(head).children()[0];
    let item = frame
        .items
        .iter()
        .find(|item| item.node == part)
        .expect("head part drawn");

    let pivot = DVec3::new(-93.0, 53.0, 0.0);
    let rotation = rotation_about_axis(pivot, DVec3::Z, FRAC_PI_3).unwrap();
    let expected = rotation * stage.graph().node(part).transform.local_matrix();
    assert!(approx_eq_mat4(item.world, expected));
}

#[test]
fn test_flame_above_closed_cap_is_picked_but_inert() {
    let mut stage = stage();
    // Above the cap top (y = 74) on the front flame plane of lighter2.
    let ndc = stage
        .camera()
        .project(DVec3::new(5.0, 78.0, 0.5))
        .truncate();

    assert_eq!(stage.pick(ndc).map(|h| h.name), Some("lighter2Flame".to_string()));
    assert!(stage.click(ndc).is_none());
    assert!(!stage.toggles().is_open("lighter2Item"));
    assert!(stage.audio().playing().is_empty());
}
