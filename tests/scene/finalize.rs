//! Integration tests for scene finalization

use std::num::NonZeroU32;

use pingboard_foundation::{DEFAULT_GRAVITY, DEFAULT_MU1, DEFAULT_MU2, ErrorKind, SimulationConfig};
use pingboard_scene::parse_board;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn omitted_globals_take_defaults() {
    let scene = parse_board("board name=Plain", SimulationConfig::default()).unwrap();
    assert_eq!(scene.name(), "Plain");
    assert!(approx(scene.gravity(), DEFAULT_GRAVITY));
    assert!(approx(scene.mu1(), DEFAULT_MU1));
    assert!(approx(scene.mu2(), DEFAULT_MU2));
    assert!(approx(scene.time_step(), 0.05));
}

#[test]
fn explicit_globals_override_exactly() {
    let scene = parse_board(
        "board name=Custom gravity=11.5 friction1=0.5 friction2=0",
        SimulationConfig::default(),
    )
    .unwrap();
    assert!(approx(scene.gravity(), 11.5));
    assert!(approx(scene.mu1(), 0.5));
    assert!(approx(scene.mu2(), 0.0));
}

#[test]
fn config_supplies_defaults_and_time_step() {
    let config = SimulationConfig::default()
        .with_frame_rate(NonZeroU32::new(40).unwrap())
        .with_default_gravity(9.0)
        .with_default_friction(0.1, 0.2);
    let scene = parse_board("board name=Cfg friction2=0.3", config).unwrap();
    assert!(approx(scene.time_step(), 0.025));
    assert!(approx(scene.gravity(), 9.0));
    assert!(approx(scene.mu1(), 0.1));
    assert!(approx(scene.mu2(), 0.3));
}

#[test]
fn missing_board_name() {
    let err = parse_board(
        "board gravity=10.0\nsquareBumper name=S x=0 y=0",
        SimulationConfig::default(),
    )
    .unwrap_err();
    match err.kind {
        ErrorKind::Declaration { field, line, .. } => {
            assert_eq!(field, "name");
            assert_eq!(line, 1);
        }
        other => panic!("expected declaration error, got {other:?}"),
    }
}

#[test]
fn errors_before_finalize_win() {
    let err = parse_board(
        "board gravity=10.0\nfire trigger=A action=B",
        SimulationConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnresolvedReference { .. }));
}
