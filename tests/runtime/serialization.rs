//! Integration tests for scene serialization

use pingboard_foundation::{ErrorKind, SimulationConfig};
use pingboard_runtime::{from_bytes, load_from_file, save_to_file, to_bytes};
use pingboard_scene::{Scene, parse_board};

fn sample() -> Scene {
    parse_board(
        "board name=Shipped gravity=15.0 friction1=0.01
squareBumper name=Sq x=0 y=2
triangleBumper name=Tri x=1 y=1 orientation=90
leftFlipper name=FL x=10 y=7
rightFlipper name=FR x=12 y=7 orientation=270
absorber name=Abs x=0 y=19 width=20 height=1
fire trigger=Sq action=FL
fire trigger=Abs action=Abs
ball name=B1 x=1.25 y=1.25 xVelocity=0.0 yVelocity=-5.0
ball name=B2 x=5.5 y=3.0 xVelocity=2.5 yVelocity=0.0
",
        SimulationConfig::default(),
    )
    .unwrap()
}

#[test]
fn bytes_roundtrip_preserves_scene() {
    let scene = sample();
    let restored = from_bytes(&to_bytes(&scene).unwrap()).unwrap();
    assert_eq!(restored, scene);
    assert_eq!(restored.balls()[1].name(), "B2");
    assert!(restored.graph().has_edge("Sq", "FL"));
}

#[test]
fn file_roundtrip_preserves_scene() {
    let scene = sample();
    let path = std::env::temp_dir().join("pingboard_it_scene.msgpack");
    save_to_file(&scene, &path).unwrap();
    assert_eq!(load_from_file(&path).unwrap(), scene);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn truncated_bytes_rejected() {
    let bytes = to_bytes(&sample()).unwrap();
    let err = from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Serialization(_)));
}
