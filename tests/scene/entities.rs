//! Integration tests for entity building and the name registry

use pingboard_foundation::{ErrorKind, SimulationConfig, Vect};
use pingboard_scene::{GadgetKind, GridPoint, Orientation, Scene, Side, parse_board};

fn build(source: &str) -> pingboard_foundation::Result<Scene> {
    parse_board(source, SimulationConfig::default())
}

fn declaration_field(source: &str) -> (String, u32) {
    match build(source).unwrap_err().kind {
        ErrorKind::Declaration { field, line, .. } => (field, line),
        other => panic!("expected declaration error, got {other:?}"),
    }
}

// =============================================================================
// Gadgets
// =============================================================================

#[test]
fn gadget_footprints() {
    let scene = build(
        "board name=Sizes
absorber name=Abs x=0 y=18 width=20 height=2
leftFlipper name=F x=4 y=4
squareBumper name=S x=7 y=7
",
    )
    .unwrap();

    let abs = scene.entity("Abs").unwrap().footprint();
    assert!(abs.contains(GridPoint::new(19, 19)));
    assert!(!abs.contains(GridPoint::new(20, 19)));

    let flipper = scene.entity("F").unwrap().footprint();
    assert_eq!((flipper.width, flipper.height), (2, 2));

    let square = scene.entity("S").unwrap().footprint();
    assert!(square.contains(GridPoint::new(7, 7)));
    assert!(!square.contains(GridPoint::new(8, 7)));
}

#[test]
fn orientation_defaults_to_zero() {
    let scene = build("board name=B\ntriangleBumper name=T x=1 y=1\nrightFlipper name=R x=3 y=3").unwrap();
    assert_eq!(
        scene.entity("T").unwrap().kind(),
        GadgetKind::TriangularBumper {
            orientation: Orientation::Deg0
        }
    );
    assert_eq!(
        scene.entity("R").unwrap().kind(),
        GadgetKind::Flipper {
            side: Side::Right,
            orientation: Orientation::Deg0
        }
    );
}

#[test]
fn entities_iterate_in_name_order() {
    let scene = build("board name=B\ncircleBumper name=Z x=0 y=0\ncircleBumper name=A x=1 y=0").unwrap();
    let names: Vec<_> = scene.entities().map(|e| e.name().to_string()).collect();
    assert_eq!(names, vec!["A", "Z"]);
}

#[test]
fn entity_display() {
    let scene = build("board name=B\nabsorber name=Abs x=0 y=19 width=20 height=1").unwrap();
    assert_eq!(
        scene.entity("Abs").unwrap().to_string(),
        "absorber Abs at (0, 19) size 20x1"
    );
}

// =============================================================================
// Balls
// =============================================================================

#[test]
fn balls_are_not_registered() {
    let scene = build(
        "board name=B
ball name=Ball1 x=2.0 y=2.0 xVelocity=0.0 yVelocity=-5.0
",
    )
    .unwrap();
    assert!(scene.entity("Ball1").is_none());
    assert_eq!(scene.balls().len(), 1);
    assert_eq!(scene.balls()[0].position(), Vect::new(2.0, 2.0));
    assert_eq!(scene.balls()[0].velocity(), Vect::new(0.0, -5.0));
}

#[test]
fn ball_floats_without_leading_digit() {
    let scene = build("board name=B\nball name=B x=.5 y=1.5 xVelocity=-.25 yVelocity=0").unwrap();
    assert_eq!(scene.balls()[0].position(), Vect::new(0.5, 1.5));
    assert_eq!(scene.balls()[0].velocity(), Vect::new(-0.25, 0.0));
}

#[test]
fn ball_names_may_repeat_and_shadow_gadgets() {
    let scene = build(
        "board name=B
circleBumper name=Same x=1 y=1
ball name=Same x=2.0 y=2.0 xVelocity=0.0 yVelocity=0.0
ball name=Same x=3.0 y=3.0 xVelocity=0.0 yVelocity=0.0
",
    )
    .unwrap();
    assert_eq!(scene.balls().len(), 2);
    assert_eq!(scene.registry().len(), 1);
}

// =============================================================================
// Duplicate Names
// =============================================================================

#[test]
fn duplicate_gadget_name_rejected() {
    let err = build(
        "board name=B
squareBumper name=A x=0 y=0
squareBumper name=A x=5 y=5
",
    )
    .unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::DuplicateName {
            name: "A".into(),
            line: 3,
            first_line: 2
        }
    );
}

#[test]
fn duplicate_across_kinds_rejected() {
    let err = build("board name=B\ncircleBumper name=X x=0 y=0\nleftFlipper name=X x=4 y=4").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateName { .. }));
}

// =============================================================================
// Invalid Values
// =============================================================================

#[test]
fn illegal_orientation() {
    let (field, line) = declaration_field("board name=B\ntriangleBumper name=T x=1 y=1 orientation=45");
    assert_eq!(field, "orientation");
    assert_eq!(line, 2);
}

#[test]
fn non_positive_absorber_size() {
    let (field, _) = declaration_field("board name=B\nabsorber name=A x=0 y=0 width=0 height=1");
    assert_eq!(field, "width");
    let (field, _) = declaration_field("board name=B\nabsorber name=A x=0 y=0 width=3 height=-1");
    assert_eq!(field, "height");
}

#[test]
fn coordinate_out_of_range() {
    let (field, line) = declaration_field("board name=B\n\nsquareBumper name=S x=0 y=4294967296");
    assert_eq!(field, "y");
    assert_eq!(line, 3);
}
