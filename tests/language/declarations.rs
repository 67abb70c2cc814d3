//! Integration tests for declaration analysis

use pingboard_foundation::ErrorKind;
use pingboard_language::{Declaration, LiteralKind, parse};

fn syntax_line(source: &str) -> u32 {
    match parse(source).unwrap_err().kind {
        ErrorKind::Syntax { line, .. } => line,
        other => panic!("expected syntax error, got {other:?}"),
    }
}

// =============================================================================
// Productions
// =============================================================================

#[test]
fn every_production() {
    let file = parse(
        "board name=All gravity=20.0 friction1=0.02 friction2=0.03
squareBumper name=Sq x=0 y=2
circleBumper name=Ci x=4 y=3
triangleBumper name=Tri x=1 y=1 orientation=270
absorber name=Abs x=0 y=19 width=20 height=1
leftFlipper name=FL x=10 y=7 orientation=0
rightFlipper name=FR x=12 y=7 orientation=0
ball name=Ball x=1.25 y=1.25 xVelocity=0.0 yVelocity=-5.0
fire trigger=Sq action=Abs
",
    )
    .unwrap();

    assert_eq!(file.header.name.as_ref().unwrap().text, "All");
    assert_eq!(file.header.gravity.as_ref().unwrap().text, "20.0");
    let keywords: Vec<_> = file.declarations.iter().map(Declaration::keyword).collect();
    assert_eq!(
        keywords,
        vec![
            "squareBumper",
            "circleBumper",
            "triangleBumper",
            "absorber",
            "leftFlipper",
            "rightFlipper",
            "ball",
            "fire"
        ]
    );
    assert_eq!(file.declarations[7].span().line, 9);
}

#[test]
fn fields_in_any_order() {
    let file = parse("board name=B\nabsorber height=1 width=2 y=3 x=4 name=A").unwrap();
    let Declaration::Absorber(abs) = &file.declarations[0] else {
        panic!("expected absorber");
    };
    assert_eq!(abs.x.text, "4");
    assert_eq!(abs.height.text, "1");
}

#[test]
fn int_literal_accepted_for_float_field() {
    let file = parse("board name=B gravity=10\nball name=b x=1 y=2 xVelocity=0 yVelocity=-3").unwrap();
    assert_eq!(file.header.gravity.unwrap().kind, LiteralKind::Int);
    let Declaration::Ball(ball) = &file.declarations[0] else {
        panic!("expected ball");
    };
    assert_eq!(ball.y_velocity.text, "-3");
}

#[test]
fn orientation_is_optional() {
    let file = parse("board name=B\nleftFlipper name=F x=1 y=1").unwrap();
    let Declaration::LeftFlipper(flipper) = &file.declarations[0] else {
        panic!("expected flipper");
    };
    assert!(flipper.orientation.is_none());
}

#[test]
fn board_name_is_optional_in_grammar() {
    let file = parse("board gravity=5.0").unwrap();
    assert!(file.header.name.is_none());
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn empty_source_rejected() {
    assert!(matches!(
        parse("# nothing\n").unwrap_err().kind,
        ErrorKind::Syntax { .. }
    ));
}

#[test]
fn board_must_come_first() {
    assert_eq!(syntax_line("squareBumper name=A x=0 y=0\nboard name=B"), 1);
}

#[test]
fn board_only_once() {
    assert_eq!(syntax_line("board name=A\nboard name=B"), 2);
}

#[test]
fn unknown_keyword() {
    assert_eq!(syntax_line("board name=A\n\nportal name=P x=1 y=1"), 3);
}

#[test]
fn unknown_key() {
    assert_eq!(syntax_line("board name=A\nsquareBumper name=S x=0 y=0 color=red"), 2);
}

#[test]
fn repeated_key() {
    assert_eq!(syntax_line("board name=A\nsquareBumper name=S x=0 x=1 y=0"), 2);
}

#[test]
fn missing_required_key() {
    assert_eq!(syntax_line("board name=A\nabsorber name=Abs x=0 y=19 width=20"), 2);
}

#[test]
fn wrong_literal_class() {
    assert_eq!(syntax_line("board name=A\nsquareBumper name=S x=1.5 y=0"), 2);
    assert_eq!(syntax_line("board name=A\nfire trigger=3 action=S"), 2);
    assert_eq!(syntax_line("board name=A gravity=heavy"), 1);
}
