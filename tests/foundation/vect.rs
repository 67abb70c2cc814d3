//! Integration tests for Vect

use pingboard_foundation::Vect;

#[test]
fn components_and_display() {
    let v = Vect::new(1.25, -5.0);
    assert!((v.x - 1.25).abs() < f64::EPSILON);
    assert!((v.y + 5.0).abs() < f64::EPSILON);
    assert_eq!(format!("{v}"), "<1.25, -5>");
}

#[test]
fn finiteness() {
    assert!(Vect::new(0.0, -5.0).is_finite());
    assert!(!Vect::new(f64::NAN, 0.0).is_finite());
}
