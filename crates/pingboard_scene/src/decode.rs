//! Decoding literal text into typed field values.
//!
//! The grammar only guarantees the lexical class of a literal; range and
//! value checks happen here and fail with a declaration error naming the
//! field and line.

use pingboard_foundation::{Error, Result};
use pingboard_language::Literal;

use crate::entity::Orientation;

/// Decodes an integer field.
pub(crate) fn int(literal: &Literal, field: &str) -> Result<i32> {
    literal.text.parse::<i32>().map_err(|e| {
        Error::declaration(
            field,
            format!("'{}' is not a valid integer: {e}", literal.text),
            literal.line(),
        )
    })
}

/// Decodes a floating-point field; the value must be finite.
pub(crate) fn float(literal: &Literal, field: &str) -> Result<f64> {
    let value = literal.text.parse::<f64>().map_err(|e| {
        Error::declaration(
            field,
            format!("'{}' is not a valid number: {e}", literal.text),
            literal.line(),
        )
    })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::declaration(
            field,
            format!("'{}' is out of range", literal.text),
            literal.line(),
        ))
    }
}

/// Decodes an optional float field, falling back to `default`.
pub(crate) fn float_or(literal: Option<&Literal>, field: &str, default: f64) -> Result<f64> {
    literal.map_or(Ok(default), |l| float(l, field))
}

/// Decodes an optional `orientation` field; omitted means 0 degrees.
pub(crate) fn orientation(literal: Option<&Literal>) -> Result<Orientation> {
    let Some(literal) = literal else {
        return Ok(Orientation::default());
    };
    let degrees = int(literal, "orientation")?;
    Orientation::from_degrees(degrees).ok_or_else(|| {
        Error::declaration(
            "orientation",
            format!("{degrees} is not one of 0, 90, 180, 270"),
            literal.line(),
        )
    })
}

/// Decodes a width or height; must be at least 1.
pub(crate) fn dimension(literal: &Literal, field: &str) -> Result<u32> {
    let value = int(literal, field)?;
    u32::try_from(value)
        .ok()
        .filter(|v| *v >= 1)
        .ok_or_else(|| {
            Error::declaration(field, format!("{value} must be at least 1"), literal.line())
        })
}
