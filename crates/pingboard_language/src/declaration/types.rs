//! Declaration type definitions.
//!
//! One struct per production of the board grammar. Field values stay as
//! [`Literal`]s; decoding them is the scene builder's job.

use crate::ast::Literal;
use crate::span::Span;

// =============================================================================
// Board Header
// =============================================================================

/// The `board` line.
///
/// ```text
/// board name=NAME [gravity=FLOAT] [friction1=FLOAT] [friction2=FLOAT]
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BoardHeader {
    /// Board name. Optional in the grammar; required when the scene is finalized.
    pub name: Option<Literal>,
    /// Gravity override.
    pub gravity: Option<Literal>,
    /// Linear friction override.
    pub friction1: Option<Literal>,
    /// Quadratic friction override.
    pub friction2: Option<Literal>,
    /// Source span of the line.
    pub span: Span,
}

// =============================================================================
// Gadgets
// =============================================================================

/// `squareBumper` and `circleBumper` lines.
///
/// ```text
/// squareBumper name=NAME x=INT y=INT
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BumperDecl {
    /// Gadget name.
    pub name: Literal,
    /// Column of the top-left cell.
    pub x: Literal,
    /// Row of the top-left cell.
    pub y: Literal,
    /// Source span of the line.
    pub span: Span,
}

/// `triangleBumper` line.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleBumperDecl {
    /// Gadget name.
    pub name: Literal,
    /// Column of the top-left cell.
    pub x: Literal,
    /// Row of the top-left cell.
    pub y: Literal,
    /// Rotation in degrees; 0 when omitted.
    pub orientation: Option<Literal>,
    /// Source span of the line.
    pub span: Span,
}

/// `absorber` line.
#[derive(Clone, Debug, PartialEq)]
pub struct AbsorberDecl {
    /// Gadget name.
    pub name: Literal,
    /// Column of the top-left cell.
    pub x: Literal,
    /// Row of the top-left cell.
    pub y: Literal,
    /// Width in cells.
    pub width: Literal,
    /// Height in cells.
    pub height: Literal,
    /// Source span of the line.
    pub span: Span,
}

/// `leftFlipper` and `rightFlipper` lines.
#[derive(Clone, Debug, PartialEq)]
pub struct FlipperDecl {
    /// Gadget name.
    pub name: Literal,
    /// Column of the top-left cell of the bounding box.
    pub x: Literal,
    /// Row of the top-left cell of the bounding box.
    pub y: Literal,
    /// Rotation in degrees; 0 when omitted.
    pub orientation: Option<Literal>,
    /// Source span of the line.
    pub span: Span,
}

// =============================================================================
// Balls and Wiring
// =============================================================================

/// `ball` line.
///
/// ```text
/// ball name=NAME x=FLOAT y=FLOAT xVelocity=FLOAT yVelocity=FLOAT
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BallDecl {
    /// Ball name.
    pub name: Literal,
    /// Horizontal position.
    pub x: Literal,
    /// Vertical position.
    pub y: Literal,
    /// Horizontal velocity.
    pub x_velocity: Literal,
    /// Vertical velocity.
    pub y_velocity: Literal,
    /// Source span of the line.
    pub span: Span,
}

/// `fire` line: when `trigger` is hit, `action` acts.
#[derive(Clone, Debug, PartialEq)]
pub struct FireDecl {
    /// Name of the triggering gadget.
    pub trigger: Literal,
    /// Name of the gadget that acts.
    pub action: Literal,
    /// Source span of the line.
    pub span: Span,
}
