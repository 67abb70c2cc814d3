//! Typed declarations recognized from parsed lines.
//!
//! The flow is: Source → Parser → [`Line`](crate::ast::Line)s →
//! `DeclarationAnalyzer` → [`BoardFile`] → scene builder.
//!
//! # Module Structure
//!
//! - `types` - One struct per production
//! - `analyzer` - The `DeclarationAnalyzer` implementation

mod analyzer;
mod types;


pub use analyzer::DeclarationAnalyzer;
pub use types::{
    AbsorberDecl, BallDecl, BoardHeader, BumperDecl, FireDecl, FlipperDecl, TriangleBumperDecl,
};

use crate::span::Span;

/// Any declaration after the `board` line.
#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    /// `squareBumper`
    SquareBumper(BumperDecl),
    /// `circleBumper`
    CircleBumper(BumperDecl),
    /// `triangleBumper`
    TriangleBumper(TriangleBumperDecl),
    /// `absorber`
    Absorber(AbsorberDecl),
    /// `leftFlipper`
    LeftFlipper(FlipperDecl),
    /// `rightFlipper`
    RightFlipper(FlipperDecl),
    /// `ball`
    Ball(BallDecl),
    /// `fire`
    Fire(FireDecl),
}

impl Declaration {
    /// Returns the keyword that introduces this declaration.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::SquareBumper(_) => "squareBumper",
            Self::CircleBumper(_) => "circleBumper",
            Self::TriangleBumper(_) => "triangleBumper",
            Self::Absorber(_) => "absorber",
            Self::LeftFlipper(_) => "leftFlipper",
            Self::RightFlipper(_) => "rightFlipper",
            Self::Ball(_) => "ball",
            Self::Fire(_) => "fire",
        }
    }

    /// Returns the source span of the declaration.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::SquareBumper(d) | Self::CircleBumper(d) => d.span,
            Self::TriangleBumper(d) => d.span,
            Self::Absorber(d) => d.span,
            Self::LeftFlipper(d) | Self::RightFlipper(d) => d.span,
            Self::Ball(d) => d.span,
            Self::Fire(d) => d.span,
        }
    }
}

/// A whole board file: the header plus every following declaration in order.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardFile {
    /// The `board` line.
    pub header: BoardHeader,
    /// Declarations in source order.
    pub declarations: Vec<Declaration>,
}
