//! Declaration analyzer implementation.
//!
//! Matches each [`Line`] against the production its keyword names. A line
//! that does not fit (unknown keyword or key, repeated key, missing required
//! key, value of the wrong class) is a syntax error.

use pingboard_foundation::{Error, Result};

use crate::ast::{Line, Literal, LiteralKind};
use crate::span::Span;

use super::types::{
    AbsorberDecl, BallDecl, BoardHeader, BumperDecl, FireDecl, FlipperDecl, TriangleBumperDecl,
};
use super::{BoardFile, Declaration};

/// The lexical class a field accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FieldClass {
    Name,
    Int,
    /// Accepts both integer and float literals.
    Float,
}

impl FieldClass {
    fn accepts(self, kind: LiteralKind) -> bool {
        match self {
            Self::Name => kind == LiteralKind::Name,
            Self::Int => kind == LiteralKind::Int,
            Self::Float => matches!(kind, LiteralKind::Int | LiteralKind::Float),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Name => "a name",
            Self::Int => "an integer",
            Self::Float => "a number",
        }
    }
}

/// One key a production accepts.
struct FieldSpec {
    key: &'static str,
    class: FieldClass,
}

const fn field(key: &'static str, class: FieldClass) -> FieldSpec {
    FieldSpec { key, class }
}

const BOARD_FIELDS: &[FieldSpec] = &[
    field("name", FieldClass::Name),
    field("gravity", FieldClass::Float),
    field("friction1", FieldClass::Float),
    field("friction2", FieldClass::Float),
];

const BUMPER_FIELDS: &[FieldSpec] = &[
    field("name", FieldClass::Name),
    field("x", FieldClass::Int),
    field("y", FieldClass::Int),
];

const ORIENTED_FIELDS: &[FieldSpec] = &[
    field("name", FieldClass::Name),
    field("x", FieldClass::Int),
    field("y", FieldClass::Int),
    field("orientation", FieldClass::Int),
];

const ABSORBER_FIELDS: &[FieldSpec] = &[
    field("name", FieldClass::Name),
    field("x", FieldClass::Int),
    field("y", FieldClass::Int),
    field("width", FieldClass::Int),
    field("height", FieldClass::Int),
];

const BALL_FIELDS: &[FieldSpec] = &[
    field("name", FieldClass::Name),
    field("x", FieldClass::Float),
    field("y", FieldClass::Float),
    field("xVelocity", FieldClass::Float),
    field("yVelocity", FieldClass::Float),
];

const FIRE_FIELDS: &[FieldSpec] = &[
    field("trigger", FieldClass::Name),
    field("action", FieldClass::Name),
];

/// Analyzes parsed lines and extracts typed declarations.
pub struct DeclarationAnalyzer<'src> {
    /// Source text, for error context.
    source: &'src str,
}

impl<'src> DeclarationAnalyzer<'src> {
    /// Creates an analyzer for lines parsed from `source`.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self { source }
    }

    /// Analyzes a whole file. The first line must be the `board` header and no
    /// other line may be.
    ///
    /// # Errors
    /// Returns a syntax error for the first line that does not fit the grammar.
    pub fn analyze_file(&self, lines: &[Line]) -> Result<BoardFile> {
        let Some((first, rest)) = lines.split_first() else {
            let end = Span::new(self.source.len(), self.source.len(), 1, 1);
            return Err(self.error_at(end, "missing board declaration"));
        };

        if first.keyword != "board" {
            return Err(self.error_at(
                first.keyword_span,
                &format!(
                    "expected the board declaration first, found '{}'",
                    first.keyword
                ),
            ));
        }
        let header = self.analyze_header(first)?;

        let declarations = rest
            .iter()
            .map(|line| self.analyze(line))
            .collect::<Result<Vec<_>>>()?;

        Ok(BoardFile {
            header,
            declarations,
        })
    }

    /// Analyzes the `board` line.
    ///
    /// # Errors
    /// Returns a syntax error if the line is not a well-formed board header.
    pub fn analyze_header(&self, line: &Line) -> Result<BoardHeader> {
        if line.keyword != "board" {
            return Err(self.error_at(line.keyword_span, "expected 'board'"));
        }
        self.check_fields(line, BOARD_FIELDS)?;

        Ok(BoardHeader {
            name: optional(line, "name"),
            gravity: optional(line, "gravity"),
            friction1: optional(line, "friction1"),
            friction2: optional(line, "friction2"),
            span: line.span,
        })
    }

    /// Analyzes any line after the header.
    ///
    /// # Errors
    /// Returns a syntax error if the keyword is unknown or the line does not
    /// fit its production.
    pub fn analyze(&self, line: &Line) -> Result<Declaration> {
        match line.keyword.as_str() {
            "squareBumper" => Ok(Declaration::SquareBumper(self.analyze_bumper(line)?)),
            "circleBumper" => Ok(Declaration::CircleBumper(self.analyze_bumper(line)?)),
            "triangleBumper" => {
                self.check_fields(line, ORIENTED_FIELDS)?;
                Ok(Declaration::TriangleBumper(TriangleBumperDecl {
                    name: self.required(line, "name")?,
                    x: self.required(line, "x")?,
                    y: self.required(line, "y")?,
                    orientation: optional(line, "orientation"),
                    span: line.span,
                }))
            }
            "absorber" => {
                self.check_fields(line, ABSORBER_FIELDS)?;
                Ok(Declaration::Absorber(AbsorberDecl {
                    name: self.required(line, "name")?,
                    x: self.required(line, "x")?,
                    y: self.required(line, "y")?,
                    width: self.required(line, "width")?,
                    height: self.required(line, "height")?,
                    span: line.span,
                }))
            }
            "leftFlipper" => Ok(Declaration::LeftFlipper(self.analyze_flipper(line)?)),
            "rightFlipper" => Ok(Declaration::RightFlipper(self.analyze_flipper(line)?)),
            "ball" => {
                self.check_fields(line, BALL_FIELDS)?;
                Ok(Declaration::Ball(BallDecl {
                    name: self.required(line, "name")?,
                    x: self.required(line, "x")?,
                    y: self.required(line, "y")?,
                    x_velocity: self.required(line, "xVelocity")?,
                    y_velocity: self.required(line, "yVelocity")?,
                    span: line.span,
                }))
            }
            "fire" => {
                self.check_fields(line, FIRE_FIELDS)?;
                Ok(Declaration::Fire(FireDecl {
                    trigger: self.required(line, "trigger")?,
                    action: self.required(line, "action")?,
                    span: line.span,
                }))
            }
            "board" => Err(self.error_at(
                line.keyword_span,
                "the board declaration must appear once, on the first line",
            )),
            other => Err(self.error_at(
                line.keyword_span,
                &format!("unknown declaration '{other}'"),
            )),
        }
    }

    fn analyze_bumper(&self, line: &Line) -> Result<BumperDecl> {
        self.check_fields(line, BUMPER_FIELDS)?;
        Ok(BumperDecl {
            name: self.required(line, "name")?,
            x: self.required(line, "x")?,
            y: self.required(line, "y")?,
            span: line.span,
        })
    }

    fn analyze_flipper(&self, line: &Line) -> Result<FlipperDecl> {
        self.check_fields(line, ORIENTED_FIELDS)?;
        Ok(FlipperDecl {
            name: self.required(line, "name")?,
            x: self.required(line, "x")?,
            y: self.required(line, "y")?,
            orientation: optional(line, "orientation"),
            span: line.span,
        })
    }

    /// Rejects unknown keys, repeated keys, and values of the wrong class.
    fn check_fields(&self, line: &Line, specs: &[FieldSpec]) -> Result<()> {
        for (i, f) in line.fields.iter().enumerate() {
            let Some(spec) = specs.iter().find(|s| s.key == f.key) else {
                return Err(self.error_at(
                    f.key_span,
                    &format!("'{}' does not accept a '{}' field", line.keyword, f.key),
                ));
            };
            if line.fields[..i].iter().any(|prev| prev.key == f.key) {
                return Err(self.error_at(f.key_span, &format!("'{}' given more than once", f.key)));
            }
            if !spec.class.accepts(f.value.kind) {
                return Err(self.error_at(
                    f.value.span,
                    &format!(
                        "'{}' expects {}, found {} '{}'",
                        f.key,
                        spec.class.name(),
                        f.value.kind.name(),
                        f.value.text
                    ),
                ));
            }
        }
        Ok(())
    }

    fn required(&self, line: &Line, key: &str) -> Result<Literal> {
        optional(line, key).ok_or_else(|| {
            self.error_at(
                line.keyword_span,
                &format!("'{}' requires a '{key}' field", line.keyword),
            )
        })
    }

    fn error_at(&self, span: Span, message: &str) -> Error {
        Error::syntax(
            message,
            span.line,
            span.column,
            span.line_text(self.source).to_string(),
        )
    }
}

fn optional(line: &Line, key: &str) -> Option<Literal> {
    line.field(key).map(|f| f.value.clone())
}
