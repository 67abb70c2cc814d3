//! Parse tree for board source.
//!
//! A board file is a sequence of lines; each line is a keyword followed by
//! `key=value` fields. The tree keeps literal text and spans and says
//! nothing yet about which keys a keyword accepts.

use crate::span::Span;

/// The lexical class of a field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralKind {
    /// An identifier.
    Name,
    /// An integer literal.
    Int,
    /// A literal with a decimal point.
    Float,
}

impl LiteralKind {
    /// Returns a human-readable name for this literal class.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Int => "integer",
            Self::Float => "float",
        }
    }
}

/// A field value exactly as written.
#[derive(Clone, Debug, PartialEq)]
pub struct Literal {
    /// Lexical class.
    pub kind: LiteralKind,
    /// Source text of the literal.
    pub text: String,
    /// Source location.
    pub span: Span,
}

impl Literal {
    /// Creates a new literal.
    #[must_use]
    pub fn new(kind: LiteralKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Returns the 1-based line the literal appears on.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.span.line
    }
}

/// A `key=value` pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    /// The key, e.g. `orientation`.
    pub key: String,
    /// Span of the key.
    pub key_span: Span,
    /// The value.
    pub value: Literal,
}

/// One non-empty source line.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    /// The leading keyword, e.g. `squareBumper`.
    pub keyword: String,
    /// Span of the keyword.
    pub keyword_span: Span,
    /// Fields in source order.
    pub fields: Vec<Field>,
    /// Span of the whole line (keyword through last field).
    pub span: Span,
}

impl Line {
    /// Returns the field with the given key, if present.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }
}
