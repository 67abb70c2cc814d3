//! Token types for the board language.
//!
//! Tokens are the output of the lexer and input to the parser. Numeric
//! tokens keep their literal text; decoding into numbers happens when a
//! declaration is turned into a gadget.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Token types for the board language.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Identifier like `squareBumper` or `Abs1`
    Name(String),
    /// Integer literal like `12` or `-3`
    Int(String),
    /// Float literal like `2.5` or `-0.5`
    Float(String),
    /// `=`
    Equals,
    /// End of a line
    Newline,
    /// Comment text (including `#`)
    Comment(String),
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns true if this token kind should be ignored during parsing.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Comment(_))
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Equals => "'='",
            Self::Newline => "end of line",
            Self::Comment(_) => "comment",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }
}
