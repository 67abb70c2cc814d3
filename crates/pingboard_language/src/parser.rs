//! Parser for board source.
//!
//! The parser converts a stream of tokens into [`Line`]s:
//!
//! ```text
//! file  := (line? NEWLINE)* line? EOF
//! line  := NAME field*
//! field := NAME '=' (NAME | INT | FLOAT)
//! ```
//!
//! Comments and blank lines are dropped. The first token that does not fit
//! aborts the parse.

use pingboard_foundation::{Error, Result};

use crate::ast::{Field, Line, Literal, LiteralKind};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Parser for board source text.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead).
    current: Token,
    /// Source text (for error messages).
    source: &'src str,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            source,
        }
    }

    /// Parses every line of the source.
    ///
    /// # Errors
    /// Returns a syntax error if the source does not match the line grammar.
    pub fn parse_all(&mut self) -> Result<Vec<Line>> {
        let mut lines = Vec::new();

        loop {
            self.skip_trivia();
            match &self.current.kind {
                TokenKind::Eof => break,
                TokenKind::Newline => self.advance(),
                _ => {
                    let line = self.parse_line()?;
                    log::trace!("parsed {} on line {}", line.keyword, line.span.line);
                    lines.push(line);
                }
            }
        }

        Ok(lines)
    }

    /// Parses one line: a keyword followed by fields, up to a newline or EOF.
    fn parse_line(&mut self) -> Result<Line> {
        let (keyword, keyword_span) = match &self.current.kind {
            TokenKind::Name(name) => (name.clone(), self.current.span),
            TokenKind::Error(msg) => return Err(self.error(msg)),
            other => {
                return Err(self.error(&format!(
                    "expected a declaration keyword, found {}",
                    other.name()
                )));
            }
        };
        self.advance();

        let mut fields = Vec::new();
        let mut end_span = keyword_span;
        loop {
            self.skip_trivia();
            match &self.current.kind {
                TokenKind::Newline | TokenKind::Eof => break,
                _ => {
                    let field = self.parse_field()?;
                    end_span = field.value.span;
                    fields.push(field);
                }
            }
        }

        Ok(Line {
            keyword,
            keyword_span,
            fields,
            span: keyword_span.to(end_span),
        })
    }

    /// Parses `key=value`.
    fn parse_field(&mut self) -> Result<Field> {
        let (key, key_span) = match &self.current.kind {
            TokenKind::Name(name) => (name.clone(), self.current.span),
            TokenKind::Error(msg) => return Err(self.error(msg)),
            other => {
                return Err(self.error(&format!("expected a field name, found {}", other.name())));
            }
        };
        self.advance();
        self.expect(&TokenKind::Equals)?;

        let span = self.current.span;
        let value = match &self.current.kind {
            TokenKind::Name(text) => Literal::new(LiteralKind::Name, text.as_str(), span),
            TokenKind::Int(text) => Literal::new(LiteralKind::Int, text.as_str(), span),
            TokenKind::Float(text) => Literal::new(LiteralKind::Float, text.as_str(), span),
            TokenKind::Error(msg) => return Err(self.error(msg)),
            other => {
                return Err(self.error(&format!(
                    "expected a value for '{key}', found {}",
                    other.name()
                )));
            }
        };
        self.advance();

        Ok(Field {
            key,
            key_span,
            value,
        })
    }

    /// Skips comment tokens.
    fn skip_trivia(&mut self) {
        while self.current.kind.is_trivia() {
            self.advance();
        }
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Expects the current token to be of a specific kind, then advances.
    fn expect(&mut self, expected: &TokenKind) -> Result<()> {
        let matches =
            std::mem::discriminant(&self.current.kind) == std::mem::discriminant(expected);

        if matches {
            self.advance();
            Ok(())
        } else if let TokenKind::Error(msg) = &self.current.kind {
            Err(self.error(msg))
        } else {
            Err(self.error(&format!(
                "expected {}, found {}",
                expected.name(),
                self.current.kind.name()
            )))
        }
    }

    /// Creates a syntax error at the current position.
    fn error(&self, message: &str) -> Error {
        self.error_at(self.current.span, message)
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

/// Parses source text into lines.
///
/// # Errors
/// Returns a syntax error if the source cannot be parsed.
pub fn parse_lines(source: &str) -> Result<Vec<Line>> {
    Parser::new(source).parse_all()
}
