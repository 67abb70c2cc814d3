//! Lexer for the board language.
//!
//! The lexer converts source text into a stream of tokens. Newlines are
//! significant (one declaration per line); other whitespace is skipped.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for board source text.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(
                TokenKind::Eof,
                Span::new(start, start, start_line, start_column),
            );
        };

        let kind = match c {
            '\n' => {
                self.advance();
                TokenKind::Newline
            }
            '=' => {
                self.advance();
                TokenKind::Equals
            }
            '#' => self.scan_comment(),
            '-' => {
                if self.starts_number(1) {
                    self.scan_number()
                } else {
                    self.advance();
                    TokenKind::Error("expected digit after '-'".into())
                }
            }
            '.' => {
                if self.starts_number(0) {
                    self.scan_number()
                } else {
                    self.advance();
                    TokenKind::Error("expected digit after '.'".into())
                }
            }
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_name_start(c) => self.scan_name(),
            c => {
                self.advance();
                TokenKind::Error(format!("unexpected character: {c}"))
            }
        };

        Token::new(
            kind,
            Span::new(start, self.position, start_line, start_column),
        )
    }

    /// Tokenizes all source and returns a vector of tokens.
    ///
    /// Comments are included in the output.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// True if a number starts `n` characters ahead: a digit, or `.` then a digit.
    fn starts_number(&self, n: usize) -> bool {
        match self.peek_char_n(n) {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => self.peek_char_n(n + 1).is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Skips whitespace other than newlines.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() && c != '\n' {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Scans a comment starting with `#`, up to but not including the newline.
    fn scan_comment(&mut self) -> TokenKind {
        let start = self.position;
        while let Some(c) = self.peek_char() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
        TokenKind::Comment(self.source[start..self.position].trim_end().to_string())
    }

    /// Scans `-?([0-9]+(\.[0-9]*)?|\.[0-9]+)`.
    fn scan_number(&mut self) -> TokenKind {
        let start = self.position;
        let mut has_dot = false;

        if self.peek_char() == Some('-') {
            self.advance();
        }

        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let text = self.source[start..self.position].to_string();
        if has_dot {
            TokenKind::Float(text)
        } else {
            TokenKind::Int(text)
        }
    }

    fn scan_name(&mut self) -> TokenKind {
        let start = self.position;
        while let Some(c) = self.peek_char() {
            if is_name_char(c) {
                self.advance();
            } else {
                break;
            }
        }
        TokenKind::Name(self.source[start..self.position].to_string())
    }
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit()
}
