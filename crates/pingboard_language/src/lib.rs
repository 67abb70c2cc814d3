//! Lexer, parser, and declaration productions for the Pingboard board language.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of board source
//! - [`Parser`] - Parsing tokens into [`Line`]s
//! - [`DeclarationAnalyzer`] - Matching lines against the board productions
//! - [`parse`] - The whole pipeline, producing a [`BoardFile`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod declaration;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;


pub use ast::{Field, Line, Literal, LiteralKind};
pub use declaration::{
    AbsorberDecl, BallDecl, BoardFile, BoardHeader, BumperDecl, Declaration, DeclarationAnalyzer,
    FireDecl, FlipperDecl, TriangleBumperDecl,
};
pub use lexer::Lexer;
pub use parser::{Parser, parse_lines};
pub use span::Span;
pub use token::{Token, TokenKind};

use pingboard_foundation::Result;

/// Parses board source into its header and declarations.
///
/// # Errors
/// Returns a syntax error if the source does not match the board grammar.
pub fn parse(source: &str) -> Result<BoardFile> {
    let lines = parse_lines(source)?;
    DeclarationAnalyzer::new(source).analyze_file(&lines)
}
