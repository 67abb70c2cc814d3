//! Error types for the Pingboard system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every error is terminal for the parse that produced it.

use std::fmt;

use thiserror::Error;

/// The main error type for Pingboard operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a syntax error.
    #[must_use]
    pub fn syntax(message: impl Into<String>, line: u32, column: u32, context: String) -> Self {
        Self::new(ErrorKind::Syntax {
            message: message.into(),
            line,
            column,
            context,
        })
    }

    /// Creates a declaration error for an invalid field value.
    #[must_use]
    pub fn declaration(field: impl Into<String>, message: impl Into<String>, line: u32) -> Self {
        Self::new(ErrorKind::Declaration {
            field: field.into(),
            message: message.into(),
            line,
        })
    }

    /// Creates an unresolved reference error.
    #[must_use]
    pub fn unresolved_reference(name: impl Into<String>, line: u32) -> Self {
        Self::new(ErrorKind::UnresolvedReference {
            name: name.into(),
            line,
        })
    }

    /// Creates a duplicate name error.
    #[must_use]
    pub fn duplicate_name(name: impl Into<String>, line: u32, first_line: u32) -> Self {
        Self::new(ErrorKind::DuplicateName {
            name: name.into(),
            line,
            first_line,
        })
    }

    /// Returns the source line the error points at, if it has one.
    #[must_use]
    pub fn line(&self) -> Option<u32> {
        match &self.kind {
            ErrorKind::Syntax { line, .. }
            | ErrorKind::Declaration { line, .. }
            | ErrorKind::UnresolvedReference { line, .. }
            | ErrorKind::DuplicateName { line, .. } => Some(*line),
            ErrorKind::Io(_) | ErrorKind::Serialization(_) => None,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// Input does not match the board grammar.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        /// Description of the mismatch.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// A recognized declaration carries an invalid value.
    #[error("invalid {field} on line {line}: {message}")]
    Declaration {
        /// The offending field (e.g. `orientation`).
        field: String,
        /// Why the value was rejected.
        message: String,
        /// Line number (1-indexed).
        line: u32,
    },

    /// A wiring declaration names an entity that has not been declared yet.
    #[error("unresolved reference on line {line}: no gadget named {name:?} declared before this line")]
    UnresolvedReference {
        /// The missing name.
        name: String,
        /// Line of the wiring declaration.
        line: u32,
    },

    /// A declaration reuses a name that is already registered.
    #[error("duplicate name on line {line}: {name:?} was already declared on line {first_line}")]
    DuplicateName {
        /// The reused name.
        name: String,
        /// Line of the rejected declaration.
        line: u32,
        /// Line of the original declaration.
        first_line: u32,
    },

    /// Reading or decoding board text failed.
    #[error("io error: {0}")]
    Io(String),

    /// Encoding or decoding a scene failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file the board was read from.
    pub source: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        Ok(())
    }
}
