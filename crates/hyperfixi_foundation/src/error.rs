//! Error types for the hyperfixi pipeline.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result alias used across all hyperfixi crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for hyperfixi operations.
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

    /// Creates an unknown language error.
    #[must_use]
    pub fn unknown_language(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownLanguage(code.into()))
    }

    /// Creates an unknown command error.
    #[must_use]
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(name.into()))
    }

    /// Creates a "no strategy matched" error.
    #[must_use]
    pub fn no_match(input: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoMatch(input.into()))
    }

    /// Creates a missing required role error.
    #[must_use]
    pub fn missing_role(action: impl Into<String>, role: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingRole {
            action: action.into(),
            role: role.into(),
        })
    }

    /// Creates a parse error at the given position.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(ErrorKind::Parse {
            message: message.into(),
            line,
            column,
            context: String::new(),
        })
    }

    /// Creates an invalid AST error.
    #[must_use]
    pub fn invalid_ast(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidAst(message.into()))
    }

    /// Creates a code generation error.
    #[must_use]
    pub fn codegen(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Codegen(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(e.to_string()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// Tokenizer could not make sense of the input.
    #[error("tokenize error: {0}")]
    Tokenize(String),

    /// No parsing strategy accepted the input.
    #[error("no parser could interpret input: {0}")]
    NoMatch(String),

    /// A required semantic role was not present.
    #[error("command '{action}' is missing required role '{role}'")]
    MissingRole {
        /// Canonical action name.
        action: String,
        /// Name of the missing role.
        role: String,
    },

    /// Language code has no registered profile.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// Command has no registered schema.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Syntax error in explicit or expression syntax.
    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source text where the error occurred.
        context: String,
    },

    /// JSON interchange input could not be decoded.
    #[error("invalid JSON interchange form: {0}")]
    Json(String),

    /// AST violates a structural requirement.
    #[error("invalid AST: {0}")]
    InvalidAst(String),

    /// Code generation could not proceed.
    #[error("code generation failed: {0}")]
    Codegen(String),

    /// I/O failure at the host boundary.
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorContext {
    /// Source file or snippet label.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
    /// Pipeline stages the error passed through.
    pub stack: Vec<String>,
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

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Adds a stage frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
