//! Unified, `miette`-based diagnostics for selkit.
//!
//! Every failure the library or the CLI can produce is a [`SelkitError`].
//! Builder errors are raised at the call that caused them, never at render
//! time. Each variant carries a stable diagnostic code so CLI output can be
//! matched in regression tests.

use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SelkitError>;

/// The singular fields of a compound selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Tag,
    Id,
    Attribute,
    PseudoElement,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Tag => "tag",
            Field::Id => "id",
            Field::Attribute => "attribute",
            Field::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-safe error classification that mirrors the [`SelkitError`] variants.
/// Lets tests match on the failure without destructuring payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DuplicateField,
    InvalidCombinator,
    Json,
    Io,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::DuplicateField => "DuplicateField",
            ErrorKind::InvalidCombinator => "InvalidCombinator",
            ErrorKind::Json => "Json",
            ErrorKind::Io => "Io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for all selkit failure modes.
#[derive(Debug, Error, Diagnostic)]
pub enum SelkitError {
    #[error("{field} is already set on this selector")]
    #[diagnostic(
        code(selkit::duplicate_field),
        help("tag, id, attribute and pseudo-element may each appear once per compound selector")
    )]
    DuplicateField { field: Field },

    #[error("invalid combinator {token:?}")]
    #[diagnostic(
        code(selkit::invalid_combinator),
        help("expected one of ' ', '+', '~', '>'")
    )]
    InvalidCombinator { token: String },

    #[error("JSON error: {source}")]
    #[diagnostic(code(selkit::json))]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("could not read {}", path.display())]
    #[diagnostic(code(selkit::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SelkitError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SelkitError::DuplicateField { .. } => ErrorKind::DuplicateField,
            SelkitError::InvalidCombinator { .. } => ErrorKind::InvalidCombinator,
            SelkitError::Json { .. } => ErrorKind::Json,
            SelkitError::Io { .. } => ErrorKind::Io,
        }
    }
}

impl From<serde_json::Error> for SelkitError {
    fn from(source: serde_json::Error) -> Self {
        SelkitError::Json { source }
    }
}

/// Renders an error as a `miette` report on stderr.
pub fn print_error(error: SelkitError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}
