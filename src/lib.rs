//! selkit: an immutable, fluent builder for CSS selector strings, plus the
//! small value types and JSON helpers that travel with it.

pub use crate::diagnostics::{ErrorKind, Field, Result, SelkitError};

pub mod cli;
pub mod diagnostics;
pub mod json;
pub mod selector;
pub mod shapes;
