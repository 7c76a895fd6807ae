//! # Error Module
//!
//! Typed failures for the licenser library. Every variant is terminal for an
//! invocation; the binary maps all of them to exit status 1.

use std::io;
use std::path::PathBuf;

/// Result alias used across the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while resolving a license and rewriting a target file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// Missing arguments, malformed options or help requested. Carries the
  /// parser's message when there is one.
  #[error("{}", .0.as_deref().unwrap_or("usage requested"))]
  Usage(Option<String>),

  /// The license identifier is not one of the supported identifiers.
  #[error("Unknown License: {0}")]
  UnknownLicense(String),

  /// The license text resource could not be read.
  #[error("License text unavailable at '{path}'")]
  ResourceUnavailable { path: PathBuf, source: io::Error },

  /// Any failure while creating the swap file, reading the target, writing or
  /// replacing.
  #[error("{context}")]
  Io { context: String, source: io::Error },
}

impl Error {
  pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
    Self::Io {
      context: context.into(),
      source,
    }
  }
}
