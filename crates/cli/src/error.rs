// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::keyword::KeywordId;
use crate::registry::Handle;

/// Textsearch error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Keyword set or request failed validation (empty pattern, unknown mode)
    #[error("validation error: {0}")]
    Validation(String),

    /// Handle is unknown or was already freed
    #[error("invalid handle: {0}")]
    InvalidHandle(Handle),

    /// A keyword could match across a line boundary
    #[error("keyword {keyword} spans a line boundary: {pattern:?}")]
    SpanOverflow { keyword: KeywordId, pattern: String },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input exceeds maximum size limit.
    #[error("file too large: {} ({} bytes, max: {} bytes)", .path.display(), .size, .max_size)]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using textsearch Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed (and found something, for `match`)
    Success = 0,
    /// `match` ran but found no occurrences
    NoMatches = 1,
    /// Configuration, argument or keyword validation error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Validation(_)
            | Error::SpanOverflow { .. }
            | Error::Config { .. }
            | Error::Argument(_) => ExitCode::ConfigError,
            Error::FileTooLarge { .. } => ExitCode::ConfigError,
            Error::InvalidHandle(_) | Error::Io { .. } | Error::Internal(_) => {
                ExitCode::InternalError
            }
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
