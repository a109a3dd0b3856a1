// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Size-gated input reading.
//!
//! Inputs up to 10MB are read whole; larger inputs are rejected. Text must be
//! valid UTF-8.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Size at which reads are logged (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// Maximum input size to read (10MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Where text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Map command-line operands to inputs; `-` or no operand means stdin.
    pub fn from_args(paths: &[PathBuf]) -> Vec<Input> {
        if paths.is_empty() {
            return vec![Input::Stdin];
        }
        paths
            .iter()
            .map(|p| {
                if p.as_os_str() == "-" {
                    Input::Stdin
                } else {
                    Input::File(p.clone())
                }
            })
            .collect()
    }

    fn path(&self) -> &Path {
        match self {
            Input::Stdin => Path::new("<stdin>"),
            Input::File(path) => path,
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().display())
    }
}

/// Size-gated reader.
#[derive(Debug, Clone, Copy)]
pub struct InputReader {
    max_size: u64,
}

impl Default for InputReader {
    fn default() -> Self {
        Self {
            max_size: MAX_FILE_SIZE,
        }
    }
}

impl InputReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom max size.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    /// Read an input as text.
    ///
    /// Returns `Err(FileTooLarge)` for inputs exceeding the max size.
    pub fn read(&self, input: &Input) -> Result<String> {
        match input {
            Input::Stdin => self.read_from(std::io::stdin().lock(), input.path()),
            Input::File(path) => {
                let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
                self.check_size(path, metadata.len())?;
                let file = File::open(path).map_err(|e| io_error(path, e))?;
                self.read_from(file, path)
            }
        }
    }

    /// Read from any source, enforcing the limit while reading.
    pub fn read_from<R: Read>(&self, source: R, path: &Path) -> Result<String> {
        let mut text = String::new();
        let read = source
            .take(self.max_size.saturating_add(1))
            .read_to_string(&mut text)
            .map_err(|e| io_error(path, e))?;
        self.check_size(path, read as u64)?;
        Ok(text)
    }

    fn check_size(&self, path: &Path, size: u64) -> Result<()> {
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }
        if size > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "Reading large file"
            );
        }
        Ok(())
    }
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
