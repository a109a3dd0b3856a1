// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword sets: validated (pattern, replacement) pairs.
//!
//! Each keyword's id is its insertion order. Duplicate patterns are allowed;
//! the matcher breaks ties toward the lower id.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Stable identifier of a keyword: its position in the keyword set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct KeywordId(u32);

impl KeywordId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for KeywordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A literal pattern with an optional replacement.
///
/// A keyword without a replacement is detect-only: substitution copies the
/// matched text through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    replacement: Option<String>,
}

impl Keyword {
    pub fn new(pattern: impl Into<String>, replacement: Option<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement,
        }
    }

    /// Detect-only keyword.
    pub fn detect(pattern: impl Into<String>) -> Self {
        Self::new(pattern, None)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> Option<&str> {
        self.replacement.as_deref()
    }

    pub fn into_parts(self) -> (String, Option<String>) {
        (self.pattern, self.replacement)
    }

    /// Display name: the replacement when configured, else the pattern.
    pub fn label(&self) -> &str {
        self.replacement.as_deref().unwrap_or(&self.pattern)
    }

    /// Parse a `PATTERN[=REPLACEMENT]` command-line argument.
    ///
    /// Splits on the first `=`, so patterns containing `=` must come from a
    /// config file instead.
    pub fn parse_arg(arg: &str) -> Result<Self> {
        let keyword = match arg.split_once('=') {
            Some((pattern, replacement)) => Self::new(pattern, Some(replacement.to_string())),
            None => Self::detect(arg),
        };
        if keyword.pattern.is_empty() {
            return Err(Error::Argument(format!("empty keyword pattern in '{arg}'")));
        }
        Ok(keyword)
    }
}

/// Ordered, validated collection of keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<Keyword>,
}

impl KeywordSet {
    /// Build a set from `(pattern, replacement)` entries.
    ///
    /// Fails with a validation error on the first empty pattern. An empty
    /// entry list is accepted.
    pub fn new<I, P>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, Option<String>)>,
        P: Into<String>,
    {
        Self::from_keywords(
            entries
                .into_iter()
                .map(|(pattern, replacement)| Keyword::new(pattern, replacement)),
        )
    }

    pub fn from_keywords(keywords: impl IntoIterator<Item = Keyword>) -> Result<Self> {
        let keywords: Vec<Keyword> = keywords.into_iter().collect();
        if keywords.len() > u32::MAX as usize {
            return Err(Error::Validation(format!(
                "too many keywords: {}",
                keywords.len()
            )));
        }
        if let Some(idx) = keywords.iter().position(|k| k.pattern.is_empty()) {
            return Err(Error::Validation(format!(
                "keyword {idx} has an empty pattern"
            )));
        }
        Ok(Self { keywords })
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn get(&self, id: KeywordId) -> Option<&Keyword> {
        self.keywords.get(id.index())
    }

    /// Iterate keywords with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (KeywordId, &Keyword)> {
        self.keywords
            .iter()
            .enumerate()
            .map(|(i, k)| (KeywordId(i as u32), k))
    }

    /// Total pattern volume in symbols.
    pub fn total_symbols(&self) -> usize {
        self.keywords.iter().map(|k| k.pattern.chars().count()).sum()
    }

    /// Reject patterns that could straddle a line boundary.
    pub fn check_single_line(&self) -> Result<()> {
        match self
            .iter()
            .find(|(_, k)| k.pattern.contains(['\n', '\r']))
        {
            Some((keyword, k)) => Err(Error::SpanOverflow {
                keyword,
                pattern: k.pattern.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "keyword_tests.rs"]
mod tests;
