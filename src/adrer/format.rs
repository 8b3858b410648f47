//! # Format Registry
//!
//! The closed set of output formats and their file extensions. Only markdown
//! is registered today.
//!
//! Two kinds of helpers live here:
//! - [`DocumentFormat::is_supported`] and [`DocumentFormat::extension`] are
//!   permissive. `extension` never returns an empty string and falls back to
//!   `txt` for unknown formats.
//! - [`DocumentFormat::validate`] is strict and is what document validation
//!   relies on before anything touches the disk.

use crate::error::{AdrError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extension used when a format is not registered.
pub const FALLBACK_EXTENSION: &str = "txt";

pub const MARKDOWN: &str = "markdown";

/// Registered formats and their filesystem extensions.
const SUPPORTED_FORMATS: &[(&str, &str)] = &[(MARKDOWN, "md")];

/// A format token such as `markdown`.
///
/// The token is kept as parsed, so a format read from a template name can be
/// carried around and rejected later by [`DocumentFormat::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentFormat(String);

impl DocumentFormat {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn markdown() -> Self {
        Self(MARKDOWN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_supported(&self) -> bool {
        lookup(&self.0).is_some()
    }

    pub fn extension(&self) -> &'static str {
        lookup(&self.0).unwrap_or(FALLBACK_EXTENSION)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.is_supported() {
            return Err(AdrError::validation("format", "unsupported format"));
        }
        Ok(())
    }

    /// All registered format tokens, in registration order.
    pub fn supported() -> impl Iterator<Item = DocumentFormat> {
        SUPPORTED_FORMATS
            .iter()
            .map(|(token, _)| DocumentFormat::new(*token))
    }
}

fn lookup(token: &str) -> Option<&'static str> {
    SUPPORTED_FORMATS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, ext)| *ext)
}

impl Default for DocumentFormat {
    fn default() -> Self {
        Self::markdown()
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DocumentFormat {
    type Err = AdrError;

    /// Strict parse: only registered formats are accepted.
    fn from_str(s: &str) -> Result<Self> {
        let format = DocumentFormat::new(s.trim().to_lowercase());
        format.validate()?;
        Ok(format)
    }
}
