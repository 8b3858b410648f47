use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// A field-labelled validation failure.
///
/// Every invariant the pipeline checks maps to a distinct `field`, so callers
/// can tell exactly which one broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed validation: {}", self.field, self.reason)
    }
}

impl std::error::Error for ValidationError {}

#[derive(Error, Debug)]
pub enum AdrError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("template {requested} not found")]
    TemplateNotFound { requested: String },

    #[error("refusing to render invalid template: {0}")]
    InvalidTemplate(#[source] Box<AdrError>),

    #[error("refusing to create invalid document: {0}")]
    InvalidDocument(#[source] Box<AdrError>),

    #[error("not writing, document validation failed: {0}")]
    WriteRefused(#[source] Box<AdrError>),

    #[error("error rendering template: {0}")]
    Render(#[from] minijinja::Error),

    #[error("error parsing sequence number from {filename}: {source}")]
    SequenceParse {
        filename: String,
        #[source]
        source: ParseIntError,
    },

    #[error("no ADR directory found in {}", root.display())]
    NoStoreDirectory { root: PathBuf },

    #[error("file {} already exists", .0.display())]
    FileExists(PathBuf),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl AdrError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AdrError::Validation(ValidationError::new(field, reason))
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AdrError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the innermost validation failure, looking through the
    /// wrapping variants.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            AdrError::Validation(v) => Some(v),
            AdrError::InvalidTemplate(inner)
            | AdrError::InvalidDocument(inner)
            | AdrError::WriteRefused(inner) => inner.validation_error(),
            _ => None,
        }
    }

    /// Shorthand for `validation_error().map(|v| v.field.as_str())`.
    pub fn field(&self) -> Option<&str> {
        self.validation_error().map(|v| v.field.as_str())
    }
}

pub type Result<T> = std::result::Result<T, AdrError>;
