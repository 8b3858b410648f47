//! # Renderable Documents
//!
//! A [`RenderableDocument`] is the last stop before the filesystem: rendered
//! bytes, the display title they were rendered under, and the template that
//! produced them. Its filename is derived, never stored:
//!
//! ```text
//! "0001: Use Rust" + markdown  ->  0001-use-rust.md
//! ```
//!
//! ## Validation gate
//!
//! The document validates itself when it is built and again right before it
//! is written. Each invariant fails with its own field label (`format`,
//! `title`, `content`, `identifier`, `extension`, `filename`), so callers and
//! tests can tell which one broke.
//!
//! ## Writing
//!
//! Writes fail closed: an existing file is never replaced unless the caller
//! asks for [`WriteMode::Overwrite`]. There is no temp-file-then-rename step; a
//! failed write surfaces its error and may leave a truncated file behind.

use crate::error::{AdrError, Result};
use crate::format::DocumentFormat;
use crate::slug::slugify;
use crate::template::TemplateDescriptor;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Fail with [`AdrError::FileExists`] if the target exists.
    #[default]
    CreateNew,
    /// Replace an existing file.
    Overwrite,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderableDocument {
    title: String,
    content: Vec<u8>,
    template: TemplateDescriptor,
}

impl RenderableDocument {
    /// Builds a document, returning it only if it is valid.
    pub fn new(
        template: TemplateDescriptor,
        title: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Result<Self> {
        template
            .validate()
            .map_err(|e| AdrError::InvalidDocument(Box::new(e)))?;

        let document = Self {
            title: title.into(),
            content: content.into(),
            template,
        };
        document
            .validate()
            .map_err(|e| AdrError::InvalidDocument(Box::new(e)))?;

        Ok(document)
    }

    pub fn validate(&self) -> Result<()> {
        self.template.validate()?;

        if self.title.is_empty() {
            return Err(AdrError::validation("title", "title is empty"));
        }
        if self.content.is_empty() {
            return Err(AdrError::validation("content", "content is empty"));
        }

        // Derived from title and format, both checked above.
        if self.identifier().is_empty() {
            return Err(AdrError::validation(
                "identifier",
                "can't create valid document identifier from title",
            ));
        }
        if self.extension().is_empty() {
            return Err(AdrError::validation(
                "extension",
                "can't create valid document extension",
            ));
        }
        if self.filename().is_empty() {
            return Err(AdrError::validation(
                "filename",
                "can't create valid document filename",
            ));
        }

        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content as text, lossily decoded.
    pub fn content_text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }

    pub fn template(&self) -> &TemplateDescriptor {
        &self.template
    }

    pub fn format(&self) -> &DocumentFormat {
        &self.template.format
    }

    /// The slugified title.
    pub fn identifier(&self) -> String {
        slugify(&self.title)
    }

    pub fn extension(&self) -> &'static str {
        self.template.format.extension()
    }

    pub fn filename(&self) -> String {
        format!("{}.{}", self.identifier(), self.extension())
    }

    /// Writes to `dir/<filename>`, refusing to replace an existing file.
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        self.write_with(dir, WriteMode::CreateNew)
    }

    pub fn write_with(&self, dir: &Path, mode: WriteMode) -> Result<PathBuf> {
        self.validate()
            .map_err(|e| AdrError::WriteRefused(Box::new(e)))?;

        if dir.as_os_str().is_empty() {
            return Err(AdrError::validation("directory", "directory path is empty"));
        }

        let path = dir.join(self.filename());

        let mut options = OpenOptions::new();
        options.write(true);
        match mode {
            WriteMode::CreateNew => options.create_new(true),
            WriteMode::Overwrite => options.create(true).truncate(true),
        };

        let mut file = options.open(&path).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => AdrError::FileExists(path.clone()),
            _ => AdrError::io(&path, e),
        })?;
        file.write_all(&self.content)
            .map_err(|e| AdrError::io(&path, e))?;

        Ok(path)
    }
}
