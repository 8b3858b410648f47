use crate::document::RenderableDocument;
use crate::error::{AdrError, Result};
use crate::slug::pad_value;
use crate::template::TemplateDescriptor;
use serde::{Deserialize, Serialize};

/// Width of the zero-padded sequence number.
pub const SEQUENCE_PAD_WIDTH: usize = 4;

/// An architectural decision record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub sequence: u64,
    pub title: String,
    pub context: String,
    pub decision: String,
    pub status: String,
    pub consequences: String,
}

/// What a template sees when a record is rendered.
#[derive(Serialize)]
struct RenderContext<'a> {
    sequence: String,
    sequenced_title: String,
    title: &'a str,
    context: &'a str,
    decision: &'a str,
    status: &'a str,
    consequences: &'a str,
}

impl Record {
    pub fn new(sequence: u64, title: impl Into<String>) -> Self {
        Self {
            sequence,
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_decision(mut self, decision: impl Into<String>) -> Self {
        self.decision = decision.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_consequences(mut self, consequences: impl Into<String>) -> Self {
        self.consequences = consequences.into();
        self
    }

    /// Sequence numbers are one-indexed: `0` displays as `0001`.
    pub fn padded_sequence(&self) -> String {
        pad_value(self.sequence.max(1), SEQUENCE_PAD_WIDTH)
    }

    /// `<padded sequence>: <title>`, e.g. `0001: Use Rust`.
    pub fn sequenced_title(&self) -> String {
        format!("{}: {}", self.padded_sequence(), self.title)
    }

    /// Renders the record through `template` into a write-ready document.
    pub fn render(&self, template: &TemplateDescriptor) -> Result<RenderableDocument> {
        template
            .validate()
            .map_err(|e| AdrError::InvalidTemplate(Box::new(e)))?;

        let sequenced_title = self.sequenced_title();
        let content = template.render(RenderContext {
            sequence: self.padded_sequence(),
            sequenced_title: sequenced_title.clone(),
            title: &self.title,
            context: &self.context,
            decision: &self.decision,
            status: &self.status,
            consequences: &self.consequences,
        })?;

        RenderableDocument::new(template.clone(), sequenced_title, content)
    }
}
