use crate::config::AdrConfig;
use crate::scan::RecordFile;
use crate::template::TemplateDescriptor;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod helpers;
pub mod init;
pub mod list;
pub mod templates;
pub mod view;

/// Locations the commands work relative to.
#[derive(Debug, Clone)]
pub struct AdrPaths {
    /// Root for store discovery and relative `--dir` values.
    pub cwd: PathBuf,
    /// Where `config.json` lives.
    pub config_dir: PathBuf,
}

/// Where a newly rendered record goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    Directory(PathBuf),
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A record file together with its display title.
#[derive(Debug, Clone)]
pub struct ListedRecord {
    pub file: RecordFile,
    pub title: Option<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub written: Vec<PathBuf>,
    /// Sequence number given to a newly created record.
    pub sequence: Option<u64>,
    /// Document text destined for stdout.
    pub rendered: Option<String>,
    pub records: Vec<ListedRecord>,
    pub templates: Vec<TemplateDescriptor>,
    pub config: Option<AdrConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_written(mut self, paths: Vec<PathBuf>) -> Self {
        self.written = paths;
        self
    }

    pub fn with_sequence(mut self, sequence: u64) -> Self {
        self.sequence = Some(sequence);
        self
    }

    pub fn with_rendered(mut self, rendered: String) -> Self {
        self.rendered = Some(rendered);
        self
    }

    pub fn with_records(mut self, records: Vec<ListedRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn with_templates(mut self, templates: Vec<TemplateDescriptor>) -> Self {
        self.templates = templates;
        self
    }

    pub fn with_config(mut self, config: AdrConfig) -> Self {
        self.config = Some(config);
        self
    }
}
