use crate::commands::helpers::{display_path, validate_length};
use crate::commands::{AdrPaths, CmdMessage, CmdResult, OutputTarget};
use crate::config::AdrConfig;
use crate::document::WriteMode;
use crate::error::{AdrError, Result};
use crate::format::DocumentFormat;
use crate::record::Record;
use crate::scan::next_sequence_number;
use crate::template::TemplateCatalog;

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 128;

/// Field values collected by the UI, before a sequence number is assigned.
#[derive(Debug, Clone, Default)]
pub struct RecordDraft {
    pub title: String,
    pub context: String,
    pub decision: String,
    pub status: Option<String>,
    pub consequences: String,
}

#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// Overrides the configured format.
    pub format: Option<DocumentFormat>,
    pub mode: WriteMode,
}

pub fn run(
    paths: &AdrPaths,
    catalog: &TemplateCatalog,
    config: &AdrConfig,
    target: &OutputTarget,
    draft: RecordDraft,
    options: &CreateOptions,
) -> Result<CmdResult> {
    validate_length("title", &draft.title, TITLE_MIN_CHARS, TITLE_MAX_CHARS)?;

    let status = draft
        .status
        .unwrap_or_else(|| config.default_status.clone());
    if !config.is_known_status(&status) {
        return Err(AdrError::validation(
            "status",
            format!("must be one of: {}", config.statuses.join(", ")),
        ));
    }

    // Stdout output has no directory to scan; the record displays as 0001.
    let sequence = match target {
        OutputTarget::Directory(dir) => next_sequence_number(dir)?,
        OutputTarget::Stdout => 0,
    };

    let format = options.format.as_ref().unwrap_or(&config.format);
    let template = catalog.default_for(format)?;

    let record = Record::new(sequence, draft.title)
        .with_context(draft.context)
        .with_decision(draft.decision)
        .with_status(status)
        .with_consequences(draft.consequences);
    let document = record.render(template)?;

    let result = CmdResult::default()
        .with_sequence(record.sequence)
        .with_templates(vec![template.clone()]);

    match target {
        OutputTarget::Stdout => Ok(result.with_rendered(document.content_text())),
        OutputTarget::Directory(dir) => {
            let path = document.write_with(dir, options.mode)?;
            let mut result = result;
            result.add_message(CmdMessage::success(format!(
                "wrote ADR to {}",
                display_path(&path, &paths.cwd)
            )));
            Ok(result.with_written(vec![path]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, AdrPaths) {
        let root = TempDir::new().unwrap();
        let paths = AdrPaths {
            cwd: root.path().to_path_buf(),
            config_dir: root.path().join("config"),
        };
        (root, paths)
    }

    fn draft(title: &str) -> RecordDraft {
        RecordDraft {
            title: title.to_string(),
            context: "we need a language".into(),
            decision: "use rust".into(),
            status: Some("accepted".into()),
            consequences: "fewer segfaults".into(),
        }
    }

    #[test]
    fn writes_next_sequence_into_directory() {
        let (root, paths) = setup();
        let store = root.path().join("adr");
        fs::create_dir(&store).unwrap();
        fs::write(store.join("0001-first.md"), "# first").unwrap();

        let result = run(
            &paths,
            &TemplateCatalog::bundled(),
            &AdrConfig::default(),
            &OutputTarget::Directory(store.clone()),
            draft("Use Rust"),
            &CreateOptions::default(),
        )
        .unwrap();

        let expected = store.join("0002-use-rust.md");
        assert_eq!(result.written, vec![expected.clone()]);
        assert_eq!(result.sequence, Some(2));
        assert_eq!(result.templates[0].name, "default.markdown.tpl");
        assert_eq!(result.messages[0].content, "wrote ADR to ./adr/0002-use-rust.md");

        let content = fs::read_to_string(expected).unwrap();
        assert!(content.starts_with("# 0002: Use Rust"));
        assert!(content.contains("accepted"));
    }

    #[test]
    fn stdout_target_renders_without_writing() {
        let (root, paths) = setup();

        let result = run(
            &paths,
            &TemplateCatalog::bundled(),
            &AdrConfig::default(),
            &OutputTarget::Stdout,
            draft("Use Rust"),
            &CreateOptions::default(),
        )
        .unwrap();

        assert!(result.written.is_empty());
        assert_eq!(result.sequence, Some(0));
        assert!(result.rendered.unwrap().starts_with("# 0001: Use Rust"));
        assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_status_uses_configured_default() {
        let (_root, paths) = setup();
        let mut input = draft("Use Rust");
        input.status = None;

        let result = run(
            &paths,
            &TemplateCatalog::bundled(),
            &AdrConfig::default(),
            &OutputTarget::Stdout,
            input,
            &CreateOptions::default(),
        )
        .unwrap();

        assert!(result.rendered.unwrap().contains("proposed"));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let (_root, paths) = setup();
        let mut input = draft("Use Rust");
        input.status = Some("vibes".into());

        let err = run(
            &paths,
            &TemplateCatalog::bundled(),
            &AdrConfig::default(),
            &OutputTarget::Stdout,
            input,
            &CreateOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("status"));
    }

    #[test]
    fn short_title_is_rejected() {
        let (_root, paths) = setup();
        let err = run(
            &paths,
            &TemplateCatalog::bundled(),
            &AdrConfig::default(),
            &OutputTarget::Stdout,
            draft("ab"),
            &CreateOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("title"));
    }

    #[test]
    fn missing_template_is_reported() {
        let (_root, paths) = setup();
        let err = run(
            &paths,
            &TemplateCatalog::empty(),
            &AdrConfig::default(),
            &OutputTarget::Stdout,
            draft("Use Rust"),
            &CreateOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AdrError::TemplateNotFound { .. }));
    }

    #[test]
    fn same_title_gets_next_sequence() {
        let (root, paths) = setup();
        let store = root.path().join("adr");
        fs::create_dir(&store).unwrap();
        fs::write(store.join("0001-use-rust.md"), "stale").unwrap();
        let target = OutputTarget::Directory(store.clone());

        let result = run(
            &paths,
            &TemplateCatalog::bundled(),
            &AdrConfig::default(),
            &target,
            draft("Use Rust"),
            &CreateOptions::default(),
        )
        .unwrap();
        assert_eq!(result.written, vec![store.join("0002-use-rust.md")]);
    }
}
