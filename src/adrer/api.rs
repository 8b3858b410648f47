//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It owns the pieces every command needs (paths, loaded config, the
//! template catalog) and resolves the `--dir` value into a target before
//! dispatching.
//!
//! Business logic lives in `commands/*.rs`. Nothing here prints.

use crate::commands;
use crate::config::AdrConfig;
use crate::error::Result;
use crate::template::TemplateCatalog;

pub struct AdrApi {
    paths: commands::AdrPaths,
    config: AdrConfig,
    catalog: TemplateCatalog,
    warnings: Vec<CmdMessage>,
}

impl AdrApi {
    pub fn new(paths: commands::AdrPaths, config: AdrConfig, catalog: TemplateCatalog) -> Self {
        Self {
            paths,
            config,
            catalog,
            warnings: Vec::new(),
        }
    }

    /// Loads config from `paths.config_dir` and builds the catalog it asks for.
    ///
    /// An unreadable `template_dir` does not fail the load: the bundled
    /// templates are used and the problem is kept in [`AdrApi::warnings`], so
    /// `config template-dir ""` can still undo it.
    pub fn load(paths: commands::AdrPaths) -> Result<Self> {
        let config = AdrConfig::load(&paths.config_dir)?;
        let mut warnings = Vec::new();
        let catalog = match &config.template_dir {
            Some(dir) => TemplateCatalog::bundled()
                .with_directory(dir)
                .unwrap_or_else(|e| {
                    warnings.push(CmdMessage::warning(format!(
                        "template-dir ignored, using bundled templates: {}",
                        e
                    )));
                    TemplateCatalog::bundled()
                }),
            None => TemplateCatalog::bundled(),
        };

        let mut api = Self::new(paths, config, catalog);
        api.warnings = warnings;
        Ok(api)
    }

    pub fn resolve_target(&self, dir: Option<&str>) -> Result<commands::OutputTarget> {
        commands::helpers::resolve_target(dir, &self.paths.cwd)
    }

    pub fn create_record(
        &self,
        dir: Option<&str>,
        draft: commands::create::RecordDraft,
        options: &commands::create::CreateOptions,
    ) -> Result<commands::CmdResult> {
        let target = self.resolve_target(dir)?;
        commands::create::run(
            &self.paths,
            &self.catalog,
            &self.config,
            &target,
            draft,
            options,
        )
    }

    pub fn list_records(&self, dir: Option<&str>) -> Result<commands::CmdResult> {
        let store = commands::helpers::resolve_store(dir, &self.paths.cwd)?;
        commands::list::run(&store)
    }

    pub fn view_record(&self, dir: Option<&str>, selector: &str) -> Result<commands::CmdResult> {
        let store = commands::helpers::resolve_store(dir, &self.paths.cwd)?;
        commands::view::run(&store, selector)
    }

    pub fn templates(&self) -> Result<commands::CmdResult> {
        commands::templates::run(&self.catalog)
    }

    pub fn init(&self, name: Option<&str>) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, name)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::AdrPaths {
        &self.paths
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &AdrConfig {
        &self.config
    }

    /// Problems found while loading that did not stop it.
    pub fn warnings(&self) -> &[CmdMessage] {
        &self.warnings
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::create::{CreateOptions, RecordDraft};
pub use commands::{AdrPaths, CmdMessage, CmdResult, ListedRecord, MessageLevel, OutputTarget};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn api(root: &TempDir) -> AdrApi {
        AdrApi::load(AdrPaths {
            cwd: root.path().to_path_buf(),
            config_dir: root.path().join("config"),
        })
        .unwrap()
    }

    fn draft(title: &str) -> RecordDraft {
        RecordDraft {
            title: title.into(),
            ..Default::default()
        }
    }

    #[test]
    fn create_uses_discovered_store() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("adr")).unwrap();
        let api = api(&root);

        api.create_record(None, draft("First one"), &CreateOptions::default())
            .unwrap();
        api.create_record(None, draft("Second one"), &CreateOptions::default())
            .unwrap();

        let listed = api.list_records(None).unwrap();
        let names: Vec<_> = listed
            .records
            .iter()
            .map(|r| r.file.filename.as_str())
            .collect();
        assert_eq!(names, vec!["0001-first-one.md", "0002-second-one.md"]);
    }

    #[test]
    fn create_without_store_goes_to_stdout() {
        let root = TempDir::new().unwrap();
        let result = api(&root)
            .create_record(None, draft("Loose"), &CreateOptions::default())
            .unwrap();
        assert!(result.written.is_empty());
        assert!(result.rendered.is_some());
    }

    #[test]
    fn view_needs_a_store() {
        let root = TempDir::new().unwrap();
        assert!(api(&root).view_record(None, "1").is_err());
    }

    #[test]
    fn configured_template_dir_is_loaded() {
        let root = TempDir::new().unwrap();
        let tpl_dir = root.path().join("tpl");
        fs::create_dir(&tpl_dir).unwrap();
        fs::write(tpl_dir.join("default.markdown.tpl"), "custom {{ title }}\n").unwrap();

        let mut config = AdrConfig::default();
        config.template_dir = Some(tpl_dir);
        config.save(root.path().join("config")).unwrap();

        let result = api(&root)
            .create_record(Some("-"), draft("Styled"), &CreateOptions::default())
            .unwrap();
        assert_eq!(result.rendered.as_deref(), Some("custom Styled\n"));
    }

    #[test]
    fn missing_template_dir_falls_back_and_can_be_cleared() {
        let root = TempDir::new().unwrap();
        let mut config = AdrConfig::default();
        config.template_dir = Some(root.path().join("gone"));
        config.save(root.path().join("config")).unwrap();

        let loaded = api(&root);
        assert_eq!(loaded.warnings().len(), 1);
        assert!(matches!(loaded.warnings()[0].level, MessageLevel::Warning));

        let result = loaded
            .create_record(Some("-"), draft("Still works"), &CreateOptions::default())
            .unwrap();
        assert!(result
            .rendered
            .unwrap()
            .starts_with("# 0001: Still works\n"));

        loaded
            .config(ConfigAction::Set("template-dir".into(), String::new()))
            .unwrap();
        let reloaded = api(&root);
        assert!(reloaded.warnings().is_empty());
        assert!(reloaded.settings().template_dir.is_none());
    }
}
