//! # Template Catalog
//!
//! Templates are named after the `{id}.{format}.tpl` convention, for example
//! `default.markdown.tpl`. The catalog parses each resource once, when it is
//! built, and from then on rendering needs nothing but the parsed
//! [`TemplateDescriptor`]s.
//!
//! ## Skipping, not failing
//!
//! A resource that does not follow the naming convention, cannot be read or
//! fails [`TemplateDescriptor::validate`] is left out of the catalog and
//! counted in [`TemplateCatalog::skipped`]. Building a catalog never fails
//! because of one bad resource. Asking for a template that is not there
//! ([`TemplateCatalog::default_for`]) is a hard error.
//!
//! ## Sources
//!
//! - Bundled templates are compiled into the binary.
//! - [`TemplateCatalog::with_directory`] layers a user directory on top. A user
//!   file with the same name replaces the bundled one.
//!
//! The catalog is an ordinary value: build it once and pass it by reference.

use crate::error::{AdrError, Result};
use crate::format::DocumentFormat;
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const TEMPLATE_SUFFIX: &str = "tpl";
pub const DEFAULT_TEMPLATE_ID: &str = "default";

const BUNDLED_TEMPLATES: &[(&str, &str)] = &[(
    "default.markdown.tpl",
    include_str!("templates/default.markdown.tpl"),
)];

/// A parsed, format-tagged template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    /// First segment of the name, e.g. `default`.
    pub id: String,
    /// Second segment of the name.
    pub format: DocumentFormat,
    /// The full resource name, e.g. `default.markdown.tpl`.
    pub name: String,
    pub content: String,
}

impl TemplateDescriptor {
    /// Parses `name` by the `{id}.{format}.tpl` convention and attaches `content`.
    ///
    /// Returns `None` for anything that would not be a usable catalog entry.
    pub fn parse(name: &str, content: Option<String>) -> Option<Self> {
        if name.contains('/') || name.contains('\\') {
            return None;
        }

        let parts: Vec<&str> = name.split('.').collect();
        if parts.len() != 3 || parts[2] != TEMPLATE_SUFFIX {
            return None;
        }

        let descriptor = TemplateDescriptor {
            id: parts[0].to_string(),
            format: DocumentFormat::new(parts[1]),
            name: name.to_string(),
            content: content?,
        };

        descriptor.validate().ok()?;
        Some(descriptor)
    }

    pub fn validate(&self) -> Result<()> {
        self.format.validate()?;

        if self.id.is_empty() {
            return Err(AdrError::validation("template.id", "empty template id"));
        }
        if self.name.is_empty() {
            return Err(AdrError::validation("template.name", "empty name"));
        }
        if self.content.is_empty() {
            return Err(AdrError::validation("template.content", "empty content"));
        }

        Ok(())
    }

    /// Renders the template against `context`.
    ///
    /// Undefined variables are errors, so a template that references a field
    /// the context does not carry fails instead of rendering blanks.
    pub fn render<S: Serialize>(&self, context: S) -> Result<String> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.add_template(&self.name, &self.content)?;

        let rendered = env.get_template(&self.name)?.render(context)?;
        Ok(rendered)
    }
}

/// Resource name of the default template for `format`.
pub fn default_template_name(format: &DocumentFormat) -> String {
    [DEFAULT_TEMPLATE_ID, format.as_str(), TEMPLATE_SUFFIX].join(".")
}

#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: BTreeMap<String, TemplateDescriptor>,
    skipped: usize,
}

impl TemplateCatalog {
    /// A catalog with no templates at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The templates compiled into the crate.
    pub fn bundled() -> Self {
        Self::from_resources(
            BUNDLED_TEMPLATES
                .iter()
                .map(|(name, content)| (name.to_string(), Some(content.to_string()))),
        )
    }

    /// Builds a catalog from `(name, content)` pairs. `None` content stands
    /// for a resource that could not be read.
    pub fn from_resources<I>(resources: I) -> Self
    where
        I: IntoIterator<Item = (String, Option<String>)>,
    {
        let mut catalog = Self::empty();
        for (name, content) in resources {
            catalog.insert_resource(&name, content);
        }
        catalog
    }

    /// Layers the `*.tpl` files of `dir` over this catalog.
    ///
    /// Subdirectories and malformed files are skipped. Failing to read `dir`
    /// itself is an error, since the caller asked for it explicitly.
    pub fn with_directory(mut self, dir: &Path) -> Result<Self> {
        let entries = fs::read_dir(dir).map_err(|e| AdrError::io(dir, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| AdrError::io(dir, e))?;
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                self.skipped += 1;
                continue;
            }

            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                self.skipped += 1;
                continue;
            };

            let content = fs::read_to_string(entry.path()).ok();
            self.insert_resource(&name, content);
        }

        Ok(self)
    }

    fn insert_resource(&mut self, name: &str, content: Option<String>) {
        match TemplateDescriptor::parse(name, content) {
            Some(descriptor) => {
                self.templates.insert(descriptor.name.clone(), descriptor);
            }
            None => self.skipped += 1,
        }
    }

    /// All usable templates, keyed by resource name.
    pub fn list_templates(&self) -> &BTreeMap<String, TemplateDescriptor> {
        &self.templates
    }

    pub fn get(&self, name: &str) -> Option<&TemplateDescriptor> {
        self.templates.get(name)
    }

    /// Looks up the template named exactly `default.<format>.tpl`.
    pub fn default_for(&self, format: &DocumentFormat) -> Result<&TemplateDescriptor> {
        let name = default_template_name(format);
        self.templates
            .get(&name)
            .ok_or(AdrError::TemplateNotFound { requested: name })
    }

    /// Number of resources left out while building the catalog.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
