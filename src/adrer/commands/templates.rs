use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::template::TemplateCatalog;

pub fn run(catalog: &TemplateCatalog) -> Result<CmdResult> {
    let templates = catalog.list_templates().values().cloned().collect();

    let mut result = CmdResult::default().with_templates(templates);
    if catalog.skipped() > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} template file(s) skipped (expected {{id}}.{{format}}.tpl with a supported format)",
            catalog.skipped()
        )));
    }
    Ok(result)
}
