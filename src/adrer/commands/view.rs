use crate::commands::{CmdResult, ListedRecord};
use crate::error::{AdrError, Result};
use crate::scan::{list_records, read_record_title};
use std::fs;
use std::path::Path;

/// Shows one record, selected by sequence number (`3`, `0003`) or filename.
pub fn run(dir: &Path, selector: &str) -> Result<CmdResult> {
    let selector = selector.trim();
    let records = list_records(dir)?;

    let by_sequence = selector.parse::<u64>().ok();
    let file = records
        .into_iter()
        .find(|r| Some(r.sequence) == by_sequence || r.filename == selector)
        .ok_or_else(|| AdrError::Api(format!("No ADR matching {} in {}", selector, dir.display())))?;

    let content = fs::read_to_string(&file.path).map_err(|e| AdrError::io(&file.path, e))?;
    let title = read_record_title(&file.path)?;

    Ok(CmdResult::default()
        .with_records(vec![ListedRecord { file, title }])
        .with_rendered(content))
}
