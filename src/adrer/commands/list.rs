use crate::commands::{CmdMessage, CmdResult, ListedRecord};
use crate::error::Result;
use crate::scan::{list_records, read_record_title};
use std::path::Path;

pub fn run(dir: &Path) -> Result<CmdResult> {
    let records: Vec<ListedRecord> = list_records(dir)?
        .into_iter()
        .map(|file| {
            // An unreadable file still lists, just without a title.
            let title = read_record_title(&file.path).ok().flatten();
            ListedRecord { file, title }
        })
        .collect();

    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No ADRs found in {}",
            dir.display()
        )));
    }
    Ok(result.with_records(records))
}
