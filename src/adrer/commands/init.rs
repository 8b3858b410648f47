use crate::commands::helpers::display_path;
use crate::commands::{AdrPaths, CmdMessage, CmdResult};
use crate::error::{AdrError, Result};
use crate::scan::{evaluate_candidate, CANDIDATE_DIRECTORIES};
use std::fs;

/// Creates a store directory under `paths.cwd`, named after one of the
/// candidate names so later runs discover it.
pub fn run(paths: &AdrPaths, name: Option<&str>) -> Result<CmdResult> {
    let name = name.unwrap_or(CANDIDATE_DIRECTORIES[0]);
    if !CANDIDATE_DIRECTORIES.contains(&name) {
        return Err(AdrError::validation(
            "name",
            format!("must be one of: {}", CANDIDATE_DIRECTORIES.join(", ")),
        ));
    }

    let dir = paths.cwd.join(name);
    let shown = display_path(&dir, &paths.cwd);
    let mut result = CmdResult::default();

    if dir.is_dir() {
        if evaluate_candidate(&dir)? {
            result.add_message(CmdMessage::info(format!("ADR store already exists at {}", shown)));
        } else {
            result.add_message(CmdMessage::warning(format!(
                "{} exists but holds files that are not ADRs; it will not be discovered automatically",
                shown
            )));
        }
        return Ok(result);
    }

    fs::create_dir_all(&dir).map_err(|e| AdrError::io(&dir, e))?;
    result.add_message(CmdMessage::success(format!("Initialized ADR store at {}", shown)));
    Ok(result)
}
