use crate::commands::OutputTarget;
use crate::error::{AdrError, Result};
use crate::scan::{is_stdout_token, locate_store_directory};
use std::fs;
use std::path::{Path, PathBuf};

/// Decides where output goes.
///
/// A user-supplied directory is trusted (its contents are not evaluated) but
/// must exist. Without one, the store is looked up under `cwd`; if none is
/// found, output falls back to stdout.
pub fn resolve_target(dir: Option<&str>, cwd: &Path) -> Result<OutputTarget> {
    let dir = match dir {
        Some(d) if is_stdout_token(d) => return Ok(OutputTarget::Stdout),
        Some(d) => absolutize(Path::new(d), cwd),
        None => match locate_store_directory(Some(cwd)) {
            Ok(found) => found,
            Err(_) => return Ok(OutputTarget::Stdout),
        },
    };

    let metadata = fs::metadata(&dir).map_err(|e| AdrError::io(&dir, e))?;
    if !metadata.is_dir() {
        return Err(AdrError::validation(
            "directory",
            format!("{} is not a directory", dir.display()),
        ));
    }

    Ok(OutputTarget::Directory(dir))
}

/// Like [`resolve_target`], for commands that need a real store directory.
pub fn resolve_store(dir: Option<&str>, cwd: &Path) -> Result<PathBuf> {
    match resolve_target(dir, cwd)? {
        OutputTarget::Directory(path) => Ok(path),
        OutputTarget::Stdout if dir.is_none() => Err(AdrError::NoStoreDirectory {
            root: cwd.to_path_buf(),
        }),
        OutputTarget::Stdout => Err(AdrError::validation(
            "directory",
            "a store directory is required here",
        )),
    }
}

pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Renders `path` relative to `cwd` (`./adr/0001-x.md`) when it lives below
/// it, otherwise as is.
pub fn display_path(path: &Path, cwd: &Path) -> String {
    match path.strip_prefix(cwd) {
        Ok(relative) if !relative.as_os_str().is_empty() => {
            format!("./{}", relative.display())
        }
        _ => path.display().to_string(),
    }
}

/// Checks that `value` has between `min` and `max` characters.
pub fn validate_length(field: &str, value: &str, min: usize, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len < min {
        return Err(AdrError::validation(
            field,
            format!("must have at least {} characters", min),
        ));
    }
    if len > max {
        return Err(AdrError::validation(
            field,
            format!("must have at most {} characters", max),
        ));
    }
    Ok(())
}
