//! # Directory Scanner
//!
//! Read-only queries over a directory of ADR files. Nothing here is cached:
//! each call looks at the directory as it is at call time.
//!
//! Two predicates are deliberately different:
//! - [`evaluate_candidate`] is strict: every file must look like an ADR. It
//!   decides whether a directory may be adopted as the store.
//! - [`highest_sequence_number`] is permissive: files that do not look like an
//!   ADR are ignored. It runs against a directory that is already in use.

use crate::error::{AdrError, Result};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Matches existing ADR files, e.g. `0001-fizzy-pop.md` or `0003-thing-two.txt`.
///
/// `\d` and `\w` are ASCII-only, so `٣-note.md` is not an ADR.
pub static ADR_FILENAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^((?-u:\d)+)-.+\.(?-u:\w)+$").unwrap());

/// Store directory names looked for under the root, in order of preference.
pub const CANDIDATE_DIRECTORIES: &[&str] = &["architectural-decision-records", "adr", ".adr"];

/// Directory tokens that mean "print to stdout" instead of writing a file.
pub const STDOUT_TOKENS: &[&str] = &["", "-", "/"];

pub fn is_stdout_token(dir: &str) -> bool {
    STDOUT_TOKENS.contains(&dir)
}

/// An ADR file found in a store directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFile {
    pub sequence: u64,
    pub filename: String,
    pub path: PathBuf,
    pub modified: Option<DateTime<Utc>>,
}

/// Parses the sequence prefix of an ADR-shaped filename.
///
/// `Ok(None)` means the name is not an ADR. A name that matches but whose
/// digits do not fit a `u64` is an error, not a skip.
pub fn parse_sequence(filename: &str) -> Result<Option<u64>> {
    let Some(caps) = ADR_FILENAME_PATTERN.captures(filename) else {
        return Ok(None);
    };

    caps[1]
        .parse::<u64>()
        .map(Some)
        .map_err(|source| AdrError::SequenceParse {
            filename: filename.to_string(),
            source,
        })
}

/// Checks whether `path` can serve as a store: empty, or holding only
/// ADR-named files. Subdirectories are allowed and not inspected.
pub fn evaluate_candidate(path: &Path) -> Result<bool> {
    let entries = fs::read_dir(path).map_err(|e| AdrError::io(path, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| AdrError::io(path, e))?;
        let file_type = entry.file_type().map_err(|e| AdrError::io(entry.path(), e))?;
        if file_type.is_dir() {
            continue;
        }

        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| ADR_FILENAME_PATTERN.is_match(name));
        if !matches {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Finds the first viable store directory under `root`.
///
/// `root` defaults to the current working directory. Candidates that cannot
/// be read (usually because they don't exist) are skipped.
pub fn locate_store_directory(root: Option<&Path>) -> Result<PathBuf> {
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => std::env::current_dir().map_err(|e| AdrError::io(".", e))?,
    };

    for name in CANDIDATE_DIRECTORIES {
        let candidate = root.join(name);
        if let Ok(true) = evaluate_candidate(&candidate) {
            return Ok(candidate);
        }
    }

    Err(AdrError::NoStoreDirectory { root })
}

/// Returns the highest sequence number among the ADR files in `dir`, or `0`
/// when there are none.
pub fn highest_sequence_number(dir: &Path) -> Result<u64> {
    if dir.as_os_str().is_empty() {
        return Err(AdrError::validation("directory", "directory path is empty"));
    }

    let entries = fs::read_dir(dir).map_err(|e| AdrError::io(dir, e))?;

    let mut highest = 0;
    for entry in entries {
        let entry = entry.map_err(|e| AdrError::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| AdrError::io(entry.path(), e))?;
        if file_type.is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };

        if let Some(sequence) = parse_sequence(&name)? {
            highest = highest.max(sequence);
        }
    }

    Ok(highest)
}

/// The sequence number the next record in `dir` should get.
pub fn next_sequence_number(dir: &Path) -> Result<u64> {
    Ok(highest_sequence_number(dir)?.saturating_add(1))
}

/// Lists the ADR files of `dir`, ordered by sequence then filename.
/// Files that don't look like ADRs are left out.
pub fn list_records(dir: &Path) -> Result<Vec<RecordFile>> {
    if dir.as_os_str().is_empty() {
        return Err(AdrError::validation("directory", "directory path is empty"));
    }

    let entries = fs::read_dir(dir).map_err(|e| AdrError::io(dir, e))?;

    let mut records = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AdrError::io(dir, e))?;
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        if metadata.is_dir() {
            continue;
        }

        let Some(filename) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        let Some(sequence) = parse_sequence(&filename)? else {
            continue;
        };

        records.push(RecordFile {
            sequence,
            filename,
            path: entry.path(),
            modified: metadata.modified().ok().map(DateTime::<Utc>::from),
        });
    }

    records.sort_by(|a, b| {
        a.sequence
            .cmp(&b.sequence)
            .then_with(|| a.filename.cmp(&b.filename))
    });
    Ok(records)
}

/// First non-empty line of a record file, without leading `#` markers.
pub fn read_record_title(path: &Path) -> Result<Option<String>> {
    let content = fs::read_to_string(path).map_err(|e| AdrError::io(path, e))?;
    Ok(content
        .lines()
        .map(|line| line.trim_start_matches('#').trim())
        .find(|line| !line.is_empty())
        .map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "content").unwrap();
    }

    #[test]
    fn pattern_matches_adr_names() {
        for name in ["0001-fizzy-pop.md", "0002-bubble-gupp.md", "3-thing-two.txt"] {
            assert!(ADR_FILENAME_PATTERN.is_match(name), "{}", name);
        }
        for name in ["README.md", "0001.md", "0001-", "notes-0001.md", "0001-x."] {
            assert!(!ADR_FILENAME_PATTERN.is_match(name), "{}", name);
        }
    }

    #[test]
    fn highest_sequence_on_empty_dir_is_zero() {
        let dir = TempDir::new().unwrap();
        assert_eq!(highest_sequence_number(dir.path()).unwrap(), 0);
        assert_eq!(next_sequence_number(dir.path()).unwrap(), 1);
    }

    #[test]
    fn highest_sequence_picks_max() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "0001-a.md");
        touch(dir.path(), "0003-b.md");
        touch(dir.path(), "0002-c.md");

        assert_eq!(highest_sequence_number(dir.path()).unwrap(), 3);
        assert_eq!(next_sequence_number(dir.path()).unwrap(), 4);
    }

    #[test]
    fn highest_sequence_ignores_non_matching_and_dirs() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "README.md");
        touch(dir.path(), "notes.txt");
        fs::create_dir(dir.path().join("0099-evidence.d")).unwrap();

        assert_eq!(highest_sequence_number(dir.path()).unwrap(), 0);
    }

    #[test]
    fn highest_sequence_rejects_empty_path() {
        let err = highest_sequence_number(Path::new("")).unwrap_err();
        assert_eq!(err.field(), Some("directory"));
    }

    #[test]
    fn highest_sequence_fails_on_missing_dir() {
        let dir = TempDir::new().unwrap();
        let err = highest_sequence_number(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, AdrError::Io { .. }));
    }

    #[test]
    fn unparseable_sequence_is_a_hard_error() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "0001-a.md");
        touch(dir.path(), "99999999999999999999-overflow.md");

        let err = highest_sequence_number(dir.path()).unwrap_err();
        assert!(matches!(err, AdrError::SequenceParse { .. }));
    }

    #[test]
    fn non_ascii_digits_are_not_adrs() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "0001-a.md");
        touch(dir.path(), "\u{0663}-note.md");

        assert!(!ADR_FILENAME_PATTERN.is_match("\u{0663}-note.md"));
        assert!(!ADR_FILENAME_PATTERN.is_match("0001-note.m\u{00e9}"));
        assert_eq!(highest_sequence_number(dir.path()).unwrap(), 1);
        assert!(!evaluate_candidate(dir.path()).unwrap());
    }

    #[test]
    fn sequences_beyond_u32_parse() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "5000000000-a.md");

        assert_eq!(highest_sequence_number(dir.path()).unwrap(), 5_000_000_000);
        assert_eq!(next_sequence_number(dir.path()).unwrap(), 5_000_000_001);
    }

    #[test]
    fn empty_dir_is_valid_candidate() {
        let dir = TempDir::new().unwrap();
        assert!(evaluate_candidate(dir.path()).unwrap());
    }

    #[test]
    fn adr_files_and_subdirs_are_valid_candidate() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "0001-a.md");
        touch(dir.path(), "0002-b.md");
        fs::create_dir(dir.path().join("evidence")).unwrap();
        touch(&dir.path().join("evidence"), "diagram.png");

        assert!(evaluate_candidate(dir.path()).unwrap());
    }

    #[test]
    fn stray_file_rejects_candidate() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "0001-a.md");
        touch(dir.path(), "README.md");

        assert!(!evaluate_candidate(dir.path()).unwrap());
    }

    #[test]
    fn missing_candidate_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(evaluate_candidate(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn locate_prefers_first_valid_candidate() {
        let root = TempDir::new().unwrap();
        let long = root.path().join("architectural-decision-records");
        let short = root.path().join("adr");
        fs::create_dir(&long).unwrap();
        fs::create_dir(&short).unwrap();
        touch(&long, "README.md");

        let found = locate_store_directory(Some(root.path())).unwrap();
        assert_eq!(found, short);
    }

    #[test]
    fn locate_finds_hidden_candidate() {
        let root = TempDir::new().unwrap();
        let hidden = root.path().join(".adr");
        fs::create_dir(&hidden).unwrap();
        touch(&hidden, "0001-first.md");

        assert_eq!(locate_store_directory(Some(root.path())).unwrap(), hidden);
    }

    #[test]
    fn locate_fails_without_candidates() {
        let root = TempDir::new().unwrap();
        let err = locate_store_directory(Some(root.path())).unwrap_err();
        assert!(matches!(err, AdrError::NoStoreDirectory { .. }));
    }

    #[test]
    fn list_records_sorts_and_filters() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "0010-later.md");
        touch(dir.path(), "0002-second.md");
        touch(dir.path(), "README.md");

        let records = list_records(dir.path()).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["0002-second.md", "0010-later.md"]);
        assert_eq!(records[1].sequence, 10);
        assert!(records[0].modified.is_some());
    }

    #[test]
    fn record_title_skips_blank_lines_and_hashes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("0001-x.md");
        fs::write(&path, "\n\n# 0001: Use Rust\n\n## Status\n").unwrap();

        assert_eq!(
            read_record_title(&path).unwrap(),
            Some("0001: Use Rust".to_string())
        );
    }

    #[test]
    fn stdout_tokens() {
        assert!(is_stdout_token(""));
        assert!(is_stdout_token("-"));
        assert!(is_stdout_token("/"));
        assert!(!is_stdout_token("adr"));
    }
}
