use std::fs::read;
use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use thiserror::Error;
use tracing::warn;
use walkdir::WalkDir;

use crate::utils::constants::HEADER_MARKER;
use crate::utils::ignore::IgnoreList;

/// One collected file: its path label and its full text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedEntry {
    pub path: PathBuf,
    pub content: String,
}

impl CollectedEntry {
    /// Header line, raw content, trailing newline
    pub fn render(&self) -> String {
        format!("{m} {} {m}\n{}\n", self.path.display(), self.content, m = HEADER_MARKER)
    }
}

#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("read failed: {0}")]
    Io(#[from] io::Error),
    #[error("not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),
}

#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Result of one traversal, in visitation order
#[derive(Debug, Default)]
pub struct Collection {
    pub entries: Vec<CollectedEntry>,
    pub skipped: Vec<SkippedFile>,
}

impl Collection {
    /// Entries rendered and joined with a newline, which leaves a blank line between them
    pub fn document(&self) -> String {
        self.entries
            .iter()
            .map(CollectedEntry::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Reads a whole file as UTF-8. The handle is closed before this returns.
pub fn read_entry(path: &Path) -> Result<CollectedEntry, SkipReason> {
    let bytes = read(path)?;
    let content = String::from_utf8(bytes)?;

    Ok(CollectedEntry { path: path.to_path_buf(), content })
}

/// Canonical parent joined with the file name, so the file itself need not exist
fn resolve(path: &Path) -> PathBuf {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    match (parent.canonicalize(), path.file_name()) {
        (Ok(parent), Some(name)) => parent.join(name),
        _ => path.to_path_buf(),
    }
}

/// Walks `root` and reads every file that is not excluded.
///
/// Ignored directories are pruned before descending. A file is excluded when its
/// path ends with `ignore_file`, is the same file as `ignore_file` or `output_file`
/// (both resolved against `root`), or matches `ignore`.
/// Unreadable files end up in `Collection::skipped`.
pub fn gather_files_content(
    root: &Path,
    ignore: &IgnoreList,
    ignore_file: &str,
    output_file: &str,
) -> Collection {
    let mut collection = Collection::default();
    let ignore_path = resolve(&root.join(ignore_file));
    let output_path = resolve(&root.join(output_file));

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_type().is_dir() || !ignore.is_ignored(e.path()));

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping entry the walk could not read");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if path.to_string_lossy().ends_with(ignore_file) || ignore.is_ignored(path) {
            continue;
        }

        let resolved = resolve(path);
        if resolved == output_path || resolved == ignore_path {
            continue;
        }

        match read_entry(path) {
            Ok(collected) => collection.entries.push(collected),
            Err(reason) => collection.skipped.push(SkippedFile { path: path.to_path_buf(), reason }),
        }
    }

    collection
}
