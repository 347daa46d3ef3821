use std::path::Path;
use anyhow::{anyhow, Result};
use colored::Colorize;
use tracing::{debug, info};

use crate::utils::enums::MatchMode;
use crate::utils::gather::gather_files_content;
use crate::utils::ignore::{create_default_ignore_file, IgnoreList};
use crate::utils::output::save_to_file;

/// Ensures the ignore file, loads it, walks `root` and writes the document.
/// Both file names are resolved against `root`.
pub fn run(root: &Path, ignore_file: &str, output_file: &str, mode: MatchMode) -> Result<()> {
    if !root.is_dir() {
        return Err(anyhow!("Root {} is not a directory", root.display()));
    }

    let ignore_path = root.join(ignore_file);
    let output_path = root.join(output_file);

    create_default_ignore_file(&ignore_path)?;
    let ignore = IgnoreList::load(&ignore_path, mode)?;

    info!(root = %root.display(), patterns = ignore.patterns().len(), mode = %ignore.mode(), "collecting files");
    let collection = gather_files_content(root, &ignore, ignore_file, output_file);

    for skipped in &collection.skipped {
        debug!(path = %skipped.path.display(), reason = %skipped.reason, "skipped file");
    }

    save_to_file(&collection.document(), &output_path)?;

    let summary = format!("{} files collected", collection.entries.len());
    if collection.skipped.is_empty() {
        println!("{}", summary);
    } else {
        println!("{}, {}", summary, format!("{} skipped", collection.skipped.len()).yellow());
    }

    Ok(())
}
