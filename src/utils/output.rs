use std::fs::write;
use std::path::Path;
use anyhow::{Context, Result};
use colored::Colorize;

/// Overwrites `path` with `content`
pub fn save_to_file(content: &str, path: &Path) -> Result<()> {
    write(path, content).with_context(|| format!("Failed to write output to {}", path.display()))?;

    println!("Collected content saved to: {}", path.display().to_string().green());
    Ok(())
}
