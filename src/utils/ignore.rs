use std::fs::{read_to_string, write};
use std::path::{Path, MAIN_SEPARATOR};
use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use tracing::{debug, warn};

use crate::utils::constants::{COMMENT_MARKER, DEFAULT_IGNORE_CONTENT};
use crate::utils::enums::MatchMode;

/// Writes the placeholder ignore file if nothing exists at `path`.
/// Returns `true` when the file was created.
pub fn create_default_ignore_file(path: &Path) -> Result<bool> {
    if path.exists() {
        debug!(path = %path.display(), "ignore file already present");
        return Ok(false);
    }

    write(path, DEFAULT_IGNORE_CONTENT)
        .with_context(|| format!("Failed to create ignore file {}", path.display()))?;

    println!("Created {} with default content.", path.display().to_string().green());
    Ok(true)
}

/// Reads patterns from the ignore file, one per line.
///
/// Lines are trimmed, but the comment check looks at the raw line, so an
/// indented `#` line is kept as a pattern. A missing file yields no patterns.
pub fn load_patterns(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = read_to_string(path)
        .with_context(|| format!("Failed to read ignore file {}", path.display()))?;

    let patterns = content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with(COMMENT_MARKER))
        .map(|line| line.trim().to_string())
        .collect();

    Ok(patterns)
}

/// Literal check: the path ends with a pattern, or a pattern is one of its segments.
pub fn is_ignored(path: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| {
        path.ends_with(pattern.as_str()) || path.split(MAIN_SEPARATOR).any(|segment| segment == pattern)
    })
}

#[derive(Debug)]
pub struct IgnoreList {
    patterns: Vec<String>,
    globs: Vec<Pattern>,
    mode: MatchMode,
}

impl IgnoreList {
    pub fn new(patterns: Vec<String>, mode: MatchMode) -> Self {
        let globs = match mode {
            MatchMode::Literal => Vec::new(),
            MatchMode::Glob => patterns
                .iter()
                .filter_map(|p| match Pattern::new(p) {
                    Ok(glob) => Some(glob),
                    Err(e) => {
                        warn!(pattern = %p, error = %e, "skipping invalid glob pattern");
                        None
                    }
                })
                .collect(),
        };

        IgnoreList { patterns, globs, mode }
    }

    pub fn load(path: &Path, mode: MatchMode) -> Result<Self> {
        let patterns = load_patterns(path)?;
        debug!(count = patterns.len(), %mode, "loaded ignore patterns");
        Ok(Self::new(patterns, mode))
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();

        if is_ignored(&path, &self.patterns) {
            return true;
        }

        self.globs.iter().any(|glob| {
            glob.matches(&path) || path.split(MAIN_SEPARATOR).any(|segment| glob.matches(segment))
        })
    }
}
