use std::fmt;
use std::str::FromStr;
use anyhow::{ anyhow, Error, Result };

/// How entries of the ignore file are compared against paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Suffix or whole-segment comparison, `*` is just a character
    Literal,
    /// Literal rules plus shell globs on the path, file name and segments
    Glob,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Literal => write!(f, "literal"),
            MatchMode::Glob => write!(f, "glob"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<MatchMode> {
        match s.to_ascii_lowercase().as_str() {
            "literal" => Ok(MatchMode::Literal),
            "glob" => Ok(MatchMode::Glob),
            _ => Err(anyhow!("Unsupported match mode: {}", s)),
        }
    }
}
