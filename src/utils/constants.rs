pub const DEFAULT_ROOT: &str = ".";
pub const DEFAULT_IGNORE_FILE: &str = ".copyignore";
pub const DEFAULT_OUTPUT_FILE: &str = "collected_files.txt";

pub const COMMENT_MARKER: char = '#';
pub const HEADER_MARKER: &str = "=====";

pub const DEFAULT_IGNORE_CONTENT: &str = "# Patterns of files and folders to ignore, one per line
# Lines starting with # are comments
# Example:
# *.log
# *.tmp
# folder_to_ignore
";
