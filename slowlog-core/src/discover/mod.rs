
use crate::error::SlowlogError;
use glob::{MatchOptions, Pattern, glob_with};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Slow-log files looked up under a directory.
pub const LOG_PATTERN: &str = "**/*.log";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Resolves a user-supplied path into the list of files to scan.
///
/// A file is returned as-is, whatever its name. A directory is searched
/// recursively for `*.log` files, skipping hidden files and directories.
///
/// # Errors
///
/// Returns `SlowlogError::Stat` if `path` cannot be inspected.
pub fn discover_log_files(path: &Path) -> Result<Vec<PathBuf>, SlowlogError> {
    let meta = fs::metadata(path).map_err(|e| SlowlogError::Stat {
        path: path.to_path_buf(),
        source: e,
    })?;

    if !meta.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let files = discover(path, LOG_PATTERN)?;
    tracing::debug!(root = %path.display(), files = files.len(), "discovered slow logs");
    Ok(files)
}

/// Finds regular, non-hidden files under `root` matching `glob_pattern`.
///
/// Paths come back sorted.
///
/// # Errors
///
/// Returns `SlowlogError::Glob` if the pattern is malformed.
pub fn discover(root: &Path, glob_pattern: &str) -> Result<Vec<PathBuf>, SlowlogError> {
    let pattern = &resolve_glob(root, glob_pattern);
    let mut paths: Vec<_> = glob_with(pattern, MATCH_OPTIONS)
        .map_err(|e| SlowlogError::Glob {
            pattern: pattern.to_string(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file() && !is_hidden(root, p))
        .collect();

    paths.sort();
    Ok(paths)
}

/// Joins `pattern` onto `root`, escaping any glob syntax in `root` itself.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    let root = Pattern::escape(&root.to_string_lossy());
    Path::new(&root).join(pattern).to_string_lossy().into_owned()
}

fn is_hidden(root: &Path, path: &Path) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);

    relative.components().any(|c| match c {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}
