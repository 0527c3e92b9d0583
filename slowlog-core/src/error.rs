use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Header fields of a block that must parse as numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    Id,
    Timestamp,
    Duration,
}

impl HeaderField {
    pub fn expected(&self) -> &'static str {
        match self {
            HeaderField::Id | HeaderField::Timestamp => "an integer",
            HeaderField::Duration => "a number",
        }
    }
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeaderField::Id => "id",
            HeaderField::Timestamp => "timestamp",
            HeaderField::Duration => "duration",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum SlowlogError {
    // IO / Discovery
    #[error("failed to inspect slow log path {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open slow log {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read slow log {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    // Parsing
    #[error("{}:{line}: {field} must be {}, found {text:?}", .path.display(), .field.expected())]
    InvalidField {
        path: PathBuf,
        line: usize,
        field: HeaderField,
        text: String,
    },
}

impl SlowlogError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Path of the file the error is about, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            SlowlogError::Stat { path, .. }
            | SlowlogError::Open { path, .. }
            | SlowlogError::Read { path, .. }
            | SlowlogError::InvalidField { path, .. } => Some(path),
            SlowlogError::Glob { .. } => None,
        }
    }
}
