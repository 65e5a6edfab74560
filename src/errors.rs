use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Why a country code was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeProblem {
    /// Not exactly two characters.
    Length,
    /// Contains something other than ASCII letters.
    NotAlphabetic,
    /// Well-formed but not an assigned ISO 3166-1 alpha-2 code.
    Unassigned,
}

impl fmt::Display for CodeProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CodeProblem::Length | CodeProblem::NotAlphabetic => {
                "it must be a two-letter ISO 3166-1 alpha-2 code"
            }
            CodeProblem::Unassigned => "not a valid ISO 3166-1 alpha-2 code",
        })
    }
}

// Everything that can go wrong between reading a feed and writing the filtered copy
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("input file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    // Invalid JSON, or a JSON value of the wrong shape
    #[error("malformed input in {}: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },

    // Only the advanced run treats an empty feed as an error
    #[error("the input file {} is empty or contains no records", .path.display())]
    Empty { path: PathBuf },

    #[error("invalid country code '{code}': {reason}")]
    InvalidCountryCode { code: String, reason: CodeProblem },

    #[error("permission denied when accessing {}: {source}", .path.display())]
    PermissionDenied { path: PathBuf, source: io::Error },

    #[error("I/O error on {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl FilterError {
    /// Map an I/O error on `path` to the matching variant.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => FilterError::NotFound { path },
            io::ErrorKind::PermissionDenied => FilterError::PermissionDenied { path, source },
            _ => FilterError::Io { path, source },
        }
    }
}


// Type alias for results that use `FilterError` as the error type
pub type Result<T> = std::result::Result<T, FilterError>;
