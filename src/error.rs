use std::path::PathBuf;
use thiserror::Error;

/// Main error type for devguard
#[derive(Error, Debug)]
pub enum DevguardError {
    #[error("Failed to read file: {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write to file: {}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write status output: {source}")]
    Output { source: std::io::Error },
}

impl DevguardError {
    /// Create a new read error with path context
    pub fn read_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Read {
            source: err,
            path: path.into(),
        }
    }

    /// Create a new write error with path context
    pub fn write_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Write {
            source: err,
            path: path.into(),
        }
    }

    pub fn output_error(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

/// Result type for devguard operations
pub type Result<T> = std::result::Result<T, DevguardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_error_display_includes_path() {
        let err = DevguardError::read_error(
            io::Error::new(io::ErrorKind::NotFound, "missing"),
            "public/electron.js",
        );
        assert_eq!(err.to_string(), "Failed to read file: public/electron.js");
    }

    #[test]
    fn test_output_error_display() {
        let err = DevguardError::output_error(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(err.to_string().contains("closed"));
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;
        let err = DevguardError::write_error(
            io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            "out.js",
        );
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("read-only"));
    }
}
