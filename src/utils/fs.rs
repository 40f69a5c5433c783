use crate::error::{DevguardError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Something the patcher can load text from and save text back to
pub trait TargetFile {
    /// Path used for diagnostics and diff headers
    fn path(&self) -> &Path;

    /// Load the full content as UTF-8 text
    fn read_to_string(&self) -> Result<String>;

    /// Replace the full content
    fn write(&self, content: &str) -> Result<()>;
}

/// A target file on the local file system
#[derive(Debug, Clone)]
pub struct FsTarget {
    path: PathBuf,
}

impl FsTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TargetFile for FsTarget {
    fn path(&self) -> &Path {
        &self.path
    }

    /// Line endings come back as `\n` only; a patched file is written with LF
    fn read_to_string(&self) -> Result<String> {
        debug!("Reading file: {}", self.path.display());
        let content = fs::read_to_string(&self.path)
            .map_err(|e| DevguardError::read_error(e, &self.path))?;
        Ok(normalize_newlines(content))
    }

    fn write(&self, content: &str) -> Result<()> {
        debug!("Writing {} bytes to file: {}", content.len(), self.path.display());
        fs::write(&self.path, content).map_err(|e| DevguardError::write_error(e, &self.path))
    }
}

/// Turn `\r\n` and lone `\r` into `\n`
pub fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_operations() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("electron.js");
        fs::write(&file_path, "Hello, world!").unwrap();

        let target = FsTarget::new(&file_path);
        assert_eq!(target.path(), file_path.as_path());
        assert_eq!(target.read_to_string().unwrap(), "Hello, world!");

        target.write("patched").unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "patched");
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n".to_string()), "a\nb\nc\n");
        assert_eq!(normalize_newlines("a\r\r\nb".to_string()), "a\n\nb");
        assert_eq!(normalize_newlines("plain\n".to_string()), "plain\n");
    }

    #[test]
    fn test_read_crlf_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("electron.js");
        fs::write(&file_path, "one\r\ntwo\rthree\n").unwrap();

        let content = FsTarget::new(&file_path).read_to_string().unwrap();
        assert_eq!(content, "one\ntwo\nthree\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let target = FsTarget::new(dir.path().join("missing.js"));

        let err = target.read_to_string().unwrap_err();
        assert!(matches!(err, DevguardError::Read { .. }));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("binary.js");
        fs::write(&file_path, [0xff, 0xfe, 0x00]).unwrap();

        let err = FsTarget::new(&file_path).read_to_string().unwrap_err();
        assert!(matches!(err, DevguardError::Read { .. }));
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempdir().unwrap();
        let target = FsTarget::new(dir.path().join("nope").join("electron.js"));

        let err = target.write("x").unwrap_err();
        assert!(matches!(err, DevguardError::Write { .. }));
    }
}
