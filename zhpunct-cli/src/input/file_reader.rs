//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Replace a file's content, leaving it untouched when nothing changed
    ///
    /// Returns whether the file was written.
    pub fn write_if_changed(path: &Path, original: &str, updated: &str) -> Result<bool> {
        if original == updated {
            return Ok(false);
        }
        fs::write(path, updated)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(true)
    }
}

/// Read all of standard input as UTF-8 text
pub fn read_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read standard input")?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "你好，世界。\n第二行";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::read_text(path);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_text_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("binary.txt");
        fs::write(&file_path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(FileReader::read_text(&file_path).is_err());
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        let content = FileReader::read_text(&file_path).unwrap();
        assert_eq!(content, "");
    }

    #[test]
    fn test_write_if_changed() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("doc.txt");
        fs::write(&file_path, "你好，世界").unwrap();

        assert!(!FileReader::write_if_changed(&file_path, "same", "same").unwrap());
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "你好，世界");

        assert!(FileReader::write_if_changed(&file_path, "你好，世界", "你好, 世界").unwrap());
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "你好, 世界");
    }
}
