use crate::{error::Result, storage::Storage};
use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};

/// File-based storage implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStorage;

impl FileStorage {
    pub fn new() -> Self {
        Self
    }

    fn ensure_parent_exists(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn write_lines(&self, destination: &Path, lines: &[String]) -> Result<()> {
        self.ensure_parent_exists(destination)?;

        let mut writer = BufWriter::new(fs::File::create(destination)?);
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn read_lines(&self, source: &Path) -> Result<Vec<String>> {
        let contents = fs::read_to_string(source)?;
        Ok(contents.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_write_and_read_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("list.txt");
        let storage = FileStorage::new();

        storage
            .write_lines(&path, &lines(&["Chess", "Go Fish"]))
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Chess\nGo Fish\n");
        assert_eq!(
            storage.read_lines(&path).unwrap(),
            lines(&["Chess", "Go Fish"])
        );
    }

    #[test]
    fn test_write_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deeper").join("list.txt");

        FileStorage::new()
            .write_lines(&path, &lines(&["Tucano"]))
            .unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_write_empty_list_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("list.txt");
        fs::write(&path, "stale\n").unwrap();

        FileStorage::new().write_lines(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();

        let err = FileStorage::new()
            .read_lines(&temp_dir.path().join("missing.txt"))
            .unwrap_err();

        assert!(matches!(err, crate::error::PlannerError::IoError(_)));
    }
}
