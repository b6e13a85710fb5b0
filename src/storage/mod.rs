use crate::error::Result;
use std::path::Path;

pub mod file_storage;

pub use file_storage::FileStorage;

/// Storage trait for writing line oriented exports
pub trait Storage {
    /// Writes `lines` to `destination`, one per line, replacing any previous content
    fn write_lines(&self, destination: &Path, lines: &[String]) -> Result<()>;

    /// Reads back the lines stored at `source`
    fn read_lines(&self, source: &Path) -> Result<Vec<String>>;
}
