use std::io;
use std::path::Path;

/// Filesystem operations the scaffolder needs.
pub trait DirectoryStore {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    /// Creates a single directory. Must fail if `path` already exists.
    fn create_dir(&self, path: &Path) -> io::Result<()>;
}
