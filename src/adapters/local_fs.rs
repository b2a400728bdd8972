use crate::domain::ports::DirectoryStore;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDirectoryStore;

impl LocalDirectoryStore {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryStore for LocalDirectoryStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }
}
