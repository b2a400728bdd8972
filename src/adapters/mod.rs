// Adapters layer: concrete implementations of the domain ports.

pub mod local_fs;

pub use local_fs::LocalDirectoryStore;
