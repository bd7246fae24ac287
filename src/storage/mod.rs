use std::path::PathBuf;

mod file;

pub use file::PasteStore;

/// Where and how pastes are persisted.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Flat directory holding one file per paste, named after the paste.
    pub dir: PathBuf,
}

impl From<&crate::config::Storage> for StoreConfig {
    fn from(storage: &crate::config::Storage) -> Self {
        StoreConfig {
            dir: storage.dir.clone(),
        }
    }
}
