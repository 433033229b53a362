mod file;
mod history;
mod memory;
mod theme;

pub use file::FileStore;
pub use history::{History, HISTORY_KEY};
pub use memory::MemoryStore;
pub use theme::{Theme, THEME_KEY};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key-value persistence used for preferences and history.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
