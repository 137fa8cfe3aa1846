#[allow(clippy::module_inception)]
mod history;
mod history_store;
mod key_value_store;

pub use history::{History, HistoryEntry};
pub use history_store::{HistoryError, HistoryStore};
pub use key_value_store::{FileStore, KeyValueStore};

#[cfg(test)]
pub use history_store::tests::MemoryStore;
