use crate::history::history::{History, HistoryEntry};
use crate::history::key_value_store::KeyValueStore;
use std::io;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

pub const HISTORY_KEY: &str = "promptHistory";

/// Loads and saves the prompt history under a fixed key.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    store: Arc<dyn KeyValueStore>,
    capacity: usize,
}

impl HistoryStore {
    pub fn new(store: Arc<dyn KeyValueStore>, capacity: usize) -> Self {
        HistoryStore { store, capacity }
    }

    pub async fn load(&self) -> Result<History, HistoryError> {
        let entries = match self.store.get(HISTORY_KEY).await? {
            Some(content) => serde_json::from_str::<Vec<HistoryEntry>>(&content)?,
            None => Vec::new(),
        };

        Ok(History::new(entries, self.capacity))
    }

    pub async fn save(&self, history: &History) -> Result<(), HistoryError> {
        let content = serde_json::to_string(history.entries())?;
        self.store.set(HISTORY_KEY, &content).await?;
        Ok(())
    }

    #[instrument(skip_all, fields(id = %entry.id))]
    pub async fn record(&self, entry: HistoryEntry) -> Result<History, HistoryError> {
        let mut history = self.load().await?;
        history.record(entry);
        self.save(&history).await?;
        info!("💾 Recorded prompt, {} in history", history.entries().len());

        Ok(history)
    }

    /// Deleting an id that is not in the history leaves the stored list untouched.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<bool, HistoryError> {
        let mut history = self.load().await?;
        if !history.delete(id) {
            return Ok(false);
        }

        self.save(&history).await?;
        info!("🗑️ Deleted prompt from history");
        Ok(true)
    }
}

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("unable to access the history: {0}")]
    Io(#[from] io::Error),
    #[error("unable to read the history: {0}")]
    Json(#[from] serde_json::Error),
}
