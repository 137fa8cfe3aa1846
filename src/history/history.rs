use crate::domain::Trip;
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub prompt: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub trip_data: Trip,
}

impl HistoryEntry {
    pub fn new(prompt: impl Into<String>, trip: Trip, at: DateTime<Utc>) -> Self {
        HistoryEntry {
            id: Uuid::new_v4().to_string(),
            prompt: prompt.into(),
            timestamp: at.timestamp_millis(),
            trip_data: trip,
        }
    }

    /// Formats the timestamp like `Mar 5, 2025, 09:41` in local time.
    pub fn formatted_date(&self) -> String {
        match Local.timestamp_millis_opt(self.timestamp).single() {
            Some(date) => date.format("%b %-d, %Y, %H:%M").to_string(),
            None => "unknown date".to_string(),
        }
    }
}

/// Newest-first list of past prompts, capped at a fixed number of entries.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl History {
    pub fn new(entries: Vec<HistoryEntry>, capacity: usize) -> Self {
        let mut history = History { entries, capacity };
        history.entries.truncate(capacity);
        history
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<HistoryEntry> {
        self.entries
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(self.capacity);
    }

    /// Removes the entry with the given id, returning whether one was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::domain::Location;
    use pretty_assertions::assert_eq;

    const CAPACITY: usize = 50;

    pub fn entry(id: &str, timestamp: i64) -> HistoryEntry {
        HistoryEntry {
            id: id.to_string(),
            prompt: format!("prompt {}", id),
            timestamp,
            trip_data: Trip {
                start_location: Location {
                    name: "A".to_string(),
                    coordinates: None,
                },
                end_location: Location {
                    name: "B".to_string(),
                    coordinates: None,
                },
                waypoints: vec![],
            },
        }
    }

    fn ids(history: &History) -> Vec<&str> {
        history.entries().iter().map(|entry| entry.id.as_str()).collect()
    }

    #[test]
    fn keeps_the_fifty_most_recent_entries_newest_first() {
        let mut history = History::new(vec![], CAPACITY);

        for i in 0..51 {
            history.record(entry(&i.to_string(), i));
        }

        assert_eq!(history.entries().len(), 50);
        assert_eq!(history.entries()[0].id, "50");
        assert_eq!(history.entries()[49].id, "1");
        assert!(history.entries().windows(2).all(|pair| pair[0].timestamp > pair[1].timestamp));
    }

    #[test]
    fn truncates_loaded_entries_to_the_capacity() {
        let history = History::new(vec![entry("c", 3), entry("b", 2), entry("a", 1)], 2);

        assert_eq!(ids(&history), vec!["c", "b"]);
    }

    #[test]
    fn deleting_an_unknown_id_is_a_no_op() {
        let mut history = History::new(vec![entry("b", 2), entry("a", 1)], CAPACITY);

        let deleted = history.delete("z");

        assert!(!deleted);
        assert_eq!(ids(&history), vec!["b", "a"]);
    }

    #[test]
    fn deleting_a_present_id_removes_exactly_that_entry() {
        let mut history = History::new(vec![entry("c", 3), entry("b", 2), entry("a", 1)], CAPACITY);

        let deleted = history.delete("b");

        assert!(deleted);
        assert_eq!(ids(&history), vec!["c", "a"]);
    }

    #[test]
    fn new_entries_get_unique_ids_and_millisecond_timestamps() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let first = HistoryEntry::new("one", entry("x", 0).trip_data, at);
        let second = HistoryEntry::new("two", entry("y", 0).trip_data, at);

        assert_ne!(first.id, second.id);
        assert_eq!(first.timestamp, 1_700_000_000_123);
    }

    #[test]
    fn serializes_with_the_stored_field_names() -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(entry("a", 1))?;

        assert_eq!(value["id"], "a");
        assert_eq!(value["timestamp"], 1);
        assert_eq!(value["tripData"]["startLocation"]["name"], "A");
        Ok(())
    }
}
