//! Per-day notes and events.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;

/// Free-text notes, one per date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteStore(BTreeMap<DateKey, String>);

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &DateKey) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Insert or overwrite the note for a date.
    pub fn upsert(&mut self, key: DateKey, text: String) {
        self.0.insert(key, text);
    }

    /// Returns whether a note was removed.
    pub fn remove(&mut self, key: &DateKey) -> bool {
        self.0.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single event on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub title: String,
    /// Free-form, e.g. "10:00 AM".
    pub time: String,
    pub date: DateKey,
}

/// Ordered event lists per date. A date never maps to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventStore(BTreeMap<DateKey, Vec<EventRecord>>);

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events for a date in insertion order; empty if there are none.
    pub fn for_date(&self, key: &DateKey) -> &[EventRecord] {
        self.0.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn has_events(&self, key: &DateKey) -> bool {
        !self.for_date(key).is_empty()
    }

    pub fn push(&mut self, record: EventRecord) {
        self.0.entry(record.date).or_default().push(record);
    }

    /// Remove the event at `index`, dropping the date entry once its list is empty.
    pub fn remove(&mut self, key: &DateKey, index: usize) -> Option<EventRecord> {
        let list = self.0.get_mut(key)?;
        if index >= list.len() {
            return None;
        }

        let removed = list.remove(index);
        if list.is_empty() {
            self.0.remove(key);
        }
        Some(removed)
    }

    /// Number of dates with at least one event.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop any empty lists that came in from storage.
    pub(crate) fn prune_empty(&mut self) {
        self.0.retain(|_, list| !list.is_empty());
    }
}

/// Title and time captured for a new event, checked before anything is stored.
///
/// A field that is `None` was cancelled by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: Option<String>,
    pub time: Option<String>,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, time: impl Into<String>) -> Self {
        EventDraft {
            title: Some(title.into()),
            time: Some(time.into()),
        }
    }

    /// Returns the trimmed `(title, time)` if both were given and non-blank.
    pub fn validate(&self) -> Option<(String, String)> {
        let title = self.title.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let time = self.time.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some((title.to_string(), time.to_string()))
    }

    pub fn into_record(self, date: DateKey) -> Option<EventRecord> {
        let (title, time) = self.validate()?;
        Some(EventRecord { title, time, date })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    fn record(title: &str, date: &str) -> EventRecord {
        EventRecord {
            title: title.to_string(),
            time: "10:00 AM".to_string(),
            date: key(date),
        }
    }

    #[test]
    fn test_note_upsert_overwrites() {
        let mut notes = NoteStore::new();
        notes.upsert(key("2024-1-1"), "first".into());
        notes.upsert(key("2024-1-1"), "second".into());
        assert_eq!(notes.get(&key("2024-1-1")), Some("second"));
        assert_eq!(notes.len(), 1);
        assert!(notes.remove(&key("2024-1-1")));
        assert!(!notes.remove(&key("2024-1-1")));
    }

    #[test]
    fn test_events_keep_insertion_order() {
        let mut events = EventStore::new();
        events.push(record("b", "2024-3-3"));
        events.push(record("a", "2024-3-3"));
        events.push(record("c", "2024-3-3"));

        let titles: Vec<_> = events
            .for_date(&key("2024-3-3"))
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_removing_last_event_drops_the_date() {
        let mut events = EventStore::new();
        events.push(record("only", "2024-3-3"));
        assert!(events.has_events(&key("2024-3-3")));

        let removed = events.remove(&key("2024-3-3"), 0).unwrap();
        assert_eq!(removed.title, "only");
        assert!(events.is_empty());
        assert!(!events.has_events(&key("2024-3-3")));
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut events = EventStore::new();
        events.push(record("only", "2024-3-3"));
        assert!(events.remove(&key("2024-3-3"), 1).is_none());
        assert!(events.remove(&key("2024-3-4"), 0).is_none());
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_store_json_layout() {
        let mut notes = NoteStore::new();
        notes.upsert(key("2024-8-15"), "flag".into());
        assert_eq!(serde_json::to_string(&notes).unwrap(), r#"{"2024-8-15":"flag"}"#);

        let mut events = EventStore::new();
        events.push(record("Parade", "2024-8-15"));
        assert_eq!(
            serde_json::to_string(&events).unwrap(),
            r#"{"2024-8-15":[{"title":"Parade","time":"10:00 AM","date":"2024-8-15"}]}"#
        );
    }

    #[test]
    fn test_prune_empty_lists_from_storage() {
        let mut events: EventStore = serde_json::from_str(r#"{"2024-1-1":[]}"#).unwrap();
        events.prune_empty();
        assert!(events.is_empty());
    }

    #[test]
    fn test_draft_validation() {
        assert_eq!(
            EventDraft::new(" Standup ", "9:30").validate(),
            Some(("Standup".to_string(), "9:30".to_string()))
        );
        assert!(EventDraft::new("", "9:30").validate().is_none());
        assert!(EventDraft::new("Standup", "   ").validate().is_none());
        assert!(
            EventDraft {
                title: Some("Standup".into()),
                time: None
            }
            .validate()
            .is_none()
        );
    }
}
