//! Calendar state bound to a storage backend.

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::date_key::DateKey;
use crate::error::DayNoteResult;
use crate::holiday::HolidayCalendar;
use crate::state::CalendarState;
use crate::storage::Storage;
use crate::store::{EventDraft, EventStore, NoteStore};

/// Storage key holding the serialized [`NoteStore`].
pub const NOTES_KEY: &str = "calendarNotes";
/// Storage key holding the serialized [`EventStore`].
pub const EVENTS_KEY: &str = "calendarEvents";

/// Owns a [`CalendarState`] and writes both stores back to storage after
/// every change. Failed reads start from empty stores; failed writes are
/// logged and dropped.
pub struct Session<S: Storage> {
    state: CalendarState,
    storage: S,
}

impl<S: Storage> Session<S> {
    pub fn load(storage: S, today: NaiveDate, holidays: HolidayCalendar) -> Self {
        let notes: NoteStore = load_or_default(&storage, NOTES_KEY);
        let mut events: EventStore = load_or_default(&storage, EVENTS_KEY);
        events.prune_empty();

        log::debug!(
            "Loaded {} notes and events on {} dates",
            notes.len(),
            events.len()
        );

        Session {
            state: CalendarState::new(today, notes, events, holidays),
            storage,
        }
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn change_month(&mut self, offset: i32) {
        self.state.change_month(offset);
    }

    pub fn jump_to_today(&mut self) {
        self.state.jump_to_today();
    }

    pub fn select_month(&mut self, month_index: u32) {
        self.state.select_month(month_index);
    }

    pub fn select_year(&mut self, year: i32) {
        self.state.select_year(year);
    }

    pub fn select_date(&mut self, day: u32) -> bool {
        self.state.select_date(day)
    }

    pub fn select_key(&mut self, key: DateKey) {
        self.state.select_key(key);
    }

    pub fn set_note_buffer(&mut self, text: impl Into<String>) {
        self.state.set_note_buffer(text);
    }

    pub fn save_note(&mut self) -> bool {
        let changed = self.state.save_note();
        self.persist_if(changed)
    }

    pub fn delete_note(&mut self) -> bool {
        let changed = self.state.delete_note();
        self.persist_if(changed)
    }

    pub fn add_event(&mut self, draft: EventDraft) -> bool {
        let changed = self.state.add_event(draft);
        self.persist_if(changed)
    }

    pub fn delete_event(&mut self, index: usize) -> bool {
        let changed = self.state.delete_event(index);
        self.persist_if(changed)
    }

    fn persist_if(&mut self, changed: bool) -> bool {
        if changed {
            if let Err(e) = self.persist() {
                log::error!("Failed to save data: {e}");
            }
        }
        changed
    }

    /// Write both stores in full.
    pub fn persist(&mut self) -> DayNoteResult<()> {
        save(&mut self.storage, NOTES_KEY, self.state.notes())?;
        save(&mut self.storage, EVENTS_KEY, self.state.events())?;
        Ok(())
    }
}

fn load_or_default<T, S>(storage: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: Storage,
{
    let loaded: DayNoteResult<T> = storage.get(key).and_then(|raw| match raw {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(T::default()),
    });

    loaded.unwrap_or_else(|e| {
        log::error!("Failed to load {key}: {e}");
        T::default()
    })
}

fn save<T: Serialize, S: Storage>(storage: &mut S, key: &str, value: &T) -> DayNoteResult<()> {
    let json = serde_json::to_string(value)?;
    storage.set(key, &json)
}
