//! In-memory calendar state: cursor, selection, note buffer and both stores.

use chrono::NaiveDate;

use crate::cursor::CalendarCursor;
use crate::date_key::DateKey;
use crate::grid::MonthGrid;
use crate::holiday::HolidayCalendar;
use crate::store::{EventDraft, EventRecord, EventStore, NoteStore};

/// All calendar state, owned by whichever front end is driving it.
///
/// Any cursor move that changes the displayed month clears the selection and
/// the note buffer, so a selected date always lies in the displayed month.
///
/// Store operations return whether the notes or events changed, which tells
/// the caller when to persist.
#[derive(Debug, Clone)]
pub struct CalendarState {
    today: NaiveDate,
    cursor: CalendarCursor,
    selected: Option<DateKey>,
    note_buffer: String,
    notes: NoteStore,
    events: EventStore,
    holidays: HolidayCalendar,
}

impl CalendarState {
    /// Starts on the month containing `today` with nothing selected.
    pub fn new(
        today: NaiveDate,
        notes: NoteStore,
        events: EventStore,
        holidays: HolidayCalendar,
    ) -> Self {
        CalendarState {
            today,
            cursor: CalendarCursor::containing(today),
            selected: None,
            note_buffer: String::new(),
            notes,
            events,
            holidays,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    pub fn selected(&self) -> Option<DateKey> {
        self.selected
    }

    pub fn note_buffer(&self) -> &str {
        &self.note_buffer
    }

    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }

    pub fn events(&self) -> &EventStore {
        &self.events
    }

    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    pub fn grid(&self) -> MonthGrid {
        MonthGrid::build(self.cursor.month_index(), self.cursor.year())
    }

    // NAVIGATION:

    pub fn change_month(&mut self, offset: i32) {
        self.move_cursor(self.cursor.shifted(offset));
    }

    pub fn jump_to_today(&mut self) {
        self.move_cursor(CalendarCursor::containing(self.today));
    }

    /// Month picker; `month_index` is 0-based and clamped to December.
    pub fn select_month(&mut self, month_index: u32) {
        self.move_cursor(self.cursor.with_month(month_index));
    }

    pub fn select_year(&mut self, year: i32) {
        self.move_cursor(self.cursor.with_year(year));
    }

    fn move_cursor(&mut self, cursor: CalendarCursor) {
        if cursor == self.cursor {
            return;
        }
        self.cursor = cursor;
        self.clear_selection();
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.note_buffer.clear();
    }

    // SELECTION:

    /// Select `day` of the displayed month and load its note into the buffer.
    /// Returns false if the month has no such day.
    pub fn select_date(&mut self, day: u32) -> bool {
        let Some(key) = self.cursor.date_key(day) else {
            return false;
        };
        self.selected = Some(key);
        self.note_buffer = self.notes.get(&key).unwrap_or_default().to_string();
        true
    }

    /// Move the cursor to the month of `key` and select it.
    pub fn select_key(&mut self, key: DateKey) {
        self.move_cursor(CalendarCursor::new(key.month_index(), key.year()));
        self.select_date(key.day());
    }

    pub fn set_note_buffer(&mut self, text: impl Into<String>) {
        self.note_buffer = text.into();
    }

    // STORE OPERATIONS:

    /// Store the buffer as the selected date's note.
    pub fn save_note(&mut self) -> bool {
        let Some(key) = self.selected else {
            return false;
        };
        if self.notes.get(&key) == Some(self.note_buffer.as_str()) {
            return false;
        }
        self.notes.upsert(key, self.note_buffer.clone());
        true
    }

    /// Remove the selected date's note and clear the buffer.
    pub fn delete_note(&mut self) -> bool {
        let Some(key) = self.selected else {
            return false;
        };
        self.note_buffer.clear();
        self.notes.remove(&key)
    }

    /// Append an event to the selected date. A draft with a blank or cancelled
    /// field leaves everything untouched.
    pub fn add_event(&mut self, draft: EventDraft) -> bool {
        let Some(key) = self.selected else {
            return false;
        };
        let Some(record) = draft.into_record(key) else {
            return false;
        };
        self.events.push(record);
        true
    }

    /// Remove the event at `index` (0-based) from the selected date.
    pub fn delete_event(&mut self, index: usize) -> bool {
        let Some(key) = self.selected else {
            return false;
        };
        self.events.remove(&key, index).is_some()
    }

    // DISPLAY QUERIES (days of the displayed month):

    pub fn is_holiday(&self, day: u32) -> Option<&str> {
        let key = self.cursor.date_key(day)?;
        self.holidays.resolve(&key)
    }

    pub fn is_today(&self, day: u32) -> bool {
        self.cursor.date_key(day) == Some(DateKey::from(self.today))
    }

    pub fn has_events(&self, day: u32) -> bool {
        self.cursor
            .date_key(day)
            .is_some_and(|key| self.events.has_events(&key))
    }

    pub fn note_for_day(&self, day: u32) -> Option<&str> {
        let key = self.cursor.date_key(day)?;
        self.notes.get(&key)
    }

    pub fn selected_events(&self) -> &[EventRecord] {
        match &self.selected {
            Some(key) => self.events.for_date(key),
            None => &[],
        }
    }

    pub fn selected_holiday(&self) -> Option<&str> {
        self.holidays.resolve(self.selected.as_ref()?)
    }
}
