//! Terminal rendering for the month grid and the day detail panel.

use daynote_core::grid::{MonthGrid, WEEKDAY_NAMES, month_name};
use daynote_core::state::CalendarState;
use daynote_core::store::EventRecord;
use owo_colors::OwoColorize;

/// Width of one grid cell, day number plus marker.
const CELL_WIDTH: usize = 5;

/// Marker shown after a day number: `•` for events, `*` for a note.
fn day_marker(state: &CalendarState, day: u32) -> &'static str {
    if state.has_events(day) {
        "•"
    } else if state.note_for_day(day).is_some() {
        "*"
    } else {
        " "
    }
}

/// Uncolored cell text, always CELL_WIDTH characters wide.
fn cell_text(state: &CalendarState, day: Option<u32>) -> String {
    match day {
        Some(day) => format!("{:>3}{} ", day, day_marker(state, day)),
        None => " ".repeat(CELL_WIDTH),
    }
}

fn render_cell(state: &CalendarState, grid: &MonthGrid, day: Option<u32>) -> String {
    let text = cell_text(state, day);
    let Some(day) = day else {
        return text;
    };

    let selected = state
        .selected()
        .is_some_and(|key| state.cursor().date_key(day) == Some(key));

    let styled = if state.is_holiday(day).is_some() {
        text.red().bold().to_string()
    } else if grid.is_sunday(day) {
        text.red().to_string()
    } else {
        text
    };

    if state.is_today(day) {
        styled.reversed().to_string()
    } else if selected {
        styled.underline().to_string()
    } else {
        styled
    }
}

pub fn render_month(state: &CalendarState) -> String {
    let mut lines = Vec::new();
    let grid = state.grid();

    lines.push(format!("  {}", state.cursor().title().bold()));

    let header: String = WEEKDAY_NAMES
        .iter()
        .map(|name| format!("{:>4} ", name))
        .collect();
    lines.push(header.dimmed().to_string());

    for week in &grid.weeks {
        let row: String = week.iter().map(|day| render_cell(state, &grid, *day)).collect();
        lines.push(row);
    }

    let holidays = state.holidays().in_month(&state.cursor());
    if !holidays.is_empty() {
        lines.push(String::new());
        for (day, name) in holidays {
            lines.push(format!("  {:>2} {}", day, name.red()));
        }
    }

    lines.join("\n")
}

pub fn render_event(index: usize, event: &EventRecord) -> String {
    format!("{}. {} - {}", index + 1, event.time.dimmed(), event.title)
}

/// The detail panel for the selected date, or nothing if no date is selected.
pub fn render_day(state: &CalendarState) -> Option<String> {
    let key = state.selected()?;
    let mut lines = Vec::new();

    let heading = format!("{} {}, {}", month_name(key.month_index()), key.day(), key.year());
    match state.selected_holiday() {
        Some(holiday) => lines.push(format!(
            "{}  {}",
            heading.bold(),
            format!("Public Holiday: {holiday}").red()
        )),
        None => lines.push(heading.bold().to_string()),
    }

    lines.push(String::new());
    lines.push("Events".underline().to_string());
    let events = state.selected_events();
    if events.is_empty() {
        lines.push("  No events for this day".dimmed().to_string());
    } else {
        for (i, event) in events.iter().enumerate() {
            lines.push(format!("  {}", render_event(i, event)));
        }
    }

    lines.push(String::new());
    lines.push("Notes".underline().to_string());
    match state.notes().get(&key) {
        Some(note) => lines.extend(note.lines().map(|l| format!("  {l}"))),
        None => lines.push("  No note".dimmed().to_string()),
    }

    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use daynote_core::DateKey;
    use daynote_core::holiday::HolidayCalendar;
    use daynote_core::store::{EventDraft, EventStore, NoteStore};

    fn state() -> CalendarState {
        let today: DateKey = "2024-1-10".parse().unwrap();
        CalendarState::new(
            today.to_naive_date(),
            NoteStore::new(),
            EventStore::new(),
            HolidayCalendar::builtin(),
        )
    }

    #[test]
    fn test_cells_have_fixed_width() {
        let state = state();
        assert_eq!(cell_text(&state, None).len(), CELL_WIDTH);
        assert_eq!(cell_text(&state, Some(1)), "  1  ");
        assert_eq!(cell_text(&state, Some(31)), " 31  ");
    }

    #[test]
    fn test_sunday_column_is_highlighted() {
        let state = state();
        let grid = state.grid();
        // January 7 2024 is a Sunday with no holiday
        assert_ne!(render_cell(&state, &grid, Some(7)), cell_text(&state, Some(7)));
        assert_eq!(render_cell(&state, &grid, Some(8)), cell_text(&state, Some(8)));
    }

    #[test]
    fn test_markers_prefer_events_over_notes() {
        let mut state = state();
        state.select_date(4);
        state.set_note_buffer("note");
        state.save_note();
        assert_eq!(day_marker(&state, 4), "*");

        state.add_event(EventDraft::new("Meeting", "10:00"));
        assert_eq!(day_marker(&state, 4), "•");
        assert_eq!(day_marker(&state, 5), " ");
    }

    #[test]
    fn test_day_panel_requires_selection() {
        let mut state = state();
        assert!(render_day(&state).is_none());

        state.select_date(26);
        let panel = render_day(&state).unwrap();
        assert!(panel.contains("January 26, 2024"));
        assert!(panel.contains("Public Holiday: Republic Day"));
        assert!(panel.contains("No events for this day"));
    }

    #[test]
    fn test_month_lists_holidays() {
        let month = render_month(&state());
        assert!(month.contains("January 2024"));
        assert!(month.contains("New Year's Day"));
        assert!(month.contains("Makar Sankranti/Pongal"));
    }
}
