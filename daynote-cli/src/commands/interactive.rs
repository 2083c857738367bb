use anyhow::Result;
use daynote_core::grid::{MONTH_NAMES, days_in_month};
use daynote_core::session::Session;
use daynote_core::storage::Storage;
use dialoguer::{Editor, Input, Select};
use owo_colors::OwoColorize;

use super::event::capture_draft;
use crate::render::{render_day, render_event, render_month};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Action {
    PreviousMonth,
    NextMonth,
    Today,
    PickMonth,
    PickYear,
    SelectDay,
    EditNote,
    DeleteNote,
    AddEvent,
    DeleteEvent,
    Quit,
}

impl Action {
    fn label(&self) -> &'static str {
        match self {
            Action::PreviousMonth => "< Previous month",
            Action::NextMonth => "> Next month",
            Action::Today => "Today",
            Action::PickMonth => "Pick month",
            Action::PickYear => "Pick year",
            Action::SelectDay => "Select day",
            Action::EditNote => "Edit note",
            Action::DeleteNote => "Delete note",
            Action::AddEvent => "Add event",
            Action::DeleteEvent => "Delete event",
            Action::Quit => "Quit",
        }
    }
}

/// Actions on offer, given whether a date is selected and whether it has events.
fn available_actions(has_selection: bool, has_events: bool) -> Vec<Action> {
    let mut actions = vec![
        Action::PreviousMonth,
        Action::NextMonth,
        Action::Today,
        Action::PickMonth,
        Action::PickYear,
        Action::SelectDay,
    ];

    if has_selection {
        actions.extend([Action::EditNote, Action::DeleteNote, Action::AddEvent]);
        if has_events {
            actions.push(Action::DeleteEvent);
        }
    }

    actions.push(Action::Quit);
    actions
}

pub fn run<S: Storage>(session: &mut Session<S>) -> Result<()> {
    loop {
        println!();
        println!("{}", render_month(session.state()));
        if let Some(panel) = render_day(session.state()) {
            println!();
            println!("{}", panel);
        }
        println!();

        let state = session.state();
        let actions = available_actions(
            state.selected().is_some(),
            !state.selected_events().is_empty(),
        );
        let labels: Vec<_> = actions.iter().map(Action::label).collect();

        let choice = Select::new().items(&labels).default(0).interact()?;

        match actions[choice] {
            Action::PreviousMonth => session.change_month(-1),
            Action::NextMonth => session.change_month(1),
            Action::Today => session.jump_to_today(),
            Action::PickMonth => pick_month(session)?,
            Action::PickYear => pick_year(session)?,
            Action::SelectDay => select_day(session)?,
            Action::EditNote => edit_note(session)?,
            Action::DeleteNote => {
                session.delete_note();
            }
            Action::AddEvent => add_event(session)?,
            Action::DeleteEvent => delete_event(session)?,
            Action::Quit => return Ok(()),
        }
    }
}

fn pick_month<S: Storage>(session: &mut Session<S>) -> Result<()> {
    let current = session.state().cursor().month_index() as usize;
    let month = Select::new()
        .with_prompt("  Month")
        .items(&MONTH_NAMES)
        .default(current)
        .interact()?;
    session.select_month(month as u32);
    Ok(())
}

fn pick_year<S: Storage>(session: &mut Session<S>) -> Result<()> {
    let cursor = session.state().cursor();
    let years = cursor.year_options();
    let current = years.iter().position(|y| *y == cursor.year()).unwrap_or(0);

    let choice = Select::new()
        .with_prompt("  Year")
        .items(&years)
        .default(current)
        .interact()?;
    session.select_year(years[choice]);
    Ok(())
}

fn select_day<S: Storage>(session: &mut Session<S>) -> Result<()> {
    let cursor = session.state().cursor();
    let last = days_in_month(cursor.month_index(), cursor.year());

    let day: u32 = Input::new()
        .with_prompt(format!("  Day (1-{last})"))
        .validate_with(move |d: &u32| -> Result<(), String> {
            if (1..=last).contains(d) {
                Ok(())
            } else {
                Err(format!("Pick a day between 1 and {last}"))
            }
        })
        .interact_text()?;

    session.select_date(day);
    Ok(())
}

/// Opens the note in `$EDITOR`. Quitting the editor without saving keeps the note.
fn edit_note<S: Storage>(session: &mut Session<S>) -> Result<()> {
    let edited = Editor::new().edit(session.state().note_buffer())?;

    match edited.map(strip_editor_newline) {
        Some(text) => {
            session.set_note_buffer(text);
            session.save_note();
        }
        None => println!("{}", "Note unchanged".dimmed()),
    }
    Ok(())
}

/// Editors append a final newline; the note keeps every other line break.
fn strip_editor_newline(text: String) -> String {
    match text.strip_suffix('\n') {
        Some(stripped) => stripped.strip_suffix('\r').unwrap_or(stripped).to_string(),
        None => text,
    }
}

fn add_event<S: Storage>(session: &mut Session<S>) -> Result<()> {
    let draft = capture_draft(None, None)?;
    if !session.add_event(draft) {
        println!("{}", "Cancelled".dimmed());
    }
    Ok(())
}

fn delete_event<S: Storage>(session: &mut Session<S>) -> Result<()> {
    let mut items: Vec<String> = session
        .state()
        .selected_events()
        .iter()
        .enumerate()
        .map(|(i, e)| render_event(i, e))
        .collect();
    items.push("Cancel".to_string());

    let choice = Select::new()
        .with_prompt("  Delete which event?")
        .items(&items)
        .default(items.len() - 1)
        .interact()?;

    if choice < items.len() - 1 {
        session.delete_event(choice);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_actions_need_selection() {
        let actions = available_actions(false, false);
        assert!(!actions.contains(&Action::EditNote));
        assert!(!actions.contains(&Action::AddEvent));
        assert_eq!(actions.last(), Some(&Action::Quit));
    }

    #[test]
    fn test_editor_result_keeps_inner_line_breaks() {
        assert_eq!(
            strip_editor_newline("first line\nsecond line\n".to_string()),
            "first line\nsecond line"
        );
        assert_eq!(strip_editor_newline("crlf\r\n".to_string()), "crlf");
        assert_eq!(strip_editor_newline("no newline".to_string()), "no newline");
        assert_eq!(strip_editor_newline("\n".to_string()), "");
    }

    #[test]
    fn test_delete_event_only_with_events() {
        assert!(!available_actions(true, false).contains(&Action::DeleteEvent));
        assert!(available_actions(true, true).contains(&Action::DeleteEvent));
        assert!(available_actions(true, true).contains(&Action::DeleteNote));
    }
}
