use anyhow::Result;
use daynote_core::DateKey;
use daynote_core::session::Session;
use daynote_core::storage::Storage;
use daynote_core::store::EventDraft;
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::render::render_event;

pub fn add<S: Storage>(
    session: &mut Session<S>,
    date: DateKey,
    title: Option<String>,
    time: Option<String>,
) -> Result<()> {
    session.select_key(date);

    let draft = capture_draft(title, time)?;
    let Some((title, _)) = draft.validate() else {
        println!("{}", "Cancelled: an event needs a title and a time".dimmed());
        return Ok(());
    };

    session.add_event(draft);
    println!("{}", format!("Added: {}", title).green());
    print_events(session);

    Ok(())
}

/// `index` is 1-based, as listed by `daynote day`.
pub fn remove<S: Storage>(session: &mut Session<S>, date: DateKey, index: usize) -> Result<()> {
    session.select_key(date);

    let removed = index
        .checked_sub(1)
        .is_some_and(|i| session.delete_event(i));

    if removed {
        println!("{}", format!("Deleted event #{} on {}", index, date).red());
    } else {
        println!("{}", format!("No event #{} on {}", index, date).yellow());
    }
    print_events(session);

    Ok(())
}

/// Collect title and time, prompting on the terminal for whichever was not given.
pub fn capture_draft(title: Option<String>, time: Option<String>) -> Result<EventDraft> {
    fill_draft(title, time, prompt_optional)
}

/// A blank title cancels before the time is asked for.
fn fill_draft<F>(title: Option<String>, time: Option<String>, mut prompt: F) -> Result<EventDraft>
where
    F: FnMut(&str) -> Result<String>,
{
    let title = match title {
        Some(t) => t,
        None => prompt("  Event title")?,
    };
    if title.trim().is_empty() {
        return Ok(EventDraft::default());
    }

    let time = match time {
        Some(t) => t,
        None => prompt("  Event time (e.g. 10:00 AM)")?,
    };

    Ok(EventDraft::new(title, time))
}

fn prompt_optional(prompt: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

fn print_events<S: Storage>(session: &Session<S>) {
    for (i, event) in session.state().selected_events().iter().enumerate() {
        println!("  {}", render_event(i, event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_cancels_before_time() {
        let mut asked = Vec::new();
        let draft = fill_draft(Some("   ".to_string()), None, |p| {
            asked.push(p.to_string());
            Ok("10:00".to_string())
        })
        .unwrap();

        assert_eq!(draft, EventDraft::default());
        assert!(draft.validate().is_none());
        assert!(asked.is_empty());
    }

    #[test]
    fn test_prompts_only_for_missing_fields() {
        let mut asked = Vec::new();
        let draft = fill_draft(Some("Standup".to_string()), None, |p| {
            asked.push(p.to_string());
            Ok("9:30".to_string())
        })
        .unwrap();

        assert_eq!(draft, EventDraft::new("Standup", "9:30"));
        assert_eq!(asked.len(), 1);
        assert!(asked[0].contains("time"));
    }

    #[test]
    fn test_blank_prompted_time_cancels() {
        let draft = fill_draft(None, None, |p| {
            Ok(if p.contains("title") { "Lunch" } else { "" }.to_string())
        })
        .unwrap();
        assert!(draft.validate().is_none());
    }
}
