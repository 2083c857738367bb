use anyhow::Result;
use daynote_core::DateKey;
use daynote_core::session::Session;
use daynote_core::storage::Storage;
use owo_colors::OwoColorize;

pub fn run<S: Storage>(
    session: &mut Session<S>,
    date: DateKey,
    text: Option<String>,
    delete: bool,
) -> Result<()> {
    session.select_key(date);

    if delete {
        if session.delete_note() {
            println!("{}", format!("Deleted note for {}", date).red());
        } else {
            println!("{}", format!("No note for {}", date).dimmed());
        }
        return Ok(());
    }

    match text {
        Some(text) => {
            session.set_note_buffer(text);
            session.save_note();
            println!("{}", format!("Saved note for {}", date).green());
        }
        None => {
            let note = session.state().note_buffer();
            if note.is_empty() {
                println!("{}", format!("No note for {}", date).dimmed());
            } else {
                println!("{}", note);
            }
        }
    }

    Ok(())
}
