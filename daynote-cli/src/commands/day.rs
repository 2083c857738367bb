use anyhow::Result;
use daynote_core::DateKey;
use daynote_core::session::Session;
use daynote_core::storage::Storage;

use crate::render::render_day;

pub fn run<S: Storage>(session: &mut Session<S>, date: DateKey) -> Result<()> {
    session.select_key(date);

    if let Some(panel) = render_day(session.state()) {
        println!("{}", panel);
    }

    Ok(())
}
