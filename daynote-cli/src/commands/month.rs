use anyhow::Result;
use daynote_core::cursor::{max_year, min_year};
use daynote_core::session::Session;
use daynote_core::storage::Storage;

use crate::render::render_month;

/// `month` is 1-based, as typed on the command line.
pub fn run<S: Storage>(session: &mut Session<S>, month: Option<u32>, year: Option<i32>) -> Result<()> {
    let (month, year) = validate_args(month, year)?;

    if let Some(month) = month {
        session.select_month(month - 1);
    }
    if let Some(year) = year {
        session.select_year(year);
    }

    println!("{}", render_month(session.state()));

    Ok(())
}

fn validate_args(month: Option<u32>, year: Option<i32>) -> Result<(Option<u32>, Option<i32>)> {
    if let Some(month) = month {
        if !(1..=12).contains(&month) {
            anyhow::bail!("Invalid month '{}'. Expected 1-12", month);
        }
    }
    if let Some(year) = year {
        if !(min_year()..=max_year()).contains(&year) {
            anyhow::bail!(
                "Invalid year '{}'. Expected {} to {}",
                year,
                min_year(),
                max_year()
            );
        }
    }
    Ok((month, year))
}
