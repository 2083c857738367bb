use std::path::PathBuf;

use anyhow::Result;
use daynote_core::daynote_config::DaynoteConfig;
use owo_colors::OwoColorize;

pub fn run(config: DaynoteConfig, data_dir: Option<PathBuf>) -> Result<()> {
    let config_path = DaynoteConfig::config_path()?;

    let config = match data_dir {
        Some(dir) => {
            let updated = DaynoteConfig {
                data_dir: dir,
                ..config
            };
            updated.save()?;
            println!("{}", "Updated data directory".green());
            updated
        }
        None => config,
    };

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", config.data_path().display());

    println!("{}", "Holidays".bold());
    println!(
        "  Builtin tables: {}",
        if config.builtin_holidays { "on" } else { "off" }
    );
    println!(
        "  Extra: {} fixed, {} date-specific",
        config.holidays.fixed.len(),
        config.holidays.variable.len()
    );

    Ok(())
}
