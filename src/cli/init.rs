//! Init command - create the user config file

use anyhow::Result;
use console::style;
use qrsafe::config::UserConfig;

/// Run the init command
pub fn run() -> Result<()> {
    let (config_path, created) = UserConfig::init_user_config()?;

    if created {
        println!(
            "{} Created {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        println!(
            "\n{}",
            style("Edit it to change probe timeouts, the User-Agent or the default output format.")
                .dim()
        );
    } else {
        println!(
            "{} Config already exists at {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
    }

    Ok(())
}
