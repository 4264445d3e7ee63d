//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the config command.
pub fn execute_config(args: ConfigArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let path = Config::path()?;
            let rendered = toml::to_string_pretty(config)
                .map_err(|e| CliError::Config(format!("Failed to render config: {}", e)))?;

            println!("{}", formatter.info(&format!("Config file: {}", path.display())));
            println!("{}", rendered);
        }
        ConfigAction::Init => {
            let path = Config::path()?;
            if path.exists() {
                return Err(CliError::Config(format!(
                    "Config file already exists at {}",
                    path.display()
                )));
            }

            Config::default().save_to(&path)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default config to {}", path.display()))
            );
        }
    }

    Ok(())
}
