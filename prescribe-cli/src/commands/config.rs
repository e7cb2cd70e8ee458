//! Config command - print the configuration in effect, or the defaults

use crate::config::Config;
use crate::error::{CliError, CliResult};
use std::path::PathBuf;

pub fn execute(config: &Config, example: bool, output: Option<PathBuf>) -> CliResult<()> {
    let chosen = if example { Config::default() } else { config.clone() };

    match output {
        Some(path) => {
            chosen
                .save_to_file(&path)
                .map_err(|err| CliError::config(format!("{:#}", err)))?;
            log::info!("Wrote configuration to {}", path.display());
        }
        None => {
            let content = chosen
                .to_toml()
                .map_err(|err| CliError::config(format!("{:#}", err)))?;
            print!("{}", content);
        }
    }

    Ok(())
}
