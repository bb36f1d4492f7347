use clap::{Args, Subcommand};

use crate::config::{AppConfig, CONFIG_PATH_VAR};
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
}

pub fn run(config: &AppConfig, command: ConfigCommand) -> AppResult<String> {
    match command {
        ConfigCommand::Show => Ok(show(config)),
    }
}

fn show(config: &AppConfig) -> String {
    let source = config
        .source
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| format!("<not set, use {CONFIG_PATH_VAR}>"));

    [
        format!("Configuration file: {source}"),
        format!("Output format: {}", config.output.as_str()),
        format!("Default priority: {}", config.default_priority.as_str()),
        format!("Project id: {}", config.project_id),
    ]
    .join("\n")
}
