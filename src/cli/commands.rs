//! Command dispatch: load settings, wire services, run the requested command

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{self, Settings};
use crate::domain;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Completion { shell }) => _completion(*shell),
        Some(Commands::Config {
            command: ConfigCommands::Template,
        }) => _config_template(),
        Some(Commands::Config {
            command: ConfigCommands::Path,
        }) => _config_path(),
        Some(Commands::Config {
            command: ConfigCommands::Show,
        }) => _config_show(&load_settings(cli)?),
        Some(Commands::Lines) => _lines(&load_settings(cli)?),
        None | Some(Commands::Run) => _run(ServiceContainer::new(load_settings(cli)?)),
    }
}

/// Resolve all config layers, ending with the command-line overrides.
pub fn load_settings(cli: &Cli) -> CliResult<Settings> {
    if let Some(path) = &cli.config {
        let expanded = config::expand_path(path);
        if !expanded.is_file() {
            return Err(CliError::InvalidArgs(format!(
                "config file not found: {}",
                expanded.display()
            )));
        }
    }
    let settings = Settings::load(cli.config.as_deref())?.apply_overrides(&cli.overrides());
    debug!("effective settings: {:?}", settings);
    Ok(settings)
}

#[instrument(skip(container))]
fn _run(container: ServiceContainer) -> CliResult<()> {
    container
        .scope_service()
        .run(&container.settings.greeting())?;
    Ok(())
}

#[instrument]
fn _lines(settings: &Settings) -> CliResult<()> {
    let lines =
        domain::lines(&settings.greeting()).map_err(|e| InfraError::io("record lines", e))?;
    for (i, line) in lines.iter().enumerate() {
        output::numbered(i + 1, line).map_err(|e| InfraError::io("write lines", e))?;
    }
    Ok(())
}

#[instrument]
fn _config_show(settings: &Settings) -> CliResult<()> {
    let toml = settings.to_toml()?;
    output::header("# effective configuration")
        .and_then(|()| output::info(&toml))
        .map_err(|e| InfraError::io("write config", e))?;
    Ok(())
}

#[instrument]
fn _config_template() -> CliResult<()> {
    output::info(&Settings::template()).map_err(|e| InfraError::io("write template", e))?;
    Ok(())
}

#[instrument]
fn _config_path() -> CliResult<()> {
    let text = match config::global_config_path() {
        Some(path) => {
            let state = if path.exists() { "exists" } else { "not found" };
            format!("{} ({})", path.display(), state)
        }
        None => "no config directory available on this platform".to_string(),
    };
    output::info(&text).map_err(|e| InfraError::io("write config path", e))?;
    Ok(())
}

#[instrument]
fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, name, &mut buf);
    io::Write::write_all(&mut io::stdout().lock(), &buf)
        .map_err(|e| InfraError::io("write completions", e))?;
    Ok(())
}
