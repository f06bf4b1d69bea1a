//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::sync::Arc;

use crate::cache::CollectionSnapshot;
use crate::cli::args::{Cli, Commands};
use crate::config::{load_settings, Settings};
use crate::error::Result;
use crate::registry::TemplateRegistry;
use crate::ui::UserInterface;

use super::completions::CompletionsCommand;
use super::copy::CopyCommand;
use super::create::CreateCommand;
use super::files::FilesCommand;
use super::list::ListCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use (0 for success).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Load settings for a CLI invocation and apply flag overrides.
///
/// `--source` (or `SPROUT_SOURCE`) and `--timeout` win over the settings file.
pub fn effective_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = load_settings(cli.config.as_deref())?;

    if let Some(ref url) = cli.source {
        settings.source.url = url.clone();
    }
    if let Some(secs) = cli.timeout {
        settings.source.timeout = secs;
    }

    Ok(settings)
}

/// Fetch the collection behind a spinner.
///
/// Later registry calls in the same command reuse the cached snapshot.
pub(crate) fn fetch_collection(
    registry: &TemplateRegistry,
    refresh: bool,
    ui: &mut dyn UserInterface,
) -> Result<Arc<CollectionSnapshot>> {
    let cache = registry.cache();
    if !refresh {
        if let Some(snapshot) = cache.current() {
            return Ok(snapshot);
        }
    }

    let mut spinner = ui.start_spinner("Fetching template collection...");
    match cache.get_or_fetch(refresh) {
        Ok(snapshot) => {
            spinner.finish_success(&format!(
                "Fetched {} templates",
                snapshot.catalog().len()
            ));
            Ok(snapshot)
        }
        Err(e) => {
            spinner.finish_error("Failed to fetch template collection");
            Err(e)
        }
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug)]
pub struct CommandDispatcher {
    settings: Settings,
    refresh: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher using the given settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            refresh: false,
        }
    }

    /// Force a fresh fetch of the collection.
    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    /// Get the effective settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. The registry is only built for commands that need it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Commands::Completions(args) = &cli.command {
            return CompletionsCommand::new(args.clone()).execute(ui);
        }

        let registry = TemplateRegistry::from_settings(&self.settings)?;
        self.dispatch_with(&registry, &cli.command, ui)
    }

    /// Execute a command against an existing registry.
    pub fn dispatch_with(
        &self,
        registry: &TemplateRegistry,
        command: &Commands,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match command {
            Commands::List(args) => {
                ListCommand::new(registry, args.clone(), self.refresh).execute(ui)
            }
            Commands::Files(args) => {
                FilesCommand::new(registry, args.clone(), self.refresh).execute(ui)
            }
            Commands::Copy(args) => {
                CopyCommand::new(registry, args.clone(), self.refresh).execute(ui)
            }
            Commands::Create(args) => {
                CreateCommand::new(registry, args.clone(), self.refresh).execute(ui)
            }
            Commands::Completions(args) => CompletionsCommand::new(args.clone()).execute(ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::ListArgs;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        assert_eq!(CommandResult::success().exit_code, 0);
    }

    #[test]
    fn flags_override_settings_file() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.yml");
        fs::write(
            &config,
            "source:\n  url: https://example.com/file.zip\n  timeout: 10\n",
        )
        .unwrap();
        let path = config.to_string_lossy().to_string();

        let cli = Cli::try_parse_from([
            "sprout",
            "--config",
            path.as_str(),
            "--source",
            "https://example.com/flag.zip",
            "list",
        ])
        .unwrap();
        let settings = effective_settings(&cli).unwrap();

        assert_eq!(settings.source.url, "https://example.com/flag.zip");
        assert_eq!(settings.source.timeout, 10);
    }

    #[test]
    fn timeout_flag_overrides_default() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.yml");
        fs::write(&config, "").unwrap();
        let path = config.to_string_lossy().to_string();

        let cli =
            Cli::try_parse_from(["sprout", "--config", path.as_str(), "--timeout", "5", "list"])
                .unwrap();
        let settings = effective_settings(&cli).unwrap();

        assert_eq!(settings.source.timeout, 5);
    }

    #[test]
    fn refresh_flag_is_carried() {
        let dispatcher = CommandDispatcher::new(Settings::default()).with_refresh(true);
        assert!(dispatcher.refresh);
    }

    #[test]
    fn dispatch_reports_fetch_failure() {
        let mut settings = Settings::default();
        settings.source.url = "http://127.0.0.1:1/repo.zip".to_string();
        settings.source.timeout = 2;
        let dispatcher = CommandDispatcher::new(settings);
        let registry = TemplateRegistry::from_settings(dispatcher.settings()).unwrap();
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch_with(
            &registry,
            &Commands::List(ListArgs::default()),
            &mut ui,
        );

        assert!(result.is_err());
        assert_eq!(ui.spinners(), ["Fetching template collection..."]);
    }
}
