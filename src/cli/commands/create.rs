//! Create command implementation.
//!
//! The `sprout create` command starts a new project directory from a
//! template. Unlike `copy`, the directory must not exist yet.

use crate::cli::args::CreateArgs;
use crate::error::{Result, SproutError};
use crate::registry::TemplateRegistry;
use crate::ui::UserInterface;

use super::copy::report_copy;
use super::dispatcher::{fetch_collection, Command, CommandResult};

/// The create command implementation.
pub struct CreateCommand<'r> {
    registry: &'r TemplateRegistry,
    args: CreateArgs,
    refresh: bool,
}

impl<'r> CreateCommand<'r> {
    /// Create a new create command.
    pub fn new(registry: &'r TemplateRegistry, args: CreateArgs, refresh: bool) -> Self {
        Self {
            registry,
            args,
            refresh,
        }
    }
}

impl Command for CreateCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = &self.args.project;
        if project.exists() {
            return Err(SproutError::DestinationExists {
                path: project.clone(),
            });
        }

        fetch_collection(self.registry, self.refresh, ui)?;
        // Resolve first so an unknown name leaves no empty directory behind.
        self.registry.resolve(&self.args.template)?;

        let result = self
            .registry
            .copy_template_files(&self.args.template, project)?;

        report_copy(ui, &self.args.template, &result);
        ui.message(&format!("Project created at {}", project.display()));
        Ok(CommandResult::success())
    }
}
