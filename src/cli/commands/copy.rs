//! Copy command implementation.
//!
//! The `sprout copy` command writes a template's files into a directory,
//! creating it if needed and reusing it if it exists.

use crate::cli::args::CopyArgs;
use crate::error::Result;
use crate::registry::{MaterializationResult, TemplateRegistry};
use crate::ui::UserInterface;

use super::dispatcher::{fetch_collection, Command, CommandResult};

/// The copy command implementation.
pub struct CopyCommand<'r> {
    registry: &'r TemplateRegistry,
    args: CopyArgs,
    refresh: bool,
}

impl<'r> CopyCommand<'r> {
    /// Create a new copy command.
    pub fn new(registry: &'r TemplateRegistry, args: CopyArgs, refresh: bool) -> Self {
        Self {
            registry,
            args,
            refresh,
        }
    }
}

impl Command for CopyCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        fetch_collection(self.registry, self.refresh, ui)?;
        let result = self
            .registry
            .copy_template_files(&self.args.template, &self.args.destination)?;

        report_copy(ui, &self.args.template, &result);
        Ok(CommandResult::success())
    }
}

/// Summarize a finished copy; list each file in verbose mode.
pub(crate) fn report_copy(
    ui: &mut dyn UserInterface,
    template: &str,
    result: &MaterializationResult,
) {
    if ui.output_mode().shows_detail() {
        for file in &result.files {
            ui.message(&format!("  {}", file.display()));
        }
    }
    ui.success(&format!(
        "Copied {} files from template '{}'",
        result.len(),
        template
    ));
}
