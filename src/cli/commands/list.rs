//! List command implementation.
//!
//! The `sprout list` command shows the templates in the collection.

use crate::cli::args::ListArgs;
use crate::error::{Result, SproutError};
use crate::registry::TemplateRegistry;
use crate::ui::theme::SproutTheme;
use crate::ui::UserInterface;

use super::dispatcher::{fetch_collection, Command, CommandResult};

/// The list command implementation.
pub struct ListCommand<'r> {
    registry: &'r TemplateRegistry,
    args: ListArgs,
    refresh: bool,
}

impl<'r> ListCommand<'r> {
    /// Create a new list command.
    pub fn new(registry: &'r TemplateRegistry, args: ListArgs, refresh: bool) -> Self {
        Self {
            registry,
            args,
            refresh,
        }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        fetch_collection(self.registry, self.refresh, ui)?;
        let catalog = self.registry.list_templates()?;

        if catalog.dropped() > 0 {
            ui.warning(&format!(
                "{} declared template(s) skipped: directory not found",
                catalog.dropped()
            ));
        }

        if self.args.json {
            let json = serde_json::to_string_pretty(catalog.templates())
                .map_err(|e| SproutError::Other(e.into()))?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        if catalog.is_empty() {
            ui.warning("No templates available");
            return Ok(CommandResult::success());
        }

        let theme = SproutTheme::detect();
        for template in &catalog {
            ui.data(&theme.format_template(&template.name, &template.description));
        }

        Ok(CommandResult::success())
    }
}
