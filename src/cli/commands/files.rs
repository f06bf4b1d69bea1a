//! Files command implementation.
//!
//! The `sprout files` command previews what a copy would create.

use crate::cli::args::FilesArgs;
use crate::error::Result;
use crate::registry::TemplateRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{fetch_collection, Command, CommandResult};

/// The files command implementation.
pub struct FilesCommand<'r> {
    registry: &'r TemplateRegistry,
    args: FilesArgs,
    refresh: bool,
}

impl<'r> FilesCommand<'r> {
    /// Create a new files command.
    pub fn new(registry: &'r TemplateRegistry, args: FilesArgs, refresh: bool) -> Self {
        Self {
            registry,
            args,
            refresh,
        }
    }
}

impl Command for FilesCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        fetch_collection(self.registry, self.refresh, ui)?;
        let files = self.registry.list_template_files(&self.args.template)?;

        let shown = self.args.limit.unwrap_or(files.len()).min(files.len());
        for file in &files[..shown] {
            ui.data(&file.display().to_string());
        }
        if shown < files.len() {
            ui.data("...");
        }

        ui.message(&format!(
            "{} files in template '{}'",
            files.len(),
            self.args.template
        ));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::test_support::serve_collection;
    use crate::error::SproutError;
    use crate::ui::MockUI;
    use std::path::Path;

    fn args(template: &str, limit: Option<usize>) -> FilesArgs {
        FilesArgs {
            template: template.to_string(),
            limit,
        }
    }

    #[test]
    fn prints_relative_paths_in_walk_order() {
        let (_server, registry) = serve_collection();
        let mut ui = MockUI::new();

        FilesCommand::new(&registry, args("alpha", None), false)
            .execute(&mut ui)
            .unwrap();

        let expected: Vec<String> = [
            Path::new("README.md").to_path_buf(),
            Path::new("src").join("main.py"),
            Path::new("src").join("util.py"),
        ]
        .iter()
        .map(|p| p.display().to_string())
        .collect();
        assert_eq!(ui.data_lines(), expected.as_slice());
    }

    #[test]
    fn limit_truncates_with_ellipsis() {
        let (_server, registry) = serve_collection();
        let mut ui = MockUI::new();

        FilesCommand::new(&registry, args("alpha", Some(1)), false)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.data_lines(), ["README.md", "..."]);
    }

    #[test]
    fn limit_above_count_shows_everything() {
        let (_server, registry) = serve_collection();
        let mut ui = MockUI::new();

        FilesCommand::new(&registry, args("alpha", Some(10)), false)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.data_lines().len(), 3);
    }

    #[test]
    fn unknown_template_is_an_error() {
        let (_server, registry) = serve_collection();
        let mut ui = MockUI::new();

        let err = FilesCommand::new(&registry, args("ghost", None), false)
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, SproutError::TemplateNotFound { .. }));
    }
}
