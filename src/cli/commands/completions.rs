//! `sprout completions <SHELL>`: print a completion script on stdout.
//!
//! ```text
//! sprout completions zsh > ~/.zfunc/_sprout
//! ```

use std::io;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Binary name the completion script registers for.
const BIN_NAME: &str = "sprout";

/// Writes the completion script for one shell.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

/// Render the completion script for `shell` into `out`.
pub fn write_completions(shell: Shell, out: &mut dyn io::Write) {
    clap_complete::generate(shell, &mut Cli::command(), BIN_NAME, out);
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        write_completions(self.args.shell, &mut io::stdout());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut buf = Vec::new();
        write_completions(shell, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bash_script_registers_binary() {
        let output = script(Shell::Bash);
        assert!(output.contains("complete"));
        assert!(output.contains(BIN_NAME));
    }

    #[test]
    fn bash_script_knows_template_commands() {
        let output = script(Shell::Bash);
        for sub in ["list", "files", "copy", "create"] {
            assert!(output.contains(sub), "missing {}", sub);
        }
    }

    #[test]
    fn zsh_script_completes_global_flags() {
        let output = script(Shell::Zsh);
        assert!(output.contains("--source"));
        assert!(output.contains("--refresh"));
    }

    #[test]
    fn every_supported_shell_renders() {
        for shell in [Shell::Bash, Shell::Elvish, Shell::Fish, Shell::PowerShell, Shell::Zsh] {
            assert!(!script(shell).is_empty(), "{} produced nothing", shell);
        }
    }
}
