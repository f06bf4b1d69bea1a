//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command of one invocation
//! shares a single [`TemplateRegistry`], so the collection is fetched at
//! most once per process.
//!
//! [`TemplateRegistry`]: crate::registry::TemplateRegistry

pub mod completions;
pub mod copy;
pub mod create;
pub mod dispatcher;
pub mod files;
pub mod list;

pub use dispatcher::{effective_settings, Command, CommandDispatcher, CommandResult};
