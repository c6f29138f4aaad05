//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod context;
pub mod overlap_command;
pub mod apply_command;
pub mod preview_command;
#[cfg(test)]
mod tests;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use context::RunContext;
pub use overlap_command::OverlapCommand;
pub use apply_command::ApplyCommand;
pub use preview_command::PreviewCommand;

use clap::ArgMatches;
use crate::aligner::errors::AlignResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
pub struct RunalignCommandFactory;

impl RunalignCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        RunalignCommandFactory
    }
}

impl Default for RunalignCommandFactory {
    fn default() -> Self {
        RunalignCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for RunalignCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> AlignResult<Box<dyn Command + 'a>> {
        if args.get_one::<String>("preview").is_some() {
            Ok(Box::new(PreviewCommand::new(args, logger)?))
        } else if args.get_flag("apply") {
            Ok(Box::new(ApplyCommand::new(args, logger)?))
        } else {
            // Default to reporting overlap windows
            Ok(Box::new(OverlapCommand::new(args, logger)?))
        }
    }
}
