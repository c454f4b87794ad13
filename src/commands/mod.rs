//! CLI command implementations
//!
//! This module contains implementations of the commands supported by the
//! CLI application using the Command pattern.

pub mod command_traits;
pub mod compose_command;

pub use command_traits::{Command, CommandFactory};
pub use compose_command::ComposeCommand;

use clap::ArgMatches;

use crate::errors::SlitscanResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
pub struct SlitscanCommandFactory;

impl SlitscanCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        SlitscanCommandFactory
    }
}

impl<'a> CommandFactory<'a> for SlitscanCommandFactory {
    fn create_command(
        &self,
        args: &ArgMatches,
        logger: &'a Logger,
    ) -> SlitscanResult<Box<dyn Command + 'a>> {
        // Composition is the tool's single operation
        Ok(Box::new(ComposeCommand::new(args, logger)?))
    }
}
