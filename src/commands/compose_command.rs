//! Slit-scan composition command
//!
//! This module implements the command that runs the whole pipeline: scan
//! and decode the frame sequence, compose the strips onto the output
//! canvas, and write the result.

use clap::ArgMatches;
use log::info;

use crate::axis::AxisMode;
use crate::commands::command_traits::Command;
use crate::compositor::{SliceCompositor, SliceParams};
use crate::errors::{SlitscanError, SlitscanResult};
use crate::loader::{FilePattern, SequenceLoader};
use crate::utils::logger::Logger;

/// Command for composing a slit-scan image from a frame sequence
pub struct ComposeCommand<'a> {
    /// Input filename pattern with one integer placeholder
    input_pattern: String,
    /// Path to the output image file
    output_file: String,
    /// Composition direction
    mode: AxisMode,
    /// Validated strip thickness and sampling offset
    params: SliceParams,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ComposeCommand<'a> {
    /// Create a new compose command
    ///
    /// Flag values are parsed and validated here, so every bad value
    /// surfaces as a usage error before any file is touched.
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ComposeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SlitscanResult<Self> {
        let input_pattern = args
            .get_one::<String>("input")
            .ok_or_else(|| SlitscanError::Usage("Missing input pattern".to_string()))?
            .clone();

        let output_file = args
            .get_one::<String>("output")
            .ok_or_else(|| SlitscanError::Usage("Missing output file path".to_string()))?
            .clone();

        // --across and --down override each other; the last one wins, and
        // across is the default
        let mode = if args.get_flag("down") {
            AxisMode::Down
        } else {
            AxisMode::Across
        };

        let offset_str = args
            .get_one::<String>("offset")
            .ok_or_else(|| SlitscanError::Usage("Missing offset value".to_string()))?;
        let offset = offset_str
            .parse::<f64>()
            .map_err(|_| SlitscanError::Usage(format!("Invalid offset value: {}", offset_str)))?;

        let thickness_str = args
            .get_one::<String>("thickness")
            .ok_or_else(|| SlitscanError::Usage("Missing thickness value".to_string()))?;
        let thickness = thickness_str.parse::<u32>().map_err(|_| {
            SlitscanError::Usage(format!("Invalid thickness value: {}", thickness_str))
        })?;

        let params = SliceParams::new(thickness, offset)?;

        Ok(ComposeCommand {
            input_pattern,
            output_file,
            mode,
            params,
            logger,
        })
    }
}

impl Command for ComposeCommand<'_> {
    fn execute(&self) -> SlitscanResult<()> {
        info!(
            "Composing frames matching {} into {}",
            self.input_pattern, self.output_file
        );
        self.logger.log_run_config(
            &self.input_pattern,
            &self.output_file,
            self.mode,
            &self.params,
        )?;

        let pattern = FilePattern::parse(&self.input_pattern)?;
        let sequence = SequenceLoader::new(self.mode).load(&pattern)?;

        let compositor = SliceCompositor::new(self.mode, self.params);
        let canvas = compositor.compose(&sequence)?;
        compositor.save(&canvas, &self.output_file)?;

        info!(
            "Composed {} frames into a {}x{} image",
            sequence.len(),
            canvas.width(),
            canvas.height()
        );
        self.logger.log("Composition successful")?;

        Ok(())
    }
}
