//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::axis::AxisMode;
use crate::compositor::SliceParams;

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
        })
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        if let Some(file) = &mut *self.file.lock().unwrap() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs the run configuration ahead of the pipeline phases
    ///
    /// # Arguments
    ///
    /// * `input_pattern` - Input filename pattern text
    /// * `output_file` - Output image path
    /// * `mode` - Axis mode for the run
    /// * `params` - Slice parameters for the run
    pub fn log_run_config(
        &self,
        input_pattern: &str,
        output_file: &str,
        mode: AxisMode,
        params: &SliceParams,
    ) -> io::Result<()> {
        self.log(&format!("Input pattern: {}", input_pattern))?;
        self.log(&format!("Output file: {}", output_file))?;
        self.log(&format!("Axis mode: {:?}", mode))?;
        self.log(&format!(
            "Strip thickness: {}, sampling offset: {}",
            params.thickness, params.offset
        ))
    }

    /// Static method to initialize the global logger
    pub fn init_global_logger(log_file: &str) -> io::Result<()> {
        // Create a dedicated logger for the log crate
        let global_logger = Logger::new(log_file)?;

        // Set up the global logger - we'll ignore the SetLoggerError
        // since we only call this once at startup
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            // Logger was already set - this should not happen in normal usage
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(LevelFilter::Debug);
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.log(&message);

            // Also print to console
            println!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
