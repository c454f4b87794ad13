use log::info;

use crate::axis::AxisMode;
use crate::compositor::{SliceCompositor, SliceParams};
use crate::errors::SlitscanResult;
use crate::loader::{FilePattern, SequenceLoader};
use crate::utils::logger::Logger;

/// Main interface to the slitscan library
pub struct Slitscan {
    logger: Logger,
}

impl Slitscan {
    /// Create a new Slitscan instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "slitscan.log"
    ///
    /// # Returns
    /// A Slitscan instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> SlitscanResult<Self> {
        let log_path = log_file.unwrap_or("slitscan.log");
        let logger = Logger::new(log_path)?;
        Ok(Slitscan { logger })
    }

    /// Compose a slit-scan image from a numbered frame sequence
    ///
    /// Runs the whole pipeline: scan and decode the frames matching
    /// `input_pattern`, extract one strip per frame, lay the strips out
    /// along the composition axis and write the result to `output_path`.
    ///
    /// # Arguments
    /// * `input_pattern` - Filename pattern with one integer placeholder,
    ///   e.g. `frame%04d.png`
    /// * `output_path` - Path where to save the composite image
    /// * `mode` - Composition direction
    /// * `thickness` - Strip thickness in pixels, must be positive
    /// * `offset` - Fractional sampling position within [0, 1]
    ///
    /// # Returns
    /// `(frame_count, canvas_width, canvas_height)` on success
    pub fn compose(
        &self,
        input_pattern: &str,
        output_path: &str,
        mode: AxisMode,
        thickness: u32,
        offset: f64,
    ) -> SlitscanResult<(usize, u32, u32)> {
        let params = SliceParams::new(thickness, offset)?;
        self.logger
            .log_run_config(input_pattern, output_path, mode, &params)?;

        let pattern = FilePattern::parse(input_pattern)?;
        let sequence = SequenceLoader::new(mode).load(&pattern)?;

        let compositor = SliceCompositor::new(mode, params);
        let canvas = compositor.compose(&sequence)?;
        compositor.save(&canvas, output_path)?;

        info!(
            "Composed {} frames into {} ({}x{})",
            sequence.len(),
            output_path,
            canvas.width(),
            canvas.height()
        );

        Ok((sequence.len(), canvas.width(), canvas.height()))
    }
}
