//! Sequential frame scan with dimension validation
//!
//! The scan starts at index 1 and keeps formatting the pattern with the next
//! index until a file is missing, which terminates the sequence. Every
//! decoded frame is checked against the first frame's dimensions; the whole
//! run aborts on the first mismatch.

use std::path::Path;

use log::{debug, info};

use crate::axis::AxisMode;
use crate::errors::{SlitscanError, SlitscanResult};
use crate::frame::{Frame, FrameSequence};
use crate::loader::FilePattern;
use crate::utils::progress::ProgressTracker;

/// Loads the ordered frame sequence for one run
pub struct SequenceLoader {
    mode: AxisMode,
}

impl SequenceLoader {
    /// Create a loader for the given axis mode
    pub fn new(mode: AxisMode) -> Self {
        SequenceLoader { mode }
    }

    /// Scan and decode all frames matching the pattern
    ///
    /// # Arguments
    /// * `pattern` - Parsed filename pattern with one integer placeholder
    ///
    /// # Returns
    /// The non-empty, dimension-checked frame sequence, or an error: a
    /// decode failure, a dimension mismatch, or no frames found at all.
    pub fn load(&self, pattern: &FilePattern) -> SlitscanResult<FrameSequence> {
        let mut frames: Vec<Frame> = Vec::new();
        let mut reference: Option<(u32, u32)> = None;
        let mut progress = ProgressTracker::spinner("Loading frames");

        let mut index = 1usize;
        loop {
            let path = pattern.format(index);
            if !Path::new(&path).exists() {
                break;
            }

            let decoded = image::open(&path)?;
            let frame = Frame::new(index, decoded.to_rgba8());

            let slice_size = self.mode.slice_axis_size(frame.width(), frame.height());
            let sample_size = self.mode.sample_axis_size(frame.width(), frame.height());

            match reference {
                None => reference = Some((slice_size, sample_size)),
                Some((expected_slice, expected_sample)) => {
                    if slice_size != expected_slice {
                        return Err(SlitscanError::DimensionMismatch {
                            frame_index: index,
                            expected: expected_slice,
                            actual: slice_size,
                        });
                    }
                    if sample_size != expected_sample {
                        return Err(SlitscanError::DimensionMismatch {
                            frame_index: index,
                            expected: expected_sample,
                            actual: sample_size,
                        });
                    }
                }
            }

            debug!(
                "Loaded frame {} from {} ({}x{})",
                index,
                path,
                frame.width(),
                frame.height()
            );

            frames.push(frame);
            progress.update(index as u64);
            index += 1;
        }

        progress.finish(frames.len() as u64);

        let (slice_axis_size, sample_axis_size) =
            reference.ok_or_else(|| SlitscanError::NoFramesFound(pattern.source().to_string()))?;

        info!(
            "Loaded {} frames (slice axis {}, sample axis {})",
            frames.len(),
            slice_axis_size,
            sample_axis_size
        );

        Ok(FrameSequence {
            frames,
            slice_axis_size,
            sample_axis_size,
        })
    }
}
