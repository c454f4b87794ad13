//! Slice composition onto the output canvas
//!
//! For every frame the compositor computes a single integer translation
//! along the sample axis and copies the frame's pixels into the frame's
//! slot rectangle. The translation decreases by `thickness` per slot, so
//! the extraction window stays fixed relative to each slot's origin and no
//! per-slot geometry has to be recomputed.

use log::{debug, info};

use image::RgbaImage;

use crate::axis::{AxisMode, Region};
use crate::compositor::SliceParams;
use crate::errors::{SlitscanError, SlitscanResult};
use crate::frame::{Frame, FrameSequence};
use crate::utils::progress::ProgressTracker;

/// Draws the extracted strips into the output canvas
pub struct SliceCompositor {
    mode: AxisMode,
    params: SliceParams,
}

impl SliceCompositor {
    /// Create a compositor for the given mode and parameters
    pub fn new(mode: AxisMode, params: SliceParams) -> Self {
        SliceCompositor { mode, params }
    }

    /// Compose the output canvas from a loaded sequence
    ///
    /// The canvas spans `frame_count * thickness` pixels along the
    /// composition axis and the common slice-axis size along the other. It
    /// starts fully transparent; strips replace pixels without blending,
    /// and samples falling outside a source frame leave the transparent
    /// background in place.
    pub fn compose(&self, sequence: &FrameSequence) -> SlitscanResult<RgbaImage> {
        let (canvas_width, canvas_height) = self.mode.canvas_size(
            sequence.len() as u32,
            self.params.thickness,
            sequence.slice_axis_size,
        );
        let mut canvas = RgbaImage::new(canvas_width, canvas_height);

        info!(
            "Compositing {} strips into a {}x{} canvas",
            sequence.len(),
            canvas_width,
            canvas_height
        );

        let mut progress = ProgressTracker::bar(sequence.len() as u64, "Compositing strips");

        for (slot, frame) in sequence.frames.iter().enumerate() {
            let pat_offset = self.pattern_offset(sequence.sample_axis_size, slot);
            let translation = self.mode.translation(pat_offset);
            let rect = self.mode.destination_rect(
                slot as u32,
                self.params.thickness,
                canvas_width,
                canvas_height,
            );

            debug!(
                "Slot {}: frame {}, translation {:?}, rect {:?}",
                slot, frame.index, translation, rect
            );

            fill_slot(&mut canvas, frame, rect, translation);
            progress.update(slot as u64 + 1);
        }

        progress.finish(sequence.len() as u64);

        Ok(canvas)
    }

    /// Encode the finished canvas to the output path
    ///
    /// Called exactly once, after every frame has been drawn; no partial
    /// output ever reaches the filesystem.
    pub fn save(&self, canvas: &RgbaImage, output_path: &str) -> SlitscanResult<()> {
        canvas
            .save(output_path)
            .map_err(SlitscanError::EncodeError)?;
        info!("Wrote composite image to {}", output_path);
        Ok(())
    }

    /// Sample-axis translation for the frame in `slot`
    ///
    /// `floor(sample_axis_size * offset - thickness/2 - slot*thickness)`,
    /// evaluated in floating point and floored toward negative infinity.
    /// The floor must not be replaced with any other rounding: output
    /// reproducibility depends on it.
    pub(crate) fn pattern_offset(&self, sample_axis_size: u32, slot: usize) -> i64 {
        let thickness = f64::from(self.params.thickness);
        (f64::from(sample_axis_size) * self.params.offset
            - thickness / 2.0
            - slot as f64 * thickness)
            .floor() as i64
    }
}

/// Copy one strip into its slot rectangle
///
/// Destination pixel (x, y) samples the frame at (x, y) + translation.
/// In-bounds samples fully replace the canvas pixel; out-of-bounds samples
/// are skipped, leaving the background.
fn fill_slot(canvas: &mut RgbaImage, frame: &Frame, rect: Region, translation: (i64, i64)) {
    let (dx, dy) = translation;
    for y in rect.y..rect.end_y() {
        for x in rect.x..rect.end_x() {
            if let Some(pixel) = frame.sample(i64::from(x) + dx, i64::from(y) + dy) {
                canvas.put_pixel(x, y, pixel);
            }
        }
    }
}
