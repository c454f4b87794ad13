//! Decoded input frames and the validated frame sequence

use image::{Rgba, RgbaImage};

/// A single decoded input frame
///
/// Frames are normalized to RGBA8 on decode so that every frame and the
/// output canvas share one pixel format, whatever color type the source
/// files were written with. The pixel buffer is owned exclusively by the
/// frame and is read-only after decoding.
pub struct Frame {
    /// 1-based discovery index, matching the integer in the filename
    pub index: usize,
    pixels: RgbaImage,
}

impl Frame {
    /// Wrap a decoded pixel buffer as a frame
    pub fn new(index: usize, pixels: RgbaImage) -> Self {
        Frame { index, pixels }
    }

    /// Frame width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Frame height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Sample the pixel at signed coordinates
    ///
    /// Returns `None` outside the frame bounds; callers decide what the
    /// background looks like there.
    pub fn sample(&self, x: i64, y: i64) -> Option<Rgba<u8>> {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return None;
        }
        Some(*self.pixels.get_pixel(x as u32, y as u32))
    }
}

/// An ordered, non-empty list of frames with validated common dimensions
///
/// Both sizes are checked against the first frame during loading, so the
/// compositor can rely on them without re-checking every frame.
pub struct FrameSequence {
    /// Frames in ascending filename-index order
    pub frames: Vec<Frame>,
    /// Common cross-axis size, the output's fixed dimension
    pub slice_axis_size: u32,
    /// Common sample-axis size, used for the strip position arithmetic
    pub sample_axis_size: u32,
}

impl FrameSequence {
    /// Number of frames in the sequence
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when the sequence holds no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
