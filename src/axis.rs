//! Axis modes and axis-aware geometry
//!
//! This module defines the two composition directions and the small set of
//! accessors that map between frame dimensions, source translations and
//! destination rectangles. All other code asks the mode for its geometry
//! instead of branching on width/height itself.

/// Direction along which strips are laid out in the output image
///
/// In `Across` mode every frame contributes a vertical column strip and the
/// strips are concatenated horizontally. In `Down` mode every frame
/// contributes a horizontal row strip and the strips are concatenated
/// vertically. The mode is fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisMode {
    /// Vertical column strips, concatenated horizontally (the default)
    Across,
    /// Horizontal row strips, concatenated vertically
    Down,
}

impl AxisMode {
    /// Size of the frame dimension that is cut into strips
    ///
    /// This dimension must be identical across all frames and becomes the
    /// output canvas's fixed, non-composition dimension.
    pub fn slice_axis_size(&self, width: u32, height: u32) -> u32 {
        match self {
            AxisMode::Across => height,
            AxisMode::Down => width,
        }
    }

    /// Size of the frame dimension the strip position is computed along
    pub fn sample_axis_size(&self, width: u32, height: u32) -> u32 {
        match self {
            AxisMode::Across => width,
            AxisMode::Down => height,
        }
    }

    /// Source translation vector for a given sample-axis offset
    ///
    /// The translation is applied to the source frame, along the sample
    /// axis: a destination pixel at (x, y) samples the frame at
    /// (x, y) + translation.
    pub fn translation(&self, offset: i64) -> (i64, i64) {
        match self {
            AxisMode::Across => (offset, 0),
            AxisMode::Down => (0, offset),
        }
    }

    /// Output canvas size for a composed sequence
    ///
    /// The composition axis holds `frame_count * thickness` pixels, the
    /// other axis the common slice-axis size.
    pub fn canvas_size(&self, frame_count: u32, thickness: u32, slice_axis_size: u32) -> (u32, u32) {
        match self {
            AxisMode::Across => (frame_count * thickness, slice_axis_size),
            AxisMode::Down => (slice_axis_size, frame_count * thickness),
        }
    }

    /// Destination rectangle for the strip in slot `slot` (0-based)
    ///
    /// Slots are disjoint and tile the canvas along the composition axis.
    pub fn destination_rect(
        &self,
        slot: u32,
        thickness: u32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Region {
        match self {
            AxisMode::Across => Region::new(slot * thickness, 0, thickness, canvas_height),
            AxisMode::Down => Region::new(0, slot * thickness, canvas_width, thickness),
        }
    }
}

/// Axis-aligned destination rectangle (in pixel coordinates)
///
/// Represents a rectangular area defined by its top-left corner coordinates
/// and dimensions, following the usual image coordinate system where (0,0)
/// is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> u32 {
        self.x + self.width
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u32 {
        self.y + self.height
    }
}
