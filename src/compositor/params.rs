//! Run configuration for strip extraction

use crate::errors::{SlitscanError, SlitscanResult};

/// Immutable slice parameters for one run
#[derive(Debug, Clone, Copy)]
pub struct SliceParams {
    /// Strip thickness in pixels along the composition axis
    pub thickness: u32,
    /// Fractional position within the sample axis the strip is centered on
    pub offset: f64,
}

impl SliceParams {
    /// Validate and build slice parameters
    ///
    /// # Arguments
    /// * `thickness` - Strip thickness, must be positive
    /// * `offset` - Sampling position, must lie within [0, 1]
    ///
    /// # Returns
    /// The parameters, or a usage error for out-of-range values
    pub fn new(thickness: u32, offset: f64) -> SlitscanResult<Self> {
        if thickness == 0 {
            return Err(SlitscanError::Usage(
                "Thickness must be a positive integer".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&offset) {
            return Err(SlitscanError::Usage(format!(
                "Offset must lie within [0, 1], got {}",
                offset
            )));
        }
        Ok(SliceParams { thickness, offset })
    }
}

impl Default for SliceParams {
    /// One-pixel strips sampled from the center of each frame
    fn default() -> Self {
        SliceParams {
            thickness: 1,
            offset: 0.5,
        }
    }
}
