//! Strip extraction and composition
//!
//! This module turns a loaded frame sequence into the final composite
//! image: one strip per frame, placed side by side along the composition
//! axis.

mod params;
mod slice;

#[cfg(test)]
mod tests;

pub use params::SliceParams;
pub use slice::SliceCompositor;
