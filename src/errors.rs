//! Custom error types for slit-scan processing

use std::fmt;
use std::io;

/// Slit-scan specific error types
#[derive(Debug)]
pub enum SlitscanError {
    /// I/O error
    IoError(io::Error),
    /// Bad command-line argument or flag value
    Usage(String),
    /// Zero input frames matched the filename pattern
    NoFramesFound(String),
    /// A frame's checked dimension disagrees with the first frame's
    DimensionMismatch {
        /// 1-based index of the offending frame
        frame_index: usize,
        /// Size recorded from the first frame
        expected: u32,
        /// Size found on the offending frame
        actual: u32,
    },
    /// Image decode failure from the image library
    DecodeError(image::ImageError),
    /// Image encode failure from the image library
    EncodeError(image::ImageError),
}

impl fmt::Display for SlitscanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlitscanError::IoError(e) => write!(f, "I/O error: {}", e),
            SlitscanError::Usage(msg) => write!(f, "Usage error: {}", msg),
            SlitscanError::NoFramesFound(pattern) => {
                write!(f, "No frames found matching pattern '{}'", pattern)
            }
            SlitscanError::DimensionMismatch {
                frame_index,
                expected,
                actual,
            } => write!(
                f,
                "Dimension mismatch in frame {}: expected {}, actual {}",
                frame_index, expected, actual
            ),
            SlitscanError::DecodeError(e) => write!(f, "Image decode error: {}", e),
            SlitscanError::EncodeError(e) => write!(f, "Image encode error: {}", e),
        }
    }
}

impl std::error::Error for SlitscanError {}

impl From<io::Error> for SlitscanError {
    fn from(error: io::Error) -> Self {
        SlitscanError::IoError(error)
    }
}

impl From<image::ImageError> for SlitscanError {
    fn from(error: image::ImageError) -> Self {
        SlitscanError::DecodeError(error)
    }
}

/// Result type for slit-scan operations
pub type SlitscanResult<T> = Result<T, SlitscanError>;
