//! Input filename pattern handling
//!
//! Frame files are addressed through a printf-style pattern holding exactly
//! one integer placeholder, `%d` or zero-padded `%0Nd` (for example
//! `frames/frame%04d.png`). `%%` stands for a literal percent sign.

use crate::errors::{SlitscanError, SlitscanResult};

/// A filename pattern with exactly one integer placeholder
#[derive(Debug, Clone)]
pub struct FilePattern {
    source: String,
    prefix: String,
    suffix: String,
    pad_width: usize,
}

impl FilePattern {
    /// Parse a pattern string
    ///
    /// # Arguments
    /// * `pattern` - Pattern text, e.g. `frame%04d.png`
    ///
    /// # Returns
    /// A parsed pattern, or a usage error when the text holds no placeholder,
    /// more than one, or an unsupported one.
    pub fn parse(pattern: &str) -> SlitscanResult<Self> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut pad_width: Option<usize> = None;

        let mut chars = pattern.chars().peekable();
        while let Some(c) = chars.next() {
            let part = if pad_width.is_none() {
                &mut prefix
            } else {
                &mut suffix
            };

            if c != '%' {
                part.push(c);
                continue;
            }

            if chars.peek() == Some(&'%') {
                chars.next();
                part.push('%');
                continue;
            }

            // Optional zero-padding width, then the conversion character
            let mut width = 0usize;
            while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                width = width * 10 + d as usize;
                chars.next();
            }

            match chars.next() {
                Some('d') => {
                    if pad_width.is_some() {
                        return Err(SlitscanError::Usage(format!(
                            "Pattern '{}' contains more than one integer placeholder",
                            pattern
                        )));
                    }
                    pad_width = Some(width);
                }
                _ => {
                    return Err(SlitscanError::Usage(format!(
                        "Pattern '{}' contains an unsupported placeholder (expected %d or %0Nd)",
                        pattern
                    )));
                }
            }
        }

        let pad_width = pad_width.ok_or_else(|| {
            SlitscanError::Usage(format!(
                "Pattern '{}' contains no integer placeholder (expected %d or %0Nd)",
                pattern
            ))
        })?;

        Ok(FilePattern {
            source: pattern.to_string(),
            prefix,
            suffix,
            pad_width,
        })
    }

    /// Substitute a frame index into the pattern
    pub fn format(&self, index: usize) -> String {
        format!(
            "{}{:0width$}{}",
            self.prefix,
            index,
            self.suffix,
            width = self.pad_width
        )
    }

    /// The original pattern text, for messages
    pub fn source(&self) -> &str {
        &self.source
    }
}
