//! Fixed output window size

use std::fmt;

/// Dimensions every aligned crop is produced at
///
/// This is a per-tool configuration value and is never derived from image
/// content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSize {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
}

impl OutputSize {
    pub fn new(width: u32, height: u32) -> Self {
        OutputSize { width, height }
    }

    /// Half the width, rounded down
    pub fn half_width(&self) -> i64 {
        i64::from(self.width / 2)
    }

    /// Half the height, rounded down
    pub fn half_height(&self) -> i64 {
        i64::from(self.height / 2)
    }

    /// Parse an output size from a string (format: "WIDTHxHEIGHT")
    pub fn from_string(size_str: &str) -> Result<Self, String> {
        let parts: Vec<&str> = size_str.split(|c| c == 'x' || c == 'X').collect();
        if parts.len() != 2 {
            return Err(format!("Output size must look like WIDTHxHEIGHT, got '{}'", size_str));
        }

        let width = parts[0].trim().parse::<u32>()
            .map_err(|_| format!("Invalid output width: {}", parts[0]))?;
        let height = parts[1].trim().parse::<u32>()
            .map_err(|_| format!("Invalid output height: {}", parts[1]))?;

        if width == 0 || height == 0 {
            return Err("Output size must be at least 1x1".to_string());
        }

        Ok(OutputSize::new(width, height))
    }
}

impl Default for OutputSize {
    fn default() -> Self {
        OutputSize::new(600, 900)
    }
}

impl fmt::Display for OutputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
