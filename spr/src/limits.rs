use crate::error::SprError;

/// Resource limits applied before a frame's RGBA buffer is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
}

impl Limits {
    pub fn check(&self, width: u32, height: u32) -> Result<(), SprError> {
        if let Some(max_w) = self.max_width {
            if u64::from(width) > max_w {
                return Err(SprError::LimitExceeded {
                    message: format!("width {width} exceeds limit {max_w}"),
                });
            }
        }

        if let Some(max_h) = self.max_height {
            if u64::from(height) > max_h {
                return Err(SprError::LimitExceeded {
                    message: format!("height {height} exceeds limit {max_h}"),
                });
            }
        }

        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);

            if pixels > max_px {
                return Err(SprError::LimitExceeded {
                    message: format!("pixel count {pixels} exceeds limit {max_px}"),
                });
            }
        }

        Ok(())
    }
}
