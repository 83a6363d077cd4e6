//! 2D size type for window and surface dimensions

use serde::{Deserialize, Serialize};

/// 2D size for width and height
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if size is zero or negative
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Get aspect ratio (width / height)
    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Scale both dimensions
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// Physical pixel dimensions, rounded and at least 1x1
    #[inline]
    pub fn to_physical(self, pixel_ratio: f32) -> (u32, u32) {
        let scaled = self.scale(pixel_ratio);
        (
            (scaled.width.round() as u32).max(1),
            (scaled.height.round() as u32).max(1),
        )
    }
}
