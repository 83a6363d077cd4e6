//! Point material: one color, one size, shared by every particle

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// sRGB color
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Color from a 0xRRGGBB value
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
        }
    }

    /// Back to 0xRRGGBB
    pub fn to_hex(self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// RGBA array with the given alpha
    #[inline]
    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        [self.r, self.g, self.b, alpha]
    }
}

/// Material applied to the whole particle cloud
#[derive(Clone, Debug, PartialEq)]
pub struct PointsMaterial {
    pub color: Color,
    pub size: f32,
    /// Shrink points with distance from the camera
    pub size_attenuation: bool,
}

impl PointsMaterial {
    pub fn new(color_hex: u32, size: f32, size_attenuation: bool) -> Self {
        Self {
            color: Color::from_hex(color_hex),
            size,
            size_attenuation,
        }
    }

    /// Material colored for a theme
    pub fn for_theme(theme: Theme, size: f32, size_attenuation: bool) -> Self {
        Self::new(theme.star_color(), size, size_attenuation)
    }

    #[inline]
    pub fn set_color_hex(&mut self, hex: u32) {
        self.color = Color::from_hex(hex);
    }

    #[inline]
    pub fn color_hex(&self) -> u32 {
        self.color.to_hex()
    }
}
