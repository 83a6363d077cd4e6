//! Window viewport state and the responsive breakpoint policy

use crate::math::Size;

/// Width at or above which three slides fit per page
pub const WIDE_BREAKPOINT: f32 = 1024.0;

/// Width at or above which two slides fit per page
pub const MEDIUM_BREAKPOINT: f32 = 768.0;

/// Upper bound applied to the device pixel ratio before sizing surfaces
pub const DEFAULT_MAX_PIXEL_RATIO: f32 = 2.0;

/// Number of carousel slides visible per page at a given viewport width
#[inline]
pub fn items_per_page(viewport_width: f32) -> usize {
    if viewport_width >= WIDE_BREAKPOINT {
        3
    } else if viewport_width >= MEDIUM_BREAKPOINT {
        2
    } else {
        1
    }
}

/// Browser window dimensions as seen by the engines
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Inner window size in CSS pixels
    pub size: Size,
    /// Raw `devicePixelRatio` reported by the host
    pub device_pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: Size::new(1920.0, 1080.0),
            device_pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    /// Create a viewport from window dimensions
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            size: Size::new(width, height),
            device_pixel_ratio,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Camera aspect ratio for this window
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.size.aspect_ratio()
    }

    /// Device pixel ratio clamped to `max`; non-finite or non-positive ratios fall back to 1
    #[inline]
    pub fn pixel_ratio(&self, max: f32) -> f32 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio.min(max)
        } else {
            1.0
        }
    }

    /// Slides per page at this window width
    #[inline]
    pub fn items_per_page(&self) -> usize {
        items_per_page(self.size.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_per_page_breakpoints() {
        assert_eq!(items_per_page(1200.0), 3);
        assert_eq!(items_per_page(1024.0), 3);
        assert_eq!(items_per_page(1023.9), 2);
        assert_eq!(items_per_page(800.0), 2);
        assert_eq!(items_per_page(768.0), 2);
        assert_eq!(items_per_page(767.0), 1);
        assert_eq!(items_per_page(500.0), 1);
        assert_eq!(items_per_page(0.0), 1);
    }

    #[test]
    fn test_items_per_page_monotonic() {
        let mut last = 0;
        for w in (0..2000).step_by(7) {
            let p = items_per_page(w as f32);
            assert!(p >= last, "items per page dropped at width {}", w);
            last = p;
        }
    }

    #[test]
    fn test_pixel_ratio_clamp() {
        assert!((Viewport::new(800.0, 600.0, 3.0).pixel_ratio(2.0) - 2.0).abs() < 0.001);
        assert!((Viewport::new(800.0, 600.0, 1.5).pixel_ratio(2.0) - 1.5).abs() < 0.001);
        assert!((Viewport::new(800.0, 600.0, 0.0).pixel_ratio(2.0) - 1.0).abs() < 0.001);
        assert!((Viewport::new(800.0, 600.0, f32::NAN).pixel_ratio(2.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_viewport_aspect() {
        let viewport = Viewport::new(1600.0, 800.0, 1.0);
        assert!((viewport.aspect() - 2.0).abs() < 0.001);
        assert_eq!(viewport.items_per_page(), 3);
    }
}
