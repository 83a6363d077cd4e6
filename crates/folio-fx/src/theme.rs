//! Light/dark theme and the star colors each one uses

use serde::{Deserialize, Serialize};

/// Body class that marks the light theme
pub const LIGHT_MODE_CLASS: &str = "light-mode";

/// Page color theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background, muted dark stars
    Light,
    /// Dark background, light gray stars
    #[default]
    Dark,
}

impl Theme {
    /// Theme from the `isLight` flag the page passes around
    #[inline]
    pub fn from_is_light(is_light: bool) -> Self {
        if is_light {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// Theme from a space-separated class list (e.g. `document.body.className`)
    pub fn from_class_list(classes: &str) -> Self {
        Self::from_is_light(classes.split_whitespace().any(|c| c == LIGHT_MODE_CLASS))
    }

    #[inline]
    pub fn is_light(self) -> bool {
        self == Theme::Light
    }

    /// Star color as a 0xRRGGBB hex value
    #[inline]
    pub fn star_color(self) -> u32 {
        match self {
            Theme::Light => 0x555555,
            Theme::Dark => 0xaaaaaa,
        }
    }
}
