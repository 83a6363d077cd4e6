//! Page configuration: which DOM targets to mount and how the effects behave
//!
//! Parsed from JSON handed over by the page. Every field has a default, so
//! `{}` (or no config at all) mounts the standard portfolio layout.

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Top-level page configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Canvas element ids, one starfield per id
    pub starfields: Vec<String>,
    /// Carousel container ids
    pub carousels: Vec<String>,
    /// Shared starfield parameters
    pub starfield: StarfieldConfig,
    /// Selectors used inside each carousel container
    pub carousel: CarouselSelectors,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            starfields: vec!["hero-canvas".to_string(), "contact-canvas".to_string()],
            carousels: vec![
                "projects-carousel".to_string(),
                "testimonials-carousel".to_string(),
                "certificates-carousel".to_string(),
            ],
            starfield: StarfieldConfig::default(),
            carousel: CarouselSelectors::default(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse an optional JSON config; `None` or blank input yields the defaults
    pub fn from_optional_json(json: Option<&str>) -> Result<Self, FolioError> {
        match json.map(str::trim) {
            Some(s) if !s.is_empty() => Self::from_json(s),
            _ => Ok(Self::default()),
        }
    }

    /// Reject values the engines cannot work with
    pub fn validate(&self) -> Result<(), FolioError> {
        self.starfield.validate()
    }
}

/// Starfield geometry, camera and motion parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub particle_count: usize,
    /// Side length of the cube particles are sampled from
    pub spread: f32,
    pub point_size: f32,
    pub size_attenuation: bool,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Camera distance from the origin along +Z
    pub camera_depth: f32,
    /// Radians of rotation per pixel of pointer offset
    pub pointer_sensitivity: f32,
    /// Angular rate of the depth oscillation (radians per second)
    pub breathing_rate: f32,
    /// Peak depth offset of the oscillation
    pub breathing_amplitude: f32,
    pub max_pixel_ratio: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 6000,
            spread: 600.0,
            point_size: 0.7,
            size_attenuation: true,
            fov_degrees: 60.0,
            near: 1.0,
            far: 1000.0,
            camera_depth: 1.0,
            pointer_sensitivity: 0.00005,
            breathing_rate: 0.1,
            breathing_amplitude: 50.0,
            max_pixel_ratio: crate::viewport::DEFAULT_MAX_PIXEL_RATIO,
        }
    }
}

impl StarfieldConfig {
    pub fn validate(&self) -> Result<(), FolioError> {
        if self.particle_count == 0 {
            return Err(FolioError::InvalidConfig(
                "particle_count must be positive".to_string(),
            ));
        }
        if !(self.spread > 0.0) {
            return Err(FolioError::InvalidConfig(format!(
                "spread must be positive, got {}",
                self.spread
            )));
        }
        if !(self.near > 0.0 && self.near < self.far) {
            return Err(FolioError::InvalidConfig(format!(
                "camera planes must satisfy 0 < near < far, got near={} far={}",
                self.near, self.far
            )));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(FolioError::InvalidConfig(format!(
                "fov_degrees must be in (0, 180), got {}",
                self.fov_degrees
            )));
        }
        if !(self.point_size > 0.0 && self.point_size.is_finite()) {
            return Err(FolioError::InvalidConfig(format!(
                "point_size must be positive, got {}",
                self.point_size
            )));
        }
        let motion = [
            ("camera_depth", self.camera_depth),
            ("pointer_sensitivity", self.pointer_sensitivity),
            ("breathing_rate", self.breathing_rate),
            ("breathing_amplitude", self.breathing_amplitude),
        ];
        if let Some((name, value)) = motion.iter().find(|(_, v)| !v.is_finite()) {
            return Err(FolioError::InvalidConfig(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }
        if !(self.max_pixel_ratio > 0.0) {
            return Err(FolioError::InvalidConfig(
                "max_pixel_ratio must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// CSS selectors resolved inside each carousel container
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSelectors {
    pub track: String,
    pub next: String,
    pub prev: String,
}

impl Default for CarouselSelectors {
    fn default() -> Self {
        Self {
            track: ".carousel-track".to_string(),
            next: ".carousel-button.next".to_string(),
            prev: ".carousel-button.prev".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets() {
        let config = PageConfig::default();
        assert_eq!(config.starfields, vec!["hero-canvas", "contact-canvas"]);
        assert_eq!(config.carousels.len(), 3);
        assert_eq!(config.starfield.particle_count, 6000);
        assert!((config.starfield.spread - 600.0).abs() < 0.001);
    }

    #[test]
    fn test_empty_json_yields_defaults() {
        let config = PageConfig::from_json("{}").unwrap();
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn test_optional_json() {
        assert_eq!(PageConfig::from_optional_json(None).unwrap(), PageConfig::default());
        assert_eq!(PageConfig::from_optional_json(Some("  ")).unwrap(), PageConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = PageConfig::from_json(
            r#"{ "starfields": ["only-canvas"], "starfield": { "particle_count": 100 } }"#,
        )
        .unwrap();
        assert_eq!(config.starfields, vec!["only-canvas"]);
        assert_eq!(config.starfield.particle_count, 100);
        assert!((config.starfield.point_size - 0.7).abs() < 0.001);
        assert_eq!(config.carousels.len(), 3);
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = PageConfig::from_json("{ starfields: ").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = PageConfig::from_json(r#"{ "starfield": { "particle_count": 0 } }"#).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));

        let err = PageConfig::from_json(r#"{ "starfield": { "near": 10.0, "far": 5.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));

        let err = PageConfig::from_json(r#"{ "starfield": { "spread": -1.0 } }"#).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));
    }

    #[test]
    fn test_point_size_must_be_positive() {
        let err = PageConfig::from_json(r#"{ "starfield": { "point_size": -0.5 } }"#).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));

        let config = StarfieldConfig {
            point_size: f32::NAN,
            ..StarfieldConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_motion_rejected() {
        let cases = [
            StarfieldConfig { camera_depth: f32::INFINITY, ..StarfieldConfig::default() },
            StarfieldConfig { pointer_sensitivity: f32::NAN, ..StarfieldConfig::default() },
            StarfieldConfig { breathing_rate: f32::NEG_INFINITY, ..StarfieldConfig::default() },
            StarfieldConfig { breathing_amplitude: f32::NAN, ..StarfieldConfig::default() },
        ];
        for config in cases {
            let err = config.validate().unwrap_err();
            assert!(matches!(err, FolioError::InvalidConfig(_)));
        }
        assert!(StarfieldConfig::default().validate().is_ok());
    }
}
