//! Rendering seam between the starfield state and a drawing backend

use crate::error::FolioError;
use crate::math::Mat4;

use super::ParticleCloud;

/// Everything a backend needs to draw one frame of a starfield
#[derive(Clone, Debug, PartialEq)]
pub struct StarFrame {
    /// Camera projection times view
    pub view_projection: Mat4,
    /// Cloud rotation and depth offset
    pub model: Mat4,
    /// Straight-alpha RGBA point color
    pub color: [f32; 4],
    pub point_size: f32,
    pub size_attenuation: bool,
    /// Clamped device pixel ratio the surface was sized with
    pub pixel_ratio: f32,
}

/// Backend that draws a particle cloud onto one surface
pub trait StarRenderer {
    /// Upload particle positions; called once when the field is created
    fn upload_particles(&mut self, cloud: &ParticleCloud);

    /// Resize the drawing surface (CSS pixels plus the clamped pixel ratio)
    fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32);

    /// Draw one frame. Transient surface failures return an error and the
    /// frame is skipped.
    fn render(&mut self, frame: &StarFrame) -> Result<(), FolioError>;

    /// Release GPU and surface resources
    fn dispose(&mut self) {}
}
