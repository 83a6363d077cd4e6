//! A single animated starfield bound to one surface

use crate::config::StarfieldConfig;
use crate::error::FolioError;
use crate::math::{Mat4, Vec2, Vec3};
use crate::theme::Theme;
use crate::viewport::Viewport;

use super::{ParticleCloud, ParticleRng, PerspectiveCamera, PointsMaterial, StarFrame, StarRenderer};

/// Depth offset of the cloud at `elapsed` seconds: `sin(elapsed * rate) * amplitude`
#[inline]
pub fn depth_offset(elapsed: f32, rate: f32, amplitude: f32) -> f32 {
    (elapsed * rate).sin() * amplitude
}

/// Cloud rotation for a pointer position as `(pitch, yaw)`
///
/// Moving the pointer right turns the field as if the viewer looked left,
/// hence the negation.
#[inline]
pub fn pointer_rotation(pointer: Vec2, sensitivity: f32) -> (f32, f32) {
    (-pointer.y * sensitivity, -pointer.x * sensitivity)
}

/// Aggregate transform of the particle cloud; the only geometry that moves
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CloudTransform {
    /// Rotation around X in radians
    pub pitch: f32,
    /// Rotation around Y in radians
    pub yaw: f32,
    /// Offset along Z
    pub depth: f32,
}

impl CloudTransform {
    /// `T(0, 0, depth) * Rx(pitch) * Ry(yaw)`
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::translation(Vec3::new(0.0, 0.0, self.depth))
            .mul(&Mat4::rotation_x(self.pitch))
            .mul(&Mat4::rotation_y(self.yaw))
    }
}

/// One particle backdrop: cloud, camera, material and renderer
pub struct Starfield<R: StarRenderer> {
    surface_id: String,
    renderer: R,
    camera: PerspectiveCamera,
    cloud: ParticleCloud,
    material: PointsMaterial,
    transform: CloudTransform,
    config: StarfieldConfig,
    pixel_ratio: f32,
}

impl<R: StarRenderer> Starfield<R> {
    /// Build a field for `surface_id`, upload its particles and size the renderer
    pub fn new(
        surface_id: impl Into<String>,
        mut renderer: R,
        config: &StarfieldConfig,
        viewport: Viewport,
        theme: Theme,
        rng: &mut ParticleRng,
    ) -> Self {
        let camera = PerspectiveCamera::from_config(config, viewport.aspect());
        let cloud = ParticleCloud::generate(config.particle_count, config.spread, rng);
        let material = PointsMaterial::for_theme(theme, config.point_size, config.size_attenuation);
        let pixel_ratio = viewport.pixel_ratio(config.max_pixel_ratio);

        renderer.upload_particles(&cloud);
        renderer.resize(viewport.width(), viewport.height(), pixel_ratio);

        Self {
            surface_id: surface_id.into(),
            renderer,
            camera,
            cloud,
            material,
            transform: CloudTransform::default(),
            config: config.clone(),
            pixel_ratio,
        }
    }

    /// Update the cloud transform from the clock and pointer without drawing
    pub fn apply_motion(&mut self, elapsed: f32, pointer: Vec2) {
        let (pitch, yaw) = pointer_rotation(pointer, self.config.pointer_sensitivity);
        self.transform = CloudTransform {
            pitch,
            yaw,
            depth: depth_offset(
                elapsed,
                self.config.breathing_rate,
                self.config.breathing_amplitude,
            ),
        };
    }

    /// Advance to `elapsed` seconds with the given pointer position and draw
    pub fn tick(&mut self, elapsed: f32, pointer: Vec2) -> Result<(), FolioError> {
        self.apply_motion(elapsed, pointer);
        let frame = self.frame();
        self.renderer.render(&frame)
    }

    /// Frame data for the current state
    pub fn frame(&self) -> StarFrame {
        StarFrame {
            view_projection: self.camera.view_projection(),
            model: self.transform.model_matrix(),
            color: self.material.color.to_rgba(1.0),
            point_size: self.material.size,
            size_attenuation: self.material.size_attenuation,
            pixel_ratio: self.pixel_ratio,
        }
    }

    /// Follow a window resize: camera aspect, projection and surface size
    pub fn resize(&mut self, viewport: Viewport) {
        self.camera.set_aspect(viewport.aspect());
        self.pixel_ratio = viewport.pixel_ratio(self.config.max_pixel_ratio);
        self.renderer
            .resize(viewport.width(), viewport.height(), self.pixel_ratio);
    }

    /// Recolor for a theme; takes effect on the next render
    pub fn set_theme(&mut self, theme: Theme) {
        self.material.set_color_hex(theme.star_color());
    }

    /// Release the renderer's resources
    pub fn dispose(mut self) {
        self.renderer.dispose();
    }

    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    pub fn cloud(&self) -> &ParticleCloud {
        &self.cloud
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn material(&self) -> &PointsMaterial {
        &self.material
    }

    pub fn transform(&self) -> CloudTransform {
        self.transform
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRenderer;

    fn field(theme: Theme) -> (Starfield<RecordingRenderer>, RecordingRenderer) {
        let renderer = RecordingRenderer::new();
        let probe = renderer.clone();
        let mut rng = ParticleRng::seeded(11);
        let field = Starfield::new(
            "hero-canvas",
            renderer,
            &StarfieldConfig::default(),
            Viewport::new(1600.0, 900.0, 3.0),
            theme,
            &mut rng,
        );
        (field, probe)
    }

    #[test]
    fn test_depth_offset_formula() {
        assert!((depth_offset(0.0, 0.1, 50.0) - 0.0).abs() < 0.001);
        let t = 5.0 * std::f32::consts::PI;
        assert!((depth_offset(t, 0.1, 50.0) - 50.0).abs() < 0.001);
        for i in 0..500 {
            let d = depth_offset(i as f32 * 0.37, 0.1, 50.0);
            assert!((-50.0..=50.0).contains(&d));
        }
    }

    #[test]
    fn test_pointer_rotation_is_negated() {
        let (pitch, yaw) = pointer_rotation(Vec2::new(1000.0, 400.0), 0.00005);
        assert!((yaw - (-0.05)).abs() < 0.0001);
        assert!((pitch - (-0.02)).abs() < 0.0001);
    }

    #[test]
    fn test_new_field_uploads_and_sizes() {
        let (field, probe) = field(Theme::Dark);

        assert_eq!(field.cloud().len(), 6000);
        assert_eq!(field.surface_id(), "hero-canvas");
        assert_eq!(field.material().color_hex(), 0xaaaaaa);
        assert!((field.camera().aspect - 16.0 / 9.0).abs() < 0.001);

        let log = probe.log();
        assert_eq!(log.uploaded_particles, 6000);
        assert_eq!(log.resizes, vec![(1600.0, 900.0, 2.0)]);
    }

    #[test]
    fn test_tick_sets_transform_and_renders() {
        let (mut field, probe) = field(Theme::Light);
        let t = 5.0 * std::f32::consts::PI;

        field.tick(t, Vec2::new(200.0, 100.0)).unwrap();

        let transform = field.transform();
        assert!((transform.yaw - (-0.01)).abs() < 0.0001);
        assert!((transform.pitch - (-0.005)).abs() < 0.0001);
        assert!((transform.depth - 50.0).abs() < 0.001);

        let log = probe.log();
        assert_eq!(log.frames.len(), 1);
        assert_eq!(log.frames[0].model, transform.model_matrix());
        assert!((log.frames[0].point_size - 0.7).abs() < 0.001);
    }

    #[test]
    fn test_particles_unchanged_by_motion() {
        let (mut field, _probe) = field(Theme::Dark);
        let before = field.cloud().positions().to_vec();

        for i in 0..10 {
            field.tick(i as f32, Vec2::new(i as f32 * 50.0, 10.0)).unwrap();
        }
        field.resize(Viewport::new(800.0, 600.0, 1.0));
        field.set_theme(Theme::Light);

        assert_eq!(field.cloud().positions(), before.as_slice());
    }

    #[test]
    fn test_resize_updates_camera_and_surface() {
        let (mut field, probe) = field(Theme::Dark);

        field.resize(Viewport::new(1000.0, 500.0, 1.25));

        assert!((field.camera().aspect - 2.0).abs() < 0.001);
        assert!((field.pixel_ratio() - 1.25).abs() < 0.001);
        assert_eq!(probe.log().resizes.last(), Some(&(1000.0, 500.0, 1.25)));
    }

    #[test]
    fn test_set_theme_recolors() {
        let (mut field, _probe) = field(Theme::Dark);
        field.set_theme(Theme::Light);
        assert_eq!(field.material().color_hex(), 0x555555);
        field.set_theme(Theme::Dark);
        assert_eq!(field.material().color_hex(), 0xaaaaaa);
    }

    #[test]
    fn test_dispose_releases_renderer() {
        let (field, probe) = field(Theme::Dark);
        field.dispose();
        assert!(probe.log().disposed);
    }
}
