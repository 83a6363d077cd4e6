//! Animation host: the ordered registry every frame, resize and theme
//! change is broadcast through

use crate::clock::{AnimationClock, TimeSource};
use crate::error::FolioError;
use crate::math::Vec2;
use crate::pointer::PointerSource;
use crate::theme::Theme;
use crate::viewport::Viewport;

use super::{StarRenderer, Starfield};

/// Starfield identifier, unique per host
pub type StarfieldId = u64;

/// Outcome of one frame across all registered fields
#[derive(Debug, Default)]
pub struct TickReport {
    /// Fields that drew a frame
    pub rendered: usize,
    /// Fields whose frame was skipped, with the renderer's reason
    pub skipped: Vec<(StarfieldId, FolioError)>,
}

impl TickReport {
    #[inline]
    pub fn all_rendered(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Owns every starfield on the page and drives them from one loop
///
/// Fields are visited in registration order.
pub struct AnimationHost<R: StarRenderer> {
    fields: Vec<(StarfieldId, Starfield<R>)>,
    next_id: StarfieldId,
}

impl<R: StarRenderer> Default for AnimationHost<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: StarRenderer> AnimationHost<R> {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a field; it takes part in every following tick and broadcast
    pub fn register(&mut self, field: Starfield<R>) -> StarfieldId {
        let id = self.next_id;
        self.next_id += 1;
        self.fields.push((id, field));
        id
    }

    /// Remove a field and dispose its renderer. Returns false for unknown ids.
    pub fn unregister(&mut self, id: StarfieldId) -> bool {
        match self.fields.iter().position(|(fid, _)| *fid == id) {
            Some(index) => {
                let (_, field) = self.fields.remove(index);
                field.dispose();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: StarfieldId) -> Option<&Starfield<R>> {
        self.fields.iter().find(|(fid, _)| *fid == id).map(|(_, f)| f)
    }

    /// Registered fields in registration order
    pub fn iter(&self) -> impl Iterator<Item = (StarfieldId, &Starfield<R>)> {
        self.fields.iter().map(|(id, f)| (*id, f))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Apply the shared motion rule to every field and render it
    ///
    /// A field whose renderer fails skips this frame; the others still draw.
    pub fn tick(&mut self, elapsed: f32, pointer: Vec2) -> TickReport {
        let mut report = TickReport::default();
        for (id, field) in &mut self.fields {
            match field.tick(elapsed, pointer) {
                Ok(()) => report.rendered += 1,
                Err(e) => report.skipped.push((*id, e)),
            }
        }
        report
    }

    /// Tick using the clock's elapsed time and the pointer's latest position
    pub fn tick_from<T: TimeSource, P: PointerSource>(
        &mut self,
        clock: &AnimationClock<T>,
        pointer: &P,
    ) -> TickReport {
        self.tick(clock.elapsed(), pointer.current())
    }

    /// Propagate a window resize to every field
    pub fn broadcast_resize(&mut self, viewport: Viewport) {
        for (_, field) in &mut self.fields {
            field.resize(viewport);
        }
    }

    /// Recolor every field for a theme
    pub fn broadcast_theme(&mut self, theme: Theme) {
        for (_, field) in &mut self.fields {
            field.set_theme(theme);
        }
    }

    /// Dispose every field and empty the registry
    pub fn dispose(&mut self) {
        for (_, field) in self.fields.drain(..) {
            field.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StarfieldConfig;
    use crate::starfield::ParticleRng;
    use crate::testing::RecordingRenderer;

    fn add_field(host: &mut AnimationHost<RecordingRenderer>, name: &str) -> (StarfieldId, RecordingRenderer) {
        let renderer = RecordingRenderer::new();
        let probe = renderer.clone();
        let mut rng = ParticleRng::seeded(5);
        let field = Starfield::new(
            name,
            renderer,
            &StarfieldConfig::default(),
            Viewport::new(1280.0, 720.0, 1.0),
            Theme::Dark,
            &mut rng,
        );
        (host.register(field), probe)
    }

    #[test]
    fn test_register_assigns_ids_in_order() {
        let mut host = AnimationHost::new();
        let (a, _) = add_field(&mut host, "hero-canvas");
        let (b, _) = add_field(&mut host, "contact-canvas");

        assert_ne!(a, b);
        let names: Vec<&str> = host.iter().map(|(_, f)| f.surface_id()).collect();
        assert_eq!(names, vec!["hero-canvas", "contact-canvas"]);
    }

    #[test]
    fn test_tick_renders_all_with_same_transform() {
        let mut host = AnimationHost::new();
        let (_, hero) = add_field(&mut host, "hero-canvas");
        let (_, contact) = add_field(&mut host, "contact-canvas");

        let report = host.tick(3.0, Vec2::new(640.0, 360.0));

        assert_eq!(report.rendered, 2);
        assert!(report.all_rendered());
        assert_eq!(hero.log().frames[0].model, contact.log().frames[0].model);
    }

    #[test]
    fn test_failed_render_skips_only_that_field() {
        let mut host = AnimationHost::new();
        let (hero_id, hero) = add_field(&mut host, "hero-canvas");
        let (_, contact) = add_field(&mut host, "contact-canvas");

        hero.fail_next_frames(1);
        let report = host.tick(1.0, Vec2::ZERO);

        assert_eq!(report.rendered, 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].0, hero_id);
        assert_eq!(contact.log().frames.len(), 1);

        let report = host.tick(2.0, Vec2::ZERO);
        assert_eq!(report.rendered, 2);
    }

    #[test]
    fn test_broadcast_theme_recolors_every_field() {
        let mut host = AnimationHost::new();
        add_field(&mut host, "hero-canvas");
        add_field(&mut host, "contact-canvas");

        host.broadcast_theme(Theme::Light);

        for (_, field) in host.iter() {
            assert_eq!(field.material().color_hex(), 0x555555);
        }
    }

    #[test]
    fn test_broadcast_resize_reaches_every_field() {
        let mut host = AnimationHost::new();
        let (_, hero) = add_field(&mut host, "hero-canvas");
        let (_, contact) = add_field(&mut host, "contact-canvas");

        host.broadcast_resize(Viewport::new(640.0, 480.0, 4.0));

        for probe in [hero, contact] {
            assert_eq!(probe.log().resizes.last(), Some(&(640.0, 480.0, 2.0)));
        }
        for (_, field) in host.iter() {
            assert!((field.camera().aspect - 640.0 / 480.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_unregister_disposes_and_stops_ticking() {
        let mut host = AnimationHost::new();
        let (hero_id, hero) = add_field(&mut host, "hero-canvas");
        add_field(&mut host, "contact-canvas");

        assert!(host.unregister(hero_id));
        assert!(!host.unregister(hero_id));
        assert!(hero.log().disposed);
        assert!(host.get(hero_id).is_none());

        let report = host.tick(1.0, Vec2::ZERO);
        assert_eq!(report.rendered, 1);
        assert!(hero.log().frames.is_empty());
    }

    #[test]
    fn test_dispose_empties_host() {
        let mut host = AnimationHost::new();
        let (_, hero) = add_field(&mut host, "hero-canvas");
        let (_, contact) = add_field(&mut host, "contact-canvas");

        host.dispose();

        assert!(host.is_empty());
        assert!(hero.log().disposed);
        assert!(contact.log().disposed);
    }
}
