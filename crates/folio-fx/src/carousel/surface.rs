//! Surface seam between carousel state and the page

use super::CarouselLayout;

/// The DOM side of a carousel: a container of known width holding a track
/// of slides and two navigation controls
pub trait CarouselSurface {
    /// Content width of the element wrapping the track, in CSS pixels
    fn container_width(&self) -> f32;

    /// Number of slides in the track
    fn slide_count(&self) -> usize;

    /// Size the slides, translate the track, and enable/disable controls
    fn apply(&mut self, layout: &CarouselLayout);
}
