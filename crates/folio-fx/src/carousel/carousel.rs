//! Carousel state machine

use crate::viewport::items_per_page;

use super::{max_index, CarouselLayout, CarouselSurface};

/// One carousel: page index plus the surface it lays out
///
/// States are `0..=max_index(slides, per_page)`. `next` and `previous` move
/// one step when allowed; a resize returns to the first page.
pub struct Carousel<S: CarouselSurface> {
    surface: S,
    slide_count: usize,
    index: usize,
    viewport_width: f32,
}

impl<S: CarouselSurface> Carousel<S> {
    /// Take over a surface and run the initial layout
    pub fn new(surface: S, viewport_width: f32) -> Self {
        let slide_count = surface.slide_count();
        let mut carousel = Self {
            surface,
            slide_count,
            index: 0,
            viewport_width,
        };
        carousel.layout();
        carousel
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[inline]
    pub fn items_per_page(&self) -> usize {
        items_per_page(self.viewport_width)
    }

    #[inline]
    pub fn max_index(&self) -> usize {
        max_index(self.slide_count, self.items_per_page())
    }

    /// Layout for the current state, without applying it
    pub fn current_layout(&self) -> CarouselLayout {
        CarouselLayout::compute(
            self.index,
            self.slide_count,
            self.surface.container_width(),
            self.items_per_page(),
        )
    }

    /// Recompute and apply the layout
    pub fn layout(&mut self) -> CarouselLayout {
        let layout = self.current_layout();
        self.surface.apply(&layout);
        layout
    }

    /// Advance one slide. Returns false at the trailing edge.
    pub fn next(&mut self) -> bool {
        if self.index < self.max_index() {
            self.index += 1;
            self.layout();
            true
        } else {
            false
        }
    }

    /// Go back one slide. Returns false on the first page.
    pub fn previous(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            self.layout();
            true
        } else {
            false
        }
    }

    /// New window width: back to the first page and lay out again
    pub fn on_resize(&mut self, viewport_width: f32) {
        self.viewport_width = viewport_width;
        self.index = 0;
        self.layout();
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Give the surface back, e.g. to detach its listeners
    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemorySurface;

    #[test]
    fn test_initial_layout_applied() {
        let carousel = Carousel::new(MemorySurface::new(1200.0, 5), 1280.0);

        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.surface().applied.len(), 1);
        let layout = carousel.surface().last().unwrap();
        assert_eq!(layout.items_per_page, 3);
        assert!((layout.slide_width - 400.0).abs() < 0.001);
        assert!(layout.prev_disabled);
        assert!(!layout.next_disabled);
    }

    #[test]
    fn test_five_slides_three_per_page() {
        let mut carousel = Carousel::new(MemorySurface::new(900.0, 5), 1200.0);

        assert!(carousel.next());
        assert_eq!(carousel.index(), 1);
        let layout = carousel.surface().last().unwrap();
        assert!(!layout.prev_disabled);
        assert!(!layout.next_disabled);

        assert!(carousel.next());
        assert_eq!(carousel.index(), 2);
        let layout = carousel.surface().last().unwrap();
        assert!(layout.next_disabled);
        assert!((layout.offset - 600.0).abs() < 0.001);

        let applied = carousel.surface().applied.len();
        assert!(!carousel.next());
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.surface().applied.len(), applied);
    }

    #[test]
    fn test_previous_stops_at_zero() {
        let mut carousel = Carousel::new(MemorySurface::new(900.0, 5), 1200.0);

        assert!(!carousel.previous());
        assert_eq!(carousel.index(), 0);

        carousel.next();
        assert!(carousel.previous());
        assert_eq!(carousel.index(), 0);
        assert!(carousel.surface().last().unwrap().prev_disabled);
    }

    #[test]
    fn test_resize_resets_index() {
        let mut carousel = Carousel::new(MemorySurface::new(900.0, 6), 1200.0);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 2);

        carousel.on_resize(800.0);

        assert_eq!(carousel.index(), 0);
        let layout = carousel.surface().last().unwrap();
        assert_eq!(layout.items_per_page, 2);
        assert!((layout.slide_width - 450.0).abs() < 0.001);
        assert!((layout.offset - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_fewer_slides_than_page() {
        let mut carousel = Carousel::new(MemorySurface::new(900.0, 2), 1200.0);

        assert!(!carousel.next());
        assert!(!carousel.previous());
        assert_eq!(carousel.index(), 0);
        let layout = carousel.surface().last().unwrap();
        assert!(layout.prev_disabled);
        assert!(layout.next_disabled);
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel = Carousel::new(MemorySurface::new(900.0, 0), 500.0);
        assert!(!carousel.next());
        assert_eq!(carousel.max_index(), 0);
    }

    #[test]
    fn test_index_never_exceeds_max() {
        for slides in 0..8 {
            for width in [500.0, 800.0, 1200.0] {
                let mut carousel = Carousel::new(MemorySurface::new(600.0, slides), width);
                for _ in 0..10 {
                    carousel.next();
                    assert!(carousel.index() <= carousel.max_index());
                }
                for _ in 0..10 {
                    carousel.previous();
                }
                assert_eq!(carousel.index(), 0);
            }
        }
    }
}
