//! Carousel surface backed by page markup

use folio_fx::{CarouselLayout, CarouselSelectors, CarouselSurface};
use wasm_bindgen::JsCast;

/// A carousel container's track, slides and navigation buttons
pub struct DomCarouselSurface {
    track: web_sys::HtmlElement,
    slides: Vec<web_sys::HtmlElement>,
    next: web_sys::HtmlButtonElement,
    prev: web_sys::HtmlButtonElement,
}

impl DomCarouselSurface {
    /// Look up the pieces of carousel `id`. Returns `None` if the container
    /// or any part inside it is missing.
    pub fn find(
        document: &web_sys::Document,
        id: &str,
        selectors: &CarouselSelectors,
    ) -> Option<Self> {
        let container = document.get_element_by_id(id)?;
        let track = query::<web_sys::HtmlElement>(&container, &selectors.track)?;
        let next = query::<web_sys::HtmlButtonElement>(&container, &selectors.next)?;
        let prev = query::<web_sys::HtmlButtonElement>(&container, &selectors.prev)?;

        let children = track.children();
        let slides = (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .collect();

        Some(Self {
            track,
            slides,
            next,
            prev,
        })
    }

    pub fn next_button(&self) -> &web_sys::HtmlButtonElement {
        &self.next
    }

    pub fn prev_button(&self) -> &web_sys::HtmlButtonElement {
        &self.prev
    }
}

fn query<T: JsCast>(root: &web_sys::Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

impl CarouselSurface for DomCarouselSurface {
    fn container_width(&self) -> f32 {
        self.track
            .parent_element()
            .map(|parent| parent.client_width() as f32)
            .unwrap_or(0.0)
    }

    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn apply(&mut self, layout: &CarouselLayout) {
        // Style writes only fail on read-only declarations, which these are not
        let width = layout.slide_width_css();
        for slide in &self.slides {
            let _ = slide.style().set_property("width", &width);
        }
        let _ = self
            .track
            .style()
            .set_property("transform", &layout.track_transform());
        self.prev.set_disabled(layout.prev_disabled);
        self.next.set_disabled(layout.next_disabled);
    }
}
