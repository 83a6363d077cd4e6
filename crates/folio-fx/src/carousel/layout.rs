//! Carousel layout computation

use serde::Serialize;

/// Largest valid page index: the window of `items_per_page` slides starting
/// there still ends at the last slide. Zero when everything fits.
#[inline]
pub fn max_index(slide_count: usize, items_per_page: usize) -> usize {
    slide_count.saturating_sub(items_per_page)
}

/// Layout for one carousel state
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CarouselLayout {
    pub index: usize,
    pub items_per_page: usize,
    /// Width assigned to every slide
    pub slide_width: f32,
    /// Leftward translation of the track
    pub offset: f32,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl CarouselLayout {
    pub fn compute(
        index: usize,
        slide_count: usize,
        container_width: f32,
        items_per_page: usize,
    ) -> Self {
        let items_per_page = items_per_page.max(1);
        let slide_width = container_width.max(0.0) / items_per_page as f32;
        Self {
            index,
            items_per_page,
            slide_width,
            offset: index as f32 * slide_width,
            prev_disabled: index == 0,
            next_disabled: index >= max_index(slide_count, items_per_page),
        }
    }

    /// CSS `transform` for the track
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}px)", self.offset)
    }

    /// CSS `width` for each slide
    pub fn slide_width_css(&self) -> String {
        format!("{}px", self.slide_width)
    }
}
