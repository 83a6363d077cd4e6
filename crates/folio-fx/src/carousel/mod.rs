//! Carousel engine
//!
//! A paginated sliding window over a fixed list of slides. Layout is a
//! pure value computed from `(index, slide count, container width,
//! items per page)` and handed to a [`CarouselSurface`] to apply.

mod carousel;
mod layout;
mod surface;

pub use carousel::Carousel;
pub use layout::{max_index, CarouselLayout};
pub use surface::CarouselSurface;
