//! Browser shell for the Folio portfolio page
//!
//! Binds the `folio-fx` engines to the page: finds the canvases and
//! carousel markup, wires pointer, resize and click events, and drives every
//! starfield from one `requestAnimationFrame` loop.
//!
//! ## Module Structure
//!
//! - `portfolio` - `mount()` and the `Portfolio` handle exported to JS
//! - `dom` - Carousel surface over the page markup
//! - `frame` - requestAnimationFrame loop
//! - `listener` - Self-removing event listeners
//! - `time` - `performance.now()` time source
//! - `util` - Console logging and window/document helpers
//!
//! ## Usage
//!
//! ```js
//! import init, { mount } from "./pkg/folio_web.js";
//!
//! await init();
//! const page = await mount();          // default targets
//! page.setTheme(true);                 // light mode
//! page.dispose();
//! ```

// =============================================================================
// Module declarations
// =============================================================================

mod dom;
mod frame;
mod listener;
mod portfolio;
mod time;
pub(crate) mod util;

// =============================================================================
// Public re-exports
// =============================================================================

pub use dom::DomCarouselSurface;
pub use portfolio::{mount, Portfolio};
pub use time::PerformanceTime;
