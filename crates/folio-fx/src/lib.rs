//! Page effects for the Folio portfolio
//!
//! This crate provides the interactive pieces of the portfolio page:
//! - Starfield backdrops: drifting particle clouds that react to the pointer
//! - Carousels: paginated slide tracks with prev/next controls
//! - Theme handling (light/dark star colors)
//! - Page configuration and responsive breakpoints
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Vec3`, `Size`, `Mat4`)
//! - [`starfield`]: Particle fields and the shared [`AnimationHost`]
//! - [`carousel`]: Carousel layout and state machine
//! - [`clock`] / [`pointer`]: Injectable time and pointer sources
//! - [`testing`]: In-memory renderer and carousel surface
//! - `gpu` (feature `wasm`): WebGPU/WebGL2 point renderer
//!
//! ## Example
//!
//! ```rust
//! use folio_fx::testing::MemorySurface;
//! use folio_fx::Carousel;
//!
//! let mut carousel = Carousel::new(MemorySurface::new(900.0, 5), 1280.0);
//! assert!(carousel.next());
//! assert_eq!(carousel.index(), 1);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: Engine state is plain Rust, testable without a browser
//! 2. **Time Abstraction**: Animation reads an injectable [`TimeSource`]
//! 3. **Narrow Seams**: Drawing and DOM access sit behind [`StarRenderer`] and [`CarouselSurface`]

pub mod math;
pub mod config;
pub mod error;
pub mod theme;
pub mod viewport;
pub mod clock;
pub mod pointer;
pub mod starfield;
pub mod carousel;
pub mod testing;

// GPU renderer (only available with "wasm" feature)
#[cfg(feature = "wasm")]
pub mod gpu;

pub use carousel::{Carousel, CarouselLayout, CarouselSurface};
pub use clock::{AnimationClock, ManualTime, TimeSource};
pub use config::{CarouselSelectors, PageConfig, StarfieldConfig};
pub use error::FolioError;
pub use math::{Mat4, Size, Vec2, Vec3};
pub use pointer::{FixedPointer, PointerSource, PointerState};
pub use starfield::{AnimationHost, StarFrame, StarRenderer, Starfield, StarfieldId, TickReport};
pub use theme::Theme;
pub use viewport::Viewport;

#[cfg(feature = "wasm")]
pub use gpu::GpuStarRenderer;
