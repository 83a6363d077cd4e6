//! Starfield engine
//!
//! One [`Starfield`] per canvas: a fixed particle cloud, a perspective
//! camera, a themed point material and a renderer. All registered fields
//! are driven together by an [`AnimationHost`] so a single frame loop
//! serves every canvas on the page.
//!
//! - `particles`: cloud sampling and the seedable generator
//! - `camera`: perspective camera
//! - `material`: point color and size
//! - `renderer`: the [`StarRenderer`] seam and per-frame data
//! - `field`: one animated field
//! - `host`: the registry that ticks, resizes and recolors every field

mod particles;
mod camera;
mod material;
mod renderer;
mod field;
mod host;

pub use particles::{ParticleCloud, ParticleRng};
pub use camera::PerspectiveCamera;
pub use material::{Color, PointsMaterial};
pub use renderer::{StarFrame, StarRenderer};
pub use field::{depth_offset, pointer_rotation, CloudTransform, Starfield};
pub use host::{AnimationHost, StarfieldId, TickReport};
