//! Geometry types for the starfield and carousel engines
//!
//! Small value types: pointer coordinates, particle positions, surface
//! sizes, and the column-major matrices handed to the renderer.

mod vec2;
mod vec3;
mod size;
mod mat4;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use size::Size;
pub use mat4::Mat4;
