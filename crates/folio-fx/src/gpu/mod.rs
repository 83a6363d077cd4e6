//! WebGPU/WebGL2 renderer for starfields
//!
//! Draws each particle as a screen-aligned quad (one instance per particle)
//! so point size and distance attenuation work the same on both backends.

mod init;
mod renderer;
mod shaders;
mod uniforms;

pub use renderer::GpuStarRenderer;
pub use uniforms::PointUniforms;
