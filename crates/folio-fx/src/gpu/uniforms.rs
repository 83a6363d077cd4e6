use crate::starfield::StarFrame;

/// Uniform data for the point shader
/// NOTE: Layout must match the WGSL `Uniforms` struct (176 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointUniforms {
    pub view_proj: [[f32; 4]; 4], // offset 0
    pub model: [[f32; 4]; 4],     // offset 64
    pub color: [f32; 4],          // offset 128
    pub params: [f32; 4],         // offset 144
    pub resolution: [f32; 4],     // offset 160
}

impl PointUniforms {
    /// Pack a frame for a drawing buffer of `width` x `height` device pixels
    pub fn from_frame(frame: &StarFrame, width: u32, height: u32) -> Self {
        Self {
            view_proj: frame.view_projection.cols,
            model: frame.model.cols,
            color: frame.color,
            params: [
                frame.point_size,
                if frame.size_attenuation { 1.0 } else { 0.0 },
                frame.pixel_ratio,
                0.0,
            ],
            resolution: [width as f32, height as f32, 0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Mat4;

    #[test]
    fn test_uniform_size() {
        assert_eq!(std::mem::size_of::<PointUniforms>(), 176);
        assert_eq!(std::mem::size_of::<PointUniforms>() % 16, 0);
    }

    #[test]
    fn test_from_frame() {
        let frame = StarFrame {
            view_projection: Mat4::IDENTITY,
            model: Mat4::translation(crate::math::Vec3::new(0.0, 0.0, 5.0)),
            color: [0.5, 0.5, 0.5, 1.0],
            point_size: 0.7,
            size_attenuation: true,
            pixel_ratio: 2.0,
        };
        let u = PointUniforms::from_frame(&frame, 3840, 2160);

        assert!((u.model[3][2] - 5.0).abs() < 0.001);
        assert!((u.params[0] - 0.7).abs() < 0.001);
        assert!((u.params[1] - 1.0).abs() < 0.001);
        assert!((u.params[2] - 2.0).abs() < 0.001);
        assert!((u.resolution[1] - 2160.0).abs() < 0.001);
    }
}
