//! Column-major 4x4 matrix for camera and cloud transforms

use super::Vec3;

/// Column-major 4x4 matrix (`cols[column][row]`), laid out the way WGSL
/// expects `mat4x4<f32>` in a uniform buffer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    pub cols: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    /// Identity matrix
    pub const IDENTITY: Mat4 = Mat4 {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Right-handed perspective projection with a [0, 1] depth range
    pub fn perspective_rh(fov_y_radians: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y_radians * 0.5).tan();
        let range = near - far;
        Self {
            cols: [
                [f / aspect, 0.0, 0.0, 0.0],
                [0.0, f, 0.0, 0.0],
                [0.0, 0.0, far / range, -1.0],
                [0.0, 0.0, near * far / range, 0.0],
            ],
        }
    }

    /// Translation matrix
    pub fn translation(v: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = [v.x, v.y, v.z, 1.0];
        m
    }

    /// Rotation around the X axis (pitch)
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, c, s, 0.0],
                [0.0, -s, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Rotation around the Y axis (yaw)
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            cols: [
                [c, 0.0, -s, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [s, 0.0, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Matrix product `self * rhs`
    pub fn mul(&self, rhs: &Mat4) -> Mat4 {
        let mut out = [[0.0f32; 4]; 4];
        for (j, col) in out.iter_mut().enumerate() {
            for (i, cell) in col.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.cols[k][i] * rhs.cols[j][k]).sum();
            }
        }
        Mat4 { cols: out }
    }

    /// Transform a point, returning clip-space xyz and w
    pub fn transform_point(&self, p: Vec3) -> (Vec3, f32) {
        let v = [p.x, p.y, p.z, 1.0];
        let mut out = [0.0f32; 4];
        for (i, cell) in out.iter_mut().enumerate() {
            *cell = (0..4).map(|k| self.cols[k][i] * v[k]).sum();
        }
        (Vec3::new(out[0], out[1], out[2]), out[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a.x - b.x).abs() < 0.001 && (a.y - b.y).abs() < 0.001 && (a.z - b.z).abs() < 0.001
    }

    #[test]
    fn test_identity_mul() {
        let t = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Mat4::IDENTITY.mul(&t), t);
        assert_eq!(t.mul(&Mat4::IDENTITY), t);
    }

    #[test]
    fn test_translation_moves_point() {
        let t = Mat4::translation(Vec3::new(0.0, 0.0, -5.0));
        let (p, w) = t.transform_point(Vec3::new(1.0, 1.0, 1.0));
        assert!(approx(p, Vec3::new(1.0, 1.0, -4.0)));
        assert!((w - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_rotation_y_quarter_turn() {
        let r = Mat4::rotation_y(std::f32::consts::FRAC_PI_2);
        let (p, _) = r.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!(approx(p, Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_rotation_x_quarter_turn() {
        let r = Mat4::rotation_x(std::f32::consts::FRAC_PI_2);
        let (p, _) = r.transform_point(Vec3::new(0.0, 1.0, 0.0));
        assert!(approx(p, Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_perspective_depth_range() {
        let proj = Mat4::perspective_rh(60f32.to_radians(), 1.0, 1.0, 1000.0);

        let (near, w) = proj.transform_point(Vec3::new(0.0, 0.0, -1.0));
        assert!((near.z / w - 0.0).abs() < 0.001);

        let (far, w) = proj.transform_point(Vec3::new(0.0, 0.0, -1000.0));
        assert!((far.z / w - 1.0).abs() < 0.001);
    }
}
