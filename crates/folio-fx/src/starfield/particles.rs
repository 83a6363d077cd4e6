//! Particle cloud generation
//!
//! Positions are sampled once, uniformly from an axis-aligned cube centered
//! at the origin, and never touched again.

use crate::error::FolioError;
use crate::math::Vec3;

/// Seedable splitmix64 generator used to scatter particles
#[derive(Clone, Debug)]
pub struct ParticleRng {
    state: u64,
}

impl ParticleRng {
    /// Generator with a fixed seed; the same seed yields the same cloud
    pub fn seeded(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generator seeded from the platform random source
    pub fn from_entropy() -> Result<Self, FolioError> {
        let mut seed = [0u8; 8];
        getrandom::getrandom(&mut seed)
            .map_err(|e| FolioError::Entropy(format!("particle seed: {}", e)))?;
        Ok(Self::seeded(u64::from_le_bytes(seed)))
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform float in [0, 1)
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }
}

/// Fixed set of particle positions rendered as one draw object
#[derive(Clone, Debug)]
pub struct ParticleCloud {
    positions: Vec<Vec3>,
}

impl ParticleCloud {
    /// Scatter `count` particles uniformly in a cube of side `spread`
    pub fn generate(count: usize, spread: f32, rng: &mut ParticleRng) -> Self {
        let mut sample = || (rng.next_f32() - 0.5) * spread;
        let positions = (0..count)
            .map(|_| {
                let x = sample();
                let y = sample();
                let z = sample();
                Vec3::new(x, y, z)
            })
            .collect();
        Self { positions }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Positions flattened to x/y/z triples for a vertex buffer
    pub fn to_vertex_data(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| p.to_array()).collect()
    }
}
