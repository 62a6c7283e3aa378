//! Flame shader state.
//!
//! The flame is a pair of transparent planes drawn with a procedural
//! fragment shader. On the CPU side only the uniform block changes: `iTime`
//! advances a fixed step every frame.
//!
//! # GPU Memory Layout (std140)
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0      | 12   | resolution |
//! | 12     | 4    | time |
//! | 16     | 8    | mouse |
//! | 24     | 8    | _padding |

use bytemuck::{Pod, Zeroable};

/// Uniforms consumed by the flame shader.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct FlameUniforms {
    /// `iResolution`
    pub resolution: [f32; 3],
    /// `iTime`
    pub time: f32,
    /// `iMouse`
    pub mouse: [f32; 2],
    pub _padding: [f32; 2],
}

impl Default for FlameUniforms {
    fn default() -> Self {
        Self {
            resolution: [1.0, 1.0, 1.0],
            time: 0.0,
            mouse: [0.0, 0.0],
            _padding: [0.0; 2],
        }
    }
}

/// Per-lighter flame animation.
#[derive(Clone, Debug)]
pub struct FlameMaterial {
    uniforms: FlameUniforms,
    time_step: f32,
    lit: bool,
}

impl FlameMaterial {
    /// Create an unlit flame advancing `time_step` per frame.
    pub fn new(time_step: f32) -> Self {
        Self {
            uniforms: FlameUniforms::default(),
            time_step,
            lit: false,
        }
    }

    /// Advance the animation by one frame.
    pub fn tick(&mut self) {
        self.uniforms.time += self.time_step;
    }

    pub fn set_lit(&mut self, lit: bool) {
        self.lit = lit;
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn time(&self) -> f32 {
        self.uniforms.time
    }

    /// Uniform block ready for upload.
    pub fn uniforms(&self) -> &FlameUniforms {
        &self.uniforms
    }

    /// Uniform block as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.uniforms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_layout() {
        assert_eq!(std::mem::size_of::<FlameUniforms>(), 32);
        assert_eq!(std::mem::offset_of!(FlameUniforms, time), 12);
        assert_eq!(std::mem::offset_of!(FlameUniforms, mouse), 16);
        assert_eq!(FlameMaterial::new(0.004).as_bytes().len(), 32);
    }

    #[test]
    fn test_tick_advances_time() {
        let mut flame = FlameMaterial::new(0.004);
        for _ in 0..250 {
            flame.tick();
        }
        assert!((flame.time() - 1.0).abs() < 1e-4);
        assert_eq!(flame.uniforms().resolution, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_starts_unlit() {
        let mut flame = FlameMaterial::new(0.004);
        assert!(!flame.is_lit());
        flame.set_lit(true);
        assert!(flame.is_lit());
    }
}
