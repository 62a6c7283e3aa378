//! Surface materials for scene meshes.

use glam::Vec3;

/// How a surface is shaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shading {
    /// Diffuse only
    Lambert,
    /// Diffuse plus specular highlight
    Phong,
    /// Animated flame shader, see [`FlameMaterial`](crate::FlameMaterial)
    Flame,
}

/// Material properties of a mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub shading: Shading,
    /// Base color in linear RGB
    pub color: Vec3,
    /// Blend with what is behind instead of overwriting it
    pub transparent: bool,
    /// Write to the depth buffer
    pub depth_write: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            shading: Shading::Lambert,
            color: Vec3::ONE,
            transparent: false,
            depth_write: true,
        }
    }
}

impl Material {
    /// Diffuse material from a `0xRRGGBB` color.
    pub fn lambert(hex: u32) -> Self {
        Self {
            color: color_from_hex(hex),
            ..Self::default()
        }
    }

    /// Specular material from a `0xRRGGBB` color.
    pub fn phong(hex: u32) -> Self {
        Self {
            shading: Shading::Phong,
            color: color_from_hex(hex),
            ..Self::default()
        }
    }

    /// Transparent flame material; color comes from the shader.
    pub fn flame() -> Self {
        Self {
            shading: Shading::Flame,
            transparent: true,
            ..Self::default()
        }
    }

    /// Disable depth writes.
    pub fn without_depth_write(mut self) -> Self {
        self.depth_write = false;
        self
    }
}

/// Convert a `0xRRGGBB` sRGB color to linear RGB.
pub fn color_from_hex(hex: u32) -> Vec3 {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    Vec3::new(channel(16), channel(8), channel(0))
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
