//! Light definitions for the scene.

use glam::{DVec3, Vec3};

use crate::material::color_from_hex;

/// Uniform light reaching every surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

/// A point light (omnidirectional).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    /// Light position in world space
    pub position: DVec3,
    pub color: Vec3,
    pub intensity: f32,
}

/// Sky/ground gradient light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HemisphereLight {
    pub position: DVec3,
    pub sky_color: Vec3,
    pub ground_color: Vec3,
    pub intensity: f32,
}

/// Orthographic shadow volume of a directional light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowBounds {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// A directional light (sun-like), shining from `position` toward the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub position: DVec3,
    pub color: Vec3,
    pub intensity: f32,
    /// `None` when the light casts no shadows
    pub shadow: Option<ShadowBounds>,
}

impl DirectionalLight {
    /// Normalized direction the light travels in.
    pub fn direction(&self) -> DVec3 {
        (-self.position).normalize_or_zero()
    }
}

/// The full set of lights in the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct LightRig {
    pub ambient: AmbientLight,
    pub points: Vec<PointLight>,
    pub hemisphere: Option<HemisphereLight>,
    pub directional: Vec<DirectionalLight>,
}

impl Default for LightRig {
    /// Dim ambient and point fill, a white hemisphere and one shadow-casting sun.
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: color_from_hex(0x000000),
                intensity: 0.7,
            },
            points: vec![PointLight {
                position: DVec3::new(40.0, 80.0, 80.0),
                color: color_from_hex(0x000000),
                intensity: 0.9,
            }],
            hemisphere: Some(HemisphereLight {
                position: DVec3::new(0.0, 200.0, 0.0),
                sky_color: color_from_hex(0xffffff),
                ground_color: color_from_hex(0x444444),
                intensity: 1.0,
            }),
            directional: vec![DirectionalLight {
                position: DVec3::new(0.0, 200.0, 100.0),
                color: color_from_hex(0xffffff),
                intensity: 1.0,
                shadow: Some(ShadowBounds {
                    top: 180.0,
                    bottom: -100.0,
                    left: -120.0,
                    right: 120.0,
                }),
            }],
        }
    }
}

impl LightRig {
    /// Number of shadow-casting lights.
    pub fn shadow_casters(&self) -> usize {
        self.directional.iter().filter(|d| d.shadow.is_some()).count()
    }
}
