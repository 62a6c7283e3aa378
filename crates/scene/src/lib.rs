//! Scene graph and components.
//!
//! This crate provides scene management:
//! - Axis-angle rotations about an arbitrary pivot
//! - Transforms and the retained node graph
//! - Camera and orbit control
//! - Lights, materials and the flame shader state
//! - Ray picking
//! - Construction of the lighter models

pub mod camera;
pub mod flame;
pub mod graph;
pub mod light;
pub mod lighter;
pub mod material;
pub mod picking;
pub mod rotation;
pub mod transform;

pub use camera::{Camera, OrbitController, Projection};
pub use flame::{FlameMaterial, FlameUniforms};
pub use graph::{Node, NodeId, PoseTarget, SceneGraph, Shape};
pub use light::{AmbientLight, DirectionalLight, HemisphereLight, LightRig, PointLight};
pub use lighter::{LighterNodes, LighterSpec, build_ground, build_lighter};
pub use material::Material;
pub use picking::{Aabb, Hit, Ray, Raycaster};
pub use rotation::{RotationAxis, rotation_about_axis};
pub use transform::Transform;
