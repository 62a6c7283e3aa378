//! Lighter model construction.
//!
//! A lighter is built from boxes and cylinders placed in world coordinates
//! under identity groups:
//!
//! ```text
//! <name>
//! ├── <name>Body   six parts, all named <name>Item
//! ├── <name>Head   three parts, all named <name>Item
//! └── <name>Flame  two planes
//! ```
//!
//! Every pickable part shares the `<name>Item` name so that a click anywhere
//! on the lighter resolves to the same hinge. The head group is what the
//! hinge rotates.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use glam::DVec3;

use crate::graph::{NodeId, SceneGraph, Shape};
use crate::material::Material;
use crate::transform::Transform;

/// Appearance and placement of one lighter.
#[derive(Clone, Debug, PartialEq)]
pub struct LighterSpec {
    pub name: String,
    pub body_color: u32,
    pub head_color: u32,
    pub position: DVec3,
}

impl LighterSpec {
    /// Name carried by every pickable part.
    pub fn item_name(&self) -> String {
        format!("{}Item", self.name)
    }

    /// Name of the body group.
    pub fn body_name(&self) -> String {
        format!("{}Body", self.name)
    }

    /// Name of the cap group the hinge rotates.
    pub fn head_name(&self) -> String {
        format!("{}Head", self.name)
    }

    /// Name of the flame planes.
    pub fn flame_name(&self) -> String {
        format!("{}Flame", self.name)
    }
}

/// Nodes created for one lighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LighterNodes {
    pub root: NodeId,
    pub body: NodeId,
    pub head: NodeId,
    pub flames: [NodeId; 2],
}

fn cuboid(x: f64, y: f64, z: f64) -> Shape {
    Shape::Cuboid {
        size: DVec3::new(x, y, z),
    }
}

fn cylinder(radius: f64, height: f64, segments: u32) -> Shape {
    Shape::Cylinder {
        radius,
        height,
        segments,
    }
}

/// Add a lighter to the scene.
///
/// The flame planes are sized from the viewport so they keep their look
/// across window sizes.
pub fn build_lighter(graph: &mut SceneGraph, spec: &LighterSpec, viewport: (u32, u32)) -> LighterNodes {
    let at = |x: f64, y: f64, z: f64| Transform::new().with_position(spec.position + DVec3::new(x, y, z));
    let item = spec.item_name();
    let body_material = Material::lambert(spec.body_color);
    let head_material = Material::lambert(spec.head_color);

    let root = graph.add_group(None, spec.name.clone(), Transform::new());

    let body = graph.add_group(Some(root), spec.body_name(), Transform::new());
    let mut bearing = at(-22.0, 52.0, 0.0);
    bearing.rotate_x(FRAC_PI_2);
    let mut vent_cap = at(10.0, 51.0, 0.0);
    vent_cap.rotate_z(FRAC_PI_4);
    let body_parts = [
        (at(0.0, 27.0, 0.0), cuboid(46.0, 50.0, 22.0)),
        (at(0.0, 27.0, 0.0), cuboid(42.0, 50.0, 26.0)),
        (at(0.0, 25.0, 0.0), cuboid(42.0, 50.0, 22.0)),
        (bearing, cylinder(1.0, 22.0, 8)),
        (at(4.0, 53.0, 0.0), cylinder(9.0, 14.0, 6)),
        (vent_cap, cuboid(10.0, 10.0, 10.0)),
    ];
    for (transform, shape) in body_parts {
        graph.add_mesh(Some(body), item.clone(), transform, shape, body_material.clone());
    }

    let head = graph.add_group(Some(root), spec.head_name(), Transform::new());
    let head_parts = [
        (at(0.0, 62.0, 0.0), cuboid(46.0, 20.0, 22.0)),
        (at(0.0, 62.0, 0.0), cuboid(42.0, 20.0, 26.0)),
        (at(0.0, 64.0, 0.0), cuboid(42.0, 20.0, 22.0)),
    ];
    for (transform, shape) in head_parts {
        graph.add_mesh(Some(head), item.clone(), transform, shape, head_material.clone());
    }

    const VIEWPORT_DIVISOR: f64 = 80.0;
    let flame_shape = Shape::Plane {
        width: f64::from(viewport.0) / VIEWPORT_DIVISOR,
        height: f64::from(viewport.1) / VIEWPORT_DIVISOR * 2.5,
    };
    let flames = [0.5, -0.5].map(|z| {
        graph.add_mesh(
            Some(root),
            spec.flame_name(),
            at(5.0, 70.0, z),
            flame_shape,
            Material::flame(),
        )
    });

    tracing::debug!("Built lighter '{}' at {:?}", spec.name, spec.position);

    LighterNodes {
        root,
        body,
        head,
        flames,
    }
}

/// Add the dark ground plane.
pub fn build_ground(graph: &mut SceneGraph) -> NodeId {
    let mut transform = Transform::new();
    transform.rotate_x(-FRAC_PI_2);
    graph.add_mesh(
        None,
        "ground",
        transform,
        Shape::Plane {
            width: 1000.0,
            height: 1000.0,
        },
        Material::phong(0x222222).without_depth_write(),
    )
}
