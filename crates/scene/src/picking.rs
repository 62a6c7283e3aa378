//! Ray picking against mesh nodes.
//!
//! Each mesh is tested by moving the ray into the node's local space and
//! intersecting the shape's bounding box there, so rotated parts are picked
//! by their oriented box.

use glam::{DMat4, DVec2, DVec3};

use crate::camera::Camera;
use crate::graph::{NodeId, SceneGraph};

/// A half-line with an origin and a direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// Create a ray; `direction` is normalized.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// Transform the ray by an affine matrix.
    ///
    /// The direction is not renormalized, so parameters along the result
    /// match parameters along the original ray.
    pub fn transformed(&self, matrix: DMat4) -> Self {
        Self {
            origin: matrix.transform_point3(self.origin),
            direction: matrix.transform_vector3(self.direction),
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Check whether `point` lies inside or on the box.
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Ray parameter where the ray first touches the box.
    ///
    /// A ray starting inside the box reports where it leaves. Returns `None`
    /// if the box is missed or lies entirely behind the origin.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f64> {
        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let direction = ray.direction[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if direction == 0.0 {
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / direction;
            let (mut t0, mut t1) = ((lo - origin) * inv, (hi - origin) * inv);
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }

        if t_max < 0.0 {
            None
        } else if t_min >= 0.0 {
            Some(t_min)
        } else {
            Some(t_max)
        }
    }
}

/// A picked mesh node.
#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    pub node: NodeId,
    pub name: String,
    /// Distance from the ray origin in world units
    pub distance: f64,
    /// World-space point where the ray meets the node's bounds
    pub point: DVec3,
}

/// Casts a world-space ray into a [`SceneGraph`].
#[derive(Clone, Debug)]
pub struct Raycaster {
    pub ray: Ray,
    /// Hits closer than this are ignored
    pub near: f64,
    /// Hits farther than this are ignored
    pub far: f64,
}

impl Raycaster {
    /// Create a raycaster with an unbounded range.
    pub fn new(ray: Ray) -> Self {
        Self {
            ray,
            near: 0.0,
            far: f64::INFINITY,
        }
    }

    /// Create a raycaster through a point in normalized device coordinates.
    pub fn from_camera(ndc: DVec2, camera: &Camera) -> Self {
        Self::new(camera.ray_from_ndc(ndc))
    }

    /// All visible mesh nodes hit by the ray, nearest first.
    pub fn intersect(&self, graph: &SceneGraph) -> Vec<Hit> {
        const MIN_DETERMINANT: f64 = 1e-12;

        let mut hits: Vec<Hit> = graph
            .meshes()
            .filter(|(id, _)| graph.is_visible(*id))
            .filter_map(|(id, node)| {
                let shape = node.shape?;
                let world = graph.world_matrix(id);
                if world.determinant().abs() < MIN_DETERMINANT {
                    return None;
                }
                let local = self.ray.transformed(world.inverse());
                let t = shape.local_bounds().intersect_ray(&local)?;
                (t >= self.near && t <= self.far).then(|| Hit {
                    node: id,
                    name: node.name.clone(),
                    distance: t,
                    point: self.ray.at(t),
                })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    /// Nearest visible mesh node hit by the ray.
    pub fn pick(&self, graph: &SceneGraph) -> Option<Hit> {
        self.intersect(graph).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Shape;
    use crate::material::Material;
    use crate::transform::Transform;
    use glam::DQuat;
    use std::f64::consts::FRAC_PI_4;

    const EPSILON: f64 = 1e-9;

    fn unit_box() -> Aabb {
        Aabb::new(DVec3::splat(-1.0), DVec3::splat(1.0))
    }

    fn cube(size: f64) -> Shape {
        Shape::Cuboid {
            size: DVec3::splat(size),
        }
    }

    #[test]
    fn test_aabb_hit_from_outside() {
        let ray = Ray::new(DVec3::new(0.0, 0.0, 5.0), DVec3::NEG_Z);
        let t = unit_box().intersect_ray(&ray).unwrap();
        assert!((t - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_aabb_miss() {
        let ray = Ray::new(DVec3::new(3.0, 0.0, 5.0), DVec3::NEG_Z);
        assert!(unit_box().intersect_ray(&ray).is_none());
    }

    #[test]
    fn test_aabb_behind_origin() {
        let ray = Ray::new(DVec3::new(0.0, 0.0, 5.0), DVec3::Z);
        assert!(unit_box().intersect_ray(&ray).is_none());
    }

    #[test]
    fn test_aabb_origin_inside() {
        let ray = Ray::new(DVec3::ZERO, DVec3::X);
        let t = unit_box().intersect_ray(&ray).unwrap();
        assert!((t - 1.0).abs() < EPSILON);
        assert!(unit_box().contains(DVec3::ZERO));
    }

    #[test]
    fn test_flat_box() {
        let plane = Aabb::new(DVec3::new(-1.0, -1.0, 0.0), DVec3::new(1.0, 1.0, 0.0));
        let ray = Ray::new(DVec3::new(0.5, 0.5, 2.0), DVec3::NEG_Z);
        let t = plane.intersect_ray(&ray).unwrap();
        assert!((t - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_pick_frontmost() {
        let mut graph = SceneGraph::new();
        graph.add_mesh(
            None,
            "far",
            Transform::new().with_position(DVec3::new(0.0, 0.0, -10.0)),
            cube(2.0),
            Material::default(),
        );
        graph.add_mesh(
            None,
            "near",
            Transform::new().with_position(DVec3::new(0.0, 0.0, -4.0)),
            cube(2.0),
            Material::default(),
        );

        let caster = Raycaster::new(Ray::new(DVec3::ZERO, DVec3::NEG_Z));
        let hits = caster.intersect(&graph);
        assert_eq!(hits.len(), 2);

        let hit = caster.pick(&graph).unwrap();
        assert_eq!(hit.name, "near");
        assert!((hit.distance - 3.0).abs() < EPSILON);
        assert!((hit.point - DVec3::new(0.0, 0.0, -3.0)).length() < EPSILON);
    }

    #[test]
    fn test_pick_respects_rotation() {
        let mut graph = SceneGraph::new();
        // A thin bar along X, rotated 45 degrees about Z.
        graph.add_mesh(
            None,
            "bar",
            Transform::new().with_rotation(DQuat::from_rotation_z(FRAC_PI_4)),
            Shape::Cuboid {
                size: DVec3::new(10.0, 0.5, 0.5),
            },
            Material::default(),
        );

        let along_bar = DVec3::new(3.0, 3.0, 5.0);
        let caster = Raycaster::new(Ray::new(along_bar, DVec3::NEG_Z));
        assert!(caster.pick(&graph).is_some());

        let off_bar = DVec3::new(4.0, 0.0, 5.0);
        let caster = Raycaster::new(Ray::new(off_bar, DVec3::NEG_Z));
        assert!(caster.pick(&graph).is_none());
    }

    #[test]
    fn test_pick_skips_hidden_nodes() {
        let mut graph = SceneGraph::new();
        let hidden = graph.add_mesh(
            None,
            "hidden",
            Transform::new().with_position(DVec3::new(0.0, 0.0, -4.0)),
            cube(2.0),
            Material::default(),
        );
        graph.add_mesh(
            None,
            "shown",
            Transform::new().with_position(DVec3::new(0.0, 0.0, -10.0)),
            cube(2.0),
            Material::default(),
        );
        graph.set_visible(hidden, false);

        let caster = Raycaster::new(Ray::new(DVec3::ZERO, DVec3::NEG_Z));
        assert_eq!(caster.pick(&graph).unwrap().name, "shown");
    }

    #[test]
    fn test_far_limit() {
        let mut graph = SceneGraph::new();
        graph.add_mesh(
            None,
            "far",
            Transform::new().with_position(DVec3::new(0.0, 0.0, -100.0)),
            cube(2.0),
            Material::default(),
        );

        let mut caster = Raycaster::new(Ray::new(DVec3::ZERO, DVec3::NEG_Z));
        caster.far = 50.0;
        assert!(caster.pick(&graph).is_none());
    }
}
