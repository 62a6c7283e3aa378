//! Axis-angle rotation about an arbitrary line.
//!
//! [`rotation_about_axis`] builds the rigid transform that rotates space by
//! `theta` radians about the line through `pivot` with direction `axis`,
//! using the closed Rodrigues form with the pivot folded into the
//! translation column. The pivot is the fixed point of the result.
//!
//! # Example
//!
//! ```
//! use glam::DVec3;
//! use lighter_scene::rotation_about_axis;
//!
//! let pivot = DVec3::new(-93.0, 53.0, 0.0);
//! let hinge = rotation_about_axis(pivot, DVec3::Z, std::f64::consts::FRAC_PI_3).unwrap();
//!
//! assert!((hinge.transform_point3(pivot) - pivot).length() < 1e-9);
//! ```

use glam::{DMat4, DVec3};

use lighter_core::{Error, Result};

/// A line in space that a hinge turns about.
///
/// The direction is validated on construction and stored as given; it is
/// normalized when a rotation is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationAxis {
    pivot: DVec3,
    direction: DVec3,
}

impl RotationAxis {
    /// Create an axis through `pivot` along `direction`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidAxis`] if `direction` has zero or non-finite length.
    pub fn new(pivot: DVec3, direction: DVec3) -> Result<Self> {
        unit_direction(direction)?;
        Ok(Self { pivot, direction })
    }

    /// Point the axis passes through.
    pub fn pivot(&self) -> DVec3 {
        self.pivot
    }

    /// Direction of the axis as configured (not necessarily unit length).
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Rotation by `theta` radians about this axis (right-hand rule).
    pub fn rotation(&self, theta: f64) -> DMat4 {
        rodrigues(self.pivot, self.direction.normalize(), theta)
    }

    /// Distance from `point` to the axis line.
    pub fn distance_to(&self, point: DVec3) -> f64 {
        (point - self.pivot).cross(self.direction.normalize()).length()
    }
}

/// Build the transform rotating `theta` radians about the line through `pivot`
/// along `axis`.
///
/// `axis` does not need to be normalized. Positive angles turn
/// counter-clockwise when looking down the axis toward the pivot.
///
/// # Errors
/// Returns [`Error::InvalidAxis`] if `axis` has zero or non-finite length.
pub fn rotation_about_axis(pivot: DVec3, axis: DVec3, theta: f64) -> Result<DMat4> {
    let unit = unit_direction(axis)?;
    Ok(rodrigues(pivot, unit, theta))
}

fn unit_direction(axis: DVec3) -> Result<DVec3> {
    let length = axis.length();
    if !(length.is_finite() && length > 0.0) {
        return Err(Error::InvalidAxis(axis.to_array()));
    }
    Ok(axis / length)
}

/// Closed-form rotation about a unit axis through `pivot`.
fn rodrigues(pivot: DVec3, unit: DVec3, theta: f64) -> DMat4 {
    let DVec3 { x, y, z } = pivot;
    let DVec3 { x: u, y: v, z: w } = unit;

    let (u2, v2, w2) = (u * u, v * v, w * w);
    let (sin_t, cos_t) = theta.sin_cos();
    let one_minus_cos = 1.0 - cos_t;

    // Column-major: each group of four is one column.
    DMat4::from_cols_array(&[
        u2 + (v2 + w2) * cos_t,
        u * v * one_minus_cos + w * sin_t,
        u * w * one_minus_cos - v * sin_t,
        0.0,
        u * v * one_minus_cos - w * sin_t,
        v2 + (u2 + w2) * cos_t,
        v * w * one_minus_cos + u * sin_t,
        0.0,
        u * w * one_minus_cos + v * sin_t,
        v * w * one_minus_cos - u * sin_t,
        w2 + (u2 + v2) * cos_t,
        0.0,
        (x * (v2 + w2) - u * (y * v + z * w)) * one_minus_cos + (y * w - z * v) * sin_t,
        (y * (u2 + w2) - v * (x * u + z * w)) * one_minus_cos + (z * u - x * w) * sin_t,
        (z * (u2 + v2) - w * (x * u + y * v)) * one_minus_cos + (x * v - y * u) * sin_t,
        1.0,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    const EPSILON: f64 = 1e-9;

    fn approx_eq_vec3(a: DVec3, b: DVec3) -> bool {
        (a - b).abs().max_element() < EPSILON
    }

    fn approx_eq_mat4(a: DMat4, b: DMat4) -> bool {
        a.to_cols_array()
            .iter()
            .zip(b.to_cols_array().iter())
            .all(|(x, y)| (x - y).abs() < EPSILON)
    }

    fn samples() -> Vec<(DVec3, DVec3, f64)> {
        vec![
            (DVec3::new(-93.0, 53.0, 0.0), DVec3::Z, FRAC_PI_3),
            (DVec3::new(-22.0, 53.0, 0.0), DVec3::Z, -FRAC_PI_3),
            (DVec3::new(47.0, 53.0, 0.0), DVec3::new(0.0, 0.0, 5.0), 2.5),
            (DVec3::new(1.5, -2.0, 3.25), DVec3::new(1.0, 2.0, -3.0), 0.7),
            (DVec3::ZERO, DVec3::new(-0.3, 0.4, 12.0), -4.0),
            (DVec3::new(10.0, 10.0, 10.0), DVec3::X, PI),
        ]
    }

    #[test]
    fn test_pivot_is_fixed_point() {
        for (pivot, axis, theta) in samples() {
            let m = rotation_about_axis(pivot, axis, theta).unwrap();
            let mapped = m.transform_point3(pivot);
            assert!(
                approx_eq_vec3(mapped, pivot),
                "pivot {:?} moved to {:?}",
                pivot,
                mapped
            );
        }
    }

    #[test]
    fn test_inverse_angle_undoes_rotation() {
        for (pivot, axis, theta) in samples() {
            let forward = rotation_about_axis(pivot, axis, theta).unwrap();
            let back = rotation_about_axis(pivot, axis, -theta).unwrap();
            assert!(approx_eq_mat4(forward * back, DMat4::IDENTITY));
            assert!(approx_eq_mat4(back * forward, DMat4::IDENTITY));
        }
    }

    #[test]
    fn test_preserves_distance_from_axis() {
        let points = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(-47.0, 72.0, 11.0),
            DVec3::new(3.0, -8.0, 100.0),
        ];
        for (pivot, axis, theta) in samples() {
            let line = RotationAxis::new(pivot, axis).unwrap();
            let m = line.rotation(theta);
            for p in points {
                let before = line.distance_to(p);
                let after = line.distance_to(m.transform_point3(p));
                assert!((before - after).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_hinge_scenario() {
        let pivot = DVec3::new(-93.0, 53.0, 0.0);
        let m = rotation_about_axis(pivot, DVec3::new(0.0, 0.0, 1.0), FRAC_PI_3).unwrap();

        let half_sqrt3 = 3.0_f64.sqrt() / 2.0;
        // Rows of the rotation block.
        assert!(approx_eq_vec3(m.row(0).truncate(), DVec3::new(0.5, -half_sqrt3, 0.0)));
        assert!(approx_eq_vec3(m.row(1).truncate(), DVec3::new(half_sqrt3, 0.5, 0.0)));
        assert!(approx_eq_vec3(m.row(2).truncate(), DVec3::new(0.0, 0.0, 1.0)));
        assert_eq!(m.row(3).to_array(), [0.0, 0.0, 0.0, 1.0]);

        assert!(approx_eq_vec3(m.transform_point3(pivot), pivot));
    }

    #[test]
    fn test_right_hand_rule() {
        let pivot = DVec3::new(5.0, -1.0, 2.0);
        let m = rotation_about_axis(pivot, DVec3::Z, FRAC_PI_2).unwrap();
        let rotated = m.transform_point3(pivot + DVec3::X);
        assert!(approx_eq_vec3(rotated, pivot + DVec3::Y));
    }

    #[test]
    fn test_matches_translate_rotate_translate() {
        for (pivot, axis, theta) in samples() {
            let expected = DMat4::from_translation(pivot)
                * DMat4::from_axis_angle(axis.normalize(), theta)
                * DMat4::from_translation(-pivot);
            let m = rotation_about_axis(pivot, axis, theta).unwrap();
            assert!(approx_eq_mat4(m, expected));
        }
    }

    #[test]
    fn test_axis_length_is_irrelevant() {
        let pivot = DVec3::new(-22.0, 53.0, 0.0);
        let unit = rotation_about_axis(pivot, DVec3::Z, 1.1).unwrap();
        let long = rotation_about_axis(pivot, DVec3::new(0.0, 0.0, 40.0), 1.1).unwrap();
        assert!(approx_eq_mat4(unit, long));
    }

    #[test]
    fn test_zero_axis_is_rejected() {
        let result = rotation_about_axis(DVec3::ONE, DVec3::ZERO, FRAC_PI_3);
        assert!(matches!(result, Err(Error::InvalidAxis(_))));

        let result = RotationAxis::new(DVec3::ONE, DVec3::new(f64::NAN, 0.0, 1.0));
        assert!(matches!(result, Err(Error::InvalidAxis(_))));
    }

    #[test]
    fn test_axis_accessors() {
        let axis = RotationAxis::new(DVec3::new(47.0, 53.0, 0.0), DVec3::new(0.0, 0.0, 2.0)).unwrap();
        assert_eq!(axis.pivot(), DVec3::new(47.0, 53.0, 0.0));
        assert_eq!(axis.direction(), DVec3::new(0.0, 0.0, 2.0));
    }
}
