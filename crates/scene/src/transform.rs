//! Transform component for scene nodes.
//!
//! This module provides the [`Transform`] struct for representing the local
//! position, rotation, and scale of a node. Parent/child composition lives in
//! [`SceneGraph`](crate::SceneGraph).
//!
//! # Example
//!
//! ```
//! use glam::{DMat4, DVec3};
//! use lighter_scene::Transform;
//!
//! let mut t = Transform::new().with_position(DVec3::new(1.0, 0.0, 0.0));
//!
//! // Compose a world-space translation onto the current pose
//! t.apply_matrix(DMat4::from_translation(DVec3::new(0.0, 2.0, 0.0)));
//! assert!((t.position - DVec3::new(1.0, 2.0, 0.0)).length() < 1e-9);
//! ```

use glam::{DMat4, DQuat, DVec3};

/// A transform representing position, rotation, and scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    /// Position relative to the parent node
    pub position: DVec3,
    /// Rotation as a quaternion
    pub rotation: DQuat,
    /// Scale factor
    pub scale: DVec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            scale: DVec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transform with the given position.
    pub fn with_position(mut self, position: DVec3) -> Self {
        self.position = position;
        self
    }

    /// Create a transform with the given rotation.
    pub fn with_rotation(mut self, rotation: DQuat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Create a transform with the given scale.
    pub fn with_scale(mut self, scale: DVec3) -> Self {
        self.scale = scale;
        self
    }

    /// Decompose an affine matrix into a transform.
    ///
    /// Shear is not representable and is lost.
    pub fn from_matrix(matrix: DMat4) -> Self {
        let (scale, rotation, position) = matrix.to_scale_rotation_translation();
        Self {
            position,
            rotation: rotation.normalize(),
            scale,
        }
    }

    /// Get the local transformation matrix.
    pub fn local_matrix(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Compose `matrix` onto this transform.
    ///
    /// The result is `matrix * local_matrix()`: the current pose is kept and
    /// `matrix` is applied after it, in the parent's space.
    pub fn apply_matrix(&mut self, matrix: DMat4) {
        *self = Self::from_matrix(matrix * self.local_matrix());
    }

    /// Rotate about the local X axis.
    pub fn rotate_x(&mut self, angle: f64) {
        self.rotation *= DQuat::from_rotation_x(angle);
    }

    /// Rotate about the local Z axis.
    pub fn rotate_z(&mut self, angle: f64) {
        self.rotation *= DQuat::from_rotation_z(angle);
    }

    /// Get the forward direction vector.
    pub fn forward(&self) -> DVec3 {
        self.rotation * DVec3::NEG_Z
    }

    /// Get the right direction vector.
    pub fn right(&self) -> DVec3 {
        self.rotation * DVec3::X
    }

    /// Get the up direction vector.
    pub fn up(&self) -> DVec3 {
        self.rotation * DVec3::Y
    }
}
