//! Camera and orbit control.

use glam::{DMat4, DQuat, DVec2, DVec3};

use crate::picking::Ray;

/// Projection type for the camera.
#[derive(Clone, Debug)]
pub enum Projection {
    /// Perspective projection
    Perspective {
        fov_y: f64,
        aspect: f64,
        near: f64,
        far: f64,
    },
    /// Orthographic projection
    Orthographic {
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    },
}

/// A camera viewing the scene.
///
/// Clip space follows the right-handed, zero-to-one depth convention with
/// +Y up in normalized device coordinates.
#[derive(Clone, Debug)]
pub struct Camera {
    /// Camera position in world space
    pub position: DVec3,
    /// Camera rotation
    pub rotation: DQuat,
    /// Projection settings
    pub projection: Projection,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: DVec3::new(0.0, 0.0, 5.0),
            rotation: DQuat::IDENTITY,
            projection: Projection::Perspective {
                fov_y: 75.0_f64.to_radians(),
                aspect: 16.0 / 9.0,
                near: 0.1,
                far: 1000.0,
            },
        }
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the perspective projection.
    pub fn set_perspective(&mut self, fov_y: f64, aspect: f64, near: f64, far: f64) {
        self.projection = Projection::Perspective {
            fov_y,
            aspect,
            near,
            far,
        };
    }

    /// Set the orthographic projection.
    pub fn set_orthographic(
        &mut self,
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) {
        self.projection = Projection::Orthographic {
            left,
            right,
            bottom,
            top,
            near,
            far,
        };
    }

    /// Update the aspect ratio (for perspective projection).
    pub fn set_aspect(&mut self, aspect: f64) {
        if let Projection::Perspective { aspect: a, .. } = &mut self.projection {
            *a = aspect;
        }
    }

    /// Get the view matrix.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_to_rh(self.position, self.forward(), self.up())
    }

    /// Get the projection matrix.
    pub fn projection_matrix(&self) -> DMat4 {
        match self.projection {
            Projection::Perspective {
                fov_y,
                aspect,
                near,
                far,
            } => DMat4::perspective_rh(fov_y, aspect, near, far),
            Projection::Orthographic {
                left,
                right,
                bottom,
                top,
                near,
                far,
            } => DMat4::orthographic_rh(left, right, bottom, top, near, far),
        }
    }

    /// Get the view-projection matrix.
    pub fn view_projection_matrix(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point to normalized device coordinates.
    pub fn project(&self, point: DVec3) -> DVec3 {
        self.view_projection_matrix().project_point3(point)
    }

    /// World-space ray through a point in normalized device coordinates.
    ///
    /// The ray starts on the near plane and points away from the camera.
    pub fn ray_from_ndc(&self, ndc: DVec2) -> Ray {
        let inverse = self.view_projection_matrix().inverse();
        let near = inverse.project_point3(ndc.extend(0.0));
        let far = inverse.project_point3(ndc.extend(1.0));
        Ray::new(near, far - near)
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

    /// Look at a target position, keeping world +Y up.
    pub fn look_at(&mut self, target: DVec3) {
        let to_target = target - self.position;
        if to_target.length_squared() > 0.0 {
            let view = DMat4::look_at_rh(self.position, target, DVec3::Y);
            self.rotation = DQuat::from_mat4(&view.inverse()).normalize();
        }
    }
}

/// Orbits a camera around a target point.
///
/// Dragging changes yaw and pitch, scrolling changes the distance. Pitch is
/// clamped short of the poles so the camera never flips.
#[derive(Clone, Debug)]
pub struct OrbitController {
    pub target: DVec3,
    distance: f64,
    yaw: f64,
    pitch: f64,
    /// Radians per pixel of drag
    pub rotate_speed: f64,
    /// Fractional distance change per scroll step
    pub zoom_speed: f64,
    pub min_distance: f64,
    pub max_distance: f64,
}

impl OrbitController {
    const PITCH_LIMIT: f64 = std::f64::consts::FRAC_PI_2 - 0.01;

    /// Create a controller matching the camera's current placement.
    pub fn from_camera(camera: &Camera, target: DVec3) -> Self {
        let offset = camera.position - target;
        let distance = offset.length().max(f64::EPSILON);
        Self {
            target,
            distance,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
            rotate_speed: 0.005,
            zoom_speed: 0.1,
            min_distance: 1.0,
            max_distance: 900.0,
        }
    }

    /// Distance from the target.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Rotate by a drag of `(dx, dy)` pixels.
    pub fn rotate(&mut self, dx: f64, dy: f64) {
        self.yaw -= dx * self.rotate_speed;
        self.pitch = (self.pitch + dy * self.rotate_speed).clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }

    /// Zoom by scroll steps; positive moves closer.
    pub fn zoom(&mut self, steps: f64) {
        let factor = (1.0 - self.zoom_speed).powf(steps);
        self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
    }

    /// Place the camera on the orbit and aim it at the target.
    pub fn apply(&self, camera: &mut Camera) {
        let offset = DVec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        ) * self.distance;
        camera.position = self.target + offset;
        camera.look_at(self.target);
    }
}
