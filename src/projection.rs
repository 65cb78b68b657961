//! World → camera → screen transform.
//!
//! The [`Projection`] struct carries the viewport size and focal scale. Each
//! vertex is taken through the same fixed sequence of steps:
//!
//! 1. Translate by the negated camera position.
//! 2. Rotate (x, z) by yaw.
//! 3. Rotate (y, z) by pitch.
//! 4. Keep the result as the camera-space point.
//! 5. Perspective divide: `scale = fov / z`.
//! 6. Offset from the viewport center, truncating to whole pixels.
//!
//! Rotation happens about the translated point, so the camera always sits at
//! the camera-space origin looking down +Z.

use crate::camera::Camera;
use crate::config::{RenderConfig, FOV};
use crate::math::{rotate2d, ScreenPoint, Vec3};

/// A vertex after projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    /// Pixel coordinates. Saturated when the divide blew up.
    pub screen: ScreenPoint,
    /// Camera-space position, before the perspective divide.
    pub view: Vec3,
    /// `true` when the point is strictly in front of the camera and the
    /// divide produced a finite scale. Only such points may count toward
    /// face visibility.
    pub in_front: bool,
}

/// Viewport dimensions plus the focal scale used for the perspective divide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    width: u32,
    height: u32,
    fov: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

impl Projection {
    pub fn new(width: u32, height: u32, fov: f32) -> Self {
        Self { width, height, fov }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.width, config.height, config.fov)
    }

    /// Integer center of the viewport.
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Open-interval bounds test: pixels on the border row/column are out.
    #[inline]
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x > 0 && point.x < self.width as i32 && point.y > 0 && point.y < self.height as i32
    }

    #[inline]
    pub fn project(&self, vertex: Vec3, camera: &Camera) -> Projected {
        project(vertex, camera, self.center(), self.fov)
    }
}

/// Moves a world-space point into camera space (steps 1-3).
#[inline]
pub fn to_camera_space(vertex: Vec3, camera: &Camera) -> Vec3 {
    let relative = vertex - camera.position();
    let (x, z) = rotate2d((relative.x, relative.z), camera.yaw());
    let (y, z) = rotate2d((relative.y, z), camera.pitch());
    Vec3::new(x, y, z)
}

/// Projects a world-space vertex onto the screen.
///
/// `fov` defaults to [`FOV`] in every caller inside the crate.
pub fn project(vertex: Vec3, camera: &Camera, center: ScreenPoint, fov: f32) -> Projected {
    let view = to_camera_space(vertex, camera);

    let scale = fov / view.z;
    let in_front = view.z > 0.0 && scale.is_finite();

    // `as i32` truncates toward zero and saturates on overflow; NaN maps to 0,
    // which `in_front` already rules out for visibility.
    let screen = ScreenPoint::new(
        center.x.saturating_add((view.x * scale) as i32),
        center.y.saturating_add((view.y * scale) as i32),
    );

    Projected {
        screen,
        view,
        in_front,
    }
}

/// [`project`] with the default focal scale.
pub fn project_default(vertex: Vec3, camera: &Camera, center: ScreenPoint) -> Projected {
    project(vertex, camera, center, FOV)
}
