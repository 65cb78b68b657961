//! Free-flying "walk" camera.
//!
//! # Coordinate System
//!
//! - X: positive right
//! - Y: positive down on screen (moving "up" decreases Y)
//! - Z: positive forward (into screen)
//!
//! # Orientation
//!
//! Orientation is stored as pitch/yaw angles in radians. There is no roll.
//! Movement directions come from yaw alone, so looking up or down never
//! changes where the forward key walks, and vertical movement always follows
//! world Y.
//!
//! Pitch is deliberately left unbounded: enough pointer motion rotates the
//! view past vertical and flips it upside down.

use crate::config::{RenderConfig, MOUSE_SENSITIVITY_DIVISOR, MOVE_SPEED};
use crate::math::Vec3;

/// Snapshot of the movement keys for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    position: Vec3,
    pitch: f32, // Rotation applied to the (y, z) plane (radians)
    yaw: f32,   // Rotation applied to the (x, z) plane (radians)

    move_speed: f32,
    sensitivity_divisor: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    /// Creates a camera at `position` with zero pitch and yaw.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            pitch: 0.0,
            yaw: 0.0,
            move_speed: MOVE_SPEED,
            sensitivity_divisor: MOUSE_SENSITIVITY_DIVISOR,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            move_speed: config.move_speed,
            sensitivity_divisor: config.sensitivity_divisor,
            ..Self::new(config.camera_start)
        }
    }

    pub fn with_rotation(mut self, pitch: f32, yaw: f32) -> Self {
        self.pitch = pitch;
        self.yaw = yaw;
        self
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Applies one relative pointer motion sample.
    ///
    /// Horizontal motion turns (yaw), vertical motion tilts (pitch).
    pub fn apply_look(&mut self, delta_x: i32, delta_y: i32) {
        self.yaw += delta_x as f32 / self.sensitivity_divisor;
        self.pitch += delta_y as f32 / self.sensitivity_divisor;
    }

    /// Moves the camera according to the held keys over `delta_time` seconds.
    ///
    /// The strafe keys are not mirror images of each other: left only touches
    /// X (`x += speed·(sin − cos)`), while right moves along both X and Z.
    /// This reproduces the established control feel and must stay as is.
    pub fn update(&mut self, delta_time: f32, keys: &KeyState) {
        let speed = delta_time * self.move_speed;

        if keys.up {
            self.position.y -= speed;
        }
        if keys.down {
            self.position.y += speed;
        }

        let (sin, cos) = self.yaw.sin_cos();
        let step_x = speed * sin;
        let step_z = speed * cos;

        if keys.forward {
            self.position.x += step_x;
            self.position.z += step_z;
        }
        if keys.backward {
            self.position.x -= step_x;
            self.position.z -= step_z;
        }
        if keys.left {
            self.position.x -= step_z;
            self.position.x += step_x;
        }
        if keys.right {
            self.position.x += step_z;
            self.position.z -= step_x;
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }
}

// =============================================================================
// Tests
// =============================================================================
