//! Fixed rendering constants.
//!
//! None of these are exposed on the command line; the host only picks frame
//! pacing and output options.

use crate::math::Vec3;

pub const VIEWPORT_WIDTH: u32 = 500;
pub const VIEWPORT_HEIGHT: u32 = 500;

/// Focal scale applied in the perspective divide (`fov / z`).
pub const FOV: f32 = 250.0;

/// Half the edge length of every cuboid. The template offsets are unit
/// offsets, so this is the `/2` applied at instantiation.
pub const CUBOID_HALF_EXTENT: f32 = 0.5;

pub const INITIAL_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, -5.0);

/// Pointer motion in pixels is divided by this to obtain radians.
pub const MOUSE_SENSITIVITY_DIVISOR: f32 = 200.0;

/// Movement speed in units per second.
pub const MOVE_SPEED: f32 = 10.0;

/// Number of cuboids in the default lattice scene.
pub const SCENE_CUBOIDS: usize = 27;

pub const WINDOW_TITLE: &str = "Cuboid Painter";
pub const DEFAULT_FPS: u32 = 60;

/// The constants above bundled together so the pipeline can be driven with
/// an explicit value instead of reaching for globals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub fov: f32,
    pub half_extent: f32,
    pub camera_start: Vec3,
    pub sensitivity_divisor: f32,
    pub move_speed: f32,
    /// Cuboid count the per-frame face list is pre-sized for.
    pub cuboid_capacity: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            fov: FOV,
            half_extent: CUBOID_HALF_EXTENT,
            camera_start: INITIAL_CAMERA_POSITION,
            sensitivity_divisor: MOUSE_SENSITIVITY_DIVISOR,
            move_speed: MOVE_SPEED,
            cuboid_capacity: SCENE_CUBOIDS,
        }
    }
}
