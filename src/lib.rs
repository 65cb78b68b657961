//! A minimal CPU software renderer for static cuboids.
//!
//! A free-flying camera looks at a flat list of axis-aligned cuboids. Each
//! frame every vertex is moved into camera space and perspective-projected,
//! faces with a corner on screen are kept, scored by the squared distance of
//! their centroid, and painted far-to-near. There is no depth buffer, no
//! clipping and no lighting. SDL2 is used only for the window, input and
//! presenting the finished color buffer.
//!
//! # Quick Start
//!
//! ```ignore
//! use cuboid_painter::prelude::*;
//!
//! let config = RenderConfig::default();
//! let mut session = Session::new(&config);
//! let mut engine = Engine::new(&config);
//! let stats = engine.render_frame(&session);
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod config;
pub mod cuboid;
pub mod engine;
pub mod math;
pub mod projection;
pub mod render;
pub mod sorting;
pub mod visibility;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use camera::{Camera, KeyState};
pub use config::RenderConfig;
pub use engine::{Engine, FrameStats, Session};
pub use projection::Projection;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use cuboid_painter::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::{Camera, KeyState};

    // Scene
    pub use crate::colors::Color;
    pub use crate::config::RenderConfig;
    pub use crate::cuboid::Cuboid;

    // Pipeline
    pub use crate::engine::{Engine, FrameStats, Session};
    pub use crate::projection::{Projected, Projection};
    pub use crate::visibility::VisibleFace;

    // Math
    pub use crate::math::{ScreenPoint, Vec3};

    // Rendering
    pub use crate::render::{PolygonRasterizer, RasterError, ScanlineRasterizer};

    // Window & Input
    pub use crate::window::{FrameLimiter, InputState, QuitReason, Window};
}
