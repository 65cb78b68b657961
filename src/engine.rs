//! Per-frame rendering pipeline.
//!
//! The [`Engine`] owns everything that lives for the whole session except the
//! scene itself: the color buffer, the rasterizer and a reusable face list.
//! The [`Session`] owns the camera and the cuboids; the host loop feeds it
//! input and hands it to [`Engine::render_frame`] once per frame.
//!
//! A frame runs start to finish without yielding:
//! project every vertex → cull and score faces → sort far-to-near → draw.

use crate::camera::{Camera, KeyState};
use crate::colors;
use crate::config::RenderConfig;
use crate::cuboid::{self, Cuboid, NUM_FACES};
use crate::projection::{Projected, Projection};
use crate::render::{FrameBuffer, PolygonRasterizer, RasterError, Renderer, ScanlineRasterizer};
use crate::sorting::sort_back_to_front;
use crate::visibility::{evaluate_face, VisibleFace};

/// Camera plus the static scene, owned by the host loop for the session.
#[derive(Clone, Debug)]
pub struct Session {
    pub camera: Camera,
    cuboids: Vec<Cuboid>,
}

impl Session {
    /// The default lattice scene seen from the configured start position.
    pub fn new(config: &RenderConfig) -> Self {
        Self::with_cuboids(
            Camera::from_config(config),
            cuboid::lattice_scene(config.half_extent),
        )
    }

    pub fn with_cuboids(camera: Camera, cuboids: Vec<Cuboid>) -> Self {
        Self { camera, cuboids }
    }

    pub fn cuboids(&self) -> &[Cuboid] {
        &self.cuboids
    }

    /// Feeds one frame of input to the camera.
    ///
    /// Movement is applied with the orientation from the previous frame,
    /// then each pointer motion sample is applied in arrival order.
    pub fn apply_input(&mut self, delta_time: f32, keys: &KeyState, motions: &[(i32, i32)]) {
        self.camera.update(delta_time, keys);
        for &(dx, dy) in motions {
            self.camera.apply_look(dx, dy);
        }
    }
}

/// Counters for one rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub cuboids: usize,
    pub visible_faces: usize,
    pub drawn: usize,
    pub skipped: usize,
}

/// Face list reused from frame to frame.
///
/// Sized for the worst case (every face of every cuboid visible) when the
/// engine is built, and cleared, never shrunk, at the start of each frame.
/// A scene larger than the configured capacity grows it once.
#[derive(Debug, Default)]
pub struct FrameScratch {
    faces: Vec<VisibleFace>,
}

impl FrameScratch {
    pub fn with_capacity(cuboid_count: usize) -> Self {
        Self {
            faces: Vec::with_capacity(cuboid_count * NUM_FACES),
        }
    }

    pub fn faces(&self) -> &[VisibleFace] {
        &self.faces
    }

    /// Rebuilds the draw list for `camera`, sorted back to front.
    pub fn build_draw_list(
        &mut self,
        cuboids: &[Cuboid],
        camera: &Camera,
        projection: &Projection,
    ) -> &[VisibleFace] {
        self.faces.clear();
        self.faces.reserve(cuboids.len() * NUM_FACES);

        for cuboid in cuboids {
            let projected: [Projected; cuboid::NUM_VERTICES] = cuboid
                .vertices()
                .map(|vertex| projection.project(vertex, camera));

            for (face, &color) in cuboid.faces().iter().zip(cuboid.face_colors()) {
                if let Some(visible) = evaluate_face(face, color, &projected, projection) {
                    self.faces.push(visible);
                }
            }
        }

        sort_back_to_front(&mut self.faces);
        &self.faces
    }
}

/// Draws one face, treating a rasterizer rejection as "skip this face".
///
/// Returns the rejection so callers can count it; it is never propagated
/// further than the frame loop.
pub fn draw_best_effort<R: PolygonRasterizer>(
    rasterizer: &mut R,
    buffer: &mut FrameBuffer,
    face: &VisibleFace,
) -> Result<(), RasterError> {
    rasterizer
        .fill_polygon(&face.polygon, face.color, buffer)
        .inspect_err(|err| {
            tracing::debug!(depth = face.depth, %err, "skipped face");
        })
}

pub struct Engine<R: PolygonRasterizer = ScanlineRasterizer> {
    renderer: Renderer,
    rasterizer: R,
    projection: Projection,
    scratch: FrameScratch,
}

impl Engine<ScanlineRasterizer> {
    pub fn new(config: &RenderConfig) -> Self {
        Self::with_rasterizer(config, ScanlineRasterizer::new())
    }
}

impl<R: PolygonRasterizer> Engine<R> {
    pub fn with_rasterizer(config: &RenderConfig, rasterizer: R) -> Self {
        Self {
            renderer: Renderer::new(config.width, config.height),
            rasterizer,
            projection: Projection::from_config(config),
            scratch: FrameScratch::with_capacity(config.cuboid_capacity),
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    /// Faces of the most recent frame in the order they were drawn.
    pub fn last_draw_list(&self) -> &[VisibleFace] {
        self.scratch.faces()
    }

    /// Renders one frame of `session` into the color buffer.
    ///
    /// Never fails: faces the rasterizer rejects are skipped and counted.
    pub fn render_frame(&mut self, session: &Session) -> FrameStats {
        self.renderer.clear(colors::BACKGROUND);

        let faces = self
            .scratch
            .build_draw_list(session.cuboids(), &session.camera, &self.projection);

        let mut stats = FrameStats {
            cuboids: session.cuboids().len(),
            visible_faces: faces.len(),
            ..FrameStats::default()
        };

        let mut buffer = self.renderer.as_framebuffer();
        for face in faces {
            match draw_best_effort(&mut self.rasterizer, &mut buffer, face) {
                Ok(()) => stats.drawn += 1,
                Err(_) => stats.skipped += 1,
            }
        }

        tracing::trace!(
            visible = stats.visible_faces,
            drawn = stats.drawn,
            skipped = stats.skipped,
            "frame rendered"
        );
        stats
    }
}
