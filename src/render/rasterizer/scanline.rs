//! Scanline polygon fill.
//!
//! # Algorithm Overview
//!
//! The polygon is processed one horizontal row at a time:
//!
//! 1. **Sample** each row at its pixel center (`y + 0.5`)
//! 2. **Intersect** every edge that straddles the sample line and record the
//!    X of the crossing
//! 3. **Sort** the crossings and fill between consecutive pairs (even-odd
//!    rule), so concave and self-intersecting quads come out the same way
//!    every time
//!
//! A pixel is covered when its center lies inside the polygon. Edges are
//! treated half-open in Y (`a.y <= y < b.y`), so shared edges between
//! adjacent faces are never filled twice and vertices are never counted
//! twice.
//!
//! ```text
//!        v0
//!        /\
//!       /  \        <- row: crossings [x_l, x_r], fill x_l..x_r
//!      /    \
//!     v3     v1
//!      \    /
//!       \  /
//!        v2
//! ```
//!
//! Polygons with zero height still produce a one-row span so that a face
//! seen exactly edge-on does not vanish.

use super::{validate_polygon, PolygonRasterizer, RasterError};
use crate::colors::Color;
use crate::math::ScreenPoint;
use crate::render::framebuffer::FrameBuffer;

/// Even-odd scanline polygon rasterizer.
///
/// Keeps its crossing buffer between calls so a frame of many faces does not
/// allocate per polygon.
#[derive(Debug, Default)]
pub struct ScanlineRasterizer {
    crossings: Vec<f32>,
}

impl ScanlineRasterizer {
    /// Creates a new scanline rasterizer instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the X coordinates where the polygon's edges cross `sample_y`.
    fn collect_crossings(&mut self, points: &[ScreenPoint], sample_y: f32) {
        self.crossings.clear();
        let count = points.len();
        for i in 0..count {
            let a = points[i];
            let b = points[(i + 1) % count];
            let (ay, by) = (a.y as f32, b.y as f32);

            // Half-open in Y: horizontal edges never cross.
            if (ay <= sample_y) == (by <= sample_y) {
                continue;
            }

            let t = (sample_y - ay) / (by - ay);
            self.crossings.push(a.x as f32 + t * (b.x - a.x) as f32);
        }
        self.crossings.sort_by(|l, r| l.total_cmp(r));
    }
}

impl PolygonRasterizer for ScanlineRasterizer {
    fn fill_polygon(
        &mut self,
        points: &[ScreenPoint],
        color: Color,
        buffer: &mut FrameBuffer,
    ) -> Result<(), RasterError> {
        validate_polygon(points)?;

        let packed = color.to_argb();
        let (mut min_y, mut max_y) = (i32::MAX, i32::MIN);
        let (mut min_x, mut max_x) = (i32::MAX, i32::MIN);
        for p in points {
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
        }

        if min_y == max_y {
            buffer.fill_span(min_y, min_x, max_x, packed);
            return Ok(());
        }

        let y_start = min_y.max(0);
        let y_end = max_y.min(buffer.height() as i32);

        for y in y_start..y_end {
            self.collect_crossings(points, y as f32 + 0.5);

            for pair in self.crossings.chunks_exact(2) {
                // Pixel x is covered when x + 0.5 lies in [left, right).
                let x_start = (pair[0] - 0.5).ceil() as i32;
                let x_end = (pair[1] - 0.5).ceil() as i32 - 1;
                buffer.fill_span(y, x_start, x_end, packed);
            }
        }

        Ok(())
    }
}
