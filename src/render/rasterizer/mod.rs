//! Polygon rasterization.
//!
//! The frame driver only needs "fill this polygon with this color". The
//! [`PolygonRasterizer`] trait is that seam; [`ScanlineRasterizer`] is the
//! implementation used for real frames, and tests can substitute a recorder.

mod scanline;

pub use scanline::ScanlineRasterizer;

use super::framebuffer::FrameBuffer;
use crate::colors::Color;
use crate::math::ScreenPoint;

/// Largest absolute pixel coordinate a rasterizer accepts.
///
/// Edge intersections are computed in f32, which represents every integer up
/// to 2^24 exactly. Anything larger is treated as a saturated projection.
pub const COORDINATE_LIMIT: i32 = 1 << 24;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    #[error("polygon needs at least 3 points, got {0}")]
    TooFewPoints(usize),
    #[error("vertex ({x}, {y}) is outside the coordinate limit of ±{limit}")]
    CoordinateOutOfRange { x: i32, y: i32, limit: i32 },
}

/// Trait for polygon fill algorithms.
///
/// Implementors may reject a polygon they cannot draw; the caller decides
/// what a rejection means for the rest of the frame.
pub trait PolygonRasterizer {
    /// Fill a polygon into the frame buffer.
    ///
    /// # Arguments
    /// * `points` - Polygon corners in winding order
    /// * `color` - Fill color
    /// * `buffer` - The frame buffer to draw into
    fn fill_polygon(
        &mut self,
        points: &[ScreenPoint],
        color: Color,
        buffer: &mut FrameBuffer,
    ) -> Result<(), RasterError>;
}

/// Checks the shape constraints shared by every rasterizer.
pub fn validate_polygon(points: &[ScreenPoint]) -> Result<(), RasterError> {
    if points.len() < 3 {
        return Err(RasterError::TooFewPoints(points.len()));
    }
    let limit = COORDINATE_LIMIT.unsigned_abs();
    match points.iter().find(|p| p.x.unsigned_abs() > limit || p.y.unsigned_abs() > limit) {
        Some(p) => Err(RasterError::CoordinateOutOfRange {
            x: p.x,
            y: p.y,
            limit: COORDINATE_LIMIT,
        }),
        None => Ok(()),
    }
}
