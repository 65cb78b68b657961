//! Per-face visibility and depth.
//!
//! A face counts as visible when at least one of its corners is in front of
//! the camera and lands strictly inside the viewport. This is a cheap stand-in
//! for frustum clipping: a face that covers the screen while all of its
//! corners are off-screen is missed.
//!
//! The depth score is the squared distance of the face centroid from the
//! camera in camera space. It is an ordering key for the painter's sort, not
//! a depth-buffer value.

use crate::colors::Color;
use crate::cuboid::Face;
use crate::math::{ScreenPoint, Vec3};
use crate::projection::{Projected, Projection};

/// A face that survived culling, ready for sorting and drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleFace {
    /// The four projected corners in face winding order.
    pub polygon: [ScreenPoint; 4],
    pub color: Color,
    pub depth: f32,
}

/// Returns `true` if any corner of `face` is usable and on screen.
#[inline]
pub fn is_face_visible(face: &Face, projected: &[Projected], projection: &Projection) -> bool {
    face.iter().any(|&i| {
        let corner = &projected[i];
        corner.in_front && projection.contains(corner.screen)
    })
}

/// Squared camera-space distance of the centroid of `corners`.
pub fn depth_score(corners: &[Vec3; 4]) -> f32 {
    let count = corners.len() as f32;
    let centroid = corners.iter().fold(Vec3::ZERO, |sum, v| sum + *v / count);
    centroid.magnitude_squared()
}

/// Runs the visibility test and, if it passes, builds the drawable face.
pub fn evaluate_face(
    face: &Face,
    color: Color,
    projected: &[Projected],
    projection: &Projection,
) -> Option<VisibleFace> {
    if !is_face_visible(face, projected, projection) {
        return None;
    }

    let corners = face.map(|i| projected[i].view);
    Some(VisibleFace {
        polygon: face.map(|i| projected[i].screen),
        color,
        depth: depth_score(&corners),
    })
}
