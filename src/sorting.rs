//! Draw-order scheduling for the painter's algorithm.

use crate::visibility::VisibleFace;

/// Sorts faces by depth score in descending order (furthest first).
///
/// The sort is stable: faces with equal depth keep the order they were
/// emitted in, so a fixed scene and camera always yield the same sequence.
/// `total_cmp` keeps the comparison total even if a non-finite score slips in.
///
/// Time complexity: O(n log n)
pub fn sort_back_to_front(faces: &mut [VisibleFace]) {
    faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}
