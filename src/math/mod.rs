//! Small linear-algebra toolkit used by the pipeline.
//!
//! Only what the renderer needs: a float 3-vector for world and camera space,
//! an integer 2D point for screen space, and the planar rotation that the
//! camera transform is built from.

pub mod screen;
pub mod vec3;

pub use screen::ScreenPoint;
pub use vec3::Vec3;

/// Rotates the pair `(a, b)` by `rad` radians in its own plane.
///
/// Returns `(a·cos − b·sin, b·cos + a·sin)`. Used for both the yaw (x, z)
/// and pitch (y, z) steps of the camera transform.
#[inline]
pub fn rotate2d((a, b): (f32, f32), rad: f32) -> (f32, f32) {
    let (sin, cos) = rad.sin_cos();
    (a * cos - b * sin, b * cos + a * sin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_angle_is_identity() {
        assert_eq!(rotate2d((3.0, -4.0), 0.0), (3.0, -4.0));
    }

    #[test]
    fn quarter_turn_maps_a_axis_onto_b_axis() {
        let (a, b) = rotate2d((1.0, 0.0), std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(a, 0.0, epsilon = 1e-6);
        assert_relative_eq!(b, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn rotation_preserves_magnitude() {
        let samples = [
            ((1.0_f32, 0.0_f32), 0.3_f32),
            ((-2.5, 7.25), 1.7),
            ((0.001, -300.0), -4.2),
            ((12.0, 12.0), 100.0),
        ];
        for ((a, b), rad) in samples {
            let before = (a * a + b * b).sqrt();
            let (ra, rb) = rotate2d((a, b), rad);
            let after = (ra * ra + rb * rb).sqrt();
            assert_relative_eq!(before, after, max_relative = 1e-5);
        }
    }

    #[test]
    fn rotations_compose_additively() {
        let once = rotate2d(rotate2d((2.0, 1.0), 0.4), 0.6);
        let combined = rotate2d((2.0, 1.0), 1.0);
        assert_relative_eq!(once.0, combined.0, epsilon = 1e-5);
        assert_relative_eq!(once.1, combined.1, epsilon = 1e-5);
    }
}
