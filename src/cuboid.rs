//! Static cuboid geometry.
//!
//! Every cuboid shares one template: 8 corner offsets in {-1, 1}³ and 6 quad
//! faces given as indices into that corner table. An instance is the template
//! scaled by the half-extent and translated to its center, computed once at
//! construction. Cuboids never move afterwards.

use crate::colors::{self, Color};
use crate::config::{CUBOID_HALF_EXTENT, SCENE_CUBOIDS};
use crate::math::Vec3;

pub const NUM_VERTICES: usize = 8;
pub const NUM_FACES: usize = 6;

/// A quad face as four indices into a cuboid's vertex table, in winding order.
pub type Face = [usize; 4];

pub const TEMPLATE_VERTICES: [Vec3; NUM_VERTICES] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

pub const FACES: [Face; NUM_FACES] = [
    // -Z
    [0, 1, 2, 3],
    // +Z
    [4, 5, 6, 7],
    // -Y
    [0, 1, 5, 4],
    // +Y
    [2, 3, 7, 6],
    // -X
    [0, 3, 7, 4],
    // +X
    [1, 2, 6, 5],
];

/// One color per entry of [`FACES`].
pub const FACE_COLORS: [Color; NUM_FACES] = [
    colors::BLUE,
    colors::RED,
    colors::WHITE,
    colors::YELLOW,
    colors::GREEN,
    colors::ORANGE,
];

#[derive(Clone, Debug, PartialEq)]
pub struct Cuboid {
    center: Vec3,
    vertices: [Vec3; NUM_VERTICES],
}

impl Cuboid {
    /// Builds a cuboid centered at `center` with the default half-extent.
    pub fn new(center: Vec3) -> Self {
        Self::with_half_extent(center, CUBOID_HALF_EXTENT)
    }

    pub fn with_half_extent(center: Vec3, half_extent: f32) -> Self {
        let vertices = TEMPLATE_VERTICES.map(|offset| center + offset * half_extent);
        Self { center, vertices }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// World-space corners, in template order.
    pub fn vertices(&self) -> &[Vec3; NUM_VERTICES] {
        &self.vertices
    }

    pub fn faces(&self) -> &'static [Face; NUM_FACES] {
        &FACES
    }

    pub fn face_colors(&self) -> &'static [Color; NUM_FACES] {
        &FACE_COLORS
    }
}

/// The demo scene: a 3×3×3 lattice of cuboids two units apart, centered on
/// the origin. Listed plane by plane (z = 0, -2, 2), then row by row.
pub fn lattice_scene(half_extent: f32) -> Vec<Cuboid> {
    const STEPS: [f32; 3] = [0.0, -2.0, 2.0];

    let mut cuboids = Vec::with_capacity(SCENE_CUBOIDS);
    for z in STEPS {
        for y in STEPS {
            for x in STEPS {
                cuboids.push(Cuboid::with_half_extent(Vec3::new(x, y, z), half_extent));
            }
        }
    }
    tracing::debug!(count = cuboids.len(), "built lattice scene");
    cuboids
}
