//! Atlas UV mapping.
//!
//! Every block texture is a 4×3 cross-layout atlas. A face selects its tile
//! through a constant `offset`, then adds `sample_pos`: the two in-plane
//! world coordinates, wrapped into [0, 1) and scaled by a signed per-face
//! factor (±¼ horizontally, ±⅓ vertically).
//!
//! | Face      | Offset          | sample_pos.x       | sample_pos.y          |
//! |-----------|-----------------|--------------------|-----------------------|
//! | +X        | (0.5, 0.66666)  | +0.25·wrap(z)      | +0.33333·wrap(y)      |
//! | −X        | (0.5, 0.33333)  | +0.25·wrap(z)      | −0.33333·wrap(y)      |
//! | +Y        | (0.25, 0.33333) | −0.25·wrap(z)      | +0.33333·wrap(x)      |
//! | −Y        | (0.5, 0.33333)  | +0.25·wrap(z)      | +0.33333·wrap(x)      |
//! | +Z        | (0.75, 0.33333) | +0.25·wrap(y)      | +0.33333·wrap(x)      |
//! | catch-all | (0.5, 0.33333)  | −0.25·wrap(y)      | +0.33333·wrap(x)      |
//!
//! −X, −Y and the catch-all share one tile offset. The layout is kept as
//! authored; whether those three faces should own distinct tiles is an open
//! question for the atlas authors.

use glam::{Vec2, Vec3};

use super::face::{Axis, FaceOrientation};

/// Horizontal tile scale (4 tiles across).
pub const TILE_SCALE_U: f32 = 0.25;

/// Vertical tile scale (3 tiles down).
pub const TILE_SCALE_V: f32 = 0.33333;

/// Wraps a world coordinate into the repeating tile coordinate.
///
/// - `n >= 0`: fractional part (`n mod 1`)
/// - `n < 0`: `1 - ((-n) mod 1)`
///
/// Negative integers map to `1.0`, not `0.0`. This seam is kept because
/// changing it shifts visible texels on every block face aligned to a
/// negative integer coordinate.
#[inline]
#[must_use]
pub fn wrap(n: f32) -> f32 {
    if n >= 0.0 {
        n % 1.0
    } else {
        1.0 - ((-n) % 1.0)
    }
}

/// One component of `sample_pos`: `scale * wrap(world.<axis>)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTerm {
    /// World axis projected onto this component.
    pub axis: Axis,
    /// Signed scale.
    pub scale: f32,
}

impl AxisTerm {
    const fn new(axis: Axis, scale: f32) -> Self {
        Self { axis, scale }
    }

    /// Evaluates the term for a world position.
    #[inline]
    #[must_use]
    pub fn eval(self, world_position: Vec3) -> f32 {
        self.scale * wrap(self.axis.component(world_position))
    }
}

/// Atlas parameters for one face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMapping {
    /// Tile origin in the atlas.
    pub offset: Vec2,
    /// Source of `sample_pos.x`.
    pub u: AxisTerm,
    /// Source of `sample_pos.y`.
    pub v: AxisTerm,
}

impl FaceMapping {
    const fn new(offset: Vec2, u: AxisTerm, v: AxisTerm) -> Self {
        Self { offset, u, v }
    }

    /// Computes the in-tile offset for a world position.
    #[inline]
    #[must_use]
    pub fn sample_pos(&self, world_position: Vec3) -> Vec2 {
        Vec2::new(self.u.eval(world_position), self.v.eval(world_position))
    }
}

/// Per-face atlas table, indexed by [`FaceOrientation::index`].
pub static FACE_MAPPINGS: [FaceMapping; 6] = [
    // +X
    FaceMapping::new(
        Vec2::new(0.5, 0.66666),
        AxisTerm::new(Axis::Z, TILE_SCALE_U),
        AxisTerm::new(Axis::Y, TILE_SCALE_V),
    ),
    // -X
    FaceMapping::new(
        Vec2::new(0.5, 0.33333),
        AxisTerm::new(Axis::Z, TILE_SCALE_U),
        AxisTerm::new(Axis::Y, -TILE_SCALE_V),
    ),
    // +Y
    FaceMapping::new(
        Vec2::new(0.25, 0.33333),
        AxisTerm::new(Axis::Z, -TILE_SCALE_U),
        AxisTerm::new(Axis::X, TILE_SCALE_V),
    ),
    // -Y
    FaceMapping::new(
        Vec2::new(0.5, 0.33333),
        AxisTerm::new(Axis::Z, TILE_SCALE_U),
        AxisTerm::new(Axis::X, TILE_SCALE_V),
    ),
    // +Z
    FaceMapping::new(
        Vec2::new(0.75, 0.33333),
        AxisTerm::new(Axis::Y, TILE_SCALE_U),
        AxisTerm::new(Axis::X, TILE_SCALE_V),
    ),
    // catch-all (-Z)
    FaceMapping::new(
        Vec2::new(0.5, 0.33333),
        AxisTerm::new(Axis::Y, -TILE_SCALE_U),
        AxisTerm::new(Axis::X, TILE_SCALE_V),
    ),
];

impl FaceOrientation {
    /// Atlas parameters for this face.
    #[inline]
    #[must_use]
    pub fn mapping(self) -> &'static FaceMapping {
        &FACE_MAPPINGS[self.index()]
    }
}

/// Tile offset and in-tile position for one fragment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasCoord {
    /// Tile origin.
    pub offset: Vec2,
    /// Position inside the tile.
    pub sample_pos: Vec2,
}

impl AtlasCoord {
    /// Final sample coordinate, `offset + sample_pos`.
    ///
    /// May leave [0, 1) slightly near tile edges; the sampler's address
    /// mode decides what that means.
    #[inline]
    #[must_use]
    pub fn uv(&self) -> Vec2 {
        self.offset + self.sample_pos
    }
}

/// Maps a classified face and world position to its atlas coordinate.
#[inline]
#[must_use]
pub fn atlas_coord(face: FaceOrientation, world_position: Vec3) -> AtlasCoord {
    let mapping = face.mapping();
    AtlasCoord {
        offset: mapping.offset,
        sample_pos: mapping.sample_pos(world_position),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_wrap_non_negative_is_fract() {
        for n in [0.0f32, 0.25, 0.999, 1.0, 2.5, 7.25, 123.75, 1e4 + 0.5] {
            let w = wrap(n);
            assert_eq!(w, n - n.floor(), "wrap({n})");
            assert!((0.0..1.0).contains(&w), "wrap({n}) = {w}");
        }
    }

    #[test]
    fn test_wrap_negative_mirrors() {
        for n in [-0.25f32, -0.5, -1.75, -3.1, -100.5] {
            assert_eq!(wrap(n), 1.0 - wrap(-n), "wrap({n})");
        }
        assert!((wrap(-0.25) - 0.75).abs() < EPS);
    }

    #[test]
    fn test_wrap_negative_integer_seam() {
        for n in [-1.0f32, -2.0, -17.0] {
            assert_eq!(wrap(n), 1.0);
        }
        // -0.0 compares equal to 0.0 and takes the non-negative branch
        assert_eq!(wrap(-0.0), 0.0);
    }

    #[test]
    fn test_table_offsets() {
        let offsets: Vec<Vec2> = FaceOrientation::PRIORITY
            .iter()
            .map(|face| face.mapping().offset)
            .collect();
        assert_eq!(
            offsets,
            vec![
                Vec2::new(0.5, 0.66666),
                Vec2::new(0.5, 0.33333),
                Vec2::new(0.25, 0.33333),
                Vec2::new(0.5, 0.33333),
                Vec2::new(0.75, 0.33333),
                Vec2::new(0.5, 0.33333),
            ]
        );
    }

    #[test]
    fn test_shared_tile_offset() {
        let shared = FaceOrientation::NegX.mapping().offset;
        assert_eq!(FaceOrientation::NegY.mapping().offset, shared);
        assert_eq!(FaceOrientation::NegZ.mapping().offset, shared);
    }

    #[test]
    fn test_pos_x_scenario() {
        let coord = atlas_coord(FaceOrientation::PosX, Vec3::new(0.0, 2.5, 7.25));
        assert!((coord.sample_pos.x - 0.0625).abs() < EPS);
        assert!((coord.sample_pos.y - 0.166_665).abs() < EPS);
        let uv = coord.uv();
        assert!((uv.x - 0.5625).abs() < EPS);
        assert!((uv.y - 0.833_325).abs() < EPS);
    }

    #[test]
    fn test_catch_all_scenario_uses_seam() {
        let coord = atlas_coord(FaceOrientation::NegZ, Vec3::new(3.5, -1.0, 0.0));
        assert!((coord.sample_pos.x + 0.25).abs() < EPS);
        assert!((coord.sample_pos.y - 0.166_665).abs() < EPS);
        let uv = coord.uv();
        assert!((uv.x - 0.25).abs() < EPS);
        assert!((uv.y - 0.499_995).abs() < EPS);
    }

    #[test]
    fn test_signs_per_face() {
        let p = Vec3::new(0.5, 0.5, 0.5);
        let half_u = TILE_SCALE_U * 0.5;
        let half_v = TILE_SCALE_V * 0.5;

        let expect = [
            (FaceOrientation::PosX, half_u, half_v),
            (FaceOrientation::NegX, half_u, -half_v),
            (FaceOrientation::PosY, -half_u, half_v),
            (FaceOrientation::NegY, half_u, half_v),
            (FaceOrientation::PosZ, half_u, half_v),
            (FaceOrientation::NegZ, -half_u, half_v),
        ];
        for (face, x, y) in expect {
            let s = atlas_coord(face, p).sample_pos;
            assert!((s.x - x).abs() < EPS && (s.y - y).abs() < EPS, "{face:?}: {s:?}");
        }
    }

    #[test]
    fn test_in_plane_axes_only() {
        // Moving along the face's own axis must not change its coordinate.
        let base = Vec3::new(0.3, 0.6, 0.9);
        let cases = [
            (FaceOrientation::PosX, Vec3::X),
            (FaceOrientation::NegX, Vec3::X),
            (FaceOrientation::PosY, Vec3::Y),
            (FaceOrientation::NegY, Vec3::Y),
            (FaceOrientation::PosZ, Vec3::Z),
            (FaceOrientation::NegZ, Vec3::Z),
        ];
        for (face, axis) in cases {
            let a = atlas_coord(face, base);
            let b = atlas_coord(face, base + axis * 0.37);
            assert_eq!(a, b, "{face:?}");
        }
    }

    #[test]
    fn test_idempotent() {
        let p = Vec3::new(-12.75, 3.125, 0.4);
        for face in FaceOrientation::PRIORITY {
            let a = atlas_coord(face, p).uv();
            let b = atlas_coord(face, p).uv();
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }
}
