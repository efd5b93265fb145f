//! Frustum culling.
//!
//! Extracts the six clip planes from a view-projection matrix and tests
//! block bounding boxes against them, so whole meshes outside the view are
//! never submitted.
//!
//! Depth follows wgpu's [0, 1] clip range: the near plane is `row2`, not
//! `row3 + row2`.

use glam::{Mat4, Vec3, Vec4};

/// Plane `normal · p + d = 0`; points with a positive distance are inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Inward-facing unit normal.
    pub normal: Vec3,
    /// Signed offset from the origin.
    pub d: f32,
}

impl Plane {
    /// Builds a normalized plane from `(a, b, c, d)` coefficients.
    ///
    /// Degenerate coefficients are kept as they are.
    #[must_use]
    pub fn from_coefficients(v: Vec4) -> Self {
        let normal = v.truncate();
        let len = normal.length();
        if len > 0.0 {
            Self {
                normal: normal / len,
                d: v.w / len,
            }
        } else {
            Self { normal, d: v.w }
        }
    }

    /// Signed distance from `point` to the plane.
    #[inline]
    #[must_use]
    pub fn distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from two corners in any order.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// The unit cube of the block at integer cell `cell`.
    #[must_use]
    pub fn block(cell: Vec3) -> Self {
        let min = cell.floor();
        Self { min, max: min + Vec3::ONE }
    }

    /// Corner furthest along `direction`.
    #[inline]
    fn positive_vertex(&self, direction: Vec3) -> Vec3 {
        Vec3::select(direction.cmpge(Vec3::ZERO), self.max, self.min)
    }
}

/// View frustum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Left, right, bottom, top, near, far planes.
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Left plane index.
    pub const LEFT: usize = 0;
    /// Right plane index.
    pub const RIGHT: usize = 1;
    /// Bottom plane index.
    pub const BOTTOM: usize = 2;
    /// Top plane index.
    pub const TOP: usize = 3;
    /// Near plane index.
    pub const NEAR: usize = 4;
    /// Far plane index.
    pub const FAR: usize = 5;

    /// Extracts the planes of a column-major view-projection matrix.
    #[must_use]
    pub fn from_view_projection(view_proj: Mat4) -> Self {
        let [r0, r1, r2, r3] = [0, 1, 2, 3].map(|i| view_proj.row(i));

        Self {
            planes: [
                Plane::from_coefficients(r3 + r0),
                Plane::from_coefficients(r3 - r0),
                Plane::from_coefficients(r3 + r1),
                Plane::from_coefficients(r3 - r1),
                Plane::from_coefficients(r2),
                Plane::from_coefficients(r3 - r2),
            ],
        }
    }

    /// Returns false only if `point` lies outside some plane.
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|p| p.distance(point) >= 0.0)
    }

    /// Returns false only if the whole box lies outside some plane.
    ///
    /// Conservative: boxes near frustum corners may pass without being
    /// on screen.
    #[must_use]
    pub fn is_aabb_visible(&self, aabb: &Aabb) -> bool {
        self.planes
            .iter()
            .all(|p| p.distance(aabb.positive_vertex(p.normal)) >= 0.0)
    }
}
