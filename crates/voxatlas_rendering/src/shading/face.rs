//! Face classification.
//!
//! Maps an interpolated normal onto one of the six cube-face orientations
//! with a fixed-priority test chain:
//!
//! ```text
//! x > 0 → PosX
//! x < 0 → NegX
//! y > 0 → PosY
//! y < 0 → NegY
//! z > 0 → PosZ
//! else  → NegZ   (catch-all)
//! ```
//!
//! The first test that passes wins. Non-axis-aligned normals therefore
//! resolve by x, then y, then z; the zero vector (and NaN) land in the
//! catch-all. Reordering the tests changes results for diagonals.

use glam::Vec3;

/// World axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl Axis {
    /// Returns this axis' component of `v`.
    #[inline]
    #[must_use]
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
            Self::Z => v.z,
        }
    }

    /// Lowercase swizzle name (`"x"`, `"y"`, `"z"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

/// Direction of a selector test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Component strictly greater than zero.
    Positive,
    /// Component strictly less than zero.
    Negative,
}

/// One test in the priority chain: `normal.<axis> > 0` or `< 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector {
    /// Component under test.
    pub axis: Axis,
    /// Required sign.
    pub sign: Sign,
}

impl Selector {
    /// Returns true if `normal` passes this test.
    #[inline]
    #[must_use]
    pub fn matches(self, normal: Vec3) -> bool {
        let value = self.axis.component(normal);
        match self.sign {
            Sign::Positive => value > 0.0,
            Sign::Negative => value < 0.0,
        }
    }
}

/// One of the six cube-face orientations.
///
/// Declaration order is the classifier's priority order and the index
/// into [`FACE_MAPPINGS`](super::atlas::FACE_MAPPINGS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FaceOrientation {
    /// Normal +X.
    PosX = 0,
    /// Normal −X.
    NegX = 1,
    /// Normal +Y.
    PosY = 2,
    /// Normal −Y.
    NegY = 3,
    /// Normal +Z.
    PosZ = 4,
    /// Normal −Z, and the catch-all for anything no earlier test selected.
    NegZ = 5,
}

impl FaceOrientation {
    /// All faces in test order.
    pub const PRIORITY: [Self; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// Classifies a world-space normal.
    ///
    /// The normal is not normalized; only component signs matter.
    #[inline]
    #[must_use]
    pub fn classify(normal: Vec3) -> Self {
        if normal.x > 0.0 {
            Self::PosX
        } else if normal.x < 0.0 {
            Self::NegX
        } else if normal.y > 0.0 {
            Self::PosY
        } else if normal.y < 0.0 {
            Self::NegY
        } else if normal.z > 0.0 {
            Self::PosZ
        } else {
            Self::NegZ
        }
    }

    /// The test that selects this face, or `None` for the catch-all.
    #[must_use]
    pub const fn selector(self) -> Option<Selector> {
        let (axis, sign) = match self {
            Self::PosX => (Axis::X, Sign::Positive),
            Self::NegX => (Axis::X, Sign::Negative),
            Self::PosY => (Axis::Y, Sign::Positive),
            Self::NegY => (Axis::Y, Sign::Negative),
            Self::PosZ => (Axis::Z, Sign::Positive),
            Self::NegZ => return None,
        };
        Some(Selector { axis, sign })
    }

    /// Canonical outward unit normal.
    #[must_use]
    pub const fn normal(self) -> Vec3 {
        match self {
            Self::PosX => Vec3::X,
            Self::NegX => Vec3::NEG_X,
            Self::PosY => Vec3::Y,
            Self::NegY => Vec3::NEG_Y,
            Self::PosZ => Vec3::Z,
            Self::NegZ => Vec3::NEG_Z,
        }
    }

    /// Index into per-face tables.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl From<FaceOrientation> for usize {
    fn from(face: FaceOrientation) -> usize {
        face.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_normals() {
        for face in FaceOrientation::PRIORITY {
            assert_eq!(FaceOrientation::classify(face.normal()), face);
        }
    }

    #[test]
    fn test_priority_order_matches_indices() {
        for (i, face) in FaceOrientation::PRIORITY.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn test_diagonals_resolve_by_x_then_y() {
        assert_eq!(FaceOrientation::classify(Vec3::new(0.7, 0.7, 0.0)), FaceOrientation::PosX);
        assert_eq!(FaceOrientation::classify(Vec3::new(-0.1, 0.9, 0.9)), FaceOrientation::NegX);
        assert_eq!(FaceOrientation::classify(Vec3::new(0.0, -0.5, 0.5)), FaceOrientation::NegY);
        assert_eq!(FaceOrientation::classify(Vec3::new(0.0, 0.5, -1.0)), FaceOrientation::PosY);
    }

    #[test]
    fn test_degenerate_normals_hit_catch_all() {
        assert_eq!(FaceOrientation::classify(Vec3::ZERO), FaceOrientation::NegZ);
        assert_eq!(FaceOrientation::classify(Vec3::new(0.0, 0.0, -0.0)), FaceOrientation::NegZ);
        assert_eq!(FaceOrientation::classify(Vec3::splat(f32::NAN)), FaceOrientation::NegZ);
        // z > 0 with x == y == 0 still gets its own branch
        assert_eq!(FaceOrientation::classify(Vec3::new(0.0, 0.0, 1e-6)), FaceOrientation::PosZ);
    }

    #[test]
    fn test_negative_zero_is_not_negative() {
        assert_eq!(FaceOrientation::classify(Vec3::new(-0.0, 1.0, 0.0)), FaceOrientation::PosY);
    }

    #[test]
    fn test_classify_agrees_with_selectors() {
        let samples = [
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, -3.0),
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::new(-0.3, 0.0, 0.0),
            Vec3::new(0.0, -0.2, 9.0),
        ];

        for normal in samples {
            let first_match = FaceOrientation::PRIORITY
                .into_iter()
                .find(|face| !matches!(face.selector(), Some(s) if !s.matches(normal)));
            assert_eq!(first_match, Some(FaceOrientation::classify(normal)), "{normal:?}");
        }
    }
}
