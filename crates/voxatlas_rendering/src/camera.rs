//! # Camera
//!
//! The camera produces one `view_proj` matrix per frame. That matrix is
//! published through a [`DoubleBuffered`] slot, so every draw of a frame
//! reads the same snapshot while the next frame's camera is being moved.
//!
//! ```text
//! game thread:    camera.look_at = ...; feed.publish(camera.uniform())
//!                                              │
//!                                              ▼ swap
//! render thread:  feed.upload(queue, buffer)  (writes only if a new frame)
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use voxatlas_core::DoubleBuffered;

use crate::culling::Frustum;

/// Vertical field of view in degrees.
pub const DEFAULT_FOV_Y_DEGREES: f32 = 45.0;

/// Near clip plane.
pub const DEFAULT_Z_NEAR: f32 = 0.1;

/// Far clip plane.
pub const DEFAULT_Z_FAR: f32 = 1000.0;

/// Camera data as the vertex stage sees it (set 1, binding 0).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    /// Column-major view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        view_proj: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Packs a matrix.
    #[must_use]
    pub fn from_matrix(view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }

    /// Unpacks the matrix.
    #[inline]
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.view_proj)
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Perspective look-at camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position.
    pub position: Vec3,
    /// Point the camera looks at.
    pub look_at: Vec3,
    /// Up direction.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Near clip plane.
    pub z_near: f32,
    /// Far clip plane.
    pub z_far: f32,
    aspect_ratio: f32,
}

impl Camera {
    /// Creates a Y-up camera with the default lens.
    #[must_use]
    pub fn new(position: Vec3, look_at: Vec3, aspect_ratio: f32) -> Self {
        Self {
            position,
            look_at,
            up: Vec3::Y,
            fov_y_degrees: DEFAULT_FOV_Y_DEGREES,
            z_near: DEFAULT_Z_NEAR,
            z_far: DEFAULT_Z_FAR,
            aspect_ratio,
        }
    }

    /// Width over height.
    #[must_use]
    pub const fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Updates the aspect ratio after a surface resize.
    ///
    /// Zero-sized surfaces (minimized windows) are ignored.
    pub fn set_aspect_ratio(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            tracing::warn!("Ignoring resize to {}x{}", width, height);
            return;
        }
        self.aspect_ratio = width as f32 / height as f32;
    }

    /// Right-handed perspective (depth in [0, 1]) times the look-at view.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.position, self.look_at, self.up);
        let projection = Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect_ratio,
            self.z_near,
            self.z_far,
        );
        projection * view
    }

    /// View frustum for culling block meshes, rebuilt from the current
    /// view-projection.
    #[must_use]
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(self.view_projection())
    }

    /// Packs the current view-projection.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::from_matrix(self.view_projection())
    }
}

/// Frame-scoped camera uniform with a dirty check for GPU upload.
#[derive(Debug, Default)]
pub struct CameraFeed {
    uniform: DoubleBuffered<CameraUniform>,
    uploaded_frame: AtomicU64,
}

impl CameraFeed {
    /// Creates a feed holding `initial`, already considered uploaded.
    #[must_use]
    pub fn new(initial: CameraUniform) -> Self {
        Self {
            uniform: DoubleBuffered::new(initial),
            uploaded_frame: AtomicU64::new(0),
        }
    }

    /// Publishes the uniform for the next frame.
    pub fn publish(&self, uniform: CameraUniform) {
        self.uniform.publish(uniform);
    }

    /// Current published uniform.
    #[must_use]
    pub fn snapshot(&self) -> CameraUniform {
        self.uniform.snapshot()
    }

    /// Number of frames published so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.uniform.frame_count()
    }

    /// Returns the published uniform if it has not been uploaded yet, and
    /// marks it as uploaded.
    #[must_use]
    pub fn take_pending(&self) -> Option<CameraUniform> {
        let frame = self.uniform.frame_count();
        let previous = self.uploaded_frame.swap(frame, Ordering::AcqRel);
        (previous != frame).then(|| self.uniform.snapshot())
    }

    /// Writes the published uniform into `buffer` if it changed since the
    /// last upload. Returns whether anything was written.
    pub fn upload(&self, queue: &wgpu::Queue, buffer: &wgpu::Buffer) -> bool {
        match self.take_pending() {
            Some(uniform) => {
                queue.write_buffer(buffer, 0, bytemuck::bytes_of(&uniform));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_uniform_size() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 64);
    }

    #[test]
    fn test_identity_round_trip() {
        assert_eq!(CameraUniform::IDENTITY.matrix(), Mat4::IDENTITY);
        assert_eq!(CameraUniform::from_matrix(Mat4::IDENTITY), CameraUniform::IDENTITY);
    }

    #[test]
    fn test_column_major_layout() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let u = CameraUniform::from_matrix(m);
        assert_eq!(u.view_proj[3], [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_target_projects_to_center() {
        let camera = Camera::new(Vec3::new(0.0, 5.0, 10.0), Vec3::new(2.0, 1.0, -3.0), 16.0 / 9.0);
        let clip = camera.view_projection() * camera.look_at.extend(1.0);
        let ndc = clip / clip.w;

        assert!(ndc.x.abs() < EPS, "{ndc:?}");
        assert!(ndc.y.abs() < EPS, "{ndc:?}");
        assert!((0.0..=1.0).contains(&ndc.z), "{ndc:?}");
    }

    #[test]
    fn test_depth_range() {
        let camera = Camera::new(Vec3::ZERO, Vec3::NEG_Z, 1.0);
        let vp = camera.view_projection();

        let near = vp * Vec4::new(0.0, 0.0, -camera.z_near, 1.0);
        let far = vp * Vec4::new(0.0, 0.0, -camera.z_far, 1.0);
        assert!((near.z / near.w).abs() < EPS);
        assert!((far.z / far.w - 1.0).abs() < EPS);
    }

    #[test]
    fn test_resize_guard() {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::NEG_Z, 1.0);
        camera.set_aspect_ratio(1920, 1080);
        assert!((camera.aspect_ratio() - 1920.0 / 1080.0).abs() < EPS);

        camera.set_aspect_ratio(0, 1080);
        camera.set_aspect_ratio(800, 0);
        assert!((camera.aspect_ratio() - 1920.0 / 1080.0).abs() < EPS);
    }

    #[test]
    fn test_feed_uploads_once_per_frame() {
        let feed = CameraFeed::new(CameraUniform::IDENTITY);
        assert_eq!(feed.take_pending(), None);

        let moved = CameraUniform::from_matrix(Mat4::from_scale(Vec3::splat(2.0)));
        feed.publish(moved);
        assert_eq!(feed.take_pending(), Some(moved));
        assert_eq!(feed.take_pending(), None);

        feed.publish(CameraUniform::IDENTITY);
        feed.publish(moved);
        assert_eq!(feed.frame_count(), 3);
        assert_eq!(feed.take_pending(), Some(moved));
        assert_eq!(feed.snapshot(), moved);
    }
}
