//! Virtual-sphere trackball that turns pointer drags into rotations.
//!
//! Pixels are projected onto the upper hemisphere of a unit sphere that
//! fills the viewport. A drag rotates the anchor point captured at
//! mouse-down onto the point under the cursor; releasing the button folds
//! that rotation into the accumulated orientation.

use std::f32::consts::PI;

use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

/// Below this length the drag axis is treated as degenerate.
const AXIS_EPSILON: f32 = 1e-6;

/// Trackball rotation state for a single viewport.
///
/// Rotations of finished drags accumulate in the committed orientation;
/// the drag in progress lives in a separate pending rotation that is
/// applied on top of it. [`current_rotation`](Self::current_rotation) is
/// the product of the two and is what a renderer should consume each
/// frame.
#[derive(Debug, Clone)]
pub struct TrackballController {
    viewport: (u32, u32),
    committed: Quat,
    pending: Quat,
    combined: Mat4,
    dragging: bool,
    anchor_point: Vec3,
    anchor_pixel: Vec2,
}

impl TrackballController {
    /// Create a trackball for a viewport of the given size in pixels.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: (width.max(1), height.max(1)),
            committed: Quat::IDENTITY,
            pending: Quat::IDENTITY,
            combined: Mat4::IDENTITY,
            dragging: false,
            anchor_point: Vec3::Z,
            anchor_pixel: Vec2::ZERO,
        }
    }

    /// Update the viewport size used by subsequent projections.
    ///
    /// Each dimension is clamped to at least one pixel. The anchor of a
    /// drag in progress is not re-projected.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width.max(1), height.max(1));
    }

    /// Current viewport size in pixels.
    #[must_use]
    pub fn viewport_size(&self) -> (u32, u32) {
        self.viewport
    }

    /// Project a pixel onto the unit hemisphere facing the viewer.
    ///
    /// Pixels outside the sphere's silhouette land on its equator, so the
    /// result is always a unit vector with a non-negative z component.
    #[must_use]
    pub fn project(&self, px: f32, py: f32) -> Vec3 {
        let (width, height) = self.viewport;
        let mut x = 2.0 * px / width as f32 - 1.0;
        // screen y grows downward, hemisphere y grows upward
        let mut y = 1.0 - 2.0 * py / height as f32;
        let mut z_sq = 1.0 - x * x - y * y;

        if z_sq < 0.0 {
            let len = x.hypot(y);
            x /= len;
            y /= len;
            z_sq = 0.0;
        }

        Vec3::new(x, y, z_sq.sqrt())
    }

    /// Start a rotation drag at the given pixel.
    ///
    /// Calling this while a drag is already active abandons that drag.
    pub fn begin_drag(&mut self, px: f32, py: f32) {
        self.dragging = true;
        self.anchor_pixel = Vec2::new(px, py);
        self.anchor_point = self.project(px, py);
        self.pending = Quat::IDENTITY;
        self.refresh_combined();
    }

    /// Move the pointer of the active drag to the given pixel.
    pub fn update_drag(&mut self, px: f32, py: f32) {
        self.pending = self.drag_rotation(px, py);
        self.refresh_combined();
    }

    /// Finish the active drag at the given pixel and commit its rotation.
    ///
    /// The rotation is recomputed from `(px, py)` rather than taken from
    /// the last [`update_drag`](Self::update_drag), so a release that was
    /// never preceded by a move to the same position still commits the
    /// right orientation. Does nothing if no drag is active.
    pub fn end_drag(&mut self, px: f32, py: f32) {
        if !self.dragging {
            return;
        }
        self.dragging = false;

        let rotation = self.drag_rotation(px, py);
        if rotation != Quat::IDENTITY {
            self.committed = (rotation * self.committed).normalize();
            log::debug!(
                "trackball: committed {:.2}° drag",
                rotation.to_axis_angle().1.to_degrees()
            );
        }
        self.pending = Quat::IDENTITY;
        self.refresh_combined();
    }

    /// Drop all accumulated rotation and cancel any drag in progress.
    pub fn reset(&mut self) {
        self.dragging = false;
        self.committed = Quat::IDENTITY;
        self.pending = Quat::IDENTITY;
        self.refresh_combined();
    }

    /// Whether a rotation drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Rotation to render with: the pending drag applied on top of the
    /// committed orientation.
    #[must_use]
    pub fn current_rotation(&self) -> Mat4 {
        self.combined
    }

    /// Upper-left 3×3 of [`current_rotation`](Self::current_rotation),
    /// suitable for transforming normals and directions.
    #[must_use]
    pub fn normal_matrix(&self) -> Mat3 {
        Mat3::from_mat4(self.combined)
    }

    /// Orientation accumulated from all finished drags.
    #[must_use]
    pub fn committed_rotation(&self) -> Mat4 {
        Mat4::from_quat(self.committed)
    }

    /// Rotation contributed by the drag in progress.
    #[must_use]
    pub fn pending_rotation(&self) -> Mat4 {
        Mat4::from_quat(self.pending)
    }

    /// Hemisphere point captured when the current drag started.
    #[must_use]
    pub fn anchor_point(&self) -> Vec3 {
        self.anchor_point
    }

    fn refresh_combined(&mut self) {
        self.combined = Mat4::from_quat(self.pending * self.committed);
    }

    fn drag_rotation(&self, px: f32, py: f32) -> Quat {
        if Vec2::new(px, py) == self.anchor_pixel {
            return Quat::IDENTITY;
        }
        rotation_between(self.anchor_point, self.project(px, py))
    }
}

/// Rotation carrying unit vector `from` onto unit vector `to`.
///
/// Parallel inputs give the identity. Antiparallel inputs have no unique
/// axis; they rotate half a turn about an arbitrary axis perpendicular to
/// `from`.
fn rotation_between(from: Vec3, to: Vec3) -> Quat {
    let cos = from.dot(to).clamp(-1.0, 1.0);
    let axis = from.cross(to);
    let len = axis.length();

    if len < AXIS_EPSILON {
        if cos > 0.0 {
            return Quat::IDENTITY;
        }
        return Quat::from_axis_angle(from.any_orthonormal_vector(), PI);
    }

    Quat::from_axis_angle(axis / len, cos.acos())
}
