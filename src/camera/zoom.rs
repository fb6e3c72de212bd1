//! Field-of-view zoom driven by a vertical middle-button drag or the
//! scroll wheel.

use crate::options::CameraOptions;

/// Tracks the vertical field of view and the zoom drag that adjusts it.
#[derive(Debug, Clone)]
pub struct ZoomController {
    fovy: f32,
    min_fovy: f32,
    max_fovy: f32,
    drag_speed: f32,
    scroll_speed: f32,
    last_y: Option<f32>,
}

impl ZoomController {
    /// Create a zoom controller from camera options.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let mut zoom = Self {
            fovy: options.fovy,
            min_fovy: 0.0,
            max_fovy: 0.0,
            drag_speed: 0.0,
            scroll_speed: 0.0,
            last_y: None,
        };
        zoom.apply_options(options);
        zoom
    }

    /// Adopt new limits and speeds; the current field of view is
    /// re-clamped into the new range.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.min_fovy = options.min_fovy;
        self.max_fovy = options.max_fovy.max(options.min_fovy);
        self.drag_speed = options.zoom_speed;
        self.scroll_speed = options.scroll_speed;
        self.fovy = self.clamp(self.fovy);
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    /// Jump straight to a field of view (clamped).
    pub fn set_fovy(&mut self, fovy: f32) {
        self.fovy = self.clamp(fovy);
    }

    /// Whether a zoom drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last_y.is_some()
    }

    /// Start a zoom drag at the given vertical pixel.
    pub fn begin(&mut self, py: f32) {
        self.last_y = Some(py);
    }

    /// Continue the zoom drag. Dragging down widens the view.
    ///
    /// Returns whether the field of view changed; updates without an active
    /// drag are ignored.
    pub fn update(&mut self, py: f32) -> bool {
        let Some(last_y) = self.last_y.replace(py) else {
            return false;
        };
        let before = self.fovy;
        self.fovy = self.clamp(self.fovy + (py - last_y) * self.drag_speed);
        self.fovy != before
    }

    /// Stop the zoom drag.
    pub fn end(&mut self) {
        self.last_y = None;
    }

    /// Apply a scroll-wheel step (positive = zoom in).
    pub fn zoom_by(&mut self, delta: f32) -> bool {
        let before = self.fovy;
        self.fovy = self.clamp(self.fovy - delta * self.scroll_speed);
        self.fovy != before
    }

    fn clamp(&self, fovy: f32) -> f32 {
        fovy.clamp(self.min_fovy, self.max_fovy)
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}
