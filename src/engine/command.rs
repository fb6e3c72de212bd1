//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing operation (mouse gesture, key press, window resize)
//! is represented as a `ViewCommand`. Consumers construct commands and
//! pass them to [`ViewEngine::execute`](super::ViewEngine::execute).

/// A single state change requested of the [`ViewEngine`](super::ViewEngine).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    /// Start a trackball drag at a pixel.
    BeginRotate {
        /// Horizontal pixel.
        x: f32,
        /// Vertical pixel.
        y: f32,
    },
    /// Move the trackball drag to a pixel.
    UpdateRotate {
        /// Horizontal pixel.
        x: f32,
        /// Vertical pixel.
        y: f32,
    },
    /// Release the trackball drag at a pixel, committing its rotation.
    EndRotate {
        /// Horizontal pixel.
        x: f32,
        /// Vertical pixel.
        y: f32,
    },
    /// Start a zoom drag at a vertical pixel.
    BeginZoom {
        /// Vertical pixel.
        y: f32,
    },
    /// Move the zoom drag to a vertical pixel.
    UpdateZoom {
        /// Vertical pixel.
        y: f32,
    },
    /// Release the zoom drag.
    EndZoom,
    /// Scroll-wheel zoom step (positive = zoom in).
    Zoom {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// The viewport changed size. Both dimensions are positive.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// Return to the initial orientation and field of view.
    ResetView,
    /// Ask the host to close the viewer.
    Quit,
}
