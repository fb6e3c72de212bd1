//! Camera system for volume viewing.
//!
//! A virtual-sphere trackball supplies the volume's orientation, a zoom
//! controller supplies the field of view, and the view module assembles
//! both into the uniform block the renderer consumes every frame.

/// Virtual-sphere rotation controller.
pub mod trackball;
/// Projection and per-frame GPU uniform types.
pub mod view;
/// Field-of-view zoom controller.
pub mod zoom;

pub use trackball::TrackballController;
pub use view::{Projection, ViewUniform};
pub use zoom::ZoomController;
