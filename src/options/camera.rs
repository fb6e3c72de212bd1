use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Projection and zoom parameters.
pub struct CameraOptions {
    /// Initial vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 0.01, max = 179.0), extend("step" = 0.5))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Projection aspect ratio. The volume is drawn into a square frame
    /// regardless of the window shape.
    #[schemars(skip)]
    pub aspect: f32,
    /// Distance from the eye to the volume center.
    #[schemars(skip)]
    pub forward: f32,
    /// Degrees of field of view per pixel of vertical middle-button drag.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Degrees of field of view per scroll-wheel line.
    #[schemars(title = "Scroll Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub scroll_speed: f32,
    /// Narrowest allowed field of view in degrees.
    #[schemars(skip)]
    pub min_fovy: f32,
    /// Widest allowed field of view in degrees.
    #[schemars(skip)]
    pub max_fovy: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 3.0,
            znear: 18.0,
            zfar: 22.0,
            aspect: 1.0,
            forward: 20.0,
            zoom_speed: 0.1,
            scroll_speed: 1.0,
            min_fovy: 0.01,
            max_fovy: 179.0,
        }
    }
}
