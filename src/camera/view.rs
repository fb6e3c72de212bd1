use glam::{Mat3, Mat4};

use crate::options::CameraOptions;

/// Perspective projection looking down the volume from a fixed distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Projection {
    /// Projection described by camera options, at their initial field of
    /// view.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            fovy: options.fovy,
            aspect: options.aspect,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Build the projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        // OpenGL [-1,1] clip depth, matching the GLSL ray caster
        Mat4::perspective_rh_gl(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Per-frame uniform block handed to the renderer.
///
/// Laid out for std140: the 3×3 rotation occupies three vec4 columns.
pub struct ViewUniform {
    /// Projection matrix.
    pub projection: [[f32; 4]; 4],
    /// Trackball rotation, columns padded to vec4.
    pub rotation: [[f32; 4]; 3],
    /// Largest voxel index along each axis.
    pub volume_extent: [f32; 3],
    /// Distance from the eye to the volume center.
    pub forward: f32,
}

impl Default for ViewUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewUniform {
    /// Create a uniform with identity matrices and an empty volume.
    #[must_use]
    pub fn new() -> Self {
        Self {
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            rotation: pad_columns(Mat3::IDENTITY),
            volume_extent: [0.0; 3],
            forward: 0.0,
        }
    }

    /// Assemble the uniform for one frame.
    #[must_use]
    pub fn build(
        projection: &Projection,
        rotation: Mat3,
        volume_extent: [f32; 3],
        forward: f32,
    ) -> Self {
        Self {
            projection: projection.build_matrix().to_cols_array_2d(),
            rotation: pad_columns(rotation),
            volume_extent,
            forward,
        }
    }

    /// Rotation as an unpadded 3×3 matrix.
    #[must_use]
    pub fn rotation_matrix(&self) -> Mat3 {
        let [x, y, z] = self.rotation;
        Mat3::from_cols_array(&[
            x[0], x[1], x[2], y[0], y[1], y[2], z[0], z[1], z[2],
        ])
    }

    /// Raw bytes for a buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

fn pad_columns(m: Mat3) -> [[f32; 4]; 3] {
    [m.x_axis.extend(0.0), m.y_axis.extend(0.0), m.z_axis.extend(0.0)]
        .map(|col| col.to_array())
}
