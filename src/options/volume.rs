use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Description of the scalar volume being viewed.
///
/// Only the resolution is needed on the CPU side; it sets the extent the
/// ray caster samples over.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Volume", inline)]
#[serde(default)]
pub struct VolumeOptions {
    /// Voxel count along x, y and z.
    #[schemars(title = "Resolution")]
    pub resolution: [u32; 3],
}

impl Default for VolumeOptions {
    fn default() -> Self {
        Self {
            resolution: [256, 256, 256],
        }
    }
}

impl VolumeOptions {
    /// Largest index along each axis (`resolution - 1`), as floats.
    ///
    /// Axes with zero voxels report an extent of zero.
    #[must_use]
    pub fn extent(&self) -> [f32; 3] {
        self.resolution.map(|n| n.saturating_sub(1) as f32)
    }
}
