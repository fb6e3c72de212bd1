use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Initial window size in physical pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Viewport", inline)]
#[serde(default)]
pub struct ViewportOptions {
    /// Window width.
    #[schemars(title = "Width", range(min = 1))]
    pub width: u32,
    /// Window height.
    #[schemars(title = "Height", range(min = 1))]
    pub height: u32,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}
