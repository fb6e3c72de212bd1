use serde::{Deserialize, Serialize};

/// Viewer-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// quit = "Escape"
/// reset_view = "KeyR"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Close the viewer.
    Quit,
    /// Return the volume to its initial orientation.
    ResetView,
}
