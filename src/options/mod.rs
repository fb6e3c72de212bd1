//! Viewer options with TOML preset support.
//!
//! Camera, viewport, volume and key-binding settings are consolidated here.
//! Options serialize to/from TOML so a viewing setup can be saved and
//! reloaded with `--options`.

mod camera;
mod keybindings;
mod viewport;
mod volume;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use viewport::ViewportOptions;
pub use volume::VolumeOptions;

use crate::error::VolviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Projection and zoom parameters.
    pub camera: CameraOptions,
    /// Initial window size.
    pub viewport: ViewportOptions,
    /// Volume resolution.
    pub volume: VolumeOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the user-facing options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VolviewError> {
        let content = std::fs::read_to_string(path).map_err(VolviewError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, VolviewError> {
        toml::from_str(content)
            .map_err(|e| VolviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VolviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VolviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VolviewError::Io)?;
        }
        std::fs::write(path, content).map_err(VolviewError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Load the preset `name` from `dir` (`dir/name.toml`).
    ///
    /// An unknown name is reported together with the presets that do exist.
    pub fn load_preset(dir: &Path, name: &str) -> Result<Self, VolviewError> {
        let path = dir.join(format!("{name}.toml"));
        if !path.is_file() {
            let available = Self::list_presets(dir);
            return Err(VolviewError::OptionsParse(format!(
                "no preset {name:?} in {} (available: {})",
                dir.display(),
                if available.is_empty() {
                    "none".to_owned()
                } else {
                    available.join(", ")
                }
            )));
        }
        Self::load(&path)
    }

    /// Check the values that would otherwise divide by zero or produce a
    /// degenerate projection.
    pub fn validate(&self) -> Result<(), VolviewError> {
        let ViewportOptions { width, height } = self.viewport;
        if width == 0 || height == 0 {
            return Err(VolviewError::InvalidViewport { width, height });
        }
        let cam = &self.camera;
        if !(cam.min_fovy > 0.0 && cam.min_fovy <= cam.max_fovy && cam.max_fovy < 180.0) {
            return Err(VolviewError::OptionsParse(format!(
                "field of view bounds [{}, {}] must lie in (0, 180)",
                cam.min_fovy, cam.max_fovy
            )));
        }
        if !(cam.znear > 0.0 && cam.znear < cam.zfar) {
            return Err(VolviewError::OptionsParse(format!(
                "clip planes must satisfy 0 < znear < zfar, got {} and {}",
                cam.znear, cam.zfar
            )));
        }
        if cam.aspect <= 0.0 {
            return Err(VolviewError::OptionsParse(format!(
                "aspect ratio must be positive, got {}",
                cam.aspect
            )));
        }
        if let Some(key) = self.keybindings.duplicate_key() {
            return Err(VolviewError::OptionsParse(format!(
                "key {key:?} is bound to more than one action"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
fovy = 30.0
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.fovy, 30.0);
        // Everything else should be default
        assert_eq!(opts.camera.znear, 18.0);
        assert_eq!(opts.viewport.width, 800);
        assert_eq!(opts.volume.resolution, [256, 256, 256]);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[camera]\nfovy = \"wide\"").unwrap_err();
        assert!(matches!(err, VolviewError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("KeyR"), Some(KeyAction::ResetView));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn keybindings_override_from_toml() {
        let toml_str = r#"
[keybindings.bindings]
quit = "KeyQ"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyQ"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("Escape"), None);
    }

    #[test]
    fn validate_rejects_key_bound_twice() {
        let toml_str = r#"
[keybindings.bindings]
quit = "KeyR"
reset_view = "KeyR"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        let err = opts.validate().unwrap_err();
        assert!(matches!(err, VolviewError::OptionsParse(ref msg) if msg.contains("KeyR")));
    }

    #[test]
    fn volume_extent_is_last_index() {
        let volume = VolumeOptions {
            resolution: [256, 128, 0],
        };
        assert_eq!(volume.extent(), [255.0, 127.0, 0.0]);
    }

    #[test]
    fn validate_rejects_zero_viewport() {
        let mut opts = Options::default();
        assert!(opts.validate().is_ok());
        opts.viewport.height = 0;
        assert!(matches!(
            opts.validate(),
            Err(VolviewError::InvalidViewport { width: 800, height: 0 })
        ));
    }

    #[test]
    fn validate_rejects_inverted_clip_planes() {
        let mut opts = Options::default();
        opts.camera.znear = 30.0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn save_then_load_from_disk() {
        let dir = std::env::temp_dir()
            .join(format!("volview-options-{}", std::process::id()));
        let path = dir.join("bonsai.toml");

        let mut opts = Options::default();
        opts.volume.resolution = [256, 256, 128];
        opts.save(&path).unwrap();

        assert_eq!(Options::load(&path).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir), vec!["bonsai".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn presets_load_by_name() {
        let dir = std::env::temp_dir()
            .join(format!("volview-presets-{}", std::process::id()));

        let mut engine = Options::default();
        engine.volume.resolution = [256, 256, 110];
        engine.save(&dir.join("engine.toml")).unwrap();
        Options::default().save(&dir.join("aneurism.toml")).unwrap();

        assert_eq!(Options::load_preset(&dir, "engine").unwrap(), engine);

        let err = Options::load_preset(&dir, "foot").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("\"foot\""));
        assert!(msg.contains("aneurism, engine"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("viewport"));
        assert!(props.contains_key("volume"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("zoom_speed").is_some());
        assert!(camera.get("znear").is_none());
    }
}
