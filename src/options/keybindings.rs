use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `Quit` → `"Escape"`).
    pub bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::Quit, "Escape".into()),
            (KeyAction::ResetView, "KeyR".into()),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action bound to a key string.
    ///
    /// If several actions share the key (which [`Options::validate`]
    /// rejects), the first in declaration order wins.
    ///
    /// [`Options::validate`]: crate::Options::validate
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings
            .iter()
            .filter(|(_, bound)| bound.as_str() == key)
            .map(|(action, _)| *action)
            .min()
    }

    /// A key string bound to more than one action, if any.
    #[must_use]
    pub fn duplicate_key(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        let mut keys: Vec<(&KeyAction, &String)> = self.bindings.iter().collect();
        keys.sort_unstable();
        keys.into_iter()
            .map(|(_, key)| key.as_str())
            .find(|key| !seen.insert(*key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared_key() -> KeybindingOptions {
        KeybindingOptions {
            bindings: HashMap::from([
                (KeyAction::ResetView, "Space".into()),
                (KeyAction::Quit, "Space".into()),
            ]),
        }
    }

    #[test]
    fn defaults_have_distinct_keys() {
        assert_eq!(KeybindingOptions::default().duplicate_key(), None);
    }

    #[test]
    fn shared_key_is_reported() {
        assert_eq!(shared_key().duplicate_key(), Some("Space"));
    }

    #[test]
    fn shared_key_lookup_is_stable() {
        // HashMap iteration order varies between instances
        for _ in 0..32 {
            assert_eq!(shared_key().lookup("Space"), Some(KeyAction::Quit));
        }
    }
}
