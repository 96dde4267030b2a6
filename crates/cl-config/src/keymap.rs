//! Key-to-button map loaded from the button config file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::tables::{button_by_name, key_code_by_name, Button, DEFAULT_BINDINGS};

/// Errors from loading or creating the button configuration.
///
/// Malformed content is not an error; it degrades to the default layout.
/// Only filesystem failures surface here.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("button config i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("encoding default button config: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Mapping from physical virtual-key codes to emulated gamepad buttons.
#[derive(Clone, Debug, Default)]
pub struct KeyMap {
    bindings: HashMap<u16, Button>,
}

impl KeyMap {
    /// The built-in default layout.
    pub fn defaults() -> Self {
        let mut map = Self::default();
        for (button, key) in DEFAULT_BINDINGS {
            // Default tables are checked by tests; both lookups hold.
            if let (Some(button), Some(code)) = (button_by_name(button), key_code_by_name(key)) {
                map.bindings.insert(code, button);
            }
        }
        map
    }

    /// Load the mapping from `path`.
    ///
    /// A missing file is created with the default layout and the defaults
    /// returned. Malformed JSON or a non-object root falls back to the
    /// defaults; unrecognized button or key names are logged and skipped
    /// while the rest of the file still loads.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            if let Some(dir) = path.parent() {
                if !dir.as_os_str().is_empty() {
                    fs::create_dir_all(dir)?;
                }
            }
            fs::write(path, default_config_json()?)?;
            log::debug!("wrote default button config to {}", path.display());
            return Ok(Self::defaults());
        }

        let text = fs::read_to_string(path)?;
        let value: serde_json::Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(err) => {
                log::warn!(
                    "malformed button config {}: {}; using defaults",
                    path.display(),
                    err
                );
                return Ok(Self::defaults());
            }
        };

        let Some(entries) = value.as_object() else {
            log::warn!(
                "button config {} is not a JSON object; using defaults",
                path.display()
            );
            return Ok(Self::defaults());
        };

        let mut map = Self::default();
        for (button_name, key_value) in entries {
            let Some(button) = button_by_name(button_name) else {
                log::warn!("unknown button '{}' in config; skipping", button_name);
                continue;
            };
            let Some(key_name) = key_value.as_str() else {
                log::warn!(
                    "binding for '{}' is not a string; skipping",
                    button_name
                );
                continue;
            };
            let Some(code) = key_code_by_name(key_name) else {
                log::warn!("unknown key '{}' in config; skipping", key_name);
                continue;
            };
            map.bindings.insert(code, button);
        }
        Ok(map)
    }

    /// The button bound to a physical key, if any.
    pub fn button_for_key(&self, code: u16) -> Option<Button> {
        self.bindings.get(&code).copied()
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// The default layout rendered as pretty-printed JSON.
fn default_config_json() -> Result<String, serde_json::Error> {
    let mut object = serde_json::Map::new();
    for (button, key) in DEFAULT_BINDINGS {
        object.insert((*button).to_string(), serde_json::Value::from(*key));
    }
    serde_json::to_string_pretty(&serde_json::Value::Object(object))
}
