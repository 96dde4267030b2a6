//! Button-to-key configuration for the emulated gamepad.
//!
//! Loads a JSON file mapping logical button names (`Up`, `A`, `Start`,
//! ...) to physical key names, falling back to a built-in default layout.
//! Malformed files and unknown names degrade gracefully: the entry is
//! logged and skipped, never fatal.

mod keymap;
mod tables;

pub use keymap::{ConfigError, KeyMap};
pub use tables::{button_by_name, key_code_by_name, key_name_by_code, Button, DEFAULT_BINDINGS};
