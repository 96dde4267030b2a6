//! Static lookup tables for buttons and physical keys.
//!
//! Process-wide, immutable tables; lookups are linear scans, only ever
//! run on the cold config-load path.

/// Logical gamepad button on the emulated hardware.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    Start,
    Select,
}

/// Button names accepted in the config file.
const BUTTON_LOOKUP: &[(&str, Button)] = &[
    ("Left", Button::Left),
    ("Up", Button::Up),
    ("Right", Button::Right),
    ("Down", Button::Down),
    ("A", Button::A),
    ("B", Button::B),
    ("Start", Button::Start),
    ("Select", Button::Select),
];

/// Physical key names and their virtual-key codes.
const KEY_LOOKUP: &[(&str, u16)] = &[
    ("Backspace", 0x08),
    ("Tab", 0x09),
    ("Clear", 0x0C),
    ("Enter", 0x0D),
    ("Shift", 0x10),
    ("Ctrl", 0x11),
    ("Alt", 0x12),
    ("Pause", 0x13),
    ("Caps", 0x14),
    ("Esc", 0x1B),
    ("Space", 0x20),
    ("PageUp", 0x21),
    ("PageDown", 0x22),
    ("End", 0x23),
    ("Home", 0x24),
    ("LeftArrow", 0x25),
    ("UpArrow", 0x26),
    ("RightArrow", 0x27),
    ("DownArrow", 0x28),
    ("Select", 0x29),
    ("Print", 0x2A),
    ("Execute", 0x2B),
    ("PrintScreen", 0x2C),
    ("Insert", 0x2D),
    ("Delete", 0x2E),
    ("Help", 0x2F),
    ("0", 0x30),
    ("1", 0x31),
    ("2", 0x32),
    ("3", 0x33),
    ("4", 0x34),
    ("5", 0x35),
    ("6", 0x36),
    ("7", 0x37),
    ("8", 0x38),
    ("9", 0x39),
    ("A", 0x41),
    ("B", 0x42),
    ("C", 0x43),
    ("D", 0x44),
    ("E", 0x45),
    ("F", 0x46),
    ("G", 0x47),
    ("H", 0x48),
    ("I", 0x49),
    ("J", 0x4A),
    ("K", 0x4B),
    ("L", 0x4C),
    ("M", 0x4D),
    ("N", 0x4E),
    ("O", 0x4F),
    ("P", 0x50),
    ("Q", 0x51),
    ("R", 0x52),
    ("S", 0x53),
    ("T", 0x54),
    ("U", 0x55),
    ("V", 0x56),
    ("W", 0x57),
    ("X", 0x58),
    ("Y", 0x59),
    ("Z", 0x5A),
    ("LeftWin", 0x5B),
    ("RightWin", 0x5C),
    ("Sleep", 0x5F),
    ("NumPad0", 0x60),
    ("NumPad1", 0x61),
    ("NumPad2", 0x62),
    ("NumPad3", 0x63),
    ("NumPad4", 0x64),
    ("NumPad5", 0x65),
    ("NumPad6", 0x66),
    ("NumPad7", 0x67),
    ("NumPad8", 0x68),
    ("NumPad9", 0x69),
    ("Multiply", 0x6A),
    ("Add", 0x6B),
    ("Separator", 0x6C),
    ("Subtract", 0x6D),
    ("Decimal", 0x6E),
    ("Divide", 0x6F),
    ("F1", 0x70),
    ("F2", 0x71),
    ("F3", 0x72),
    ("F4", 0x73),
    ("F5", 0x74),
    ("F6", 0x75),
    ("F7", 0x76),
    ("F8", 0x77),
    ("F9", 0x78),
    ("F10", 0x79),
    ("F11", 0x7A),
    ("F12", 0x7B),
    ("F13", 0x7C),
    ("F14", 0x7D),
    ("F15", 0x7E),
    ("F16", 0x7F),
    ("F17", 0x80),
    ("F18", 0x81),
    ("F19", 0x82),
    ("F20", 0x83),
    ("F21", 0x84),
    ("F22", 0x85),
    ("F23", 0x86),
    ("F24", 0x87),
    ("NumLock", 0x90),
    ("Scroll", 0x91),
    ("LeftShift", 0xA0),
    ("RightShift", 0xA1),
    ("LeftCtrl", 0xA2),
    ("RightCtrl", 0xA3),
    ("LeftMenu", 0xA4),
    ("RightMenu", 0xA5),
];

/// Default layout written when no config file exists.
pub const DEFAULT_BINDINGS: &[(&str, &str)] = &[
    ("Up", "UpArrow"),
    ("Down", "DownArrow"),
    ("Left", "LeftArrow"),
    ("Right", "RightArrow"),
    ("A", "Z"),
    ("B", "X"),
    ("Start", "Enter"),
    ("Select", "Ctrl"),
];

/// Resolve a config-file button name.
pub fn button_by_name(name: &str) -> Option<Button> {
    BUTTON_LOOKUP
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, b)| *b)
}

/// Resolve a config-file key name to its virtual-key code.
pub fn key_code_by_name(name: &str) -> Option<u16> {
    KEY_LOOKUP.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
}

/// Reverse lookup: the name of a virtual-key code, if known.
pub fn key_name_by_code(code: u16) -> Option<&'static str> {
    KEY_LOOKUP.iter().find(|(_, c)| *c == code).map(|(n, _)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_names_resolve() {
        assert_eq!(button_by_name("A"), Some(Button::A));
        assert_eq!(button_by_name("Select"), Some(Button::Select));
        assert_eq!(button_by_name("Turbo"), None);
    }

    #[test]
    fn key_names_resolve_both_ways() {
        assert_eq!(key_code_by_name("Z"), Some(0x5A));
        assert_eq!(key_name_by_code(0x5A), Some("Z"));
        assert_eq!(key_code_by_name("HyperKey"), None);
        assert_eq!(key_name_by_code(0xFFFF), None);
    }

    #[test]
    fn default_bindings_only_use_known_names() {
        for (button, key) in DEFAULT_BINDINGS {
            assert!(button_by_name(button).is_some(), "unknown button {button}");
            assert!(key_code_by_name(key).is_some(), "unknown key {key}");
        }
    }

    #[test]
    fn default_bindings_cover_every_button() {
        assert_eq!(DEFAULT_BINDINGS.len(), BUTTON_LOOKUP.len());
    }
}
