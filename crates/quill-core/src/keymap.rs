//! Keyboard shortcuts.
//!
//! A `Keymap` maps single key presses (with modifiers) to commands. The
//! defaults cover the File/Edit/Format menus; `[keyboard.bindings]` in the
//! config adds or overrides entries.

use crate::command::Command;
use crate::config::Config;
use std::collections::HashMap;

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool, // Cmd on macOS, Win on Windows
}

impl Modifiers {
    /// No modifiers pressed.
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Ctrl modifier.
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Ctrl+Shift.
    pub const CTRL_SHIFT: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: true,
        meta: false,
    };

    /// Returns true if no modifiers are pressed.
    pub fn is_empty(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift && !self.meta
    }

    /// Parses one modifier name, returning false if it is not a modifier.
    fn apply(&mut self, name: &str) -> bool {
        match name {
            "ctrl" | "control" => self.ctrl = true,
            "alt" | "option" => self.alt = true,
            "shift" => self.shift = true,
            "meta" | "cmd" | "super" | "win" => self.meta = true,
            _ => return false,
        }
        true
    }
}

impl std::fmt::Display for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.meta {
            #[cfg(target_os = "macos")]
            parts.push("Cmd");
            #[cfg(not(target_os = "macos"))]
            parts.push("Win");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A key code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable key, always stored lowercase.
    Char(char),
    Enter,
    Tab,
    Escape,
    Space,
    F(u8), // F1-F12
}

impl Key {
    /// Parses a key from a string.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "enter" | "return" => Some(Key::Enter),
            "tab" => Some(Key::Tab),
            "escape" | "esc" => Some(Key::Escape),
            "space" => Some(Key::Space),
            "plus" => Some(Key::Char('+')),
            "minus" => Some(Key::Char('-')),
            _ if lower.starts_with('f') && lower.len() > 1 && lower.len() <= 3 => {
                lower[1..].parse().ok().filter(|n| (1..=12).contains(n)).map(Key::F)
            }
            _ => {
                let mut chars = lower.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Char(c)),
                    _ => None,
                }
            }
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c.to_uppercase()),
            Key::Enter => write!(f, "Enter"),
            Key::Tab => write!(f, "Tab"),
            Key::Escape => write!(f, "Escape"),
            Key::Space => write!(f, "Space"),
            Key::F(n) => write!(f, "F{}", n),
        }
    }
}

/// A key press event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    /// Creates a new key press.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Shorthand for Ctrl + a character key.
    pub fn ctrl(c: char) -> Self {
        Self::new(Key::Char(c), Modifiers::CTRL)
    }

    /// Parses a binding string like `"ctrl+s"` or `"ctrl+shift+s"`.
    ///
    /// A lone `+` is accepted as the last key (`"ctrl++"`).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let (mods, key_str) = match s.strip_suffix("++") {
            Some(rest) => (rest, "+"),
            None => match s.rsplit_once('+') {
                Some((mods, key)) => (mods, key),
                None => ("", s.as_str()),
            },
        };

        let key = Key::parse(key_str.trim())?;

        let mut modifiers = Modifiers::NONE;
        for part in mods.split('+').map(str::trim).filter(|p| !p.is_empty()) {
            if !modifiers.apply(part) {
                return None;
            }
        }

        Some(Self { key, modifiers })
    }
}

impl std::fmt::Display for KeyPress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifiers, self.key)
        }
    }
}

/// A key binding maps a key press to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: KeyPress,
    pub command: Command,
}

/// Keyboard mapping configuration.
pub struct Keymap {
    /// All key bindings, in insertion order.
    bindings: Vec<KeyBinding>,
    /// Index by key for fast lookup.
    by_key: HashMap<KeyPress, usize>,
}

impl Keymap {
    /// Creates a new keymap with default bindings.
    pub fn new() -> Self {
        let mut keymap = Self {
            bindings: Vec::new(),
            by_key: HashMap::new(),
        };
        keymap.add_default_bindings();
        keymap
    }

    /// Creates a keymap from configuration.
    ///
    /// User bindings override defaults bound to the same key. Entries that
    /// don't parse are skipped with a warning.
    pub fn from_config(config: &Config) -> Self {
        let mut keymap = Self::new();

        // HashMap order is arbitrary; sort so overrides apply deterministically
        let mut user: Vec<_> = config.keyboard.bindings.iter().collect();
        user.sort();

        for (key_str, cmd_str) in user {
            let Some(key) = KeyPress::parse(key_str) else {
                tracing::warn!("Ignoring binding with unknown key: {}", key_str);
                continue;
            };
            let Some(command) = Command::from_id(cmd_str) else {
                tracing::warn!("Ignoring binding {} to unknown command: {}", key_str, cmd_str);
                continue;
            };
            keymap.add_binding(KeyBinding { key, command });
        }

        keymap
    }

    fn add_default_bindings(&mut self) {
        use Command::*;

        let defaults = [
            // File operations
            (KeyPress::ctrl('n'), NewFile),
            (KeyPress::ctrl('o'), OpenFile),
            (KeyPress::ctrl('s'), Save),
            (KeyPress::new(Key::Char('s'), Modifiers::CTRL_SHIFT), SaveAs),
            // Edit operations
            (KeyPress::ctrl('x'), Cut),
            (KeyPress::ctrl('c'), Copy),
            (KeyPress::ctrl('v'), Paste),
            (KeyPress::ctrl('a'), SelectAll),
            // Font size
            (KeyPress::ctrl('='), ZoomIn),
            (KeyPress::ctrl('-'), ZoomOut),
            (KeyPress::ctrl('0'), ZoomReset),
        ];

        for (key, command) in defaults {
            self.add_binding(KeyBinding { key, command });
        }
    }

    /// Adds a binding, replacing any binding on the same key.
    pub fn add_binding(&mut self, binding: KeyBinding) {
        match self.by_key.get(&binding.key) {
            Some(&i) => self.bindings[i] = binding,
            None => {
                self.by_key.insert(binding.key.clone(), self.bindings.len());
                self.bindings.push(binding);
            }
        }
    }

    /// Returns the command bound to `key`, if any.
    pub fn resolve(&self, key: &KeyPress) -> Option<Command> {
        self.by_key.get(key).map(|&i| self.bindings[i].command)
    }

    /// Returns the first key bound to `command`, for menu labels.
    pub fn shortcut_for(&self, command: Command) -> Option<&KeyPress> {
        self.bindings
            .iter()
            .find(|b| b.command == command)
            .map(|b| &b.key)
    }

    /// Returns all bindings.
    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypress_parse() {
        let kp = KeyPress::parse("ctrl+s").unwrap();
        assert_eq!(kp.key, Key::Char('s'));
        assert!(kp.modifiers.ctrl);
        assert!(!kp.modifiers.shift);

        let kp = KeyPress::parse("Ctrl+Shift+S").unwrap();
        assert_eq!(kp, KeyPress::new(Key::Char('s'), Modifiers::CTRL_SHIFT));

        let kp = KeyPress::parse("ctrl++").unwrap();
        assert_eq!(kp.key, Key::Char('+'));

        assert_eq!(KeyPress::parse("f5").unwrap().key, Key::F(5));
        assert!(KeyPress::parse("hyper+s").is_none());
        assert!(KeyPress::parse("ctrl+nope").is_none());
    }

    #[test]
    fn test_keypress_display() {
        assert_eq!(KeyPress::ctrl('s').to_string(), "Ctrl+S");
        assert_eq!(
            KeyPress::new(Key::Char('s'), Modifiers::CTRL_SHIFT).to_string(),
            "Ctrl+Shift+S"
        );
        assert_eq!(KeyPress::new(Key::F(1), Modifiers::NONE).to_string(), "F1");
    }

    #[test]
    fn test_save_shortcut() {
        let keymap = Keymap::new();
        assert_eq!(keymap.resolve(&KeyPress::ctrl('s')), Some(Command::Save));
        assert_eq!(
            keymap.resolve(&KeyPress::new(Key::Char('s'), Modifiers::CTRL_SHIFT)),
            Some(Command::SaveAs)
        );
        assert_eq!(
            keymap.resolve(&KeyPress::new(Key::Char('s'), Modifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_shortcut_for() {
        let keymap = Keymap::new();
        assert_eq!(keymap.shortcut_for(Command::Save), Some(&KeyPress::ctrl('s')));
        assert_eq!(keymap.shortcut_for(Command::ShowAbout), None);
    }

    #[test]
    fn test_user_bindings_override_defaults() {
        let mut config = Config::default();
        config
            .keyboard
            .bindings
            .insert("ctrl+s".to_string(), "file.save_as".to_string());
        config
            .keyboard
            .bindings
            .insert("f1".to_string(), "help.shortcuts".to_string());
        config
            .keyboard
            .bindings
            .insert("ctrl+q".to_string(), "editor.quit".to_string());

        let keymap = Keymap::from_config(&config);
        assert_eq!(keymap.resolve(&KeyPress::ctrl('s')), Some(Command::SaveAs));
        assert_eq!(
            keymap.resolve(&KeyPress::new(Key::F(1), Modifiers::NONE)),
            Some(Command::ShowShortcuts)
        );
        assert_eq!(keymap.resolve(&KeyPress::ctrl('q')), None);
        assert_eq!(keymap.bindings().len(), Keymap::new().bindings().len() + 1);
    }
}
