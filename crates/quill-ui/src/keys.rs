//! Translation from iced keyboard events to keymap key presses.

use iced::keyboard::{self, key::Named};
use quill_core::keymap::{Key, KeyPress, Modifiers};
use quill_core::Command;

/// Converts an iced key event into a `KeyPress` the keymap understands.
///
/// Returns `None` for keys the keymap has no name for (arrows, modifiers
/// pressed on their own, media keys).
pub fn to_key_press(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<KeyPress> {
    let key = match key {
        keyboard::Key::Character(c) => Key::parse(c.as_str())?,
        keyboard::Key::Named(named) => named_key(*named)?,
        keyboard::Key::Unidentified => return None,
    };

    Some(KeyPress::new(key, convert_modifiers(modifiers)))
}

/// Maps iced modifiers onto the keymap's.
///
/// `Ctrl` in a binding means the platform command key, so Cmd+S saves on
/// macOS the same way Ctrl+S does elsewhere.
pub fn convert_modifiers(modifiers: keyboard::Modifiers) -> Modifiers {
    Modifiers {
        ctrl: modifiers.command(),
        alt: modifiers.alt(),
        shift: modifiers.shift(),
        meta: modifiers.logo() && !cfg!(target_os = "macos"),
    }
}

/// Commands a focused text widget already performs on its own shortcut.
pub fn handled_by_widget(command: Command) -> bool {
    matches!(
        command,
        Command::Cut | Command::Copy | Command::Paste | Command::SelectAll
    )
}

fn named_key(named: Named) -> Option<Key> {
    let key = match named {
        Named::Enter => Key::Enter,
        Named::Tab => Key::Tab,
        Named::Escape => Key::Escape,
        Named::Space => Key::Space,
        Named::F1 => Key::F(1),
        Named::F2 => Key::F(2),
        Named::F3 => Key::F(3),
        Named::F4 => Key::F(4),
        Named::F5 => Key::F(5),
        Named::F6 => Key::F(6),
        Named::F7 => Key::F(7),
        Named::F8 => Key::F(8),
        Named::F9 => Key::F(9),
        Named::F10 => Key::F(10),
        Named::F11 => Key::F(11),
        Named::F12 => Key::F(12),
        _ => return None,
    };
    Some(key)
}
