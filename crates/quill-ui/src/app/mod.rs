use iced::widget::text_editor;
use iced::{event, keyboard, window, Event, Size, Subscription, Task};
use std::path::PathBuf;

use quill_buffer::Indent;
use quill_core::{Config, Document, Keymap, MenuBar, ScrollSync};

pub mod file_ops;
pub mod messages;
pub mod update;
pub mod view;

pub use messages::*;

use crate::theme;

/// Launch options collected by the binary.
#[derive(Debug, Default)]
pub struct Flags {
    pub config: Config,
    /// File to open once the window is up
    pub file: Option<PathBuf>,
}

/// A modal dialog over the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    About,
    Shortcuts,
}

pub struct App {
    pub document: Document,
    pub content: text_editor::Content,
    pub config: Config,
    pub keymap: Keymap,
    pub menus: MenuBar,
    pub scroll: ScrollSync,
    pub soft_tabs: bool,
    pub indent: Indent,
    pub font_size: f32,
    pub status_message: String,
    pub dialog: Option<Dialog>,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags { config, file } = flags;

        let app = Self {
            document: Document::new(config.files.default_file_name.clone()),
            content: text_editor::Content::new(),
            keymap: Keymap::from_config(&config),
            menus: MenuBar::new(),
            scroll: ScrollSync::new(),
            soft_tabs: config.editor.use_spaces,
            indent: config.indent(),
            font_size: config.ui.font_size,
            status_message: "Ready | Ctrl+O: Open | Ctrl+S: Save".to_string(),
            dialog: None,
            config,
        };

        let task = match file {
            Some(path) => file_ops::open_path(path, app.config.files.max_file_size_bytes()),
            None => Task::none(),
        };

        (app, task)
    }

    pub fn title(&self) -> String {
        let modified = if self.document.is_modified() { " *" } else { "" };
        format!("{}{} - Quill", self.document.file_name(), modified)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(route_key_event)
    }
}

/// Turns a runtime event into a key message.
///
/// Presses no widget consumed always reach the keymap. A press that a
/// focused widget captured is forwarded only when it carries the command
/// modifier or is Escape, so shortcuts still fire from the filename field
/// and Escape still dismisses an open menu from inside the editor.
fn route_key_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return None;
    };

    match status {
        event::Status::Ignored => Some(Message::KeyPressed(key, modifiers)),
        event::Status::Captured => {
            let is_escape = matches!(key, keyboard::Key::Named(keyboard::key::Named::Escape));
            (modifiers.command() || is_escape).then(|| Message::KeyCaptured(key, modifiers))
        }
    }
}

pub fn run(flags: Flags) -> iced::Result {
    let window_size = Size::new(flags.config.ui.window_width, flags.config.ui.window_height);

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window_size(window_size)
        .theme(|_| theme::app_theme())
        .antialiasing(true)
        .run_with(move || App::new(flags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyboard::key::{NativeCode, Physical};

    fn key_press(key: keyboard::Key, modifiers: keyboard::Modifiers) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            modified_key: key.clone(),
            key,
            physical_key: Physical::Unidentified(NativeCode::Unidentified),
            location: keyboard::Location::Standard,
            modifiers,
            text: None,
        })
    }

    fn route(event: Event, status: event::Status) -> Option<Message> {
        route_key_event(event, status, window::Id::unique())
    }

    fn ctrl_s() -> Event {
        key_press(keyboard::Key::Character("s".into()), keyboard::Modifiers::COMMAND)
    }

    #[test]
    fn test_uncaptured_press_goes_to_keymap() {
        let routed = route(ctrl_s(), event::Status::Ignored);
        assert!(matches!(routed, Some(Message::KeyPressed(..))));
    }

    #[test]
    fn test_shortcut_captured_by_text_field_is_forwarded() {
        let routed = route(ctrl_s(), event::Status::Captured);
        assert!(matches!(
            routed,
            Some(Message::KeyCaptured(keyboard::Key::Character(ref c), m)) if c == "s" && m.command()
        ));
    }

    #[test]
    fn test_captured_typing_is_dropped() {
        let letter = key_press(keyboard::Key::Character("s".into()), keyboard::Modifiers::empty());
        assert!(route(letter, event::Status::Captured).is_none());

        let shifted = key_press(keyboard::Key::Character("S".into()), keyboard::Modifiers::SHIFT);
        assert!(route(shifted, event::Status::Captured).is_none());
    }

    #[test]
    fn test_captured_escape_is_forwarded() {
        let escape = key_press(
            keyboard::Key::Named(keyboard::key::Named::Escape),
            keyboard::Modifiers::empty(),
        );
        assert!(matches!(
            route(escape, event::Status::Captured),
            Some(Message::KeyCaptured(..))
        ));
    }

    #[test]
    fn test_non_key_events_are_ignored() {
        let released = Event::Keyboard(keyboard::Event::KeyReleased {
            key: keyboard::Key::Character("s".into()),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::COMMAND,
        });
        assert!(route(released, event::Status::Ignored).is_none());
    }
}
