//! The code input: a read-only line-number gutter beside the editor.
//!
//! Each pane sits in its own scrollable. The editor's scrollable reports its
//! offset through `Message::EditorScrolled`; the update loop moves the
//! gutter's scrollable to match. The gutter hides its scrollbar and never
//! scrolls on its own.

use iced::alignment::Horizontal;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::text::Wrapping;
use iced::widget::{container, row, scrollable, text, text_editor};
use iced::{keyboard, Background, Border, Color, Element, Font, Length, Padding, Theme};

use quill_core::{Command, Keymap};

use crate::app::{App, Message};
use crate::keys;
use crate::style::EditorStyle;
use crate::theme::colors;

/// Scrollable holding the editor.
pub fn editor_scroll_id() -> scrollable::Id {
    scrollable::Id::new("quill-editor")
}

/// Scrollable holding the gutter.
pub fn gutter_scroll_id() -> scrollable::Id {
    scrollable::Id::new("quill-gutter")
}

impl App {
    pub fn view_code_input(&self) -> Element<'_, Message> {
        let style = EditorStyle::default();
        let suffix = &self.config.editor.line_number_suffix;
        let gutter_width = style.gutter_width(self.document.line_count(), suffix, self.font_size);

        let labels = text(self.document.gutter_text(suffix))
            .font(Font::MONOSPACE)
            .size(self.font_size)
            .color(colors::TEXT_MUTED)
            .width(Length::Fill)
            .align_x(Horizontal::Right);

        let gutter = scrollable(container(labels).padding(Padding {
            top: style.padding,
            right: style.gutter_padding_x,
            bottom: style.padding,
            left: style.gutter_padding_x,
        }))
        .id(gutter_scroll_id())
        .direction(Direction::Vertical(
            Scrollbar::new().width(0).scroller_width(0),
        ))
        .width(Length::Fixed(gutter_width))
        .height(Length::Fill);

        let keymap = &self.keymap;
        let editor = text_editor(&self.content)
            .placeholder("Start typing...")
            .font(Font::MONOSPACE)
            .size(self.font_size)
            .padding(Padding {
                top: style.padding,
                right: 20.0,
                bottom: style.padding,
                left: style.padding,
            })
            .wrapping(Wrapping::None)
            .style(|_: &Theme, _| text_editor::Style {
                background: Background::Color(colors::BG_DARK),
                border: Border {
                    width: 0.0,
                    radius: 0.0.into(),
                    color: Color::TRANSPARENT,
                },
                icon: colors::TEXT_MUTED,
                placeholder: colors::TEXT_MUTED,
                value: colors::TEXT_PRIMARY,
                selection: colors::SELECTION,
            })
            .key_binding(move |key_press| editor_binding(keymap, key_press))
            .on_action(Message::EditorAction);

        let editor = scrollable(editor)
            .id(editor_scroll_id())
            .on_scroll(|viewport| Message::EditorScrolled(viewport.absolute_offset()))
            .width(Length::Fill)
            .height(Length::Fill);

        container(row![gutter, editor])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_DARK)),
                ..Default::default()
            })
            .into()
    }
}

/// Key handling while the editor has focus.
///
/// Tab inserts the configured indent. Shortcuts bound in the keymap are
/// left uncaptured so the app-wide key subscription runs them once; the
/// widget keeps clipboard and select-all, which it does natively.
/// Everything else gets the widget's default.
fn editor_binding(
    keymap: &Keymap,
    key_press: text_editor::KeyPress,
) -> Option<text_editor::Binding<Message>> {
    if !matches!(key_press.status, text_editor::Status::Focused) {
        return None;
    }

    let is_tab = matches!(
        key_press.key,
        keyboard::Key::Named(keyboard::key::Named::Tab)
    );
    if is_tab && !key_press.modifiers.command() && !key_press.modifiers.alt() {
        return Some(text_editor::Binding::Custom(Message::InsertIndent));
    }

    let command = keys::to_key_press(&key_press.key, key_press.modifiers)
        .and_then(|press| keymap.resolve(&press));
    match command {
        Some(command) if !keys::handled_by_widget(command) => None,
        _ => text_editor::Binding::from_key_press(key_press),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_editor::{Binding, KeyPress, Status};

    fn press(key: keyboard::Key, modifiers: keyboard::Modifiers, text: Option<&str>) -> KeyPress {
        KeyPress {
            key,
            modifiers,
            text: text.map(Into::into),
            status: Status::Focused,
        }
    }

    fn ctrl(c: &str) -> KeyPress {
        press(keyboard::Key::Character(c.into()), keyboard::Modifiers::COMMAND, None)
    }

    fn bind(key_press: KeyPress) -> Option<Binding<Message>> {
        editor_binding(&Keymap::default(), key_press)
    }

    #[test]
    fn test_tab_inserts_indent() {
        let tab = press(
            keyboard::Key::Named(keyboard::key::Named::Tab),
            keyboard::Modifiers::empty(),
            Some("\t"),
        );
        assert!(matches!(bind(tab), Some(Binding::Custom(Message::InsertIndent))));
    }

    #[test]
    fn test_save_shortcut_is_left_to_the_app() {
        // A `None` binding leaves the event uncaptured, so it reaches the
        // key subscription and saves exactly once.
        assert!(bind(ctrl("s")).is_none());
        assert!(bind(ctrl("n")).is_none());
    }

    #[test]
    fn test_clipboard_shortcuts_stay_native() {
        assert!(matches!(bind(ctrl("c")), Some(Binding::Copy)));
        assert!(matches!(bind(ctrl("x")), Some(Binding::Cut)));
        assert!(matches!(bind(ctrl("v")), Some(Binding::Paste)));
        assert!(matches!(bind(ctrl("a")), Some(Binding::SelectAll)));
    }

    #[test]
    fn test_plain_letter_is_inserted() {
        let s = press(
            keyboard::Key::Character("s".into()),
            keyboard::Modifiers::empty(),
            Some("s"),
        );
        assert!(matches!(bind(s), Some(Binding::Insert('s'))));
    }

    #[test]
    fn test_unfocused_editor_binds_nothing() {
        let mut tab = press(
            keyboard::Key::Named(keyboard::key::Named::Tab),
            keyboard::Modifiers::empty(),
            None,
        );
        tab.status = Status::Active;
        assert!(bind(tab).is_none());
        assert!(bind(KeyPress { status: Status::Active, ..ctrl("s") }).is_none());
    }
}
