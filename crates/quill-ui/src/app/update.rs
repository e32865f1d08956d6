use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::widget::text_editor::{self, Action, Edit};
use iced::{keyboard, Task};
use std::path::Path;
use std::sync::Arc;

use quill_buffer::Indent;
use quill_core::config::UiConfig;
use quill_core::{Command, Document, SaveTarget, ScrollOffset};

use super::view::{editor_scroll_id, gutter_scroll_id};
use super::{file_ops, App, Dialog, Message};
use crate::keys;

/// Font size change per zoom step, in pixels.
const ZOOM_STEP: f32 = 2.0;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Command(command) => return self.run_command(command),

            Message::ToggleMenu(kind) => self.menus.toggle(kind),
            Message::MenuPointerLeft(kind) => self.menus.pointer_left(kind),
            Message::CloseMenus => self.menus.close(),

            Message::FileNameChanged(name) => self.document.set_file_name(name),

            Message::EditorAction(action) => {
                let is_edit = action.is_edit();
                self.content.perform(action);
                if is_edit {
                    self.sync_document();
                }
            }

            Message::InsertIndent => {
                let indent = self.indent.as_string();
                self.content
                    .perform(Action::Edit(Edit::Paste(Arc::new(indent))));
                self.sync_document();
            }

            Message::EditorScrolled(offset) => {
                if let Some(gutter) = self.gutter_offset_for(offset) {
                    return scrollable::scroll_to(gutter_scroll_id(), gutter);
                }
            }

            Message::CloseDialog => self.dialog = None,

            Message::KeyPressed(key, modifiers) => {
                return self.handle_key_pressed(key, modifiers);
            }
            Message::KeyCaptured(key, modifiers) => {
                return self.handle_key_captured(key, modifiers);
            }

            Message::FileOpened(result) => match result {
                Ok(file) => {
                    let name = file.file_name.clone();
                    self.document =
                        Document::from_file(file, self.config.files.default_file_name.clone());
                    self.content = text_editor::Content::with_text(&self.document.text());
                    self.status_message = format!("Opened: {}", name);
                    return self.reset_scroll();
                }
                Err(e) => self.report_error(e),
            },

            Message::FileSaved(result) => match result {
                Ok((path, text)) => {
                    self.document.mark_saved(path, &text);
                    self.status_message = format!("Saved: {}", self.document.file_name());
                }
                Err(e) => self.report_error(e),
            },
        }
        Task::none()
    }

    /// Runs a command from a menu, a shortcut or a dialog.
    ///
    /// Any open menu closes first.
    pub fn run_command(&mut self, command: Command) -> Task<Message> {
        self.menus.close();
        tracing::debug!("Command: {}", command.id());

        match command {
            Command::NewFile => {
                self.document = Document::new(self.config.files.default_file_name.clone());
                self.content = text_editor::Content::new();
                self.status_message = "New file created".to_string();
                return self.reset_scroll();
            }
            Command::OpenFile => {
                return file_ops::open_with_dialog(self.config.files.max_file_size_bytes());
            }
            Command::Save => return self.save(),
            Command::SaveAs => return self.save_as(),

            Command::Cut => self.cut(),
            Command::Copy => self.copy(),
            Command::Paste => self.paste(),
            Command::SelectAll => {
                self.content.perform(Action::SelectAll);
                self.status_message = "Selected all".to_string();
            }

            Command::TrimTrailingWhitespace => {
                let changed = self.document.trim_trailing_whitespace();
                if changed > 0 {
                    self.content = text_editor::Content::with_text(&self.document.text());
                }
                self.status_message = format!("Trimmed {} line(s)", changed);
            }
            Command::ToggleSoftTabs => {
                self.soft_tabs = !self.soft_tabs;
                self.indent = Indent::from_settings(self.soft_tabs, self.config.editor.tab_size);
                self.status_message = format!("Indent: {}", self.indent);
            }

            Command::ZoomIn => self.set_font_size(self.font_size + ZOOM_STEP),
            Command::ZoomOut => self.set_font_size(self.font_size - ZOOM_STEP),
            Command::ZoomReset => self.set_font_size(self.config.ui.font_size),

            Command::ShowShortcuts => self.dialog = Some(Dialog::Shortcuts),
            Command::ShowAbout => self.dialog = Some(Dialog::About),
        }
        Task::none()
    }

    /// Key presses no widget consumed.
    pub fn handle_key_pressed(&mut self, key: keyboard::Key, modifiers: keyboard::Modifiers) -> Task<Message> {
        if is_escape(&key) {
            self.dismiss_overlays();
            return Task::none();
        }

        match self.shortcut(&key, modifiers) {
            Some(command) => self.run_command(command),
            None => Task::none(),
        }
    }

    /// Key presses a focused widget already consumed.
    ///
    /// Clipboard and select-all shortcuts are skipped because the widget
    /// has already acted on them.
    pub fn handle_key_captured(&mut self, key: keyboard::Key, modifiers: keyboard::Modifiers) -> Task<Message> {
        if is_escape(&key) {
            self.dismiss_overlays();
            return Task::none();
        }

        match self.shortcut(&key, modifiers) {
            Some(command) if !keys::handled_by_widget(command) => self.run_command(command),
            _ => Task::none(),
        }
    }

    /// The command bound to a key press. Nothing is bound while a dialog is up.
    fn shortcut(&self, key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Command> {
        if self.dialog.is_some() {
            return None;
        }
        keys::to_key_press(key, modifiers).and_then(|press| self.keymap.resolve(&press))
    }

    fn dismiss_overlays(&mut self) {
        self.menus.close();
        self.dialog = None;
    }

    /// Where the gutter should scroll after the editor moved to `offset`.
    fn gutter_offset_for(&mut self, offset: AbsoluteOffset) -> Option<AbsoluteOffset> {
        self.scroll
            .on_content_scrolled(ScrollOffset::new(offset.x, offset.y))
            .map(|gutter| AbsoluteOffset {
                x: gutter.x,
                y: gutter.y,
            })
    }

    fn save(&mut self) -> Task<Message> {
        let text = self.document.text().into_owned();
        match self.document.save_target() {
            SaveTarget::Path(path) => {
                self.status_message = format!("Saving {}...", path.display());
                file_ops::save_path(path, text)
            }
            SaveTarget::Prompt { suggested_name } => {
                file_ops::save_with_dialog(suggested_name, None, text)
            }
        }
    }

    fn save_as(&mut self) -> Task<Message> {
        let directory = self
            .document
            .path()
            .and_then(Path::parent)
            .map(Path::to_path_buf);
        file_ops::save_with_dialog(
            self.document.save_name(),
            directory,
            self.document.text().into_owned(),
        )
    }

    fn cut(&mut self) {
        match self.content.selection() {
            Some(selected) => {
                if set_clipboard(selected) {
                    self.content.perform(Action::Edit(Edit::Delete));
                    self.sync_document();
                    self.status_message = "Cut".to_string();
                } else {
                    self.status_message = "Clipboard unavailable".to_string();
                }
            }
            None => self.status_message = "Nothing selected".to_string(),
        }
    }

    fn copy(&mut self) {
        match self.content.selection() {
            Some(selected) => {
                self.status_message = if set_clipboard(selected) {
                    "Copied".to_string()
                } else {
                    "Clipboard unavailable".to_string()
                };
            }
            None => self.status_message = "Nothing selected".to_string(),
        }
    }

    fn paste(&mut self) {
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
            Ok(clip_text) => {
                self.content
                    .perform(Action::Edit(Edit::Paste(Arc::new(clip_text))));
                self.sync_document();
                self.status_message = "Pasted".to_string();
            }
            Err(e) => {
                tracing::warn!("Clipboard read failed: {}", e);
                self.status_message = "Clipboard unavailable".to_string();
            }
        }
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size.clamp(UiConfig::MIN_FONT_SIZE, UiConfig::MAX_FONT_SIZE);
        self.status_message = format!("Font size: {}px", self.font_size);
    }

    /// Copies the widget's text into the document after an edit.
    fn sync_document(&mut self) {
        let text = Document::sync_from_editor(self.content.text(), self.content.line_count());
        self.document.set_text(&text);
    }

    /// Puts both panes back at the top for a fresh document.
    fn reset_scroll(&mut self) -> Task<Message> {
        self.scroll.reset();
        let top = AbsoluteOffset { x: 0.0, y: 0.0 };
        Task::batch([
            scrollable::scroll_to(editor_scroll_id(), top),
            scrollable::scroll_to(gutter_scroll_id(), top),
        ])
    }

    fn report_error(&mut self, error: String) {
        if error != file_ops::CANCELLED {
            tracing::warn!("{}", error);
            self.status_message = format!("Error: {}", error);
        }
    }
}

fn is_escape(key: &keyboard::Key) -> bool {
    matches!(key, keyboard::Key::Named(keyboard::key::Named::Escape))
}

fn set_clipboard(text: String) -> bool {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Clipboard write failed: {}", e);
            false
        }
    }
}
