use iced::keyboard;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::text_editor;
use std::path::PathBuf;

use quill_core::{Command, LoadedFile, MenuKind};

#[derive(Debug, Clone)]
pub enum Message {
    /// A menu option, shortcut or dialog button
    Command(Command),

    // Nav bar
    ToggleMenu(MenuKind),
    MenuPointerLeft(MenuKind),
    CloseMenus,
    FileNameChanged(String),

    // Code input
    EditorAction(text_editor::Action),
    InsertIndent,
    EditorScrolled(AbsoluteOffset),

    // Dialogs
    CloseDialog,

    KeyPressed(keyboard::Key, keyboard::Modifiers),
    /// A key press a focused widget already consumed
    KeyCaptured(keyboard::Key, keyboard::Modifiers),

    // Async results
    FileOpened(Result<LoadedFile, String>),
    /// The path written and the exact text that went to disk
    FileSaved(Result<(PathBuf, String), String>),
}
