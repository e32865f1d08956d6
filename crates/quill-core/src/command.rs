//! Editor commands.
//!
//! Menu entries and key bindings both resolve to a `Command`; the UI runs
//! it. Each command has a stable id used in the config file.

/// Built-in editor commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // File
    NewFile,
    OpenFile,
    Save,
    SaveAs,

    // Edit
    Cut,
    Copy,
    Paste,
    SelectAll,

    // Format
    TrimTrailingWhitespace,
    ToggleSoftTabs,
    ZoomIn,
    ZoomOut,
    ZoomReset,

    // Help
    ShowShortcuts,
    ShowAbout,
}

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Command; 15] = [
        Command::NewFile,
        Command::OpenFile,
        Command::Save,
        Command::SaveAs,
        Command::Cut,
        Command::Copy,
        Command::Paste,
        Command::SelectAll,
        Command::TrimTrailingWhitespace,
        Command::ToggleSoftTabs,
        Command::ZoomIn,
        Command::ZoomOut,
        Command::ZoomReset,
        Command::ShowShortcuts,
        Command::ShowAbout,
    ];

    /// Returns the id used in `[keyboard.bindings]`.
    pub fn id(&self) -> &'static str {
        match self {
            Command::NewFile => "file.new",
            Command::OpenFile => "file.open",
            Command::Save => "file.save",
            Command::SaveAs => "file.save_as",
            Command::Cut => "edit.cut",
            Command::Copy => "edit.copy",
            Command::Paste => "edit.paste",
            Command::SelectAll => "edit.select_all",
            Command::TrimTrailingWhitespace => "format.trim_trailing_whitespace",
            Command::ToggleSoftTabs => "format.toggle_soft_tabs",
            Command::ZoomIn => "format.zoom_in",
            Command::ZoomOut => "format.zoom_out",
            Command::ZoomReset => "format.zoom_reset",
            Command::ShowShortcuts => "help.shortcuts",
            Command::ShowAbout => "help.about",
        }
    }

    /// Looks a command up by id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.id() == id)
    }

    /// Returns the command's display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Command::NewFile => "New",
            Command::OpenFile => "Open...",
            Command::Save => "Save",
            Command::SaveAs => "Save As...",
            Command::Cut => "Cut",
            Command::Copy => "Copy",
            Command::Paste => "Paste",
            Command::SelectAll => "Select All",
            Command::TrimTrailingWhitespace => "Trim Trailing Whitespace",
            Command::ToggleSoftTabs => "Indent With Spaces",
            Command::ZoomIn => "Increase Font Size",
            Command::ZoomOut => "Decrease Font Size",
            Command::ZoomReset => "Reset Font Size",
            Command::ShowShortcuts => "Keyboard Shortcuts",
            Command::ShowAbout => "About Quill",
        }
    }
}
