//! Menu bar state and the menu catalogue.
//!
//! Each dropdown button is either open or closed. A click toggles it, the
//! pointer leaving the button and its list closes it, and activating an
//! option closes it. At most one menu is open at a time.

use crate::command::Command;
use crate::keymap::Keymap;

/// The top-level menus, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuKind {
    File,
    Edit,
    Format,
    Help,
}

impl MenuKind {
    /// Menus in nav-bar order.
    pub const ALL: [MenuKind; 4] = [MenuKind::File, MenuKind::Edit, MenuKind::Format, MenuKind::Help];

    pub fn label(&self) -> &'static str {
        match self {
            MenuKind::File => "File",
            MenuKind::Edit => "Edit",
            MenuKind::Format => "Format",
            MenuKind::Help => "Help",
        }
    }

    /// Position of the menu in the nav bar.
    pub fn index(&self) -> usize {
        match self {
            MenuKind::File => 0,
            MenuKind::Edit => 1,
            MenuKind::Format => 2,
            MenuKind::Help => 3,
        }
    }
}

/// Open/closed state of the nav-bar dropdowns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuBar {
    open: Option<MenuKind>,
}

impl MenuBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// A click on a menu button.
    pub fn toggle(&mut self, kind: MenuKind) {
        self.open = if self.open == Some(kind) { None } else { Some(kind) };
        tracing::debug!("Menu {:?} -> {:?}", kind, self.open);
    }

    /// The pointer left a menu's button and dropdown.
    ///
    /// Only closes `kind`; a stale leave event from another menu is ignored.
    pub fn pointer_left(&mut self, kind: MenuKind) {
        if self.open == Some(kind) {
            self.open = None;
            tracing::debug!("Menu {:?} closed on pointer leave", kind);
        }
    }

    /// Closes whichever menu is open.
    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, kind: MenuKind) -> bool {
        self.open == Some(kind)
    }

    pub fn open_menu(&self) -> Option<MenuKind> {
        self.open
    }
}

/// A clickable dropdown option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub command: Command,
    pub label: &'static str,
    /// Shortcut text such as `Ctrl+S`, taken from the keymap.
    pub shortcut: Option<String>,
    /// Toggle state for checkable entries.
    pub checked: Option<bool>,
}

/// One row of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Entry(MenuEntry),
    Separator,
}

/// State the catalogue needs to render checkable entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuContext {
    pub soft_tabs: bool,
}

/// Returns the rows of a dropdown.
pub fn menu_items(kind: MenuKind, keymap: &Keymap, ctx: MenuContext) -> Vec<MenuItem> {
    use Command::*;

    let layout: &[Option<Command>] = match kind {
        MenuKind::File => &[Some(NewFile), Some(OpenFile), None, Some(Save), Some(SaveAs)],
        MenuKind::Edit => &[Some(Cut), Some(Copy), Some(Paste), None, Some(SelectAll)],
        MenuKind::Format => &[
            Some(TrimTrailingWhitespace),
            Some(ToggleSoftTabs),
            None,
            Some(ZoomIn),
            Some(ZoomOut),
            Some(ZoomReset),
        ],
        MenuKind::Help => &[Some(ShowShortcuts), Some(ShowAbout)],
    };

    layout
        .iter()
        .map(|slot| match slot {
            Some(command) => MenuItem::Entry(MenuEntry {
                command: *command,
                label: command.display_name(),
                shortcut: keymap.shortcut_for(*command).map(|k| k.to_string()),
                checked: (*command == ToggleSoftTabs).then_some(ctx.soft_tabs),
            }),
            None => MenuItem::Separator,
        })
        .collect()
}
