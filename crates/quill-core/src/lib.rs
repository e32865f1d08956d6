//! # Quill Core
//!
//! Editor state and the logic behind the editor shell's controls.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                      Document                         │
//! │        text (TextBuffer) + file name + path           │
//! └──────────────▲─────────────────────────┬─────────────┘
//!                │ keystrokes               │ read on demand
//!   ┌────────────┴──────┐        ┌──────────▼──────────┐
//!   │   Code input      │        │  Menus / shortcuts  │
//!   │ (gutter + scroll) │        │  save / open        │
//!   └───────────────────┘        └─────────────────────┘
//! ```
//!
//! Data flows one way: edits update the `Document`, while menus, the
//! keymap and `file_io` only read it when a command runs.

pub mod command;
pub mod config;
pub mod document;
pub mod file_io;
pub mod keymap;
pub mod menu;
pub mod scroll;

pub use command::Command;
pub use config::Config;
pub use document::{Document, SaveTarget};
pub use file_io::LoadedFile;
pub use keymap::{KeyBinding, KeyPress, Keymap};
pub use menu::{MenuBar, MenuKind};
pub use scroll::{ScrollOffset, ScrollSync};

use std::path::PathBuf;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is not a UTF-8 text file")]
    NotText(PathBuf),

    #[error("{path} is {size} bytes, larger than the {limit} byte limit")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
}

impl CoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CoreError::Io {
            path: path.into(),
            source,
        }
    }
}
