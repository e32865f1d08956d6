//! Tasks that talk to the filesystem and native file dialogs.
//!
//! Every task resolves to `Message::FileOpened` or `Message::FileSaved`. A
//! dismissed dialog resolves to an `Err` holding [`CANCELLED`], which the
//! update loop ignores.

use iced::Task;
use std::path::PathBuf;

use quill_core::file_io;

use super::Message;

/// Error text for a dialog the user closed without choosing a file.
pub const CANCELLED: &str = "Cancelled";

/// Opens `path` directly, without a dialog.
pub fn open_path(path: PathBuf, max_bytes: u64) -> Task<Message> {
    Task::perform(
        async move {
            file_io::open_from_disk(&path, max_bytes)
                .await
                .map_err(|e| e.to_string())
        },
        Message::FileOpened,
    )
}

/// Asks for a file to open, then reads it.
pub fn open_with_dialog(max_bytes: u64) -> Task<Message> {
    Task::perform(
        async move {
            let handle = rfd::AsyncFileDialog::new()
                .add_filter("All Files", &["*"])
                .add_filter("Text", &["txt", "md", "log"])
                .pick_file()
                .await;

            match handle {
                Some(file) => file_io::open_from_disk(file.path(), max_bytes)
                    .await
                    .map_err(|e| e.to_string()),
                None => Err(CANCELLED.to_string()),
            }
        },
        Message::FileOpened,
    )
}

/// Writes `text` to `path` without asking.
pub fn save_path(path: PathBuf, text: String) -> Task<Message> {
    Task::perform(
        async move {
            file_io::save_to_disk(&path, &text)
                .await
                .map(|written| (written, text))
                .map_err(|e| e.to_string())
        },
        Message::FileSaved,
    )
}

/// Asks where to save, prefilled with `suggested_name`, then writes `text`.
pub fn save_with_dialog(suggested_name: String, directory: Option<PathBuf>, text: String) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_file_name(&suggested_name);
            if let Some(dir) = &directory {
                dialog = dialog.set_directory(dir);
            }

            match dialog.save_file().await {
                Some(file) => {
                    let path = file.path().to_path_buf();
                    file_io::save_to_disk(&path, &text)
                        .await
                        .map(|written| (written, text))
                        .map_err(|e| e.to_string())
                }
                None => Err(CANCELLED.to_string()),
            }
        },
        Message::FileSaved,
    )
}
