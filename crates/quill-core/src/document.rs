//! The shared editor state: text content plus file name.
//!
//! Edits write into the `Document`; menus, shortcuts and the save path read
//! it when they need it.

use quill_buffer::{gutter, TextBuffer};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::file_io::{sanitize_file_name, LoadedFile};

/// Where a save should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    /// The document already lives in a directory; write straight there.
    Path(PathBuf),
    /// Never saved: ask the user, suggesting this name.
    Prompt { suggested_name: String },
}

/// A document being edited.
#[derive(Debug, Clone)]
pub struct Document {
    /// The text content
    buffer: TextBuffer,

    /// Name in the filename field
    file_name: String,

    /// Where it was last opened from or saved to
    path: Option<PathBuf>,

    /// Unsaved changes
    modified: bool,

    /// Name used when the field is cleared
    default_name: String,
}

impl Document {
    /// Creates a new empty document.
    pub fn new(default_name: impl Into<String>) -> Self {
        let default_name = default_name.into();
        Self {
            buffer: TextBuffer::new(),
            file_name: default_name.clone(),
            path: None,
            modified: false,
            default_name,
        }
    }

    /// Creates a document from a file read off disk.
    pub fn from_file(file: LoadedFile, default_name: impl Into<String>) -> Self {
        Self {
            buffer: TextBuffer::from(file.text),
            file_name: file.file_name,
            path: Some(file.path),
            modified: false,
            default_name: default_name.into(),
        }
    }

    // ==================== Getters ====================

    pub fn text(&self) -> Cow<'_, str> {
        self.buffer.text()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Text for the line-number gutter.
    pub fn gutter_text(&self, suffix: &str) -> String {
        gutter::line_labels(self.line_count(), suffix)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    // ==================== Edits ====================

    /// Replaces the text after an edit in the editor pane.
    ///
    /// Returns true if the content actually changed.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.buffer.eq_str(text) {
            return false;
        }
        self.buffer.set_text(text);
        self.modified = true;
        true
    }

    /// Format → Trim Trailing Whitespace. Returns the number of lines changed.
    pub fn trim_trailing_whitespace(&mut self) -> usize {
        let changed = self.buffer.trim_trailing_whitespace();
        if changed > 0 {
            self.modified = true;
        }
        changed
    }

    /// The filename field changed.
    pub fn set_file_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name != self.file_name {
            self.file_name = name;
            self.modified = true;
        }
    }

    /// Records a successful save of `saved_text` to `path`.
    ///
    /// Edits made while the save was in flight keep the document modified.
    pub fn mark_saved(&mut self, path: PathBuf, saved_text: &str) {
        if let Some(name) = path.file_name() {
            self.file_name = name.to_string_lossy().into_owned();
        }
        self.path = Some(path);
        self.modified = !self.buffer.eq_str(saved_text);
    }

    // ==================== Saving ====================

    /// Name to save under: the filename field, cleaned up.
    pub fn save_name(&self) -> String {
        sanitize_file_name(&self.file_name, &self.default_name)
    }

    /// Decides whether Save can write directly or must ask for a location.
    ///
    /// A renamed document is written next to its previous file.
    pub fn save_target(&self) -> SaveTarget {
        match self.path.as_deref().and_then(Path::parent) {
            Some(dir) => SaveTarget::Path(dir.join(self.save_name())),
            None => SaveTarget::Prompt {
                suggested_name: self.save_name(),
            },
        }
    }

    /// Normalizes text read back from the GUI editor widget.
    ///
    /// The widget may report one more trailing newline than it has lines;
    /// that synthetic newline is dropped so line counts stay in agreement.
    pub fn sync_from_editor(mut raw: String, editor_line_count: usize) -> String {
        let lines = raw.split('\n').count();
        if lines > editor_line_count.max(1) && raw.ends_with('\n') {
            raw.pop();
        }
        raw
    }
}
