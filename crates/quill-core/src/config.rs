//! Editor configuration.
//!
//! Stored as TOML under the platform config directory. Every section is
//! `#[serde(default)]`, so a partial file only overrides what it names.

use quill_buffer::Indent;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main editor configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Editing behavior
    pub editor: EditorConfig,

    /// Appearance
    pub ui: UiConfig,

    /// Save and open behavior
    pub files: FileConfig,

    /// Keyboard shortcuts
    pub keyboard: KeyboardConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default config: {}", e);
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("quill").join("config.toml"))
    }

    /// What the Tab key inserts under the current settings.
    pub fn indent(&self) -> Indent {
        Indent::from_settings(self.editor.use_spaces, self.editor.tab_size)
    }
}

/// Editor behavior configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Spaces inserted per Tab when `use_spaces` is on
    pub tab_size: usize,

    /// Insert spaces instead of a tab character
    pub use_spaces: bool,

    /// Text after each number in the line gutter
    pub line_number_suffix: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: 2,
            use_spaces: true,
            line_number_suffix: quill_buffer::gutter::DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// UI appearance configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Font size in points
    pub font_size: f32,

    /// Initial window width
    pub window_width: f32,

    /// Initial window height
    pub window_height: f32,

    /// Show the status bar under the editor
    pub show_status_bar: bool,
}

impl UiConfig {
    pub const MIN_FONT_SIZE: f32 = 8.0;
    pub const MAX_FONT_SIZE: f32 = 40.0;
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            window_width: 1024.0,
            window_height: 720.0,
            show_status_bar: true,
        }
    }
}

/// File handling configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Name shown in the filename field for new documents
    pub default_file_name: String,

    /// Max file size to open (MB)
    pub max_file_size_mb: u64,
}

impl FileConfig {
    /// Max file size to open, in bytes.
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            default_file_name: "untitled.txt".to_string(),
            max_file_size_mb: 16,
        }
    }
}

/// Keyboard configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Custom key bindings, e.g. `"ctrl+shift+n" = "file.new"`
    pub bindings: HashMap<String, String>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.editor.tab_size, 2);
        assert!(config.editor.use_spaces);
        assert_eq!(config.editor.line_number_suffix, ".");
        assert_eq!(config.ui.font_size, 14.0);
        assert_eq!(config.files.default_file_name, "untitled.txt");
        assert_eq!(config.indent(), Indent::Spaces(2));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let parsed: Config = toml::from_str(
            r#"
            [editor]
            use_spaces = false

            [keyboard.bindings]
            "ctrl+shift+n" = "file.new"
            "#,
        )
        .unwrap();
        assert!(!parsed.editor.use_spaces);
        assert_eq!(parsed.editor.tab_size, 2);
        assert_eq!(parsed.indent(), Indent::Tab);
        assert_eq!(parsed.ui.font_size, 14.0);
        assert_eq!(
            parsed.keyboard.bindings.get("ctrl+shift+n").map(String::as_str),
            Some("file.new")
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nfont_size = 18.0\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.ui.font_size, 18.0);
        assert_eq!(loaded.files.default_file_name, "untitled.txt");
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[editor\ntab_size = ").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_max_file_size_bytes() {
        let files = FileConfig {
            max_file_size_mb: 2,
            ..Default::default()
        };
        assert_eq!(files.max_file_size_bytes(), 2 * 1024 * 1024);
    }
}
