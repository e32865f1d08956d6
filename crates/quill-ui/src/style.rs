//! Layout metrics shared by the views.
//!
//! The dropdown overlay is positioned from these numbers rather than from the
//! rendered nav bar, so the nav buttons use fixed sizes.

use quill_buffer::gutter;

/// Metrics for the nav bar and its dropdowns.
#[derive(Debug, Clone, Copy)]
pub struct NavStyle {
    pub padding_x: f32,
    pub padding_y: f32,
    pub button_width: f32,
    pub button_height: f32,
    pub spacing: f32,
    pub dropdown_width: f32,
    pub file_name_width: f32,
}

impl Default for NavStyle {
    fn default() -> Self {
        Self {
            padding_x: 8.0,
            padding_y: 4.0,
            button_width: 64.0,
            button_height: 26.0,
            spacing: 2.0,
            dropdown_width: 260.0,
            file_name_width: 220.0,
        }
    }
}

impl NavStyle {
    /// Horizontal offset of the n-th menu button from the window's left edge.
    pub fn button_offset(&self, index: usize) -> f32 {
        self.padding_x + index as f32 * (self.button_width + self.spacing)
    }
}

/// Metrics for the code input.
#[derive(Debug, Clone, Copy)]
pub struct EditorStyle {
    /// Space around the text, identical in the gutter and the editor so
    /// their lines stay level
    pub padding: f32,
    pub gutter_padding_x: f32,
    /// Approximate advance of one monospace glyph, as a fraction of the font size
    pub char_width_factor: f32,
}

impl Default for EditorStyle {
    fn default() -> Self {
        Self {
            padding: 16.0,
            gutter_padding_x: 10.0,
            char_width_factor: 0.6,
        }
    }
}

impl EditorStyle {
    /// Pixel width of the gutter column for `line_count` labels.
    pub fn gutter_width(&self, line_count: usize, suffix: &str, font_size: f32) -> f32 {
        let chars = gutter::gutter_width(line_count, suffix) as f32;
        (chars * font_size * self.char_width_factor).ceil() + 2.0 * self.gutter_padding_x
    }
}
