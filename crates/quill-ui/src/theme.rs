//! Colors for the editor window.
//!
//! Everything is drawn on top of iced's built-in dark theme; widgets pick
//! their colors from the palette below instead of the theme's extended
//! palette so the nav bar, gutter and editor stay consistent.

/// Dark palette.
pub mod colors {
    use iced::Color;

    pub const BG_DARK: Color = Color::from_rgb(0.11, 0.11, 0.13);
    pub const BG_MEDIUM: Color = Color::from_rgb(0.14, 0.14, 0.16);
    pub const BG_LIGHT: Color = Color::from_rgb(0.18, 0.18, 0.20);
    pub const BG_HOVER: Color = Color::from_rgb(0.22, 0.22, 0.25);
    pub const BG_ACTIVE: Color = Color::from_rgb(0.25, 0.25, 0.28);

    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.93, 0.93, 0.93);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.65, 0.65, 0.68);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.45, 0.45, 0.48);

    pub const ACCENT: Color = Color::from_rgb(0.36, 0.54, 0.90);
    pub const SELECTION: Color = Color::from_rgba(0.25, 0.46, 0.85, 0.55);

    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);

    /// Dimmed backdrop behind modal dialogs.
    pub const BACKDROP: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);
}

/// The iced theme the window runs with.
pub fn app_theme() -> iced::Theme {
    iced::Theme::Dark
}
