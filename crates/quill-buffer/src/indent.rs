/// What a Tab keypress inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// A run of spaces.
    Spaces(usize),
    /// A literal tab character.
    Tab,
}

impl Indent {
    /// Builds the indent from the editor's tab settings.
    ///
    /// A width of zero falls back to a single space so Tab is never a no-op.
    pub fn from_settings(use_spaces: bool, tab_size: usize) -> Self {
        if use_spaces {
            Indent::Spaces(tab_size.max(1))
        } else {
            Indent::Tab
        }
    }

    /// Returns the text inserted for this indent.
    pub fn as_string(&self) -> String {
        match self {
            Indent::Spaces(n) => " ".repeat(*n),
            Indent::Tab => "\t".to_string(),
        }
    }
}

impl std::fmt::Display for Indent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Indent::Spaces(n) => write!(f, "Spaces: {}", n),
            Indent::Tab => write!(f, "Tabs"),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(2)
    }
}
