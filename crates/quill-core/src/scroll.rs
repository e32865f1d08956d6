//! Scroll mirroring between the editor pane and the line-number gutter.

/// Absolute scroll position in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f32,
    pub y: f32,
}

impl ScrollOffset {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Tracks the content pane's scroll position and tells the gutter where to go.
///
/// The gutter mirrors only the vertical offset; it never scrolls sideways.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollSync {
    content_y: f32,
}

impl ScrollSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a content scroll.
    ///
    /// Returns the gutter's new offset, or `None` when the vertical position
    /// didn't change (a purely horizontal scroll).
    pub fn on_content_scrolled(&mut self, offset: ScrollOffset) -> Option<ScrollOffset> {
        if offset.y == self.content_y {
            return None;
        }
        self.content_y = offset.y;
        Some(ScrollOffset::new(0.0, offset.y))
    }

    /// Back to the top, for a freshly loaded document.
    pub fn reset(&mut self) {
        self.content_y = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_scroll_is_mirrored() {
        let mut sync = ScrollSync::new();
        let gutter = sync.on_content_scrolled(ScrollOffset::new(0.0, 120.0));
        assert_eq!(gutter, Some(ScrollOffset::new(0.0, 120.0)));
        assert_eq!(sync.on_content_scrolled(ScrollOffset::new(0.0, 120.0)), None);
    }

    #[test]
    fn test_horizontal_scroll_leaves_gutter_alone() {
        let mut sync = ScrollSync::new();
        sync.on_content_scrolled(ScrollOffset::new(0.0, 40.0));
        assert_eq!(sync.on_content_scrolled(ScrollOffset::new(35.0, 40.0)), None);
    }

    #[test]
    fn test_mirrored_offset_drops_horizontal_component() {
        let mut sync = ScrollSync::new();
        let gutter = sync.on_content_scrolled(ScrollOffset::new(80.0, 16.0)).unwrap();
        assert_eq!(gutter.x, 0.0);
        assert_eq!(gutter.y, 16.0);
    }

    #[test]
    fn test_reset() {
        let mut sync = ScrollSync::new();
        sync.on_content_scrolled(ScrollOffset::new(3.0, 300.0));
        sync.reset();
        // Scrolling back to where it was is a change again after reset
        assert!(sync.on_content_scrolled(ScrollOffset::new(0.0, 300.0)).is_some());
        assert!(sync.on_content_scrolled(ScrollOffset::new(0.0, 0.0)).is_some());
    }
}
