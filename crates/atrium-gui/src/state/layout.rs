//! Layout mode derived from the window width.

/// Window width below which the compact frame is used, in logical pixels.
pub const COMPACT_BREAKPOINT: f32 = 768.0;

/// Which navigation frame the shell renders.
///
/// Wide windows get the hover-expanding sidebar; compact windows get the
/// header with menu button, the slide-over drawer, and the bottom tab bar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Sidebar navigation.
    #[default]
    Wide,
    /// Header + drawer + tab bar navigation.
    Compact,
}

impl LayoutMode {
    /// Derive the layout mode from the current window width.
    pub fn from_width(width: f32) -> Self {
        if width < COMPACT_BREAKPOINT {
            Self::Compact
        } else {
            Self::Wide
        }
    }

    /// Whether the compact frame is active.
    pub fn is_compact(&self) -> bool {
        matches!(self, Self::Compact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_boundary() {
        assert_eq!(LayoutMode::from_width(767.9), LayoutMode::Compact);
        assert_eq!(LayoutMode::from_width(768.0), LayoutMode::Wide);
        assert_eq!(LayoutMode::from_width(1280.0), LayoutMode::Wide);
        assert_eq!(LayoutMode::from_width(400.0), LayoutMode::Compact);
    }
}
