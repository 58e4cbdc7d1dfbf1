//! Spacing constants for consistent layout throughout the application.
//!
//! All values are in logical pixels (f32).

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, nav items
pub const BORDER_RADIUS_SM: f32 = 6.0;

/// Medium radius - cards, panels
pub const BORDER_RADIUS_MD: f32 = 8.0;

/// Large radius - sheets, menus
pub const BORDER_RADIUS_LG: f32 = 12.0;

/// Full/pill radius - badges, avatars
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

/// Icon size - small (tab bar, badges)
pub const ICON_SIZE_SM: f32 = 16.0;

/// Icon size - medium (sidebar, header)
pub const ICON_SIZE_MD: f32 = 20.0;

/// Header height (compact and wide frames)
pub const HEADER_HEIGHT: f32 = 64.0;

/// Drawer panel width
pub const DRAWER_WIDTH: f32 = 256.0;

/// Avatar diameter in the header
pub const AVATAR_SIZE: f32 = 36.0;

/// User menu panel width
pub const USER_MENU_WIDTH: f32 = 240.0;
