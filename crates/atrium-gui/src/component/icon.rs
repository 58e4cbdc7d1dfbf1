//! Icon name table.
//!
//! The module registry carries icon *names* so that `atrium-core` stays free
//! of widget types; this table resolves those names to Lucide glyphs. See
//! <https://lucide.dev/icons/> for the catalog.

use iced::widget::Text;
use iced_fonts::lucide;

/// Resolve a registry icon name, if it is known.
pub fn lookup(name: &str) -> Option<Text<'static>> {
    let glyph = match name {
        "map" => lucide::map(),
        "sprout" => lucide::sprout(),
        "archive" => lucide::archive(),
        "shopping-cart" => lucide::shopping_cart(),
        "credit-card" => lucide::credit_card(),
        "calculator" => lucide::calculator(),
        "map-pin" => lucide::map_pin(),
        "package" => lucide::package(),
        "tag" => lucide::tag(),
        "users" => lucide::users(),
        "trending-up" => lucide::trending_up(),
        "image" => lucide::image(),
        "message-square" => lucide::message_square(),
        "user" => lucide::user(),
        _ => return None,
    };
    Some(glyph)
}

/// Resolve a registry icon name, falling back to a neutral glyph for names
/// the table does not know.
pub fn module_icon(name: &str) -> Text<'static> {
    lookup(name).unwrap_or_else(lucide::circle)
}

// =============================================================================
// CHROME ICONS
// =============================================================================

/// Hamburger menu (drawer trigger).
pub fn icon_menu() -> Text<'static> {
    lucide::menu()
}

/// Close/dismiss.
pub fn icon_close() -> Text<'static> {
    lucide::x()
}

/// "More" overflow trigger.
pub fn icon_more() -> Text<'static> {
    lucide::ellipsis()
}

/// Notification bell.
pub fn icon_bell() -> Text<'static> {
    lucide::bell()
}

/// Light mode indicator.
pub fn icon_sun() -> Text<'static> {
    lucide::sun()
}

/// Dark mode indicator.
pub fn icon_moon() -> Text<'static> {
    lucide::moon()
}

/// Sign out.
pub fn icon_logout() -> Text<'static> {
    lucide::log_out()
}

/// Profile entry.
pub fn icon_user() -> Text<'static> {
    lucide::user()
}

/// Active tenant marker in the tenant list.
pub fn icon_check() -> Text<'static> {
    lucide::check()
}
