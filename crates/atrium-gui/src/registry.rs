//! Module registry.
//!
//! The static, ordered table of navigable modules. Order is significant: it
//! defines both sidebar order and tab-bar priority. The shell treats this
//! table as read-only; tenants select a subset via `enabled_modules`.
//!
//! Icon names are resolved against the Lucide table in
//! [`crate::component::icon`].

use atrium_core::nav::ModuleEntry;

/// All modules, in display order.
pub fn modules() -> Vec<ModuleEntry> {
    vec![
        ModuleEntry::new("map", "/map", "Map", "map"),
        ModuleEntry::new("crops", "/crops", "Crops", "sprout"),
        ModuleEntry::new("inventory", "/inventory", "Inventory", "archive"),
        ModuleEntry::new("products", "/products", "Products", "shopping-cart"),
        ModuleEntry::new("sales", "/sales", "Sales", "credit-card"),
        ModuleEntry::new("costs", "/costs", "Costs", "calculator"),
        ModuleEntry::new("locations", "/locations", "Locations", "map-pin"),
        ModuleEntry::new("packaging", "/packaging", "Packaging", "package"),
        ModuleEntry::new("pricing", "/pricing", "Pricing", "tag"),
        ModuleEntry::new("users", "/users", "Users", "users"),
        ModuleEntry::new("analytics", "/analytics", "Analytics", "trending-up"),
        ModuleEntry::new("photos", "/photos", "Photos", "image").addon(),
        ModuleEntry::new("assistant", "/assistant", "Assistant", "message-square").addon(),
    ]
}

/// Route path of the profile page linked from the sidebar footer.
pub const PROFILE_PATH: &str = "/profile";
