//! Navigation surface tests: overflow partitioning, active-entry
//! computation, and overlay dismissal.

use atrium_core::nav::{
    MAX_DIRECT_TABS, ModuleEntry, NavigationUiState, TabLayout, enabled_entries,
    first_enabled_path,
};
use atrium_core::route::is_active;
use atrium_core::tenant::{TenantConfig, TenantTheme};

fn registry() -> Vec<ModuleEntry> {
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

#[test]
fn thirteen_entries_split_into_four_direct_and_nine_overflowed() {
    let entries = registry();
    assert_eq!(entries.len(), 13);

    let layout = TabLayout::split(&entries);
    assert_eq!(layout.direct.len(), MAX_DIRECT_TABS);
    assert_eq!(layout.overflow.len(), 9);

    let direct_keys: Vec<&str> = layout.direct.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(direct_keys, ["map", "crops", "inventory", "products"]);
}

#[test]
fn more_trigger_is_active_when_an_overflowed_entry_matches() {
    let entries = registry();
    let layout = TabLayout::split(&entries);

    // "sales" is the first overflowed entry.
    assert!(layout.overflow_active("/sales"));
    assert!(layout.overflow_active("/sales/invoices/7"));
    // Direct entries do not light the trigger.
    assert!(!layout.overflow_active("/inventory"));
    assert!(!layout.overflow_active("/nowhere"));
}

#[test]
fn at_most_one_entry_is_active_per_path() {
    let entries = registry();
    for path in ["/map", "/inventory/items", "/sales", "/pricing/rules/3"] {
        let active: Vec<&ModuleEntry> =
            entries.iter().filter(|e| e.is_active(path)).collect();
        assert_eq!(active.len(), 1, "path {path} highlighted {active:?}");
    }
}

#[test]
fn active_state_follows_the_path_with_no_memory() {
    let entries = registry();
    let was_active = entries[0].is_active("/map");
    assert!(was_active);
    // Same entry, new path: recomputation yields the new answer, there is
    // no stored active flag to go stale.
    assert!(!entries[0].is_active("/crops"));
}

#[test]
fn selecting_a_destination_dismisses_the_hosting_overlay() {
    let mut nav = NavigationUiState::new();
    let mut current_path = "/map".to_string();
    assert!(is_active(&current_path, "/map"));

    nav.drawer.open();
    assert!(nav.drawer.is_open());

    // Selecting an entry navigates and dismisses in the same logical step.
    current_path = "/inventory".to_string();
    nav.dismiss_overlays();

    assert!(!nav.drawer.is_open());
    assert!(is_active(&current_path, "/inventory"));

    nav.overflow.open();
    current_path = "/sales".to_string();
    nav.dismiss_overlays();

    assert!(!nav.overflow.is_open());
    assert!(is_active(&current_path, "/sales"));
}

#[test]
fn tenant_restriction_shrinks_the_tab_bar_below_overflow() {
    let entries = registry();
    let tenant = TenantConfig::new("small", "Small Tenant", TenantTheme::default())
        .with_modules(["map", "inventory", "sales"]);

    let enabled = enabled_entries(&entries, &tenant);
    assert_eq!(enabled.len(), 3);

    let layout = TabLayout::split(&enabled);
    assert_eq!(layout.direct.len(), 3);
    assert!(!layout.has_overflow());

    assert_eq!(first_enabled_path(&entries, &tenant), "/map");
}
