//! Tests for the module registry and its tenant filtering.

use atrium_core::nav::{ModuleKind, TabLayout, enabled_entries, first_enabled_path};
use atrium_core::tenant::{TenantConfig, TenantTheme};

use atrium_gui::component::icon;
use atrium_gui::registry;

#[test]
fn test_registry_shape() {
    let modules = registry::modules();
    assert_eq!(modules.len(), 13);

    // Paths and keys are unique and carry no trailing separator.
    for (i, entry) in modules.iter().enumerate() {
        assert!(entry.path.starts_with('/'), "{} has no leading /", entry.key);
        assert!(!entry.path.ends_with('/'), "{} has trailing /", entry.key);
        for other in &modules[i + 1..] {
            assert_ne!(entry.key, other.key);
            assert_ne!(entry.path, other.path);
        }
    }
}

#[test]
fn test_registry_icons_are_known() {
    for entry in registry::modules() {
        assert!(
            icon::lookup(&entry.icon).is_some(),
            "no glyph for icon name {:?} (module {})",
            entry.icon,
            entry.key
        );
    }
}

#[test]
fn test_addon_modules_sort_last() {
    let modules = registry::modules();
    let first_addon = modules
        .iter()
        .position(|m| m.kind == ModuleKind::Addon)
        .expect("registry has add-on modules");
    assert!(
        modules[first_addon..]
            .iter()
            .all(|m| m.kind == ModuleKind::Addon)
    );
}

#[test]
fn test_full_registry_overflows_the_tab_bar() {
    let modules = registry::modules();
    let layout = TabLayout::split(&modules);
    assert_eq!(layout.direct.len(), 4);
    assert_eq!(layout.overflow.len(), 9);
}

#[test]
fn test_tenant_filtering_controls_landing_path() {
    let modules = registry::modules();

    let unrestricted = TenantConfig::new("all", "All", TenantTheme::default());
    assert_eq!(
        enabled_entries(&modules, &unrestricted).len(),
        modules.len()
    );
    assert_eq!(first_enabled_path(&modules, &unrestricted), "/map");

    let restricted = TenantConfig::new("retail", "Retail", TenantTheme::default())
        .with_modules(["products", "sales", "pricing"]);
    let enabled = enabled_entries(&modules, &restricted);
    let keys: Vec<&str> = enabled.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, ["products", "sales", "pricing"]);
    assert_eq!(first_enabled_path(&modules, &restricted), "/products");
}
