//! Lifecycle tests for the presentation scope injector.

use atrium_core::scope::{
    self, PRESENTATION_VARS, ThemeInjector, VAR_APP_NAME, VAR_GLOW_SHADOW, VAR_LOGO_URL,
    VAR_PRIMARY, VAR_PRIMARY_RGB, VAR_SECONDARY_RGB,
};
use atrium_core::tenant::TenantTheme;

fn orchard_theme() -> TenantTheme {
    TenantTheme {
        primary: "#40a04a".to_string(),
        secondary: "#1b4f72".to_string(),
        accent: "#d4ac0d".to_string(),
        background: "#f6f8f6".to_string(),
        logo_url: Some("https://cdn.example.com/orchard.svg".to_string()),
        app_name: "Orchard Admin".to_string(),
    }
}

fn sorted(names: &[&str]) -> Vec<String> {
    let mut v: Vec<String> = names.iter().map(|n| (*n).to_string()).collect();
    v.sort();
    v
}

#[test]
fn activation_publishes_exactly_the_nine_variables() {
    let mut injector = ThemeInjector::new();
    injector.activate(&orchard_theme());

    assert_eq!(scope::active_names(), sorted(&PRESENTATION_VARS));
    assert_eq!(scope::var(VAR_PRIMARY).as_deref(), Some("#40a04a"));
    assert_eq!(scope::var(VAR_PRIMARY_RGB).as_deref(), Some("64, 160, 74"));
    assert_eq!(scope::var(VAR_SECONDARY_RGB).as_deref(), Some("27, 79, 114"));
    assert_eq!(
        scope::var(VAR_GLOW_SHADOW).as_deref(),
        Some("0 4px 14px rgba(64, 160, 74, 0.25)")
    );
    assert_eq!(
        scope::var(VAR_LOGO_URL).as_deref(),
        Some("url(https://cdn.example.com/orchard.svg)")
    );
    assert_eq!(scope::var(VAR_APP_NAME).as_deref(), Some("\"Orchard Admin\""));
}

#[test]
fn theme_change_leaves_no_stale_variables() {
    let mut injector = ThemeInjector::new();
    injector.activate(&orchard_theme());
    assert_eq!(
        scope::var(VAR_LOGO_URL).as_deref(),
        Some("url(https://cdn.example.com/orchard.svg)")
    );

    // The replacement theme has no logo; the variable must become `none`,
    // not keep the previous tenant's URL.
    let logoless = TenantTheme {
        logo_url: None,
        ..orchard_theme()
    };
    injector.activate(&logoless);

    assert_eq!(scope::active_names(), sorted(&PRESENTATION_VARS));
    assert_eq!(scope::var(VAR_LOGO_URL).as_deref(), Some("none"));
}

#[test]
fn deactivation_removes_all_variables() {
    let mut injector = ThemeInjector::new();
    injector.activate(&orchard_theme());
    assert!(injector.is_active());

    injector.deactivate();
    assert!(!injector.is_active());
    assert!(scope::active_names().is_empty());
    for name in PRESENTATION_VARS {
        assert!(scope::var(name).is_none(), "variable {name} survived");
    }
}

#[test]
fn reactivation_is_idempotent_for_identical_input() {
    let theme = orchard_theme();

    let mut injector = ThemeInjector::new();
    injector.activate(&theme);
    let first: Vec<Option<String>> = PRESENTATION_VARS.iter().map(|n| scope::var(n)).collect();

    injector.deactivate();
    injector.activate(&theme);
    let second: Vec<Option<String>> = PRESENTATION_VARS.iter().map(|n| scope::var(n)).collect();

    assert_eq!(first, second);
}

#[test]
fn dropping_the_injector_retracts_the_scope() {
    {
        let mut injector = ThemeInjector::new();
        injector.activate(&orchard_theme());
        assert!(!scope::active_names().is_empty());
    }
    assert!(scope::active_names().is_empty());
}

#[test]
fn malformed_color_tokens_degrade_to_the_fallback_triplet() {
    let broken = TenantTheme {
        primary: "not-a-color".to_string(),
        secondary: "#fff".to_string(),
        ..orchard_theme()
    };

    let mut injector = ThemeInjector::new();
    injector.activate(&broken);

    assert_eq!(scope::var(VAR_PRIMARY_RGB).as_deref(), Some("27, 79, 114"));
    assert_eq!(scope::var(VAR_SECONDARY_RGB).as_deref(), Some("27, 79, 114"));
    assert_eq!(
        scope::var(VAR_GLOW_SHADOW).as_deref(),
        Some("0 4px 14px rgba(27, 79, 114, 0.25)")
    );
    // The raw token is published untouched; only derivation falls back.
    assert_eq!(scope::var(VAR_PRIMARY).as_deref(), Some("not-a-color"));
}
