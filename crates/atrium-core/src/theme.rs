//! Presentation value derivation from tenant branding.
//!
//! Pure transformations from [`TenantTheme`] tokens to the values published
//! in the presentation scope. There is no failure path: a token that does
//! not parse as a 6-hex-digit color yields the fixed fallback triplet.

use std::fmt;

use crate::tenant::TenantTheme;

/// Fallback triplet used when a color token does not parse.
pub const FALLBACK_RGB: Rgb = Rgb(27, 79, 114);

// =============================================================================
// RGB TRIPLET
// =============================================================================

/// An RGB triplet with 0-255 channels.
///
/// Displays as comma-separated decimals (`27, 79, 114`), the form embedded
/// in the `*-rgb` presentation variables and the glow shadow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

/// Parse a color token into an RGB triplet.
///
/// Accepts exactly six hex digits, case-insensitive, with an optional `#`
/// prefix. Anything else (wrong length, non-hex characters, empty string)
/// yields [`FALLBACK_RGB`] instead of an error.
pub fn derive_rgb(token: &str) -> Rgb {
    let hex = token.strip_prefix('#').unwrap_or(token);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return FALLBACK_RGB;
    }
    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Rgb(r, g, b),
        _ => FALLBACK_RGB,
    }
}

/// Compose the primary glow shadow string.
///
/// Blur and opacity are fixed; only the color varies with the tenant.
pub fn glow_shadow(rgb: Rgb) -> String {
    format!("0 4px 14px rgba({rgb}, 0.25)")
}

// =============================================================================
// LOGO REFERENCE
// =============================================================================

/// Resource reference for the tenant logo.
///
/// Rendering surfaces decide what to do with the URL; no validation or
/// fetching happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoRef {
    /// Tenant has no logo; surfaces fall back to the app-name mark.
    None,
    /// Reference to a logo resource.
    Url(String),
}

impl LogoRef {
    /// Wrap an optional logo URL.
    pub fn from_option(url: Option<&str>) -> Self {
        match url {
            Some(u) => Self::Url(u.to_string()),
            None => Self::None,
        }
    }

    /// The wrapped URL, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Url(u) => Some(u),
        }
    }
}

impl fmt::Display for LogoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Url(u) => write!(f, "url({u})"),
        }
    }
}

/// Quote a display name for the `app-name` presentation variable.
pub fn app_name_literal(name: &str) -> String {
    format!("\"{name}\"")
}

// =============================================================================
// DERIVED PRESENTATION
// =============================================================================

/// Values computed from a [`TenantTheme`].
///
/// Derived fresh on every theme change and never cached beyond the current
/// theme's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedPresentation {
    /// Primary color as an RGB triplet.
    pub primary_rgb: Rgb,
    /// Secondary color as an RGB triplet.
    pub secondary_rgb: Rgb,
    /// Composed glow shadow embedding the primary triplet.
    pub glow_shadow: String,
    /// Logo reference (`none` when the tenant has no logo).
    pub logo: LogoRef,
    /// Quoted display name.
    pub app_name_literal: String,
}

impl DerivedPresentation {
    /// Derive all presentation values from a tenant theme.
    pub fn from_theme(theme: &TenantTheme) -> Self {
        let primary_rgb = derive_rgb(&theme.primary);
        Self {
            primary_rgb,
            secondary_rgb: derive_rgb(&theme.secondary),
            glow_shadow: glow_shadow(primary_rgb),
            logo: LogoRef::from_option(theme.logo_url.as_deref()),
            app_name_literal: app_name_literal(&theme.app_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_rgb_plain_and_prefixed() {
        assert_eq!(derive_rgb("40a04a"), Rgb(64, 160, 74));
        assert_eq!(derive_rgb("#40a04a"), Rgb(64, 160, 74));
        assert_eq!(derive_rgb("#FFFFFF"), Rgb(255, 255, 255));
        assert_eq!(derive_rgb("#000000"), Rgb(0, 0, 0));
    }

    #[test]
    fn test_derive_rgb_case_insensitive() {
        assert_eq!(derive_rgb("#40A04A"), derive_rgb("#40a04a"));
        assert_eq!(derive_rgb("AbCdEf"), Rgb(171, 205, 239));
    }

    #[test]
    fn test_derive_rgb_malformed_tokens_fall_back() {
        assert_eq!(derive_rgb(""), FALLBACK_RGB);
        assert_eq!(derive_rgb("#fff"), FALLBACK_RGB);
        assert_eq!(derive_rgb("#40a04a0"), FALLBACK_RGB);
        assert_eq!(derive_rgb("not-a-color"), FALLBACK_RGB);
        assert_eq!(derive_rgb("#40a04g"), FALLBACK_RGB);
        assert_eq!(derive_rgb("##40a04a"), FALLBACK_RGB);
    }

    #[test]
    fn test_glow_shadow_embeds_primary_rgb() {
        assert_eq!(
            glow_shadow(Rgb(64, 160, 74)),
            "0 4px 14px rgba(64, 160, 74, 0.25)"
        );
        assert_eq!(
            glow_shadow(FALLBACK_RGB),
            "0 4px 14px rgba(27, 79, 114, 0.25)"
        );
    }

    #[test]
    fn test_logo_ref_rendering() {
        assert_eq!(LogoRef::None.to_string(), "none");
        assert_eq!(
            LogoRef::Url("https://example.com/logo.svg".to_string()).to_string(),
            "url(https://example.com/logo.svg)"
        );
    }

    #[test]
    fn test_from_theme_without_logo() {
        let theme = TenantTheme {
            primary: "#40a04a".to_string(),
            secondary: "bogus".to_string(),
            app_name: "Orchard".to_string(),
            logo_url: None,
            ..TenantTheme::default()
        };
        let derived = DerivedPresentation::from_theme(&theme);
        assert_eq!(derived.primary_rgb, Rgb(64, 160, 74));
        assert_eq!(derived.secondary_rgb, FALLBACK_RGB);
        assert_eq!(derived.glow_shadow, "0 4px 14px rgba(64, 160, 74, 0.25)");
        assert_eq!(derived.logo, LogoRef::None);
        assert_eq!(derived.app_name_literal, "\"Orchard\"");
    }
}
