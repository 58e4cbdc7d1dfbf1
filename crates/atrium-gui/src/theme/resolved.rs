//! Pre-resolved colors for the shell, read from the presentation scope.
//!
//! Every visual surface gets its colors through [`ShellColors::resolve`],
//! which reads the nine presentation variables at render time. Nothing here
//! is cached between renders, so a tenant switch is fully visible on the
//! next frame and a retracted scope degrades to the fixed fallbacks.

use atrium_core::scope::{
    self, VAR_ACCENT, VAR_APP_NAME, VAR_BACKGROUND, VAR_GLOW_SHADOW, VAR_LOGO_URL, VAR_PRIMARY,
    VAR_PRIMARY_RGB, VAR_SECONDARY,
};
use atrium_core::theme::{FALLBACK_RGB, Rgb, derive_rgb};
use iced::{Color, Shadow, Vector};

use super::AppearanceMode;
use crate::constants;

/// Pre-resolved colors for direct access in view code.
///
/// Brand colors come from the presentation scope; neutral surface colors
/// come from the appearance mode.
#[derive(Debug, Clone)]
pub struct ShellColors {
    // === Tenant brand (presentation scope) ===
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    /// Content area tint (the tenant `background` token in light mode).
    pub background_tint: Color,
    /// Primary at low alpha, for active-item backgrounds.
    pub primary_light: Color,
    /// Primary at medium alpha, for pressed/selected backgrounds.
    pub primary_medium: Color,
    /// Glow shadow parsed from `glow-shadow-primary`.
    pub glow: Shadow,
    /// Logo resource reference, when the tenant has one.
    pub logo_url: Option<String>,
    /// Tenant display name (unquoted `app-name`).
    pub app_name: String,

    // === Neutral surfaces (appearance mode) ===
    pub surface: Color,
    pub surface_raised: Color,
    pub surface_hover: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_accent: Color,
    pub border: Color,
    pub backdrop: Color,

    // === Status ===
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
}

impl ShellColors {
    /// Resolve all colors from the presentation scope and appearance mode.
    pub fn resolve(mode: AppearanceMode) -> Self {
        let primary_rgb = scope::var(VAR_PRIMARY_RGB)
            .as_deref()
            .and_then(parse_triplet)
            .unwrap_or(FALLBACK_RGB);
        let primary_base = color_from_rgb(primary_rgb);

        let glow = scope::var(VAR_GLOW_SHADOW)
            .as_deref()
            .and_then(parse_glow)
            .unwrap_or(Shadow {
                color: Color {
                    a: 0.25,
                    ..primary_base
                },
                offset: Vector::new(0.0, 4.0),
                blur_radius: 14.0,
            });

        let app_name = scope::var(VAR_APP_NAME)
            .as_deref()
            .map(|v| unquote(v).to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| constants::APP_NAME.to_string());

        let logo_url = scope::var(VAR_LOGO_URL).as_deref().and_then(parse_logo_url);

        let background_tint = match mode {
            AppearanceMode::Light => color_from_scope_token(VAR_BACKGROUND),
            AppearanceMode::Dark => Color::from_rgb8(0x14, 0x16, 0x15),
        };

        let neutrals = Neutrals::for_mode(mode);

        Self {
            primary: color_from_scope_token(VAR_PRIMARY),
            secondary: color_from_scope_token(VAR_SECONDARY),
            accent: color_from_scope_token(VAR_ACCENT),
            background_tint,
            primary_light: Color {
                a: 0.12,
                ..primary_base
            },
            primary_medium: Color {
                a: 0.22,
                ..primary_base
            },
            glow,
            logo_url,
            app_name,
            surface: neutrals.surface,
            surface_raised: neutrals.surface_raised,
            surface_hover: neutrals.surface_hover,
            text_primary: neutrals.text_primary,
            text_secondary: neutrals.text_secondary,
            text_muted: neutrals.text_muted,
            text_on_accent: Color::WHITE,
            border: neutrals.border,
            backdrop: Color {
                a: 0.4,
                ..Color::BLACK
            },
            success: Color::from_rgb8(0x27, 0xae, 0x60),
            warning: Color::from_rgb8(0xf3, 0x9c, 0x12),
            danger: Color::from_rgb8(0xc0, 0x39, 0x2b),
        }
    }
}

/// Neutral surface colors for one appearance mode.
struct Neutrals {
    surface: Color,
    surface_raised: Color,
    surface_hover: Color,
    text_primary: Color,
    text_secondary: Color,
    text_muted: Color,
    border: Color,
}

impl Neutrals {
    fn for_mode(mode: AppearanceMode) -> Self {
        match mode {
            AppearanceMode::Light => Self {
                surface: Color::from_rgb8(0xfc, 0xfd, 0xfc),
                surface_raised: Color::WHITE,
                surface_hover: Color::from_rgb8(0xef, 0xf2, 0xef),
                text_primary: Color::from_rgb8(0x1c, 0x21, 0x1d),
                text_secondary: Color::from_rgb8(0x4f, 0x5b, 0x52),
                text_muted: Color::from_rgb8(0x86, 0x90, 0x88),
                border: Color::from_rgb8(0xe3, 0xe7, 0xe3),
            },
            AppearanceMode::Dark => Self {
                surface: Color::from_rgb8(0x1a, 0x1d, 0x1b),
                surface_raised: Color::from_rgb8(0x23, 0x27, 0x24),
                surface_hover: Color::from_rgb8(0x2b, 0x30, 0x2c),
                text_primary: Color::from_rgb8(0xec, 0xef, 0xec),
                text_secondary: Color::from_rgb8(0xb4, 0xbc, 0xb6),
                text_muted: Color::from_rgb8(0x7d, 0x86, 0x7f),
                border: Color::from_rgb8(0x33, 0x39, 0x34),
            },
        }
    }
}

// =============================================================================
// SCOPE VALUE PARSING
// =============================================================================

/// Resolve a color token variable, with the deriver fallback for missing or
/// malformed values.
fn color_from_scope_token(name: &str) -> Color {
    let token = scope::var(name).unwrap_or_default();
    color_from_rgb(derive_rgb(&token))
}

fn color_from_rgb(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.0, rgb.1, rgb.2)
}

/// Parse a `r, g, b` decimal triplet as published in the `*-rgb` variables.
fn parse_triplet(value: &str) -> Option<Rgb> {
    let mut parts = value.split(',').map(str::trim);
    let r = parts.next()?.parse().ok()?;
    let g = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Rgb(r, g, b))
}

/// Parse the composed glow shadow: `<dx> <dy> <blur> rgba(r, g, b, a)`.
///
/// Dimensions carry an optional `px` suffix.
fn parse_glow(value: &str) -> Option<Shadow> {
    let (dims, rest) = value.split_once("rgba(")?;
    let channels = rest.trim_end().strip_suffix(')')?;

    let mut parts = channels.split(',').map(str::trim);
    let r: u8 = parts.next()?.parse().ok()?;
    let g: u8 = parts.next()?.parse().ok()?;
    let b: u8 = parts.next()?.parse().ok()?;
    let a: f32 = parts.next()?.parse().ok()?;

    let mut dims = dims.split_whitespace();
    let dx = parse_px(dims.next()?)?;
    let dy = parse_px(dims.next()?)?;
    let blur = parse_px(dims.next()?)?;

    Some(Shadow {
        color: Color {
            a,
            ..Color::from_rgb8(r, g, b)
        },
        offset: Vector::new(dx, dy),
        blur_radius: blur,
    })
}

fn parse_px(value: &str) -> Option<f32> {
    value.strip_suffix("px").unwrap_or(value).parse().ok()
}

/// Parse the `logo-url` variable: `none` or `url(<reference>)`.
fn parse_logo_url(value: &str) -> Option<String> {
    if value == "none" {
        return None;
    }
    value
        .strip_prefix("url(")
        .and_then(|rest| rest.strip_suffix(')'))
        .map(ToString::to_string)
}

/// Strip the quoting applied to the `app-name` variable.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triplet() {
        assert_eq!(parse_triplet("64, 160, 74"), Some(Rgb(64, 160, 74)));
        assert_eq!(parse_triplet("27,79,114"), Some(Rgb(27, 79, 114)));
        assert_eq!(parse_triplet("64, 160"), None);
        assert_eq!(parse_triplet("64, 160, 74, 12"), None);
        assert_eq!(parse_triplet("64, green, 74"), None);
    }

    #[test]
    fn test_parse_glow_matches_composed_format() {
        let shadow = parse_glow("0 4px 14px rgba(64, 160, 74, 0.25)").expect("glow parses");
        assert_eq!(shadow.offset, Vector::new(0.0, 4.0));
        assert_eq!(shadow.blur_radius, 14.0);
        assert!((shadow.color.a - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_glow_rejects_garbage() {
        assert!(parse_glow("").is_none());
        assert!(parse_glow("0 4px 14px").is_none());
        assert!(parse_glow("rgba(1, 2, 3, 0.5)").is_none());
    }

    #[test]
    fn test_parse_logo_url() {
        assert_eq!(parse_logo_url("none"), None);
        assert_eq!(
            parse_logo_url("url(https://cdn.example.com/logo.svg)"),
            Some("https://cdn.example.com/logo.svg".to_string())
        );
        assert_eq!(parse_logo_url("logo.svg"), None);
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"Orchard Admin\""), "Orchard Admin");
        assert_eq!(unquote("plain"), "plain");
    }
}
