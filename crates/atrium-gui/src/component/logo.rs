//! Tenant logo mark.
//!
//! Renders the tenant's brand mark: a rounded tile with the app name's
//! initial, plus the full name when there is room. The `logo-url` variable
//! is a reference only; fetching and validating the actual image is the
//! hosting surface's concern, so the mark is what the shell itself draws.

use iced::widget::{container, row, text};
use iced::{Alignment, Border, Element, Length};

use crate::theme::{BORDER_RADIUS_SM, SPACING_SM, ShellColors};

/// The tenant logo mark, optionally followed by the app name.
pub fn tenant_logo<'a, M: 'a>(c: &ShellColors, show_name: bool, size: f32) -> Element<'a, M> {
    let primary = c.primary;
    let on_accent = c.text_on_accent;
    let text_primary = c.text_primary;

    let initial = c
        .app_name
        .chars()
        .next()
        .map(|ch| ch.to_uppercase().to_string())
        .unwrap_or_else(|| "A".to_string());

    let mark = container(text(initial).size(size * 0.5).color(on_accent))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .center_x(Length::Fixed(size))
        .center_y(Length::Fixed(size))
        .style(move |_theme| container::Style {
            background: Some(primary.into()),
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    if show_name {
        row![
            mark,
            text(c.app_name.clone()).size(16).color(text_primary),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center)
        .into()
    } else {
        mark.into()
    }
}
