//! Count badge pill.

use iced::widget::{container, text};
use iced::{Border, Element, Length};

use crate::theme::{BORDER_RADIUS_FULL, ShellColors};

/// A small destructive-colored pill with a count.
///
/// Callers are expected to render it only for counts greater than zero; the
/// optional-badge convention lives at the call sites.
pub fn count_badge<'a, M: 'a>(count: u32, c: &ShellColors) -> Element<'a, M> {
    let danger = c.danger;
    let on_accent = c.text_on_accent;

    container(text(count.to_string()).size(11).color(on_accent))
        .padding([2.0, 6.0])
        .height(Length::Shrink)
        .style(move |_theme| container::Style {
            background: Some(danger.into()),
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
