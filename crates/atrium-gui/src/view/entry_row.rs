//! Shared navigation entry row.
//!
//! One rendering for an entry across sidebar, drawer, and overflow sheet:
//! icon, optional label, optional badge, active highlight. Active state is
//! computed from the current path right here, never stored.

use atrium_core::nav::ModuleEntry;
use iced::widget::{button, container, row, space, text};
use iced::{Alignment, Border, Element, Length};

use crate::component::{count_badge, module_icon};
use crate::message::Message;
use crate::theme::{BORDER_RADIUS_SM, ICON_SIZE_MD, SPACING_SM, ShellColors};

/// A pressable navigation row for `entry`.
///
/// With `show_label` false only the icon renders (collapsed sidebar); badge
/// and label appear together. The returned element owns its content, so
/// callers may pass synthesized entries (e.g. the profile footer).
pub fn entry_row<'a>(
    entry: &ModuleEntry,
    current_path: &str,
    show_label: bool,
    c: &ShellColors,
) -> Element<'a, Message> {
    let active = entry.is_active(current_path);

    let primary = c.primary;
    let primary_light = c.primary_light;
    let surface_hover = c.surface_hover;
    let text_secondary = c.text_secondary;

    let icon_color = if active { primary } else { text_secondary };
    let icon = module_icon(&entry.icon).size(ICON_SIZE_MD).color(icon_color);

    let mut content = row![icon].spacing(SPACING_SM).align_y(Alignment::Center);
    if show_label {
        content = content.push(text(entry.label.clone()).size(14).color(icon_color));
        if let Some(badge) = entry.badge.filter(|&count| count > 0) {
            content = content.push(space::horizontal());
            content = content.push(count_badge(badge, c));
        }
    }

    let inner = if show_label {
        container(content).padding([10.0, 12.0]).width(Length::Fill)
    } else {
        container(content)
            .padding(10.0)
            .width(Length::Fill)
            .center_x(Length::Fill)
    };

    button(inner)
        .on_press(Message::Navigate(entry.path.clone()))
        .width(Length::Fill)
        .padding(0.0)
        .style(move |_theme, status| {
            let background = if active {
                Some(primary_light.into())
            } else {
                match status {
                    button::Status::Hovered => Some(surface_hover.into()),
                    _ => None,
                }
            };
            button::Style {
                background,
                text_color: if active { primary } else { text_secondary },
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}
