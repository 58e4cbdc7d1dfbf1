//! Overflow sheet for the tab bar.
//!
//! Bottom sheet listing the entries that did not fit the visible tab slots.
//! Selecting an entry navigates, which dismisses the sheet in the same step.

use atrium_core::nav::TabLayout;
use iced::border::Radius;
use iced::widget::{button, column, container, row, space, text};
use iced::{Border, Element, Length};

use crate::component::icon::icon_close;
use crate::message::{Message, NavMessage};
use crate::state::AppState;
use crate::theme::{
    BORDER_RADIUS_LG, BORDER_RADIUS_SM, ICON_SIZE_MD, SPACING_MD, SPACING_XS, ShellColors,
};
use crate::view::entry_row::entry_row;

/// The overflow sheet panel for the compact frame.
pub fn view(state: &AppState) -> Element<'_, Message> {
    let c = ShellColors::resolve(state.appearance);
    let surface_raised = c.surface_raised;
    let border = c.border;
    let text_primary = c.text_primary;
    let text_secondary = c.text_secondary;
    let surface_hover = c.surface_hover;

    let layout = TabLayout::split(&state.entries);

    let close = button(icon_close().size(ICON_SIZE_MD).color(text_secondary))
        .on_press(Message::Nav(NavMessage::OverflowDismissed))
        .padding(6.0)
        .style(move |_theme, status| {
            let background = match status {
                button::Status::Hovered => Some(surface_hover.into()),
                _ => None,
            };
            button::Style {
                background,
                text_color: text_secondary,
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        });

    let header = row![
        text("More").size(16).color(text_primary),
        space::horizontal(),
        close,
    ]
    .align_y(iced::Alignment::Center);

    let mut items = column![].spacing(SPACING_XS);
    for entry in layout.overflow {
        items = items.push(entry_row(entry, &state.current_path, true, &c));
    }

    let body = column![header, items].spacing(SPACING_MD).padding(SPACING_MD);

    container(body)
        .width(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(surface_raised.into()),
            border: Border {
                color: border,
                width: 1.0,
                radius: Radius {
                    top_left: BORDER_RADIUS_LG,
                    top_right: BORDER_RADIUS_LG,
                    bottom_right: 0.0,
                    bottom_left: 0.0,
                },
            },
            ..Default::default()
        })
        .into()
}
