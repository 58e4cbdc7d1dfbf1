//! Compact-layout slide-over drawer.
//!
//! The drawer panel renders the full entry list with labels. Selecting an
//! entry navigates; the navigation itself dismisses the drawer (see
//! `AppState::navigate`), so the panel holds no close logic of its own
//! beyond the explicit close button.

use iced::widget::{button, column, container, row, scrollable, space};
use iced::{Border, Element, Length, Shadow, Vector};

use crate::component::icon::icon_close;
use crate::component::tenant_logo;
use crate::message::{Message, NavMessage};
use crate::state::AppState;
use crate::theme::{
    BORDER_RADIUS_SM, DRAWER_WIDTH, ICON_SIZE_MD, SPACING_SM, SPACING_XS, ShellColors,
};
use crate::view::entry_row::entry_row;

/// The drawer panel for the compact frame.
pub fn view(state: &AppState) -> Element<'_, Message> {
    let c = ShellColors::resolve(state.appearance);
    let surface_raised = c.surface_raised;
    let border = c.border;
    let shadow_color = c.backdrop;
    let text_secondary = c.text_secondary;
    let surface_hover = c.surface_hover;

    let close = button(icon_close().size(ICON_SIZE_MD).color(text_secondary))
        .on_press(Message::Nav(NavMessage::DrawerDismissed))
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

    let mut items = column![].spacing(SPACING_XS);
    for entry in &state.entries {
        items = items.push(entry_row(entry, &state.current_path, true, &c));
    }

    let body = column![
        row![space::horizontal(), close].padding(SPACING_XS),
        container(tenant_logo(&c, true, 32.0)).padding(SPACING_SM),
        scrollable(container(items).padding(SPACING_SM)).height(Length::Fill),
    ];

    container(body)
        .width(Length::Fixed(DRAWER_WIDTH))
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(surface_raised.into()),
            border: Border {
                color: border,
                width: 1.0,
                ..Default::default()
            },
            shadow: Shadow {
                color: shadow_color,
                offset: Vector::new(2.0, 0.0),
                blur_radius: 24.0,
            },
            ..Default::default()
        })
        .into()
}
