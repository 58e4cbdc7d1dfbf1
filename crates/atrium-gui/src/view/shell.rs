//! Shell composition.
//!
//! Wires the frame for the current layout mode and stacks the overlays
//! (drawer, overflow sheet, user menu) on top. The composer owns no state;
//! it only reads `AppState` and routes messages.

use iced::widget::{Space, column, container, mouse_area, opaque, row, space, stack};
use iced::{Alignment, Color, Element, Length};

use crate::message::{Message, NavMessage, SessionMessage};
use crate::state::{AppState, LayoutMode};
use crate::theme::{HEADER_HEIGHT, SPACING_SM, ShellColors};
use crate::view::{drawer, header, overflow_sheet, page, sidebar, tab_bar, user_menu};

/// The whole shell for the current state.
pub fn view_shell(state: &AppState) -> Element<'_, Message> {
    let content = page::view(state);

    let frame: Element<'_, Message> = match state.layout {
        LayoutMode::Wide => column![
            header::view(state),
            row![sidebar::view(state), content].height(Length::Fill),
        ]
        .into(),
        LayoutMode::Compact => column![
            header::view(state),
            container(content).height(Length::Fill),
            tab_bar::view(state),
        ]
        .into(),
    };

    let c = ShellColors::resolve(state.appearance);
    let mut layers = stack![frame];

    if state.layout.is_compact() && state.nav.drawer.is_open() {
        layers = layers
            .push(backdrop(
                Some(c.backdrop),
                Message::Nav(NavMessage::DrawerDismissed),
            ))
            .push(row![drawer::view(state), space::horizontal()]);
    }

    if state.layout.is_compact() && state.nav.overflow.is_open() {
        layers = layers
            .push(backdrop(
                Some(c.backdrop),
                Message::Nav(NavMessage::OverflowDismissed),
            ))
            .push(column![space::vertical(), overflow_sheet::view(state)]);
    }

    if state.user_menu_open {
        layers = layers
            .push(backdrop(None, Message::Session(SessionMessage::MenuDismissed)))
            .push(
                container(user_menu::view(state))
                    .width(Length::Fill)
                    .align_x(Alignment::End)
                    .padding([HEADER_HEIGHT + 4.0, SPACING_SM]),
            );
    }

    layers.into()
}

/// Full-size press-to-dismiss layer, optionally dimmed.
fn backdrop<'a>(dim: Option<Color>, on_press: Message) -> Element<'a, Message> {
    let area = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            background: dim.map(Into::into),
            ..Default::default()
        });

    opaque(mouse_area(area).on_press(on_press))
}
