//! Top bar.
//!
//! Hosts the drawer trigger (compact frame only), the tenant logo, the
//! appearance toggle, the notification bell, and the avatar that opens the
//! user menu.

use iced::widget::{Text, button, container, row, space, text};
use iced::{Alignment, Background, Border, Element, Length, Radians, gradient};

use crate::component::icon::{icon_bell, icon_menu, icon_moon, icon_sun};
use crate::component::{count_badge, tenant_logo};
use crate::message::{Message, NavMessage, SessionMessage};
use crate::state::AppState;
use crate::theme::{
    AVATAR_SIZE, BORDER_RADIUS_FULL, BORDER_RADIUS_SM, HEADER_HEIGHT, ICON_SIZE_MD, SPACING_MD,
    SPACING_XS, ShellColors,
};

/// The top bar for the current frame.
pub fn view(state: &AppState) -> Element<'_, Message> {
    let c = ShellColors::resolve(state.appearance);
    let surface_raised = c.surface_raised;
    let border = c.border;

    let mut bar = row![].spacing(SPACING_XS).align_y(Alignment::Center);

    // Drawer trigger only exists where the drawer does.
    if state.layout.is_compact() {
        bar = bar.push(chrome_button(
            icon_menu(),
            Message::Nav(NavMessage::DrawerOpened),
            &c,
        ));
    }

    bar = bar.push(tenant_logo(&c, true, 28.0));
    bar = bar.push(space::horizontal());

    let mode_icon = if state.appearance.is_dark() {
        icon_sun()
    } else {
        icon_moon()
    };
    bar = bar.push(chrome_button(
        mode_icon,
        Message::Session(SessionMessage::AppearanceToggled),
        &c,
    ));

    bar = bar.push(bell(state, &c));
    bar = bar.push(avatar(state, &c));

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, SPACING_MD])
        .align_y(Alignment::Center)
        .style(move |_theme| container::Style {
            background: Some(surface_raised.into()),
            border: Border {
                color: border,
                width: 1.0,
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Ghost icon button used for the header actions.
fn chrome_button<'a>(icon: Text<'a>, on_press: Message, c: &ShellColors) -> Element<'a, Message> {
    let text_secondary = c.text_secondary;
    let surface_hover = c.surface_hover;

    button(icon.size(ICON_SIZE_MD).color(text_secondary))
        .on_press(on_press)
        .padding(10.0)
        .style(move |_theme, status| {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => Some(surface_hover.into()),
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
        })
        .into()
}

/// Notification bell; the count badge renders only when there is something
/// to count.
fn bell<'a>(state: &AppState, c: &ShellColors) -> Element<'a, Message> {
    if state.notifications == 0 {
        return chrome_button(icon_bell(), Message::Noop, c);
    }

    let text_secondary = c.text_secondary;
    let surface_hover = c.surface_hover;

    let content = row![
        icon_bell().size(ICON_SIZE_MD).color(text_secondary),
        count_badge(state.notifications, c),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    button(content)
        .on_press(Message::Noop)
        .padding(10.0)
        .style(move |_theme, status| {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => Some(surface_hover.into()),
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
        })
        .into()
}

/// Avatar button with the user's initials and the tenant glow ring.
///
/// The face blends primary into secondary so both brand colors are visible
/// in the chrome.
fn avatar<'a>(state: &AppState, c: &ShellColors) -> Element<'a, Message> {
    let primary = c.primary;
    let secondary = c.secondary;
    let on_accent = c.text_on_accent;
    let glow = c.glow;

    let face = container(
        text(state.session.initials())
            .size(13)
            .color(on_accent),
    )
    .width(Length::Fixed(AVATAR_SIZE))
    .height(Length::Fixed(AVATAR_SIZE))
    .center_x(Length::Fixed(AVATAR_SIZE))
    .center_y(Length::Fixed(AVATAR_SIZE))
    .style(move |_theme| {
        // 135 degrees, top-left to bottom-right
        let blend = gradient::Linear::new(Radians(3.0 * std::f32::consts::FRAC_PI_4))
            .add_stop(0.0, primary)
            .add_stop(1.0, secondary);
        container::Style {
            background: Some(Background::Gradient(blend.into())),
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                ..Default::default()
            },
            shadow: glow,
            ..Default::default()
        }
    });

    button(face)
        .on_press(Message::Session(SessionMessage::MenuToggled))
        .padding(2.0)
        .style(|_theme, _status| button::Style::default())
        .into()
}
