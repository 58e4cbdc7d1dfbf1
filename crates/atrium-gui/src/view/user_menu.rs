//! Avatar dropdown: identity, tenant switching, sign out.

use iced::widget::{Space, button, column, container, row, rule, text};
use iced::{Alignment, Border, Element, Length, Shadow, Vector};

use crate::component::icon::{icon_check, icon_logout};
use crate::message::{Message, SessionMessage, TenantMessage};
use crate::state::AppState;
use crate::theme::{
    BORDER_RADIUS_MD, BORDER_RADIUS_SM, ICON_SIZE_SM, SPACING_SM, SPACING_XS, USER_MENU_WIDTH,
    ShellColors,
};

/// The user menu panel.
///
/// The shell stacks this over the frame (top-right, under the header) while
/// `state.user_menu_open` holds.
pub fn view(state: &AppState) -> Element<'_, Message> {
    let c = ShellColors::resolve(state.appearance);
    let surface_raised = c.surface_raised;
    let border = c.border;
    let text_primary = c.text_primary;
    let text_muted = c.text_muted;
    let shadow_color = c.backdrop;

    let name = state.session.name.as_deref().unwrap_or("Signed out");
    let email = state.session.email.as_deref().unwrap_or("");

    let identity = column![
        text(name.to_string()).size(14).color(text_primary),
        text(email.to_string()).size(12).color(text_muted),
    ]
    .spacing(2.0);

    let mut body = column![identity].spacing(SPACING_SM).padding(SPACING_SM);

    body = body.push(rule::horizontal(1));
    body = body.push(text("Tenant").size(11).color(text_muted));
    for tenant in &state.directory.tenants {
        body = body.push(tenant_item(
            &tenant.id,
            &tenant.name,
            tenant.id == state.tenant.id,
            &c,
        ));
    }

    body = body.push(rule::horizontal(1));
    body = body.push(logout_item(&c));

    container(body)
        .width(Length::Fixed(USER_MENU_WIDTH))
        .style(move |_theme| container::Style {
            background: Some(surface_raised.into()),
            border: Border {
                color: border,
                width: 1.0,
                radius: BORDER_RADIUS_MD.into(),
            },
            shadow: Shadow {
                color: shadow_color,
                offset: Vector::new(0.0, 4.0),
                blur_radius: 16.0,
            },
            ..Default::default()
        })
        .into()
}

/// One tenant in the switcher list; the active tenant shows a check mark.
fn tenant_item<'a>(id: &str, name: &str, active: bool, c: &ShellColors) -> Element<'a, Message> {
    let primary = c.primary;
    let text_primary = c.text_primary;
    let surface_hover = c.surface_hover;

    let marker: Element<'a, Message> = if active {
        icon_check().size(ICON_SIZE_SM).color(primary).into()
    } else {
        Space::new().width(ICON_SIZE_SM).into()
    };

    let content = row![marker, text(name.to_string()).size(13).color(text_primary)]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);

    button(content)
        .on_press(Message::Tenant(TenantMessage::Switched(id.to_string())))
        .width(Length::Fill)
        .padding([SPACING_XS, SPACING_SM])
        .style(move |_theme, status| {
            let background = match status {
                button::Status::Hovered => Some(surface_hover.into()),
                _ => None,
            };
            button::Style {
                background,
                text_color: text_primary,
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}

/// Sign-out row.
fn logout_item<'a>(c: &ShellColors) -> Element<'a, Message> {
    let danger = c.danger;
    let surface_hover = c.surface_hover;

    let content = row![
        icon_logout().size(ICON_SIZE_SM).color(danger),
        text("Sign out").size(13).color(danger),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    button(content)
        .on_press(Message::Session(SessionMessage::LoggedOut))
        .width(Length::Fill)
        .padding([SPACING_XS, SPACING_SM])
        .style(move |_theme, status| {
            let background = match status {
                button::Status::Hovered => Some(surface_hover.into()),
                _ => None,
            };
            button::Style {
                background,
                text_color: danger,
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}
