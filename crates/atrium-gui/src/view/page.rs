//! Content area.
//!
//! Module pages themselves are outside the shell's scope; the content area
//! renders a branded placeholder for the active module, a profile page for
//! the sidebar footer link, and an empty frame when nothing matches.

use atrium_core::nav::{ModuleEntry, ModuleKind};
use iced::widget::{column, container, text};
use iced::{Alignment, Border, Element, Length};

use crate::component::module_icon;
use crate::constants;
use crate::message::Message;
use crate::registry::PROFILE_PATH;
use crate::state::AppState;
use crate::theme::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_MD, SPACING_MD, SPACING_SM, SPACING_XL, ShellColors,
};

/// The content area for the current path.
pub fn view(state: &AppState) -> Element<'_, Message> {
    let c = ShellColors::resolve(state.appearance);
    let background_tint = c.background_tint;

    let inner: Element<'_, Message> = if state.current_path == PROFILE_PATH {
        profile(state, &c)
    } else if let Some(entry) = state.active_entry() {
        module_page(entry, state, &c)
    } else if state.entries.is_empty() {
        empty_state("No modules enabled", &c)
    } else {
        empty_state("Select a module", &c)
    };

    container(inner)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(SPACING_XL)
        .style(move |_theme| container::Style {
            background: Some(background_tint.into()),
            ..Default::default()
        })
        .into()
}

/// Placeholder page for an active module.
fn module_page<'a>(
    entry: &'a ModuleEntry,
    state: &'a AppState,
    c: &ShellColors,
) -> Element<'a, Message> {
    let primary = c.primary;
    let text_primary = c.text_primary;
    let text_muted = c.text_muted;
    let surface_raised = c.surface_raised;
    let border = c.border;

    let mut heading = iced::widget::row![
        module_icon(&entry.icon).size(24).color(primary),
        text(entry.label.as_str()).size(24).color(text_primary),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    if entry.kind == ModuleKind::Addon {
        heading = heading.push(addon_chip(c));
    }

    let card = container(
        text(format!(
            "{} workspace for {}.",
            entry.label, state.tenant.name
        ))
        .size(14)
        .color(text_muted),
    )
    .padding(SPACING_MD)
    .width(Length::Fill)
    .style(move |_theme| container::Style {
        background: Some(surface_raised.into()),
        border: Border {
            color: border,
            width: 1.0,
            radius: BORDER_RADIUS_MD.into(),
        },
        ..Default::default()
    });

    column![
        heading,
        text(entry.path.as_str()).size(12).color(text_muted),
        card,
    ]
    .spacing(SPACING_MD)
    .into()
}

/// Accent-colored tag for add-on modules.
fn addon_chip<'a>(c: &ShellColors) -> Element<'a, Message> {
    let accent = c.accent;
    let on_accent = c.text_on_accent;

    container(text("Add-on").size(10).color(on_accent))
        .padding([2.0, 6.0])
        .style(move |_theme| container::Style {
            background: Some(accent.into()),
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Profile page linked from the sidebar footer.
fn profile<'a>(state: &'a AppState, c: &ShellColors) -> Element<'a, Message> {
    let primary = c.primary;
    let on_accent = c.text_on_accent;
    let text_primary = c.text_primary;
    let text_muted = c.text_muted;
    let glow = c.glow;

    let avatar = container(text(state.session.initials()).size(24).color(on_accent))
        .width(Length::Fixed(72.0))
        .height(Length::Fixed(72.0))
        .center_x(Length::Fixed(72.0))
        .center_y(Length::Fixed(72.0))
        .style(move |_theme| container::Style {
            background: Some(primary.into()),
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                ..Default::default()
            },
            shadow: glow,
            ..Default::default()
        });

    let name = state.session.name.as_deref().unwrap_or("Not signed in");
    let email = state.session.email.as_deref().unwrap_or("");

    column![
        avatar,
        text(name.to_string()).size(20).color(text_primary),
        text(email.to_string()).size(13).color(text_muted),
        text(constants::copyright()).size(11).color(text_muted),
    ]
    .spacing(SPACING_SM)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

/// Empty frame: no matching module (or none enabled at all).
fn empty_state<'a>(message: &'a str, c: &ShellColors) -> Element<'a, Message> {
    let text_muted = c.text_muted;
    container(text(message).size(14).color(text_muted))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
