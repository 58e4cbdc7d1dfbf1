//! Wide-layout sidebar.
//!
//! A fixed rail that hover-expands from icon-only to icon-and-label width.
//! Expansion is pure state: pointer enter/leave over the rail region are the
//! only transitions (see `atrium_core::nav::SidebarState`).

use atrium_core::nav::ModuleEntry;
use iced::widget::{column, container, mouse_area, scrollable, text, tooltip};
use iced::{Border, Element, Length};

use crate::component::tenant_logo;
use crate::message::{Message, NavMessage};
use crate::registry::PROFILE_PATH;
use crate::state::AppState;
use crate::theme::{BORDER_RADIUS_SM, SPACING_SM, SPACING_XS, ShellColors};
use crate::view::entry_row::entry_row;

/// The sidebar rail for the wide frame.
pub fn view(state: &AppState) -> Element<'_, Message> {
    let c = ShellColors::resolve(state.appearance);
    let expanded = state.nav.sidebar.is_expanded();
    let width = state.nav.sidebar.width();

    let surface_raised = c.surface_raised;
    let border = c.border;

    let mut items = column![].spacing(SPACING_XS);
    for entry in &state.entries {
        items = items.push(sidebar_item(entry, state, expanded, &c));
    }

    let logo = container(tenant_logo(&c, expanded, 32.0)).padding(SPACING_SM);

    let footer = container(sidebar_item(&profile_entry(state), state, expanded, &c))
        .padding(SPACING_SM)
        .style(move |_theme| container::Style {
            border: Border {
                color: border,
                width: 1.0,
                ..Default::default()
            },
            ..Default::default()
        });

    let body = column![
        logo,
        scrollable(container(items).padding(SPACING_SM)).height(Length::Fill),
        footer,
    ];

    let rail = container(body)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(surface_raised.into()),
            border: Border {
                color: border,
                width: 1.0,
                ..Default::default()
            },
            ..Default::default()
        });

    mouse_area(rail)
        .on_enter(Message::Nav(NavMessage::SidebarEntered))
        .on_exit(Message::Nav(NavMessage::SidebarExited))
        .into()
}

/// One sidebar entry; collapsed entries get a tooltip with the label.
fn sidebar_item<'a>(
    entry: &ModuleEntry,
    state: &AppState,
    expanded: bool,
    c: &ShellColors,
) -> Element<'a, Message> {
    let item = entry_row(entry, &state.current_path, expanded, c);
    if expanded {
        item
    } else {
        with_label_tooltip(item, &entry.label, c)
    }
}

/// The footer entry linking to the profile page, labeled with the user's
/// name when the session has one.
fn profile_entry(state: &AppState) -> ModuleEntry {
    let label = state.session.name.as_deref().unwrap_or("Profile");
    ModuleEntry::new("profile", PROFILE_PATH, label, "user")
}

/// Wrap a collapsed item with a right-side label tooltip.
fn with_label_tooltip<'a>(
    item: Element<'a, Message>,
    label: &str,
    c: &ShellColors,
) -> Element<'a, Message> {
    let surface_raised = c.surface_raised;
    let border = c.border;
    let text_primary = c.text_primary;

    let tip = container(text(label.to_string()).size(12).color(text_primary))
        .padding([4.0, 8.0])
        .style(move |_theme| container::Style {
            background: Some(surface_raised.into()),
            border: Border {
                color: border,
                width: 1.0,
                radius: BORDER_RADIUS_SM.into(),
            },
            ..Default::default()
        });

    tooltip(item, tip, tooltip::Position::Right)
        .gap(SPACING_XS)
        .into()
}
