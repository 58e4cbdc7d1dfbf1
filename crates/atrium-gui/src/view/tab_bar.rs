//! Compact-layout bottom tab bar.
//!
//! A bounded-width bar: up to five tabs render directly; beyond that the
//! first four render and a "More" trigger opens the overflow sheet. The
//! trigger shows the active indicator when any overflowed entry matches the
//! current path.

use atrium_core::nav::{ModuleEntry, TabLayout};
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Border, Color, Element, Length};

use crate::component::icon::icon_more;
use crate::component::module_icon;
use crate::message::{Message, NavMessage};
use crate::state::AppState;
use crate::theme::{SPACING_XS, ShellColors};

const TAB_ICON_SIZE: f32 = 18.0;
const INDICATOR_WIDTH: f32 = 28.0;
const INDICATOR_HEIGHT: f32 = 3.0;

/// The bottom tab bar for the compact frame.
pub fn view(state: &AppState) -> Element<'_, Message> {
    let c = ShellColors::resolve(state.appearance);
    let surface_raised = c.surface_raised;
    let border = c.border;

    let layout = TabLayout::split(&state.entries);

    let mut bar = row![].align_y(Alignment::Center);
    for entry in layout.direct {
        bar = bar.push(tab(entry, &state.current_path, &c));
    }
    if layout.has_overflow() {
        bar = bar.push(more_trigger(
            layout.overflow_active(&state.current_path),
            &c,
        ));
    }

    container(bar)
        .width(Length::Fill)
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

/// One directly rendered tab.
fn tab<'a>(entry: &ModuleEntry, current_path: &str, c: &ShellColors) -> Element<'a, Message> {
    let active = entry.is_active(current_path);
    let icon = module_icon(&entry.icon);
    tab_slot(
        icon,
        entry.label.clone(),
        active,
        Message::Navigate(entry.path.clone()),
        c,
    )
}

/// The "More" trigger for the overflow sheet.
fn more_trigger<'a>(active: bool, c: &ShellColors) -> Element<'a, Message> {
    tab_slot(
        icon_more(),
        "More".to_string(),
        active,
        Message::Nav(NavMessage::OverflowOpened),
        c,
    )
}

fn tab_slot<'a>(
    icon: iced::widget::Text<'a>,
    label: String,
    active: bool,
    on_press: Message,
    c: &ShellColors,
) -> Element<'a, Message> {
    let primary = c.primary;
    let text_secondary = c.text_secondary;
    let color = if active { primary } else { text_secondary };

    let indicator = container(Space::new())
        .width(Length::Fixed(INDICATOR_WIDTH))
        .height(Length::Fixed(INDICATOR_HEIGHT))
        .style(move |_theme| container::Style {
            background: Some(if active {
                primary.into()
            } else {
                Color::TRANSPARENT.into()
            }),
            border: Border {
                radius: INDICATOR_HEIGHT.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let content = column![
        indicator,
        icon.size(TAB_ICON_SIZE).color(color),
        text(label).size(11).color(color),
    ]
    .spacing(SPACING_XS)
    .align_x(Alignment::Center);

    button(container(content).center_x(Length::Fill).padding([0.0, 2.0]))
        .on_press(on_press)
        .width(Length::Fill)
        .padding([SPACING_XS, 0.0])
        .style(move |_theme, _status| button::Style {
            text_color: color,
            ..Default::default()
        })
        .into()
}
