//! Main application module for the Atrium shell.
//!
//! Implements the Iced 0.14.0 application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//!
//! All state changes happen in `update()`; views are pure functions.

use iced::widget::container;
use iced::{Element, Length, Subscription, Task, Theme, keyboard, window};

use crate::handler::{MessageHandler, NavHandler, SessionHandler, TenantHandler};
use crate::message::Message;
use crate::registry::PROFILE_PATH;
use crate::service;
use crate::state::AppState;
use crate::theme::shell_theme;
use crate::view::view_shell;

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
///
/// This is the root of the Iced application. It holds the application state
/// and implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Boots with the bundled tenant directory so the first frame is fully
    /// themed, then loads the on-disk directory in the background.
    pub fn new() -> (Self, Task<Message>) {
        let app = Self {
            state: AppState::bootstrap(service::tenant::bundled_directory()),
        };

        let load_tenants = Task::perform(service::tenant::load_directory(), |result| {
            Message::TenantsLoaded(result.map_err(|err| err.to_string()))
        });

        (app, load_tenants)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Navigation
            // =================================================================
            Message::Navigate(path) => {
                self.state.navigate(path);
                Task::none()
            }

            Message::Nav(nav_msg) => NavHandler.handle(&mut self.state, nav_msg),

            // =================================================================
            // Tenant context
            // =================================================================
            Message::Tenant(tenant_msg) => TenantHandler.handle(&mut self.state, tenant_msg),

            Message::TenantsLoaded(result) => {
                match result {
                    Ok(directory) => self.state.adopt_directory(directory),
                    Err(err) => {
                        // Not fatal: the bundled directory stays active.
                        tracing::warn!(error = %err, "tenant directory not loaded");
                    }
                }
                Task::none()
            }

            // =================================================================
            // Session / header
            // =================================================================
            Message::Session(session_msg) => SessionHandler.handle(&mut self.state, session_msg),

            // =================================================================
            // Global events
            // =================================================================
            Message::KeyPressed(key, modifiers) => self.handle_key_press(key, modifiers),

            Message::WindowResized(size) => {
                self.state.set_layout_from_width(size.width);
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Handle global keyboard shortcuts.
    ///
    /// Escape dismisses the topmost transient surface: user menu first, then
    /// any open overlay.
    fn handle_key_press(
        &mut self,
        key: keyboard::Key,
        _modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        if let keyboard::Key::Named(keyboard::key::Named::Escape) = key {
            if self.state.user_menu_open {
                self.state.user_menu_open = false;
            } else if self.state.nav.has_open_overlay() {
                self.state.nav.dismiss_overlays();
            }
        }
        Task::none()
    }

    /// Render the view.
    ///
    /// This is a pure function that produces UI based on current state.
    pub fn view(&self) -> Element<'_, Message> {
        container(view_shell(&self.state))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Get the window title.
    pub fn title(&self) -> String {
        let app_name = &self.state.tenant.theme.app_name;
        if self.state.current_path == PROFILE_PATH {
            return format!("Profile - {app_name}");
        }
        match self.state.active_entry() {
            Some(entry) => format!("{} - {}", entry.label, app_name),
            None => app_name.clone(),
        }
    }

    /// Get the theme, rebuilt from the presentation scope on every call.
    pub fn theme(&self) -> Theme {
        shell_theme(self.state.appearance)
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        // Keyboard events (escape dismisses overlays)
        let keyboard_sub = keyboard::listen().map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Message::KeyPressed(key, modifiers)
            }
            _ => Message::Noop,
        });

        // Window resizes drive the layout breakpoint
        let resize_sub = window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        Subscription::batch([keyboard_sub, resize_sub])
    }
}
