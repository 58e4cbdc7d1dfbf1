//! Atrium - Multi-tenant Admin Panel Desktop Shell
//!
//! A desktop shell that renders tenant-branded navigation chrome (sidebar,
//! drawer, tab bar) around the modules a tenant has enabled.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

use atrium_gui::app::App;
use atrium_gui::component::LUCIDE_FONT_BYTES;
use iced::Size;
use iced::window;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// Initializes logging, registers the icon font, and runs the Iced
/// application with default window settings.
pub fn main() -> iced::Result {
    // Initialize logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting Atrium admin shell");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(400.0, 640.0)),
            ..Default::default()
        })
        .run()
}
