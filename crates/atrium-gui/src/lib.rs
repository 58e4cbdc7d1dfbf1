//! Atrium - GUI Library
//!
//! The Iced shell of the Atrium multi-tenant admin panel: application loop,
//! message hierarchy, navigation views, and the bridge from the presentation
//! scope to Iced colors.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod constants;
pub mod error;
pub mod handler;
pub mod message;
pub mod registry;
pub mod service;
pub mod session;
pub mod state;
pub mod theme;
pub mod view;
