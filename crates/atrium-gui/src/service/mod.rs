//! Service modules for background tasks.

pub mod tenant;
