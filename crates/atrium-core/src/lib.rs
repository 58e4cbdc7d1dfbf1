//! Atrium core - tenant theming and navigation logic.
//!
//! This crate contains the GUI-free half of the Atrium admin shell:
//!
//! - Tenant configuration model ([`tenant`])
//! - Presentation variable derivation ([`theme`])
//! - The process-wide presentation scope and its injector ([`scope`])
//! - Route matching ([`route`])
//! - Navigation state machines and tab overflow layout ([`nav`])
//!
//! Everything here is synchronous and total: malformed input degrades to a
//! defined fallback instead of failing the caller.

pub mod nav;
pub mod route;
pub mod scope;
pub mod tenant;
pub mod theme;

pub use nav::{
    DrawerState, ModuleEntry, ModuleKind, NavigationUiState, OverflowState, SidebarState,
    TabLayout,
};
pub use route::is_active;
pub use scope::ThemeInjector;
pub use tenant::{TenantConfig, TenantDirectory, TenantTheme};
pub use theme::{DerivedPresentation, LogoRef, Rgb, derive_rgb};
