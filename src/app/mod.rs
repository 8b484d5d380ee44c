//! Application-level modules for the RDash dashboard shell.
//!
//! This module contains the centralized state and the two coordinators that
//! own the dashboard's visual state: theme and responsive layout.

mod app_state;
mod layout_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use layout_coordinator::LayoutCoordinator;
pub use theme_coordinator::ThemeCoordinator;
