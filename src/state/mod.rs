//! State management modules for the RDash dashboard shell.
//!
//! This module contains state-only logic (no UI concerns):
//! - Theme state (active mode, explicit-preference flag, subscribers)
//! - Layout state (device class, sidebar/overlay visibility, resize debounce)

mod layout_state;
mod theme_state;

pub use layout_state::LayoutState;
pub use theme_state::ThemeState;
