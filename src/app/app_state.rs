//! Centralized application state for the RDash dashboard shell.
//!
//! This module implements the State pattern by composing focused state
//! components that each manage a specific aspect of the application's state.
//! The theme and layout components own disjoint pieces of the visual state,
//! so their coordinators never contend over the same fields.

use crate::state::{LayoutState, ThemeState};

/// Main application state composed of focused state components.
///
/// Each component has:
/// - Private fields to enforce invariants
/// - Intent-revealing public methods
/// - Clear separation of concerns
#[derive(Debug)]
pub struct AppState {
    /// Theme state (active mode, explicit preference, subscribers)
    pub theme: ThemeState,

    /// Responsive layout state (device class, sidebar, resize debounce)
    pub layout: LayoutState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            theme: ThemeState::new(),
            layout: LayoutState::new(),
        }
    }

    /// Creates a new AppState with a theme state restored from storage.
    pub fn with_theme(theme: ThemeState) -> Self {
        Self {
            theme,
            layout: LayoutState::new(),
        }
    }
}
