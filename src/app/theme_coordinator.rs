//! Theme management and persistence coordination.
//!
//! Handles theme selection, the OS color-scheme precedence rule, persistent
//! storage, and application of the active theme to the egui context.
//!
//! Preference precedence: explicit user choice > OS color scheme > the
//! `Light` default. Once a choice is persisted, OS changes are ignored until
//! the preference is explicitly cleared.

use crate::app::AppState;
use crate::state::ThemeState;
use crate::theme::{self, ThemeMode};

const THEME_KEY: &str = "theme";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Reads the persisted theme preference, if any.
    ///
    /// Missing storage, a missing key, and an unrecognized value all read as
    /// "no explicit preference".
    pub fn load_preference_from_storage(
        storage: Option<&dyn eframe::Storage>,
    ) -> Option<ThemeMode> {
        storage
            .and_then(|storage| storage.get_string(THEME_KEY))
            .and_then(|value| ThemeMode::from_name(&value))
    }

    /// Builds the theme state for application startup.
    ///
    /// A valid persisted value becomes an explicit preference; otherwise the
    /// theme defaults to `Light` and stays open to the OS color scheme.
    pub fn initialize(storage: Option<&dyn eframe::Storage>) -> ThemeState {
        match Self::load_preference_from_storage(storage) {
            Some(mode) => {
                log::debug!("restored theme preference: {}", mode.as_str());
                ThemeState::with_mode(mode, true)
            }
            None => ThemeState::with_mode(ThemeMode::Light, false),
        }
    }

    /// Activates `mode`.
    ///
    /// No-ops (returning false) when `mode` is already active. On change the
    /// state is updated, the preference is marked explicit when `persist` is
    /// set, and subscribers are notified.
    pub fn set_theme(state: &mut AppState, mode: ThemeMode, persist: bool) -> bool {
        if state.theme.current() == mode {
            return false;
        }
        state.theme.activate(mode, persist);
        log::info!("theme changed to {}", mode.as_str());
        true
    }

    /// Switches to the complement of the active theme, as an explicit choice.
    pub fn toggle_theme(state: &mut AppState) {
        let next = state.theme.current().complement();
        Self::set_theme(state, next, true);
    }

    /// Reconciles the theme with the OS color scheme observed this frame.
    ///
    /// The first observation only records a baseline. A later change is
    /// applied (and persisted) only while no explicit preference exists.
    /// Returns true if the theme changed.
    pub fn handle_system_theme(state: &mut AppState, observed: Option<ThemeMode>) -> bool {
        let Some(observed) = observed else {
            return false;
        };
        let previous = state.theme.last_system_theme();
        state.theme.record_system_theme(observed);

        match previous {
            Some(previous) if previous != observed => {
                if state.theme.has_explicit_preference() {
                    log::debug!(
                        "ignoring OS color-scheme change to {}: explicit preference set",
                        observed.as_str()
                    );
                    return false;
                }
                Self::set_theme(state, observed, true)
            }
            _ => false,
        }
    }

    /// Saves the theme preference to persistent storage.
    ///
    /// Only an explicit preference is written; an OS-followed theme leaves
    /// storage untouched so later sessions keep following the OS.
    pub fn save_preference(storage: &mut dyn eframe::Storage, state: &ThemeState) {
        if state.has_explicit_preference() {
            storage.set_string(THEME_KEY, state.current().as_str().to_string());
            storage.flush();
        }
    }

    /// Clears the persisted preference, re-enabling OS reconciliation.
    ///
    /// The active theme is kept as-is. Storage has no delete operation, so
    /// the key is overwritten with an empty value, which readers treat as
    /// absent.
    pub fn clear_preference(
        state: &mut AppState,
        storage: Option<&mut (dyn eframe::Storage + 'static)>,
    ) {
        state.theme.clear_explicit_preference();
        if let Some(storage) = storage {
            storage.set_string(THEME_KEY, String::new());
            storage.flush();
        }
        log::info!("theme preference cleared");
    }

    /// Applies the active theme to the egui context.
    ///
    /// Called every frame so the rendered visuals can never drift from the
    /// coordinator's state.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let mode = state.theme.current();
        let mut visuals = match mode {
            ThemeMode::Light => egui::Visuals::light(),
            ThemeMode::Dark => egui::Visuals::dark(),
        };
        theme::apply_theme(mode, &mut visuals);
        ctx.set_visuals(visuals);
    }
}
