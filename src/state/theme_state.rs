//! Theme state management.
//!
//! This module encapsulates all state related to the visual theme: the
//! active mode, whether the user has made an explicit choice, the last
//! observed OS color-scheme signal, and the change subscribers.

use crate::subscription::{Subscribers, SubscriptionId};
use crate::theme::{ThemeChanged, ThemeMode};

/// State related to the visual theme.
///
/// Responsibilities:
/// - Tracking the active theme mode
/// - Remembering whether the preference is an explicit user choice
/// - Tracking the OS color-scheme baseline for change detection
/// - Holding the theme-change subscriber registry
pub struct ThemeState {
    /// Currently active mode
    current: ThemeMode,
    /// True once the preference came from (or was confirmed by) the user;
    /// while false the OS color scheme may still steer the theme
    explicit_preference: bool,
    /// Last OS color scheme observed, used to detect changes
    last_system_theme: Option<ThemeMode>,
    /// Subscribers notified on every theme change
    subscribers: Subscribers<ThemeChanged>,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current", &self.current)
            .field("explicit_preference", &self.explicit_preference)
            .field("last_system_theme", &self.last_system_theme)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a new theme state with the default mode and no explicit
    /// preference.
    pub fn new() -> Self {
        Self::with_mode(ThemeMode::Light, false)
    }

    /// Creates a theme state with a specific mode.
    ///
    /// # Arguments
    /// * `mode` - The mode to activate
    /// * `explicit` - Whether the mode is an explicit user preference
    pub fn with_mode(mode: ThemeMode, explicit: bool) -> Self {
        Self {
            current: mode,
            explicit_preference: explicit,
            last_system_theme: None,
            subscribers: Subscribers::new(),
        }
    }

    // ===== Queries =====

    /// Returns the active mode.
    pub fn current(&self) -> ThemeMode {
        self.current
    }

    /// Returns true if the preference is an explicit user choice.
    pub fn has_explicit_preference(&self) -> bool {
        self.explicit_preference
    }

    /// Returns the last observed OS color scheme, if any.
    pub fn last_system_theme(&self) -> Option<ThemeMode> {
        self.last_system_theme
    }

    // ===== Mutations =====

    /// Activates `mode` and notifies subscribers. Intended to be called via
    /// the theme coordinator, which enforces the change guard first.
    pub(crate) fn activate(&mut self, mode: ThemeMode, explicit: bool) {
        self.current = mode;
        if explicit {
            self.explicit_preference = true;
        }
        self.subscribers.notify(ThemeChanged { theme: mode });
    }

    /// Records the OS color scheme observed this frame.
    pub(crate) fn record_system_theme(&mut self, observed: ThemeMode) {
        self.last_system_theme = Some(observed);
    }

    /// Drops the explicit-preference flag. The active mode is untouched.
    pub(crate) fn clear_explicit_preference(&mut self) {
        self.explicit_preference = false;
    }

    // ===== Subscriptions =====

    /// Registers a theme-change callback; returns an unsubscribe handle.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(ThemeChanged) + 'static,
    ) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Removes a previously registered callback.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}
