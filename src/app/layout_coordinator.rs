//! Responsive layout coordination.
//!
//! Derives the device class from the window width, applies the matching
//! layout policy on class transitions, and owns the sidebar/backdrop
//! visibility rules. Resize bursts are coalesced through the layout state's
//! debouncer; only the settled width reaches `handle_resize`.

use crate::app::AppState;
use crate::device::DeviceClass;
use std::time::Instant;

/// Coordinates responsive layout transitions and sidebar visibility.
pub struct LayoutCoordinator;

impl LayoutCoordinator {
    /// Computes the initial device class from `width` and applies its layout
    /// policy unconditionally.
    pub fn initialize(state: &mut AppState, width: f32) {
        let class = DeviceClass::classify(width);
        log::debug!("initial layout: {} ({width}px)", class.as_str());
        Self::apply_layout_policy(state, class);
        state.layout.set_last_width(width);
    }

    /// Feeds a width observation into the resize debouncer.
    ///
    /// Each changed width cancels and reschedules the pending recomputation,
    /// so a drag-resize burst settles into a single policy check.
    pub fn observe_width(state: &mut AppState, width: f32, now: Instant) {
        if width == state.layout.last_width() {
            return;
        }
        state.layout.set_last_width(width);
        state.layout.resize_debouncer_mut().trigger(width, now);
    }

    /// Delivers a settled resize, if the debounce window has elapsed.
    ///
    /// Returns true if a layout policy was applied.
    pub fn poll_resize(state: &mut AppState, now: Instant) -> bool {
        match state.layout.resize_debouncer_mut().poll(now) {
            Some(width) => Self::handle_resize(state, width),
            None => false,
        }
    }

    /// Recomputes the device class for `width`.
    ///
    /// Applies the new class's layout policy iff the class changed; staying
    /// within the same breakpoint band is a no-op. Returns true if a policy
    /// was applied.
    pub fn handle_resize(state: &mut AppState, width: f32) -> bool {
        let class = DeviceClass::classify(width);
        if class == state.layout.device_class() {
            return false;
        }
        log::info!(
            "device class {} -> {} ({width}px)",
            state.layout.device_class().as_str(),
            class.as_str()
        );
        Self::apply_layout_policy(state, class);
        true
    }

    /// Applies the mobile layout policy: sidebar hidden, no backdrop.
    pub fn apply_mobile_layout(state: &mut AppState) {
        Self::set_class_defaults(state, DeviceClass::Mobile);
    }

    /// Applies the tablet layout policy: sidebar shown, no backdrop.
    pub fn apply_tablet_layout(state: &mut AppState) {
        Self::set_class_defaults(state, DeviceClass::Tablet);
    }

    /// Applies the desktop layout policy: sidebar shown, no backdrop.
    pub fn apply_desktop_layout(state: &mut AppState) {
        Self::set_class_defaults(state, DeviceClass::Desktop);
    }

    /// Shows, hides, or flips the sidebar.
    ///
    /// `force` pins the visibility; `None` toggles it. The backdrop overlay
    /// follows the sidebar only where the sidebar overlays content (mobile
    /// and tablet); it never shows on desktop.
    pub fn toggle_sidebar(state: &mut AppState, force: Option<bool>) {
        let visible = force.unwrap_or(!state.layout.sidebar_visible());
        state.layout.set_sidebar_visible(visible);
        if state.layout.device_class().sidebar_overlays_content() {
            state.layout.set_overlay_visible(visible);
        }
    }

    fn apply_layout_policy(state: &mut AppState, class: DeviceClass) {
        match class {
            DeviceClass::Mobile => Self::apply_mobile_layout(state),
            DeviceClass::Tablet => Self::apply_tablet_layout(state),
            DeviceClass::Desktop => Self::apply_desktop_layout(state),
        }
    }

    /// Each policy is idempotent: it sets the device class exclusively, the
    /// class's default sidebar visibility, and clears the backdrop.
    fn set_class_defaults(state: &mut AppState, class: DeviceClass) {
        state.layout.set_device_class(class);
        state.layout.set_sidebar_visible(class.default_sidebar_visible());
        state.layout.set_overlay_visible(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_initialize_applies_policy() {
        let mut state = AppState::new();
        LayoutCoordinator::initialize(&mut state, 500.0);
        assert_eq!(state.layout.device_class(), DeviceClass::Mobile);
        assert!(!state.layout.sidebar_visible());
        assert_eq!(state.layout.last_width(), 500.0);
    }

    #[test]
    fn test_same_band_resizes_apply_policy_once() {
        let mut state = AppState::new();
        LayoutCoordinator::initialize(&mut state, 1920.0);

        let mut applications = 0;
        // Cross into tablet, then wander within the tablet band
        for width in [900.0, 850.0, 1000.0, 800.0] {
            if LayoutCoordinator::handle_resize(&mut state, width) {
                applications += 1;
            }
        }
        assert_eq!(applications, 1);
        assert_eq!(state.layout.device_class(), DeviceClass::Tablet);
    }

    #[test]
    fn test_any_class_transitions_to_any_other() {
        let mut state = AppState::new();
        LayoutCoordinator::initialize(&mut state, 320.0);

        assert!(LayoutCoordinator::handle_resize(&mut state, 1920.0));
        assert_eq!(state.layout.device_class(), DeviceClass::Desktop);
        assert!(LayoutCoordinator::handle_resize(&mut state, 800.0));
        assert_eq!(state.layout.device_class(), DeviceClass::Tablet);
        assert!(LayoutCoordinator::handle_resize(&mut state, 320.0));
        assert_eq!(state.layout.device_class(), DeviceClass::Mobile);
    }

    #[test]
    fn test_policy_resets_sidebar_defaults() {
        let mut state = AppState::new();
        LayoutCoordinator::initialize(&mut state, 1920.0);

        LayoutCoordinator::toggle_sidebar(&mut state, Some(false));
        assert!(!state.layout.sidebar_visible());

        // Crossing into tablet restores that class's default
        LayoutCoordinator::handle_resize(&mut state, 900.0);
        assert!(state.layout.sidebar_visible());
        assert!(!state.layout.overlay_visible());
    }

    #[test]
    fn test_toggle_sidebar_is_involution() {
        let mut state = AppState::new();
        LayoutCoordinator::initialize(&mut state, 1920.0);
        let original = state.layout.sidebar_visible();

        LayoutCoordinator::toggle_sidebar(&mut state, None);
        assert_eq!(state.layout.sidebar_visible(), !original);
        LayoutCoordinator::toggle_sidebar(&mut state, None);
        assert_eq!(state.layout.sidebar_visible(), original);
    }

    #[test]
    fn test_overlay_follows_sidebar_on_mobile_only() {
        let mut state = AppState::new();
        LayoutCoordinator::initialize(&mut state, 320.0);

        LayoutCoordinator::toggle_sidebar(&mut state, None);
        assert!(state.layout.sidebar_visible());
        assert!(state.layout.overlay_visible());

        LayoutCoordinator::toggle_sidebar(&mut state, None);
        assert!(!state.layout.overlay_visible());

        // Desktop never shows the backdrop
        LayoutCoordinator::handle_resize(&mut state, 1920.0);
        LayoutCoordinator::toggle_sidebar(&mut state, Some(true));
        assert!(!state.layout.overlay_visible());
    }

    #[test]
    fn test_resize_burst_debounces_to_final_width() {
        let mut state = AppState::new();
        LayoutCoordinator::initialize(&mut state, 1920.0);
        let start = Instant::now();

        // Burst of drag-resize events ending in the mobile band
        LayoutCoordinator::observe_width(&mut state, 1200.0, start);
        LayoutCoordinator::observe_width(&mut state, 900.0, start + Duration::from_millis(50));
        LayoutCoordinator::observe_width(&mut state, 500.0, start + Duration::from_millis(100));

        // Nothing fires while the burst is still settling
        assert!(!LayoutCoordinator::poll_resize(
            &mut state,
            start + Duration::from_millis(200)
        ));
        assert_eq!(state.layout.device_class(), DeviceClass::Desktop);

        // Only the final width is delivered
        assert!(LayoutCoordinator::poll_resize(
            &mut state,
            start + Duration::from_millis(400)
        ));
        assert_eq!(state.layout.device_class(), DeviceClass::Mobile);
    }

    #[test]
    fn test_unchanged_width_does_not_reschedule() {
        let mut state = AppState::new();
        LayoutCoordinator::initialize(&mut state, 1920.0);
        let start = Instant::now();

        LayoutCoordinator::observe_width(&mut state, 1920.0, start);
        assert!(!state.layout.resize_debouncer().is_pending());
    }
}
