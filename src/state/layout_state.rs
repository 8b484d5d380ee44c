//! Responsive layout state management.
//!
//! This module encapsulates all state related to the responsive layout:
//! the active device class, sidebar and backdrop visibility, the last
//! observed window width, and the resize debouncer.

use crate::debounce::Debouncer;
use crate::device::DeviceClass;

/// State related to the responsive layout.
///
/// Responsibilities:
/// - Tracking the active device class
/// - Tracking sidebar and backdrop-overlay visibility
/// - Coalescing resize bursts through the debouncer
#[derive(Debug)]
pub struct LayoutState {
    /// Active device class
    device_class: DeviceClass,
    /// Whether the sidebar is currently shown
    sidebar_visible: bool,
    /// Whether the backdrop overlay behind the sidebar is shown
    overlay_visible: bool,
    /// Last window width handed to the coordinator
    last_width: f32,
    /// Pending debounced resize
    resize_debouncer: Debouncer<f32>,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Creates a layout state with desktop defaults. The coordinator
    /// re-derives everything from the real width on initialization.
    pub fn new() -> Self {
        Self {
            device_class: DeviceClass::Desktop,
            sidebar_visible: DeviceClass::Desktop.default_sidebar_visible(),
            overlay_visible: false,
            last_width: 0.0,
            resize_debouncer: Debouncer::default(),
        }
    }

    // ===== Queries =====

    /// Returns the active device class.
    pub fn device_class(&self) -> DeviceClass {
        self.device_class
    }

    /// Returns true if the sidebar is shown.
    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    /// Returns true if the backdrop overlay is shown.
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// Returns the last width handed to the coordinator.
    pub fn last_width(&self) -> f32 {
        self.last_width
    }

    // ===== Low-Level Accessors (for the layout coordinator) =====

    pub(crate) fn set_device_class(&mut self, class: DeviceClass) {
        self.device_class = class;
    }

    pub(crate) fn set_sidebar_visible(&mut self, visible: bool) {
        self.sidebar_visible = visible;
    }

    pub(crate) fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay_visible = visible;
    }

    pub(crate) fn set_last_width(&mut self, width: f32) {
        self.last_width = width;
    }

    pub(crate) fn resize_debouncer_mut(&mut self) -> &mut Debouncer<f32> {
        &mut self.resize_debouncer
    }

    /// Read access to the debouncer, for repaint scheduling.
    pub fn resize_debouncer(&self) -> &Debouncer<f32> {
        &self.resize_debouncer
    }
}
