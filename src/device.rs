//! Device classification from viewport width.
//!
//! The dashboard adapts its layout to one of three device classes derived
//! deterministically from the window width. The class is never persisted;
//! it is always a pure function of the current width.

use serde::{Deserialize, Serialize};

/// Width below which the layout is classified as mobile.
pub const MOBILE_BREAKPOINT: f32 = 768.0;
/// Width below which the layout is classified as tablet.
pub const TABLET_BREAKPOINT: f32 = 1024.0;

/// Viewport-width-derived layout category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    /// Classifies a viewport width.
    ///
    /// `width < 768` is mobile, `width < 1024` is tablet, anything wider is
    /// desktop. Widths exactly on a breakpoint belong to the wider class.
    pub fn classify(width: f32) -> Self {
        if width < MOBILE_BREAKPOINT {
            DeviceClass::Mobile
        } else if width < TABLET_BREAKPOINT {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    /// Returns the lowercase marker name for this class.
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceClass::Mobile => "mobile",
            DeviceClass::Tablet => "tablet",
            DeviceClass::Desktop => "desktop",
        }
    }

    /// Default sidebar visibility for this class: hidden on mobile, shown on
    /// tablet and desktop.
    pub fn default_sidebar_visible(self) -> bool {
        !matches!(self, DeviceClass::Mobile)
    }

    /// Whether an open sidebar overlays the content on this class. On desktop
    /// the sidebar sits beside the content and never needs a backdrop.
    pub fn sidebar_overlays_content(self) -> bool {
        !matches!(self, DeviceClass::Desktop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        let expectations = [
            (320.0, DeviceClass::Mobile),
            (767.0, DeviceClass::Mobile),
            (768.0, DeviceClass::Tablet),
            (1023.0, DeviceClass::Tablet),
            (1024.0, DeviceClass::Desktop),
            (1920.0, DeviceClass::Desktop),
        ];
        for (width, expected) in expectations {
            assert_eq!(DeviceClass::classify(width), expected, "width {width}");
        }
    }

    #[test]
    fn test_default_sidebar_visibility() {
        assert!(!DeviceClass::Mobile.default_sidebar_visible());
        assert!(DeviceClass::Tablet.default_sidebar_visible());
        assert!(DeviceClass::Desktop.default_sidebar_visible());
    }

    #[test]
    fn test_overlay_applicability() {
        assert!(DeviceClass::Mobile.sidebar_overlays_content());
        assert!(DeviceClass::Tablet.sidebar_overlays_content());
        assert!(!DeviceClass::Desktop.sidebar_overlays_content());
    }
}
