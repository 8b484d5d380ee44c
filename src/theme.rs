//! Theme support module for the RDash dashboard shell.
//!
//! This module provides the two-mode theming system for the dashboard: the
//! `ThemeMode` enum, per-mode display metadata (label and icon for toggle
//! controls), color palettes, and application of a palette to egui visuals.
//!
//! # Examples
//!
//! ```
//! use rdash::theme::ThemeMode;
//!
//! let mode = ThemeMode::Dark;
//! assert_eq!(mode.as_str(), "dark");
//! assert_eq!(mode.complement(), ThemeMode::Light);
//! ```

use egui::Color32;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The closed set of visual modes supported by the dashboard.
///
/// Persisted as the lowercase strings `"light"` / `"dark"`; any other stored
/// value is rejected at parse time and treated as an absent preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the canonical lowercase name used in storage and payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parses a stored value. Unrecognized input yields `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// Returns the other mode.
    pub fn complement(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Returns display metadata for this mode.
    pub fn metadata(self) -> &'static ThemeMeta {
        &THEME_METADATA[&self]
    }
}

/// Display metadata for a theme mode, used by toggle controls.
#[derive(Debug, Clone, Copy)]
pub struct ThemeMeta {
    pub label: &'static str,
    pub icon: &'static str,
}

static THEME_METADATA: Lazy<HashMap<ThemeMode, ThemeMeta>> = Lazy::new(|| {
    let mut meta = HashMap::new();
    meta.insert(
        ThemeMode::Light,
        ThemeMeta {
            label: "Light",
            icon: "\u{2600}", // ☀
        },
    );
    meta.insert(
        ThemeMode::Dark,
        ThemeMeta {
            label: "Dark",
            icon: "\u{1F319}", // 🌙
        },
    );
    meta
});

/// Notification payload broadcast to theme subscribers.
///
/// Serializes to `{"theme":"dark"}` for external consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeChanged {
    pub theme: ThemeMode,
}

/// Color palette for a theme mode, covering the dashboard chrome.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Accent and signal colors
    pub accent: Color32,
    pub warning: Color32,
    pub error: Color32,

    // Backdrop scrim drawn behind an overlaying sidebar
    pub scrim: Color32,
}

impl ThemeColors {
    /// Returns the palette for a mode.
    pub fn for_mode(mode: ThemeMode) -> &'static ThemeColors {
        match mode {
            ThemeMode::Light => &LIGHT_COLORS,
            ThemeMode::Dark => &DARK_COLORS,
        }
    }
}

static LIGHT_COLORS: Lazy<ThemeColors> = Lazy::new(light_palette);
static DARK_COLORS: Lazy<ThemeColors> = Lazy::new(dark_palette);

/// Creates the light palette.
fn light_palette() -> ThemeColors {
    ThemeColors {
        background: hex_to_color32("#f8f8f8"),
        panel_background: hex_to_color32("#f0f0f2"),
        extreme_background: hex_to_color32("#ffffff"),

        text: hex_to_color32("#1f2328"),
        text_dim: hex_to_color32("#787878"),

        selection: hex_to_color32("#b4c8ff"),
        hover: hex_to_color32("#dcdcdc"),
        border: hex_to_color32("#a0a0a0"),

        accent: hex_to_color32("#2864c8"),
        warning: hex_to_color32("#e67814"),
        error: hex_to_color32("#c82828"),

        scrim: with_alpha(hex_to_color32("#000000"), 96),
    }
}

/// Creates the dark palette.
fn dark_palette() -> ThemeColors {
    ThemeColors {
        background: hex_to_color32("#272727"),
        panel_background: hex_to_color32("#1f1f23"),
        extreme_background: hex_to_color32("#101010"),

        text: hex_to_color32("#ffffff"),
        text_dim: hex_to_color32("#a0a0a0"),

        selection: hex_to_color32("#325078"),
        hover: hex_to_color32("#464646"),
        border: hex_to_color32("#646464"),

        accent: hex_to_color32("#3498db"),
        warning: hex_to_color32("#f39c12"),
        error: hex_to_color32("#e74c3c"),

        scrim: with_alpha(hex_to_color32("#000000"), 140),
    }
}

/// Applies a mode's palette to egui visuals.
pub fn apply_theme(mode: ThemeMode, visuals: &mut egui::Visuals) {
    let colors = ThemeColors::for_mode(mode);

    visuals.panel_fill = colors.panel_background;
    visuals.window_fill = colors.background;
    visuals.extreme_bg_color = colors.extreme_background;
    visuals.faint_bg_color = colors.hover;

    visuals.override_text_color = Some(colors.text);

    visuals.selection.bg_fill = colors.selection;
    visuals.selection.stroke.color = colors.accent;

    visuals.widgets.noninteractive.bg_fill = colors.panel_background;
    visuals.widgets.inactive.bg_fill = colors.hover;
    visuals.widgets.hovered.bg_fill = adjust_brightness(colors.hover, 1.15);
    visuals.widgets.active.bg_fill = colors.selection;

    visuals.hyperlink_color = colors.accent;

    visuals.error_fg_color = colors.error;
    visuals.warn_fg_color = colors.warning;
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}
