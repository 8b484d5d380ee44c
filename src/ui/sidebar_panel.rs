//! Sidebar panel UI rendering
//!
//! Renders the navigation rail. Section routing belongs to the hosting
//! page's own glue, so the entries here are plain labels.

use eframe::egui;
use egui::RichText;
use rdash::app::AppState;
use rdash::theme::ThemeColors;

const NAV_ENTRIES: [&str; 4] = ["Overview", "Reports", "Activity", "Settings"];

/// Renders the sidebar navigation rail.
pub fn render_sidebar(ui: &mut egui::Ui, state: &AppState) {
    let colors = ThemeColors::for_mode(state.theme.current());

    ui.heading("Navigation");
    ui.separator();

    for entry in NAV_ENTRIES {
        ui.label(RichText::new(entry).color(colors.text));
    }

    ui.separator();
    ui.label(RichText::new("v0.1").color(colors.text_dim).small());
}
