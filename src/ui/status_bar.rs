//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying the active theme, device class,
//! and last observed window width.

use eframe::egui;
use egui::RichText;
use rdash::app::AppState;

/// Renders the status panel at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let theme_label = state.theme.current().metadata().label;
        ui.label(RichText::new(format!("Theme: {theme_label}")).strong());

        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format!(
            "Device: {}",
            state.layout.device_class().as_str()
        )));

        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format!("Width: {:.0}px", state.layout.last_width())));

        if !state.theme.has_explicit_preference() {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new("following OS theme").italics());
        }
    });
}
