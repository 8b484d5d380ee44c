//! Header panel UI rendering
//!
//! Handles the top bar with the sidebar hamburger, the theme toggle control,
//! and the preference-reset entry.

use eframe::egui;
use rdash::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked the sidebar hamburger
    SidebarToggleRequested,
    /// User clicked the theme toggle control
    ThemeToggleRequested,
    /// User asked to forget the stored theme preference
    ThemeResetRequested,
}

/// Renders the application header.
///
/// The theme toggle shows the icon and label of the theme the click would
/// switch *to*, pulled from the mode's display metadata.
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("\u{2630}").on_hover_text("Toggle sidebar").clicked() {
            interaction = Some(HeaderInteraction::SidebarToggleRequested);
        }

        ui.heading("RDash");

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let next = state.theme.current().complement();
            let meta = next.metadata();
            let toggle_text = format!("{} {}", meta.icon, meta.label);
            if ui
                .button(toggle_text)
                .on_hover_text(format!("Switch to the {} theme", meta.label))
                .clicked()
            {
                interaction = Some(HeaderInteraction::ThemeToggleRequested);
            }

            if state.theme.has_explicit_preference() {
                if ui
                    .button("\u{21BA}")
                    .on_hover_text("Forget the saved theme and follow the OS")
                    .clicked()
                {
                    interaction = Some(HeaderInteraction::ThemeResetRequested);
                }
            }

            ui.label(state.layout.device_class().as_str());
        });
    });

    interaction
}
