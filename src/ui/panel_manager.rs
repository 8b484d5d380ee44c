//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, sidebar, content, status) and funnels
//! their interactions back to the application shell. Every panel is guarded
//! by the layout state; a hidden sidebar or backdrop is simply not built.

use crate::ui::{header, sidebar_panel, status_bar};
use eframe::egui;
use rdash::app::AppState;
use rdash::theme::ThemeColors;

/// Result of panel interactions handled by the application shell.
pub enum PanelInteraction {
    /// User toggled the sidebar from the header
    SidebarToggleRequested,
    /// User toggled the theme from the header
    ThemeToggleRequested,
    /// User asked to forget the stored theme preference
    ThemeResetRequested,
    /// User clicked the backdrop behind an overlaying sidebar
    BackdropClicked,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let colors = ThemeColors::for_mode(state.theme.current()).clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::SidebarToggleRequested => {
                        PanelInteraction::SidebarToggleRequested
                    }
                    header::HeaderInteraction::ThemeToggleRequested => {
                        PanelInteraction::ThemeToggleRequested
                    }
                    header::HeaderInteraction::ThemeResetRequested => {
                        PanelInteraction::ThemeResetRequested
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Left panel: sidebar, only built while visible
        if state.layout.sidebar_visible() {
            let sidebar_frame = egui::Frame::default()
                .inner_margin(egui::Margin::same(8))
                .fill(ctx.style().visuals.panel_fill);

            egui::SidePanel::left("sidebar")
                .default_width(220.0)
                .resizable(false)
                .frame(sidebar_frame)
                .show(ctx, |ui| {
                    sidebar_panel::render_sidebar(ui, state);
                });
        }

        // Central content area; hosting-page widgets would mount here
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Dashboard");
            ui.separator();
            ui.label("Content sections are rendered by the hosting page.");

            // Backdrop scrim over the content while the sidebar overlays it
            if state.layout.overlay_visible() {
                let content_rect = ui.max_rect();
                ui.painter().rect_filled(content_rect, 0.0, colors.scrim);
                let response = ui.interact(
                    content_rect,
                    egui::Id::new("sidebar_backdrop"),
                    egui::Sense::click(),
                );
                if response.clicked() {
                    interaction = Some(PanelInteraction::BackdropClicked);
                }
            }
        });

        interaction
    }
}
