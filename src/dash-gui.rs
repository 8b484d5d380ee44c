//! RDash Dashboard Shell GUI Application
//!
//! This module provides the desktop dashboard shell built on the egui
//! framework. The shell features:
//! - Light/dark theming with a persisted preference and OS color-scheme
//!   reconciliation
//! - Responsive layout driven by the window width (mobile/tablet/desktop)
//! - A sidebar with a backdrop overlay on the narrow device classes
//!
//! The application is built with a modular architecture:
//! - `rdash::app` - Application state and the theme/layout coordinators
//! - `rdash::state` - Focused state components
//! - `rdash::theme` / `rdash::device` / `rdash::debounce` - Core types
//! - `ui/` - UI panel rendering and interaction reporting

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::time::Instant;

mod ui;

use rdash::app::{AppState, LayoutCoordinator, ThemeCoordinator};
use rdash::theme::ThemeMode;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the dashboard shell.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("RDash"),
        ..Default::default()
    };

    eframe::run_native(
        "RDash",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}

/// The dashboard shell application.
///
/// The struct stays small by delegating to coordinators:
/// - `ThemeCoordinator` owns theme precedence, persistence, and application
/// - `LayoutCoordinator` owns device-class transitions and the sidebar
/// - `PanelManager` owns UI panel layout and rendering
struct DashboardApp {
    /// Centralized application state
    state: AppState,
    /// Layout is initialized from the real content width on the first frame
    layout_initialized: bool,
}

impl DashboardApp {
    /// Creates a new shell instance with the theme preference loaded from
    /// persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let theme = ThemeCoordinator::initialize(cc.storage);
        Self {
            state: AppState::with_theme(theme),
            layout_initialized: false,
        }
    }

    /// Maps egui's reported OS color scheme onto a theme mode.
    fn system_theme_mode(ctx: &egui::Context) -> Option<ThemeMode> {
        ctx.input(|i| i.raw.system_theme).map(|theme| match theme {
            egui::Theme::Dark => ThemeMode::Dark,
            egui::Theme::Light => ThemeMode::Light,
        })
    }

    /// Handles panel interactions by delegating to the coordinators.
    fn handle_panel_interaction(
        &mut self,
        interaction: PanelInteraction,
        frame: &mut eframe::Frame,
    ) {
        match interaction {
            PanelInteraction::SidebarToggleRequested => {
                LayoutCoordinator::toggle_sidebar(&mut self.state, None);
            }
            PanelInteraction::ThemeToggleRequested => {
                ThemeCoordinator::toggle_theme(&mut self.state);
            }
            PanelInteraction::ThemeResetRequested => {
                ThemeCoordinator::clear_preference(&mut self.state, frame.storage_mut());
            }
            PanelInteraction::BackdropClicked => {
                LayoutCoordinator::toggle_sidebar(&mut self.state, Some(false));
            }
        }
    }
}

impl eframe::App for DashboardApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_preference(storage, &self.state.theme);
    }

    /// Main update loop.
    ///
    /// 1. Reconcile the theme with the OS color scheme
    /// 2. Feed the window width through the resize debouncer
    /// 3. Apply the active theme to the egui visuals
    /// 4. Persist the preference during the frame (for crash resilience)
    /// 5. Render all panels via PanelManager and dispatch interactions
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let now = Instant::now();

        ThemeCoordinator::handle_system_theme(&mut self.state, Self::system_theme_mode(ctx));

        let width = ctx.content_rect().width();
        if !self.layout_initialized {
            LayoutCoordinator::initialize(&mut self.state, width);
            self.layout_initialized = true;
        } else {
            LayoutCoordinator::observe_width(&mut self.state, width, now);
            LayoutCoordinator::poll_resize(&mut self.state, now);
        }

        // A pending debounced resize needs a repaint to fire without input
        if let Some(delay) = self.state.layout.resize_debouncer().time_until_ready(now) {
            ctx.request_repaint_after(delay);
        }

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(storage) = frame.storage_mut() {
            ThemeCoordinator::save_preference(storage, &self.state.theme);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &self.state) {
            self.handle_panel_interaction(interaction, frame);
        }
    }
}
