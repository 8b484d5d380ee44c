//! UI panel rendering for the RDash dashboard shell.
//!
//! Panels are dumb views over the application state: they render and report
//! interactions back to the shell, which dispatches them to the coordinators.

pub mod header;
pub mod panel_manager;
pub mod sidebar_panel;
pub mod status_bar;
