//! Presentation support: view models, badge palette, console rendering.
//!
//! The core never draws anything itself; it computes view models and leaves
//! rendering to the embedding shell. This module provides the pieces a shell
//! needs (and a small ANSI renderer used by the demo binary):
//!
//! - [`viewmodel`]: display-ready snapshots of each screen
//! - [`theme`]: the shared status-to-color mapping table ([`Palette`])
//! - [`render`]: console output for view models

pub mod render;
pub mod theme;
pub mod viewmodel;

pub use render::render;
pub use theme::Palette;
pub use viewmodel::{
    AmbulanceCard, EmergencyCard, EmergencyDetail, LogIcon, LogRow, ManagementView, ReportEntry,
    ScreenView, StatCard, SummaryItem, UserRow,
};
