//! Badge palette and ANSI escape sequence generation.
//!
//! Every screen colors its status badges from one shared mapping table
//! instead of repeating a per-screen status-to-color switch. The table is a
//! [`Palette`] loaded from TOML: two built-in palettes are compiled into the
//! binary, and a custom palette can be loaded from a file.
//!
//! # Built-in Palettes
//!
//! - `classic`: light console palette matching the mobile app's badge colors
//!   (default)
//! - `night`: dark palette with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-palette"
//!
//! [colors]
//! available = "#2e9e5b"
//! busy = "#d9534f"
//! status_new = "#d9534f"
//! status_assigned = "#f0ad4e"
//! status_in_progress = "#337ab7"
//! log_success = "#2e9e5b"
//! log_failed = "#d9534f"
//! log_warning = "#f0ad4e"
//! user_active = "#2e9e5b"
//! user_inactive = "#9e9e9e"
//! accent = "#1b2a41"
//! text_dim = "#6c7086"
//! ```

use crate::domain::error::{DispatchError, Result};
use crate::domain::models::{AmbulanceStatus, EmergencyStatus, LogStatus, UserStatus};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Status-to-color mapping table for badge rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Palette {
    /// Human-readable palette name.
    pub name: String,
    /// Hex colors for every badge category.
    pub colors: PaletteColors,
}

/// Hex color definitions for all badge categories.
///
/// All colors are specified as hex strings (e.g. "#2e9e5b").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaletteColors {
    /// Ambulance badge: Available.
    pub available: String,
    /// Ambulance badge: Busy.
    pub busy: String,

    /// Emergency badge: New.
    pub status_new: String,
    /// Emergency badge: Assigned.
    pub status_assigned: String,
    /// Emergency badge: In Progress.
    pub status_in_progress: String,

    /// Log badge: Success.
    pub log_success: String,
    /// Log badge: Failed.
    pub log_failed: String,
    /// Log badge: Warning.
    pub log_warning: String,

    /// User badge: Active.
    pub user_active: String,
    /// User badge: Inactive.
    pub user_inactive: String,

    /// Headers and screen titles.
    pub accent: String,
    /// Secondary text (labels, timestamps).
    pub text_dim: String,
}

impl Palette {
    /// Loads a built-in palette by name.
    ///
    /// Supported names: `classic`, `night`.
    ///
    /// # Returns
    ///
    /// - `Some(Palette)` if the name is recognized
    /// - `None` if the name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "classic" => include_str!("../../palettes/classic.toml"),
            "night" => include_str!("../../palettes/night.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content does
    /// not match the palette shape.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| DispatchError::Palette(format!("failed to parse palette TOML: {e}")))
    }

    /// Badge color for an ambulance status.
    #[must_use]
    pub fn ambulance_badge(&self, status: AmbulanceStatus) -> &str {
        match status {
            AmbulanceStatus::Available => &self.colors.available,
            AmbulanceStatus::Busy => &self.colors.busy,
        }
    }

    /// Badge color for an emergency status.
    #[must_use]
    pub fn emergency_badge(&self, status: EmergencyStatus) -> &str {
        match status {
            EmergencyStatus::New => &self.colors.status_new,
            EmergencyStatus::Assigned => &self.colors.status_assigned,
            EmergencyStatus::InProgress => &self.colors.status_in_progress,
        }
    }

    /// Badge color for a log outcome.
    #[must_use]
    pub fn log_badge(&self, status: LogStatus) -> &str {
        match status {
            LogStatus::Success => &self.colors.log_success,
            LogStatus::Failed => &self.colors.log_failed,
            LogStatus::Warning => &self.colors.log_warning,
        }
    }

    /// Badge color for a user account status.
    #[must_use]
    pub fn user_badge(&self, status: UserStatus) -> &str {
        match status {
            UserStatus::Active => &self.colors.user_active,
            UserStatus::Inactive => &self.colors.user_inactive,
        }
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips the `#` prefix if present, validates length, and parses hex
    /// digits. Returns white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI reset escape sequence.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Palette {
    /// Returns the default palette (`classic`).
    ///
    /// # Panics
    ///
    /// Panics if the built-in palette fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("classic").expect("built-in classic palette should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_palettes_parse() {
        assert_eq!(Palette::from_name("classic").unwrap().name, "classic");
        assert_eq!(Palette::from_name("night").unwrap().name, "night");
        assert!(Palette::from_name("nonexistent").is_none());
    }

    #[test]
    fn badge_lookup_covers_every_status() {
        let palette = Palette::default();
        for status in AmbulanceStatus::ALL {
            assert!(palette.ambulance_badge(status).starts_with('#'));
        }
        for status in EmergencyStatus::ALL {
            assert!(palette.emergency_badge(status).starts_with('#'));
        }
        for status in LogStatus::ALL {
            assert!(palette.log_badge(status).starts_with('#'));
        }
    }

    #[test]
    fn palette_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(include_str!("../../palettes/night.toml").as_bytes())
            .unwrap();

        let palette = Palette::from_file(file.path()).unwrap();
        assert_eq!(palette.name, "night");
    }

    #[test]
    fn malformed_palette_file_reports_palette_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"").unwrap();

        let err = Palette::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("palette error"));
    }

    #[test]
    fn short_hex_falls_back_to_white() {
        assert_eq!(Palette::fg("#fff"), "\u{001b}[38;2;255;255;255m");
    }

    #[test]
    fn fg_emits_truecolor_sequence() {
        assert_eq!(Palette::fg("#1b2a41"), "\u{001b}[38;2;27;42;65m");
    }
}
