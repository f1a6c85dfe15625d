//! Dispatchdesk: an embeddable admin-console core for an ambulance dispatch app.
//!
//! Dispatchdesk is the UI-framework-independent heart of a dispatch
//! administration shell. It provides:
//! - An in-memory entity store over four collections (ambulances,
//!   emergencies, users, system logs), seeded once from a fixed dataset
//! - Aggregation queries for the summary strips and dashboard stat cards
//! - Filter and lookup views for detail panels
//! - An ambulance-assignment workflow and a two-phase user status toggle,
//!   both atomic and audit-logged
//! - Per-screen view models with a shared status-to-badge-color palette
//!
//! There is no persistence, network layer, or authentication backend: the
//! collections are seeded at startup and live for the process lifetime.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Embedding Shell (mobile app, demo binary)          │  ← Dialogs, taps
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event handling
//! │  - Screen/tab navigation state                      │  ← Pending confirmations
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Support    │   │ Store Layer   │   │ Query Layer   │
//! │ (ui/)         │   │ (store/)      │   │ (queries/)    │
//! │ - View models │   │ - Collections │   │ - Status counts│
//! │ - Palette     │   │ - Workflows   │   │ - Filter views │
//! │ - Rendering   │   │ - Seed loader │   │ - Dashboard    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Entity records and status enums                  │
//! │  - Error types and failure kinds                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core entity types and errors
//! - [`store`]: Entity collections, workflows, and seed loading
//! - [`queries`]: Pure aggregation and filter functions
//! - [`ui`]: View models, badge palette, console rendering
//! - [`observability`]: Tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use dispatchdesk::{handle_event, initialize, Action, Config, Event, Screen};
//!
//! let mut state = initialize(&Config::default());
//!
//! // Open the emergency board and assign an available unit.
//! handle_event(&mut state, &Event::SelectScreen(Screen::Emergencies));
//! handle_event(&mut state, &Event::OpenEmergency { id: 1 });
//! let (_, actions) = handle_event(
//!     &mut state,
//!     &Event::AssignAmbulance {
//!         emergency_id: 1,
//!         ambulance_code: "AMB-01".to_string(),
//!     },
//! );
//!
//! assert!(matches!(actions[0], Action::ShowDialog { .. }));
//! ```

pub mod app;
pub mod domain;
pub mod observability;
pub mod queries;
pub mod store;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, ManagementTab, Screen};
pub use domain::{DispatchError, ErrorKind, Result};
pub use store::{DispatchStore, SeedData};
pub use ui::Palette;

use std::collections::BTreeMap;

/// Console configuration supplied by the embedding shell.
///
/// The shell typically holds configuration as loosely-typed key/value pairs;
/// [`Config::from_map`] parses them with fallback defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the signed-in operator, recorded as the actor on every
    /// appended log entry. Default: `"Admin"`.
    pub operator: String,

    /// Built-in palette name (`classic` or `night`). Ignored if
    /// `palette_file` is set.
    pub palette_name: Option<String>,

    /// Path to a custom TOML palette file. Takes precedence over
    /// `palette_name`. See [`ui::theme`] for the format.
    pub palette_file: Option<String>,

    /// Path to a JSON seed file replacing the built-in dataset. See
    /// [`store::seed`] for the format.
    pub seed_file: Option<String>,

    /// Tracing filter directive (e.g. `info`, `debug`,
    /// `dispatchdesk=trace`). Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            operator: "Admin".to_string(),
            palette_name: None,
            palette_file: None,
            seed_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a key/value map.
    ///
    /// Recognized keys: `operator`, `palette`, `palette_file`, `seed_file`,
    /// `trace_level`. Unknown keys are ignored; missing keys fall back to
    /// defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use dispatchdesk::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("operator".to_string(), "Adaeze Nwosu".to_string());
    /// map.insert("palette".to_string(), "night".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.operator, "Adaeze Nwosu");
    /// assert_eq!(config.palette_name.as_deref(), Some("night"));
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self {
            operator: map
                .get("operator")
                .cloned()
                .unwrap_or_else(|| "Admin".to_string()),
            palette_name: map.get("palette").cloned(),
            palette_file: map.get("palette_file").cloned(),
            seed_file: map.get("seed_file").cloned(),
            trace_level: map.get("trace_level").cloned(),
        }
    }
}

/// Initializes the console with configuration.
///
/// Creates an [`AppState`] with:
/// - A store seeded from `seed_file` if set and readable, otherwise from the
///   built-in dataset
/// - A palette from `palette_file`, then `palette_name`, then the default
///
/// Both fallback chains log the failure and continue; initialization itself
/// never fails.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing dispatch console");

    let palette = config.palette_file.as_ref().map_or_else(
        || {
            config.palette_name.as_ref().map_or_else(
                Palette::default,
                |name| {
                    Palette::from_name(name).unwrap_or_else(|| {
                        tracing::debug!(palette = %name, "unknown palette, using default");
                        Palette::default()
                    })
                },
            )
        },
        |path| {
            Palette::from_file(path).unwrap_or_else(|e| {
                tracing::debug!(palette_file = %path, error = %e, "failed to load palette file, using default");
                Palette::default()
            })
        },
    );

    let seed = config.seed_file.as_ref().map_or_else(
        SeedData::embedded,
        |path| {
            SeedData::from_file(path).unwrap_or_else(|e| {
                tracing::debug!(seed_file = %path, error = %e, "failed to load seed file, using built-in data");
                SeedData::embedded()
            })
        },
    );

    AppState::new(DispatchStore::new(seed), palette, config.operator.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_falls_back_on_bad_inputs() {
        let config = Config {
            palette_name: Some("nonexistent".to_string()),
            seed_file: Some("/nonexistent/seed.json".to_string()),
            ..Config::default()
        };

        let state = initialize(&config);
        assert_eq!(state.palette.name, "classic");
        assert!(!state.store.list_ambulances().is_empty());
    }

    #[test]
    fn from_map_ignores_unknown_keys() {
        let mut map = BTreeMap::new();
        map.insert("operator".to_string(), "Adaeze Nwosu".to_string());
        map.insert("mystery".to_string(), "value".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.operator, "Adaeze Nwosu");
        assert!(config.palette_name.is_none());
    }
}
