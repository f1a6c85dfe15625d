//! Console demo shell.
//!
//! A thin terminal stand-in for the mobile shell: it feeds a scripted tour of
//! operator interactions through the event handler, prints every dialog and
//! prompt the handler emits, and renders each screen after it changes. The
//! library does all the work; this binary only translates actions to stdout.
//!
//! # Configuration
//!
//! Read from `DISPATCHDESK_*` environment variables, lowercased to the
//! library's configuration keys:
//!
//! - `DISPATCHDESK_OPERATOR`: actor name for appended log entries
//! - `DISPATCHDESK_PALETTE`: built-in palette name (`classic`, `night`)
//! - `DISPATCHDESK_PALETTE_FILE`: custom palette TOML path
//! - `DISPATCHDESK_SEED_FILE`: custom seed JSON path
//! - `DISPATCHDESK_TRACE_LEVEL`: tracing filter directive

use std::collections::BTreeMap;

use dispatchdesk::ui::render;
use dispatchdesk::{handle_event, initialize, Action, AppState, Config, Event, ManagementTab, Screen};

const ENV_PREFIX: &str = "DISPATCHDESK_";

fn main() {
    let config = config_from_env();
    dispatchdesk::observability::init_tracing(&config);

    let mut state = initialize(&config);

    // A tour through every screen: board review, one assignment, one
    // cancelled and one confirmed account toggle.
    let script = [
        Event::SelectScreen(Screen::Dashboard),
        Event::SelectScreen(Screen::Ambulances),
        Event::SelectScreen(Screen::Emergencies),
        Event::OpenEmergency { id: 1 },
        Event::AssignAmbulance {
            emergency_id: 1,
            ambulance_code: "AMB-01".to_string(),
        },
        Event::SelectScreen(Screen::Management),
        Event::SelectManagementTab(ManagementTab::Users),
        Event::RequestToggleUser { id: 4 },
        Event::Cancel,
        Event::RequestToggleUser { id: 4 },
        Event::Confirm,
        Event::SelectManagementTab(ManagementTab::Roles),
        Event::SelectManagementTab(ManagementTab::Logs),
        Event::SelectManagementTab(ManagementTab::Reports),
        Event::SelectScreen(Screen::Dashboard),
    ];

    for event in script {
        run(&mut state, &event);
    }
}

/// Feeds one event through the handler, printing dialogs and re-rendering
/// when the screen changed.
fn run(state: &mut AppState, event: &Event) {
    let (should_render, actions) = handle_event(state, event);

    for action in actions {
        match action {
            Action::ShowDialog { title, message } => {
                println!("  [{title}] {message}");
            }
            Action::ShowConfirmation { message } => {
                println!("  [Confirm Action] {message}");
            }
            Action::ShowError { kind, message } => {
                println!("  [Error/{kind:?}] {message}");
            }
        }
    }

    if should_render {
        render(state);
        println!();
    }
}

/// Collects `DISPATCHDESK_*` environment variables into a configuration map.
fn config_from_env() -> Config {
    let map: BTreeMap<String, String> = std::env::vars()
        .filter_map(|(key, value)| {
            key.strip_prefix(ENV_PREFIX)
                .map(|suffix| (suffix.to_lowercase(), value))
        })
        .collect();

    Config::from_map(&map)
}
