//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! console: the owned [`DispatchStore`], the navigation state (active screen
//! and management tab), the open emergency detail, and any pending
//! confirmation. View models are computed on demand from state snapshots.
//!
//! # State Components
//!
//! - **Store**: the four entity collections, exclusively owned here
//! - **Navigation**: active screen and management tab
//! - **Detail**: id of the emergency whose modal is open, if any
//! - **Pending**: a proposed mutation awaiting confirm/cancel
//! - **Palette**: badge color mapping shared by every screen
//! - **Operator**: actor name recorded on appended log entries

use crate::app::modes::{ManagementTab, PendingConfirmation, Screen};
use crate::domain::models::Emergency;
use crate::queries;
use crate::store::DispatchStore;
use crate::ui::theme::Palette;
use crate::ui::viewmodel::{
    AmbulanceCard, EmergencyCard, EmergencyDetail, LogIcon, LogRow, ManagementView, ReportEntry,
    ScreenView, StatCard, SummaryItem, UserRow,
};

/// Central application state container.
///
/// Mutated by the event handler in response to shell events; rendered via
/// [`AppState::compute_viewmodel`]. The store is never reachable mutably
/// from outside the handler, so every mutation goes through the workflows.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The entity store, seeded once at startup.
    pub store: DispatchStore,

    /// Screen selected in the bottom navigation.
    pub screen: Screen,

    /// Tab selected within the management screen.
    pub management_tab: ManagementTab,

    /// Id of the emergency whose detail modal is open, if any.
    pub open_emergency: Option<u32>,

    /// Proposed mutation awaiting operator confirmation.
    pub pending: Option<PendingConfirmation>,

    /// Badge color mapping used by all view models.
    pub palette: Palette,

    /// Name of the signed-in operator, recorded as the actor on log entries.
    pub operator: String,
}

impl AppState {
    /// Creates application state over a seeded store.
    ///
    /// Starts on the dashboard with the Users management tab preselected,
    /// no open detail, and no pending confirmation.
    #[must_use]
    pub fn new(store: DispatchStore, palette: Palette, operator: String) -> Self {
        Self {
            store,
            screen: Screen::Dashboard,
            management_tab: ManagementTab::Users,
            open_emergency: None,
            pending: None,
            palette,
            operator,
        }
    }

    /// The emergency whose detail modal is open, if it still exists.
    #[must_use]
    pub fn selected_emergency(&self) -> Option<&Emergency> {
        self.open_emergency
            .and_then(|id| self.store.emergency_by_id(id))
    }

    /// Computes the view model for the active screen.
    ///
    /// Pure with respect to state: recomputed on every call, which is cheap
    /// at these collection sizes.
    #[must_use]
    pub fn compute_viewmodel(&self) -> ScreenView {
        match self.screen {
            Screen::Dashboard => self.compute_dashboard(),
            Screen::Ambulances => self.compute_ambulances(),
            Screen::Emergencies => self.compute_emergencies(),
            Screen::Management => ScreenView::Management {
                tab: self.management_tab,
                body: self.compute_management_body(),
            },
        }
    }

    fn compute_dashboard(&self) -> ScreenView {
        let metrics = queries::dashboard_metrics(&self.store);
        ScreenView::Dashboard {
            cards: vec![
                StatCard {
                    label: "Active Emergencies".to_string(),
                    value: metrics.active_emergencies.to_string(),
                },
                StatCard {
                    label: "Available Ambulances".to_string(),
                    value: metrics.available_ambulances.to_string(),
                },
                StatCard {
                    label: "Ongoing Dispatches".to_string(),
                    value: metrics.ongoing_dispatches.to_string(),
                },
                StatCard {
                    label: "System Status".to_string(),
                    value: metrics.health.label().to_string(),
                },
            ],
        }
    }

    fn compute_ambulances(&self) -> ScreenView {
        let summary = queries::ambulance_status_counts(self.store.list_ambulances())
            .into_iter()
            .map(|(status, count)| SummaryItem {
                label: status.label().to_string(),
                count,
                color: self.palette.ambulance_badge(status).to_string(),
            })
            .collect();

        let cards = self
            .store
            .list_ambulances()
            .iter()
            .map(|a| AmbulanceCard {
                code: a.code.clone(),
                location: a.location.clone(),
                driver: a.driver.clone(),
                status_label: a.status.label().to_string(),
                badge: self.palette.ambulance_badge(a.status).to_string(),
            })
            .collect();

        ScreenView::Ambulances { summary, cards }
    }

    fn compute_emergencies(&self) -> ScreenView {
        let summary = queries::emergency_status_counts(self.store.list_emergencies())
            .into_iter()
            .map(|(status, count)| SummaryItem {
                label: status.label().to_string(),
                count,
                color: self.palette.emergency_badge(status).to_string(),
            })
            .collect();

        let cards = self
            .store
            .list_emergencies()
            .iter()
            .map(|e| self.emergency_card(e))
            .collect();

        let detail = self.selected_emergency().map(|e| {
            // Candidates are only offered while the call is unassigned.
            let candidates = if e.assigned_ambulance.is_some() {
                vec![]
            } else {
                queries::available_ambulances(self.store.list_ambulances())
                    .iter()
                    .map(|a| a.code.clone())
                    .collect()
            };

            EmergencyDetail {
                card: self.emergency_card(e),
                patient_id: e.patient_id.clone(),
                description: e.description.clone(),
                assigned_ambulance: e.assigned_ambulance.clone(),
                candidates,
            }
        });

        ScreenView::Emergencies {
            summary,
            cards,
            detail,
        }
    }

    fn emergency_card(&self, e: &Emergency) -> EmergencyCard {
        EmergencyCard {
            id: e.id,
            patient_name: e.patient_name.clone(),
            emergency_type: e.emergency_type.clone(),
            time_received: e.time_received.clone(),
            location: e.location.clone(),
            status_label: e.status.label().to_string(),
            badge: self.palette.emergency_badge(e.status).to_string(),
        }
    }

    fn compute_management_body(&self) -> ManagementView {
        match self.management_tab {
            ManagementTab::Users => ManagementView::Users(
                self.store
                    .list_users()
                    .iter()
                    .map(|u| UserRow {
                        id: u.id,
                        name: u.name.clone(),
                        email: u.email.clone(),
                        role_label: u.role.label().to_string(),
                        status_label: u.status.label().to_string(),
                        badge: self.palette.user_badge(u.status).to_string(),
                        toggle_verb: u.status.toggle_verb().to_string(),
                    })
                    .collect(),
            ),
            ManagementTab::Roles => ManagementView::Roles(
                queries::role_counts(self.store.list_users())
                    .into_iter()
                    .map(|(role, count)| SummaryItem {
                        label: role.label().to_string(),
                        count,
                        color: self.palette.colors.accent.clone(),
                    })
                    .collect(),
            ),
            ManagementTab::Logs => ManagementView::Logs(
                self.store
                    .list_logs()
                    .iter()
                    .map(|l| LogRow {
                        timestamp: l.timestamp.clone(),
                        action: l.action.clone(),
                        user: l.user.clone(),
                        status_label: l.status.label().to_string(),
                        badge: self.palette.log_badge(l.status).to_string(),
                        icon: match l.status {
                            crate::domain::models::LogStatus::Success => LogIcon::Check,
                            crate::domain::models::LogStatus::Failed => LogIcon::Cross,
                            crate::domain::models::LogStatus::Warning => LogIcon::Alert,
                        },
                    })
                    .collect(),
            ),
            ManagementTab::Reports => ManagementView::Reports(vec![
                ReportEntry {
                    title: "Daily Dispatch Summary".to_string(),
                    description: "Assignments and response outcomes for the current day"
                        .to_string(),
                },
                ReportEntry {
                    title: "Fleet Utilization".to_string(),
                    description: "Availability and busy time per ambulance unit".to_string(),
                },
                ReportEntry {
                    title: "User Activity".to_string(),
                    description: "Logins and administrative actions per account".to_string(),
                },
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SeedData;

    fn state() -> AppState {
        AppState::new(
            DispatchStore::new(SeedData::embedded()),
            Palette::default(),
            "Adaeze Nwosu".to_string(),
        )
    }

    #[test]
    fn dashboard_has_four_stat_cards() {
        let state = state();
        let ScreenView::Dashboard { cards } = state.compute_viewmodel() else {
            panic!("expected dashboard view");
        };
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].label, "Active Emergencies");
        assert_eq!(cards[3].label, "System Status");
    }

    #[test]
    fn ambulance_summary_covers_every_status() {
        let mut state = state();
        state.screen = Screen::Ambulances;

        let ScreenView::Ambulances { summary, cards } = state.compute_viewmodel() else {
            panic!("expected ambulances view");
        };
        assert_eq!(summary.len(), 2);
        assert_eq!(cards.len(), state.store.list_ambulances().len());
        assert_eq!(
            summary.iter().map(|s| s.count).sum::<usize>(),
            state.store.list_ambulances().len()
        );
    }

    #[test]
    fn unassigned_detail_offers_available_candidates() {
        let mut state = state();
        state.screen = Screen::Emergencies;
        state.open_emergency = Some(1);

        let ScreenView::Emergencies { detail, .. } = state.compute_viewmodel() else {
            panic!("expected emergencies view");
        };
        let detail = detail.expect("detail modal should be open");
        assert!(detail.assigned_ambulance.is_none());
        assert_eq!(detail.candidates, vec!["AMB-01", "AMB-03", "AMB-05"]);
    }

    #[test]
    fn assigned_detail_shows_unit_instead_of_candidates() {
        let mut state = state();
        state.screen = Screen::Emergencies;
        state.open_emergency = Some(2);

        let ScreenView::Emergencies { detail, .. } = state.compute_viewmodel() else {
            panic!("expected emergencies view");
        };
        let detail = detail.expect("detail modal should be open");
        assert_eq!(detail.assigned_ambulance.as_deref(), Some("AMB-02"));
        assert!(detail.candidates.is_empty());
    }

    #[test]
    fn roles_tab_includes_open_set_roles() {
        let mut state = state();
        state.screen = Screen::Management;
        state.management_tab = ManagementTab::Roles;

        let ScreenView::Management { body, .. } = state.compute_viewmodel() else {
            panic!("expected management view");
        };
        let ManagementView::Roles(items) = body else {
            panic!("expected roles body");
        };
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Admin", "Doctor", "Paramedic", "Dispatcher"]);
    }

    #[test]
    fn log_rows_carry_outcome_icons() {
        let mut state = state();
        state.screen = Screen::Management;
        state.management_tab = ManagementTab::Logs;

        let ScreenView::Management { body, .. } = state.compute_viewmodel() else {
            panic!("expected management view");
        };
        let ManagementView::Logs(rows) = body else {
            panic!("expected logs body");
        };
        assert!(rows.iter().any(|r| r.icon == LogIcon::Cross));
        assert!(rows.iter().any(|r| r.icon == LogIcon::Alert));
    }
}
