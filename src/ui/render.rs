//! Console rendering for screen view models.
//!
//! A compact ANSI renderer used by the demo binary and by anyone embedding
//! the console in a terminal. It is a straight projection of the view model:
//! one line per card or row, summary strips with colored dots, no layout
//! state of its own.

use crate::app::AppState;
use crate::ui::theme::Palette;
use crate::ui::viewmodel::{LogIcon, ManagementView, ScreenView, SummaryItem};

/// Renders the active screen to stdout.
pub fn render(state: &AppState) {
    let palette = &state.palette;

    println!(
        "{}{}== {} =={}",
        Palette::bold(),
        Palette::fg(&palette.colors.accent),
        state.screen.title(),
        Palette::reset()
    );

    match state.compute_viewmodel() {
        ScreenView::Dashboard { cards } => {
            for card in cards {
                println!(
                    "  {}{:<22}{} {}",
                    Palette::fg(&palette.colors.text_dim),
                    card.label,
                    Palette::reset(),
                    card.value
                );
            }
        }

        ScreenView::Ambulances { summary, cards } => {
            render_summary(&summary);
            for card in cards {
                println!(
                    "  {:<8} {:<24} {:<18} {}{}{}",
                    card.code,
                    card.location,
                    card.driver,
                    Palette::fg(&card.badge),
                    card.status_label,
                    Palette::reset()
                );
            }
        }

        ScreenView::Emergencies {
            summary,
            cards,
            detail,
        } => {
            render_summary(&summary);
            for card in cards {
                println!(
                    "  {:<18} {:<16} {:<10} {}{}{}",
                    card.patient_name,
                    card.emergency_type,
                    card.time_received,
                    Palette::fg(&card.badge),
                    card.status_label,
                    Palette::reset()
                );
            }
            if let Some(detail) = detail {
                println!("  ---");
                println!("  Patient {} ({})", detail.card.patient_name, detail.patient_id);
                println!("  {}", detail.description);
                match detail.assigned_ambulance {
                    Some(code) => println!("  Assigned ambulance: {code}"),
                    None => println!("  Available units: {}", detail.candidates.join(", ")),
                }
            }
        }

        ScreenView::Management { tab, body } => {
            println!(
                "  {}[{}]{}",
                Palette::fg(&palette.colors.text_dim),
                tab.label(),
                Palette::reset()
            );
            match body {
                ManagementView::Users(rows) => {
                    for row in rows {
                        println!(
                            "  {:<16} {:<34} {:<10} {}{}{}",
                            row.name,
                            row.email,
                            row.role_label,
                            Palette::fg(&row.badge),
                            row.status_label,
                            Palette::reset()
                        );
                    }
                }
                ManagementView::Roles(items) => render_summary(&items),
                ManagementView::Logs(rows) => {
                    for row in rows {
                        let icon = match row.icon {
                            LogIcon::Check => "v",
                            LogIcon::Cross => "x",
                            LogIcon::Alert => "!",
                        };
                        println!(
                            "  {} {:<18} {:<30} {}{}{}",
                            row.timestamp,
                            row.user,
                            row.action,
                            Palette::fg(&row.badge),
                            icon,
                            Palette::reset()
                        );
                    }
                }
                ManagementView::Reports(entries) => {
                    for entry in entries {
                        println!("  {:<24} {}", entry.title, entry.description);
                    }
                }
            }
        }
    }
}

/// Prints a summary strip: one colored dot and count per category.
fn render_summary(items: &[SummaryItem]) {
    let strip: Vec<String> = items
        .iter()
        .map(|item| {
            format!(
                "{}●{} {}: {}",
                Palette::fg(&item.color),
                Palette::reset(),
                item.label,
                item.count
            )
        })
        .collect();
    println!("  {}", strip.join("   "));
}
