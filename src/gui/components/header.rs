// src/gui/components/header.rs
//
// Title row: document metadata on the left, actions and the live status
// line on the right.

use chrono::DateTime;
use eframe::egui::{self, Align, Layout, RichText};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.heading("Family Swim Schedule");

        if let Some(meta) = &app.meta {
            ui.add_space(12.0);
            ui.label(
                RichText::new(format!(
                    "{} pools · {} sessions · updated {}",
                    meta.total_pools,
                    meta.total_sessions,
                    fmt_date(&meta.last_updated)
                ))
                .weak(),
            );
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let idle = !app.busy();

            if ui.add_enabled(idle, egui::Button::new("Update schedules"))
                .on_hover_text("Re-scrape every pool document (needs an API key)")
                .clicked()
            {
                actions::scrape(app);
            }
            if ui.add_enabled(idle, egui::Button::new("Refresh"))
                .on_hover_text("Reload the schedule file")
                .clicked()
            {
                actions::reload(app, true);
            }

            let status = app.status.lock().unwrap().clone();
            ui.label(RichText::new(status).weak());
        });
    });
    ui.add_space(4.0);
}

/// ISO-8601 → "Mar  2, 2026"; unparseable stamps pass through.
fn fmt_date(iso: &str) -> String {
    DateTime::parse_from_rfc3339(iso)
        .map(|d| d.format("%b %e, %Y").to_string())
        .unwrap_or_else(|_| s!(iso))
}
