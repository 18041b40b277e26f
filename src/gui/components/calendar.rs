// src/gui/components/calendar.rs
//
// Paints the weekly grid. All placement comes from WeekGrid: this file
// turns percentages into pixels and colors, nothing more. A cell's spans
// are painted left to right inside the cell rect; a lone session covers
// the whole cell.

use eframe::egui::{self, Align2, Color32, FontId, Sense, pos2};
use egui_extras::{Column, TableBuilder};

use super::color32_from_hex;
use crate::{
    config::consts::FALLBACK_COLOR,
    grid::{WeekGrid, fmt_clock12},
    gui::app::App,
    schedule::DAYS,
};

const ROW_HEIGHT: f32 = 22.0;
const TIME_COL_WIDTH: f32 = 64.0;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.loading {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.spinner();
            ui.label("Loading pool schedules…");
        });
        return;
    }
    let Some(grid) = &app.grid else { return };

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(TIME_COL_WIDTH))
        .columns(Column::remainder().clip(true), 7)
        .header(24.0, |mut header| {
            header.col(|ui| {
                ui.strong("Time");
            });
            for day in DAYS {
                header.col(|ui| {
                    ui.strong(day);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, grid.slots.len(), |mut row| {
                let slot_ix = row.index();
                row.col(|ui| {
                    ui.label(fmt_clock12(&grid.slots[slot_ix]));
                });
                for day in 0..7 {
                    row.col(|ui| {
                        draw_cell(ui, app, grid, day, slot_ix);
                    });
                }
            });
        });
}

fn draw_cell(ui: &mut egui::Ui, app: &App, grid: &WeekGrid, day: usize, slot_ix: usize) {
    let spans = grid.cell(day, slot_ix);
    if spans.is_empty() {
        return;
    }

    let rect = ui.max_rect();

    for span in spans {
        let Some(session) = app.sessions.get(span.session_ix) else {
            continue; // grid built from a different list; skip rather than panic
        };

        let left = rect.left() + rect.width() * span.left_pct / 100.0;
        let right = rect.left() + rect.width() * (span.left_pct + span.width_pct) / 100.0;
        let sub = egui::Rect::from_min_max(pos2(left, rect.top()), pos2(right, rect.bottom()));

        let color = app
            .config
            .color_of(&session.pool)
            .unwrap_or(FALLBACK_COLOR);
        let painter = ui.painter();
        painter.rect_filled(sub.shrink(0.5), 2.0, color32_from_hex(color));

        // Label only when the share is wide enough to read
        if sub.width() >= 34.0 {
            painter.text(
                sub.center(),
                Align2::CENTER_CENTER,
                app.config.label_of(&session.pool),
                FontId::proportional(10.0),
                Color32::from_gray(25),
            );
        }

        let id = ui.id().with((day, slot_ix, span.session_ix));
        let kind = session.session_type.as_deref().unwrap_or("Family Swim");
        ui.interact(sub, id, Sense::hover()).on_hover_text(format!(
            "{}: {} – {} ({})",
            session.pool,
            fmt_clock12(&session.start_time),
            fmt_clock12(&session.end_time),
            kind,
        ));
    }
}
