// src/gui/components/legend.rs
//
// Color chip + shorthand per configured facility. Driven by the injected
// table, not the data, so it stays populated when the document is empty.

use eframe::egui::{self, Sense, vec2};

use super::color32_from_hex;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;

        for pool in &app.config.pools {
            let (rect, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, color32_from_hex(&pool.color));
            ui.label(&pool.short);
            ui.add_space(8.0);
        }
    });
}
