// src/gui/components/mod.rs
pub mod calendar;
pub mod header;
pub mod legend;

use eframe::egui::Color32;

/// "#rrggbb" → Color32; anything else is the neutral gray.
pub fn color32_from_hex(hex: &str) -> Color32 {
    let h = hex.trim().trim_start_matches('#');
    if h.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&h[0..2], 16),
            u8::from_str_radix(&h[2..4], 16),
            u8::from_str_radix(&h[4..6], 16),
        ) {
            return Color32::from_rgb(r, g, b);
        }
    }
    Color32::from_rgb(0xcc, 0xcc, 0xcc)
}
