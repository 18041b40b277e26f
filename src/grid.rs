// src/grid.rs
//
// Weekly calendar layout. Maps the flat session list onto a fixed
// day × 30-minute-slot grid and splits a cell horizontally when several
// sessions overlap. Pure data in, pure data out; the GUI only paints what
// this produces, so rebuilding from the same list gives the same grid.

use serde::{Deserialize, Serialize};

use crate::config::consts::{GRID_END_HOUR, GRID_START_HOUR};
use crate::schedule::Session;

/// Visible hours of the calendar. The end hour contributes its :00 slot,
/// so 6..22 spans 06:00–22:00 inclusive.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GridWindow {
    pub start_hour: u8,
    pub end_hour: u8,
}

impl Default for GridWindow {
    fn default() -> Self {
        Self { start_hour: GRID_START_HOUR, end_hour: GRID_END_HOUR }
    }
}

/// Every 30-minute boundary in the window, as zero-padded "HH:MM" labels.
/// Fixed-width so plain string comparison orders them correctly.
pub fn time_slots(window: &GridWindow) -> Vec<String> {
    let mut slots = Vec::new();
    for hour in window.start_hour..window.end_hour {
        slots.push(format!("{hour:02}:00"));
        slots.push(format!("{hour:02}:30"));
    }
    slots.push(format!("{:02}:00", window.end_hour));
    slots
}

/// One session's share of a cell. Widths/offsets are percentages of the
/// cell; a lone session gets the full 100.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellSpan {
    /// Index into the session list the grid was built from.
    pub session_ix: usize,
    pub width_pct: f32,
    pub left_pct: f32,
}

pub struct WeekGrid {
    pub window: GridWindow,
    pub slots: Vec<String>,
    /// Row-major [day][slot]
    cells: Vec<Vec<CellSpan>>,
    /// Sessions excluded for being malformed (bad day, inverted times…)
    pub skipped: usize,
}

impl WeekGrid {
    /// Lay out `sessions` on the window's grid.
    ///
    /// Membership is the half-open test `start <= slot < end`: a session
    /// ending exactly on a boundary does not occupy that slot. Within a
    /// cell, sessions keep list order: whichever came earlier in the
    /// flattened document renders further left. Malformed sessions are
    /// counted, logged and dropped; they never fail the build.
    pub fn build(sessions: &[Session], window: &GridWindow) -> Self {
        let slots = time_slots(window);
        let mut cells = vec![Vec::new(); 7 * slots.len()];
        let mut skipped = 0usize;

        for (ix, s) in sessions.iter().enumerate() {
            if !s.is_well_formed() {
                skipped += 1;
                loge!(
                    "Grid: Skipping malformed session {} (day={} {}–{})",
                    s.pool, s.day, s.start_time, s.end_time
                );
                continue;
            }
            let day = s.day as usize;
            for (slot_ix, slot) in slots.iter().enumerate() {
                let active = slot.as_str() >= s.start_time.as_str()
                    && slot.as_str() < s.end_time.as_str();
                if active {
                    cells[day * slots.len() + slot_ix].push(CellSpan {
                        session_ix: ix,
                        width_pct: 0.0,
                        left_pct: 0.0,
                    });
                }
            }
        }

        // Second pass: equal horizontal shares per cell, in insertion order.
        for cell in &mut cells {
            let n = cell.len();
            if n == 0 {
                continue;
            }
            let width = 100.0 / n as f32;
            for (i, span) in cell.iter_mut().enumerate() {
                span.width_pct = width;
                span.left_pct = i as f32 * width;
            }
        }

        Self { window: *window, slots, cells, skipped }
    }

    /// Spans active in (day, slot), left to right. Out-of-range coordinates
    /// read as empty.
    pub fn cell(&self, day: usize, slot_ix: usize) -> &[CellSpan] {
        if day >= 7 || slot_ix >= self.slots.len() {
            return &[];
        }
        &self.cells[day * self.slots.len() + slot_ix]
    }

    pub fn slot_ix(&self, slot: &str) -> Option<usize> {
        self.slots.iter().position(|s| s == slot)
    }

    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

/* ---------- display helpers ---------- */

/// "14:30" → "2:30 PM". Falls through unchanged on anything unparseable.
pub fn fmt_clock12(t: &str) -> String {
    let Some((h, m)) = t.split_once(':') else { return s!(t) };
    let (Ok(hour), Ok(minute)) = (h.parse::<u8>(), m.parse::<u8>()) else {
        return s!(t);
    };
    if hour > 23 || minute > 59 {
        return s!(t);
    }
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    };
    format!("{display}:{minute:02} {period}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_cover_window_inclusive_of_last() {
        let slots = time_slots(&GridWindow { start_hour: 8, end_hour: 22 });
        assert_eq!(slots.len(), 29);
        assert_eq!(slots.first().unwrap(), "08:00");
        assert_eq!(slots.last().unwrap(), "22:00");
        assert_eq!(slots[1], "08:30");

        let default = time_slots(&GridWindow::default());
        assert_eq!(default.len(), 33); // 06:00–22:00
    }

    #[test]
    fn clock12_formatting() {
        assert_eq!(fmt_clock12("00:30"), "12:30 AM");
        assert_eq!(fmt_clock12("09:00"), "9:00 AM");
        assert_eq!(fmt_clock12("12:00"), "12:00 PM");
        assert_eq!(fmt_clock12("14:30"), "2:30 PM");
        assert_eq!(fmt_clock12("bogus"), "bogus");
        assert_eq!(fmt_clock12("25:00"), "25:00");
    }
}
