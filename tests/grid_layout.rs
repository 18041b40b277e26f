// tests/grid_layout.rs
//
// Layout properties of the weekly grid: half-open membership, equal-share
// overlap splits in list order, idempotence, and graceful handling of
// malformed sessions.

use poolcal::grid::{CellSpan, GridWindow, WeekGrid, time_slots};
use poolcal::schedule::Session;

fn session(pool: &str, day: u8, start: &str, end: &str) -> Session {
    Session {
        pool: pool.into(),
        day,
        start_time: start.into(),
        end_time: end.into(),
        session_type: None,
    }
}

fn window() -> GridWindow {
    GridWindow { start_hour: 6, end_hour: 22 }
}

fn pools_at<'a>(grid: &WeekGrid, sessions: &'a [Session], day: usize, slot: &str) -> Vec<&'a str> {
    let ix = grid.slot_ix(slot).expect("slot in window");
    grid.cell(day, ix)
        .iter()
        .map(|sp| sessions[sp.session_ix].pool.as_str())
        .collect()
}

#[test]
fn membership_is_half_open() {
    let sessions = vec![session("Balboa", 0, "09:00", "11:00")];
    let grid = WeekGrid::build(&sessions, &window());

    assert_eq!(pools_at(&grid, &sessions, 0, "08:30"), Vec::<&str>::new());
    assert_eq!(pools_at(&grid, &sessions, 0, "09:00"), vec!["Balboa"]);
    assert_eq!(pools_at(&grid, &sessions, 0, "10:30"), vec!["Balboa"]);
    // a session ending on a boundary does not occupy that slot
    assert_eq!(pools_at(&grid, &sessions, 0, "11:00"), Vec::<&str>::new());
    // and never leaks onto another day
    assert_eq!(pools_at(&grid, &sessions, 1, "09:00"), Vec::<&str>::new());
}

#[test]
fn two_way_overlap_splits_fifty_fifty_in_list_order() {
    let sessions = vec![
        session("Balboa", 0, "09:00", "11:00"),
        session("Rossi", 0, "10:00", "12:00"),
    ];
    let grid = WeekGrid::build(&sessions, &window());

    // 09:00: Balboa alone, full width
    let ix = grid.slot_ix("09:00").unwrap();
    let solo = grid.cell(0, ix);
    assert_eq!(solo.len(), 1);
    assert_eq!(solo[0].width_pct, 100.0);
    assert_eq!(solo[0].left_pct, 0.0);

    // 10:00: both, Balboa left (earlier in the list), Rossi right
    let ix = grid.slot_ix("10:00").unwrap();
    let both = grid.cell(0, ix);
    assert_eq!(
        pools_at(&grid, &sessions, 0, "10:00"),
        vec!["Balboa", "Rossi"]
    );
    assert_eq!(both[0].width_pct, 50.0);
    assert_eq!(both[0].left_pct, 0.0);
    assert_eq!(both[1].width_pct, 50.0);
    assert_eq!(both[1].left_pct, 50.0);

    // 11:30: Rossi alone again
    assert_eq!(pools_at(&grid, &sessions, 0, "11:30"), vec!["Rossi"]);
}

#[test]
fn triple_overlap_thirds_in_list_order() {
    let sessions = vec![
        session("Balboa", 2, "13:30", "15:30"),
        session("MLK", 2, "14:00", "16:00"),
        session("Sava", 2, "14:30", "16:30"),
    ];
    let grid = WeekGrid::build(&sessions, &window());

    let ix = grid.slot_ix("14:30").unwrap();
    let cell = grid.cell(2, ix);
    assert_eq!(cell.len(), 3);

    let third = 100.0 / 3.0;
    for (i, span) in cell.iter().enumerate() {
        assert!((span.width_pct - third).abs() < 1e-4);
        assert!((span.left_pct - i as f32 * third).abs() < 1e-4);
    }
    assert_eq!(
        pools_at(&grid, &sessions, 2, "14:30"),
        vec!["Balboa", "MLK", "Sava"]
    );
}

#[test]
fn widths_sum_to_one_hundred_and_spans_do_not_overlap() {
    let sessions = vec![
        session("A", 3, "10:00", "12:00"),
        session("B", 3, "10:00", "12:00"),
        session("C", 3, "10:00", "12:00"),
        session("D", 3, "10:00", "12:00"),
        session("E", 3, "10:00", "12:00"),
    ];
    let grid = WeekGrid::build(&sessions, &window());

    let ix = grid.slot_ix("11:00").unwrap();
    let cell: &[CellSpan] = grid.cell(3, ix);
    assert_eq!(cell.len(), 5);

    let sum: f32 = cell.iter().map(|sp| sp.width_pct).sum();
    assert!((sum - 100.0).abs() < 1e-3);

    for pair in cell.windows(2) {
        // ordered by list index, no overlap between consecutive shares
        assert!(pair[0].left_pct < pair[1].left_pct);
        assert!(pair[0].left_pct + pair[0].width_pct <= pair[1].left_pct + 1e-3);
    }
}

#[test]
fn rebuild_from_same_list_is_identical() {
    let sessions = vec![
        session("Balboa", 0, "09:00", "11:00"),
        session("Rossi", 0, "10:00", "12:00"),
        session("Garfield", 5, "08:00", "10:00"),
        session("Hamilton", 6, "18:30", "21:00"),
    ];
    let a = WeekGrid::build(&sessions, &window());
    let b = WeekGrid::build(&sessions, &window());

    assert_eq!(a.slots, b.slots);
    for day in 0..7 {
        for slot_ix in 0..a.slots.len() {
            assert_eq!(a.cell(day, slot_ix), b.cell(day, slot_ix));
        }
    }
}

#[test]
fn malformed_sessions_are_skipped_not_fatal() {
    let sessions = vec![
        session("Balboa", 0, "09:00", "11:00"), // fine
        session("Rossi", 7, "09:00", "11:00"),  // day out of range
        session("Sava", 1, "12:00", "10:00"),   // inverted
        session("MLK", 2, "9:00", "11:00"),     // not zero-padded
        session("Coffman", 3, "10:00", "10:00"), // empty window
    ];
    let grid = WeekGrid::build(&sessions, &window());

    assert_eq!(grid.skipped, 4);
    assert_eq!(pools_at(&grid, &sessions, 0, "10:00"), vec!["Balboa"]);
    // none of the malformed ones landed anywhere
    let occupied = grid.occupied_cells();
    assert_eq!(occupied, 4); // 09:00, 09:30, 10:00, 10:30
}

#[test]
fn unknown_pool_still_occupies_its_cells() {
    // layout never consults the display table; an unknown name lays out
    // exactly like a known one
    let sessions = vec![session("Atlantis Community Plunge", 4, "15:00", "16:00")];
    let grid = WeekGrid::build(&sessions, &window());

    assert_eq!(
        pools_at(&grid, &sessions, 4, "15:30"),
        vec!["Atlantis Community Plunge"]
    );
    assert_eq!(grid.skipped, 0);
}

#[test]
fn empty_session_list_renders_empty_grid() {
    let grid = WeekGrid::build(&[], &window());
    assert_eq!(grid.occupied_cells(), 0);
    assert_eq!(grid.skipped, 0);
    assert_eq!(grid.slots.len(), 33);
}

#[test]
fn window_is_configuration() {
    // both deployed variants must be expressible
    let narrow = time_slots(&GridWindow { start_hour: 8, end_hour: 22 });
    assert_eq!(narrow.first().unwrap(), "08:00");
    assert_eq!(narrow.last().unwrap(), "22:00");

    let wide = time_slots(&GridWindow { start_hour: 6, end_hour: 22 });
    assert_eq!(wide.len(), narrow.len() + 4);

    // a session outside the window simply paints nothing
    let sessions = vec![session("Balboa", 0, "06:00", "07:30")];
    let grid = WeekGrid::build(&sessions, &GridWindow { start_hour: 8, end_hour: 22 });
    assert_eq!(grid.occupied_cells(), 0);
}
