use chrono::NaiveDate;
use comfy_table::{Attribute, Cell, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::core::{availability::RoomVerdict, occupancy::AvailabilityStatus};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

pub fn build_verdicts_table(verdicts: &[RoomVerdict], status: AvailabilityStatus) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Room", "Verdict", "Conflicting bookings"]);
    for verdict in verdicts {
        table.add_row(vec![
            Cell::new(&verdict.room_id),
            if verdict.is_free {
                Cell::new("Free").fg(Color::Green)
            } else {
                Cell::new("Booked").fg(Color::Red)
            },
            Cell::new(verdict.conflicts.iter().join("\n")).add_attribute(Attribute::Dim),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(status).fg(status.color()),
        Cell::new(""),
    ]);
    table
}

pub fn build_calendar_table(days: impl IntoIterator<Item = (NaiveDate, bool)>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Day", "Night"]);
    for (day, is_booked) in days {
        table.add_row(vec![
            Cell::new(day.format("%b %d")),
            Cell::new(day.format("%a")).add_attribute(Attribute::Dim),
            if is_booked {
                Cell::new("Booked").fg(Color::Red)
            } else {
                Cell::new("Free").fg(Color::Green)
            },
        ]);
    }
    table
}
