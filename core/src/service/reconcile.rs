//! Conversion between stored records (one row per week/day/person) and
//! the editable day × person grid.

use std::collections::HashMap;

use crate::model::grid::Grid;
use crate::model::record::Record;
use crate::model::week::{DayLabel, WeekKey};

/// Builds the display grid for `week` from the full record set.
///
/// Rows of other weeks, or naming a day or person outside `days` /
/// `roster`, are ignored. When a `(day, person)` pair appears more than
/// once the last record in input order wins. Missing cells stay `Unknown`.
pub fn to_grid(records: &[Record], week: &WeekKey, days: &[DayLabel], roster: &[String]) -> Grid {
    let mut grid = Grid::blank(days, roster);
    let week_str = week.to_string();

    let day_pos: HashMap<&str, usize> = days
        .iter()
        .enumerate()
        .map(|(i, d)| (d.label.as_str(), i))
        .collect();
    let person_pos: HashMap<&str, usize> = roster
        .iter()
        .enumerate()
        .map(|(i, p)| (p.as_str(), i))
        .collect();

    let mut mismatched = 0usize;
    for record in records.iter().filter(|r| r.week == week_str) {
        let pos = day_pos
            .get(record.day.as_str())
            .zip(person_pos.get(record.person.as_str()));
        match pos {
            Some((&d, &p)) => {
                grid.set(d, p, record.choice);
            }
            None => mismatched += 1,
        }
    }

    if mismatched > 0 {
        tracing::debug!(week = %week_str, mismatched, "ignored records outside current days/roster");
    }
    grid
}

/// Flattens a grid back into one record per cell, `Unknown` included,
/// day by day in roster order. The result is meant to replace the whole
/// week in the store.
///
/// Cells are matched by day label and person name, never by position: a
/// day or person the grid does not carry is written as `Unknown`.
pub fn to_records(grid: &Grid, week: &WeekKey, days: &[DayLabel], roster: &[String]) -> Vec<Record> {
    let week_str = week.to_string();
    let mut records = Vec::with_capacity(days.len() * roster.len());
    for day in days {
        let grid_row = grid.day_index(&day.label);
        if grid_row.is_none() {
            tracing::warn!(week = %week_str, day = %day.label, "grid has no row for day, writing it as unknown");
        }
        for person in roster {
            let choice = grid_row
                .zip(grid.person_index(person))
                .and_then(|(d, p)| grid.get(d, p))
                .unwrap_or_default();
            records.push(Record::new(week_str.clone(), day.label.clone(), person.clone(), choice));
        }
    }
    records
}
