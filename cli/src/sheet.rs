use carpool_core::{Choice, Leaderboard, Session};
use tabled::builder::Builder;
use tabled::settings::object::{Cell, Rows};
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct LeaderboardRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Person")]
    person: String,
    #[tabled(rename = "Points")]
    points: i64,
    #[tabled(rename = "Drives")]
    drives: u32,
}

fn choice_color(choice: Choice) -> Color {
    match choice {
        Choice::Driver => Color::BG_BLUE,
        Choice::Passenger => Color::BG_GREEN,
        Choice::NotGoing => Color::BG_RED,
        Choice::Unknown => Color::BG_BRIGHT_BLACK,
    }
}

pub fn grid_table(session: &Session) -> Table {
    let grid = &session.grid;
    let mut builder = Builder::default();

    let mut header = vec!["Dzień (Data)".to_string()];
    header.extend(grid.roster().iter().cloned());
    builder.push_record(header);

    for (d, day) in grid.days().iter().enumerate() {
        let mut row = vec![day.label.clone()];
        row.extend(grid.row(d).iter().map(|c| c.token().to_string()));
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    for (d, _) in grid.days().iter().enumerate() {
        for (p, choice) in grid.row(d).iter().enumerate() {
            table.with(Modify::new(Cell::new(d + 1, p + 1)).with(choice_color(*choice)));
        }
    }
    table
}

pub fn show_week(session: &Session) {
    println!("\n\x1b[1;36mWeek of {}\x1b[0m", session.week.key);
    if session.degraded {
        println!("\x1b[33mStore unavailable, showing an empty sheet.\x1b[0m");
    }
    println!("{}", grid_table(session));
    println!(
        "{}  {}  {}  {}",
        legend(Choice::Driver),
        legend(Choice::Passenger),
        legend(Choice::NotGoing),
        legend(Choice::Unknown),
    );
}

fn legend(choice: Choice) -> String {
    let code = match choice {
        Choice::Driver => "44",
        Choice::Passenger => "42",
        Choice::NotGoing => "41",
        Choice::Unknown => "100",
    };
    format!("\x1b[{};97m {} \x1b[0m", code, choice.token())
}

fn leaderboard_table(leaderboard: &Leaderboard) -> Table {
    let rows: Vec<LeaderboardRow> = leaderboard
        .ranked_by_points()
        .into_iter()
        .enumerate()
        .map(|(i, entry)| LeaderboardRow {
            rank: i + 1,
            person: entry.person.clone(),
            points: entry.points,
            drives: entry.driver_trips,
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table
}

pub fn show_leaderboard(leaderboard: &Leaderboard) {
    let table = leaderboard_table(leaderboard);
    println!("\n\x1b[1;36mAll-time ranking\x1b[0m (driver = 2 pts, passenger = 1 pt)");
    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use carpool_core::{MemoryRecordStore, PlannerService, Record, RolloverRule};
    use chrono::NaiveDate;

    fn session(records: Vec<Record>) -> Session {
        let roster = vec!["Alice".to_string(), "Bob".to_string(), "Magda".to_string()];
        let service = PlannerService::new(MemoryRecordStore::with_records(records), roster, RolloverRule::Saturday);
        let now = NaiveDate::from_ymd_opt(2026, 10, 20)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        service.open_session(now)
    }

    #[test]
    fn test_grid_table_shape() {
        let session = session(vec![Record::new("2026-10-19", "Środa (21.10)", "Bob", Choice::Driver)]);
        let table = grid_table(&session);
        assert_eq!(table.count_rows(), 6);
        assert_eq!(table.count_columns(), 4);

        let text = table.to_string();
        assert!(text.contains("Poniedziałek (19.10)"));
        assert!(text.contains("Piątek (23.10)"));
        assert!(text.contains("kierowca"));
    }

    #[test]
    fn test_leaderboard_table_ranks_everyone() {
        let session = session(vec![
            Record::new("2026-10-12", "Wtorek (13.10)", "Magda", Choice::Driver),
            Record::new("2026-10-12", "Wtorek (13.10)", "Bob", Choice::Passenger),
        ]);
        let table = leaderboard_table(&session.leaderboard);
        assert_eq!(table.count_rows(), 4);
        assert_eq!(table.count_columns(), 4);
        let text = table.to_string();
        assert!(text.find("Magda").unwrap() < text.find("Bob").unwrap());
    }
}
