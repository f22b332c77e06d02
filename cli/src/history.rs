use carpool_core::WeekSummary;
use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};

pub fn show_history(history: &[WeekSummary], roster: &[String]) {
    if history.is_empty() {
        println!("No sign-ups recorded yet.");
        return;
    }

    let mut builder = Builder::default();
    let mut header = vec!["Week".to_string(), "Rows".to_string()];
    header.extend(roster.iter().cloned());
    builder.push_record(header);

    for week in history {
        let mut row = vec![week.week.clone(), week.records.to_string()];
        for person in roster {
            let cell = match week.leaderboard.get(person) {
                Some(s) if s.points > 0 || s.driver_trips > 0 => {
                    format!("{} pts / {}x", s.points, s.driver_trips)
                }
                _ => "-".to_string(),
            };
            row.push(cell);
        }
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("\n\x1b[1;36mHistory\x1b[0m (points / times driving, newest first)");
    println!("{}", table);
}
