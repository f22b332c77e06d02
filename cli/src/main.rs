mod history;
mod logging;
mod sheet;
mod stats;
mod theme;
mod tui;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use carpool_core::{resolve_day, resolve_person, Choice, Config, PlannerService};
use chrono::Local;
use clap::Parser;

const LOG_FILE_NAME: &str = "carpool.log";

#[derive(Parser)]
#[command(name = "carpool")]
#[command(about = "Weekly carpool sign-up sheet", long_about = None)]
struct Cli {
    /// Path to config.toml (default: ~/.carpool/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print this week's sheet
    Show,
    /// Set one cell and save the week (usage: set wt magda kierowca)
    Set {
        /// Day number (1 = Monday) or weekday name prefix
        day: String,
        /// Person name or unique prefix
        person: String,
        /// ?, kierowca, pasażer, "nie jadę" (or d, p, n, u)
        choice: String,
    },
    /// Print the all-time ranking
    Stats,
    /// Print per-week totals
    History,
    /// Show the ranking as bar charts
    Chart,
    /// Open the interactive sheet editor
    Tui,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let full_screen = matches!(cli.command, None | Some(Commands::Tui) | Some(Commands::Chart));
    let log_file = if full_screen {
        Some(config.data_dir()?.join(LOG_FILE_NAME))
    } else {
        None
    };
    logging::init(&config.log_level, log_file.as_deref())?;

    tracing::debug!(roster = config.roster.len(), store = ?config.store, "configuration loaded");
    let store = config.open_store()?;
    let service = PlannerService::new(store, config.roster.clone(), config.rollover);
    let now = Local::now().naive_local();

    match cli.command {
        Some(Commands::Show) => {
            let session = service.open_session(now);
            sheet::show_week(&session);
        }
        Some(Commands::Set { day, person, choice }) => {
            let mut session = service.open_session(now);
            if session.degraded {
                return Err(anyhow!(
                    "Could not read the sheet; refusing to overwrite week of {}",
                    session.week.key
                ));
            }
            let day_idx = resolve_day(&day, &session.week.days)?;
            let person = resolve_person(&person, service.roster())?.to_string();
            let choice: Choice = choice.parse()?;

            service.set_choice(&mut session, day_idx, &person, choice);
            service
                .save(&mut session)
                .with_context(|| format!("Saving week of {} failed", session.week.key))?;
            println!("{}: {} -> {}", session.week.days[day_idx], person, choice);
            sheet::show_week(&session);
        }
        Some(Commands::Stats) => {
            let session = service.open_session(now);
            if session.degraded {
                println!("Store unavailable, ranking is empty.");
            }
            sheet::show_leaderboard(&session.leaderboard);
        }
        Some(Commands::History) => {
            let history = service.history()?;
            history::show_history(&history, service.roster());
        }
        Some(Commands::Chart) => {
            let session = service.open_session(now);
            stats::run(&session.leaderboard)?;
        }
        Some(Commands::Tui) | None => {
            tui::run(service)?;
        }
    }
    Ok(())
}
