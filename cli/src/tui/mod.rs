pub mod app;
pub mod ui;

use std::io;

use anyhow::Result;
use carpool_core::{Choice, PlannerService, RecordStore};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::tui::app::App;

pub fn run<R: RecordStore>(service: PlannerService<R>) -> Result<()> {
    let mut app = App::new(service);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if app.dirty {
        println!("Quit with unsaved changes for week of {}.", app.session.week.key);
    }
    res?;
    Ok(())
}

fn run_app<B: Backend, R: RecordStore>(terminal: &mut Terminal<B>, app: &mut App<R>) -> io::Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if !event::poll(std::time::Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if !handle_key(app, key.code) {
            return Ok(());
        }
    }
}

/// Applies one key press. Returns `false` when the editor should quit.
fn handle_key<R: RecordStore>(app: &mut App<R>, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return false,
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.move_right(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.move_left(),
        KeyCode::Char(' ') | KeyCode::Enter => app.cycle_choice(),
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            app.set_choice(Choice::ALL[idx]);
        }
        KeyCode::Char('s') => app.save(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('c') => app.toggle_charts(),
        _ => {}
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use carpool_core::{MemoryRecordStore, RolloverRule};

    fn app() -> App<MemoryRecordStore> {
        let roster = vec!["Alice".to_string(), "Bob".to_string()];
        App::new(PlannerService::new(MemoryRecordStore::new(), roster, RolloverRule::Saturday))
    }

    #[test]
    fn test_keys_edit_and_save() {
        let mut app = app();
        assert!(handle_key(&mut app, KeyCode::Char('l')));
        assert!(handle_key(&mut app, KeyCode::Char('j')));
        assert!(handle_key(&mut app, KeyCode::Char('2')));
        assert_eq!((app.row, app.col), (1, 1));
        assert_eq!(app.selected_choice(), Choice::Driver);
        assert!(app.dirty);

        assert!(handle_key(&mut app, KeyCode::Char('s')));
        assert!(!app.dirty);
        assert_eq!(app.service.store().fetch_all().unwrap().len(), 10);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(!handle_key(&mut app, KeyCode::Char('q')));
        assert!(!handle_key(&mut app, KeyCode::Esc));
        assert!(handle_key(&mut app, KeyCode::F(1)));
    }
}
