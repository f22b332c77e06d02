use std::{io, time::Duration};

use anyhow::Result;
use carpool_core::{Leaderboard, PersonStats};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph},
};

use crate::theme::THEME;

pub fn run(leaderboard: &Leaderboard) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = event_loop(&mut terminal, leaderboard);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, leaderboard: &Leaderboard) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui(f, leaderboard))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        _ => {}
                    }
                }
            }
        }
    }
}

fn ui(frame: &mut Frame, leaderboard: &Leaderboard) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(10),   // Charts
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    let title = Paragraph::new(Span::styled(
        "CARPOOL STATS",
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, main_layout[0]);

    draw_charts(frame, leaderboard, main_layout[1]);

    let help = Line::from(vec![
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), main_layout[2]);
}

/// Points ranking and driver counts side by side.
pub fn draw_charts(frame: &mut Frame, leaderboard: &Leaderboard, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Length(1),
            Constraint::Percentage(50),
        ])
        .split(area);

    let by_points = leaderboard.ranked_by_points();
    draw_bar_chart(
        frame,
        chunks[0],
        " Points ranking ",
        &by_points,
        |s| s.points.max(0) as u64,
        THEME.points,
    );

    let by_drives = leaderboard.ranked_by_drives();
    draw_bar_chart(
        frame,
        chunks[2],
        " Times driving ",
        &by_drives,
        |s| s.driver_trips as u64,
        THEME.drives,
    );
}

fn draw_bar_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    entries: &[&PersonStats],
    value: impl Fn(&PersonStats) -> u64,
    color: Color,
) {
    let bars: Vec<Bar> = entries
        .iter()
        .map(|entry| {
            let v = value(entry);
            Bar::default()
                .label(Line::from(entry.person.clone()))
                .value(v)
                .style(Style::default().fg(color))
                .text_value(v.to_string())
        })
        .collect();

    let slots = entries.len().max(1) as u16;
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width / slots).saturating_sub(1).clamp(3, 12);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(title.to_string());

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
