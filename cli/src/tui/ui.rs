use carpool_core::{Choice, RecordStore};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::stats::draw_charts;
use crate::theme::{choice_bg, THEME};
use crate::tui::app::{App, Status};

pub fn draw<R: RecordStore>(f: &mut Frame, app: &App<R>) {
    let size = f.area();

    let grid_height = app.session.grid.days().len() as u16 + 4;
    let constraints = if app.show_charts {
        vec![
            Constraint::Length(3),           // Header
            Constraint::Length(grid_height), // Grid
            Constraint::Min(8),              // Charts
            Constraint::Length(1),           // Status
            Constraint::Length(1),           // Help
        ]
    } else {
        vec![
            Constraint::Length(3),
            Constraint::Min(grid_height),
            Constraint::Length(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    let dirty_mark = if app.dirty { "  [unsaved]" } else { "" };
    let header = Paragraph::new(Line::from(vec![
        Span::styled("PLANER DOJAZDÓW", Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD)),
        Span::styled(format!("  week of {}", app.session.week.key), Style::default().fg(THEME.text)),
        Span::styled(dirty_mark, Style::default().fg(Color::Yellow)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, chunks[0]);

    draw_grid(f, app, chunks[1]);

    if app.show_charts {
        draw_charts(f, &app.session.leaderboard, chunks[2]);
    }

    let status = match &app.status {
        Some(Status::Info(msg)) => Span::styled(msg.as_str(), Style::default().fg(THEME.points)),
        Some(Status::Error(msg)) => Span::styled(msg.as_str(), Style::default().fg(THEME.error)),
        None => Span::raw(""),
    };
    f.render_widget(Paragraph::new(status).alignment(Alignment::Center), chunks[3]);

    let footer = Paragraph::new("hjkl/arrows: move | space: cycle | 1-4: set | s: save | r: reload | c: charts | q: quit")
        .style(Style::default().fg(THEME.muted))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[4]);
}

fn draw_grid<R: RecordStore>(f: &mut Frame, app: &App<R>, area: Rect) {
    let grid = &app.session.grid;

    let cell_width = Choice::ALL
        .iter()
        .map(|c| c.token().width())
        .chain(grid.roster().iter().map(|p| p.width()))
        .max()
        .unwrap_or(8) as u16
        + 2;
    let day_width = grid
        .days()
        .iter()
        .map(|d| d.label.width())
        .max()
        .unwrap_or(12) as u16
        + 1;

    let rows: Vec<Row> = grid
        .days()
        .iter()
        .enumerate()
        .map(|(d, day)| {
            let mut cells = vec![Cell::from(Span::styled(day.label.clone(), Style::default().fg(THEME.text)))];
            for (p, choice) in grid.row(d).iter().enumerate() {
                let mut style = Style::default().bg(choice_bg(*choice)).fg(Color::White);
                if d == app.row && p == app.col {
                    style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                }
                cells.push(Cell::from(Span::styled(format!(" {}", choice.token()), style)));
            }
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(day_width)];
    widths.extend(grid.roster().iter().map(|_| Constraint::Length(cell_width)));

    let mut header = vec![Cell::from("Dzień (Data)")];
    header.extend(grid.roster().iter().map(|p| Cell::from(format!(" {}", p))));

    let title = if app.session.degraded { " Sheet (offline) " } else { " Sheet " };
    let table = Table::new(rows, widths)
        .header(Row::new(header).style(Style::default().fg(Color::Yellow)))
        .column_spacing(1)
        .block(Block::default().title(title).borders(Borders::ALL).border_type(BorderType::Rounded));

    f.render_widget(table, area);
}
