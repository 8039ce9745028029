//! Fixed "active processes" table. Pure display decoration: the rows
//! never change and nothing enumerates real processes.

use ratatui::{
    layout::Constraint,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::ui::theme::TEXT_DIM;

const PROCESSES: [(&str, u8, &str); 7] = [
    ("VS Code", 12, "1.2GB"),
    ("Vite Dev Server", 5, "256MB"),
    ("Docker Desktop", 8, "2.4GB"),
    ("Discord", 2, "440MB"),
    ("Firefox", 15, "1.8GB"),
    ("Terminal (WSL)", 1, "80MB"),
    ("Spotify", 3, "300MB"),
];

const COLS: [Constraint; 3] = [
    Constraint::Percentage(60), // Name
    Constraint::Length(8),      // CPU %
    Constraint::Length(10),     // Mem
];

pub fn draw_processes(f: &mut ratatui::Frame<'_>, area: Rect) {
    let header = Row::new(vec!["Name", "CPU %", "Mem"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows = PROCESSES.iter().map(|&(name, cpu, mem)| {
        let cpu_fg = match cpu {
            x if x < 5 => Color::Green,
            x if x < 10 => Color::Yellow,
            _ => Color::Red,
        };
        Row::new(vec![
            Cell::from(name),
            Cell::from(format!("{cpu}%")).style(Style::default().fg(cpu_fg)),
            Cell::from(mem).style(Style::default().fg(TEXT_DIM)),
        ])
    });

    let table = Table::new(rows, COLS.to_vec())
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Active Processes ({})", PROCESSES.len())),
        );
    f.render_widget(table, area);
}
