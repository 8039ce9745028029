//! CPU usage gauge, colored by load.

use mocktop_sim::DashboardSnapshot;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
};

pub fn draw_cpu(f: &mut ratatui::Frame<'_>, area: Rect, s: &DashboardSnapshot) {
    let color = match s.cpu_percent {
        p if p < 25 => Color::Green,
        p if p < 60 => Color::Yellow,
        _ => Color::Red,
    };

    let g = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("CPU Usage"))
        .gauge_style(Style::default().fg(color))
        .percent(u16::from(s.cpu_percent).min(100))
        .label(format!("{}% of available cores", s.cpu_percent));
    f.render_widget(g, area);
}
