//! System time card: clock readout plus long-form date.

use mocktop_sim::DashboardSnapshot;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::{ACCENT_EMERALD, TEXT_DIM};

pub fn draw_clock(f: &mut ratatui::Frame<'_>, area: Rect, s: &DashboardSnapshot) {
    let time = s.current_time.format("%H:%M:%S").to_string();
    let date = s.current_time.format("%A, %B %e, %Y").to_string();

    let lines = vec![
        Line::styled(
            time,
            Style::default()
                .fg(ACCENT_EMERALD)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(date, Style::default().fg(TEXT_DIM)),
    ];
    let p = Paragraph::new(lines)
        .centered()
        .block(Block::default().borders(Borders::ALL).title("System Time"));
    f.render_widget(p, area);
}
