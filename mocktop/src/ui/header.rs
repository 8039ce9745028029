//! Top header with the dashboard title and mock-instance badge.

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect) {
    let title =
        "mocktop — MOCK_INSTANCE_01: ONLINE | every value simulated  (press 'q' to quit)";
    f.render_widget(Block::default().title(title).borders(Borders::BOTTOM), area);
}
