//! Memory gauge against the fixed dashboard total.

use mocktop_sim::DashboardSnapshot;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge},
};

use crate::ui::theme::ACCENT_PURPLE;

// The mock machine advertises a fixed 16 GB total
pub const TOTAL_MEMORY_GB: f64 = 16.0;

pub fn draw_mem(f: &mut ratatui::Frame<'_>, area: Rect, s: &DashboardSnapshot) {
    let pct = ((s.memory_gb / TOTAL_MEMORY_GB) * 100.0).round() as u16;

    let g = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Memory"))
        .gauge_style(Style::default().fg(ACCENT_PURPLE))
        .percent(pct.min(100))
        .label(format!("{:.1} GB / {:.0} GB", s.memory_gb, TOTAL_MEMORY_GB));
    f.render_widget(g, area);
}
