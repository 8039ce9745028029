//! Quick-action buttons. Inert decorations: no key or click is wired
//! to them.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::{ACCENT_BLUE, ACCENT_EMERALD, ACCENT_RED};

pub fn draw_actions(f: &mut ratatui::Frame<'_>, area: Rect) {
    f.render_widget(
        Block::default().borders(Borders::ALL).title("Quick Actions"),
        area,
    );

    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    if inner.height < 3 {
        return;
    }

    let buttons = [
        ("RESTART", ACCENT_BLUE),
        ("SHUTDOWN", ACCENT_RED),
        ("UPDATE PACKAGES", ACCENT_EMERALD),
    ];
    let max_slots = (inner.height / 3).min(buttons.len() as u16) as usize;

    let constraints: Vec<Constraint> = (0..max_slots).map(|_| Constraint::Length(3)).collect();
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (slot, (label, color)) in slots.iter().zip(buttons) {
        let button = Paragraph::new(Line::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .centered()
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(button, *slot);
    }
}
