//! Network sparkline with the current simulated throughput.

use mocktop_sim::sim::NETWORK_MBPS_RANGE;
use mocktop_sim::DashboardSnapshot;
use rand::Rng;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Sparkline},
};

use crate::history::BoundedSeries;
use crate::ui::theme::{ACCENT_EMERALD, TEXT_DIM};

pub fn draw_net(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    s: &DashboardSnapshot,
    hist: &BoundedSeries,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Network (Mbps) — now: {}", s.network_mbps));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let data = hist.tail(inner.width as usize);
    let spark = Sparkline::default()
        .data(&data)
        .max(u64::from(NETWORK_MBPS_RANGE.1))
        .style(Style::default().fg(ACCENT_EMERALD));
    if inner.height < 2 {
        f.render_widget(spark, inner);
        return;
    }
    f.render_widget(
        spark,
        Rect {
            height: inner.height - 1,
            ..inner
        },
    );

    // Caption on the card's last line; the latency re-rolls every draw
    let caption = Paragraph::new(connection_caption(roll_latency_ms(&mut rand::rng())))
        .style(Style::default().fg(TEXT_DIM));
    f.render_widget(
        caption,
        Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        },
    );
}

fn roll_latency_ms<R: Rng>(rng: &mut R) -> u32 {
    (rng.random::<f64>() * 50.0) as u32
}

fn connection_caption(latency_ms: u32) -> String {
    format!("Fiber Connection - Stable ({latency_ms}ms latency)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_reports_the_rolled_latency() {
        assert_eq!(
            connection_caption(12),
            "Fiber Connection - Stable (12ms latency)"
        );
        assert_eq!(
            connection_caption(0),
            "Fiber Connection - Stable (0ms latency)"
        );
    }

    #[test]
    fn latency_rolls_stay_under_fifty_ms() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            assert!(roll_latency_ms(&mut rng) < 50);
        }
    }
}
