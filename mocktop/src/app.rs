//! App state and main loop: input handling, applying published snapshots,
//! and drawing the dashboard cards.

use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mocktop_sim::{DashboardFeed, DashboardSnapshot, MetricsSimulator, METRICS_PERIOD};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::info;

use crate::history::BoundedSeries;
use crate::ui::{
    actions::draw_actions, clock::draw_clock, cpu::draw_cpu, header::draw_header, mem::draw_mem,
    net::draw_net, processes::draw_processes,
};

const NET_HISTORY_CAP: usize = 120;

pub struct App {
    // Feed handle plus our subscription to its publishes
    feed: DashboardFeed,
    updates: watch::Receiver<DashboardSnapshot>,
    snapshot: DashboardSnapshot,

    // Mbps readings for the network sparkline, one per metrics tick
    net_hist: BoundedSeries,
    last_net_sample: Instant,

    // Quit flag
    should_quit: bool,
}

impl App {
    pub fn new(simulator: MetricsSimulator) -> Self {
        let feed = DashboardFeed::spawn(simulator);
        let updates = feed.subscribe();
        let snapshot = updates.borrow().clone();
        let mut net_hist = BoundedSeries::new(NET_HISTORY_CAP);
        net_hist.push(u64::from(snapshot.network_mbps));
        Self {
            feed,
            updates,
            snapshot,
            net_hist,
            last_net_sample: Instant::now(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        info!("Dashboard TUI starting.");

        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Main loop
        let res = self.event_loop(&mut terminal).await;

        // Teardown: tickers stop before the terminal is released
        self.feed.stop();
        disable_raw_mode()?;
        let backend = terminal.backend_mut();
        execute!(backend, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        info!("Dashboard TUI stopped.");
        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> anyhow::Result<()> {
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                if let Event::Key(k) = event::read()? {
                    if matches!(k.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
                        self.should_quit = true;
                    }
                }
            }
            if self.should_quit {
                break;
            }

            // Apply the latest publish, if any
            if self.updates.has_changed()? {
                let snapshot = self.updates.borrow_and_update().clone();
                self.apply_snapshot(snapshot);
            }

            // Draw
            terminal.draw(|f| self.draw(f))?;

            // Tick rate
            sleep(Duration::from_millis(250)).await;
        }

        Ok(())
    }

    fn apply_snapshot(&mut self, snapshot: DashboardSnapshot) {
        // The clock publishes every second; only record a sparkline point
        // once per metrics period
        if self.last_net_sample.elapsed() >= METRICS_PERIOD {
            self.net_hist.push(u64::from(snapshot.network_mbps));
            self.last_net_sample = Instant::now();
        }
        self.snapshot = snapshot;
    }

    pub fn draw(&self, f: &mut ratatui::Frame<'_>) {
        let area = f.area();

        // Root rows: header, gauge cards, bottom panels
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Length(6), // cpu + memory + clock cards
                Constraint::Min(9),    // processes + network + quick actions
            ])
            .split(area);

        draw_header(f, rows[0]);

        // Card row: CPU takes half, memory and clock split the rest
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(50),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(rows[1]);
        draw_cpu(f, cards[0], &self.snapshot);
        draw_mem(f, cards[1], &self.snapshot);
        draw_clock(f, cards[2], &self.snapshot);

        // Bottom row: process table, network sparkline, action buttons
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(50),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(rows[2]);
        draw_processes(f, bottom[0]);
        draw_net(f, bottom[1], &self.snapshot, &self.net_hist);
        draw_actions(f, bottom[2]);
    }
}
