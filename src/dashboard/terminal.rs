// Ratatui rendering of a dashboard frame, and the crossterm session the binary draws into

use std::io::{self, Stdout};

use chrono::Local;
use crossterm::cursor::Show;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, Gauge, GraphType,
        Paragraph,
    },
};

use super::format::format_bytes_rate;
use super::poller::Dashboard;
use super::views::{BarView, GaugeView, RateLineView};

const COLOR_CPU: Color = Color::Green;
const COLOR_MEMORY: Color = Color::Magenta;
const COLOR_RX: Color = Color::Cyan;
const COLOR_TX: Color = Color::Yellow;
const COLOR_DIM: Color = Color::DarkGray;

/// Tallest the disk panel grows before mounts are cut off.
const MAX_DISK_ROWS: usize = 10;

// ============================================================================
// Terminal session
// ============================================================================

/// Restores cooked mode and the main screen when dropped.
struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

/// Raw mode + alternate screen for as long as the session lives.
pub struct DashboardTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: RawModeGuard,
}

impl DashboardTerminal {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = RawModeGuard;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        Ok(Self {
            terminal,
            _guard: guard,
        })
    }

    pub fn draw(&mut self, dashboard: &Dashboard) -> io::Result<()> {
        self.terminal.draw(|frame| render(frame, dashboard))?;
        Ok(())
    }
}

/// `q`, `Esc` or Ctrl+C. Raw mode swallows SIGINT, so Ctrl+C arrives as a key.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ============================================================================
// Frame
// ============================================================================

pub fn render(frame: &mut Frame, dashboard: &Dashboard) {
    let disk_rows = dashboard.disk.labels().len().clamp(1, MAX_DISK_ROWS) as u16;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // last updated
            Constraint::Length(3),             // cpu + memory gauges
            Constraint::Length(disk_rows + 2), // disk bars
            Constraint::Min(6),                // network chart
        ])
        .split(frame.area());

    render_header(frame, rows[0], dashboard);

    let gauges = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    render_gauge(frame, gauges[0], &dashboard.cpu, COLOR_CPU);
    render_gauge(frame, gauges[1], &dashboard.memory, COLOR_MEMORY);

    render_disk(frame, rows[2], &dashboard.disk);
    render_network(frame, rows[3], &dashboard.network);
}

/// `Last updated: HH:MM:SS` (local time), or a placeholder before the first snapshot.
pub fn last_updated_line(dashboard: &Dashboard) -> String {
    match dashboard.last_updated {
        Some(ts) => format!(
            "Last updated: {}",
            ts.with_timezone(&Local).format("%H:%M:%S")
        ),
        None => "Waiting for first snapshot...".to_string(),
    }
}

/// Gauge fill for a 0-100 value. Out-of-range input is clamped for drawing only.
pub fn gauge_ratio(percent: f64) -> f64 {
    if percent.is_finite() {
        (percent / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn panel(title: impl Into<Line<'static>>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_DIM))
        .title(title)
}

fn render_header(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let line = Line::from(vec![
        Span::styled(
            last_updated_line(dashboard),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("   q: quit", Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_gauge(frame: &mut Frame, area: Rect, view: &GaugeView, color: Color) {
    let slices = view.slices();
    let (used_label, free_label) = view.labels();
    let label = format!(
        "{:.1}% {} / {:.1}% {}",
        slices.used,
        used_label.to_lowercase(),
        slices.free,
        free_label.to_lowercase(),
    );
    let gauge = Gauge::default()
        .block(panel(view.title()))
        .gauge_style(Style::default().fg(color))
        .ratio(gauge_ratio(slices.used))
        .label(label);
    frame.render_widget(gauge, area);
}

fn render_disk(frame: &mut Frame, area: Rect, view: &BarView) {
    let block = panel("Disk");
    if view.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            "(no mounts)",
            Style::default().fg(COLOR_DIM),
        ));
        frame.render_widget(placeholder.block(block), area);
        return;
    }

    let bars: Vec<Bar> = view
        .labels()
        .iter()
        .zip(view.values())
        .map(|(mount, percent)| {
            Bar::default()
                .label(Line::from(mount.clone()))
                .value((gauge_ratio(*percent) * 100.0).round() as u64)
                .text_value(format!("{:.0}%", percent))
                .style(Style::default().fg(disk_color(*percent)))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .max(100)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

fn disk_color(percent: f64) -> Color {
    if percent >= 90.0 {
        Color::Red
    } else if percent >= 75.0 {
        Color::Yellow
    } else {
        Color::Blue
    }
}

fn render_network(frame: &mut Frame, area: Rect, view: &RateLineView) {
    let title = match (view.rx().latest(), view.tx().latest()) {
        (Some(rx), Some(tx)) => format!(
            "Network  RX {}  TX {}",
            format_bytes_rate(*rx),
            format_bytes_rate(*tx)
        ),
        _ => "Network".to_string(),
    };
    let block = panel(title);
    if view.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            "(collecting...)",
            Style::default().fg(COLOR_DIM),
        ));
        frame.render_widget(placeholder.block(block), area);
        return;
    }

    let rx: Vec<(f64, f64)> = series(view.rx().iter());
    let tx: Vec<(f64, f64)> = series(view.tx().iter());
    let peak = rx
        .iter()
        .chain(tx.iter())
        .map(|(_, v)| *v)
        .fold(0.0, f64::max);
    let y_max = if peak > 0.0 { peak * 1.1 } else { 1.0 };
    let x_max = view.labels().capacity().saturating_sub(1).max(1) as f64;

    let x_labels: Vec<String> = [view.labels().oldest(), view.labels().latest()]
        .into_iter()
        .flatten()
        .cloned()
        .collect();
    let y_labels = vec![
        format_bytes_rate(0.0),
        format_bytes_rate(y_max / 2.0),
        format_bytes_rate(y_max),
    ];

    let datasets = vec![
        Dataset::default()
            .name("RX")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(COLOR_RX))
            .data(&rx),
        Dataset::default()
            .name("TX")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(COLOR_TX))
            .data(&tx),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(COLOR_DIM))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(COLOR_DIM))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}

/// `(index, value)` pairs, oldest at x = 0.
fn series<'a>(values: impl Iterator<Item = &'a f64>) -> Vec<(f64, f64)> {
    values.enumerate().map(|(i, v)| (i as f64, *v)).collect()
}
