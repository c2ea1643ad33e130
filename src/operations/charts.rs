use crate::analytics::{
    self, CHART_MONTH_WINDOW, MonthlyTotals, category_breakdown,
};
use crate::models::transaction::{Transaction, TransactionKind};
use crate::operations::list::format_currency;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::{Alignment, Color, Constraint, Direction, Layout, Rect, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use ratatui::widgets::canvas::{Canvas, Points};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::HashMap;
use std::io;

const INCOME_COLOR: Color = Color::Green;
const EXPENSE_COLOR: Color = Color::Red;

pub fn run_charts(transactions: &[Transaction]) -> Result<(), String> {
    let data = build_chart_data(transactions);
    render_charts(&data)
}

struct ChartData {
    months: Vec<(String, MonthlyTotals)>,
    category_totals: Vec<(String, Decimal)>,
    category_colors: HashMap<String, Color>,
    total_spend: Decimal,
}

fn build_chart_data(transactions: &[Transaction]) -> ChartData {
    let aggregates = analytics::monthly_aggregates(transactions);
    let months = analytics::recent_months(&aggregates, CHART_MONTH_WINDOW);

    let mut category_totals = category_breakdown(transactions, TransactionKind::Expense);
    category_totals.sort_by(|a, b| b.1.cmp(&a.1));

    let categories: Vec<String> = category_totals.iter().map(|(c, _)| c.clone()).collect();
    let category_colors = assign_colors(&categories);

    let total_spend = category_totals
        .iter()
        .fold(Decimal::ZERO, |acc, (_, v)| acc + *v);

    ChartData {
        months,
        category_totals,
        category_colors,
        total_spend,
    }
}

fn assign_colors(categories: &[String]) -> HashMap<String, Color> {
    let palette = vec![
        Color::Cyan,
        Color::Magenta,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::LightCyan,
        Color::LightMagenta,
        Color::LightYellow,
        Color::LightGreen,
        Color::LightBlue,
    ];

    let mut map = HashMap::new();
    for (idx, category) in categories.iter().enumerate() {
        map.insert(category.clone(), palette[idx % palette.len()]);
    }
    map
}

fn render_charts(data: &ChartData) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("Failed to enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| format!("Failed to enter alternate screen: {}", e))?;

    let result = (|| {
        let backend = ratatui::backend::CrosstermBackend::new(stdout);
        let mut terminal = ratatui::Terminal::new(backend)
            .map_err(|e| format!("Failed to initialize terminal: {}", e))?;

        loop {
            terminal
                .draw(|frame| {
                    let size = frame.area();
                    let layout = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([
                            Constraint::Percentage(60),
                            Constraint::Percentage(40),
                        ])
                        .split(size);

                    render_monthly_bars(frame, layout[0], data);

                    let bottom = Layout::default()
                        .direction(Direction::Horizontal)
                        .constraints([
                            Constraint::Percentage(55),
                            Constraint::Percentage(45),
                        ])
                        .split(layout[1]);

                    render_expense_pie(frame, bottom[0], data);
                    render_category_table(frame, bottom[1], data);
                })
                .map_err(|e| format!("Failed to draw terminal UI: {}", e))?;

            if event::poll(std::time::Duration::from_millis(250))
                .map_err(|e| format!("Failed to poll input: {}", e))?
            {
                match event::read().map_err(|e| format!("Failed to read input: {}", e))? {
                    Event::Key(key) if key.code == KeyCode::Char('q') => break,
                    Event::Key(key) if key.code == KeyCode::Esc => break,
                    Event::Resize(_, _) => continue,
                    _ => {}
                }
            }
        }

        Ok(())
    })();

    disable_raw_mode().map_err(|e| format!("Failed to disable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)
        .map_err(|e| format!("Failed to leave alternate screen: {}", e))?;

    result
}

/// Paired income/expense columns per month, scaled against the largest
/// monthly figure in the window.
fn render_monthly_bars(frame: &mut ratatui::Frame, area: Rect, data: &ChartData) {
    let inner = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(area);

    let block = Block::default()
        .title(Line::from(vec![Span::styled(
            "Pemasukan vs Pengeluaran per bulan  (press q to exit)",
            Style::default().fg(Color::White),
        )]))
        .borders(Borders::ALL);

    let chart_area = block.inner(inner[0]);
    frame.render_widget(block, inner[0]);

    let bar_height = chart_area.height.saturating_sub(1) as usize;
    if bar_height == 0 || data.months.is_empty() {
        let empty = Paragraph::new("Belum ada data").alignment(Alignment::Center);
        frame.render_widget(empty, chart_area);
        return;
    }

    let month_count = data.months.len();
    let slot_width = std::cmp::max(2, chart_area.width as usize / month_count);
    let column_width = std::cmp::max(1, (slot_width - 1) / 2);

    let max_value = data
        .months
        .iter()
        .flat_map(|(_, m)| [m.income, m.expense])
        .map(|v| v.to_f64().unwrap_or(0.0))
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let mut lines: Vec<Line> = Vec::new();

    for row in 0..bar_height {
        let mut spans: Vec<Span> = Vec::new();
        let level = (bar_height - row) as f64;

        for (_, totals) in &data.months {
            let columns = [
                (totals.income, INCOME_COLOR),
                (totals.expense, EXPENSE_COLOR),
            ];
            for (value, color) in columns {
                let value = value.to_f64().unwrap_or(0.0);
                let scaled_height = (value / max_value * bar_height as f64).ceil();
                if value > 0.0 && level <= scaled_height {
                    spans.push(Span::styled(
                        "█".repeat(column_width),
                        Style::default().fg(color),
                    ));
                } else {
                    spans.push(Span::raw(" ".repeat(column_width)));
                }
            }
            spans.push(Span::raw(" ".repeat(slot_width - 2 * column_width)));
        }
        lines.push(Line::from(spans));
    }

    let chart = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(chart, chart_area);

    let labels = build_month_labels(&data.months, slot_width);
    let label_paragraph = Paragraph::new(labels)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(label_paragraph, inner[1]);
}

fn build_month_labels(months: &[(String, MonthlyTotals)], slot_width: usize) -> Vec<Line> {
    if months.is_empty() {
        return vec![Line::from("")];
    }

    let mut spans = Vec::new();
    for (month, _) in months {
        let mut label = month.clone();
        if label.len() > slot_width {
            label.truncate(slot_width);
        }
        spans.push(Span::raw(format!("{:width$}", label, width = slot_width)));
    }

    vec![Line::from(spans)]
}

fn render_expense_pie(frame: &mut ratatui::Frame, area: Rect, data: &ChartData) {
    let block = Block::default()
        .title("Pengeluaran per Kategori")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if data.total_spend <= Decimal::ZERO {
        let empty = Paragraph::new("Belum ada pengeluaran").alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let mut slices = Vec::new();
    let total = data.total_spend.to_f64().unwrap_or(1.0).max(1.0);
    let mut start_angle = 0.0_f64;
    for (category, amount) in &data.category_totals {
        let value = amount.to_f64().unwrap_or(0.0);
        let sweep = value / total * std::f64::consts::TAU;
        slices.push((start_angle, start_angle + sweep, category.clone()));
        start_angle += sweep;
    }

    let canvas = Canvas::default()
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            let step = 0.04;
            for (start, end, category) in &slices {
                let color = data
                    .category_colors
                    .get(category)
                    .copied()
                    .unwrap_or(Color::White);
                let mut points = Vec::new();
                let mut r = 0.0;
                while r <= 1.0 {
                    let mut angle = *start;
                    while angle <= *end {
                        points.push((r * angle.cos(), r * angle.sin()));
                        angle += 0.05;
                    }
                    r += step;
                }
                if !points.is_empty() {
                    ctx.draw(&Points { coords: &points, color });
                }
            }
        });

    frame.render_widget(canvas, inner);
}

fn render_category_table(frame: &mut ratatui::Frame, area: Rect, data: &ChartData) {
    let block = Block::default()
        .title("Total per Kategori")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if data.category_totals.is_empty() {
        let empty = Paragraph::new("Belum ada pengeluaran").alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let mut lines = Vec::new();
    for (category, amount) in &data.category_totals {
        let color = data
            .category_colors
            .get(category)
            .copied()
            .unwrap_or(Color::White);
        let line = Line::from(vec![
            Span::styled(format!("{:20}", category), Style::default().fg(color)),
            Span::raw("  "),
            Span::styled(
                format!("{:>15}", format_currency(*amount)),
                Style::default().fg(color),
            ),
        ]);
        lines.push(line);
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, inner);
}
