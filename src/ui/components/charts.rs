use crate::savings::{MonthlyRecord, MonthlyTripCount};
use crate::ui::theme;
use crate::utils::{format_compact, format_currency};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap,
    },
    Frame,
};

/// Toll and fuel side by side for every month
pub fn render_breakdown(f: &mut Frame, area: Rect, records: &[MonthlyRecord]) {
    let title = Line::from(vec![
        Span::raw("Savings Breakdown  "),
        Span::styled("■ Toll", Style::default().fg(theme::TOLL)),
        Span::raw(" "),
        Span::styled("■ Fuel", Style::default().fg(theme::FUEL)),
    ]);
    let block = Block::default().borders(Borders::ALL).title(title);

    if records.is_empty() {
        f.render_widget(empty_notice("No savings recorded yet").block(block), area);
        return;
    }

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(5)
        .bar_gap(1)
        .group_gap(2)
        .value_style(Style::default().add_modifier(Modifier::BOLD));

    for record in records {
        let group = BarGroup::default()
            .label(Line::from(record.month.clone()))
            .bars(&[
                Bar::default()
                    .value(record.toll_saved.round() as u64)
                    .text_value(format_compact(record.toll_saved))
                    .style(Style::default().fg(theme::TOLL)),
                Bar::default()
                    .value(record.fuel_saved.round() as u64)
                    .text_value(format_compact(record.fuel_saved))
                    .style(Style::default().fg(theme::FUEL)),
            ]);
        chart = chart.data(group);
    }

    f.render_widget(chart, area);
}

/// Trips per month as a line
pub fn render_trips(f: &mut Frame, area: Rect, trips: &[MonthlyTripCount]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Travel Frequency");

    if trips.is_empty() {
        f.render_widget(empty_notice("No trips recorded yet").block(block), area);
        return;
    }

    let points: Vec<(f64, f64)> = trips
        .iter()
        .enumerate()
        .map(|(i, t)| (i as f64, t.trips as f64))
        .collect();
    let max_trips = trips.iter().map(|t| t.trips).max().unwrap_or(0).max(1) as f64;
    let y_top = (max_trips * 1.2).ceil();

    let x_labels: Vec<Span> = trips.iter().map(|t| Span::raw(t.month.clone())).collect();
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{:.0}", y_top / 2.0)),
        Span::raw(format!("{:.0}", y_top)),
    ];

    let dataset = Dataset::default()
        .name("Number of Trips")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme::TRIPS))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(theme::MUTED))
                .bounds([0.0, (trips.len().max(2) - 1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(theme::MUTED))
                .bounds([0.0, y_top])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

/// Year tab: annual rollups are not collected yet, show the running total instead
pub fn render_year(f: &mut Frame, area: Rect, total_saved: f64, currency: &str) {
    let text = vec![
        Line::styled(
            "Yearly data will be shown here with expanded view",
            Style::default().fg(theme::MUTED),
        ),
        Line::raw(""),
        Line::from(vec![
            Span::raw("Saved so far: "),
            Span::styled(
                format_currency(currency, total_saved),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(""),
        Line::styled(
            "Historical yearly data will appear here",
            Style::default().fg(theme::MUTED),
        ),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Annual Savings View"),
        );
    f.render_widget(paragraph, area);
}

fn empty_notice(message: &str) -> Paragraph<'_> {
    Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme::MUTED))
}
