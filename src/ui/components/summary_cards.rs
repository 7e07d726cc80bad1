use crate::savings::SavingsSummary;
use crate::ui::theme;
use crate::utils::{format_currency, format_hours};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Time, toll and fuel cards across the top of the dashboard
pub fn render(f: &mut Frame, area: Rect, summary: &SavingsSummary, currency: &str) {
    let cards = [
        (
            "Time Saved",
            format_hours(summary.total_time_saved),
            "Compared to longest routes",
        ),
        (
            "Toll Saved",
            format_currency(currency, summary.total_toll_saved),
            "From optimal route selection",
        ),
        (
            "Fuel Saved",
            format_currency(currency, summary.total_fuel_saved),
            "Based on current diesel prices",
        ),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for ((title, value, caption), chunk) in cards.into_iter().zip(chunks.iter()) {
        let body = vec![
            Line::styled(value, Style::default().add_modifier(Modifier::BOLD)),
            Line::styled(caption, Style::default().fg(theme::MUTED)),
        ];
        let card = Paragraph::new(body).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(theme::MUTED)),
        );
        f.render_widget(card, *chunk);
    }
}
