use crate::savings::{evaluate_tiers, REWARD_TIERS};
use crate::ui::theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One card per reward tier, lit in the tier's accent once unlocked
pub fn render(f: &mut Frame, area: Rect, total_saved: f64, currency: &str) {
    let outer = Block::default().borders(Borders::ALL).title("Earned Rewards");
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let statuses = evaluate_tiers(total_saved, &REWARD_TIERS);
    let constraints: Vec<Constraint> = statuses
        .iter()
        .map(|_| Constraint::Ratio(1, statuses.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (status, chunk) in statuses.iter().zip(chunks.iter()) {
        let tier = status.tier;
        let (border, title_style, state_line) = match status.progress_with(currency) {
            None => {
                let colour = theme::accent(tier.accent);
                (
                    colour,
                    Style::default().fg(colour).add_modifier(Modifier::BOLD),
                    Line::styled(
                        "Unlocked!",
                        Style::default().fg(colour).add_modifier(Modifier::BOLD),
                    ),
                )
            }
            Some(progress) => (
                theme::MUTED,
                Style::default().fg(theme::LOCKED),
                Line::styled(
                    format!("{} ({:.0}%)", progress, status.ratio() * 100.0),
                    Style::default().fg(theme::MUTED),
                ),
            ),
        };

        let body = vec![
            Line::styled(format!("{} {}", tier.icon, tier.title), title_style),
            Line::styled(tier.caption, Style::default().fg(theme::MUTED)),
            state_line,
        ];
        let card = Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        f.render_widget(card, *chunk);
    }
}
