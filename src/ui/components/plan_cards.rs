use crate::pricing::view::{TRIAL_BUTTON, TRIAL_HEADLINE, TRIAL_PITCH, YEARLY_HINT};
use crate::pricing::{BillingCycle, PricingPage};
use crate::ui::theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

/// Billing toggle, plan cards and the trial banner
pub fn render(f: &mut Frame, area: Rect, page: &PricingPage, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Billing toggle
            Constraint::Min(12),   // Plans
            Constraint::Length(4), // Trial banner
        ])
        .split(area);

    render_toggle(f, chunks[0], page.cycle());
    render_plans(f, chunks[1], page, selected);
    render_trial(f, chunks[2], page);
}

fn render_toggle(f: &mut Frame, area: Rect, cycle: BillingCycle) {
    let titles = vec![
        Line::raw("Monthly"),
        Line::from(vec![
            Span::raw("Yearly "),
            Span::styled(YEARLY_HINT, Style::default().fg(Color::Green)),
        ]),
    ];
    let selected = match cycle {
        BillingCycle::Monthly => 0,
        BillingCycle::Yearly => 1,
    };
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL).title("Billing (b)"))
        .highlight_style(
            Style::default()
                .fg(theme::BRAND)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );
    f.render_widget(tabs, area);
}

fn render_plans(f: &mut Frame, area: Rect, page: &PricingPage, selected: usize) {
    let views = page.views();
    let constraints: Vec<Constraint> = views
        .iter()
        .map(|_| Constraint::Ratio(1, views.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, (view, chunk)) in views.iter().zip(chunks.iter()).enumerate() {
        let mut lines = vec![Line::styled(
            view.price_line(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(discount) = view.discount {
            lines.push(Line::styled(discount, Style::default().fg(Color::Green)));
        }
        lines.push(Line::styled(
            view.plan.description,
            Style::default().fg(theme::MUTED),
        ));
        lines.push(Line::raw(""));
        for feature in view.plan.features {
            lines.push(Line::from(vec![
                Span::styled("✓ ", Style::default().fg(theme::BRAND)),
                Span::raw(*feature),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("[ {} → ]", view.plan.button_text),
            if view.plan.popular {
                Style::default().fg(Color::White).bg(theme::BRAND)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            },
        ));

        let border_style = if i == selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else if view.plan.popular {
            Style::default().fg(theme::BRAND)
        } else {
            Style::default().fg(theme::MUTED)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(view.name)
            .border_style(border_style);
        if let Some(tag) = view.popular_tag() {
            block = block.title(
                Line::styled(
                    format!(" {} ", tag),
                    Style::default().fg(Color::White).bg(theme::BRAND),
                )
                .right_aligned(),
            );
        }

        let card = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(card, *chunk);
    }
}

fn render_trial(f: &mut Frame, area: Rect, page: &PricingPage) {
    let text = vec![
        Line::styled(TRIAL_PITCH, Style::default().fg(Color::White)),
        Line::styled(
            format!("[ {} (t) → {} ]", TRIAL_BUTTON, page.trial_route().path()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    let banner = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(TRIAL_HEADLINE)
            .border_style(Style::default().fg(theme::BRAND)),
    );
    f.render_widget(banner, area);
}
