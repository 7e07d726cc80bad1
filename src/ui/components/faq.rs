use crate::pricing::faqs;
use crate::ui::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, scroll: u16) {
    let mut lines = vec![
        Line::styled(
            "Find answers to common questions about our platform and pricing",
            Style::default().fg(theme::MUTED),
        ),
        Line::raw(""),
    ];
    for entry in faqs() {
        lines.push(Line::styled(
            entry.question,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::raw(entry.answer));
        lines.push(Line::raw(""));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Frequently Asked Questions"),
        );
    f.render_widget(paragraph, area);
}
