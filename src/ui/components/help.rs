use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const BINDINGS: [(&str, &str); 10] = [
    ("1 / 2 / 3", "Dashboard / Pricing / FAQ"),
    ("Tab", "Next page"),
    ("m / y", "Month or Year analysis"),
    ("← / →", "Switch tab or plan"),
    ("b", "Toggle monthly / yearly billing"),
    ("Enter", "Open selected plan"),
    ("t", "Start free trial"),
    ("↑ / ↓", "Scroll FAQ"),
    ("?", "Toggle this help"),
    ("q / Esc", "Quit"),
];

pub struct HelpPopupComponent {
    pub is_open: bool,
    selected: usize,
}

impl Default for HelpPopupComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpPopupComponent {
    pub fn new() -> Self {
        Self {
            is_open: false,
            selected: 0,
        }
    }

    pub fn open(&mut self) {
        self.is_open = true;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn move_selection(&mut self, delta: i32) {
        let new_selection = (self.selected as i32 + delta)
            .max(0)
            .min((BINDINGS.len() - 1) as i32) as usize;
        self.selected = new_selection;
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if !self.is_open {
            return;
        }

        let popup_area = centered_rect(60, 60, area);
        f.render_widget(Clear, popup_area);

        let popup_block = Block::default()
            .borders(Borders::ALL)
            .title("Key Bindings")
            .border_style(Style::default().fg(Color::Cyan));

        let inner = popup_block.inner(popup_area);
        f.render_widget(popup_block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Bindings list
                Constraint::Length(2), // Help text
            ])
            .split(inner);

        let items: Vec<ListItem> = BINDINGS
            .iter()
            .enumerate()
            .map(|(i, (keys, action))| {
                let line = format!("{:<12}{}", keys, action);
                if i == self.selected {
                    ListItem::new(format!("▶ {}", line)).style(Style::default().fg(Color::Cyan))
                } else {
                    ListItem::new(format!("  {}", line))
                }
            })
            .collect();
        f.render_widget(List::new(items), chunks[0]);

        let help = Paragraph::new("↑/↓: Navigate  Esc/?: Close")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::TOP));
        f.render_widget(help, chunks[1]);
    }
}

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_is_clamped() {
        let mut help = HelpPopupComponent::new();
        help.open();
        help.move_selection(-3);
        assert_eq!(help.selected, 0);
        help.move_selection(100);
        assert_eq!(help.selected, BINDINGS.len() - 1);
        help.close();
        assert!(!help.is_open);
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 60, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 24);
        assert!(popup.x >= 20 && popup.y >= 8);
    }
}
