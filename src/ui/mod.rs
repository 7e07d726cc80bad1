pub mod app;
pub mod components;
pub mod theme;

pub use app::{AnalysisTab, App, Page};

use crate::savings::summarize;
use components::{charts, faq, plan_cards, rewards, summary_cards};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame, Terminal,
};
use std::io;

/// Run the interactive dashboard until the user quits
pub fn run_dashboard(app: App) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, app);

    // Every restore step runs; the first failure is reported
    let restored = [
        disable_raw_mode(),
        execute!(terminal.backend_mut(), LeaveAlternateScreen),
        terminal.show_cursor(),
    ];

    result?;
    first_error(restored)?;
    Ok(())
}

fn first_error(steps: [io::Result<()>; 3]) -> io::Result<()> {
    steps.into_iter().collect()
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<(), Box<dyn std::error::Error>> {
    while !app.should_quit {
        terminal.draw(|f| draw(f, &app))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }
    }
    Ok(())
}

/// Draw one frame. Totals are recomputed from the dataset every time.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Page tabs
            Constraint::Min(10),   // Page body
            Constraint::Length(1), // Status line
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    match app.page {
        Page::Dashboard => render_dashboard(f, chunks[1], app),
        Page::Pricing => plan_cards::render(f, chunks[1], &app.pricing, app.selected_plan),
        Page::Faq => faq::render(f, chunks[1], app.faq_scroll),
    }
    render_status(f, chunks[2], app);

    app.help.render(f, f.area());
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| Line::raw(format!("{} {}", i + 1, page.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.page.index())
        .block(Block::default().borders(Borders::ALL).title("Last Mile"))
        .highlight_style(
            Style::default()
                .fg(theme::BRAND)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let summary = summarize(&app.dataset.records);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Summary cards
            Constraint::Length(3), // Month / Year tabs
            Constraint::Min(10),   // Charts
            Constraint::Length(7), // Rewards
        ])
        .split(area);

    summary_cards::render(f, chunks[0], &summary, &app.currency);

    let selected = match app.tab {
        AnalysisTab::Month => 0,
        AnalysisTab::Year => 1,
    };
    let tabs = Tabs::new(vec!["Month", "Year"])
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Savings Analysis"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED));
    f.render_widget(tabs, chunks[1]);

    match app.tab {
        AnalysisTab::Month => {
            let charts_area = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(chunks[2]);
            charts::render_breakdown(f, charts_area[0], &app.dataset.records);
            charts::render_trips(f, charts_area[1], &app.dataset.trips);
        }
        AnalysisTab::Year => {
            charts::render_year(f, chunks[2], summary.total_saved, &app.currency);
        }
    }

    rewards::render(f, chunks[3], summary.total_saved, &app.currency);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status {
        Some(message) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(theme::BRAND).add_modifier(Modifier::BOLD),
        )),
        None => Line::styled(
            "1/2/3: Pages  Tab: Next  ?: Help  q: Quit",
            Style::default().fg(theme::MUTED),
        ),
    };
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::BillingCycle;
    use crate::savings::sample::sample_dataset;
    use crate::savings::SavingsDataset;
    use crossterm::event::KeyCode;
    use ratatui::backend::TestBackend;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 48)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let mut out = String::new();
        for row in buffer.content.chunks(width) {
            for cell in row {
                out.push_str(cell.symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_restore_reports_first_failure() {
        assert!(first_error([Ok(()), Ok(()), Ok(())]).is_ok());

        let err = first_error([
            Ok(()),
            Err(io::Error::new(io::ErrorKind::Other, "leave screen")),
            Err(io::Error::new(io::ErrorKind::Other, "show cursor")),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "leave screen");
    }

    #[test]
    fn test_dashboard_screen() {
        let app = App::new(sample_dataset(), "₹", BillingCycle::Monthly);
        let out = screen(&app);
        assert!(out.contains("40 hours"));
        assert!(out.contains("₹9,000"));
        assert!(out.contains("₹12,500"));
        assert!(out.contains("Savings Breakdown"));
        assert!(out.contains("Travel Frequency"));
        assert!(out.contains("Unlocked!"));
        assert!(out.contains("₹21,500 / ₹50,000"));
    }

    #[test]
    fn test_year_tab_screen() {
        let mut app = App::new(sample_dataset(), "₹", BillingCycle::Monthly);
        app.handle_key(KeyCode::Char('y'));
        let out = screen(&app);
        assert!(out.contains("Annual Savings View"));
        assert!(out.contains("Saved so far: ₹21,500"));
        assert!(!out.contains("Travel Frequency"));
    }

    #[test]
    fn test_empty_dataset_screen() {
        let app = App::new(SavingsDataset::default(), "₹", BillingCycle::Monthly);
        let out = screen(&app);
        assert!(out.contains("0 hours"));
        assert!(out.contains("No savings recorded yet"));
        assert!(!out.contains("Unlocked!"));
    }

    #[test]
    fn test_pricing_screen_follows_toggle() {
        let mut app =
            App::new(sample_dataset(), "₹", BillingCycle::Monthly).with_page(Page::Pricing);
        let monthly = screen(&app);
        assert!(monthly.contains("₹9,999/month"));
        assert!(monthly.contains("Most Popular"));
        assert!(!monthly.contains("₹19,998 savings"));

        app.handle_key(KeyCode::Char('b'));
        let yearly = screen(&app);
        assert!(yearly.contains("₹99,990/year"));
        assert!(yearly.contains("₹19,998 savings"));
        assert!(!yearly.contains("Custom/year"));

        app.handle_key(KeyCode::Char('b'));
        assert_eq!(screen(&app), monthly);
    }

    #[test]
    fn test_faq_and_help_screens() {
        let mut app = App::new(sample_dataset(), "₹", BillingCycle::Monthly).with_page(Page::Faq);
        assert!(screen(&app).contains("How accurate is your traffic data?"));

        app.handle_key(KeyCode::Char('?'));
        assert!(screen(&app).contains("Key Bindings"));
    }
}
