use crate::pricing::view::TRIAL_BUTTON;
use crate::pricing::{plans, BillingCycle, PricingPage};
use crate::savings::SavingsDataset;
use crate::ui::components::help::HelpPopupComponent;
use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Pricing,
    Faq,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Pricing, Page::Faq];

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Pricing => "Pricing",
            Page::Faq => "FAQ",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Page::Dashboard => 0,
            Page::Pricing => 1,
            Page::Faq => 2,
        }
    }

    fn next(self) -> Self {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }
}

/// Savings analysis tabs on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisTab {
    Month,
    Year,
}

pub struct App {
    pub dataset: SavingsDataset,
    pub currency: String,
    pub page: Page,
    pub tab: AnalysisTab,
    pub pricing: PricingPage,
    pub selected_plan: usize,
    pub faq_scroll: u16,
    pub status: Option<String>,
    pub help: HelpPopupComponent,
    pub should_quit: bool,
}

impl App {
    pub fn new(dataset: SavingsDataset, currency: &str, billing: BillingCycle) -> Self {
        Self {
            dataset,
            currency: currency.to_string(),
            page: Page::Dashboard,
            tab: AnalysisTab::Month,
            pricing: PricingPage::new(billing),
            selected_plan: 0,
            faq_scroll: 0,
            status: None,
            help: HelpPopupComponent::new(),
            should_quit: false,
        }
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        if self.help.is_open {
            match code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => self.help.close(),
                KeyCode::Up => self.help.move_selection(-1),
                KeyCode::Down => self.help.move_selection(1),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.help.open(),
            KeyCode::Tab => self.set_page(self.page.next()),
            KeyCode::Char('1') => self.set_page(Page::Dashboard),
            KeyCode::Char('2') => self.set_page(Page::Pricing),
            KeyCode::Char('3') => self.set_page(Page::Faq),
            _ => match self.page {
                Page::Dashboard => self.handle_dashboard_key(code),
                Page::Pricing => self.handle_pricing_key(code),
                Page::Faq => self.handle_faq_key(code),
            },
        }
    }

    fn set_page(&mut self, page: Page) {
        self.page = page;
        self.status = None;
    }

    fn handle_dashboard_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('m') | KeyCode::Left => self.tab = AnalysisTab::Month,
            KeyCode::Char('y') | KeyCode::Right => self.tab = AnalysisTab::Year,
            _ => {}
        }
    }

    fn handle_pricing_key(&mut self, code: KeyCode) {
        let last = plans().len().saturating_sub(1);
        match code {
            KeyCode::Char('b') => {
                self.pricing.toggle();
                self.status = None;
            }
            KeyCode::Left | KeyCode::Up => {
                self.selected_plan = self.selected_plan.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Down => {
                self.selected_plan = (self.selected_plan + 1).min(last);
            }
            KeyCode::Enter => {
                if let Some(plan) = plans().get(self.selected_plan) {
                    self.status = Some(format!(
                        "{} → {}",
                        plan.button_text,
                        plan.cta_route().path()
                    ));
                }
            }
            KeyCode::Char('t') => {
                self.status = Some(format!(
                    "{} → {}",
                    TRIAL_BUTTON,
                    self.pricing.trial_route().path()
                ));
            }
            _ => {}
        }
    }

    fn handle_faq_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.faq_scroll = self.faq_scroll.saturating_sub(1),
            KeyCode::Down => self.faq_scroll = self.faq_scroll.saturating_add(1),
            KeyCode::Home => self.faq_scroll = 0,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::savings::sample::sample_dataset;

    fn app() -> App {
        App::new(sample_dataset(), "₹", BillingCycle::Monthly)
    }

    #[test]
    fn test_page_navigation() {
        let mut app = app();
        assert_eq!(app.page, Page::Dashboard);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.page, Page::Pricing);
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.page, Page::Dashboard);
        app.handle_key(KeyCode::Char('3'));
        assert_eq!(app.page, Page::Faq);
    }

    #[test]
    fn test_analysis_tabs() {
        let mut app = app();
        app.handle_key(KeyCode::Char('y'));
        assert_eq!(app.tab, AnalysisTab::Year);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.tab, AnalysisTab::Month);
    }

    #[test]
    fn test_billing_toggle_is_idempotent() {
        let mut app = app().with_page(Page::Pricing);
        let before = app.pricing.views();
        app.handle_key(KeyCode::Char('b'));
        assert_eq!(app.pricing.cycle(), BillingCycle::Yearly);
        app.handle_key(KeyCode::Char('b'));
        assert_eq!(app.pricing.views(), before);
    }

    #[test]
    fn test_plan_cta_navigation() {
        let mut app = app().with_page(Page::Pricing);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.status.as_deref(), Some("Get Started → /auth"));

        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.selected_plan, 2);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.status.as_deref(), Some("Contact Sales → /contact"));

        app.handle_key(KeyCode::Char('t'));
        assert_eq!(app.status.as_deref(), Some("Start Free Trial → /auth"));
    }

    #[test]
    fn test_help_captures_keys_until_closed() {
        let mut app = app();
        app.handle_key(KeyCode::Char('?'));
        assert!(app.help.is_open);
        app.handle_key(KeyCode::Char('q'));
        assert!(!app.help.is_open);
        assert!(!app.should_quit);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_faq_scroll_saturates() {
        let mut app = app().with_page(Page::Faq);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.faq_scroll, 0);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.faq_scroll, 2);
        app.handle_key(KeyCode::Home);
        assert_eq!(app.faq_scroll, 0);
    }
}
