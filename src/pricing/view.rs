use super::{plans, BillingCycle, PricingPlan, Route};
use serde::Serialize;

pub const PAGE_TITLE: &str = "Simple, Transparent Pricing";
pub const PAGE_SUBTITLE: &str =
    "Choose the plan that's right for your business, from small fleets to nationwide operations.";
pub const YEARLY_HINT: &str = "(Save 20%)";
pub const POPULAR_TAG: &str = "Most Popular";
pub const TRIAL_HEADLINE: &str = "Ready to optimize your fleet?";
pub const TRIAL_PITCH: &str =
    "Start your 14-day free trial and see the difference Last Mile can make.";
pub const TRIAL_BUTTON: &str = "Start Free Trial";

/// What a plan card shows for the current billing cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanView {
    #[serde(skip)]
    pub plan: &'static PricingPlan,
    pub name: &'static str,
    pub price: &'static str,
    pub suffix: Option<String>,
    pub discount: Option<&'static str>,
    pub route: &'static str,
}

impl PlanView {
    pub fn new(plan: &'static PricingPlan, cycle: BillingCycle) -> Self {
        let suffix = (!plan.is_custom()).then(|| format!("/{}", cycle.unit()));
        let discount = (cycle == BillingCycle::Yearly && !plan.is_custom())
            .then_some(plan.yearly_discount);

        Self {
            plan,
            name: plan.name,
            price: plan.price_for(cycle),
            suffix,
            discount,
            route: plan.cta_route().path(),
        }
    }

    /// Price with its per-unit suffix, e.g. `₹9,999/month` or `Custom`
    pub fn price_line(&self) -> String {
        match &self.suffix {
            Some(suffix) => format!("{}{}", self.price, suffix),
            None => self.price.to_string(),
        }
    }

    pub fn popular_tag(&self) -> Option<&'static str> {
        self.plan.popular.then_some(POPULAR_TAG)
    }

    pub fn cta(&self) -> Route {
        self.plan.cta_route()
    }
}

/// Pricing page state: the billing toggle is the only thing that changes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingPage {
    cycle: BillingCycle,
}

impl PricingPage {
    pub fn new(cycle: BillingCycle) -> Self {
        Self { cycle }
    }

    pub fn cycle(&self) -> BillingCycle {
        self.cycle
    }

    pub fn toggle(&mut self) {
        self.cycle = self.cycle.toggle();
    }

    /// Cards for every plan, in catalog order
    pub fn views(&self) -> Vec<PlanView> {
        plans()
            .iter()
            .map(|plan| PlanView::new(plan, self.cycle))
            .collect()
    }

    /// Route for the trailing free-trial button
    pub fn trial_route(&self) -> Route {
        Route::Auth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::find_plan;

    fn view(name: &str, cycle: BillingCycle) -> PlanView {
        PlanView::new(find_plan(name).unwrap(), cycle)
    }

    #[test]
    fn test_monthly_prices() {
        let starter = view("Starter", BillingCycle::Monthly);
        assert_eq!(starter.price, "₹9,999");
        assert_eq!(starter.price_line(), "₹9,999/month");
        assert_eq!(starter.discount, None);
        assert_eq!(starter.route, "/auth");
    }

    #[test]
    fn test_yearly_prices_show_discount() {
        let pro = view("Pro", BillingCycle::Yearly);
        assert_eq!(pro.price_line(), "₹249,990/year");
        assert_eq!(pro.discount, Some("₹49,998 savings"));
        assert_eq!(pro.popular_tag(), Some("Most Popular"));
    }

    #[test]
    fn test_enterprise_yearly_is_custom_without_discount() {
        let enterprise = view("Enterprise", BillingCycle::Yearly);
        assert_eq!(enterprise.price, "Custom");
        assert_eq!(enterprise.suffix, None);
        assert_eq!(enterprise.price_line(), "Custom");
        assert_eq!(enterprise.discount, None);
        assert_eq!(enterprise.cta(), Route::Contact);
        assert_eq!(enterprise.route, "/contact");
        assert_eq!(enterprise.popular_tag(), None);
    }

    #[test]
    fn test_toggle_back_restores_monthly_prices() {
        let mut page = PricingPage::default();
        let original = page.views();

        page.toggle();
        assert_eq!(page.cycle(), BillingCycle::Yearly);
        assert_ne!(page.views()[0].price, original[0].price);

        page.toggle();
        assert_eq!(page.cycle(), BillingCycle::Monthly);
        assert_eq!(page.views(), original);
    }

    #[test]
    fn test_trial_route() {
        let page = PricingPage::new(BillingCycle::Yearly);
        assert_eq!(page.trial_route().path(), "/auth");
        assert_eq!(page.views().len(), 3);
    }
}
