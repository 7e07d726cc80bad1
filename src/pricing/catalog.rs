use super::PricingPlan;

static PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "Starter",
        monthly_price: "₹9,999",
        yearly_price: "₹99,990",
        yearly_discount: "₹19,998 savings",
        description: "Perfect for small businesses with limited routes",
        features: &[
            "Up to 5 vehicles",
            "Basic route optimization",
            "Daily traffic updates",
            "Email support",
            "7-day route history",
        ],
        popular: false,
        button_text: "Get Started",
    },
    PricingPlan {
        name: "Pro",
        monthly_price: "₹24,999",
        yearly_price: "₹249,990",
        yearly_discount: "₹49,998 savings",
        description: "For growing businesses with moderate logistics needs",
        features: &[
            "Up to 25 vehicles",
            "Advanced route optimization",
            "Real-time traffic integration",
            "Toll cost optimization",
            "Priority support",
            "30-day route history",
            "Basic analytics dashboard",
        ],
        popular: true,
        button_text: "Get Started",
    },
    PricingPlan {
        name: "Enterprise",
        monthly_price: "Custom",
        yearly_price: "Custom",
        yearly_discount: "Contact sales for special annual discounts",
        description: "For large fleets with complex routing requirements",
        features: &[
            "Unlimited vehicles",
            "Premium route optimization",
            "Real-time dynamic rerouting",
            "Advanced analytics & reporting",
            "Dedicated account manager",
            "API access",
            "Custom integrations",
            "90-day route history",
        ],
        popular: false,
        button_text: "Contact Sales",
    },
];

/// Plans in display order
pub fn plans() -> &'static [PricingPlan] {
    &PLANS
}

/// Case-insensitive lookup by plan name
pub fn find_plan(name: &str) -> Option<&'static PricingPlan> {
    PLANS
        .iter()
        .find(|plan| plan.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::Route;

    #[test]
    fn test_catalog_order_and_popular_flag() {
        let names: Vec<_> = plans().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Starter", "Pro", "Enterprise"]);
        assert_eq!(plans().iter().filter(|p| p.popular).count(), 1);
        assert!(find_plan("Pro").unwrap().popular);
    }

    #[test]
    fn test_find_plan() {
        assert_eq!(find_plan("enterprise").map(|p| p.name), Some("Enterprise"));
        assert_eq!(find_plan(" starter ").map(|p| p.name), Some("Starter"));
        assert!(find_plan("Platinum").is_none());
    }

    #[test]
    fn test_cta_routes() {
        assert_eq!(find_plan("Starter").unwrap().cta_route(), Route::Auth);
        assert_eq!(find_plan("Pro").unwrap().cta_route(), Route::Auth);
        assert_eq!(find_plan("Enterprise").unwrap().cta_route(), Route::Contact);
    }
}
