use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Pricing toggle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn toggle(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Yearly,
            BillingCycle::Yearly => BillingCycle::Monthly,
        }
    }

    /// Unit shown after a price: `month` / `year`
    pub fn unit(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "month",
            BillingCycle::Yearly => "year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Yearly => "Yearly",
        }
    }
}

impl std::fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Navigation targets for call-to-action buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Route {
    Auth,
    Contact,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Auth => "/auth",
            Route::Contact => "/contact",
        }
    }
}

/// Static plan descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingPlan {
    pub name: &'static str,
    pub monthly_price: &'static str,
    pub yearly_price: &'static str,
    pub yearly_discount: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
    pub button_text: &'static str,
}

impl PricingPlan {
    /// Enterprise is quoted per customer
    pub fn is_custom(&self) -> bool {
        self.name == "Enterprise"
    }

    pub fn price_for(&self, cycle: BillingCycle) -> &'static str {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Yearly => self.yearly_price,
        }
    }

    pub fn cta_route(&self) -> Route {
        if self.is_custom() {
            Route::Contact
        } else {
            Route::Auth
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(BillingCycle::Monthly.toggle(), BillingCycle::Yearly);
        assert_eq!(BillingCycle::Monthly.toggle().toggle(), BillingCycle::Monthly);
    }

    #[test]
    fn test_cycle_serde_lowercase() {
        #[derive(Deserialize)]
        struct Holder {
            cycle: BillingCycle,
        }
        let holder: Holder = toml::from_str("cycle = \"yearly\"").unwrap();
        assert_eq!(holder.cycle, BillingCycle::Yearly);
        assert_eq!(
            serde_json::to_string(&BillingCycle::Monthly).unwrap(),
            "\"monthly\""
        );
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Auth.path(), "/auth");
        assert_eq!(Route::Contact.path(), "/contact");
    }
}
