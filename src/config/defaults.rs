use super::types::{Config, SourceConfig};
use crate::pricing::BillingCycle;

pub const DEFAULT_CURRENCY: &str = "₹";

impl Default for Config {
    fn default() -> Self {
        Config {
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            default_billing: BillingCycle::Monthly,
            color: true,
            source: SourceConfig::default(),
        }
    }
}
