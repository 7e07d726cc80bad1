pub mod catalog;
pub mod faq;
pub mod types;
pub mod view;

pub use catalog::{find_plan, plans};
pub use faq::{faqs, FaqEntry};
pub use types::{BillingCycle, PricingPlan, Route};
pub use view::{PlanView, PricingPage};
