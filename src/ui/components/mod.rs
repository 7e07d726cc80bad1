pub mod charts;
pub mod faq;
pub mod help;
pub mod plan_cards;
pub mod rewards;
pub mod summary_cards;
