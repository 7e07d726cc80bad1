pub mod cli;
pub mod config;
pub mod core;
pub mod pricing;
pub mod savings;

#[cfg(feature = "tui")]
pub mod ui;
pub mod utils;
