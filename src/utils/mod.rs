pub mod debug;
pub mod format;
pub mod runtime;

pub use format::{format_amount, format_compact, format_currency, format_hours};
pub use runtime::{block_on, GLOBAL_RUNTIME};
