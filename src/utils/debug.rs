use once_cell::sync::Lazy;

/// `LASTMILE_DEBUG` read once per process
pub static DEBUG_MODE: Lazy<bool> =
    Lazy::new(|| flag_enabled(std::env::var("LASTMILE_DEBUG").ok().as_deref()));

/// `0`, `false`, `off` and blank leave tracing off
fn flag_enabled(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") => false,
        Some(v) => !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "off"),
    }
}

/// Trace to stderr with a `[lastmile]` prefix when `LASTMILE_DEBUG` is on
///
/// ```
/// lastmile::debug_println!("loaded {} records", 6);
/// ```
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if *$crate::utils::debug::DEBUG_MODE {
            eprintln!("[lastmile] {}", format_args!($($arg)*));
        }
    };
}

pub use debug_println;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_values() {
        assert!(!flag_enabled(None));
        assert!(!flag_enabled(Some(" ")));
        assert!(!flag_enabled(Some("0")));
        assert!(!flag_enabled(Some("FALSE")));
        assert!(!flag_enabled(Some("off")));
        assert!(flag_enabled(Some("1")));
        assert!(flag_enabled(Some("sources")));
    }
}
