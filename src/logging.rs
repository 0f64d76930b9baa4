//! Logging abstraction
//!
//! Unified logging macros for the crate:
//! - Embedded (`embedded` feature): `defmt`
//! - Host unit tests: `println!`
//! - Host otherwise: no-op (arguments are still type-checked)
//!
//! Arguments must implement both `core::fmt::Display` and `defmt::Format`.

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "embedded")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "embedded"), test))]
        println!("[INFO] {}", format_args!($($arg)*));

        #[cfg(not(any(feature = "embedded", test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "embedded")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "embedded"), test))]
        println!("[WARN] {}", format_args!($($arg)*));

        #[cfg(not(any(feature = "embedded", test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "embedded")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "embedded"), test))]
        println!("[DEBUG] {}", format_args!($($arg)*));

        #[cfg(not(any(feature = "embedded", test)))]
        let _ = format_args!($($arg)*);
    }};
}
