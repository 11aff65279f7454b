//! Tusk Expand - cfg evaluation and pattern stripping
//!
//! Runs after parsing and before name resolution. Given the active
//! configuration it decides which struct-pattern fields and rest markers
//! survive, and marks the rest for strip in the `tusk_ir` tree.
//!
//! # Example
//!
//! ```text
//! Point { x, #[cfg(windows)] y, #[cfg(test)] .. }
//!     with --cfg unix
//! Point { x }
//! ```

mod cfg;
mod strip;

use std::sync::Once;

pub use cfg::{CfgError, CfgOptions, CfgPredicate};
pub use strip::{strip_pattern, StripPass, StripStats};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=tusk_expand=debug` or `RUST_LOG=tusk_expand=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
