//! Command-line driver for typestr.
//!
//! `main.rs` only collects arguments and input lines; everything testable
//! lives here: option parsing ([`parse_args`]), running descriptors
//! through a [`Pool`](typestr_types::Pool) ([`run`]), and rendering
//! failures with a caret under the offending span ([`render_error`]).

use std::sync::Once;

mod options;
mod report;
mod run;

pub use options::{parse_args, CliOptions, UsageError, USAGE};
pub use report::render_error;
pub use run::{run, Report};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=typestr_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
