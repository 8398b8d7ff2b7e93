//! Common test utilities and logging infrastructure
//!
//! The library logs through the `log` facade; tests install a `tracing`
//! subscriber whose `tracing-log` bridge captures those records too.
//!
//! # Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::init_test_logging;
//!
//! #[test]
//! fn my_test() {
//!     init_test_logging();
//!     // test code...
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG=debug` - Enable debug logging in tests
//! - `RUST_LOG=boxtable::layout=trace` - Module-specific tracing

#![allow(dead_code)]

use std::sync::Once;

use boxtable::Table;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initialize test logging infrastructure.
///
/// Output goes through the test writer, so it is captured by cargo test
/// unless `--nocapture` is used. Safe to call any number of times.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("boxtable=debug,test=info"));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_test_writer()
                    .with_ansi(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_target(true)
                    .compact(),
            )
            .try_init()
            .ok();
    });
}

/// Render `table` through its sink and return what was written.
pub fn rendered(mut table: Table<Vec<u8>>) -> String {
    table.render();
    let output = String::from_utf8(table.into_inner()).expect("table output is UTF-8");
    tracing::debug!(output = %output, "rendered table");
    output
}

/// Join lines with a trailing newline, the way tables are written.
pub fn lines(lines: &[&str]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}
