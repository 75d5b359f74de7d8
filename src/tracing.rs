//! Logging setup
//!
//! Resolution decisions are logged at `trace` under `keyseq::translator`,
//! keymap and settings loading at `debug`/`info` under `keyseq::keymap` and
//! `keyseq::config`.
//!
//! Console output goes to stderr, so stdout only carries results. `RUST_LOG`
//! wins over `-v` when set:
//! - no flag: `warn`
//! - `-v`: `keyseq=info`
//! - `-vv`: `keyseq=debug`
//! - `-vvv`: `keyseq=trace`
//!
//! A debug-level copy goes to `logs/keyseq.log` under the config dir, rotated
//! daily.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE: &str = "keyseq.log";

/// Console filter directive for a `-v` count
fn console_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "keyseq=info",
        2 => "keyseq=debug",
        _ => "keyseq=trace",
    }
}

/// Install the console and file layers
pub fn init(verbosity: u8) {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_directive(verbosity)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity > 1)
        .without_time()
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => Some(
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(logs_dir, LOG_FILE))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("keyseq=debug")),
        ),
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
