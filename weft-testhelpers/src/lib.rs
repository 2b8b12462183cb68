#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

use std::sync::LazyLock;
use std::time::Instant;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "WEFT_LOG";

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

struct Uptime;

impl FormatTime for Uptime {
    fn format_time(&self, w: &mut Writer<'_>) -> core::fmt::Result {
        let elapsed = START_TIME.elapsed();
        write!(w, "{:4}.{:03}s", elapsed.as_secs(), elapsed.subsec_millis())
    }
}

/// Frames from the test harness and the panic machinery, hidden from backtraces.
fn is_harness_frame(name: &str) -> bool {
    const PREFIXES: &[&str] = &[
        "test::run_test",
        "test::__rust_begin_short_backtrace",
        "std::panicking::",
        "std::panic::",
        "core::panicking::",
        "std::thread::Builder::spawn_unchecked_",
        "std::sys::",
        "core::ops::function::FnOnce::call_once",
        "<alloc::boxed::Box<F,A> as core::ops::function::FnOnce<Args>>::call_once",
        "<core::panic::unwind_safe::AssertUnwindSafe<F> as core::ops::function::FnOnce<()>>::call_once",
        "__pthread",
    ];
    PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

/// Parse filter directives, falling back to everything at `TRACE`.
fn log_filter(directives: Option<&str>) -> Targets {
    directives
        .and_then(|s| s.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(tracing::Level::TRACE))
}

static SUBSCRIBER_INIT: LazyLock<()> = LazyLock::new(|| {
    let _ = *START_TIME;

    color_backtrace::BacktracePrinter::new()
        .verbosity(color_backtrace::Verbosity::Full)
        .add_frame_filter(Box::new(|frames| {
            frames.retain(|frame| match &frame.name {
                Some(name) => !is_harness_frame(name),
                None => true,
            })
        }))
        .install(Box::new(termcolor::StandardStream::stderr(
            termcolor::ColorChoice::AlwaysAnsi,
        )));

    let directives = std::env::var(LOG_ENV).ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_timer(Uptime)
                .with_target(true)
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .with(log_filter(directives.as_deref()))
        .try_init()
        .ok();
});

/// Set up colored backtraces and a tracing subscriber for tests.
///
/// Safe to call from every test: initialization happens exactly once per
/// process, whether tests run under `cargo test` or `cargo nextest run`.
pub fn setup() {
    #[allow(clippy::let_unit_value)]
    let _ = *SUBSCRIBER_INIT;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harness_frames_are_hidden() {
        assert!(is_harness_frame("std::panicking::begin_panic"));
        assert!(is_harness_frame("test::run_test::{{closure}}"));
        assert!(!is_harness_frame("weft_path::resolve::step_mut"));
    }

    #[test]
    fn bad_directives_fall_back_to_trace() {
        let filter = log_filter(Some("weft=loud"));
        assert!(filter.would_enable("weft", &tracing::Level::TRACE));
    }

    #[test]
    fn directives_narrow_the_filter() {
        let filter = log_filter(Some("weft=info"));
        assert!(filter.would_enable("weft", &tracing::Level::INFO));
        assert!(!filter.would_enable("weft", &tracing::Level::DEBUG));
    }
}
