use std::io::{self, IsTerminal};

use tracing::Level;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, filter, fmt};

/// Crate target prefix used to filter only library-originated logs.
pub const TARGET_PREFIX: &str = "ai_llm_service";

/// RFC3339 UTC timer implemented via `chrono`.
/// Example output: `2025-09-12T10:20:30Z`
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        let s = now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        w.write_str(&s)
    }
}

/// Returns `true` for events emitted by this crate.
pub fn is_library_target(target: &str) -> bool {
    target.starts_with(TARGET_PREFIX)
}

/// Build a **library-scoped** formatting layer that renders ONLY events emitted by this crate.
///
/// - RFC3339 UTC timestamps
/// - Compact single-line format with `file:line`
/// - Span close events (duration of instrumented calls)
/// - ANSI colors only when stdout is a terminal
///
/// Compose it in the binary next to the application layer, and exclude
/// [`is_library_target`] from that one so events are not printed twice.
pub fn layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let use_ansi = io::stdout().is_terminal();
    let only_this_crate = filter::filter_fn(|meta| is_library_target(meta.target()));

    fmt::layer()
        .with_timer(ChronoRfc3339Utc)
        .with_level(true)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(use_ansi)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .event_format(fmt::format().compact().with_source_location(true))
        .with_filter(only_this_crate)
}

/// Creates an `EnvFilter` from `RUST_LOG` or `default`, then applies a
/// per-crate level for this library.
///
/// `env_filter_with_level("info", Level::DEBUG)` shows INFO globally and
/// DEBUG for `ai_llm_service` only.
pub fn env_filter_with_level(default: &str, level: Level) -> EnvFilter {
    let base = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string());
    let lvl = level.as_str().to_lowercase();
    EnvFilter::new(format!("{base},{TARGET_PREFIX}={lvl}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_targets_match_prefix() {
        assert!(is_library_target("ai_llm_service::services::open_ai_service"));
        assert!(!is_library_target("api::routes"));
    }
}
