use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

/// Directive used when `RUST_LOG` is unset: pass progress from this crate, warnings from
/// dependencies.
const DEFAULT_DIRECTIVE: &str = "warn,apt_wedge_rs=info";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVE`].
fn channel_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Stage timings (span close events) are reported once the filter goes to `debug` or below.
fn wants_stage_timings(filter: &EnvFilter) -> bool {
    let directives = filter.to_string();
    directives.contains("debug") || directives.contains("trace")
}

/// Installs the global subscriber, writing to stderr.
pub fn init() {
    let env_filter = channel_filter();
    let span_events = if wants_stage_timings(&env_filter) {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_has_no_stage_timings() {
        assert!(!wants_stage_timings(&EnvFilter::new(DEFAULT_DIRECTIVE)));
    }

    #[test]
    fn test_debug_directive_enables_stage_timings() {
        assert!(wants_stage_timings(&EnvFilter::new("apt_wedge_rs=debug")));
        assert!(wants_stage_timings(&EnvFilter::new("trace")));
    }
}
