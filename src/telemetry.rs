//! Opt-in tracing setup for hosts and the `render_bar_chart` tool.
//!
//! The library itself only emits `tracing` events. Installing a subscriber is
//! left to the host, or to these helpers when the `telemetry` feature is on.

/// Filter used when `RUST_LOG` is absent or unparsable.
pub const DEFAULT_TRACING_FILTER: &str = "warn";

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_TRACING_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
