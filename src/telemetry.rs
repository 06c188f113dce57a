//! Telemetry helpers for hosts embedding `chart-hover`.
//!
//! The engine only emits `tracing` events (scale rebuilds, hover state
//! transitions, queue thinning). Hosts either call one of the helpers below or
//! install their own subscriber.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "chart_hover=info";

/// Installs a compact subscriber honoring `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with explicit fallback directives,
/// e.g. `"chart_hover=trace"` while debugging pointer coalescing.
#[must_use]
pub fn init_tracing_with_filter(fallback_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directives));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directives;
        false
    }
}
